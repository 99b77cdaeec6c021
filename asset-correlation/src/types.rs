/// Core data types for price series
///
/// Samples arrive from an external data source already time ordered; the
/// engine never mutates or re-sorts them.
use chrono::{DateTime, Utc};
use derive_more::{Constructor, From};
use serde::{Deserialize, Serialize};
use smol_str::SmolStr;

/// Asset ticker (e.g., "BTC", "ETH", "SPY")
pub type Symbol = SmolStr;

/// A single observed price for one symbol
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize, Constructor)]
pub struct PriceSample {
    /// Ticker the price belongs to
    pub symbol: Symbol,
    /// Observed price
    pub price: f64,
    /// Observation time (ISO-8601 on the wire)
    pub timestamp: DateTime<Utc>,
}

/// Time ordered samples for one symbol
///
/// Ordering is the caller's responsibility: alignment pairs by time bucket,
/// but bucket iteration order follows the order samples were supplied in.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize, From)]
#[serde(transparent)]
pub struct Series(Vec<PriceSample>);

impl Series {
    /// Series with no samples, used to signal "no data" from a source
    pub fn empty() -> Self {
        Self::default()
    }

    /// Prices in delivery order
    pub fn prices(&self) -> Vec<f64> {
        self.0.iter().map(|sample| sample.price).collect()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, PriceSample> {
        self.0.iter()
    }

    pub fn samples(&self) -> &[PriceSample] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Most recent sample, if any
    pub fn latest(&self) -> Option<&PriceSample> {
        self.0.last()
    }
}

impl FromIterator<PriceSample> for Series {
    fn from_iter<I: IntoIterator<Item = PriceSample>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a Series {
    type Item = &'a PriceSample;
    type IntoIter = std::slice::Iter<'a, PriceSample>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Two prices observed in the same time bucket
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize, Constructor)]
pub struct AlignedPair {
    pub value1: f64,
    pub value2: f64,
}
