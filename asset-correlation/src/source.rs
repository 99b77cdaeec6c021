//! Data source seam
//!
//! Fetching lives outside the engine. A source either yields a time ordered
//! series per symbol or fails; failures become empty series so the engine
//! renders them as "no meaningful statistic" without special-casing.

use async_trait::async_trait;
use futures::future::join_all;
use indexmap::{IndexMap, IndexSet};
use tracing::{debug, warn};

use crate::{
    error::SourceError,
    types::{PriceSample, Series, Symbol},
};

/// Supplier of price series, one symbol at a time
#[async_trait]
pub trait PriceSource {
    async fn fetch(&self, symbol: &Symbol) -> Result<Series, SourceError>;
}

/// Fetch every symbol concurrently, preserving the requested order
///
/// A failed fetch is logged and replaced with an empty series. Duplicate
/// symbols are fetched once.
pub async fn gather_series<Source>(source: &Source, symbols: &[Symbol]) -> IndexMap<Symbol, Series>
where
    Source: PriceSource + Sync + ?Sized,
{
    let unique: IndexSet<&Symbol> = symbols.iter().collect();

    let results = join_all(unique.iter().map(|symbol| source.fetch(symbol))).await;

    unique
        .into_iter()
        .zip(results)
        .map(|(symbol, result)| {
            let series = match result {
                Ok(series) => {
                    debug!(%symbol, samples = series.len(), "fetched price series");
                    series
                }
                Err(error) => {
                    warn!(%symbol, %error, "price fetch failed, using empty series");
                    Series::empty()
                }
            };
            (symbol.clone(), series)
        })
        .collect()
}

/// In-memory source over already fetched samples
#[derive(Debug, Clone, Default)]
pub struct StaticSource {
    series: IndexMap<Symbol, Series>,
}

impl StaticSource {
    pub fn new(series: IndexMap<Symbol, Series>) -> Self {
        Self { series }
    }

    /// Group a flat list of samples by symbol
    ///
    /// Symbols keep first-seen order and samples keep their relative order.
    pub fn from_samples(samples: impl IntoIterator<Item = PriceSample>) -> Self {
        let mut grouped: IndexMap<Symbol, Vec<PriceSample>> = IndexMap::new();
        for sample in samples {
            grouped.entry(sample.symbol.clone()).or_default().push(sample);
        }

        Self::new(
            grouped
                .into_iter()
                .map(|(symbol, samples)| (symbol, Series::from(samples)))
                .collect(),
        )
    }

    /// Parse a JSON array of samples, e.g. `[{"symbol":"BTC","price":1.0,"timestamp":"..."}]`
    pub fn from_json(json: &str) -> Result<Self, SourceError> {
        let samples: Vec<PriceSample> = serde_json::from_str(json)?;
        Ok(Self::from_samples(samples))
    }

    /// Symbols with data, in first-seen order
    pub fn symbols(&self) -> Vec<Symbol> {
        self.series.keys().cloned().collect()
    }
}

#[async_trait]
impl PriceSource for StaticSource {
    async fn fetch(&self, symbol: &Symbol) -> Result<Series, SourceError> {
        self.series
            .get(symbol)
            .cloned()
            .ok_or_else(|| SourceError::UnknownSymbol(symbol.clone()))
    }
}
