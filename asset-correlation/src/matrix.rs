//! Symmetric correlation matrix over N symbols
//!
//! Only the upper triangle is computed; each value is mirrored into the lower
//! triangle so `matrix[a][b] == matrix[b][a]` holds exactly.

use indexmap::IndexMap;
use itertools::Itertools;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{
    align::align_with,
    config::EngineConfig,
    correlation::correlate_pairs,
    types::{Series, Symbol},
};

/// Correlation of a symbol with itself
pub const SELF_CORRELATION: f64 = 1.0;

/// Square matrix keyed by symbol, rows and columns in input order
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(transparent)]
pub struct CorrelationMatrix(IndexMap<Symbol, IndexMap<Symbol, f64>>);

impl CorrelationMatrix {
    /// Build with one-minute alignment
    pub fn build(series: &IndexMap<Symbol, Series>) -> Self {
        Self::build_with(series, &EngineConfig::default())
    }

    /// Build with the given configuration
    ///
    /// Self cells are always 1.0. Off-diagonal cells align the two series and
    /// correlate the shared buckets; no shared bucket (including an empty
    /// series) gives 0.0.
    pub fn build_with(series: &IndexMap<Symbol, Series>, config: &EngineConfig) -> Self {
        let mut matrix = Self::zeroed(series.keys());

        for symbol in series.keys() {
            matrix.set(symbol, symbol, SELF_CORRELATION);
        }

        for ((symbol_a, series_a), (symbol_b, series_b)) in series.iter().tuple_combinations() {
            let pairs = align_with(series_a, series_b, config.bucket_width);
            let value = if pairs.is_empty() {
                debug!(
                    %symbol_a,
                    %symbol_b,
                    len_a = series_a.len(),
                    len_b = series_b.len(),
                    "no shared time buckets, correlation defaults to zero"
                );
                0.0
            } else {
                correlate_pairs(&pairs)
            };

            debug!(%symbol_a, %symbol_b, aligned = pairs.len(), correlation = value, "computed pair");

            matrix.set(symbol_a, symbol_b, value);
            matrix.set(symbol_b, symbol_a, value);
        }

        matrix
    }

    /// Every cell present and 0.0
    fn zeroed<'a>(symbols: impl Iterator<Item = &'a Symbol> + Clone) -> Self {
        let cells = symbols
            .clone()
            .map(|row| {
                let columns: IndexMap<Symbol, f64> =
                    symbols.clone().map(|column| (column.clone(), 0.0)).collect();
                (row.clone(), columns)
            })
            .collect();
        Self(cells)
    }

    fn set(&mut self, row: &Symbol, column: &Symbol, value: f64) {
        if let Some(cell) = self.0.get_mut(row).and_then(|columns| columns.get_mut(column)) {
            *cell = value;
        }
    }

    /// Correlation between two symbols, None if either is not in the matrix
    pub fn get(&self, a: &str, b: &str) -> Option<f64> {
        self.0.get(a).and_then(|columns| columns.get(b)).copied()
    }

    /// Row for one symbol, columns in symbol order
    pub fn row(&self, symbol: &str) -> Option<&IndexMap<Symbol, f64>> {
        self.0.get(symbol)
    }

    pub fn symbols(&self) -> impl Iterator<Item = &Symbol> {
        self.0.keys()
    }

    pub fn iter(&self) -> indexmap::map::Iter<'_, Symbol, IndexMap<Symbol, f64>> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
