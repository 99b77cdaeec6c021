//! Everything the presentation layer shows for one refresh: the correlation
//! matrix plus per-symbol statistics and lag-1 autocorrelation.

use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{
    autocorrelation::lag_one_autocorrelation,
    config::EngineConfig,
    matrix::CorrelationMatrix,
    stats::Statistics,
    types::{Series, Symbol},
};

/// Snapshot of the engine output for a set of symbols
///
/// Recomputed from scratch on every call; callers wanting to skip redundant
/// work on identical input own that decision.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct CorrelationReport {
    /// When this report was computed
    pub generated_at: DateTime<Utc>,
    pub matrix: CorrelationMatrix,
    /// Mean and population standard deviation of each symbol's prices
    pub statistics: IndexMap<Symbol, Statistics>,
    /// Lag-1 autocorrelation of each symbol's price changes
    pub autocorrelation: IndexMap<Symbol, f64>,
}

impl CorrelationReport {
    pub fn build(series: &IndexMap<Symbol, Series>, config: &EngineConfig) -> Self {
        let matrix = CorrelationMatrix::build_with(series, config);

        let mut statistics = IndexMap::with_capacity(series.len());
        let mut autocorrelation = IndexMap::with_capacity(series.len());
        for (symbol, series) in series {
            let prices = series.prices();
            statistics.insert(symbol.clone(), Statistics::of(&prices));
            autocorrelation.insert(symbol.clone(), lag_one_autocorrelation(&prices));
        }

        debug!(symbols = series.len(), "built correlation report");

        Self {
            generated_at: Utc::now(),
            matrix,
            statistics,
            autocorrelation,
        }
    }

    /// Pairs ordered by absolute correlation, strongest first
    ///
    /// Each unordered pair appears once; self cells are excluded.
    pub fn strongest_pairs(&self) -> Vec<(Symbol, Symbol, f64)> {
        let symbols: Vec<&Symbol> = self.matrix.symbols().collect();
        let mut pairs: Vec<(Symbol, Symbol, f64)> = symbols
            .iter()
            .enumerate()
            .flat_map(|(i, a)| symbols[i + 1..].iter().map(move |b| (*a, *b)))
            .filter_map(|(a, b)| {
                self.matrix
                    .get(a, b)
                    .map(|value| (a.clone(), b.clone(), value))
            })
            .collect();

        pairs.sort_by(|x, y| y.2.abs().total_cmp(&x.2.abs()));
        pairs
    }
}
