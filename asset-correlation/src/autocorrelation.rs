//! Lag-1 autocorrelation of price changes
//!
//! Positive = a move tends to be followed by a move in the same direction
//! (momentum), negative = mean reversion.

use crate::correlation::correlate;

/// Correlation between consecutive first differences of a price series
/// Returns 0.0 when fewer than two differences exist
pub fn lag_one_autocorrelation(prices: &[f64]) -> f64 {
    let diffs: Vec<f64> = prices.windows(2).map(|w| w[1] - w[0]).collect();
    if diffs.len() <= 1 {
        return 0.0;
    }

    let current = &diffs[..diffs.len() - 1];
    let next = &diffs[1..];
    correlate(current, next)
}
