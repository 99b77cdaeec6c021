//! Descriptive statistics over price sequences
//!
//! Population statistics (divide by N). Empty input yields 0.0 rather than NaN.

use serde::{Deserialize, Serialize};

/// Arithmetic mean, 0.0 for an empty slice
pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Population standard deviation: sqrt(mean((x - mean)^2))
pub fn std_dev(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }

    let mean = mean(values);
    let variance = values
        .iter()
        .map(|&x| {
            let diff = x - mean;
            diff * diff
        })
        .sum::<f64>()
        / values.len() as f64;

    variance.sqrt()
}

/// Mean and standard deviation of one series
///
/// Recomputed on demand; nothing is cached between calls.
#[derive(Debug, Clone, Copy, Default, PartialEq, Deserialize, Serialize)]
pub struct Statistics {
    pub mean: f64,
    pub std_dev: f64,
}

impl Statistics {
    pub fn of(values: &[f64]) -> Self {
        Self {
            mean: mean(values),
            std_dev: std_dev(values),
        }
    }
}
