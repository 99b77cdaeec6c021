/// Asset Correlation - Statistics Engine
///
/// Pairwise Pearson correlation between asset price series, plus the single
/// series statistics shown next to the matrix:
/// - Descriptive statistics (mean, population standard deviation)
/// - Timestamp-bucket alignment of independently fetched series
/// - Symmetric correlation matrix over N symbols
/// - Lag-1 autocorrelation of price changes
///
/// Every engine function is pure and fail-soft: empty, mismatched or constant
/// input yields `0.0`, never an error or `NaN`.
pub mod align;
pub mod autocorrelation;
pub mod config;
pub mod correlation;
pub mod error;
pub mod matrix;
pub mod report;
pub mod source;
pub mod stats;
pub mod types;

// Re-export commonly used types for convenience
pub use types::{AlignedPair, PriceSample, Series, Symbol};

pub use align::{align, align_with, TimeBucket};
pub use autocorrelation::lag_one_autocorrelation;
pub use config::EngineConfig;
pub use correlation::{correlate, correlate_pairs};
pub use error::{CorrelationError, SourceError};
pub use matrix::CorrelationMatrix;
pub use report::CorrelationReport;
pub use source::{gather_series, PriceSource, StaticSource};
pub use stats::{mean, std_dev, Statistics};
