/// Engine configuration
///
/// Defaults match the one-minute alignment used by the presentation layer.
use chrono::TimeDelta;

use crate::{align::DEFAULT_BUCKET_WIDTH, error::CorrelationError};

/// Env var overriding the alignment bucket width, in whole seconds
pub const BUCKET_SECS_ENV: &str = "BUCKET_SECS";

/// Configuration for matrix and report construction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EngineConfig {
    /// Width of the time bucket used to join two series
    pub bucket_width: TimeDelta,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            bucket_width: DEFAULT_BUCKET_WIDTH,
        }
    }
}

impl EngineConfig {
    /// Read overrides from the environment, falling back to defaults
    pub fn from_env() -> Result<Self, CorrelationError> {
        match std::env::var(BUCKET_SECS_ENV) {
            Ok(value) => Self::default().with_bucket_secs(&value),
            Err(_) => Ok(Self::default()),
        }
    }

    /// Set bucket width, which must be at least one millisecond
    pub fn with_bucket_width(mut self, width: TimeDelta) -> Result<Self, CorrelationError> {
        if width.num_milliseconds() < 1 {
            return Err(CorrelationError::InvalidConfig {
                key: "bucket_width".to_string(),
                value: width.to_string(),
                reason: "must be at least one millisecond".to_string(),
            });
        }

        self.bucket_width = width;
        Ok(self)
    }

    /// Parse and set bucket width from a whole number of seconds
    pub fn with_bucket_secs(self, value: &str) -> Result<Self, CorrelationError> {
        let invalid = |reason: &str| CorrelationError::InvalidConfig {
            key: BUCKET_SECS_ENV.to_string(),
            value: value.to_string(),
            reason: reason.to_string(),
        };

        let secs = value
            .trim()
            .parse::<i64>()
            .map_err(|_| invalid("not an integer"))?;
        if secs <= 0 {
            return Err(invalid("must be a positive number of seconds"));
        }

        let width = TimeDelta::try_seconds(secs).ok_or_else(|| invalid("out of range"))?;
        self.with_bucket_width(width)
    }
}
