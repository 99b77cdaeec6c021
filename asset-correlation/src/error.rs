use crate::types::Symbol;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Failure to obtain a series from a [`PriceSource`](crate::source::PriceSource).
///
/// Never reaches the statistics engine: [`gather_series`](crate::source::gather_series)
/// turns it into an empty series.
#[derive(Debug, Clone, Eq, PartialEq, Hash, Deserialize, Serialize, Error)]
pub enum SourceError {
    #[error("no price data available for symbol: {0}")]
    UnknownSymbol(Symbol),

    #[error("failed to fetch prices for {symbol}: {reason}")]
    Fetch { symbol: Symbol, reason: String },

    #[error("failed to decode price samples: {0}")]
    Decode(String),
}

/// All errors generated in `asset-correlation` outside the fail-soft engine.
#[derive(Debug, Clone, Eq, PartialEq, Hash, Deserialize, Serialize, Error)]
pub enum CorrelationError {
    #[error("invalid configuration {key}={value}: {reason}")]
    InvalidConfig {
        key: String,
        value: String,
        reason: String,
    },

    #[error("SourceError: {0}")]
    Source(#[from] SourceError),

    #[error("IoError: {0}")]
    Io(String),
}

impl From<std::io::Error> for CorrelationError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value.to_string())
    }
}

impl From<serde_json::Error> for SourceError {
    fn from(value: serde_json::Error) -> Self {
        Self::Decode(value.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        struct TestCase {
            input: CorrelationError,
            expected: &'static str,
        }

        let tests = vec![
            TestCase {
                // TC0: unknown symbol wrapped as CorrelationError::Source
                input: CorrelationError::from(SourceError::UnknownSymbol("DOGE".into())),
                expected: "SourceError: no price data available for symbol: DOGE",
            },
            TestCase {
                // TC1: invalid config
                input: CorrelationError::InvalidConfig {
                    key: "BUCKET_SECS".to_string(),
                    value: "0".to_string(),
                    reason: "must be a positive number of seconds".to_string(),
                },
                expected: "invalid configuration BUCKET_SECS=0: must be a positive number of seconds",
            },
            TestCase {
                // TC2: io error
                input: CorrelationError::from(std::io::Error::new(
                    std::io::ErrorKind::NotFound,
                    "prices.json missing",
                )),
                expected: "IoError: prices.json missing",
            },
        ];

        for (index, test) in tests.into_iter().enumerate() {
            assert_eq!(test.input.to_string(), test.expected, "TC{} failed", index);
        }
    }

    #[test]
    fn test_decode_error_from_serde_json() {
        let error = serde_json::from_str::<Vec<u8>>("not json").unwrap_err();
        assert!(matches!(SourceError::from(error), SourceError::Decode(_)));
    }
}
