//! Error types for the market core
//!
//! Error taxonomy using thiserror

use thiserror::Error;

/// Errors produced by market-state mutations.
///
/// Reads never fail: an uninitialized series or book reads back as an
/// empty snapshot rather than an error.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MarketError {
    /// A write carried a non-positive or otherwise unusable parameter.
    /// The rejected call leaves state untouched.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// A price point arrived with a timestamp earlier than the last
    /// recorded observation.
    #[error("out-of-order timestamp: {timestamp} precedes last recorded {last}")]
    OutOfOrder { timestamp: i64, last: i64 },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_input_display() {
        let err = MarketError::InvalidInput("price must be positive".to_string());
        assert_eq!(err.to_string(), "invalid input: price must be positive");
    }

    #[test]
    fn test_out_of_order_display() {
        let err = MarketError::OutOfOrder {
            timestamp: 5,
            last: 10,
        };
        assert!(err.to_string().contains("5 precedes last recorded 10"));
    }
}
