use std::io;
use thiserror::Error;

use crate::models::Instrument;

/// Errors raised while building or rendering a ticker
#[derive(Debug, Error)]
pub enum TickerError {
    #[error("Unknown cadence '{0}'. Supported: hourly, daily, weekly")]
    UnknownCadence(String),
    #[error("'{0}' is not a valid number")]
    InvalidNumber(String),
    #[error("{instrument} alert threshold {value} is out of range ({min} - {max})")]
    ThresholdOutOfRange {
        instrument: Instrument,
        value: f64,
        min: f64,
        max: f64,
    },
    #[error("Unexpected argument '{0}'")]
    UnexpectedArgument(String),
    #[error("Chart error: {0}")]
    Chart(String),
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_threshold_message_names_instrument_and_range() {
        let err = TickerError::ThresholdOutOfRange {
            instrument: Instrument::Silver,
            value: 60.0,
            min: 20.0,
            max: 50.0,
        };
        assert_eq!(
            err.to_string(),
            "Silver alert threshold 60 is out of range (20 - 50)"
        );
    }

    #[test]
    fn test_unknown_cadence_message() {
        let err = TickerError::UnknownCadence("monthly".to_string());
        assert!(err.to_string().contains("'monthly'"));
    }
}
