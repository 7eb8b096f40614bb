//! Price alert models

use serde::Serialize;

use super::Instrument;
use crate::utils::errors::TickerError;

/// Thresholds used when alerting is enabled
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AlertSettings {
    pub gold_threshold: f64,
    pub silver_threshold: f64,
}

impl Default for AlertSettings {
    fn default() -> Self {
        AlertSettings {
            gold_threshold: Instrument::Gold.default_threshold(),
            silver_threshold: Instrument::Silver.default_threshold(),
        }
    }
}

impl AlertSettings {
    /// Build settings, rejecting thresholds outside each instrument's accepted range
    pub fn new(gold_threshold: f64, silver_threshold: f64) -> Result<Self, TickerError> {
        validate_threshold(Instrument::Gold, gold_threshold)?;
        validate_threshold(Instrument::Silver, silver_threshold)?;
        Ok(AlertSettings {
            gold_threshold,
            silver_threshold,
        })
    }

    pub fn threshold(&self, instrument: Instrument) -> f64 {
        match instrument {
            Instrument::Gold => self.gold_threshold,
            Instrument::Silver => self.silver_threshold,
        }
    }
}

fn validate_threshold(instrument: Instrument, value: f64) -> Result<(), TickerError> {
    let bounds = instrument.threshold_bounds();
    if bounds.contains(&value) {
        Ok(())
    } else {
        Err(TickerError::ThresholdOutOfRange {
            instrument,
            value,
            min: *bounds.start(),
            max: *bounds.end(),
        })
    }
}

/// A sample that met or exceeded its threshold
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PriceAlert {
    pub instrument: Instrument,
    pub price: f64,
    pub threshold: f64,
}

impl PriceAlert {
    pub fn message(&self) -> String {
        format!(
            "**{} Alert**: Price has reached ${:.2}!",
            self.instrument.name(),
            self.price
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = AlertSettings::default();
        assert_eq!(settings.gold_threshold, 1850.0);
        assert_eq!(settings.silver_threshold, 26.0);
    }

    #[test]
    fn test_range_edges_are_accepted() {
        assert!(AlertSettings::new(1500.0, 20.0).is_ok());
        assert!(AlertSettings::new(2000.0, 50.0).is_ok());
    }

    #[test]
    fn test_out_of_range_is_rejected() {
        assert!(matches!(
            AlertSettings::new(2000.5, 26.0),
            Err(TickerError::ThresholdOutOfRange { instrument: Instrument::Gold, .. })
        ));
        assert!(matches!(
            AlertSettings::new(1850.0, 19.99),
            Err(TickerError::ThresholdOutOfRange { instrument: Instrument::Silver, .. })
        ));
        assert!(AlertSettings::new(f64::NAN, 26.0).is_err());
    }

    #[test]
    fn test_message() {
        let alert = PriceAlert {
            instrument: Instrument::Gold,
            price: 1850.0,
            threshold: 1850.0,
        };
        assert_eq!(alert.message(), "**Gold Alert**: Price has reached $1850.00!");
    }
}
