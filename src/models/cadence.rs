//! Chart cadence models

use chrono::Duration;
use serde::{Deserialize, Serialize};

use crate::utils::errors::TickerError;

/// Time granularity of the chart series
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Cadence {
    #[default]
    Hourly,
    Daily,
    Weekly,
}

/// Length and spacing of a series for one cadence
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CadenceSpec {
    pub cadence: Cadence,
    pub label: &'static str,
    pub points: usize,
    interval_secs: i64,
}

impl CadenceSpec {
    pub fn interval(&self) -> Duration {
        Duration::seconds(self.interval_secs)
    }
}

const HOUR: i64 = 60 * 60;
const DAY: i64 = 24 * HOUR;
const WEEK: i64 = 7 * DAY;

/// One row per cadence, in `Cadence` declaration order
const CADENCES: [CadenceSpec; 3] = [
    CadenceSpec { cadence: Cadence::Hourly, label: "Hourly", points: 10, interval_secs: HOUR },
    CadenceSpec { cadence: Cadence::Daily, label: "Daily", points: 7, interval_secs: DAY },
    CadenceSpec { cadence: Cadence::Weekly, label: "Weekly", points: 4, interval_secs: WEEK },
];

impl Cadence {
    pub fn spec(self) -> &'static CadenceSpec {
        &CADENCES[self as usize]
    }

    pub fn label(self) -> &'static str {
        self.spec().label
    }

    /// Parse a cadence label, case-insensitive
    pub fn parse(input: &str) -> Result<Cadence, TickerError> {
        CADENCES
            .iter()
            .find(|spec| spec.label.eq_ignore_ascii_case(input.trim()))
            .map(|spec| spec.cadence)
            .ok_or_else(|| TickerError::UnknownCadence(input.to_string()))
    }
}
