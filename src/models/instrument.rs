//! Tracked precious metals and their fixed simulation constants

use std::fmt;
use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};

/// A tradable commodity shown on the ticker
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Instrument {
    Gold,
    Silver,
}

impl Instrument {
    /// Display order on the ticker
    pub const ALL: [Instrument; 2] = [Instrument::Gold, Instrument::Silver];

    pub fn name(self) -> &'static str {
        match self {
            Instrument::Gold => "Gold",
            Instrument::Silver => "Silver",
        }
    }

    /// ISO 4217 commodity code
    pub fn symbol(self) -> &'static str {
        match self {
            Instrument::Gold => "XAU",
            Instrument::Silver => "XAG",
        }
    }

    /// Centre of the spot price simulation
    pub fn base_price(self) -> f64 {
        match self {
            Instrument::Gold => 1800.00,
            Instrument::Silver => 25.00,
        }
    }

    /// Maximum distance a spot sample may drift from the base price
    pub fn half_width(self) -> f64 {
        match self {
            Instrument::Gold => 10.00,
            Instrument::Silver => 0.50,
        }
    }

    /// Closed interval every spot sample falls in
    pub fn sample_bounds(self) -> RangeInclusive<f64> {
        let base = self.base_price();
        let half_width = self.half_width();
        (base - half_width)..=(base + half_width)
    }

    /// Closed interval every chart point falls in.
    /// Independent of `sample_bounds`: gold charts sit above the spot band.
    pub fn chart_bounds(self) -> RangeInclusive<f64> {
        match self {
            Instrument::Gold => 1800.0..=1850.0,
            Instrument::Silver => 24.5..=25.5,
        }
    }

    /// Accepted alert thresholds
    pub fn threshold_bounds(self) -> RangeInclusive<f64> {
        match self {
            Instrument::Gold => 1500.0..=2000.0,
            Instrument::Silver => 20.0..=50.0,
        }
    }

    pub fn default_threshold(self) -> f64 {
        match self {
            Instrument::Gold => 1850.0,
            Instrument::Silver => 26.0,
        }
    }

    /// Headline label, e.g. "Gold (XAU)"
    pub fn label(self) -> String {
        format!("{} ({})", self.name(), self.symbol())
    }

    /// Legend entry on the chart
    pub fn series_label(self) -> String {
        format!("{} Price", self.name())
    }
}

impl fmt::Display for Instrument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
