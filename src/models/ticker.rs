//! Ticker dashboard models

use chrono::{DateTime, Utc};
use serde::Serialize;

use super::{AlertSettings, Cadence, Direction, Instrument, PriceAlert, SeriesPair};

/// One spot sample per instrument
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MetalPrices {
    pub gold: f64,
    pub silver: f64,
}

impl MetalPrices {
    pub fn get(&self, instrument: Instrument) -> f64 {
        match instrument {
            Instrument::Gold => self.gold,
            Instrument::Silver => self.silver,
        }
    }
}

/// What the user asked the dashboard for
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TickerRequest {
    pub cadence: Cadence,
    /// `None` when alerting is disabled
    pub alerts: Option<AlertSettings>,
}

/// Headline price for one instrument
#[derive(Debug, Clone, Serialize)]
pub struct Quote {
    pub instrument: Instrument,
    pub price: f64,
    pub reference: f64,
    pub direction: Direction,
}

impl Quote {
    /// e.g. "### **Gold (XAU)**: $1805.12 ▲"
    pub fn headline(&self) -> String {
        format!(
            "### **{}**: ${:.2} {}",
            self.instrument.label(),
            self.price,
            self.direction.glyph()
        )
    }
}

/// Everything rendered for one ticker request
#[derive(Debug, Clone, Serialize)]
pub struct TickerSnapshot {
    pub generated_at: DateTime<Utc>,
    pub cadence: Cadence,
    pub quotes: Vec<Quote>,
    pub series: SeriesPair,
    pub alerts_enabled: bool,
    pub alerts: Vec<PriceAlert>,
}

impl TickerSnapshot {
    pub fn current_time(&self) -> String {
        self.generated_at.format("%Y-%m-%d %H:%M:%S").to_string()
    }
}
