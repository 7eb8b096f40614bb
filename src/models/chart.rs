//! Chart series models

use chrono::{DateTime, Utc};
use serde::Serialize;

use super::{Cadence, Instrument};

/// A single data point on a price chart
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PricePoint {
    pub timestamp: DateTime<Utc>,
    pub price: f64,
}

/// Ordered points for one instrument
#[derive(Debug, Clone, Serialize)]
pub struct PriceSeries {
    pub instrument: Instrument,
    pub points: Vec<PricePoint>,
}

impl PriceSeries {
    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn prices(&self) -> impl Iterator<Item = f64> + '_ {
        self.points.iter().map(|p| p.price)
    }
}

/// Gold and silver series generated together for one cadence
#[derive(Debug, Clone, Serialize)]
pub struct SeriesPair {
    pub cadence: Cadence,
    pub gold: PriceSeries,
    pub silver: PriceSeries,
}

impl SeriesPair {
    pub fn iter(&self) -> impl Iterator<Item = &PriceSeries> {
        [&self.gold, &self.silver].into_iter()
    }

    pub fn len(&self) -> usize {
        self.gold.len()
    }
}
