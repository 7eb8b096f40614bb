use chrono::{DateTime, Utc};
use rand::Rng;
use serenity::builder::CreateEmbed;

use crate::config::Config;
use crate::models::{Direction, Instrument, Quote, TickerRequest, TickerSnapshot};
use crate::services::{alert_service, price_service, series_service};

/// Reference prices the headline direction is measured against
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReferencePrices {
    pub gold: f64,
    pub silver: f64,
}

impl ReferencePrices {
    pub fn get(&self, instrument: Instrument) -> f64 {
        match instrument {
            Instrument::Gold => self.gold,
            Instrument::Silver => self.silver,
        }
    }
}

impl From<&Config> for ReferencePrices {
    fn from(config: &Config) -> Self {
        ReferencePrices {
            gold: config.gold_reference_price,
            silver: config.silver_reference_price,
        }
    }
}

/// Run one ticker refresh: sample, classify, alert, and generate the chart series
pub fn build_snapshot<R: Rng + ?Sized>(
    request: &TickerRequest,
    references: &ReferencePrices,
    rng: &mut R,
    now: DateTime<Utc>,
) -> TickerSnapshot {
    let prices = price_service::sample_all(rng);

    let quotes = Instrument::ALL
        .into_iter()
        .map(|instrument| {
            let price = prices.get(instrument);
            let reference = references.get(instrument);
            Quote {
                instrument,
                price,
                reference,
                direction: Direction::classify(price, reference),
            }
        })
        .collect();

    let alerts = alert_service::evaluate(&prices, request.alerts.as_ref());
    let series = series_service::generate(request.cadence, now, rng);

    TickerSnapshot {
        generated_at: now,
        cadence: request.cadence,
        quotes,
        series,
        alerts_enabled: request.alerts.is_some(),
        alerts,
    }
}

pub fn create_header_embed(snapshot: &TickerSnapshot) -> CreateEmbed {
    CreateEmbed::default()
        .title("Gold and Silver Price Ticker")
        .description(format!("Current time: {}", snapshot.current_time()))
        .color(0xffd700)
}

/// One embed per instrument, colored by direction
pub fn create_quote_embed(quote: &Quote) -> CreateEmbed {
    CreateEmbed::default()
        .description(quote.headline())
        .field(
            "Change",
            format!(
                "{} vs ${:.2} ({})",
                quote.direction.glyph(),
                quote.reference,
                quote.direction.color_name()
            ),
            true,
        )
        .color(quote.direction.embed_color())
}

pub fn create_alerts_embed(snapshot: &TickerSnapshot) -> Option<CreateEmbed> {
    if snapshot.alerts.is_empty() {
        return None;
    }

    let lines: Vec<String> = snapshot.alerts.iter().map(|a| a.message()).collect();
    Some(
        CreateEmbed::default()
            .title("🔔 Price Alerts")
            .description(lines.join("\n"))
            .color(0xffa500),
    )
}

/// Chart embed pointing at an attachment sent with the same message
pub fn create_chart_embed(snapshot: &TickerSnapshot, attachment_name: &str) -> CreateEmbed {
    CreateEmbed::default()
        .title("Price Movement Over Time")
        .description(format!("Time frame: {}", snapshot.cadence.label()))
        .image(format!("attachment://{}", attachment_name))
        .color(0xc0c0c0)
}
