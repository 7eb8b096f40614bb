use crate::models::{AlertSettings, Instrument, MetalPrices, PriceAlert};

/// Alerts for every instrument whose sample reached its threshold (inclusive).
/// Returns nothing when alerting is disabled.
pub fn evaluate(prices: &MetalPrices, settings: Option<&AlertSettings>) -> Vec<PriceAlert> {
    let Some(settings) = settings else {
        return Vec::new();
    };

    let alerts: Vec<PriceAlert> = Instrument::ALL
        .into_iter()
        .filter_map(|instrument| {
            let price = prices.get(instrument);
            let threshold = settings.threshold(instrument);
            (price >= threshold).then_some(PriceAlert {
                instrument,
                price,
                threshold,
            })
        })
        .collect();

    if !alerts.is_empty() {
        tracing::debug!("{} price alert(s) triggered", alerts.len());
    }
    alerts
}
