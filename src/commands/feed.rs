use chrono::Utc;
use serenity::builder::{CreateAttachment, CreateMessage};
use serenity::model::channel::Message;
use serenity::prelude::Context;

use crate::models::TickerSnapshot;
use crate::services::ticker_service::{self, ReferencePrices};
use crate::utils::TickerError;

/// Pretty JSON document for widget consumers
pub fn snapshot_json(snapshot: &TickerSnapshot) -> Result<String, TickerError> {
    Ok(serde_json::to_string_pretty(snapshot)?)
}

/// Send a ticker snapshot as a JSON attachment
pub async fn execute(ctx: &Context, msg: &Message, args: &[&str]) -> Result<(), String> {
    tracing::info!("🧾 Feed command called with args: {:?}", args);

    let request = super::ticker::parse_request(args).map_err(|e| e.to_string())?;
    let config = super::load_config(ctx).await?;
    let references = ReferencePrices::from(config.as_ref());

    let snapshot = ticker_service::build_snapshot(&request, &references, &mut rand::thread_rng(), Utc::now());
    let json = snapshot_json(&snapshot).map_err(|e| e.to_string())?;

    let message = CreateMessage::default()
        .content(format!("Ticker snapshot generated at {}", snapshot.current_time()))
        .add_file(CreateAttachment::bytes(json.into_bytes(), "ticker.json"));

    msg.channel_id
        .send_message(ctx, message)
        .await
        .map_err(|e| e.to_string())?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{AlertSettings, Cadence, TickerRequest};
    use chrono::TimeZone;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_snapshot_json_shape() {
        let request = TickerRequest {
            cadence: Cadence::Weekly,
            alerts: Some(AlertSettings::new(1500.0, 50.0).unwrap()),
        };
        let references = ReferencePrices { gold: 1800.0, silver: 25.0 };
        let now = Utc.with_ymd_and_hms(2024, 6, 14, 16, 5, 9).unwrap();
        let snapshot = ticker_service::build_snapshot(&request, &references, &mut StdRng::seed_from_u64(3), now);

        let json = snapshot_json(&snapshot).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["cadence"], "weekly");
        assert_eq!(value["quotes"][0]["instrument"], "gold");
        assert_eq!(value["quotes"][1]["instrument"], "silver");
        assert_eq!(value["series"]["gold"]["points"].as_array().unwrap().len(), 4);
        assert_eq!(value["alerts_enabled"], true);
        // gold always clears 1500, silver never reaches 50
        assert_eq!(value["alerts"].as_array().unwrap().len(), 1);
        assert_eq!(value["alerts"][0]["instrument"], "gold");
    }
}
