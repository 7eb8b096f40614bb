use chrono::Utc;
use serenity::builder::{CreateEmbed, CreateMessage};
use serenity::model::channel::Message;
use serenity::prelude::Context;

use crate::models::{Cadence, SeriesPair};
use crate::services::series_service;
use crate::utils::Table;

/// Render both series as one table row per timestamp
pub fn series_table(series: &SeriesPair) -> String {
    let time_format = match series.cadence {
        Cadence::Hourly => "%m-%d %H:%M",
        _ => "%Y-%m-%d",
    };

    let mut table = Table::new(&["Time", "Gold", "Silver"]);
    for (gold, silver) in series.gold.points.iter().zip(&series.silver.points) {
        table.add_row(vec![
            gold.timestamp.format(time_format).to_string(),
            format!("{:.2}", gold.price),
            format!("{:.2}", silver.price),
        ]);
    }
    table.render()
}

pub async fn execute(ctx: &Context, msg: &Message, args: &[&str]) -> Result<(), String> {
    tracing::info!("📋 Series command called with args: {:?}", args);

    let cadence = super::ticker::parse_cadence(args).map_err(|e| e.to_string())?;
    let series = series_service::generate(cadence, Utc::now(), &mut rand::thread_rng());

    let embed = CreateEmbed::default()
        .title(format!("📋 {} Price Series (USD)", cadence.label()))
        .description(series_table(&series))
        .color(0xffd700);

    msg.channel_id
        .send_message(ctx, CreateMessage::default().embed(embed))
        .await
        .map_err(|e| e.to_string())?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_one_row_per_point() {
        let start = Utc.with_ymd_and_hms(2024, 3, 1, 9, 30, 0).unwrap();
        let series = series_service::generate(Cadence::Hourly, start, &mut StdRng::seed_from_u64(4));
        let rendered = series_table(&series);

        // header, separator, ten points
        assert_eq!(rendered.lines().filter(|l| !l.starts_with("```")).count(), 12);
        assert!(rendered.contains("03-01 09:30"));
        assert!(rendered.contains("03-01 18:30"));
    }

    #[test]
    fn test_daily_rows_use_dates() {
        let start = Utc.with_ymd_and_hms(2024, 3, 1, 9, 30, 0).unwrap();
        let series = series_service::generate(Cadence::Daily, start, &mut StdRng::seed_from_u64(4));
        let rendered = series_table(&series);
        assert!(rendered.contains("2024-03-01"));
        assert!(rendered.contains("2024-03-07"));
        assert!(!rendered.contains("2024-03-08"));
    }
}
