use chrono::Utc;
use serenity::builder::{CreateAttachment, CreateMessage};
use serenity::model::channel::Message;
use serenity::prelude::Context;

use crate::services::{chart_service, series_service};

/// Send only the chart image for a cadence
pub async fn execute(ctx: &Context, msg: &Message, args: &[&str]) -> Result<(), String> {
    tracing::info!("🎨 Chart command received from user {} with args: {:?}", msg.author.id, args);

    let cadence = super::ticker::parse_cadence(args).map_err(|e| {
        tracing::warn!("Invalid chart arguments {:?}: {}", args, e);
        e.to_string()
    })?;
    let config = super::load_config(ctx).await?;

    let series = series_service::generate(cadence, Utc::now(), &mut rand::thread_rng());

    match msg.channel_id.broadcast_typing(ctx.http.as_ref()).await {
        Ok(_) => tracing::debug!("Broadcast typing indicator"),
        Err(e) => tracing::warn!("Failed to broadcast typing: {}", e),
    };

    let chart_data = chart_service::render_chart(&series, config.chart_width, config.chart_height)
        .map_err(|e| {
            tracing::error!("Chart generation error: {}", e);
            e.to_string()
        })?;

    let filename = format!("metals_{}.png", cadence.label().to_lowercase());
    let message = CreateMessage::default()
        .content(format!("**Gold and Silver Price Movement Over Time** ({})", cadence.label()))
        .add_file(CreateAttachment::bytes(chart_data, filename));

    msg.channel_id
        .send_message(ctx, message)
        .await
        .map_err(|e| format!("Failed to send chart: {}", e))?;

    tracing::info!("✓ {} chart sent", cadence.label());
    Ok(())
}
