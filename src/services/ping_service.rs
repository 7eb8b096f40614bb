use serenity::prelude::*;
use std::time::Instant;

use crate::models::PingMetrics;

pub async fn get_ping_metrics(ctx: &Context, start_time: Instant) -> PingMetrics {
    let response_roundtrip = start_time.elapsed().as_millis() as u64;

    let uptime = {
        let data = ctx.data.read().await;
        data.get::<crate::BotData>().map(|started| started.elapsed())
    };

    PingMetrics {
        response_roundtrip,
        uptime,
    }
}

pub fn create_ping_embed(metrics: &PingMetrics) -> serenity::builder::CreateEmbed {
    serenity::builder::CreateEmbed::default()
        .title("Pong! 🏓")
        .field("Response Roundtrip", format!("{}ms", metrics.response_roundtrip), true)
        .field("Uptime", metrics.uptime_text(), false)
        .color(0x00b0f4)
}
