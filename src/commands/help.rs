use serenity::builder::CreateEmbed;
use serenity::model::channel::Message;
use serenity::prelude::Context;

pub async fn execute(ctx: &Context, msg: &Message) -> Result<(), String> {
    let embed = CreateEmbed::default()
        .title("📖 Metals Ticker Commands Help")
        .description("Simulated **Gold (XAU)** and **Silver (XAG)** prices with charts and alerts.\nPrices are randomly generated for demonstration; they are not market data.")
        .color(0x00b0f4)
        .field(
            "🎯 General",
            "`$ping` - Check bot latency\n`$help` - Show this help message",
            false,
        )
        .field(
            "📈 Ticker",
            "`$ticker [hourly|daily|weekly]` - Current prices and price chart\n`$ticker [cadence] alert [gold] [silver]` - Also alert when a price reaches its threshold",
            false,
        )
        .field(
            "🔔 Alert Thresholds",
            "Gold: 1500 - 2000 (default 1850)\nSilver: 20 - 50 (default 26)",
            false,
        )
        .field(
            "📊 Charts & Data",
            "`$chart [cadence]` - Price chart only\n`$series [cadence]` - Chart data as a table\n`$feed [cadence] [alert ...]` - Snapshot as JSON",
            false,
        )
        .field(
            "🧩 Extras",
            "`$embed` (or `$widget`) - Widget snippet for your website\n`$metals` - Precious Metals 101",
            false,
        )
        .field(
            "⚡ Rate Limiting",
            "Per-user cooldown on every command",
            false,
        );

    msg.channel_id
        .send_message(ctx, serenity::builder::CreateMessage::default().embed(embed))
        .await
        .map_err(|e| format!("Failed to send help message: {}", e))?;

    Ok(())
}
