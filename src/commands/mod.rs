pub mod chart;
pub mod embed;
pub mod feed;
pub mod help;
pub mod metals;
pub mod ping;
pub mod series;
pub mod ticker;

use std::sync::Arc;
use serenity::model::channel::Message;
use serenity::prelude::Context;

use crate::config::Config;
use crate::utils::check_cooldown;

/// Fetch the shared config from client data
pub(crate) async fn load_config(ctx: &Context) -> Result<Arc<Config>, String> {
    let data = ctx.data.read().await;
    data.get::<crate::Settings>()
        .cloned()
        .ok_or_else(|| "Settings not initialized".to_string())
}

pub async fn handle_message(ctx: &Context, msg: &Message) {
    if msg.author.bot {
        return;
    }

    let parts: Vec<&str> = msg.content.split_whitespace().collect();
    let Some((&command, args)) = parts.split_first() else {
        return;
    };

    if !is_known_command(command) {
        return;
    }

    let cooldown_secs = match load_config(ctx).await {
        Ok(config) => config.command_cooldown_secs,
        Err(e) => {
            tracing::error!("{}", e);
            return;
        }
    };

    if let Err(remaining) = check_cooldown(msg.author.id, command, cooldown_secs).await {
        tracing::debug!("User {} on cooldown for {} ({}s left)", msg.author.id, command, remaining);
        let _ = msg.channel_id.send_message(
            ctx,
            serenity::builder::CreateMessage::default().embed(
                serenity::builder::CreateEmbed::default()
                    .title("Command Cooldown")
                    .description(format!("⏳ Please wait {} seconds before using this command again.", remaining))
                    .color(0xffa500)
            )
        ).await;
        return;
    }

    let result = match command {
        "$ping" => ping::execute(ctx, msg).await,
        "$help" => help::execute(ctx, msg).await,
        "$ticker" => ticker::execute(ctx, msg, args).await,
        "$chart" => chart::execute(ctx, msg, args).await,
        "$series" => series::execute(ctx, msg, args).await,
        "$feed" => feed::execute(ctx, msg, args).await,
        "$embed" | "$widget" => embed::execute(ctx, msg).await,
        "$metals" => metals::execute(ctx, msg).await,
        _ => return,
    };

    if let Err(e) = result {
        tracing::error!("❌ Error executing command {}: {}", command, e);

        let user_message = if e.contains("429") || e.contains("rate limit") {
            "⚠️ **Rate Limited**: Discord is rate limiting us. Please try again in a moment.".to_string()
        } else if e.contains("HTTP request") {
            "⚠️ **Network Error**: Having trouble connecting to Discord. Please try again.".to_string()
        } else if !e.trim().is_empty() {
            format!("❌ {}", e.trim())
        } else {
            "❌ An error occurred while executing the command.".to_string()
        };

        let embed = serenity::builder::CreateEmbed::default()
            .title("Command Error")
            .description(user_message)
            .color(0xff0000);

        let _ = msg.channel_id
            .send_message(ctx, serenity::builder::CreateMessage::default().embed(embed))
            .await;
    }
}

fn is_known_command(command: &str) -> bool {
    matches!(
        command,
        "$ping" | "$help" | "$ticker" | "$chart" | "$series" | "$feed" | "$embed" | "$widget" | "$metals"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_commands() {
        assert!(is_known_command("$ticker"));
        assert!(is_known_command("$widget"));
        assert!(!is_known_command("$swap"));
        assert!(!is_known_command("$price"));
        assert!(!is_known_command("ticker"));
    }
}
