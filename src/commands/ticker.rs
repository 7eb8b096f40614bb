use chrono::Utc;
use serenity::builder::{CreateAttachment, CreateMessage};
use serenity::model::channel::Message;
use serenity::prelude::Context;
use std::time::Duration;

use crate::models::{AlertSettings, Cadence, Instrument, TickerRequest};
use crate::services::chart_service;
use crate::services::ticker_service::{self, ReferencePrices};
use crate::utils::TickerError;

pub const CHART_ATTACHMENT: &str = "metals_chart.png";

/// Parse `[cadence] [alert [gold] [silver]]`
pub fn parse_request(args: &[&str]) -> Result<TickerRequest, TickerError> {
    let mut request = TickerRequest::default();
    let mut rest = args;

    if let Some((first, tail)) = rest.split_first() {
        if !is_alert_keyword(first) {
            request.cadence = Cadence::parse(first)?;
            rest = tail;
        }
    }

    if let Some((first, thresholds)) = rest.split_first() {
        if !is_alert_keyword(first) {
            return Err(TickerError::UnexpectedArgument(first.to_string()));
        }
        if let Some(extra) = thresholds.get(2) {
            return Err(TickerError::UnexpectedArgument(extra.to_string()));
        }

        let gold = threshold_arg(thresholds.first(), Instrument::Gold)?;
        let silver = threshold_arg(thresholds.get(1), Instrument::Silver)?;
        request.alerts = Some(AlertSettings::new(gold, silver)?);
    }

    Ok(request)
}

/// Parse an optional lone cadence argument
pub fn parse_cadence(args: &[&str]) -> Result<Cadence, TickerError> {
    match args {
        [] => Ok(Cadence::default()),
        [label] => Cadence::parse(label),
        [_, extra, ..] => Err(TickerError::UnexpectedArgument(extra.to_string())),
    }
}

fn is_alert_keyword(arg: &str) -> bool {
    arg.eq_ignore_ascii_case("alert")
}

fn threshold_arg(arg: Option<&&str>, instrument: Instrument) -> Result<f64, TickerError> {
    match arg {
        Some(raw) => raw
            .trim_start_matches('$')
            .parse::<f64>()
            .map_err(|_| TickerError::InvalidNumber(raw.to_string())),
        None => Ok(instrument.default_threshold()),
    }
}

pub async fn execute(ctx: &Context, msg: &Message, args: &[&str]) -> Result<(), String> {
    tracing::info!("📈 Ticker command called by {} with args: {:?}", msg.author.id, args);

    let request = parse_request(args).map_err(|e| {
        tracing::warn!("Invalid ticker arguments {:?}: {}", args, e);
        e.to_string()
    })?;
    let config = super::load_config(ctx).await?;
    let references = ReferencePrices::from(config.as_ref());

    let snapshot = ticker_service::build_snapshot(&request, &references, &mut rand::thread_rng(), Utc::now());

    // Fetching live prices...
    if config.render_delay_ms > 0 {
        if let Err(e) = msg.channel_id.broadcast_typing(ctx.http.as_ref()).await {
            tracing::warn!("Failed to broadcast typing: {}", e);
        }
        tokio::time::sleep(Duration::from_millis(config.render_delay_ms)).await;
    }

    let chart = chart_service::render_chart(&snapshot.series, config.chart_width, config.chart_height)
        .map_err(|e| {
            tracing::error!("Chart generation error: {}", e);
            e.to_string()
        })?;
    tracing::debug!("Chart rendered: {} bytes", chart.len());

    let mut embeds = vec![ticker_service::create_header_embed(&snapshot)];
    embeds.extend(snapshot.quotes.iter().map(ticker_service::create_quote_embed));
    if let Some(alerts) = ticker_service::create_alerts_embed(&snapshot) {
        embeds.push(alerts);
    }
    embeds.push(ticker_service::create_chart_embed(&snapshot, CHART_ATTACHMENT));

    let message = CreateMessage::default()
        .embeds(embeds)
        .add_file(CreateAttachment::bytes(chart, CHART_ATTACHMENT));

    msg.channel_id
        .send_message(ctx, message)
        .await
        .map_err(|e| format!("Failed to send ticker: {}", e))?;

    tracing::info!(
        "✓ Ticker sent ({} cadence, {} alert(s))",
        snapshot.cadence.label(),
        snapshot.alerts.len()
    );
    Ok(())
}
