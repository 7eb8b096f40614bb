use std::str::FromStr;

use thiserror::Error;

use crate::services::widget_service::DEFAULT_WIDGET_URL;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{0} not set")]
    Missing(&'static str),
    #[error("Invalid value '{value}' for {var}: {reason}")]
    Invalid {
        var: &'static str,
        value: String,
        reason: String,
    },
}

/// Runtime settings read from the environment (and `.env`)
#[derive(Debug, Clone)]
pub struct Config {
    pub discord_token: String,
    pub gold_reference_price: f64,
    pub silver_reference_price: f64,
    pub widget_url: String,
    pub render_delay_ms: u64,
    pub chart_width: u32,
    pub chart_height: u32,
    pub command_cooldown_secs: u64,
}

impl Config {
    pub fn from_env() -> Result<Config, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the config from any key lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Config, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let discord_token = lookup("DISCORD_TOKEN")
            .filter(|t| !t.trim().is_empty())
            .ok_or(ConfigError::Missing("DISCORD_TOKEN"))?;

        let config = Config {
            discord_token,
            gold_reference_price: parse_price_or(&lookup, "GOLD_REFERENCE_PRICE", 1800.0)?,
            silver_reference_price: parse_price_or(&lookup, "SILVER_REFERENCE_PRICE", 25.0)?,
            widget_url: lookup("WIDGET_URL").unwrap_or_else(|| DEFAULT_WIDGET_URL.to_string()),
            render_delay_ms: parse_or(&lookup, "RENDER_DELAY_MS", 2000)?,
            chart_width: parse_or(&lookup, "CHART_WIDTH", 1024)?,
            chart_height: parse_or(&lookup, "CHART_HEIGHT", 768)?,
            command_cooldown_secs: parse_or(&lookup, "COMMAND_COOLDOWN_SECS", 5)?,
        };

        if config.chart_width == 0 || config.chart_height == 0 {
            return Err(ConfigError::Invalid {
                var: "CHART_WIDTH/CHART_HEIGHT",
                value: format!("{}x{}", config.chart_width, config.chart_height),
                reason: "chart dimensions must be non-zero".to_string(),
            });
        }

        Ok(config)
    }
}

/// Like `parse_or`, but "NaN" and "inf" are rejected
fn parse_price_or<F>(lookup: &F, var: &'static str, default: f64) -> Result<f64, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let price: f64 = parse_or(lookup, var, default)?;
    if price.is_finite() {
        Ok(price)
    } else {
        Err(ConfigError::Invalid {
            var,
            value: price.to_string(),
            reason: "must be a finite price".to_string(),
        })
    }
}

fn parse_or<T, F>(lookup: &F, var: &'static str, default: T) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
    F: Fn(&str) -> Option<String>,
{
    match lookup(var) {
        Some(raw) => raw.trim().parse().map_err(|e: T::Err| ConfigError::Invalid {
            var,
            value: raw.clone(),
            reason: e.to_string(),
        }),
        None => Ok(default),
    }
}
