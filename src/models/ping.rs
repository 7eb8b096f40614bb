//! Ping/status command models

use std::time::Duration;

/// Bot latency and uptime information
#[derive(Debug)]
pub struct PingMetrics {
    pub response_roundtrip: u64,
    pub uptime: Option<Duration>,
}

impl PingMetrics {
    /// Uptime as "Xh Ym Zs"
    pub fn uptime_text(&self) -> String {
        match self.uptime {
            Some(elapsed) => {
                let secs = elapsed.as_secs();
                format!("{}h {}m {}s", secs / 3600, (secs % 3600) / 60, secs % 60)
            }
            None => "Unknown".to_string(),
        }
    }
}
