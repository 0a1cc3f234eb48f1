use std::time::Duration;

use tracing::Level;

pub const DEFAULT_REPLY_DELAY_MS: u64 = 1000;
pub const DEFAULT_REPLY_TEXT: &str = "This is a response!";

#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    pub reply_delay_ms: u64,
    pub reply_text: String,
    pub log_level: Level,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            reply_delay_ms: DEFAULT_REPLY_DELAY_MS,
            reply_text: DEFAULT_REPLY_TEXT.to_string(),
            log_level: Level::INFO,
        }
    }
}

impl Config {
    /// Reads overrides baked in at build time; the browser has no process environment.
    pub fn from_env() -> Self {
        Self::from_values(
            option_env!("CHAT_REPLY_DELAY_MS"),
            option_env!("CHAT_REPLY_TEXT"),
            option_env!("CHAT_LOG_LEVEL"),
        )
    }

    fn from_values(delay_ms: Option<&str>, reply_text: Option<&str>, log_level: Option<&str>) -> Self {
        let defaults = Self::default();
        Self {
            reply_delay_ms: delay_ms
                .and_then(|v| v.trim().parse().ok())
                .unwrap_or(defaults.reply_delay_ms),
            reply_text: reply_text
                .filter(|v| !v.trim().is_empty())
                .map(str::to_string)
                .unwrap_or(defaults.reply_text),
            log_level: log_level
                .and_then(|v| v.trim().parse().ok())
                .unwrap_or(defaults.log_level),
        }
    }

    pub fn reply_delay(&self) -> Duration {
        Duration::from_millis(self.reply_delay_ms)
    }
}
