use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Default latency of the simulated assistant, in milliseconds
pub const DEFAULT_REPLY_DELAY_MS: u64 = 1500;

/// Tunables for one browsing session
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionConfig {
    /// How long the assistant "thinks" before replying
    pub reply_delay_ms: u64,
}

impl SessionConfig {
    pub fn reply_delay(&self) -> Duration {
        Duration::from_millis(self.reply_delay_ms)
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            reply_delay_ms: DEFAULT_REPLY_DELAY_MS,
        }
    }
}
