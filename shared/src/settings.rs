use serde::{Deserialize, Serialize};

use crate::poll::PollPolicy;

/// Local-storage key for optional client overrides.
pub const SETTINGS_KEY: &str = "instancer_settings";

const MIN_POLL_INTERVAL_MS: u32 = 100;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientSettings {
    /// Delay before each status poll.
    pub poll_interval_ms: u32,
    /// Fixed wait after an action response, so the spinner never just flashes.
    pub min_loading_ms: u32,
    pub max_poll_attempts: u32,
    /// Reload on non-200 action responses instead of alerting.
    pub legacy_success_default: bool,
}

impl Default for ClientSettings {
    fn default() -> Self {
        let poll = PollPolicy::default();
        Self {
            poll_interval_ms: poll.interval_ms,
            min_loading_ms: 2_000,
            max_poll_attempts: poll.max_attempts,
            legacy_success_default: false,
        }
    }
}

impl ClientSettings {
    /// Clamp values a hand-edited storage entry could break.
    pub fn sanitized(mut self) -> Self {
        self.poll_interval_ms = self.poll_interval_ms.max(MIN_POLL_INTERVAL_MS);
        self.max_poll_attempts = self.max_poll_attempts.max(1);
        self
    }

    pub const fn poll_policy(&self) -> PollPolicy {
        PollPolicy {
            interval_ms: self.poll_interval_ms,
            max_attempts: self.max_poll_attempts,
        }
    }
}
