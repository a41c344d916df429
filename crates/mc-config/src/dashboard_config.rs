use crate::{ConfigError, ConfigErrorResult};

use std::time::Duration;

use serde::Deserialize;

pub const DEFAULT_PLAY_READY_DELAY_MS: u64 = 3000;
pub const MAX_PLAY_READY_DELAY_MS: u64 = 60_000;
pub const DEFAULT_READY_NOTICE_SECS: u64 = 10;
pub const DEFAULT_ROLLBACK_ON_FAILURE: bool = true;
pub const DEFAULT_DOWNLOAD_DIR: &str = ".";

/// Behaviour of the dashboard actions.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    /// Fixed wait between starting a server from `play` and copying its address
    pub play_ready_delay_ms: u64,
    /// How long the "ready" notification stays visible
    pub ready_notice_secs: u64,
    /// Restore the previous status when a state change fails
    pub rollback_on_failure: bool,
    /// Where config bundles are saved
    pub download_dir: String,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            play_ready_delay_ms: DEFAULT_PLAY_READY_DELAY_MS,
            ready_notice_secs: DEFAULT_READY_NOTICE_SECS,
            rollback_on_failure: DEFAULT_ROLLBACK_ON_FAILURE,
            download_dir: String::from(DEFAULT_DOWNLOAD_DIR),
        }
    }
}

impl DashboardConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.play_ready_delay_ms > MAX_PLAY_READY_DELAY_MS {
            return Err(ConfigError::dashboard(format!(
                "dashboard.play_ready_delay_ms must be 0-{}, got {}",
                MAX_PLAY_READY_DELAY_MS, self.play_ready_delay_ms
            )));
        }

        if self.download_dir.trim().is_empty() {
            return Err(ConfigError::dashboard(
                "dashboard.download_dir cannot be empty",
            ));
        }

        Ok(())
    }

    pub fn play_ready_delay(&self) -> Duration {
        Duration::from_millis(self.play_ready_delay_ms)
    }

    pub fn ready_notice(&self) -> Duration {
        Duration::from_secs(self.ready_notice_secs)
    }
}
