mod api_config;
mod atomic_write;
mod config;
mod dashboard_config;
mod error;
mod identity;
mod log_level;
mod logging_config;

#[cfg(test)]
mod tests;

pub use api_config::ApiConfig;
pub use atomic_write::write_atomic;
pub use config::Config;
pub use dashboard_config::DashboardConfig;
pub use error::{ConfigError, ConfigErrorResult};
pub use identity::{IdentityStore, LoadResult, UserIdentity};
pub use log_level::LogLevel;
pub use logging_config::LoggingConfig;

const CONFIG_DIR_ENV: &str = "MC_CONFIG_DIR";
const DEFAULT_CONFIG_DIR_NAME: &str = ".mcdash";
const CONFIG_FILE_NAME: &str = "config.toml";

const DEFAULT_MANAGER_URL: &str = "http://127.0.0.1:8000/server-manager";
const DEFAULT_PROVISION_URL: &str = "http://127.0.0.1:8000/create-server";
const DEFAULT_IDENTITY_HEADER: &str = "X-User-Id";

const DEFAULT_LOG_LEVEL_STRING: &str = "warn";
const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Warn;
