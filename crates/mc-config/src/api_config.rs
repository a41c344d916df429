use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_IDENTITY_HEADER, DEFAULT_MANAGER_URL,
    DEFAULT_PROVISION_URL,
};

use serde::Deserialize;

/// Endpoints of the remote collaborator.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Server-management endpoint (list, state change, delete, address update)
    pub manager_url: String,
    /// Provisioning endpoint (create server)
    pub provision_url: String,
    /// Header carrying the identity token
    pub identity_header: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            manager_url: String::from(DEFAULT_MANAGER_URL),
            provision_url: String::from(DEFAULT_PROVISION_URL),
            identity_header: String::from(DEFAULT_IDENTITY_HEADER),
        }
    }
}

impl ApiConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        Self::validate_url("api.manager_url", &self.manager_url)?;
        Self::validate_url("api.provision_url", &self.provision_url)?;

        if self.identity_header.trim().is_empty() {
            return Err(ConfigError::api("api.identity_header cannot be empty"));
        }

        Ok(())
    }

    fn validate_url(field: &str, url: &str) -> ConfigErrorResult<()> {
        if !(url.starts_with("http://") || url.starts_with("https://")) {
            return Err(ConfigError::api(format!(
                "{field} must be an http:// or https:// URL, got '{url}'"
            )));
        }
        Ok(())
    }
}
