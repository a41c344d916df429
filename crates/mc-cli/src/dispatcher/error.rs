use crate::{ClientError, clipboard::ClipboardError};

use mc_config::ConfigError;

use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;

/// Why a dashboard action did not complete.
#[derive(Error, Debug)]
pub enum DashboardError {
    #[error("Collaborator request failed: {source} {location}")]
    Client {
        #[source]
        source: ClientError,
        location: ErrorLocation,
    },

    #[error("{message} {location}")]
    Precondition {
        message: String,
        location: ErrorLocation,
    },

    #[error("Server {server_id} not found {location}")]
    NotFound {
        server_id: String,
        location: ErrorLocation,
    },

    #[error("An action is already in progress for server {server_id} {location}")]
    InFlight {
        server_id: String,
        location: ErrorLocation,
    },

    #[error("No identity token for this session {location}")]
    MissingIdentity { location: ErrorLocation },

    #[error("Cancelled by user {location}")]
    Cancelled { location: ErrorLocation },

    #[error("Clipboard error: {source}")]
    Clipboard {
        #[source]
        source: ClipboardError,
    },

    #[error("Configuration error: {source}")]
    Config {
        #[source]
        source: ConfigError,
    },
}

impl DashboardError {
    #[track_caller]
    pub fn precondition(message: impl Into<String>) -> Self {
        Self::Precondition {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn not_found(server_id: impl Into<String>) -> Self {
        Self::NotFound {
            server_id: server_id.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn in_flight(server_id: impl Into<String>) -> Self {
        Self::InFlight {
            server_id: server_id.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn missing_identity() -> Self {
        Self::MissingIdentity {
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn cancelled() -> Self {
        Self::Cancelled {
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<ClientError> for DashboardError {
    #[track_caller]
    fn from(source: ClientError) -> Self {
        Self::Client {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<ClipboardError> for DashboardError {
    fn from(source: ClipboardError) -> Self {
        Self::Clipboard { source }
    }
}

impl From<ConfigError> for DashboardError {
    fn from(source: ConfigError) -> Self {
        Self::Config { source }
    }
}

pub type Result<T> = std::result::Result<T, DashboardError>;
