use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ClipboardError {
    #[error("No clipboard available: {message} {location}")]
    Unavailable {
        message: String,
        location: ErrorLocation,
    },

    #[error("Failed to run {program}: {source} {location}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
        location: ErrorLocation,
    },

    #[error("{program} exited with {status} {location}")]
    ExitStatus {
        program: String,
        status: std::process::ExitStatus,
        location: ErrorLocation,
    },

    #[error("Clipboard task failed: {message} {location}")]
    BlockingTask {
        message: String,
        location: ErrorLocation,
    },

    #[error("Scratch file error: {source} {location}")]
    Scratch {
        #[source]
        source: std::io::Error,
        location: ErrorLocation,
    },
}

impl ClipboardError {
    #[track_caller]
    pub fn unavailable(message: impl Into<String>) -> Self {
        Self::Unavailable {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn spawn(program: impl Into<String>, source: std::io::Error) -> Self {
        Self::Spawn {
            program: program.into(),
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn exit_status(program: impl Into<String>, status: std::process::ExitStatus) -> Self {
        Self::ExitStatus {
            program: program.into(),
            status,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn blocking_task(err: tokio::task::JoinError) -> Self {
        Self::BlockingTask {
            message: err.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn scratch(source: std::io::Error) -> Self {
        Self::Scratch {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, ClipboardError>;
