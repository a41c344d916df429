use std::result::Result as StdResult;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Invalid server status: {value} {location}")]
    InvalidServerStatus {
        value: String,
        location: ErrorLocation,
    },

    #[error("Invalid server action: {value} {location}")]
    InvalidServerAction {
        value: String,
        location: ErrorLocation,
    },
}

pub type Result<T> = StdResult<T, CoreError>;
