mod load_result;
mod user_identity;

pub use load_result::LoadResult;
pub use user_identity::UserIdentity;

use crate::{ConfigError, ConfigErrorResult, write_atomic};

use std::fs;
use std::panic::Location;
use std::path::PathBuf;

use error_location::ErrorLocation;
use log::{info, warn};

const IDENTITY_FILE_NAME: &str = "identity.json";
const DATE_FORMAT: &str = "%Y%m%d_%H%M%S";

/// Reads and writes the identity file inside a config directory.
#[derive(Debug, Clone)]
pub struct IdentityStore {
    dir: PathBuf,
}

impl IdentityStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn path(&self) -> PathBuf {
        self.dir.join(IDENTITY_FILE_NAME)
    }

    /// Loads the identity file.
    ///
    /// Returns:
    /// - `LoadResult { user: Some(..), corruption_error: None }` - loaded successfully
    /// - `LoadResult { user: None, corruption_error: None }` - no file yet
    /// - `LoadResult { user: None, corruption_error: Some(..) }` - file exists but corrupted
    pub fn load(&self) -> ConfigErrorResult<LoadResult> {
        let path = self.path();

        if !path.exists() {
            info!("No identity file at {path:?}");
            return Ok(LoadResult {
                user: None,
                corruption_error: None,
            });
        }

        let contents = fs::read_to_string(&path).map_err(|e| ConfigError::io(path.clone(), e))?;

        match serde_json::from_str::<UserIdentity>(&contents) {
            Ok(user) => {
                info!(
                    "Loaded identity: {} (schema v{})",
                    user.id, user.schema_version
                );
                Ok(LoadResult {
                    user: Some(user),
                    corruption_error: None,
                })
            }
            Err(e) => {
                warn!("Identity file corrupted at {path:?}: {e}");
                Ok(LoadResult {
                    user: None,
                    corruption_error: Some(e.to_string()),
                })
            }
        }
    }

    pub fn save(&self, user: &UserIdentity) -> ConfigErrorResult<()> {
        let json = serde_json::to_string_pretty(user)
            .map_err(|e| ConfigError::serialization("identity", e))?;

        write_atomic(&self.path(), json.as_bytes())?;

        info!("Saved identity: {}", user.id);
        Ok(())
    }

    /// Renames a corrupted `identity.json` to `identity.json.corrupted.{timestamp}`.
    pub fn backup_corrupted(&self) -> ConfigErrorResult<Option<PathBuf>> {
        let path = self.path();

        if !path.exists() {
            return Ok(None);
        }

        let timestamp = chrono::Utc::now().format(DATE_FORMAT);
        let backup_path = self
            .dir
            .join(format!("{IDENTITY_FILE_NAME}.corrupted.{timestamp}"));

        fs::rename(&path, &backup_path).map_err(|e| ConfigError::BackupFailed {
            path: path.clone(),
            source: e,
            location: ErrorLocation::from(Location::caller()),
        })?;

        warn!("Backed up corrupted identity to {backup_path:?}");
        Ok(Some(backup_path))
    }
}
