use mc_config::{ConfigErrorResult, IdentityStore, UserIdentity};

use log::{info, warn};

/// Identity context for one dashboard session.
///
/// Holds the opaque token attached to collaborator requests and, optionally, where
/// to persist a token minted during the session.
#[derive(Debug, Clone, Default)]
pub struct Session {
    identity: Option<String>,
    store: Option<IdentityStore>,
}

impl Session {
    /// No identity and nowhere to persist one.
    pub fn anonymous() -> Self {
        Self::default()
    }

    pub fn with_identity(identity: impl Into<String>) -> Self {
        Self {
            identity: Some(identity.into()),
            store: None,
        }
    }

    /// Load the persisted identity; a corrupted file is backed up and treated as absent.
    pub fn open(store: IdentityStore) -> ConfigErrorResult<Self> {
        let loaded = store.load()?;

        if let Some(error) = loaded.corruption_error {
            warn!("Ignoring corrupted identity ({error})");
            store.backup_corrupted()?;
        }

        Ok(Self {
            identity: loaded.user.map(|user| user.id),
            store: Some(store),
        })
    }

    pub fn identity(&self) -> Option<&str> {
        self.identity.as_deref()
    }

    /// Return the current token, minting and persisting one if absent.
    pub fn ensure_identity(&mut self) -> ConfigErrorResult<String> {
        if let Some(identity) = &self.identity {
            return Ok(identity.clone());
        }

        let user = UserIdentity::generate();
        if let Some(store) = &self.store {
            store.save(&user)?;
        }
        info!("Created identity {}", user.id);

        self.identity = Some(user.id.clone());
        Ok(user.id)
    }
}
