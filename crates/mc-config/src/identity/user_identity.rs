use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub const IDENTITY_SCHEMA_VERSION: i32 = 1;

/// Opaque per-installation identity persisted next to the config.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserIdentity {
    pub id: String,
    pub created_at: String,
    pub schema_version: i32,
}

impl UserIdentity {
    /// Mint a fresh token. Tokens are never rotated or validated afterwards.
    pub fn generate() -> Self {
        Self {
            id: format!("user_{}", Uuid::new_v4().simple()),
            created_at: chrono::Utc::now().to_rfc3339(),
            schema_version: IDENTITY_SCHEMA_VERSION,
        }
    }
}
