use crate::{DEFAULT_MAX_PLAYERS, PluginSet, ServerAddress, ServerId, ServerStatus};

use serde::{Deserialize, Serialize};

/// One provisioned game server owned by the current identity.
///
/// Mirrors the JSON shape of the server-management endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Server {
    pub server_id: ServerId,
    #[serde(rename = "serverName")]
    pub name: String,
    pub version: String,
    pub status: ServerStatus,
    #[serde(flatten)]
    pub address: ServerAddress,
    pub max_players: u32,
    #[serde(default)]
    pub online_players: u32,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub plugins: PluginSet,
}

impl Server {
    pub fn new(
        server_id: impl Into<ServerId>,
        name: impl Into<String>,
        version: impl Into<String>,
        status: ServerStatus,
        address: ServerAddress,
    ) -> Self {
        Self {
            server_id: server_id.into(),
            name: name.into(),
            version: version.into(),
            status,
            address,
            max_players: DEFAULT_MAX_PLAYERS,
            online_players: 0,
            created_at: None,
            plugins: PluginSet::new(),
        }
    }

    /// Occupancy as shown to users; only a running server has players.
    pub fn observed_players(&self) -> u32 {
        if self.status.is_running() {
            self.online_players
        } else {
            0
        }
    }

    pub fn connection_string(&self) -> String {
        self.address.connection_string()
    }
}
