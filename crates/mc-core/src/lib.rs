pub mod bundle;
pub mod error;
pub mod models;
pub mod store;

#[cfg(test)]
mod tests;

pub use bundle::config_bundle::{Artifact, ConfigBundle};
pub use bundle::paper::{DEFAULT_SERVER_VERSION, SUPPORTED_VERSIONS, paper_download_url};
pub use error::{CoreError, Result as CoreErrorResult};
pub use models::plugin_editor::PluginEditor;
pub use models::plugin_set::PluginSet;
pub use models::server::Server;
pub use models::server_action::ServerAction;
pub use models::server_address::ServerAddress;
pub use models::server_id::ServerId;
pub use models::server_status::ServerStatus;
pub use store::ServerStore;

/// Port assigned by the provisioning service when none is known.
pub const DEFAULT_SERVER_PORT: u16 = 25565;
/// Player capacity of a freshly provisioned server.
pub const DEFAULT_MAX_PLAYERS: u32 = 20;
/// Host used when the user leaves the address blank.
pub const DEFAULT_SERVER_IP: &str = "localhost";
