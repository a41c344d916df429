pub mod plugin_editor;
pub mod plugin_set;
pub mod server;
pub mod server_action;
pub mod server_address;
pub mod server_id;
pub mod server_status;
