mod plugin_set;
mod server;
mod server_action;
mod server_status;
