//! JSON bodies exchanged with the collaborator.

use mc_core::{Server, ServerAction, ServerId, ServerStatus};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub(crate) struct ServerListResponse {
    #[serde(default)]
    pub servers: Vec<Server>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct StateChangeRequest<'a> {
    pub server_id: &'a ServerId,
    pub action: ServerAction,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct StateChangeResponse {
    pub new_status: ServerStatus,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct AddressUpdateRequest<'a> {
    pub server_id: &'a ServerId,
    pub new_ip: &'a str,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct AddressUpdateResponse {
    #[serde(default)]
    pub new_ip: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ProvisionRequest<'a> {
    pub server_name: &'a str,
    pub server_version: &'a str,
    pub server_ip: &'a str,
}

/// Provisioning response: the created server plus setup hints.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProvisionedServer {
    #[serde(flatten)]
    pub server: Server,
    #[serde(default)]
    pub download_url: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}
