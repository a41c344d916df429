use crate::client::wire::{
    AddressUpdateRequest, AddressUpdateResponse, ProvisionRequest, ProvisionedServer,
    ServerListResponse, StateChangeRequest, StateChangeResponse,
};
use crate::{CliClientResult, ClientError};

use mc_config::ApiConfig;
use mc_core::{Server, ServerAction, ServerId, ServerStatus};

use log::debug;
use reqwest::{Client as ReqwestClient, Method, Url};
use serde::de::DeserializeOwned;
use serde_json::Value;

/// HTTP client for the server-management and provisioning endpoints
pub struct Client {
    pub manager_url: String,
    pub provision_url: String,
    pub identity_header: String,
    client: ReqwestClient,
}

impl Client {
    pub fn new(api: &ApiConfig) -> Self {
        Self {
            manager_url: api.manager_url.trim_end_matches('/').to_string(),
            provision_url: api.provision_url.trim_end_matches('/').to_string(),
            identity_header: api.identity_header.clone(),
            client: ReqwestClient::new(),
        }
    }

    /// Build a request with optional identity header
    fn request(&self, method: Method, url: &str, identity: Option<&str>) -> reqwest::RequestBuilder {
        let mut req = self.client.request(method, url);

        if let Some(identity) = identity {
            req = req.header(self.identity_header.as_str(), identity);
        }

        req
    }

    /// Send a request and return the raw body of a successful response
    async fn execute_raw(&self, req: reqwest::RequestBuilder) -> CliClientResult<String> {
        let response = req.send().await?;
        let status = response.status();
        let body = response.text().await?;

        if status.is_success() {
            return Ok(body);
        }

        // The collaborator reports errors as {"error": "..."} or {"error": {code, message}}
        let error = serde_json::from_str::<Value>(&body)
            .ok()
            .and_then(|v| v.get("error").cloned());

        Err(match error {
            Some(Value::String(message)) => ClientError::api_error(status.as_str(), message),
            Some(error) => {
                let code = error
                    .get("code")
                    .and_then(|v| v.as_str())
                    .unwrap_or(status.as_str())
                    .to_string();
                let message = error
                    .get("message")
                    .and_then(|v| v.as_str())
                    .unwrap_or("Unknown error")
                    .to_string();
                ClientError::api_error(code, message)
            }
            None => ClientError::status(status.as_u16()),
        })
    }

    /// Execute request and parse the JSON body
    async fn execute<T: DeserializeOwned>(&self, req: reqwest::RequestBuilder) -> CliClientResult<T> {
        let body = self.execute_raw(req).await?;
        Ok(serde_json::from_str(&body)?)
    }

    // =========================================================================
    // Server Management
    // =========================================================================

    /// List the servers owned by `identity`
    pub async fn list_servers(&self, identity: &str) -> CliClientResult<Vec<Server>> {
        let req = self.request(Method::GET, &self.manager_url, Some(identity));
        let response: ServerListResponse = self.execute(req).await?;
        debug!("Collaborator returned {} servers", response.servers.len());
        Ok(response.servers)
    }

    /// Request a start/stop/restart; returns the status the collaborator settled on
    pub async fn change_state(
        &self,
        identity: Option<&str>,
        server_id: &ServerId,
        action: ServerAction,
    ) -> CliClientResult<ServerStatus> {
        let body = StateChangeRequest { server_id, action };
        let req = self
            .request(Method::PUT, &self.manager_url, identity)
            .json(&body);
        let response: StateChangeResponse = self.execute(req).await?;
        Ok(response.new_status)
    }

    /// Delete a server; the id travels as the `serverId` query parameter
    pub async fn delete_server(
        &self,
        identity: Option<&str>,
        server_id: &ServerId,
    ) -> CliClientResult<()> {
        let mut url = Url::parse(&self.manager_url)
            .map_err(|e| ClientError::url(self.manager_url.as_str(), e.to_string()))?;
        url.query_pairs_mut()
            .append_pair("serverId", server_id.as_str());

        let req = self.request(Method::DELETE, url.as_str(), identity);
        self.execute_raw(req).await?;
        Ok(())
    }

    /// Change a server's address; returns the address the collaborator echoed back
    pub async fn update_ip(
        &self,
        identity: Option<&str>,
        server_id: &ServerId,
        new_ip: &str,
    ) -> CliClientResult<String> {
        let body = AddressUpdateRequest { server_id, new_ip };
        let req = self
            .request(Method::PATCH, &self.manager_url, identity)
            .json(&body);
        let response: AddressUpdateResponse = self.execute(req).await?;
        Ok(response.new_ip.unwrap_or_else(|| new_ip.to_string()))
    }

    // =========================================================================
    // Provisioning
    // =========================================================================

    /// Provision a new server for `identity`
    pub async fn provision(
        &self,
        identity: &str,
        server_name: &str,
        server_version: &str,
        server_ip: &str,
    ) -> CliClientResult<ProvisionedServer> {
        let body = ProvisionRequest {
            server_name,
            server_version,
            server_ip,
        };
        let req = self
            .request(Method::POST, &self.provision_url, Some(identity))
            .json(&body);
        self.execute(req).await
    }
}
