//! Session-local list of the caller's servers.
//!
//! Every mutation is a whole-field replacement keyed by [`ServerId`]; entries are
//! never partially constructed.

use crate::{PluginSet, Server, ServerAddress, ServerId, ServerStatus};

#[derive(Debug, Clone, Default)]
pub struct ServerStore {
    servers: Vec<Server>,
}

impl ServerStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the whole list, e.g. with a fresh collaborator response.
    pub fn replace_all(&mut self, servers: Vec<Server>) {
        self.servers = servers;
    }

    pub fn servers(&self) -> &[Server] {
        &self.servers
    }

    pub fn get(&self, server_id: &str) -> Option<&Server> {
        self.servers
            .iter()
            .find(|s| s.server_id.as_str() == server_id)
    }

    pub fn contains(&self, server_id: &str) -> bool {
        self.get(server_id).is_some()
    }

    pub fn ids(&self) -> Vec<ServerId> {
        self.servers.iter().map(|s| s.server_id.clone()).collect()
    }

    pub fn len(&self) -> usize {
        self.servers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.servers.is_empty()
    }

    /// Returns the previous status, or `None` if no entry matched.
    pub fn set_status(&mut self, server_id: &str, status: ServerStatus) -> Option<ServerStatus> {
        let server = self.get_mut(server_id)?;
        Some(std::mem::replace(&mut server.status, status))
    }

    /// Returns the updated address, or `None` if no entry matched.
    pub fn set_address(&mut self, server_id: &str, address: ServerAddress) -> Option<&ServerAddress> {
        let server = self.get_mut(server_id)?;
        server.address = address;
        Some(&server.address)
    }

    /// Returns `false` if no entry matched.
    pub fn set_plugins(&mut self, server_id: &str, plugins: PluginSet) -> bool {
        match self.get_mut(server_id) {
            Some(server) => {
                server.plugins = plugins;
                true
            }
            None => false,
        }
    }

    /// Insert a server, replacing any entry with the same id in place.
    pub fn upsert(&mut self, server: Server) {
        match self.get_mut(server.server_id.as_str()) {
            Some(existing) => *existing = server,
            None => self.servers.push(server),
        }
    }

    pub fn remove(&mut self, server_id: &str) -> Option<Server> {
        let index = self
            .servers
            .iter()
            .position(|s| s.server_id.as_str() == server_id)?;
        Some(self.servers.remove(index))
    }

    pub fn clear(&mut self) {
        self.servers.clear();
    }

    fn get_mut(&mut self, server_id: &str) -> Option<&mut Server> {
        self.servers
            .iter_mut()
            .find(|s| s.server_id.as_str() == server_id)
    }
}
