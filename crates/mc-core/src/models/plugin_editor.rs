use crate::{PluginSet, Server, ServerId};

/// Transient plugin selection for one server.
///
/// Toggles only touch the selection; nothing reaches the server entry until the
/// selection is saved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PluginEditor {
    target: ServerId,
    selection: PluginSet,
}

impl PluginEditor {
    /// Seed the selection with the server's currently installed plugins.
    pub fn for_server(server: &Server) -> Self {
        Self {
            target: server.server_id.clone(),
            selection: server.plugins.clone(),
        }
    }

    pub fn target(&self) -> &ServerId {
        &self.target
    }

    pub fn selection(&self) -> &PluginSet {
        &self.selection
    }

    pub fn toggle(&mut self, name: &str) -> bool {
        self.selection.toggle(name)
    }

    pub fn into_parts(self) -> (ServerId, PluginSet) {
        (self.target, self.selection)
    }
}
