//! Maps user intents to collaborator calls and local store reconciliation.
//!
//! Every action emits one user-visible notification for its outcome and also
//! returns the outcome, so callers can pick an exit code or chain actions.

mod error;

pub use error::{DashboardError, Result as DashboardResult};

use crate::clipboard::Clipboard;
use crate::confirm::Confirm;
use crate::notify::{Notification, Notifier};
use crate::{Client, ProvisionedServer, Session};

use mc_config::{DashboardConfig, write_atomic};
use mc_core::{
    ConfigBundle, DEFAULT_SERVER_IP, DEFAULT_SERVER_VERSION, PluginEditor, PluginSet, Server,
    ServerAction, ServerAddress, ServerId, ServerStatus, ServerStore,
};

use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use log::{debug, error, info, warn};

const CLEAR_ALL_PROMPT: &str = "Delete ALL servers? This cannot be undone.";

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Marks a server as having a remote call outstanding until dropped.
struct InFlightGuard<'a> {
    in_flight: &'a Mutex<HashSet<ServerId>>,
    server_id: ServerId,
}

impl Drop for InFlightGuard<'_> {
    fn drop(&mut self) {
        lock(self.in_flight).remove(&self.server_id);
    }
}

pub struct Dispatcher {
    client: Client,
    session: Mutex<Session>,
    store: Mutex<ServerStore>,
    in_flight: Mutex<HashSet<ServerId>>,
    address_edit: Mutex<Option<ServerId>>,
    plugin_edit: Mutex<Option<PluginEditor>>,
    notifier: Arc<dyn Notifier>,
    clipboard: Clipboard,
    settings: DashboardConfig,
}

impl Dispatcher {
    pub fn new(
        client: Client,
        session: Session,
        notifier: Arc<dyn Notifier>,
        clipboard: Clipboard,
        settings: DashboardConfig,
    ) -> Self {
        Self {
            client,
            session: Mutex::new(session),
            store: Mutex::new(ServerStore::new()),
            in_flight: Mutex::new(HashSet::new()),
            address_edit: Mutex::new(None),
            plugin_edit: Mutex::new(None),
            notifier,
            clipboard,
            settings,
        }
    }

    // =========================================================================
    // Store access
    // =========================================================================

    pub fn servers(&self) -> Vec<Server> {
        lock(&self.store).servers().to_vec()
    }

    pub fn server(&self, server_id: &str) -> Option<Server> {
        lock(&self.store).get(server_id).cloned()
    }

    pub fn identity(&self) -> Option<String> {
        lock(&self.session).identity().map(String::from)
    }

    /// Replace the local list with the collaborator's view of this identity's servers.
    ///
    /// Without an identity the list is empty and nothing is requested. Failures are
    /// logged and leave the list empty; no notification is shown.
    pub async fn load(&self) -> usize {
        let Some(identity) = self.identity() else {
            debug!("No identity, skipping server load");
            lock(&self.store).clear();
            return 0;
        };

        match self.client.list_servers(&identity).await {
            Ok(servers) => {
                let count = servers.len();
                lock(&self.store).replace_all(servers);
                info!("Loaded {count} servers");
                count
            }
            Err(e) => {
                error!("Error loading servers: {e}");
                lock(&self.store).clear();
                0
            }
        }
    }

    // =========================================================================
    // Lifecycle actions
    // =========================================================================

    pub async fn start(&self, server_id: &str) -> DashboardResult<ServerStatus> {
        self.dispatch(server_id, ServerAction::Start).await
    }

    pub async fn stop(&self, server_id: &str) -> DashboardResult<ServerStatus> {
        self.dispatch(server_id, ServerAction::Stop).await
    }

    pub async fn restart(&self, server_id: &str) -> DashboardResult<ServerStatus> {
        self.dispatch(server_id, ServerAction::Restart).await
    }

    /// Optimistic status first, then adopt whatever status the collaborator reports.
    async fn dispatch(&self, server_id: &str, action: ServerAction) -> DashboardResult<ServerStatus> {
        let _in_flight = self.begin_remote_call(server_id)?;

        let Some(previous) = lock(&self.store).set_status(server_id, action.optimistic_status())
        else {
            return Err(self.fail(DashboardError::not_found(server_id), "Server not found"));
        };

        let id = ServerId::from(server_id);
        let identity = self.identity();

        match self
            .client
            .change_state(identity.as_deref(), &id, action)
            .await
        {
            Ok(new_status) => {
                lock(&self.store).set_status(server_id, new_status);
                info!("Server {server_id} {} ({new_status})", action.past_tense());
                self.notifier.notify(Notification::success(
                    "Success!",
                    format!("Server {}", action.past_tense()),
                ));
                Ok(new_status)
            }
            Err(e) => {
                if self.settings.rollback_on_failure {
                    lock(&self.store).set_status(server_id, previous);
                }
                Err(self.fail(e.into(), "Could not perform the action"))
            }
        }
    }

    pub async fn delete(&self, server_id: &str) -> DashboardResult<()> {
        let _in_flight = self.begin_remote_call(server_id)?;

        if !lock(&self.store).contains(server_id) {
            return Err(self.fail(DashboardError::not_found(server_id), "Server not found"));
        }

        let id = ServerId::from(server_id);
        let identity = self.identity();

        match self.client.delete_server(identity.as_deref(), &id).await {
            Ok(()) => {
                lock(&self.store).remove(server_id);
                info!("Deleted server {server_id}");
                self.notifier.notify(Notification::destructive(
                    "Server deleted",
                    "The server was deleted",
                ));
                Ok(())
            }
            Err(e) => Err(self.fail(e.into(), "Could not delete the server")),
        }
    }

    /// Delete every server one request at a time, then clear the list.
    ///
    /// Individual delete failures are logged and do not stop the loop; the list is
    /// cleared and one summary notification is emitted regardless.
    pub async fn clear_all(&self, confirm: &dyn Confirm) -> DashboardResult<usize> {
        if !confirm.confirm(CLEAR_ALL_PROMPT) {
            info!("Clear all declined");
            return Err(DashboardError::cancelled());
        }

        let Some(identity) = self.identity() else {
            return Err(self.fail(
                DashboardError::missing_identity(),
                "Could not delete the servers",
            ));
        };

        let ids = lock(&self.store).ids();
        for id in &ids {
            if let Err(e) = self.client.delete_server(Some(&identity), id).await {
                warn!("Failed to delete server {id}: {e}");
            }
        }

        lock(&self.store).clear();
        self.notifier.notify(Notification::destructive(
            "All servers deleted",
            format!("{} servers removed", ids.len()),
        ));
        Ok(ids.len())
    }

    // =========================================================================
    // Address editing
    // =========================================================================

    /// Select the server whose address the next `update_address` applies to.
    pub fn begin_address_edit(&self, server_id: &str) -> DashboardResult<()> {
        if !lock(&self.store).contains(server_id) {
            return Err(DashboardError::not_found(server_id));
        }
        *lock(&self.address_edit) = Some(ServerId::from(server_id));
        Ok(())
    }

    pub fn cancel_address_edit(&self) {
        *lock(&self.address_edit) = None;
    }

    pub fn address_edit_target(&self) -> Option<ServerId> {
        lock(&self.address_edit).clone()
    }

    /// Apply a new host to the selected server; the port is kept.
    ///
    /// No selection or a blank address is a no-op returning `Ok(None)`.
    pub async fn update_address(&self, new_ip: &str) -> DashboardResult<Option<ServerAddress>> {
        let new_ip = new_ip.trim();
        let Some(target) = self.address_edit_target() else {
            debug!("No server selected for address edit");
            return Ok(None);
        };
        if new_ip.is_empty() {
            debug!("Empty address, nothing to update");
            return Ok(None);
        }

        let identity = self.identity();
        let confirmed_ip = match self
            .client
            .update_ip(identity.as_deref(), &target, new_ip)
            .await
        {
            Ok(ip) => ip,
            Err(e) => return Err(self.fail(e.into(), "Could not update the address")),
        };

        let updated = lock(&self.store)
            .get(target.as_str())
            .map(|server| server.address.with_ip(confirmed_ip));
        let Some(address) = updated else {
            return Err(self.fail(DashboardError::not_found(target.as_str()), "Server not found"));
        };
        lock(&self.store).set_address(target.as_str(), address.clone());

        self.cancel_address_edit();
        self.notifier.notify(Notification::success(
            "Address updated",
            format!("New address: {address}"),
        ));
        Ok(Some(address))
    }

    // =========================================================================
    // Plugin editing (local only; no collaborator call exists for plugins)
    // =========================================================================

    /// Start a plugin selection seeded from the server's installed plugins.
    pub fn begin_plugin_edit(&self, server_id: &str) -> DashboardResult<PluginSet> {
        let server = self
            .server(server_id)
            .ok_or_else(|| DashboardError::not_found(server_id))?;
        let editor = PluginEditor::for_server(&server);
        let selection = editor.selection().clone();
        *lock(&self.plugin_edit) = Some(editor);
        Ok(selection)
    }

    /// Flip one plugin in the current selection; returns whether it is now selected.
    pub fn toggle_plugin(&self, name: &str) -> DashboardResult<bool> {
        let mut guard = lock(&self.plugin_edit);
        let editor = guard
            .as_mut()
            .ok_or_else(|| DashboardError::precondition("No plugin edit in progress"))?;
        Ok(editor.toggle(name))
    }

    pub fn plugin_selection(&self) -> Option<PluginSet> {
        lock(&self.plugin_edit)
            .as_ref()
            .map(|editor| editor.selection().clone())
    }

    /// Save and close the current plugin selection.
    pub fn save_plugin_edit(&self) -> DashboardResult<usize> {
        let editor = lock(&self.plugin_edit)
            .take()
            .ok_or_else(|| DashboardError::precondition("No plugin edit in progress"))?;
        let (target, selection) = editor.into_parts();
        self.save_plugins(target.as_str(), selection)
    }

    /// Replace the server's plugin set with `selection`.
    pub fn save_plugins(&self, server_id: &str, selection: PluginSet) -> DashboardResult<usize> {
        let count = selection.len();
        if !lock(&self.store).set_plugins(server_id, selection) {
            return Err(self.fail(DashboardError::not_found(server_id), "Server not found"));
        }

        self.notifier.notify(Notification::success(
            "Plugins saved",
            format!("{count} plugins installed"),
        ));
        Ok(count)
    }

    // =========================================================================
    // Connecting
    // =========================================================================

    /// Make sure the server is up, then put its address on the clipboard.
    ///
    /// A stopped server is started first and the address is copied after a fixed
    /// wait; the wait does not confirm the server is actually ready.
    pub async fn play(&self, server_id: &str) -> DashboardResult<String> {
        let Some(server) = self.server(server_id) else {
            return Err(self.fail(DashboardError::not_found(server_id), "Server not found"));
        };

        if !server.status.is_running() {
            self.notifier.notify(Notification::success(
                "Starting server",
                format!("{} is starting, hang on", server.name),
            ));
            if let Err(e) = self.start(server_id).await {
                warn!("Start before play failed: {e}");
            }
            tokio::time::sleep(self.settings.play_ready_delay()).await;
        }

        let connection = self
            .server(server_id)
            .map(|s| s.connection_string())
            .unwrap_or_else(|| server.connection_string());

        self.clipboard
            .copy_text(&connection, self.notifier.as_ref())
            .await?;
        self.notifier.notify(
            Notification::success("Server ready", format!("Connect to {connection}"))
                .with_duration(self.settings.ready_notice()),
        );
        Ok(connection)
    }

    /// Copy the server's `ip:port` to the clipboard.
    pub async fn copy_connection(&self, server_id: &str) -> DashboardResult<String> {
        let Some(server) = self.server(server_id) else {
            return Err(self.fail(DashboardError::not_found(server_id), "Server not found"));
        };

        let connection = server.connection_string();
        self.clipboard
            .copy_text(&connection, self.notifier.as_ref())
            .await?;
        Ok(connection)
    }

    // =========================================================================
    // Files and provisioning
    // =========================================================================

    /// Render the server's config bundle and save it into the download directory.
    pub fn download_config_bundle(&self, server_id: &str) -> DashboardResult<PathBuf> {
        let Some(server) = self.server(server_id) else {
            return Err(self.fail(DashboardError::not_found(server_id), "Server not found"));
        };

        let bundle = ConfigBundle::render(&server);
        let download_dir = Path::new(&self.settings.download_dir);
        let path = download_dir.join(&bundle.file_name);

        if path.parent() != Some(download_dir) {
            return Err(self.fail(
                DashboardError::precondition(format!(
                    "Bundle file name {:?} escapes the download directory",
                    bundle.file_name
                )),
                "Could not save the server files",
            ));
        }

        if let Err(e) = write_atomic(&path, bundle.contents.as_bytes()) {
            return Err(self.fail(e.into(), "Could not save the server files"));
        }

        info!("Saved config bundle to {}", path.display());
        self.notifier.notify(Notification::success(
            "Files downloaded",
            format!("Saved {}", bundle.file_name),
        ));
        Ok(path)
    }

    /// Provision a server and echo it into the local list.
    ///
    /// Mints and persists an identity token first if the session has none.
    pub async fn provision(
        &self,
        name: &str,
        version: &str,
        ip: &str,
    ) -> DashboardResult<ProvisionedServer> {
        let name = name.trim();
        if name.is_empty() {
            return Err(self.fail(
                DashboardError::precondition("Server name is required"),
                "Enter a server name",
            ));
        }
        let version = match version.trim() {
            "" => DEFAULT_SERVER_VERSION,
            v => v,
        };
        let ip = match ip.trim() {
            "" => DEFAULT_SERVER_IP,
            v => v,
        };

        let identity = match lock(&self.session).ensure_identity() {
            Ok(identity) => identity,
            Err(e) => return Err(self.fail(e.into(), "Could not create the server")),
        };

        match self.client.provision(&identity, name, version, ip).await {
            Ok(created) => {
                if let Some(message) = &created.message {
                    info!("Provisioning service: {message}");
                }
                lock(&self.store).upsert(created.server.clone());
                self.notifier.notify(Notification::success(
                    "Server created!",
                    format!("{name} is ready, download its files to get started"),
                ));
                Ok(created)
            }
            Err(e) => Err(self.fail(e.into(), "Could not create the server")),
        }
    }

    // =========================================================================
    // Helpers
    // =========================================================================

    fn begin_remote_call(&self, server_id: &str) -> DashboardResult<InFlightGuard<'_>> {
        let id = ServerId::from(server_id);
        if !lock(&self.in_flight).insert(id.clone()) {
            return Err(self.fail(
                DashboardError::in_flight(server_id),
                "An action is already in progress for this server",
            ));
        }
        Ok(InFlightGuard {
            in_flight: &self.in_flight,
            server_id: id,
        })
    }

    /// Surface a failure to the user and hand the error back to the caller.
    fn fail(&self, err: DashboardError, description: &str) -> DashboardError {
        warn!("{description}: {err}");
        self.notifier.notify(Notification::failure(description));
        err
    }
}
