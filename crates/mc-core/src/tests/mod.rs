mod models;
mod store;

use crate::{PluginSet, Server, ServerAddress, ServerStatus};

pub(crate) fn sample_server(id: &str, status: ServerStatus) -> Server {
    let mut server = Server::new(
        id,
        "Emerald World",
        "1.20.1",
        status,
        ServerAddress::new("1.2.3.4", 25565),
    );
    server.plugins = PluginSet::from_iter(["EssentialsX", "WorldEdit"]);
    server
}
