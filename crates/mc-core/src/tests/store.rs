use crate::tests::sample_server;
use crate::{PluginSet, ServerAddress, ServerStatus, ServerStore};

fn store_with(ids: &[&str]) -> ServerStore {
    let mut store = ServerStore::new();
    store.replace_all(
        ids.iter()
            .map(|id| sample_server(id, ServerStatus::Stopped))
            .collect(),
    );
    store
}

#[test]
fn test_set_status_returns_previous() {
    let mut store = store_with(&["s1", "s2"]);

    let previous = store.set_status("s1", ServerStatus::Starting);

    assert_eq!(previous, Some(ServerStatus::Stopped));
    assert_eq!(store.get("s1").unwrap().status, ServerStatus::Starting);
    assert_eq!(store.get("s2").unwrap().status, ServerStatus::Stopped);
}

#[test]
fn test_set_status_unknown_id_is_none() {
    let mut store = store_with(&["s1"]);
    assert!(store.set_status("nope", ServerStatus::Running).is_none());
}

#[test]
fn test_remove_drops_exactly_one_entry() {
    let mut store = store_with(&["s1", "s2", "s3"]);
    let before_s3 = store.get("s3").unwrap().clone();

    let removed = store.remove("s2").unwrap();

    assert_eq!(removed.server_id.as_str(), "s2");
    assert_eq!(store.len(), 2);
    assert!(!store.contains("s2"));
    assert_eq!(store.get("s3").unwrap(), &before_s3);
}

#[test]
fn test_set_address_replaces_whole_field() {
    let mut store = store_with(&["s1"]);

    store.set_address("s1", ServerAddress::new("5.6.7.8", 25565));

    assert_eq!(
        store.get("s1").unwrap().connection_string(),
        "5.6.7.8:25565"
    );
}

#[test]
fn test_set_plugins_replaces_set() {
    let mut store = store_with(&["s1"]);

    assert!(store.set_plugins("s1", PluginSet::from_iter(["Vault"])));

    let plugins = &store.get("s1").unwrap().plugins;
    assert_eq!(plugins.iter().collect::<Vec<_>>(), vec!["Vault"]);
    assert!(!store.set_plugins("missing", PluginSet::new()));
}

#[test]
fn test_upsert_replaces_in_place() {
    let mut store = store_with(&["s1", "s2"]);
    let mut updated = sample_server("s1", ServerStatus::Running);
    updated.name = String::from("Renamed");

    store.upsert(updated);
    store.upsert(sample_server("s3", ServerStatus::Created));

    assert_eq!(store.len(), 3);
    assert_eq!(store.servers()[0].name, "Renamed");
    assert_eq!(store.servers()[2].server_id.as_str(), "s3");
}

#[test]
fn test_clear_empties_store() {
    let mut store = store_with(&["s1", "s2"]);
    store.clear();
    assert!(store.is_empty());
}
