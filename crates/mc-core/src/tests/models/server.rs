use crate::tests::sample_server;
use crate::{PluginEditor, Server, ServerStatus};

#[test]
fn test_server_deserializes_collaborator_shape() {
    let json = r#"{
        "serverId": "ab12cd34",
        "serverName": "Survival",
        "version": "1.19.4",
        "status": "created",
        "ip": "play.example.com",
        "port": 25570,
        "maxPlayers": 20,
        "onlinePlayers": 0,
        "createdAt": "2025-10-15T10:30:00",
        "plugins": ["EssentialsX", "WorldEdit"]
    }"#;

    let server: Server = serde_json::from_str(json).unwrap();

    assert_eq!(server.server_id.as_str(), "ab12cd34");
    assert_eq!(server.name, "Survival");
    assert_eq!(server.status, ServerStatus::Created);
    assert_eq!(server.address.ip, "play.example.com");
    assert_eq!(server.address.port, 25570);
    assert_eq!(server.created_at.as_deref(), Some("2025-10-15T10:30:00"));
    assert_eq!(server.plugins.len(), 2);
}

#[test]
fn test_server_tolerates_missing_optional_fields() {
    let json = r#"{
        "serverId": "s1",
        "serverName": "Bare",
        "version": "1.20.1",
        "status": "stopped",
        "ip": "localhost",
        "port": 25565,
        "maxPlayers": 10
    }"#;

    let server: Server = serde_json::from_str(json).unwrap();

    assert_eq!(server.online_players, 0);
    assert!(server.created_at.is_none());
    assert!(server.plugins.is_empty());
}

#[test]
fn test_observed_players_is_zero_unless_running() {
    let mut server = sample_server("s1", ServerStatus::Stopped);
    server.online_players = 7;
    assert_eq!(server.observed_players(), 0);

    server.status = ServerStatus::Running;
    assert_eq!(server.observed_players(), 7);
}

#[test]
fn test_connection_string() {
    let server = sample_server("s1", ServerStatus::Running);
    assert_eq!(server.connection_string(), "1.2.3.4:25565");
}

#[test]
fn test_plugin_editor_does_not_touch_server() {
    let server = sample_server("s1", ServerStatus::Running);
    let mut editor = PluginEditor::for_server(&server);

    editor.toggle("LuckPerms");
    editor.toggle("WorldEdit");

    assert!(editor.selection().contains("LuckPerms"));
    assert!(!editor.selection().contains("WorldEdit"));
    assert!(server.plugins.contains("WorldEdit"));
    assert_eq!(editor.target().as_str(), "s1");
}
