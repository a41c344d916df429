use crate::ServerStatus;

use std::str::FromStr;

#[test]
fn test_server_status_as_str() {
    assert_eq!(ServerStatus::Created.as_str(), "created");
    assert_eq!(ServerStatus::Stopped.as_str(), "stopped");
    assert_eq!(ServerStatus::Starting.as_str(), "starting");
    assert_eq!(ServerStatus::Running.as_str(), "running");
}

#[test]
fn test_server_status_from_str() {
    assert_eq!(
        ServerStatus::from_str("running").unwrap(),
        ServerStatus::Running
    );
    assert_eq!(
        ServerStatus::from_str("created").unwrap(),
        ServerStatus::Created
    );
    assert!(ServerStatus::from_str("paused").is_err());
}

#[test]
fn test_server_status_serde_is_lowercase() {
    let json = serde_json::to_string(&ServerStatus::Starting).unwrap();
    assert_eq!(json, "\"starting\"");

    let parsed: ServerStatus = serde_json::from_str("\"stopped\"").unwrap();
    assert_eq!(parsed, ServerStatus::Stopped);
}

#[test]
fn test_only_running_is_running() {
    assert!(ServerStatus::Running.is_running());
    assert!(!ServerStatus::Starting.is_running());
    assert!(!ServerStatus::Created.is_running());
}
