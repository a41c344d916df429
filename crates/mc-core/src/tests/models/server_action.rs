use crate::{ServerAction, ServerStatus};

use std::str::FromStr;

#[test]
fn test_stop_is_optimistically_stopped() {
    assert_eq!(
        ServerAction::Stop.optimistic_status(),
        ServerStatus::Stopped
    );
}

#[test]
fn test_start_and_restart_are_optimistically_starting() {
    assert_eq!(
        ServerAction::Start.optimistic_status(),
        ServerStatus::Starting
    );
    assert_eq!(
        ServerAction::Restart.optimistic_status(),
        ServerStatus::Starting
    );
}

#[test]
fn test_server_action_round_trips_through_str() {
    for action in [ServerAction::Start, ServerAction::Stop, ServerAction::Restart] {
        assert_eq!(ServerAction::from_str(action.as_str()).unwrap(), action);
    }
    assert!(ServerAction::from_str("reboot").is_err());
}

#[test]
fn test_past_tense() {
    assert_eq!(ServerAction::Restart.past_tense(), "restarted");
}
