use crate::Config;
use crate::tests::{EnvGuard, setup_config_dir};

use googletest::assert_that;
use googletest::prelude::{anything, eq, err, ok, some};
use serial_test::serial;

// =========================================================================
// Happy Path Tests
// =========================================================================

#[test]
#[serial]
fn given_no_config_file_when_load_then_ok_with_defaults() {
    // Given
    let _temp = setup_config_dir();

    // When
    let result = Config::load();

    // Then
    assert_that!(result, ok(anything()));
    let config = result.unwrap();
    assert_that!(
        config.api.manager_url.as_str(),
        eq(crate::DEFAULT_MANAGER_URL)
    );
    assert_that!(config.api.identity_header.as_str(), eq("X-User-Id"));
    assert_that!(config.dashboard.play_ready_delay_ms, eq(3000));
    assert_that!(config.dashboard.rollback_on_failure, eq(true));
}

#[test]
#[serial]
fn given_no_config_file_when_load_and_validate_then_ok() {
    // Given
    let _temp = setup_config_dir();

    // When
    let config = Config::load().unwrap();
    let result = config.validate();

    // Then
    assert_that!(result, ok(anything()));
}

#[test]
#[serial]
fn given_valid_toml_file_when_load_then_uses_toml_values() {
    // Given
    let (temp, _guard) = setup_config_dir();
    std::fs::write(
        temp.path().join("config.toml"),
        r#"
              [api]
              manager_url = "https://api.example.com/servers"

              [dashboard]
              play_ready_delay_ms = 500
              rollback_on_failure = false

              [logging]
              level = "debug"
          "#,
    )
    .unwrap();

    // When
    let config = Config::load().unwrap();

    // Then
    assert_that!(
        config.api.manager_url.as_str(),
        eq("https://api.example.com/servers")
    );
    assert_that!(config.dashboard.play_ready_delay_ms, eq(500));
    assert_that!(config.dashboard.rollback_on_failure, eq(false));
    assert_that!(*config.logging.level, eq(log::LevelFilter::Debug));
    // Untouched sections keep defaults
    assert_that!(
        config.api.provision_url.as_str(),
        eq(crate::DEFAULT_PROVISION_URL)
    );
}

#[test]
#[serial]
fn given_env_var_and_toml_when_load_then_env_var_overrides_toml() {
    // Given
    let (temp, _guard) = setup_config_dir();
    std::fs::write(
        temp.path().join("config.toml"),
        "[dashboard]\nplay_ready_delay_ms = 500",
    )
    .unwrap();
    let _delay = EnvGuard::set("MC_PLAY_READY_DELAY_MS", "0");

    // When
    let config = Config::load().unwrap();

    // Then
    assert_that!(config.dashboard.play_ready_delay_ms, eq(0));
}

#[test]
#[serial]
fn given_multiple_env_overrides_when_load_then_all_apply() {
    // Given
    let _temp = setup_config_dir();
    let _url = EnvGuard::set("MC_API_MANAGER_URL", "http://10.0.0.5:9000/manage");
    let _rollback = EnvGuard::set("MC_ROLLBACK_ON_FAILURE", "false");
    let _file = EnvGuard::set("MC_LOG_FILE", "/tmp/mcdash.log");
    let _colored = EnvGuard::set("MC_LOG_COLORED", "0");

    // When
    let config = Config::load().unwrap();

    // Then
    assert_that!(
        config.api.manager_url.as_str(),
        eq("http://10.0.0.5:9000/manage")
    );
    assert_that!(config.dashboard.rollback_on_failure, eq(false));
    assert_that!(config.logging.file.as_deref(), some(eq("/tmp/mcdash.log")));
    assert_that!(config.logging.colored, eq(false));
}

#[test]
#[serial]
fn given_unparseable_env_value_when_load_then_keeps_default() {
    // Given
    let _temp = setup_config_dir();
    let _delay = EnvGuard::set("MC_PLAY_READY_DELAY_MS", "soon");

    // When
    let config = Config::load().unwrap();

    // Then
    assert_that!(config.dashboard.play_ready_delay_ms, eq(3000));
}

// =========================================================================
// Error Tests
// =========================================================================

#[test]
#[serial]
fn given_malformed_toml_when_load_then_error() {
    // Given
    let (temp, _guard) = setup_config_dir();
    std::fs::write(temp.path().join("config.toml"), "[api\nmanager_url = ").unwrap();

    // When
    let result = Config::load();

    // Then
    assert_that!(result, err(anything()));
}

#[test]
#[serial]
fn given_missing_config_dir_when_load_then_dir_created() {
    // Given
    let (temp, _guard) = setup_config_dir();
    let nested = temp.path().join("nested").join("dir");
    let _dir = EnvGuard::set("MC_CONFIG_DIR", nested.to_str().unwrap());

    // When
    let result = Config::load();

    // Then
    assert_that!(result, ok(anything()));
    assert!(nested.is_dir());
}
