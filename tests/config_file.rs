//! Configuration file loading and saving.

use std::fs;

use tempfile::TempDir;
use uav_telemetry::config::{AppConfig, TrajectoryKind};
use uav_telemetry::transport::MockSocketFactory;
use uav_telemetry::{Error, app};

#[test]
fn test_save_and_load() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("uav-telemetry.toml");

    let mut config = AppConfig::default();
    config.network.port = 10016;
    config.trajectory.steps = 3;
    config.to_file(&path).unwrap();

    let loaded = AppConfig::from_file(&path).unwrap();
    assert_eq!(loaded, config);
}

#[test]
fn test_load_partial_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("partial.toml");
    fs::write(
        &path,
        r#"
[schedule]
interval_ms = 1

[trajectory]
steps = 4
start = [0.0, 0.0, 1.0]
delta = [0.0, 0.0, 0.0]
orientation = [1.0, 0.0, 0.0, 0.0]
battery_start = 0.5
battery_drain = 0.0
"#,
    )
    .unwrap();

    let config = AppConfig::from_file(&path).unwrap();
    assert_eq!(config.trajectory.kind, TrajectoryKind::Linear);
    assert_eq!(config.network.port, 10001);

    let factory = MockSocketFactory::new();
    let summary = app::run_with(&config, factory.clone()).unwrap();
    assert_eq!(summary.sent, 4);
    assert!(
        factory
            .sent()
            .iter()
            .all(|d| d.text() == "state 0 0 1 1 0 0 0 0.5")
    );
}

#[test]
fn test_missing_file_is_io_error() {
    let dir = TempDir::new().unwrap();
    let result = AppConfig::from_file(dir.path().join("absent.toml"));
    assert!(matches!(result, Err(Error::Io(_))));
}

#[test]
fn test_shipped_example_config_parses() {
    let path = concat!(env!("CARGO_MANIFEST_DIR"), "/config/uav-telemetry.toml");
    let config = AppConfig::from_file(path).unwrap();
    assert_eq!(config, AppConfig::default());
}
