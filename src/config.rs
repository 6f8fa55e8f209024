//! Configuration for the telemetry sender
//!
//! Loads configuration from an optional TOML file. Every section and key
//! has a default, and the defaults reproduce the reference run: ten states
//! along a straight climb, one per second, to `10.101.121.81:10001`.

use crate::error::{Error, Result};
use crate::scheduler::DEFAULT_INTERVAL;
use crate::trajectory::{LinearTrajectory, SegmentedTrajectory, Trajectory};
use serde::{Deserialize, Serialize};
use std::fs;
use std::net::Ipv4Addr;
use std::path::Path;
use std::time::Duration;

/// Top-level application configuration
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct AppConfig {
    pub network: NetworkConfig,
    pub schedule: ScheduleConfig,
    pub trajectory: TrajectoryConfig,
    pub logging: LoggingConfig,
}

/// Destination and local socket settings
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct NetworkConfig {
    /// Destination IPv4 literal
    ///
    /// A unicast host is expected; broadcast is enabled on the socket
    /// regardless.
    pub destination: String,
    /// Destination UDP port
    pub port: u16,
    /// Local address the ephemeral sending socket binds to
    pub bind_address: String,
}

impl NetworkConfig {
    /// Parsed destination address
    pub fn destination_addr(&self) -> Result<Ipv4Addr> {
        parse_ipv4("network.destination", &self.destination)
    }

    /// Parsed local bind address
    pub fn bind_addr(&self) -> Result<Ipv4Addr> {
        parse_ipv4("network.bind_address", &self.bind_address)
    }
}

impl Default for NetworkConfig {
    fn default() -> Self {
        Self {
            destination: "10.101.121.81".to_string(),
            port: 10001,
            bind_address: "0.0.0.0".to_string(),
        }
    }
}

/// Send loop pacing
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct ScheduleConfig {
    /// Time between consecutive states in milliseconds
    pub interval_ms: u64,
}

impl ScheduleConfig {
    pub fn interval(&self) -> Duration {
        Duration::from_millis(self.interval_ms)
    }
}

impl Default for ScheduleConfig {
    fn default() -> Self {
        Self {
            interval_ms: DEFAULT_INTERVAL.as_millis() as u64,
        }
    }
}

/// Which trajectory generator drives the loop
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TrajectoryKind {
    /// Straight line from `start` by `delta` per step
    #[default]
    Linear,
    /// Built-in climb, square and descent mission (linear parameters ignored)
    SquareMission,
}

/// Trajectory parameters
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct TrajectoryConfig {
    pub kind: TrajectoryKind,
    /// Number of states to send
    pub steps: usize,
    /// Starting position [x, y, z]
    pub start: [f64; 3],
    /// Position change per step [dx, dy, dz]
    pub delta: [f64; 3],
    /// Constant orientation quaternion [w, x, y, z]
    pub orientation: [f32; 4],
    pub battery_start: f64,
    /// Battery decrease per step
    pub battery_drain: f64,
}

impl TrajectoryConfig {
    /// Build the configured trajectory
    pub fn build(&self) -> Box<dyn Trajectory> {
        match self.kind {
            TrajectoryKind::Linear => Box::new(LinearTrajectory {
                start: self.start,
                delta: self.delta,
                orientation: self.orientation,
                battery_start: self.battery_start,
                battery_drain: self.battery_drain,
                steps: self.steps,
            }),
            TrajectoryKind::SquareMission => Box::new(SegmentedTrajectory::square_mission()),
        }
    }
}

impl Default for TrajectoryConfig {
    fn default() -> Self {
        let reference = LinearTrajectory::reference();
        Self {
            kind: TrajectoryKind::Linear,
            steps: reference.steps,
            start: reference.start,
            delta: reference.delta,
            orientation: reference.orientation,
            battery_start: reference.battery_start,
            battery_drain: reference.battery_drain,
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Default log level (trace, debug, info, warn, error); `RUST_LOG` wins
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

impl AppConfig {
    /// Load configuration from TOML file
    ///
    /// # Example
    /// ```no_run
    /// use uav_telemetry::config::AppConfig;
    ///
    /// let config = AppConfig::from_file("uav-telemetry.toml")?;
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        Self::from_toml(&contents)
    }

    /// Parse and validate configuration from a TOML string
    pub fn from_toml(contents: &str) -> Result<Self> {
        let config: AppConfig = toml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Save configuration to TOML file
    pub fn to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let contents = toml::to_string_pretty(self)?;
        fs::write(path, contents)?;
        Ok(())
    }

    /// Check values serde cannot check on its own
    pub fn validate(&self) -> Result<()> {
        self.network.destination_addr()?;
        self.network.bind_addr()?;
        if !matches!(
            self.logging.level.to_ascii_lowercase().as_str(),
            "off" | "error" | "warn" | "info" | "debug" | "trace"
        ) {
            return Err(Error::Config(format!(
                "logging.level: unknown level '{}'",
                self.logging.level
            )));
        }
        Ok(())
    }
}

fn parse_ipv4(key: &str, value: &str) -> Result<Ipv4Addr> {
    value
        .parse()
        .map_err(|e| Error::Config(format!("{}: '{}' is not an IPv4 address ({})", key, value, e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::streaming::format_state;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(
            config.network.destination_addr().unwrap(),
            Ipv4Addr::new(10, 101, 121, 81)
        );
        assert_eq!(config.network.port, 10001);
        assert_eq!(config.schedule.interval(), Duration::from_secs(1));
        assert_eq!(config.trajectory.kind, TrajectoryKind::Linear);
        assert_eq!(config.trajectory.steps, 10);
        assert_eq!(config.logging.level, "info");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_default_trajectory_is_reference() {
        let traj = AppConfig::default().trajectory.build();
        assert_eq!(traj.len(), 10);
        assert_eq!(
            format_state(&traj.state_at(3)),
            "state 116.403 39.903 3 0 1 0 0 97"
        );
    }

    #[test]
    fn test_toml_serialization() {
        let config = AppConfig::default();
        let toml_string = toml::to_string_pretty(&config).unwrap();

        assert!(toml_string.contains("[network]"));
        assert!(toml_string.contains("[schedule]"));
        assert!(toml_string.contains("[trajectory]"));
        assert!(toml_string.contains("[logging]"));
        assert!(toml_string.contains("destination = \"10.101.121.81\""));
        assert!(toml_string.contains("kind = \"linear\""));

        let back = AppConfig::from_toml(&toml_string).unwrap();
        assert_eq!(back, config);
    }

    #[test]
    fn test_partial_toml_fills_defaults() {
        let toml_content = r#"
[network]
destination = "127.0.0.1"

[trajectory]
kind = "square_mission"
"#;

        let config = AppConfig::from_toml(toml_content).unwrap();
        assert_eq!(config.network.destination, "127.0.0.1");
        assert_eq!(config.network.port, 10001);
        assert_eq!(config.schedule.interval_ms, 1000);
        assert_eq!(config.trajectory.kind, TrajectoryKind::SquareMission);
        assert_eq!(config.trajectory.build().len(), 40);
    }

    #[test]
    fn test_empty_toml_is_default() {
        assert_eq!(AppConfig::from_toml("").unwrap(), AppConfig::default());
    }

    #[test]
    fn test_invalid_destination_rejected() {
        let result = AppConfig::from_toml("[network]\ndestination = \"10.101.121\"\n");
        match result {
            Err(Error::Config(msg)) => assert!(msg.contains("network.destination")),
            other => panic!("Expected Config error, got {:?}", other),
        }
    }

    #[test]
    fn test_padded_address_rejected() {
        // The stored string is what gets used, so it must parse as written
        let result = AppConfig::from_toml("[network]\ndestination = \" 10.0.0.1 \"\n");
        assert!(matches!(result, Err(Error::Config(_))));

        let result = AppConfig::from_toml("[network]\nbind_address = \"0.0.0.0 \"\n");
        match result {
            Err(Error::Config(msg)) => assert!(msg.contains("network.bind_address")),
            other => panic!("Expected Config error, got {:?}", other),
        }
    }

    #[test]
    fn test_out_of_range_port_rejected() {
        let result = AppConfig::from_toml("[network]\nport = 70000\n");
        assert!(matches!(result, Err(Error::Config(_))));
    }

    #[test]
    fn test_unknown_trajectory_kind_rejected() {
        let result = AppConfig::from_toml("[trajectory]\nkind = \"spiral\"\n");
        assert!(matches!(result, Err(Error::Config(_))));
    }

    #[test]
    fn test_unknown_log_level_rejected() {
        let result = AppConfig::from_toml("[logging]\nlevel = \"loud\"\n");
        assert!(matches!(result, Err(Error::Config(_))));
    }
}
