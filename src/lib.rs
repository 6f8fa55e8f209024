//! uav-telemetry - periodic UDP state sender for a simulated aerial vehicle
//!
//! Each tick formats one `state ...` line (position, orientation
//! quaternion, battery) and sends it as a single datagram from a fresh,
//! broadcast-enabled UDP socket. Sends are fire-and-forget: failures are
//! logged and the loop carries on.

pub mod app;
pub mod config;
pub mod error;
pub mod scheduler;
pub mod streaming;
pub mod trajectory;
pub mod transport;
pub mod types;

// Re-export commonly used types
pub use config::AppConfig;
pub use error::{Error, Result};
pub use scheduler::{RunSummary, Scheduler};
pub use streaming::{TelemetryBroadcaster, format_state};
pub use trajectory::{LinearTrajectory, SegmentedTrajectory, Trajectory};
pub use types::VehicleState;
