//! Application wiring
//!
//! Turns an [`AppConfig`] into a broadcaster, a trajectory and a scheduler,
//! then runs the loop to completion.

use crate::config::AppConfig;
use crate::error::Result;
use crate::scheduler::{RunSummary, Scheduler};
use crate::streaming::TelemetryBroadcaster;
use crate::transport::{SocketFactory, UdpSocketFactory};

/// Run the configured loop over real UDP sockets
pub fn run(config: &AppConfig) -> Result<RunSummary> {
    let factory = UdpSocketFactory::new(config.network.bind_addr()?);
    run_with(config, factory)
}

/// Run the configured loop over any socket factory
///
/// Only configuration errors are returned. Send failures are logged by the
/// broadcaster and counted in the summary.
pub fn run_with<F: SocketFactory>(config: &AppConfig, factory: F) -> Result<RunSummary> {
    let destination = config.network.destination_addr()?;
    let broadcaster = TelemetryBroadcaster::new(factory, destination, config.network.port);
    let trajectory = config.trajectory.build();
    let scheduler = Scheduler::new(config.schedule.interval());

    log::info!(
        "Sending {} states to {} every {} ms ({:?} trajectory)",
        trajectory.len(),
        broadcaster.target(),
        config.schedule.interval_ms,
        config.trajectory.kind
    );

    let summary = scheduler.run(&trajectory, |_, state| broadcaster.broadcast(state));

    log::info!(
        "Done: {} of {} states sent, {} failed",
        summary.sent,
        summary.attempted,
        summary.failed
    );
    Ok(summary)
}
