//! Tick-driven send loop
//!
//! The loop is paced by a `crossbeam_channel::tick` timer instead of a
//! sleep after every send. The first state goes out immediately, each
//! following one on the next tick, and there is no wait after the last.
//! A failed send is counted and never ends the loop early.

use crate::error::Result;
use crate::trajectory::Trajectory;
use crate::types::VehicleState;
use std::time::Duration;

/// Default pacing: one state per second
pub const DEFAULT_INTERVAL: Duration = Duration::from_secs(1);

/// Outcome counters for one run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub attempted: usize,
    pub sent: usize,
    pub failed: usize,
}

/// Fixed-rate driver for a trajectory
#[derive(Debug, Clone, Copy)]
pub struct Scheduler {
    interval: Duration,
}

impl Scheduler {
    pub fn new(interval: Duration) -> Self {
        Self { interval }
    }

    /// Emit every state of `trajectory` through `on_tick`
    ///
    /// `on_tick` receives the step index and the state. Its result only
    /// feeds the summary.
    pub fn run<T, C, R>(&self, trajectory: &T, mut on_tick: C) -> RunSummary
    where
        T: Trajectory + ?Sized,
        C: FnMut(usize, &VehicleState) -> Result<R>,
    {
        let mut summary = RunSummary::default();
        let total = trajectory.len();
        if total == 0 {
            log::debug!("Empty trajectory, nothing to send");
            return summary;
        }

        log::debug!(
            "Sending {} states every {} ms",
            total,
            self.interval.as_millis()
        );

        let ticker = crossbeam_channel::tick(self.interval);

        for step in 0..total {
            if step > 0 && ticker.recv().is_err() {
                // tick() never disconnects; stop cleanly if it ever does
                log::warn!("Tick timer closed after {} states", step);
                break;
            }

            let state = trajectory.state_at(step);
            summary.attempted += 1;
            match on_tick(step, &state) {
                Ok(_) => summary.sent += 1,
                Err(_) => summary.failed += 1,
            }
        }

        log::debug!(
            "Run finished: {} sent, {} failed",
            summary.sent,
            summary.failed
        );
        summary
    }
}
