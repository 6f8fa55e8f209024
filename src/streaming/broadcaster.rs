//! Telemetry broadcaster: one state line, one datagram, one socket
//!
//! # Send sequence
//!
//! ```text
//! 1. open socket          -> SocketCreation on failure
//! 2. enable SO_BROADCAST  -> SocketOption on failure (nothing sent)
//! 3. send_to(target)      -> Send on failure
//! 4. drop socket          (every path)
//! ```
//!
//! Broadcast is enabled even when the destination is a unicast host.
//! Each call logs exactly one line and there is no retry: a failed send is
//! reported and the caller moves on.

use crate::error::Result;
use crate::streaming::wire::format_state;
use crate::transport::SocketFactory;
use crate::types::VehicleState;
use std::net::{Ipv4Addr, SocketAddrV4};

/// Fire-and-forget UDP telemetry sender
pub struct TelemetryBroadcaster<F: SocketFactory> {
    factory: F,
    target: SocketAddrV4,
}

impl<F: SocketFactory> TelemetryBroadcaster<F> {
    /// Create a broadcaster sending to `address:port`
    pub fn new(factory: F, address: Ipv4Addr, port: u16) -> Self {
        Self {
            factory,
            target: SocketAddrV4::new(address, port),
        }
    }

    /// Destination of every datagram
    pub fn target(&self) -> SocketAddrV4 {
        self.target
    }

    /// Format a state and send it
    pub fn broadcast(&self, state: &VehicleState) -> Result<usize> {
        let line = format_state(state);
        self.send(&line)
    }

    /// Send one line as a single datagram
    ///
    /// The socket lives only for the duration of this call. Errors are
    /// logged here; the returned `Result` lets callers count outcomes.
    pub fn send(&self, line: &str) -> Result<usize> {
        let result = self.try_send(line);

        match &result {
            Ok(_) => log::info!("Sent \"{}\" to port {}", line, self.target.port()),
            Err(e) => log::error!(
                "Send to {} failed at {}: {}",
                self.target,
                e.step(),
                e
            ),
        }

        result
    }

    fn try_send(&self, line: &str) -> Result<usize> {
        let mut socket = self.factory.open()?;
        socket.set_broadcast(true)?;
        socket.send_to(line.as_bytes(), self.target)
    }
}
