//! Datagram transport abstraction
//!
//! The broadcaster never touches `std::net` directly. It asks a
//! [`SocketFactory`] for a fresh [`DatagramSocket`] per send and drops it
//! when done, which is what releases the OS handle. Tests swap in
//! [`MockSocketFactory`] to observe datagrams and inject failures.

use crate::error::Result;
use std::net::SocketAddrV4;

mod mock;
mod udp;

pub use mock::{FailurePoint, MockSocketFactory, SentDatagram};
pub use udp::UdpSocketFactory;

/// One connectionless datagram socket
pub trait DatagramSocket {
    /// Enable or disable `SO_BROADCAST`
    fn set_broadcast(&mut self, enabled: bool) -> Result<()>;

    /// Send one datagram, returns number of bytes written
    fn send_to(&mut self, payload: &[u8], target: SocketAddrV4) -> Result<usize>;
}

/// Source of fresh datagram sockets
pub trait SocketFactory {
    /// Allocate a new socket. Each call returns an independent socket.
    fn open(&self) -> Result<Box<dyn DatagramSocket>>;
}
