//! UDP transport on top of `std::net::UdpSocket`

use super::{DatagramSocket, SocketFactory};
use crate::error::{Error, Result};
use std::net::{Ipv4Addr, SocketAddrV4, UdpSocket};

/// Opens an ephemeral UDP socket per call
#[derive(Debug, Clone, Copy)]
pub struct UdpSocketFactory {
    bind_address: Ipv4Addr,
}

impl UdpSocketFactory {
    /// Create a factory binding to `bind_address:0`
    pub fn new(bind_address: Ipv4Addr) -> Self {
        Self { bind_address }
    }
}

impl Default for UdpSocketFactory {
    fn default() -> Self {
        Self::new(Ipv4Addr::UNSPECIFIED)
    }
}

impl SocketFactory for UdpSocketFactory {
    fn open(&self) -> Result<Box<dyn DatagramSocket>> {
        // Port 0: we only send, let the OS pick
        let socket = UdpSocket::bind(SocketAddrV4::new(self.bind_address, 0))
            .map_err(Error::SocketCreation)?;

        if let Ok(local) = socket.local_addr() {
            log::trace!("Opened UDP socket on {}", local);
        }

        Ok(Box::new(UdpDatagramSocket { socket }))
    }
}

/// Owned std socket; closed on drop
struct UdpDatagramSocket {
    socket: UdpSocket,
}

impl DatagramSocket for UdpDatagramSocket {
    fn set_broadcast(&mut self, enabled: bool) -> Result<()> {
        self.socket.set_broadcast(enabled).map_err(Error::SocketOption)
    }

    fn send_to(&mut self, payload: &[u8], target: SocketAddrV4) -> Result<usize> {
        self.socket.send_to(payload, target).map_err(Error::Send)
    }
}
