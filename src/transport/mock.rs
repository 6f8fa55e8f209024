//! Mock datagram transport for testing and dry runs

use super::{DatagramSocket, SocketFactory};
use crate::error::{Error, Result};
use std::io;
use std::net::SocketAddrV4;
use std::sync::{Arc, Mutex, MutexGuard};

/// Step at which the mock should fail
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailurePoint {
    /// `open()` fails
    Creation,
    /// `set_broadcast()` fails (platform without broadcast support)
    BroadcastOption,
    /// `send_to()` fails (network unreachable)
    Send,
}

/// A datagram captured by the mock
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SentDatagram {
    pub target: SocketAddrV4,
    pub payload: Vec<u8>,
    /// Whether `SO_BROADCAST` was enabled on the socket at send time
    pub broadcast: bool,
}

impl SentDatagram {
    /// Payload as text (lossy)
    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.payload).into_owned()
    }
}

/// Mock socket factory
///
/// Clones share state, so a test can keep one handle and give the other
/// to the broadcaster.
#[derive(Clone, Default)]
pub struct MockSocketFactory {
    inner: Arc<Mutex<MockInner>>,
}

#[derive(Default)]
struct MockInner {
    failure: Option<FailurePoint>,
    opened: usize,
    live: usize,
    sent: Vec<SentDatagram>,
}

impl MockSocketFactory {
    /// Create a new mock factory that always succeeds
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a mock factory failing at the given step
    pub fn failing_at(point: FailurePoint) -> Self {
        let factory = Self::new();
        factory.set_failure(Some(point));
        factory
    }

    /// Change the failure mode for subsequent operations
    pub fn set_failure(&self, point: Option<FailurePoint>) {
        self.lock().failure = point;
    }

    /// All datagrams sent so far
    pub fn sent(&self) -> Vec<SentDatagram> {
        self.lock().sent.clone()
    }

    /// Number of sockets successfully opened
    pub fn opened(&self) -> usize {
        self.lock().opened
    }

    /// Number of sockets opened and not yet dropped
    pub fn live(&self) -> usize {
        self.lock().live
    }

    fn lock(&self) -> MutexGuard<'_, MockInner> {
        self.inner.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl SocketFactory for MockSocketFactory {
    fn open(&self) -> Result<Box<dyn DatagramSocket>> {
        let mut inner = self.lock();
        if inner.failure == Some(FailurePoint::Creation) {
            return Err(Error::SocketCreation(io::Error::new(
                io::ErrorKind::PermissionDenied,
                "mock: socket creation refused",
            )));
        }
        inner.opened += 1;
        inner.live += 1;

        Ok(Box::new(MockSocket {
            inner: Arc::clone(&self.inner),
            broadcast: false,
        }))
    }
}

struct MockSocket {
    inner: Arc<Mutex<MockInner>>,
    broadcast: bool,
}

impl MockSocket {
    fn lock(&self) -> MutexGuard<'_, MockInner> {
        self.inner.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl DatagramSocket for MockSocket {
    fn set_broadcast(&mut self, enabled: bool) -> Result<()> {
        if self.lock().failure == Some(FailurePoint::BroadcastOption) {
            return Err(Error::SocketOption(io::Error::new(
                io::ErrorKind::Unsupported,
                "mock: SO_BROADCAST not supported",
            )));
        }
        self.broadcast = enabled;
        Ok(())
    }

    fn send_to(&mut self, payload: &[u8], target: SocketAddrV4) -> Result<usize> {
        let broadcast = self.broadcast;
        let mut inner = self.lock();
        if inner.failure == Some(FailurePoint::Send) {
            return Err(Error::Send(io::Error::new(
                io::ErrorKind::NetworkUnreachable,
                "mock: network unreachable",
            )));
        }
        inner.sent.push(SentDatagram {
            target,
            payload: payload.to_vec(),
            broadcast,
        });
        Ok(payload.len())
    }
}

impl Drop for MockSocket {
    fn drop(&mut self) {
        let mut inner = self.lock();
        inner.live = inner.live.saturating_sub(1);
    }
}
