//! Error types for uav-telemetry

use std::io;

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;

/// Telemetry error types
///
/// The first three variants map one-to-one onto the steps of a single send.
/// None of them is fatal to the send loop.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Datagram socket could not be allocated
    #[error("Failed to create UDP socket: {0}")]
    SocketCreation(#[source] io::Error),

    /// `SO_BROADCAST` could not be enabled on the socket
    #[error("Failed to enable broadcast option: {0}")]
    SocketOption(#[source] io::Error),

    /// Datagram write failed after the socket was ready
    #[error("Failed to send datagram: {0}")]
    Send(#[source] io::Error),

    /// Invalid or unparsable configuration
    #[error("Configuration error: {0}")]
    Config(String),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

impl From<toml::de::Error> for Error {
    fn from(e: toml::de::Error) -> Self {
        Error::Config(e.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(e: toml::ser::Error) -> Self {
        Error::Config(e.to_string())
    }
}

impl Error {
    /// Name of the send step that failed, for log lines
    pub fn step(&self) -> &'static str {
        match self {
            Error::SocketCreation(_) => "socket creation",
            Error::SocketOption(_) => "broadcast option",
            Error::Send(_) => "datagram send",
            Error::Config(_) => "configuration",
            Error::Io(_) => "file I/O",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_send_errors_name_their_step() {
        let e = Error::SocketOption(io::Error::other("unsupported"));
        assert_eq!(e.step(), "broadcast option");
        assert!(e.to_string().contains("broadcast"));

        let e = Error::Send(io::Error::from(io::ErrorKind::NetworkUnreachable));
        assert_eq!(e.step(), "datagram send");
    }

    #[test]
    fn test_toml_error_becomes_config_error() {
        let parsed: std::result::Result<toml::Value, _> = toml::from_str("port = ");
        let err: Error = parsed.unwrap_err().into();
        assert!(matches!(err, Error::Config(_)));
    }
}
