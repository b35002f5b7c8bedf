//! Device transport abstraction.
//!
//! The pool never speaks SSH or Telnet itself; it delegates to a
//! [`DeviceTransport`] implementation that opens authenticated sessions and
//! to the [`DeviceSession`] handles it returns. Implement these traits to
//! plug in a real CLI transport (or a mock for tests).
//!
//! # Example
//!
//! ```rust,no_run
//! use async_trait::async_trait;
//! use netllm::config::Credentials;
//! use netllm::transport::{DeviceSession, DeviceTransport, TransportError};
//!
//! struct SshTransport;
//!
//! #[async_trait]
//! impl DeviceTransport for SshTransport {
//!     async fn connect(
//!         &self,
//!         host: &str,
//!         credentials: &Credentials,
//!     ) -> Result<Box<dyn DeviceSession>, TransportError> {
//!         // Open the SSH channel, log in, enter enable mode...
//!         Err(TransportError::ConnectFailed(format!("{}: not implemented", host)))
//!     }
//! }
//! ```

use std::error::Error;
use std::fmt;

use async_trait::async_trait;

use crate::netllm::config::Credentials;

/// Errors surfaced by transports and their sessions.
#[derive(Debug, Clone)]
pub enum TransportError {
    /// The transport failed to connect or authenticate.
    ConnectFailed(String),
    /// A command could not be delivered or its output could not be read.
    CommandFailed(String),
    /// The session has no live connection behind it.
    Closed,
}

impl fmt::Display for TransportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransportError::ConnectFailed(msg) => write!(f, "Connection failed: {}", msg),
            TransportError::CommandFailed(msg) => write!(f, "Command failed: {}", msg),
            TransportError::Closed => write!(f, "Session is closed"),
        }
    }
}

impl Error for TransportError {}

/// Factory for authenticated sessions to remote devices.
#[async_trait]
pub trait DeviceTransport: Send + Sync {
    /// Open a session to `host` using the pool's fixed credentials.
    async fn connect(
        &self,
        host: &str,
        credentials: &Credentials,
    ) -> Result<Box<dyn DeviceSession>, TransportError>;
}

/// One live, authenticated session to a remote device.
#[async_trait]
pub trait DeviceSession: Send {
    /// Whether the underlying connection still answers.
    async fn is_alive(&mut self) -> bool;

    /// Send one command and return its textual output.
    async fn send(&mut self, command: &str) -> Result<String, TransportError>;

    /// Close the session.
    async fn disconnect(&mut self) -> Result<(), TransportError>;
}
