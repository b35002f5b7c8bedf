//! Pool configuration.
//!
//! Provides the [`Credentials`] and [`PoolConfig`] structs used to build a
//! [`DevicePool`](crate::DevicePool). Users construct these manually — no
//! file parsing dependencies are required. One credential set serves every
//! host a pool manages, and it is fixed for the pool's lifetime.
//!
//! # Example
//!
//! ```rust
//! use std::time::Duration;
//! use netllm::config::{Credentials, PoolConfig};
//!
//! let config = PoolConfig::new(Credentials::new("admin", "secret", "cisco_ios"))
//!     .with_idle_timeout(Duration::from_secs(120));
//! ```

use std::time::Duration;

/// Login material for every device a pool connects to.
#[derive(Debug, Clone)]
pub struct Credentials {
    pub username: String,
    pub password: String,
    /// Transport-level device kind (e.g. `"cisco_ios"`, `"autodetect"`).
    pub device_kind: String,
}

impl Credentials {
    /// Create a credential set. Transports that need an enable secret use
    /// the password for it.
    pub fn new(
        username: impl Into<String>,
        password: impl Into<String>,
        device_kind: impl Into<String>,
    ) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
            device_kind: device_kind.into(),
        }
    }
}

/// Configuration for a [`DevicePool`](crate::DevicePool).
#[derive(Debug, Clone)]
pub struct PoolConfig {
    pub credentials: Credentials,
    /// Sessions untouched for longer than this are reclaimed.
    pub idle_timeout: Duration,
    /// Interval between reclamation scans.
    pub scan_interval: Duration,
}

impl PoolConfig {
    /// Create a config with the default idle timeout (300s) and scan
    /// interval (10s).
    pub fn new(credentials: Credentials) -> Self {
        Self {
            credentials,
            idle_timeout: Duration::from_secs(300),
            scan_interval: Duration::from_secs(10),
        }
    }

    pub fn with_idle_timeout(mut self, idle_timeout: Duration) -> Self {
        self.idle_timeout = idle_timeout;
        self
    }

    pub fn with_scan_interval(mut self, scan_interval: Duration) -> Self {
        self.scan_interval = scan_interval;
        self
    }
}
