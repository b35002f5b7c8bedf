//! # netllm
//!
//! netllm is a Rust toolkit for exposing network device operations as tools
//! an LLM assistant can call. It provides two layers:
//!
//! * **Tool Registration**: a [`ToolBox`] turns async functions into
//!   self-describing tools whose schemas render to the function-calling
//!   JSON Schema subset an LLM tool-calling protocol consumes, via
//!   [`toolbox::ToolBox::export_schema`].
//! * **Device Connection Lifecycle**: a [`DevicePool`] keeps one
//!   persistent, authenticated session per remote host, transparently
//!   reconnects dead sessions, and reclaims idle ones on a timer — all
//!   invisible to the assistant issuing tool calls.
//!
//! The actual SSH/Telnet plumbing is behind the
//! [`transport::DeviceTransport`] trait; bring your own implementation.
//!
//! ## Getting Started
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use netllm::config::{Credentials, PoolConfig};
//! use netllm::tools::cisco_ios_pool;
//! # use async_trait::async_trait;
//! # use netllm::transport::{DeviceSession, DeviceTransport, TransportError};
//! # struct MyTransport;
//! # #[async_trait]
//! # impl DeviceTransport for MyTransport {
//! #     async fn connect(&self, host: &str, _c: &Credentials)
//! #         -> Result<Box<dyn DeviceSession>, TransportError> {
//! #         Err(TransportError::ConnectFailed(host.to_string()))
//! #     }
//! # }
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
//!     netllm::init_logger();
//!
//!     let config = PoolConfig::new(Credentials::new("admin", "secret", "cisco_ios"));
//!     let mut pool = cisco_ios_pool(Arc::new(MyTransport), config);
//!     pool.start();
//!
//!     // Hand the schema export to the LLM orchestration layer...
//!     let _tools = pool.export_schema();
//!
//!     // ...and dispatch its tool-invocation requests by name.
//!     let reply = pool
//!         .invoke(
//!             "send_command",
//!             serde_json::json!({"host": "r1", "command": "show version"}),
//!         )
//!         .await?;
//!     println!("{}", reply.unwrap_or_default());
//!
//!     pool.stop().await;
//!     Ok(())
//! }
//! ```

use std::sync::Once;

static INIT_LOGGER: Once = Once::new();

/// Initialise the global [`env_logger`] subscriber exactly once.
///
/// The helper is intentionally lightweight so that applications embedding
/// netllm can opt in to simple `RUST_LOG` driven diagnostics without having
/// to choose a specific logging backend upfront.
///
/// ```rust
/// netllm::init_logger();
/// log::info!("Logger is ready");
/// ```
pub fn init_logger() {
    INIT_LOGGER.call_once(|| {
        env_logger::init();
    });
}

// Import the top-level `netllm` module.
pub mod netllm;

// Re-exporting key items for easier external access.
pub use crate::netllm::config;
pub use crate::netllm::config::{Credentials, PoolConfig};
pub use crate::netllm::device_pool;
pub use crate::netllm::device_pool::{DeviceEntry, DevicePool, DeviceToolFn, ManagedDevice};
pub use crate::netllm::tool_schema;
pub use crate::netllm::tool_schema::{ArgumentKind, ToolArgument, ToolSpec};
pub use crate::netllm::toolbox;
pub use crate::netllm::toolbox::{RegisteredTool, ToolBox, ToolError, ToolFn};
pub use crate::netllm::tools;
pub use crate::netllm::transport;
pub use crate::netllm::transport::{DeviceSession, DeviceTransport, TransportError};
