// src/netllm/mod.rs

pub mod config;
pub mod device_pool;
pub mod tool_schema;
pub mod toolbox;
pub mod tools;
pub mod transport;

// Export the pool and registry types directly so callers don't have to
// reach through the module path.
pub use device_pool::{DevicePool, ManagedDevice};
pub use toolbox::ToolBox;
