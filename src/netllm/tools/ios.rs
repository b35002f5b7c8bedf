//! Cisco IOS toolbox.
//!
//! Device-operating tools for Cisco IOS CLIs, registered against a
//! [`DevicePool`] so every tool call rides a pooled session. Tool policy
//! lives here, not in the pool: `send_command` only permits `show`
//! commands.

use std::error::Error;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use serde_json::Value as JsonValue;

use crate::netllm::config::PoolConfig;
use crate::netllm::device_pool::{DevicePool, ManagedDevice};
use crate::netllm::tool_schema::{ArgumentKind, ToolArgument, ToolSpec};
use crate::netllm::toolbox::ToolError;
use crate::netllm::transport::DeviceTransport;

type DeviceToolResult<'a> =
    Pin<Box<dyn Future<Output = Result<Option<String>, Box<dyn Error + Send + Sync>>> + Send + 'a>>;

/// Build a `cisco_ios` pool with the standard IOS tools registered.
pub fn cisco_ios_pool(transport: Arc<dyn DeviceTransport>, config: PoolConfig) -> DevicePool {
    let mut pool = DevicePool::new(
        "cisco_ios",
        "A collection of network administration commands for Cisco IOS devices.",
        transport,
        config,
    );
    register_ios_tools(&mut pool);
    pool
}

/// Register the IOS tools on an existing pool.
pub fn register_ios_tools(pool: &mut DevicePool) {
    pool.register_host_tool(
        ToolSpec::new("send_command")
            .with_description("Send a show command to a device and return the output.")
            .with_argument(ToolArgument::new("host", ArgumentKind::String).required())
            .with_argument(ToolArgument::new("command", ArgumentKind::String).required()),
        Arc::new(send_command),
    );

    pool.register_host_tool(
        ToolSpec::new("command_help")
            .with_description("Get help for a command prefix (ie. \"{command} ?\").")
            .with_argument(ToolArgument::new("host", ArgumentKind::String).required())
            .with_argument(ToolArgument::new("command", ArgumentKind::String).required()),
        Arc::new(command_help),
    );
}

fn command_param(params: &JsonValue, tool: &str) -> Result<String, Box<dyn Error + Send + Sync>> {
    params
        .get("command")
        .and_then(|v| v.as_str())
        .map(str::to_string)
        .ok_or_else(|| {
            Box::new(ToolError::InvalidParameters(format!(
                "{} requires a 'command' argument",
                tool
            ))) as Box<dyn Error + Send + Sync>
        })
}

/// Send a read-only command and record its output in the device history.
fn send_command<'a>(device: &'a mut ManagedDevice, params: JsonValue) -> DeviceToolResult<'a> {
    Box::pin(async move {
        let command = command_param(&params, "send_command")?;
        if !command.trim_start().starts_with("show") {
            return Ok(Some("Only 'show' commands are allowed.".to_string()));
        }
        let output = match device.send(&command).await {
            Ok(output) => output,
            Err(err) => format!("An error occurred: {}", err),
        };
        device.record_output(&command, &output);
        Ok(Some(output))
    })
}

/// Ask the device CLI for help on a command prefix.
fn command_help<'a>(device: &'a mut ManagedDevice, params: JsonValue) -> DeviceToolResult<'a> {
    Box::pin(async move {
        let command = command_param(&params, "command_help")?;
        let output = match device.send(&format!("{} ?", command)).await {
            Ok(output) => output,
            Err(err) => format!("An error occurred: {}", err),
        };
        Ok(Some(output))
    })
}
