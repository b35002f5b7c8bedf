//! Tool Registry
//!
//! A [`ToolBox`] is a named collection of tools the assistant may call.
//! Each tool pairs a [`ToolSpec`](crate::tool_schema::ToolSpec) with an
//! async executable, and the whole box can be exported as a list of
//! function-calling schema documents in registration order.
//!
//! # Example
//!
//! ```rust
//! use std::sync::Arc;
//! use netllm::tool_schema::ToolSpec;
//! use netllm::toolbox::ToolBox;
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
//! let mut toolbox = ToolBox::new("demo", "Demonstration tools.");
//! toolbox.register(
//!     ToolSpec::new("ping").with_description("Answers pong."),
//!     Arc::new(|_params| Box::pin(async { Ok(Some("pong".to_string())) })),
//! );
//!
//! let reply = toolbox.invoke("ping", serde_json::json!({})).await?;
//! assert_eq!(reply.as_deref(), Some("pong"));
//! # Ok(())
//! # }
//! ```

use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::error::Error;
use std::fmt;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use serde_json::Value as JsonValue;

use crate::netllm::tool_schema::ToolSpec;

/// Type alias for the async functions a toolbox executes.
///
/// A tool returns an optional string: the tool-calling contract expects a
/// textual result (or nothing) per call.
pub type ToolFn = Arc<
    dyn Fn(
            JsonValue,
        ) -> Pin<
            Box<
                dyn Future<Output = Result<Option<String>, Box<dyn Error + Send + Sync>>>
                    + Send,
            >,
        > + Send
        + Sync,
>;

/// Error types for tool registry operations.
#[derive(Debug, Clone)]
pub enum ToolError {
    /// The named tool is not registered in this toolbox.
    NotFound(String),
    /// The invocation parameters are missing or malformed.
    InvalidParameters(String),
}

impl fmt::Display for ToolError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ToolError::NotFound(name) => write!(f, "Tool not found: {}", name),
            ToolError::InvalidParameters(msg) => write!(f, "Invalid parameters: {}", msg),
        }
    }
}

impl Error for ToolError {}

/// A tool bound into a toolbox: its spec plus the executable behind it.
///
/// Registered tools are immutable; replacing one means registering a new
/// tool under the same name.
pub struct RegisteredTool {
    spec: ToolSpec,
    function: ToolFn,
}

impl RegisteredTool {
    /// Borrow the static spec for the tool.
    pub fn spec(&self) -> &ToolSpec {
        &self.spec
    }

    /// Execute the tool with the supplied parameters.
    ///
    /// No validation of the parameters against the spec happens here;
    /// validation, if any, belongs to the function itself.
    pub async fn execute(
        &self,
        params: JsonValue,
    ) -> Result<Option<String>, Box<dyn Error + Send + Sync>> {
        (self.function)(params).await
    }
}

/// A named collection of tools exposed to an LLM tool-calling protocol.
pub struct ToolBox {
    name: String,
    description: String,
    tools: HashMap<String, RegisteredTool>,
    /// Export order. A name keeps its first position when re-registered.
    order: Vec<String>,
}

impl ToolBox {
    /// Create an empty toolbox with the given name and description.
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            tools: HashMap::new(),
            order: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    /// Register a tool under its spec name, returning the stored entry so
    /// the registration site can keep using it directly.
    ///
    /// Registering a second tool under an existing name silently replaces
    /// the prior entry (last registration wins).
    pub fn register(&mut self, spec: ToolSpec, function: ToolFn) -> &RegisteredTool {
        let name = spec.name.clone();
        if !self.tools.contains_key(&name) {
            self.order.push(name.clone());
        }
        let tool = RegisteredTool { spec, function };
        match self.tools.entry(name) {
            Entry::Occupied(entry) => {
                let slot = entry.into_mut();
                *slot = tool;
                slot
            }
            Entry::Vacant(entry) => entry.insert(tool),
        }
    }

    /// Borrow a tool by name.
    pub fn get(&self, name: &str) -> Option<&RegisteredTool> {
        self.tools.get(name)
    }

    /// Whether a tool with the given name exists.
    pub fn contains(&self, name: &str) -> bool {
        self.tools.contains_key(name)
    }

    /// Number of registered tools.
    pub fn len(&self) -> usize {
        self.tools.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }

    /// Iterate over the registered tools in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &RegisteredTool> {
        self.order.iter().filter_map(move |name| self.tools.get(name))
    }

    /// Look up and execute a tool by name.
    ///
    /// Fails with [`ToolError::NotFound`] when the tool is absent; errors
    /// raised by the tool itself propagate unchanged.
    pub async fn invoke(
        &self,
        name: &str,
        params: JsonValue,
    ) -> Result<Option<String>, Box<dyn Error + Send + Sync>> {
        let tool = self.tools.get(name).ok_or_else(|| {
            Box::new(ToolError::NotFound(name.to_string())) as Box<dyn Error + Send + Sync>
        })?;
        tool.execute(params).await
    }

    /// Export one schema document per tool, in registration order.
    pub fn export_schema(&self) -> Vec<JsonValue> {
        self.iter().map(|tool| tool.spec().to_schema()).collect()
    }
}
