//! Tool Argument Schema
//!
//! This module describes the callable surface of a tool: its name, its
//! description, and a recursive argument schema that renders to the
//! function-calling JSON Schema subset (type, properties, required, items,
//! enum) consumed by LLM tool-calling protocols.
//!
//! # Example
//!
//! ```rust
//! use netllm::tool_schema::{ArgumentKind, ToolArgument, ToolSpec};
//!
//! let spec = ToolSpec::new("send_command")
//!     .with_description("Send a command to a device and return its output.")
//!     .with_argument(ToolArgument::new("host", ArgumentKind::String).required())
//!     .with_argument(ToolArgument::new("command", ArgumentKind::String).required());
//!
//! let doc = spec.to_schema();
//! assert_eq!(doc["function"]["name"], "send_command");
//! ```

use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value as JsonValue};

/// The type of a tool argument.
///
/// Array and object arguments carry their item/property schemas directly in
/// the variant, so an array without an item schema (or an object without
/// properties) is unrepresentable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ArgumentKind {
    String,
    Number,
    Boolean,
    /// An array whose items all follow the contained argument schema.
    Array(Box<ToolArgument>),
    /// An object described by an ordered list of named properties.
    Object(Vec<ToolArgument>),
}

impl ArgumentKind {
    /// The JSON Schema `type` keyword for this kind.
    pub fn type_name(&self) -> &'static str {
        match self {
            ArgumentKind::String => "string",
            ArgumentKind::Number => "number",
            ArgumentKind::Boolean => "boolean",
            ArgumentKind::Array(_) => "array",
            ArgumentKind::Object(_) => "object",
        }
    }
}

/// A single named argument of a tool.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolArgument {
    pub name: String,
    pub kind: ArgumentKind,
    pub description: Option<String>,
    pub required: bool,
    /// Closed set of accepted string values, rendered as `enum`.
    pub allowed_values: Option<Vec<String>>,
}

impl ToolArgument {
    /// Define a new argument with the provided name and kind.
    pub fn new(name: impl Into<String>, kind: ArgumentKind) -> Self {
        Self {
            name: name.into(),
            kind,
            description: None,
            required: false,
            allowed_values: None,
        }
    }

    /// Add a human readable description that will surface in generated schemas.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Mark the argument as required.
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Restrict the argument to a closed set of string values.
    pub fn with_allowed_values(mut self, values: Vec<String>) -> Self {
        self.allowed_values = Some(values);
        self
    }

    /// Render this argument as a JSON Schema fragment.
    ///
    /// Arrays recurse into `items`, objects into `properties` plus the
    /// `required` name list.
    pub fn to_schema(&self) -> JsonValue {
        let mut doc = Map::new();
        doc.insert("type".to_string(), json!(self.kind.type_name()));
        if let Some(description) = &self.description {
            doc.insert("description".to_string(), json!(description));
        }
        if let Some(values) = &self.allowed_values {
            doc.insert("enum".to_string(), json!(values));
        }
        match &self.kind {
            ArgumentKind::Array(item) => {
                doc.insert("items".to_string(), item.to_schema());
            }
            ArgumentKind::Object(args) => {
                let mut properties = Map::new();
                for arg in args {
                    properties.insert(arg.name.clone(), arg.to_schema());
                }
                doc.insert("properties".to_string(), JsonValue::Object(properties));
                doc.insert("required".to_string(), json!(required_names(args)));
            }
            _ => {}
        }
        JsonValue::Object(doc)
    }
}

/// Static description of a tool: name, optional description, argument list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolSpec {
    pub name: String,
    pub description: Option<String>,
    pub arguments: Vec<ToolArgument>,
}

impl ToolSpec {
    /// Create a spec with the supplied tool name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
            arguments: Vec::new(),
        }
    }

    /// Add a human readable description of what the tool does.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Append an argument definition.
    pub fn with_argument(mut self, argument: ToolArgument) -> Self {
        self.arguments.push(argument);
        self
    }

    /// Render the full function-calling document for this tool.
    ///
    /// The `parameters` object is only emitted when the tool declares
    /// arguments.
    pub fn to_schema(&self) -> JsonValue {
        let mut function = Map::new();
        function.insert("name".to_string(), json!(self.name));
        if let Some(description) = &self.description {
            function.insert("description".to_string(), json!(description));
        }
        if !self.arguments.is_empty() {
            let mut properties = Map::new();
            for arg in &self.arguments {
                properties.insert(arg.name.clone(), arg.to_schema());
            }
            function.insert(
                "parameters".to_string(),
                json!({
                    "type": "object",
                    "properties": properties,
                    "required": required_names(&self.arguments),
                }),
            );
        }
        json!({
            "type": "function",
            "function": function,
        })
    }
}

fn required_names(args: &[ToolArgument]) -> Vec<String> {
    args.iter()
        .filter(|arg| arg.required)
        .map(|arg| arg.name.clone())
        .collect()
}
