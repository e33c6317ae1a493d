//! Tool definition types in OpenAI function-calling format.
//!
//! The hosting agent framework reads these to decide when and how to
//! invoke a tool, so the description text is part of each tool's contract.

use serde::{Deserialize, Serialize};

/// A tool definition as advertised to the host.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolDefinition {
    #[serde(rename = "type")]
    pub def_type: String,
    pub function: ToolFunctionDef,
}

/// Function metadata within a tool definition.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolFunctionDef {
    pub name: String,
    pub description: String,
    pub parameters: serde_json::Value,
}
