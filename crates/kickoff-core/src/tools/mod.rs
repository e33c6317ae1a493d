//! Tool system: trait, registry, and the football tool implementations.
//!
//! Every tool implements the `Tool` trait and registers itself in the
//! `ToolRegistry`. The host queries the registry for available tools and
//! dispatches tool calls by name.

pub mod football_common;
pub mod football_leagues;
pub mod football_standings;
pub mod types;

use async_trait::async_trait;
use serde_json::Value;
use std::collections::HashMap;
use tracing::{debug, error};

use crate::config::FootballConfig;
use football_standings::{LeagueStandingsTool, StandingsClient};
use types::{ToolDefinition, ToolFunctionDef};

/// Trait that all agent tools must implement.
///
/// Each tool declares its name, description, JSON Schema parameters, and
/// an async `execute` method returning the text handed back to the agent.
#[async_trait]
pub trait Tool: Send + Sync {
    /// Unique tool name used in function calls (e.g., "get_league_standings").
    fn name(&self) -> &str;

    /// Natural-language description the agent uses to pick the tool.
    fn description(&self) -> &str;

    /// JSON Schema for the tool's parameters.
    fn parameters(&self) -> Value;

    /// Execute the tool with the given arguments.
    async fn execute(&self, args: HashMap<String, Value>) -> String;
}

/// Registry of agent tools, keyed by name.
pub struct ToolRegistry {
    tools: HashMap<String, Box<dyn Tool>>,
}

impl ToolRegistry {
    pub fn new() -> Self {
        Self {
            tools: HashMap::new(),
        }
    }

    /// Register a tool. Replaces any existing tool with the same name.
    pub fn register(&mut self, tool: Box<dyn Tool>) {
        debug!(tool = tool.name(), "Registered tool");
        self.tools.insert(tool.name().to_string(), tool);
    }

    /// Get a tool by name.
    pub fn get(&self, name: &str) -> Option<&dyn Tool> {
        self.tools.get(name).map(|t| t.as_ref())
    }

    /// Check if a tool is registered.
    pub fn has(&self, name: &str) -> bool {
        self.tools.contains_key(name)
    }

    /// Execute a tool by name with the given arguments.
    pub async fn execute(&self, name: &str, args: HashMap<String, Value>) -> String {
        match self.tools.get(name) {
            Some(tool) => {
                debug!(tool = name, "Executing tool");
                tool.execute(args).await
            }
            None => {
                error!(tool = name, "Tool not found");
                format!("Error: Tool '{}' not found", name)
            }
        }
    }

    /// Get all tool definitions in OpenAI function-calling format.
    pub fn definitions(&self) -> Vec<ToolDefinition> {
        let mut defs: Vec<ToolDefinition> = self
            .tools
            .values()
            .map(|tool| ToolDefinition {
                def_type: "function".into(),
                function: ToolFunctionDef {
                    name: tool.name().into(),
                    description: tool.description().into(),
                    parameters: tool.parameters(),
                },
            })
            .collect();
        defs.sort_by(|a, b| a.function.name.cmp(&b.function.name));
        defs
    }

    /// Get the list of registered tool names.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.tools.keys().map(|s| s.as_str()).collect();
        names.sort_unstable();
        names
    }

    /// Number of registered tools.
    pub fn len(&self) -> usize {
        self.tools.len()
    }

    /// Whether the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }
}

impl Default for ToolRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// Build the registry of custom tools this crate exports to the host.
pub fn custom_tools(config: &FootballConfig, client: reqwest::Client) -> ToolRegistry {
    let mut tools = ToolRegistry::new();
    let standings = StandingsClient::new(client, config.clone());
    tools.register(Box::new(LeagueStandingsTool::new(standings)));
    tools
}
