//! Tool system exposing the proverb datasets to a host agent
//!
//! Each dataset is surfaced as one tool with a describe/initialize/execute
//! lifecycle. Parameters are validated against the tool's JSON schema
//! before execution.

use crate::config::{ToolConfig, ToolkitConfig};
use async_trait::async_trait;
use serde_json::Value;
use std::collections::HashMap;
use thiserror::Error;

pub mod builtin;

/// Tool interface consumed by the host framework.
#[async_trait]
pub trait Tool: Send + Sync {
    /// Returns the tool's name, description, and JSON Schema for its
    /// parameters.
    fn describe(&self) -> ToolDescription;

    /// Receives the configuration table from the toolkit config.
    /// Called once at startup.
    async fn initialize(&mut self, config: Option<&Value>) -> Result<(), ToolError>;

    /// Receives parameters matching the schema from describe().
    /// Parameters are validated against the schema before execution.
    async fn execute(&self, parameters: &Value) -> Result<Value, ToolError>;

    /// Performs cleanup. Lookup tools hold no resources, so the default
    /// is a no-op.
    async fn shutdown(&mut self) -> Result<(), ToolError> {
        Ok(())
    }
}

/// Description advertised to the host LLM.
#[derive(Debug, Clone)]
pub struct ToolDescription {
    pub name: String,
    pub description: String,
    pub parameters: Value,
}

/// Registry managing and executing lookup tools.
pub struct ToolSystem {
    tools: HashMap<String, Box<dyn Tool>>,
}

impl ToolSystem {
    pub fn new() -> Self {
        Self {
            tools: HashMap::new(),
        }
    }

    /// Build and initialize a tool system from a loaded toolkit config.
    pub async fn from_config(config: &ToolkitConfig) -> crate::error::Result<Self> {
        let mut system = Self::new();
        system.initialize(&config.tools).await?;
        Ok(system)
    }

    /// Initialize the tool system with configuration from the `[tools]` table.
    pub async fn initialize(
        &mut self,
        tool_configs: &HashMap<String, ToolConfig>,
    ) -> Result<(), ToolError> {
        for (tool_name, tool_config) in tool_configs {
            let mut tool = self.create_tool(tool_name, tool_config)?;

            // Extract config for the initialize() method
            let config = match tool_config {
                ToolConfig::Simple(_) => None,
                ToolConfig::Complex { config, .. } => Some(serde_json::to_value(config).unwrap()),
            };

            tool.initialize(config.as_ref()).await?;

            self.tools.insert(tool_name.clone(), tool);
        }

        Ok(())
    }

    /// Create tool instance based on configuration
    fn create_tool(
        &self,
        tool_name: &str,
        config: &ToolConfig,
    ) -> Result<Box<dyn Tool>, ToolError> {
        let impl_name = match config {
            ToolConfig::Simple(impl_name) => impl_name,
            ToolConfig::Complex { implementation, .. } => implementation,
        };

        match impl_name.as_str() {
            "builtin" => Ok(self.create_builtin_tool(tool_name)?),
            _ => Err(ToolError::UnknownImplementation(impl_name.clone())),
        }
    }

    /// Create builtin tool instances
    fn create_builtin_tool(&self, tool_name: &str) -> Result<Box<dyn Tool>, ToolError> {
        match tool_name {
            "japanese_proverbs" => Ok(Box::new(builtin::DatasetLookupTool::japanese_proverbs())),
            "global_proverbs" => Ok(Box::new(builtin::DatasetLookupTool::global_proverbs())),
            "yojijukugo" => Ok(Box::new(builtin::DatasetLookupTool::yojijukugo())),
            _ => Err(ToolError::UnknownTool(tool_name.to_string())),
        }
    }

    /// Get tool description
    pub fn describe_tool(&self, tool_name: &str) -> Option<ToolDescription> {
        self.tools.get(tool_name).map(|tool| tool.describe())
    }

    /// Execute tool with validated parameters
    pub async fn execute_tool(
        &self,
        tool_name: &str,
        parameters: &Value,
    ) -> Result<Value, ToolError> {
        let tool = self
            .tools
            .get(tool_name)
            .ok_or_else(|| ToolError::UnknownTool(tool_name.to_string()))?;

        self.validate_parameters(tool_name, parameters)?;

        tool.execute(parameters).await
    }

    /// Validate parameters against the tool's advertised schema
    fn validate_parameters(&self, tool_name: &str, parameters: &Value) -> Result<(), ToolError> {
        let tool = self
            .tools
            .get(tool_name)
            .ok_or_else(|| ToolError::UnknownTool(tool_name.to_string()))?;

        let description = tool.describe();
        let validator = jsonschema::validator_for(&description.parameters)
            .map_err(|e| ToolError::SchemaError(format!("Schema compilation error: {e}")))?;

        let error_messages: Vec<String> = match validator.validate(parameters) {
            Ok(()) => Vec::new(),
            Err(errors) => errors
                .map(|e| format!("At '{}': {}", e.instance_path, e))
                .collect(),
        };

        if error_messages.is_empty() {
            Ok(())
        } else {
            Err(ToolError::ValidationError(error_messages.join("; ")))
        }
    }

    /// Get list of available tools
    pub fn list_tools(&self) -> Vec<String> {
        self.tools.keys().cloned().collect()
    }

    /// Shutdown all tools
    pub async fn shutdown(&mut self) -> Result<(), ToolError> {
        for tool in self.tools.values_mut() {
            tool.shutdown().await?;
        }
        Ok(())
    }
}

impl Default for ToolSystem {
    fn default() -> Self {
        Self::new()
    }
}

/// Tool system errors
#[derive(Debug, Error)]
pub enum ToolError {
    #[error("Unknown tool: {0}")]
    UnknownTool(String),
    #[error("Unknown tool implementation: {0}")]
    UnknownImplementation(String),
    #[error("Tool initialization failed: {0}")]
    InitializationError(String),
    #[error("Parameter validation failed: {0}")]
    ValidationError(String),
    #[error("Schema error: {0}")]
    SchemaError(String),
    #[error("Tool execution failed: {0}")]
    ExecutionError(String),
    #[error("Tool shutdown failed: {0}")]
    ShutdownError(String),
}
