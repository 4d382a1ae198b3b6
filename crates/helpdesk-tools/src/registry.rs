//! Tool registry for looking up and invoking tools by name

use crate::base::{Tool, ToolDescriptor};
use crate::docs::{AnswerFromDocsTool, ListDocsTool, SearchDocsTool};
use crate::error::ToolError;
use helpdesk_core::{Config, ToolResult};
use helpdesk_docs::Corpus;
use serde_json::Value;

/// Registry of tools, in registration order
pub struct ToolRegistry {
    tools: Vec<Box<dyn Tool>>,
}

impl ToolRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self { tools: Vec::new() }
    }

    /// Registry with the documentation tools bound to `config`
    pub fn with_defaults(config: &Config) -> Self {
        let corpus = Corpus::new(&config.docs_dir);
        let mut registry = Self::new();
        registry.register(Box::new(ListDocsTool::new(corpus.clone())));
        registry.register(Box::new(SearchDocsTool::new(
            corpus.clone(),
            config.default_max_results,
        )));
        registry.register(Box::new(AnswerFromDocsTool::new(
            corpus,
            config.default_max_results,
        )));
        registry
    }

    /// Register a tool, replacing any tool with the same name
    pub fn register(&mut self, tool: Box<dyn Tool>) {
        if let Some(existing) = self.tools.iter_mut().find(|t| t.name() == tool.name()) {
            *existing = tool;
        } else {
            self.tools.push(tool);
        }
    }

    pub fn get(&self, name: &str) -> Option<&dyn Tool> {
        self.tools
            .iter()
            .find(|t| t.name() == name)
            .map(|t| t.as_ref())
    }

    /// Invoke a tool by name
    pub fn call(&self, name: &str, args: &Value) -> Result<ToolResult, ToolError> {
        let tool = self
            .get(name)
            .ok_or_else(|| ToolError::UnknownTool(name.to_string()))?;
        tracing::debug!(tool = name, "Calling tool");
        tool.call(args)
    }

    /// Descriptors of all registered tools
    pub fn descriptors(&self) -> Vec<ToolDescriptor> {
        self.tools.iter().map(|t| t.descriptor()).collect()
    }

    /// Get number of registered tools
    pub fn len(&self) -> usize {
        self.tools.len()
    }

    /// Check if registry is empty
    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }
}

impl Default for ToolRegistry {
    fn default() -> Self {
        Self::new()
    }
}
