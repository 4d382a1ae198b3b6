//! Shared configuration and result envelope for helpdesk tools

mod config;
mod types;

pub use config::{Config, ConfigError, DEFAULT_MAX_RESULTS, MAX_RESULTS_LIMIT};
pub use types::{TextContent, ToolResult};
