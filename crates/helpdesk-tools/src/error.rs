use helpdesk_core::ConfigError;
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const INVALID_PARAMS: i32 = -32602;
pub const METHOD_NOT_FOUND: i32 = -32601;
pub const INTERNAL_ERROR: i32 = -32603;

#[derive(Error, Debug)]
pub enum ToolError {
    #[error("Invalid parameters: {0}")]
    InvalidParams(String),

    #[error("Invalid configuration: {0}")]
    Config(#[from] ConfigError),

    #[error("Unknown tool: {0}")]
    UnknownTool(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

/// Protocol-level error envelope
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorData {
    pub code: i32,
    pub message: String,
}

impl ToolError {
    pub fn code(&self) -> i32 {
        match self {
            ToolError::InvalidParams(_) | ToolError::Config(_) => INVALID_PARAMS,
            ToolError::UnknownTool(_) => METHOD_NOT_FOUND,
            ToolError::Internal(_) => INTERNAL_ERROR,
        }
    }

    pub fn to_error_data(&self) -> ErrorData {
        match self {
            ToolError::InvalidParams(msg) => {
                tracing::warn!(error = %msg, "Invalid tool parameters");
            }
            ToolError::Config(e) => {
                tracing::warn!(error = %e, "Configuration error");
            }
            ToolError::UnknownTool(name) => {
                tracing::warn!(tool = %name, "Unknown tool requested");
            }
            ToolError::Internal(msg) => {
                tracing::error!(error = %msg, "Tool failed");
            }
        }

        ErrorData {
            code: self.code(),
            message: self.to_string(),
        }
    }
}

impl From<serde_json::Error> for ToolError {
    fn from(err: serde_json::Error) -> Self {
        ToolError::InvalidParams(err.to_string())
    }
}
