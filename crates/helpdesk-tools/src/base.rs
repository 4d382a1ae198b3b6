//! Base tool trait and argument handling

use crate::error::ToolError;
use helpdesk_core::ToolResult;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Name, description and argument schema advertised for a tool
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolDescriptor {
    pub name: String,
    pub description: String,
    pub input_schema: Value,
}

/// Deserialize a JSON argument object. `null` is read as `{}`.
pub fn parse_args<T: DeserializeOwned>(args: &Value) -> Result<T, ToolError> {
    let args = match args {
        Value::Null => Value::Object(Default::default()),
        Value::Object(_) => args.clone(),
        other => {
            return Err(ToolError::InvalidParams(format!(
                "arguments must be a JSON object, got {}",
                other
            )))
        }
    };
    Ok(serde_json::from_value(args)?)
}

/// An operation a hosting agent can invoke
pub trait Tool: Send + Sync {
    /// Tool name (unique identifier)
    fn name(&self) -> &str;

    /// One-line description
    fn description(&self) -> &str {
        ""
    }

    /// JSON schema of the argument object
    fn input_schema(&self) -> Value {
        serde_json::json!({ "type": "object", "properties": {} })
    }

    /// Run the tool with already-parsed JSON arguments
    fn call(&self, args: &Value) -> Result<ToolResult, ToolError>;

    fn descriptor(&self) -> ToolDescriptor {
        ToolDescriptor {
            name: self.name().to_string(),
            description: self.description().to_string(),
            input_schema: self.input_schema(),
        }
    }
}
