//! Result envelope shared by every tool

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A block of prose shown to the caller
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextContent {
    #[serde(rename = "type")]
    pub kind: String,
    pub text: String,
}

impl TextContent {
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            kind: "text".to_string(),
            text: text.into(),
        }
    }
}

/// Dual-shaped tool output: prose for display plus a structured value for
/// programmatic consumers. Both halves are always present.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolResult {
    pub content: Vec<TextContent>,
    pub structured_content: Value,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meta: Option<Value>,
}

impl ToolResult {
    pub fn new(text: impl Into<String>, structured_content: Value) -> Self {
        Self {
            content: vec![TextContent::text(text)],
            structured_content,
            meta: None,
        }
    }

    pub fn with_meta(mut self, meta: Value) -> Self {
        self.meta = Some(meta);
        self
    }

    /// All prose blocks joined with newlines
    pub fn text(&self) -> String {
        self.content
            .iter()
            .map(|c| c.text.as_str())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_text_content_serializes_type_tag() {
        let block = TextContent::text("hello");
        let json = serde_json::to_value(&block).unwrap();
        assert_eq!(json, json!({"type": "text", "text": "hello"}));
    }

    #[test]
    fn test_tool_result_omits_missing_meta() {
        let result = ToolResult::new("done", json!({"files": []}));
        let json = serde_json::to_value(&result).unwrap();
        assert!(json.get("meta").is_none());
        assert_eq!(json["structured_content"], json!({"files": []}));
    }

    #[test]
    fn test_tool_result_with_meta() {
        let result = ToolResult::new("done", json!({})).with_meta(json!({"query": "q"}));
        assert_eq!(result.meta, Some(json!({"query": "q"})));
        assert_eq!(result.text(), "done");
    }
}
