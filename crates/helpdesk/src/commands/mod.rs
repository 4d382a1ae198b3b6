pub mod answer;
pub mod call;
pub mod docs;
pub mod prompt;
pub mod search;
pub mod tools;
pub mod version;

use helpdesk_core::ToolResult;

/// Prose for the terminal, or the structured half as pretty JSON
pub fn render(result: &ToolResult, json: bool) -> anyhow::Result<String> {
    if json {
        Ok(serde_json::to_string_pretty(&result.structured_content)?)
    } else {
        Ok(result.text())
    }
}
