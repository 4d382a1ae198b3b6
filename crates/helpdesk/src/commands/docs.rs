use helpdesk_core::{Config, ToolResult};
use helpdesk_tools::ToolRegistry;
use serde_json::json;

pub fn run(config: &Config, json: bool) -> anyhow::Result<()> {
    let result = list(config)?;
    println!("{}", super::render(&result, json)?);
    Ok(())
}

fn list(config: &Config) -> anyhow::Result<ToolResult> {
    let registry = ToolRegistry::with_defaults(config);
    Ok(registry.call("list_docs", &json!({}))?)
}
