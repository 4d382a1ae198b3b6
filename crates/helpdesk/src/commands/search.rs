use helpdesk_core::{Config, ToolResult};
use helpdesk_tools::ToolRegistry;
use serde_json::json;

pub fn run(
    config: &Config,
    query: &str,
    max_results: Option<usize>,
    json: bool,
) -> anyhow::Result<()> {
    let result = search(config, query, max_results)?;
    println!("{}", super::render(&result, json)?);
    Ok(())
}

fn search(config: &Config, query: &str, max_results: Option<usize>) -> anyhow::Result<ToolResult> {
    let registry = ToolRegistry::with_defaults(config);
    let mut args = json!({ "query": query });
    if let Some(n) = max_results {
        args["max_results"] = json!(n);
    }
    Ok(registry.call("search_docs", &args)?)
}
