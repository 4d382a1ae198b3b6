use helpdesk_core::{Config, ToolResult};
use helpdesk_tools::ToolRegistry;
use serde_json::json;

pub fn run(
    config: &Config,
    query: &str,
    max_fragments: Option<usize>,
    json: bool,
) -> anyhow::Result<()> {
    let result = answer(config, query, max_fragments)?;
    println!("{}", super::render(&result, json)?);
    Ok(())
}

fn answer(
    config: &Config,
    query: &str,
    max_fragments: Option<usize>,
) -> anyhow::Result<ToolResult> {
    let registry = ToolRegistry::with_defaults(config);
    let mut args = json!({ "query": query });
    if let Some(n) = max_fragments {
        args["max_context_fragments"] = json!(n);
    }
    Ok(registry.call("answer_from_docs", &args)?)
}
