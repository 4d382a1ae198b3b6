use helpdesk_core::{Config, ToolResult};
use helpdesk_tools::{ErrorData, ToolError, ToolRegistry};
use serde::Serialize;
use serde_json::Value;
use std::io::{self, Read, Write};

/// Response written to stdout: exactly one of `result` or `error`
#[derive(Debug, Serialize)]
#[serde(rename_all = "snake_case")]
enum CallResponse {
    Result(ToolResult),
    Error(ErrorData),
}

pub fn run(config: &Config, tool: &str) -> anyhow::Result<()> {
    let mut input = String::new();
    io::stdin().read_to_string(&mut input)?;

    let registry = ToolRegistry::with_defaults(config);
    let response = handle(&registry, tool, &input);

    let output = serde_json::to_string(&response)?;
    io::stdout().write_all(output.as_bytes())?;
    io::stdout().write_all(b"\n")?;
    io::stdout().flush()?;
    Ok(())
}

fn handle(registry: &ToolRegistry, tool: &str, input: &str) -> CallResponse {
    let outcome = parse_input(input).and_then(|args| registry.call(tool, &args));
    match outcome {
        Ok(result) => CallResponse::Result(result),
        Err(e) => CallResponse::Error(e.to_error_data()),
    }
}

fn parse_input(input: &str) -> Result<Value, ToolError> {
    if input.trim().is_empty() {
        return Ok(Value::Null);
    }
    Ok(serde_json::from_str(input)?)
}
