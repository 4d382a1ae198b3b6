use helpdesk_core::Config;
use helpdesk_tools::{ToolDescriptor, ToolRegistry};

pub fn run(config: &Config) -> anyhow::Result<()> {
    let registry = ToolRegistry::with_defaults(config);
    println!("{}", format_tools(&registry.descriptors()));
    Ok(())
}

fn format_tools(descriptors: &[ToolDescriptor]) -> String {
    if descriptors.is_empty() {
        return "No tools registered.".to_string();
    }

    let mut lines = vec![format!("Tools ({})", descriptors.len())];
    lines.push("=========".to_string());
    for d in descriptors {
        lines.push(format!("  {:<18} {}", d.name, d.description));
    }
    lines.join("\n")
}
