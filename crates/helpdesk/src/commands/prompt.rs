use helpdesk_tools::support_prompt;

pub fn run(query: Option<&str>) -> anyhow::Result<()> {
    println!("{}", support_prompt(query.unwrap_or("")));
    Ok(())
}
