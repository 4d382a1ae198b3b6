pub fn run() -> anyhow::Result<()> {
    println!("helpdesk {}", env!("CARGO_PKG_VERSION"));
    println!("Support tools for AI agents: documentation lookup and context assembly");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_output() {
        let result = run();
        assert!(result.is_ok());
    }
}
