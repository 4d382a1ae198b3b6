mod cli;
mod commands;

use clap::Parser;
use cli::{Cli, Commands};
use helpdesk_core::Config;

fn main() -> anyhow::Result<()> {
    // Logs go to stderr so stdout stays machine-readable
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let mut config = Config::from_env()?;
    if let Some(dir) = cli.docs_dir {
        config = config.with_docs_dir(dir);
    }

    match cli.command {
        Commands::Docs => commands::docs::run(&config, cli.json),
        Commands::Search { query, max_results } => {
            commands::search::run(&config, &query, max_results, cli.json)
        }
        Commands::Answer {
            query,
            max_fragments,
        } => commands::answer::run(&config, &query, max_fragments, cli.json),
        Commands::Call { tool } => commands::call::run(&config, &tool),
        Commands::Tools => commands::tools::run(&config),
        Commands::Prompt { query } => commands::prompt::run(query.as_deref()),
        Commands::Version => commands::version::run(),
    }
}
