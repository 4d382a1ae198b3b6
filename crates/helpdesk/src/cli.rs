use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "helpdesk")]
#[command(version)]
#[command(about = "Support tools for AI agents: documentation lookup and context assembly")]
pub struct Cli {
    /// Documentation root (overrides DOCS_DIR)
    #[arg(long, global = true)]
    pub docs_dir: Option<PathBuf>,

    /// Print structured content as JSON instead of prose
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List documentation files
    Docs,

    /// Search the documentation
    Search {
        query: String,

        /// Maximum number of fragments (1-20)
        #[arg(short = 'n', long)]
        max_results: Option<usize>,
    },

    /// Collect documentation fragments to answer a question
    Answer {
        query: String,

        /// Fragments to include as context (1-20)
        #[arg(short = 'n', long)]
        max_fragments: Option<usize>,
    },

    /// Invoke a tool with JSON arguments from stdin
    Call { tool: String },

    /// List available tools
    Tools,

    /// Print the support assistant prompt
    Prompt { query: Option<String> },

    /// Print version information
    Version,
}
