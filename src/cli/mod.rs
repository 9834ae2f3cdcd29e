//! CLI adapter for docsearch
//!
//! Reads the line protocol (stop words, document count, documents,
//! query) and prints ranked results. Depends on `core/`; the core
//! never depends on this module.
//!
//! ```text
//! +------------------+      +------------------+
//! |      cli/        | ---> |     core/        |
//! | (clap adapter)   |      |  (search engine) |
//! +------------------+      +------------------+
//! ```

pub mod commands;
pub mod output;

use clap::{Parser, Subcommand};

/// docsearch - In-memory full-text search
///
/// Index a handful of documents and rank them against a query.
/// Prefix a query word with `-` to exclude documents containing it.
#[derive(Parser, Debug)]
#[command(name = "docsearch")]
#[command(version)]
#[command(about = "In-memory full-text search with plus/minus queries", long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format
    #[arg(long, global = true, default_value = "human")]
    pub format: OutputFormat,

    #[command(subcommand)]
    pub command: Commands,
}

/// Output format for CLI commands
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output for scripting
    Json,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Index documents and print the top matches for a query
    Search(commands::SearchArgs),

    /// Show which query words one document matches
    #[command(name = "match-document")]
    MatchDocument(commands::MatchArgs),

    /// Show current configuration
    #[command(name = "show-config")]
    ShowConfig(commands::ConfigArgs),

    /// Generate shell completion scripts
    ///
    /// Output completion script to stdout. To install:
    ///
    ///   bash:  docsearch completions bash > ~/.local/share/bash-completion/completions/docsearch
    ///   zsh:   docsearch completions zsh > ~/.zfunc/_docsearch
    ///   fish:  docsearch completions fish > ~/.config/fish/completions/docsearch.fish
    Completions(commands::CompletionsArgs),
}

/// Run the CLI with the provided arguments
pub fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    use crate::core::config::Config;

    // Handle completions command early (doesn't need config)
    if let Commands::Completions(args) = cli.command {
        return commands::completions::execute(args);
    }

    let config = Config::load()?;
    config.log_config();

    match cli.command {
        Commands::Search(args) => commands::search::execute(args, &config, cli.format),
        Commands::MatchDocument(args) => {
            commands::match_document::execute(args, &config, cli.format)
        }
        Commands::ShowConfig(args) => commands::config::execute(args, &config, cli.format),
        Commands::Completions(_) => unreachable!(), // Handled above
    }
}
