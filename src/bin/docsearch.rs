//! docsearch CLI - index documents from a stream and query them
//!
//! # Examples
//!
//! ```bash
//! # stop words, document count, documents, query
//! printf 'a the\n2\na cat sat\nthe dog sat\nsat -dog\n' | docsearch search
//!
//! # Same input from a file, JSON output
//! docsearch --format json search --input corpus.txt
//!
//! # Show configuration
//! docsearch show-config
//! ```

use clap::Parser;
use docsearch::cli::{output, run, Cli};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() {
    // Logs go to stderr; stdout carries only results
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "docsearch=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        output::print_error(&e.to_string());
        std::process::exit(1);
    }
}
