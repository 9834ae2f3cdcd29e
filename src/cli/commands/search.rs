//! Search command - index documents and rank them against a query

use crate::cli::commands::open_input;
use crate::cli::output;
use crate::cli::OutputFormat;
use crate::core::config::{Config, SearchConfig};
use crate::core::input::InputBatch;
use crate::core::types::SearchResponse;
use clap::Args;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

/// Arguments for the search command
#[derive(Args, Debug, Default)]
pub struct SearchArgs {
    /// Read input from a file instead of stdin
    #[arg(long, short = 'i')]
    pub input: Option<PathBuf>,

    /// Maximum number of results (overrides configuration)
    #[arg(long, short = 'k')]
    pub max_results: Option<usize>,

    /// Print every match instead of the top results
    #[arg(long)]
    pub all: bool,
}

impl SearchArgs {
    /// Search settings after applying command-line overrides.
    ///
    /// `--max-results` is not applied together with `--all`.
    pub fn search_config(
        &self,
        config: &Config,
    ) -> Result<SearchConfig, Box<dyn std::error::Error>> {
        let mut effective = config.clone();
        if let Some(k) = self.max_results.filter(|_| !self.all) {
            effective.search.max_results = k;
        }
        effective.validate()?;
        Ok(effective.search)
    }
}

/// Execute the search command
pub fn execute(
    args: SearchArgs,
    config: &Config,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    if args.all && args.max_results.is_some() {
        output::print_warning("--max-results is ignored together with --all");
    }

    let search_config = args.search_config(config)?;
    let reader = open_input(args.input.as_deref())?;
    let stdout = io::stdout();

    run(reader, &mut stdout.lock(), search_config, args.all, format)?;
    Ok(())
}

/// Read a batch from `reader`, search it, and write results to `writer`
pub fn run<R: BufRead, W: Write>(
    reader: R,
    writer: &mut W,
    search_config: SearchConfig,
    all: bool,
    format: OutputFormat,
) -> Result<SearchResponse, Box<dyn std::error::Error>> {
    let batch = InputBatch::read_from(reader)?;
    let server = batch.build_server(search_config)?;

    let response = if all {
        server.search_all(&batch.query)
    } else {
        server.search(&batch.query)
    };

    match format {
        OutputFormat::Human => output::write_scored_documents(writer, &response.results)?,
        OutputFormat::Json => output::write_json(writer, &response)?,
    }

    Ok(response)
}
