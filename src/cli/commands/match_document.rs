//! Match-document command - show the query words one document contains

use crate::cli::commands::open_input;
use crate::cli::output;
use crate::cli::OutputFormat;
use crate::core::config::{Config, SearchConfig};
use crate::core::input::InputBatch;
use crate::core::types::{DocumentId, DocumentMatch};
use clap::Args;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

/// Arguments for the match-document command
#[derive(Args, Debug)]
pub struct MatchArgs {
    /// Document id to match (ids follow input order, starting at 0)
    #[arg(long)]
    pub id: DocumentId,

    /// Read input from a file instead of stdin
    #[arg(long, short = 'i')]
    pub input: Option<PathBuf>,
}

/// Execute the match-document command
pub fn execute(
    args: MatchArgs,
    config: &Config,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let reader = open_input(args.input.as_deref())?;
    let stdout = io::stdout();

    run(
        reader,
        &mut stdout.lock(),
        config.search.clone(),
        args.id,
        format,
    )?;
    Ok(())
}

/// Read a batch from `reader` and report which query words `id` matches
pub fn run<R: BufRead, W: Write>(
    reader: R,
    writer: &mut W,
    search_config: SearchConfig,
    id: DocumentId,
    format: OutputFormat,
) -> Result<DocumentMatch, Box<dyn std::error::Error>> {
    let batch = InputBatch::read_from(reader)?;
    let server = batch.build_server(search_config)?;
    let matched = server.match_document(&batch.query, id)?;

    match format {
        OutputFormat::Human => output::write_document_match(writer, &matched)?,
        OutputFormat::Json => output::write_json(writer, &matched)?,
    }

    Ok(matched)
}
