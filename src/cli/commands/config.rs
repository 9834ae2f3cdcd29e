//! Config command - show current configuration

use crate::cli::output::colors;
use crate::cli::OutputFormat;
use crate::core::config::Config;
use clap::Args;
use serde::Serialize;
use std::io::{self, Write};

/// Arguments for the config command
#[derive(Args, Debug, Default)]
pub struct ConfigArgs {
    /// Also show where the config file is looked up
    #[arg(long, short = 'p')]
    pub paths: bool,
}

/// Configuration response
#[derive(Debug, Serialize)]
pub struct ConfigResponse {
    pub search: SearchConfigOutput,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub config_file: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct SearchConfigOutput {
    pub max_results: usize,
    pub minus_marker: char,
}

/// Execute the config command
pub fn execute(
    args: ConfigArgs,
    config: &Config,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let stdout = io::stdout();
    run(&args, config, &mut stdout.lock(), format)
}

/// Write the configuration report into `writer`
pub fn run<W: Write>(
    args: &ConfigArgs,
    config: &Config,
    writer: &mut W,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let config_file = if args.paths {
        Config::user_config_file().map(|path| path.to_string_lossy().into_owned())
    } else {
        None
    };

    let response = ConfigResponse {
        search: SearchConfigOutput {
            max_results: config.search.max_results,
            minus_marker: config.search.minus_marker,
        },
        config_file,
    };

    match format {
        OutputFormat::Human => {
            writeln!(writer, "{}", colors::label("Configuration:"))?;
            writeln!(writer, "  search:")?;
            writeln!(writer, "    max_results: {}", response.search.max_results)?;
            writeln!(writer, "    minus_marker: {}", response.search.minus_marker)?;
            if let Some(path) = &response.config_file {
                writeln!(writer, "  config_file: {path}")?;
            }
        }
        OutputFormat::Json => {
            writeln!(writer, "{}", serde_json::to_string_pretty(&response)?)?;
        }
    }

    Ok(())
}
