//! CLI command implementations
//!
//! Each command module handles argument parsing and execution for
//! a specific CLI command. Commands that read documents share the
//! input helpers below.

pub mod completions;
pub mod config;
pub mod match_document;
pub mod search;

// Re-export argument types for use in mod.rs
pub use completions::CompletionsArgs;
pub use config::ConfigArgs;
pub use match_document::MatchArgs;
pub use search::SearchArgs;

use crate::core::error::Result;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

/// Open the input file, or stdin when no path is given
pub fn open_input(path: Option<&Path>) -> Result<Box<dyn BufRead>> {
    match path {
        Some(path) => {
            tracing::debug!(path = %path.display(), "Reading input file");
            Ok(Box::new(BufReader::new(File::open(path)?)))
        }
        None => Ok(Box::new(io::stdin().lock())),
    }
}
