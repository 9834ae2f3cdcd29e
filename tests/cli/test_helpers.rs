//! Shared helpers for CLI tests
//!
//! Runs command handlers against in-memory input and captures
//! what they write.

use docsearch::cli::commands::{match_document, search};
use docsearch::cli::OutputFormat;
use docsearch::core::config::SearchConfig;
use docsearch::core::types::DocumentId;
use std::io::Cursor;

/// Search settings with the given result limit
pub fn search_config(max_results: usize) -> SearchConfig {
    SearchConfig {
        max_results,
        ..SearchConfig::default()
    }
}

/// Run the search handler and return its output
pub fn run_search(input: &str, max_results: usize, all: bool, format: OutputFormat) -> String {
    let mut out = Vec::new();
    search::run(
        Cursor::new(input),
        &mut out,
        search_config(max_results),
        all,
        format,
    )
    .expect("Search should succeed");
    String::from_utf8(out).expect("Output should be UTF-8")
}

/// Run the search handler expecting an error, returning its message
pub fn run_search_err(input: &str) -> String {
    let mut out = Vec::new();
    search::run(
        Cursor::new(input),
        &mut out,
        SearchConfig::default(),
        false,
        OutputFormat::Human,
    )
    .expect_err("Search should fail")
    .to_string()
}

/// Run the match-document handler and return its output
pub fn run_match(input: &str, id: DocumentId, format: OutputFormat) -> String {
    let mut out = Vec::new();
    match_document::run(
        Cursor::new(input),
        &mut out,
        SearchConfig::default(),
        id,
        format,
    )
    .expect("Match should succeed");
    String::from_utf8(out).expect("Output should be UTF-8")
}
