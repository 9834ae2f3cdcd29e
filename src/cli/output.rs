//! Output formatting for CLI commands
//!
//! Result lines are plain text so they can be piped and compared;
//! colors are only used for labels and diagnostics on stderr
//! (respects NO_COLOR env var).

use crate::core::types::{DocumentMatch, ScoredDocument};
use serde::Serialize;
use std::io::{self, Write};

/// Color scheme for CLI output
pub mod colors {
    use colored::{ColoredString, Colorize};

    /// Style for labels/headers
    pub fn label(s: &str) -> ColoredString {
        s.bold()
    }

    /// Style for warning messages
    pub fn warning(s: &str) -> ColoredString {
        s.yellow()
    }

    /// Style for error messages
    pub fn error(s: &str) -> ColoredString {
        s.red().bold()
    }
}

/// Write one `{ document_id = .., relevance = .. }` line per document
pub fn write_scored_documents<W: Write>(
    writer: &mut W,
    documents: &[ScoredDocument],
) -> io::Result<()> {
    for document in documents {
        writeln!(writer, "{document}")?;
    }
    Ok(())
}

/// Write a document match as `{ document_id = .., matched_words = [..] }`
pub fn write_document_match<W: Write>(
    writer: &mut W,
    matched: &DocumentMatch,
) -> io::Result<()> {
    writeln!(
        writer,
        "{{ document_id = {}, matched_words = [{}] }}",
        matched.document_id,
        matched.matched_words.join(", ")
    )
}

/// Write pretty JSON followed by a newline
pub fn write_json<W: Write, T: Serialize>(writer: &mut W, data: &T) -> io::Result<()> {
    serde_json::to_writer_pretty(&mut *writer, data)?;
    writeln!(writer)
}

/// Print a warning message
pub fn print_warning(message: &str) {
    eprintln!("{}: {}", colors::warning("Warning"), message);
}

/// Print an error message
pub fn print_error(message: &str) {
    eprintln!("{}: {}", colors::error("Error"), message);
}
