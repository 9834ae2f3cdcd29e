//! Line-oriented input protocol.
//!
//! ```text
//! <stop words, space separated, may be empty>
//! <document count N>
//! <document 0>
//! ...
//! <document N-1>
//! <query>
//! ```
//!
//! Documents get ids `0..N` in reading order. A missing query
//! line reads as an empty query.

use crate::core::config::SearchConfig;
use crate::core::error::{Result, SearchError};
use crate::core::index::IndexBuilder;
use crate::core::search::SearchServer;
use crate::core::types::DocumentId;
use std::io::BufRead;

/// Everything read from one input stream
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InputBatch {
    pub stop_words: String,
    pub documents: Vec<String>,
    pub query: String,
}

impl InputBatch {
    /// Read a whole batch from `reader`
    pub fn read_from<R: BufRead>(mut reader: R) -> Result<Self> {
        let stop_words = read_line(&mut reader)?.unwrap_or_default();

        let count_line = read_line(&mut reader)?
            .ok_or_else(|| SearchError::InputFormat("missing document count line".to_string()))?;
        let count = parse_document_count(&count_line)?;

        let mut documents = Vec::new();
        for index in 0..count {
            let document = read_line(&mut reader)?.ok_or_else(|| {
                SearchError::InputFormat(format!(
                    "expected {count} documents, input ended after {index}"
                ))
            })?;
            documents.push(document);
        }

        let query = read_line(&mut reader)?.unwrap_or_default();

        tracing::debug!(documents = documents.len(), "Read input batch");

        Ok(Self {
            stop_words,
            documents,
            query,
        })
    }

    /// Index the batch's documents under ids `0..N`
    pub fn build_server(&self, config: SearchConfig) -> Result<SearchServer> {
        let mut builder = IndexBuilder::with_config(config);
        builder.set_stop_words(&self.stop_words)?;

        for (id, text) in self.documents.iter().enumerate() {
            let document_id = DocumentId::try_from(id).map_err(|_| {
                SearchError::InputFormat(format!("document id {id} out of range"))
            })?;
            builder.add_document(document_id, text);
        }

        Ok(builder.build())
    }
}

/// Parse the document count line
pub fn parse_document_count(line: &str) -> Result<usize> {
    line.trim().parse::<usize>().map_err(|e| {
        SearchError::InputFormat(format!("invalid document count '{}': {e}", line.trim()))
    })
}

/// Read one line without its terminator; `None` at end of input
fn read_line<R: BufRead>(reader: &mut R) -> Result<Option<String>> {
    let mut line = String::new();
    if reader.read_line(&mut line)? == 0 {
        return Ok(None);
    }

    if line.ends_with('\n') {
        line.pop();
        if line.ends_with('\r') {
            line.pop();
        }
    }
    Ok(Some(line))
}
