//! Build phase of the engine.
//!
//! [`IndexBuilder`] accepts stop words and documents, then turns
//! into a read-only [`SearchServer`] through [`IndexBuilder::build`].
//! Consuming the builder is the only Building -> Serving transition,
//! so no mutation can happen once queries are served.

use crate::core::analysis::StopWords;
use crate::core::config::SearchConfig;
use crate::core::error::{Result, SearchError};
use crate::core::index::InvertedIndex;
use crate::core::search::SearchServer;
use crate::core::types::DocumentId;

/// Collects stop words and documents into an inverted index
#[derive(Debug, Clone, Default)]
pub struct IndexBuilder {
    config: SearchConfig,
    stop_words: StopWords,
    index: InvertedIndex,
    documents_added: usize,
}

impl IndexBuilder {
    /// Create a builder with default search settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a builder whose server will use `config`
    pub fn with_config(config: SearchConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    /// Configure stop words from a space-separated line.
    ///
    /// Must happen before the first document; already indexed
    /// documents would not be re-filtered, so a late call is
    /// rejected with [`SearchError::InvalidState`].
    pub fn set_stop_words(&mut self, text: &str) -> Result<()> {
        if self.documents_added > 0 {
            return Err(SearchError::InvalidState(format!(
                "stop words must be set before documents ({} already added)",
                self.documents_added
            )));
        }

        self.stop_words = StopWords::parse(text);
        tracing::debug!("Configured {} stop words", self.stop_words.len());
        Ok(())
    }

    /// Builder-style variant of [`IndexBuilder::set_stop_words`]
    pub fn stop_words(mut self, text: &str) -> Result<Self> {
        self.set_stop_words(text)?;
        Ok(self)
    }

    /// Index one document.
    ///
    /// Reusing an id merges the texts under that id; callers are
    /// expected to keep ids unique.
    pub fn add_document(&mut self, document_id: DocumentId, text: &str) {
        self.index
            .add_document(document_id, self.stop_words.split_into_words_no_stop(text));
        self.documents_added += 1;
        tracing::debug!(document_id, "Indexed document");
    }

    /// Builder-style variant of [`IndexBuilder::add_document`]
    pub fn document(mut self, document_id: DocumentId, text: &str) -> Self {
        self.add_document(document_id, text);
        self
    }

    /// Finish building and start serving queries
    pub fn build(self) -> SearchServer {
        tracing::info!(
            documents = self.index.document_count(),
            words = self.index.word_count(),
            stop_words = self.stop_words.len(),
            "Index built"
        );
        SearchServer::new(self.stop_words, self.index, self.config)
    }
}
