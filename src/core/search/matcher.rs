//! Relevance scoring straight from postings lists.
//!
//! Relevance of a document is the number of distinct plus words
//! it contains. Any minus word disqualifies the document, and a
//! query without plus words matches nothing.

use crate::core::index::InvertedIndex;
use crate::core::search::query::Query;
use crate::core::types::{DocumentId, ScoredDocument};
use std::collections::HashMap;

/// Scores documents of one index against parsed queries
#[derive(Debug, Clone, Copy)]
pub struct Matcher<'a> {
    index: &'a InvertedIndex,
}

impl<'a> Matcher<'a> {
    pub fn new(index: &'a InvertedIndex) -> Self {
        Self { index }
    }

    /// Score every matching document, in no particular order.
    ///
    /// Accumulates one point per plus word over its postings, then
    /// drops every document found in a minus word's postings.
    pub fn score(&self, query: &Query) -> Vec<ScoredDocument> {
        if query.has_no_plus_words() {
            return Vec::new();
        }

        let mut relevance: HashMap<DocumentId, usize> = HashMap::new();
        for word in &query.plus_words {
            if let Some(documents) = self.index.postings(word) {
                for &document_id in documents {
                    *relevance.entry(document_id).or_insert(0) += 1;
                }
            }
        }

        for word in &query.minus_words {
            if let Some(documents) = self.index.postings(word) {
                for document_id in documents {
                    relevance.remove(document_id);
                }
            }
        }

        relevance
            .into_iter()
            .map(|(document_id, relevance)| ScoredDocument::new(document_id, relevance))
            .collect()
    }

    /// Plus words contained in one document, sorted.
    ///
    /// Empty when the document contains any minus word.
    pub fn matched_words(&self, query: &Query, document_id: DocumentId) -> Vec<String> {
        let excluded = query
            .minus_words
            .iter()
            .any(|word| self.index.contains(word, document_id));
        if excluded {
            return Vec::new();
        }

        query
            .plus_words
            .iter()
            .filter(|word| self.index.contains(word, document_id))
            .cloned()
            .collect()
    }
}
