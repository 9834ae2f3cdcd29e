//! Inverted index mapping words to the documents that contain them.
//!
//! Postings are sets, not frequency tables: a word repeated in a
//! document records that document once.

use crate::core::types::DocumentId;
use std::collections::{BTreeSet, HashMap};

/// Ordered set of documents containing a word
pub type PostingSet = BTreeSet<DocumentId>;

/// Inverted index structure
#[derive(Debug, Clone, Default)]
pub struct InvertedIndex {
    /// word -> documents containing it
    postings: HashMap<String, PostingSet>,
    /// every document added, including ones with no indexed words
    documents: BTreeSet<DocumentId>,
}

impl InvertedIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `document_id` under each of `words`.
    ///
    /// Words are expected to be stop-word filtered already.
    /// Repeated words collapse into a single posting.
    pub fn add_document<'a, I>(&mut self, document_id: DocumentId, words: I)
    where
        I: IntoIterator<Item = &'a str>,
    {
        self.documents.insert(document_id);

        for word in words {
            match self.postings.get_mut(word) {
                Some(documents) => {
                    documents.insert(document_id);
                }
                None => {
                    self.postings
                        .insert(word.to_string(), PostingSet::from([document_id]));
                }
            }
        }
    }

    /// Documents containing `word`, if any
    pub fn postings(&self, word: &str) -> Option<&PostingSet> {
        self.postings.get(word)
    }

    /// Check whether a document contains a word
    pub fn contains(&self, word: &str, document_id: DocumentId) -> bool {
        self.postings
            .get(word)
            .is_some_and(|documents| documents.contains(&document_id))
    }

    pub fn has_document(&self, document_id: DocumentId) -> bool {
        self.documents.contains(&document_id)
    }

    /// Number of distinct document ids added
    pub fn document_count(&self) -> usize {
        self.documents.len()
    }

    /// Number of distinct indexed words
    pub fn word_count(&self) -> usize {
        self.postings.len()
    }
}
