//! docsearch - In-memory full-text search
//!
//! Builds an inverted index over a small corpus of short documents
//! and answers bag-of-words queries with a ranked, size-bounded
//! list of document ids.
//!
//! # Architecture
//!
//! - **core**: The engine (adapter-agnostic)
//!   - analysis (word splitting, stop words)
//!   - index (inverted index, build phase)
//!   - search (plus/minus queries, scoring, top-k)
//!   - config, error, types, input protocol
//!
//! - **cli**: Command-line adapter (depends on core)
//!
//! # Example
//!
//! ```
//! use docsearch::core::IndexBuilder;
//!
//! let server = IndexBuilder::new()
//!     .stop_words("a the")
//!     .unwrap()
//!     .document(0, "a cat sat")
//!     .document(1, "the dog sat")
//!     .build();
//!
//! let results = server.find_top_documents("cat -dog");
//! assert_eq!(results.len(), 1);
//! assert_eq!(results[0].document_id, 0);
//! assert_eq!(results[0].relevance, 1);
//! ```

// Core domain logic (adapter-agnostic)
pub mod core;

// CLI adapter
pub mod cli;

// Re-export commonly used types for convenience
pub use crate::core::config::{Config, SearchConfig};
pub use crate::core::error::{Result, SearchError};
pub use crate::core::index::IndexBuilder;
pub use crate::core::search::SearchServer;
pub use crate::core::types::*;
