//! Document indexing module.
//!
//! Handles the build phase of the engine:
//!
//! - Stop-word filtering of document text
//! - Inverted index of word -> document ids
//! - The Building -> Serving transition

pub mod builder;
pub mod inverted;

pub use builder::IndexBuilder;
pub use inverted::{InvertedIndex, PostingSet};
