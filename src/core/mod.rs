//! Core domain logic (adapter-agnostic)
//!
//! This module contains the whole search engine. It performs no
//! I/O besides reading configuration files and the line protocol
//! in [`input`].
//!
//! # Architecture
//!
//! - **analysis**: Word splitting and stop words
//! - **index**: Inverted index and the build phase
//! - **search**: Query parsing, scoring and top-k ranking
//! - **input**: Line-oriented input protocol
//! - **config**: Configuration loading (TOML + environment)
//! - **error**: Error types and Result alias
//! - **types**: Domain data structures

pub mod analysis;
pub mod config;
pub mod error;
pub mod index;
pub mod input;
pub mod search;
pub mod types;

// Re-export key types for convenience
pub use config::Config;
pub use error::{Result, SearchError};
pub use index::IndexBuilder;
pub use search::SearchServer;
