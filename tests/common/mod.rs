// Common test utilities and fixtures

pub mod helpers;

// Re-export commonly used items
// Note: These may appear unused in some test binaries
#[allow(unused_imports)]
pub use fixtures::{pets_corpus, protocol_input, PETS_STOP_WORDS};
#[allow(unused_imports)]
pub use helpers::{build_server, ids, pairs};
