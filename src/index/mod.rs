//! Inverted index and ranked query engine.
//!
//! - **`word_index`**: the word -> document -> count table and its queries
//! - **`shared`**: reader-writer guarded handle shared across workers
//! - **`ingest`**: tokenization and corpus-directory loading

pub mod ingest;
pub mod shared;
pub mod word_index;

pub use shared::SharedIndex;
pub use word_index::{SearchResult, WordIndex};
