//! Index handle shared by every connection worker.
//!
//! Lookups take the read guard and may run in parallel; `record` takes the
//! write guard. Guards never outlive a single call.

use crate::index::word_index::{SearchResult, WordIndex};
use std::sync::Arc;
use tokio::sync::RwLock;

#[derive(Debug, Clone, Default)]
pub struct SharedIndex {
    inner: Arc<RwLock<WordIndex>>,
}

impl SharedIndex {
    pub fn new(index: WordIndex) -> Self {
        Self {
            inner: Arc::new(RwLock::new(index)),
        }
    }

    pub async fn record(&self, word: &str, doc: &str) {
        self.inner.write().await.record(word, doc);
    }

    pub async fn lookup_word(&self, word: &str) -> Vec<SearchResult> {
        self.inner.read().await.lookup_word(word)
    }

    pub async fn lookup_query<S: AsRef<str>>(&self, terms: &[S]) -> Vec<SearchResult> {
        self.inner.read().await.lookup_query(terms)
    }

    /// Runs `lookup_query` and reads `num_words` under one read guard, so a
    /// concurrent `record` cannot land between the two.
    pub async fn query_with_stats<S: AsRef<str>>(
        &self,
        terms: &[S],
    ) -> (Vec<SearchResult>, usize) {
        let index = self.inner.read().await;
        (index.lookup_query(terms), index.num_words())
    }

    pub async fn num_words(&self) -> usize {
        self.inner.read().await.num_words()
    }

    pub async fn num_documents(&self) -> usize {
        self.inner.read().await.num_documents()
    }
}

impl From<WordIndex> for SharedIndex {
    fn from(index: WordIndex) -> Self {
        Self::new(index)
    }
}
