use std::cmp::Ordering;
use std::collections::HashMap;

/// One ranked hit for a query.
///
/// `rank` is the summed occurrence count of every query term in `doc`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResult {
    pub doc: String,
    pub rank: u32,
}

impl SearchResult {
    pub fn new(doc: impl Into<String>, rank: u32) -> Self {
        Self {
            doc: doc.into(),
            rank,
        }
    }
}

impl Ord for SearchResult {
    /// Highest rank first, then document name ascending.
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .rank
            .cmp(&self.rank)
            .then_with(|| self.doc.cmp(&other.doc))
    }
}

impl PartialOrd for SearchResult {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// In-memory inverted index: word -> document -> occurrence count.
///
/// A stored count is always at least 1; a missing (word, doc) pair means the
/// word never occurred in that document.
#[derive(Debug, Default, Clone)]
pub struct WordIndex {
    words: HashMap<String, HashMap<String, u32>>,
}

impl WordIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records one occurrence of `word` in `doc`. Counts stop at `u32::MAX`.
    pub fn record(&mut self, word: &str, doc: &str) {
        let count = self
            .words
            .entry(word.to_string())
            .or_default()
            .entry(doc.to_string())
            .or_insert(0);
        *count = count.saturating_add(1);
    }

    /// Number of distinct words recorded.
    pub fn num_words(&self) -> usize {
        self.words.len()
    }

    /// Number of distinct documents that have at least one recorded word.
    pub fn num_documents(&self) -> usize {
        let mut docs: Vec<&str> = self
            .words
            .values()
            .flat_map(|postings| postings.keys().map(String::as_str))
            .collect();
        docs.sort_unstable();
        docs.dedup();
        docs.len()
    }

    /// Occurrences of `word` in `doc` (0 when never recorded).
    pub fn count(&self, word: &str, doc: &str) -> u32 {
        self.words
            .get(word)
            .and_then(|postings| postings.get(doc))
            .copied()
            .unwrap_or(0)
    }

    /// Every document containing `word`, ranked by occurrence count.
    pub fn lookup_word(&self, word: &str) -> Vec<SearchResult> {
        let Some(postings) = self.words.get(word) else {
            return Vec::new();
        };

        let mut results: Vec<SearchResult> = postings
            .iter()
            .map(|(doc, &count)| SearchResult::new(doc.as_str(), count))
            .collect();
        results.sort();
        results
    }

    /// Conjunctive ranked query: a document must contain every term, and its
    /// rank is the sum of the per-term counts.
    ///
    /// Terms are not deduplicated, so a repeated term contributes its count
    /// once per repetition. Ranks saturate at `u32::MAX`.
    pub fn lookup_query<S: AsRef<str>>(&self, terms: &[S]) -> Vec<SearchResult> {
        let Some((first, rest)) = terms.split_first() else {
            return Vec::new();
        };

        let first_hits = self.lookup_word(first.as_ref());
        if first_hits.is_empty() || rest.is_empty() {
            return first_hits;
        }

        // None marks a document that missed some term; it can never come back.
        let mut ranks: HashMap<&str, Option<u32>> = first_hits
            .iter()
            .map(|hit| (hit.doc.as_str(), Some(hit.rank)))
            .collect();

        for term in rest {
            let Some(postings) = self.words.get(term.as_ref()) else {
                return Vec::new();
            };
            if postings.is_empty() {
                return Vec::new();
            }

            for (doc, rank) in ranks.iter_mut() {
                *rank = match (*rank, postings.get(*doc)) {
                    (Some(sum), Some(&count)) => Some(sum.saturating_add(count)),
                    _ => None,
                };
            }
        }

        let mut results: Vec<SearchResult> = ranks
            .into_iter()
            .filter_map(|(doc, rank)| rank.map(|rank| SearchResult::new(doc, rank)))
            .collect();
        results.sort();
        results
    }
}
