//! Frequency-based keyword extraction

use super::tokenizer::{EnglishStopwords, Stopwords, Tokenizer, WordTokenizer};
use super::Tier;
use std::collections::HashMap;
use std::sync::Arc;

/// Produces an ordered keyword list for a document's text
pub trait ExtractKeywords: Send + Sync {
    fn extract_keywords(&self, text: &str, page_count: usize) -> Vec<String>;
}

/// Picks the most frequent non-stopword tokens
///
/// Tokens are lower-cased and kept only when they are entirely alphanumeric
/// and not stopwords. Distinct tokens are counted in first-occurrence order
/// and ranked by descending count; equal counts keep first-occurrence order.
#[derive(Clone)]
pub struct FrequencyKeywords {
    tokenizer: Arc<dyn Tokenizer>,
    stopwords: Arc<dyn Stopwords>,
}

impl FrequencyKeywords {
    pub fn new(tokenizer: Arc<dyn Tokenizer>, stopwords: Arc<dyn Stopwords>) -> Self {
        Self {
            tokenizer,
            stopwords,
        }
    }

    /// Counts retained tokens, preserving the order in which each first appeared
    fn count_terms(&self, text: &str) -> Vec<(String, usize)> {
        let mut index: HashMap<String, usize> = HashMap::new();
        let mut counts: Vec<(String, usize)> = Vec::new();

        for token in self.tokenizer.tokenize(text) {
            let word = token.to_lowercase();
            if word.is_empty() || !word.chars().all(char::is_alphanumeric) {
                continue;
            }
            if self.stopwords.is_stopword(&word) {
                continue;
            }

            match index.get(&word) {
                Some(&slot) => counts[slot].1 += 1,
                None => {
                    index.insert(word.clone(), counts.len());
                    counts.push((word, 1));
                }
            }
        }

        counts
    }
}

impl Default for FrequencyKeywords {
    fn default() -> Self {
        Self::new(Arc::new(WordTokenizer), Arc::new(EnglishStopwords::new()))
    }
}

impl std::fmt::Debug for FrequencyKeywords {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FrequencyKeywords").finish_non_exhaustive()
    }
}

impl ExtractKeywords for FrequencyKeywords {
    fn extract_keywords(&self, text: &str, page_count: usize) -> Vec<String> {
        let keep = Tier::for_pages(page_count).keyword_count();
        let mut counts = self.count_terms(text);

        // Stable sort: ties stay in first-occurrence order
        counts.sort_by(|a, b| b.1.cmp(&a.1));

        counts
            .into_iter()
            .take(keep)
            .map(|(word, _)| word)
            .collect()
    }
}
