//! Derivation of summaries and keywords from extracted text
//!
//! Both derivations are pure functions of `(text, page_count)`. The amount of
//! output scales with document length through a fixed three-tier table keyed
//! by page count, see [`Tier`].

mod keywords;
mod summarizer;
mod tokenizer;

pub use keywords::{ExtractKeywords, FrequencyKeywords};
pub use summarizer::{PeriodSummarizer, Summarize};
pub use tokenizer::{EnglishStopwords, StopwordSet, Stopwords, Tokenizer, WordTokenizer};

/// Document length class selected from the page count
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tier {
    /// 1 to 10 pages
    Short,

    /// 11 to 30 pages
    Medium,

    /// 31 pages and more
    Long,
}

impl Tier {
    /// Selects the tier for a document with `page_count` pages
    ///
    /// A zero page count never reaches derivation (the extractor rejects it)
    /// and falls into the short tier.
    pub fn for_pages(page_count: usize) -> Self {
        match page_count {
            0..=10 => Self::Short,
            11..=30 => Self::Medium,
            _ => Self::Long,
        }
    }

    /// Number of period-delimited segments kept in the summary
    pub fn summary_sentences(&self) -> usize {
        match self {
            Self::Short => 2,
            Self::Medium => 5,
            Self::Long => 8,
        }
    }

    /// Number of keywords kept
    pub fn keyword_count(&self) -> usize {
        match self {
            Self::Short => 3,
            Self::Medium => 5,
            Self::Long => 7,
        }
    }
}
