//! Leading-sentence summarizer

use super::Tier;

/// Produces a summary of a document's text
pub trait Summarize: Send + Sync {
    fn summarize(&self, text: &str, page_count: usize) -> String;
}

/// Keeps the first N period-delimited segments of the text
///
/// The text is split on every literal `.`, the first N segments are kept and
/// rejoined with `.`. There is no abbreviation handling and whitespace is
/// left untouched, so output is reproducible byte for byte. A text ending in
/// `.` yields a trailing empty segment, which counts toward N like any other.
#[derive(Debug, Clone, Copy, Default)]
pub struct PeriodSummarizer;

impl Summarize for PeriodSummarizer {
    fn summarize(&self, text: &str, page_count: usize) -> String {
        let keep = Tier::for_pages(page_count).summary_sentences();
        text.split('.').take(keep).collect::<Vec<_>>().join(".")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TEXT: &str = "Hello world. This is a test. Another sentence. Fourth one.";

    fn segments(summary: &str) -> usize {
        summary.split('.').count()
    }

    #[test]
    fn test_short_document_keeps_two_segments() {
        let summary = PeriodSummarizer.summarize(TEXT, 5);
        assert_eq!(summary, "Hello world. This is a test");
    }

    #[test]
    fn test_medium_document_keeps_five_segments() {
        let text = "a. b. c. d. e. f. g. h. i. j";
        assert_eq!(PeriodSummarizer.summarize(text, 11), "a. b. c. d. e");
        assert_eq!(PeriodSummarizer.summarize(text, 30), "a. b. c. d. e");
    }

    #[test]
    fn test_long_document_keeps_eight_segments() {
        let text = "a. b. c. d. e. f. g. h. i. j";
        assert_eq!(PeriodSummarizer.summarize(text, 31), "a. b. c. d. e. f. g. h");
    }

    #[test]
    fn test_tier_boundary_at_ten_pages() {
        let text = "a. b. c. d. e. f";
        assert_eq!(segments(&PeriodSummarizer.summarize(text, 10)), 2);
        assert_eq!(segments(&PeriodSummarizer.summarize(text, 11)), 5);
    }

    #[test]
    fn test_fewer_segments_than_tier_keeps_all() {
        assert_eq!(PeriodSummarizer.summarize("Only one sentence", 40), "Only one sentence");
        assert_eq!(PeriodSummarizer.summarize("One. Two", 40), "One. Two");
    }

    #[test]
    fn test_trailing_period_keeps_empty_segment() {
        // "One." splits into ["One", ""], both kept
        assert_eq!(PeriodSummarizer.summarize("One.", 3), "One.");
    }

    #[test]
    fn test_whitespace_is_not_trimmed() {
        assert_eq!(PeriodSummarizer.summarize("  a .  b .c", 1), "  a .  b ");
    }

    #[test]
    fn test_empty_text() {
        assert_eq!(PeriodSummarizer.summarize("", 1), "");
    }

    #[test]
    fn test_segment_count_never_exceeds_tier() {
        let text = "s. ".repeat(50);
        for pages in [1usize, 7, 10, 11, 20, 30, 31, 99] {
            let limit = Tier::for_pages(pages).summary_sentences();
            assert!(segments(&PeriodSummarizer.summarize(&text, pages)) <= limit);
        }
    }

    #[test]
    fn test_deterministic() {
        let first = PeriodSummarizer.summarize(TEXT, 12);
        for _ in 0..10 {
            assert_eq!(PeriodSummarizer.summarize(TEXT, 12), first);
        }
    }
}
