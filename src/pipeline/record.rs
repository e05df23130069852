//! The persisted unit of the pipeline

use serde::{Deserialize, Serialize};

/// One digested document, as written to the document store
///
/// Immutable once constructed. Serializes to exactly
/// `{ pdf_url, summary, keywords, num_pages }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryRecord {
    pdf_url: String,
    summary: String,
    keywords: Vec<String>,
    num_pages: usize,
}

impl SummaryRecord {
    pub fn new(pdf_url: String, summary: String, keywords: Vec<String>, num_pages: usize) -> Self {
        Self {
            pdf_url,
            summary,
            keywords,
            num_pages,
        }
    }

    pub fn pdf_url(&self) -> &str {
        &self.pdf_url
    }

    pub fn summary(&self) -> &str {
        &self.summary
    }

    pub fn keywords(&self) -> &[String] {
        &self.keywords
    }

    pub fn num_pages(&self) -> usize {
        self.num_pages
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serialized_field_names() {
        let record = SummaryRecord::new(
            "https://example.com/a.pdf".to_string(),
            "Intro".to_string(),
            vec!["rust".to_string()],
            3,
        );

        let value = serde_json::to_value(&record).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "pdf_url": "https://example.com/a.pdf",
                "summary": "Intro",
                "keywords": ["rust"],
                "num_pages": 3
            })
        );
    }
}
