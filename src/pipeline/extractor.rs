//! PDF text extraction
//!
//! Decodes fetched bytes into the document's full text and its structural
//! page count. Extraction is all-or-nothing: callers get a complete
//! [`ParsedText`] or a [`ParseError`].

use thiserror::Error;

/// Text and page count decoded from a document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedText {
    /// Concatenated page texts, each followed by a newline
    pub text: String,

    /// Number of pages in the document's page tree (always >= 1)
    pub page_count: usize,
}

/// Reasons a document could not be decoded
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("Failed to parse PDF: {0}")]
    Malformed(String),

    #[error("PDF has no pages")]
    NoPages,
}

/// Decodes raw document bytes into text
///
/// Implementations are CPU-bound and are called from a blocking thread.
pub trait TextExtractor: Send + Sync {
    fn extract(&self, bytes: &[u8]) -> Result<ParsedText, ParseError>;
}

/// Extractor backed by `lopdf`
///
/// Pages are visited in page-number order. A page whose text cannot be
/// decoded contributes nothing to the text but still counts as a page, so an
/// image-only document yields whitespace text and its full page count.
#[derive(Debug, Clone, Copy, Default)]
pub struct LopdfExtractor;

impl TextExtractor for LopdfExtractor {
    fn extract(&self, bytes: &[u8]) -> Result<ParsedText, ParseError> {
        let doc =
            lopdf::Document::load_mem(bytes).map_err(|e| ParseError::Malformed(e.to_string()))?;

        // BTreeMap keys are already in page-number order
        let pages: Vec<u32> = doc.get_pages().keys().copied().collect();
        if pages.is_empty() {
            return Err(ParseError::NoPages);
        }

        let mut text = String::new();
        for page_num in &pages {
            match doc.extract_text(&[*page_num]) {
                Ok(page_text) => text.push_str(&page_text),
                Err(e) => tracing::debug!("No text extracted from page {}: {}", page_num, e),
            }
            text.push('\n');
        }

        tracing::debug!("Extracted {} chars from {} pages", text.len(), pages.len());

        Ok(ParsedText {
            text,
            page_count: pages.len(),
        })
    }
}
