//! Parsed HTML response bodies.

use scraper::Html;

/// An HTML response body, parsed into a traversable tree.
///
/// Parsing is lenient: any input yields a document, possibly an empty one.
#[derive(Debug, Clone)]
pub struct ParsedDocument(Html);

impl ParsedDocument {
    /// Parse a full HTML document.
    pub fn parse(body: &str) -> Self {
        Self(Html::parse_document(body))
    }

    pub fn html(&self) -> &Html {
        &self.0
    }
}
