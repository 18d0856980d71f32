/*!
 * Evidence excerpts attributed to a document.
 */

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

/// A verbatim quote attributed to a document by the extraction process.
///
/// `page` and `document_id` are passed through untouched; matching only
/// looks at `quote`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Excerpt {
    pub quote: String,
    #[serde(default)]
    pub page: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub document_id: Option<i64>,
}

impl Excerpt {
    /// Create an excerpt without page or document attribution
    pub fn new(quote: impl Into<String>) -> Self {
        Self {
            quote: quote.into(),
            page: None,
            document_id: None,
        }
    }

    /// Attach a page number
    pub fn with_page(mut self, page: u32) -> Self {
        self.page = Some(page);
        self
    }

    /// Attach a document id
    pub fn with_document_id(mut self, document_id: i64) -> Self {
        self.document_id = Some(document_id);
        self
    }
}

/// Trim quotes, drop empty ones and remove `(quote, page)` duplicates.
///
/// First-seen order is kept.
pub fn prepare_excerpts(excerpts: &[Excerpt]) -> Vec<Excerpt> {
    let mut seen: HashSet<(String, Option<u32>)> = HashSet::new();

    excerpts
        .iter()
        .filter_map(|excerpt| {
            let quote = excerpt.quote.trim();
            if quote.is_empty() || !seen.insert((quote.to_string(), excerpt.page)) {
                return None;
            }
            Some(Excerpt {
                quote: quote.to_string(),
                ..excerpt.clone()
            })
        })
        .collect()
}
