/*!
 * Locating evidence quotes inside a unit of text.
 *
 * Matching runs in two tiers. The exact pass looks for the quote literally,
 * case-insensitively, with any run of whitespace in the quote allowed to
 * match any run of whitespace in the text. Only when that finds nothing does
 * the approximate pass compare punctuation-free normalized forms of both
 * sides and map the hits back onto the original text.
 */

use log::{debug, warn};
use once_cell::sync::Lazy;
use regex::{NoExpand, Regex, RegexBuilder};
use serde::{Deserialize, Serialize};

use super::normalizer::{normalize_with, PunctuationMode};
use super::ranges::HighlightRange;

/// Whitespace runs inside an escaped quote pattern
static WHITESPACE_RUN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\s+").expect("Invalid whitespace regex")
});

/// Which matching tier located a quote
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchPass {
    /// Case-insensitive literal match with flexible whitespace
    Exact,
    /// Punctuation-insensitive match over normalized forms
    Approximate,
}

/// Result of matching one quote against one unit of text
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MatchOutcome {
    /// The tier that produced `ranges`, `None` when nothing matched
    pub pass: Option<MatchPass>,
    /// Non-overlapping hits, left to right
    pub ranges: Vec<HighlightRange>,
}

impl MatchOutcome {
    fn none() -> Self {
        Self::default()
    }

    /// Whether the quote was located at all
    pub fn is_match(&self) -> bool {
        !self.ranges.is_empty()
    }
}

/// A quote compiled once and reusable against any number of units.
#[derive(Debug, Clone)]
pub struct PreparedQuote {
    quote: String,
    exact: Option<Regex>,
    normalized: String,
    punctuation: PunctuationMode,
}

impl PreparedQuote {
    /// The trimmed quote
    pub fn quote(&self) -> &str {
        &self.quote
    }

    /// Empty quotes never match anything
    pub fn is_inert(&self) -> bool {
        self.quote.is_empty()
    }

    /// Run the exact pass, falling back to the approximate pass when it finds nothing
    pub fn find_outcome(&self, text: &str) -> MatchOutcome {
        if self.is_inert() {
            return MatchOutcome::none();
        }

        let exact = self.exact_ranges(text);
        if !exact.is_empty() {
            return MatchOutcome { pass: Some(MatchPass::Exact), ranges: exact };
        }

        let approximate = self.approximate_ranges(text);
        if approximate.is_empty() {
            return MatchOutcome::none();
        }

        debug!(
            "Approximate match for '{}' ({} hit(s))",
            truncate_text(&self.quote, 40),
            approximate.len()
        );
        MatchOutcome { pass: Some(MatchPass::Approximate), ranges: approximate }
    }

    /// Hits of the whitespace-flexible, case-insensitive literal pattern
    pub fn exact_ranges(&self, text: &str) -> Vec<HighlightRange> {
        match &self.exact {
            Some(regex) => regex
                .find_iter(text)
                .map(|m| HighlightRange::new(m.start(), m.end()))
                .collect(),
            None => Vec::new(),
        }
    }

    /// Hits of the normalized quote inside the normalized text, mapped back to `text`
    pub fn approximate_ranges(&self, text: &str) -> Vec<HighlightRange> {
        if self.normalized.is_empty() {
            return Vec::new();
        }

        let form = normalize_with(text, self.punctuation);
        let needle = self.normalized.as_str();
        let mut ranges = Vec::new();
        let mut from = 0;

        while let Some(pos) = form.normalized[from..].find(needle) {
            let norm_start = from + pos;
            let norm_end = norm_start + needle.len();
            if let Some((start, end)) = form.original_range(text, norm_start, norm_end) {
                ranges.push(HighlightRange::new(start, end));
            }
            from = norm_end;
        }

        ranges
    }
}

/// Stateless two-tier quote matcher
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct QuoteMatcher {
    punctuation: PunctuationMode,
}

impl QuoteMatcher {
    /// Create a matcher with the given punctuation handling for the approximate pass
    pub fn new(punctuation: PunctuationMode) -> Self {
        Self { punctuation }
    }

    /// Punctuation handling used by the approximate pass
    pub fn punctuation(&self) -> PunctuationMode {
        self.punctuation
    }

    /// Compile a quote for repeated matching
    pub fn prepare(&self, quote: &str) -> PreparedQuote {
        let quote = quote.trim().to_string();
        if quote.is_empty() {
            return PreparedQuote {
                quote,
                exact: None,
                normalized: String::new(),
                punctuation: self.punctuation,
            };
        }

        let exact = build_exact_pattern(&quote);
        let normalized = normalize_with(&quote, self.punctuation).normalized;

        PreparedQuote {
            quote,
            exact,
            normalized,
            punctuation: self.punctuation,
        }
    }

    /// Match one quote against one unit of text
    pub fn find_outcome(&self, text: &str, quote: &str) -> MatchOutcome {
        self.prepare(quote).find_outcome(text)
    }

    /// Ranges of `quote` inside `text`; empty when neither pass succeeds
    pub fn find(&self, text: &str, quote: &str) -> Vec<HighlightRange> {
        self.find_outcome(text, quote).ranges
    }
}

/// Escape the quote and let every whitespace run match one or more whitespace chars.
fn build_exact_pattern(quote: &str) -> Option<Regex> {
    let escaped = regex::escape(quote);
    let pattern = WHITESPACE_RUN.replace_all(&escaped, NoExpand(r"\s+"));

    match RegexBuilder::new(&pattern).case_insensitive(true).build() {
        Ok(regex) => Some(regex),
        Err(e) => {
            // Escaped input only fails on size limits
            warn!(
                "Exact pattern unavailable for '{}', using approximate matching only: {}",
                truncate_text(quote, 40),
                e
            );
            None
        }
    }
}

/// Truncate text to a maximum number of chars with ellipsis
fn truncate_text(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((cut, _)) => format!("{}...", &text[..cut]),
        None => text.to_string(),
    }
}
