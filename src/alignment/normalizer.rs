/*!
 * Index-preserving text normalization.
 *
 * Reduces a string to lowercase ASCII alphanumerics separated by single
 * spaces, while remembering where every kept character came from so that a
 * hit found in the normalized form can be mapped back onto the original text.
 */

use serde::{Deserialize, Serialize};

/// How characters that are neither whitespace nor ASCII alphanumerics are handled
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PunctuationMode {
    /// Drop the character entirely, so `non-recurring` becomes `nonrecurring`
    #[default]
    Drop,
    /// Treat the character like whitespace, so `non-recurring` becomes `non recurring`
    Space,
}

/// A matching-friendly view of a string.
///
/// `index_map[i]` is the byte offset in the original text of the character
/// that produced `normalized[i]`. Both always have the same length.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct NormalizedForm {
    /// Lowercase alphanumerics and single spaces
    pub normalized: String,
    /// Original byte offset for each byte of `normalized`
    pub index_map: Vec<usize>,
}

impl NormalizedForm {
    /// Length of the normalized string
    pub fn len(&self) -> usize {
        self.normalized.len()
    }

    /// Whether normalization produced nothing
    pub fn is_empty(&self) -> bool {
        self.normalized.is_empty()
    }

    /// Map a half-open range of the normalized string back onto `original`.
    ///
    /// The end is the offset of the last mapped character plus its UTF-8
    /// width, so the returned range always lies on char boundaries.
    pub fn original_range(&self, original: &str, norm_start: usize, norm_end: usize) -> Option<(usize, usize)> {
        if norm_start >= norm_end || norm_end > self.index_map.len() {
            return None;
        }

        let start = self.index_map[norm_start];
        let last = self.index_map[norm_end - 1];
        let width = original[last..].chars().next().map_or(1, char::len_utf8);

        Some((start, last + width))
    }
}

/// Normalize with the default punctuation handling (dropped).
pub fn normalize(text: &str) -> NormalizedForm {
    normalize_with(text, PunctuationMode::Drop)
}

/// Normalize `text` with an explicit punctuation mode.
pub fn normalize_with(text: &str, mode: PunctuationMode) -> NormalizedForm {
    let mut normalized = String::with_capacity(text.len());
    let mut index_map = Vec::with_capacity(text.len());

    for (offset, ch) in text.char_indices() {
        if ch.is_whitespace() {
            push_space(&mut normalized, &mut index_map, offset);
        } else if ch.is_ascii_alphanumeric() {
            normalized.push(ch.to_ascii_lowercase());
            index_map.push(offset);
        } else if mode == PunctuationMode::Space {
            push_space(&mut normalized, &mut index_map, offset);
        }
    }

    NormalizedForm { normalized, index_map }
}

fn push_space(normalized: &mut String, index_map: &mut Vec<usize>, offset: usize) {
    if normalized.ends_with(' ') {
        return;
    }
    normalized.push(' ');
    index_map.push(offset);
}
