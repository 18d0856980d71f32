/*!
 * Slicing a unit of text into plain and highlighted runs.
 */

use serde::{Deserialize, Serialize};

use super::matcher::{MatchPass, PreparedQuote};
use super::ranges::{merge_ranges, HighlightRange};

/// A run of unit text, highlighted or not
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Segment {
    pub highlighted: bool,
    pub text: String,
}

impl Segment {
    /// A non-highlighted run
    pub fn plain(text: impl Into<String>) -> Self {
        Self { highlighted: false, text: text.into() }
    }

    /// A highlighted run
    pub fn highlight(text: impl Into<String>) -> Self {
        Self { highlighted: true, text: text.into() }
    }
}

/// Segments of one unit plus which pass, if any, located each quote in it
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct UnitAlignment {
    pub segments: Vec<Segment>,
    /// One entry per quote, in quote order
    pub passes: Vec<Option<MatchPass>>,
}

impl UnitAlignment {
    /// Whether any segment is highlighted
    pub fn has_highlight(&self) -> bool {
        self.segments.iter().any(|s| s.highlighted)
    }
}

/// Pool the hits of every quote inside `unit_text` and merge them.
pub fn unit_ranges(unit_text: &str, quotes: &[PreparedQuote]) -> Vec<HighlightRange> {
    let pooled: Vec<HighlightRange> = quotes
        .iter()
        .flat_map(|quote| quote.find_outcome(unit_text).ranges)
        .collect();

    merge_ranges(pooled)
}

/// Highlight every quote occurrence inside `unit_text`.
///
/// Concatenating the returned texts always reproduces `unit_text`.
pub fn build_segments(unit_text: &str, quotes: &[PreparedQuote]) -> Vec<Segment> {
    align_unit(unit_text, quotes).segments
}

/// Match every quote against `unit_text`, keeping per-quote pass results.
pub fn align_unit(unit_text: &str, quotes: &[PreparedQuote]) -> UnitAlignment {
    let mut pooled = Vec::new();
    let passes = quotes
        .iter()
        .map(|quote| {
            let outcome = quote.find_outcome(unit_text);
            pooled.extend(outcome.ranges);
            outcome.pass
        })
        .collect();

    let ranges = merge_ranges(pooled);
    UnitAlignment {
        segments: slice_segments(unit_text, &ranges),
        passes,
    }
}

/// Cut `unit_text` at merged, sorted, disjoint `ranges`.
pub fn slice_segments(unit_text: &str, ranges: &[HighlightRange]) -> Vec<Segment> {
    if ranges.is_empty() {
        return vec![Segment::plain(unit_text)];
    }

    let mut segments = Vec::with_capacity(ranges.len() * 2 + 1);
    let mut cursor = 0;

    for range in ranges {
        if range.start > cursor {
            segments.push(Segment::plain(&unit_text[cursor..range.start]));
        }
        if range.end > range.start {
            segments.push(Segment::highlight(&unit_text[range.start..range.end]));
        }
        cursor = cursor.max(range.end);
    }

    if cursor < unit_text.len() {
        segments.push(Segment::plain(&unit_text[cursor..]));
    }

    segments
}
