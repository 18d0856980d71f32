/*!
 * Highlight ranges and interval merging.
 */

use serde::{Deserialize, Serialize};

/// Half-open `[start, end)` byte range in the text it was computed against
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct HighlightRange {
    /// Inclusive start offset
    pub start: usize,
    /// Exclusive end offset
    pub end: usize,
}

impl HighlightRange {
    /// Create a new range
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Number of bytes covered
    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    /// Whether the range covers nothing
    pub fn is_empty(&self) -> bool {
        self.end <= self.start
    }
}

/// Sort `ranges` by start and coalesce overlapping or touching ranges.
///
/// The result is strictly increasing in `start` and pairwise disjoint.
pub fn merge_ranges(mut ranges: Vec<HighlightRange>) -> Vec<HighlightRange> {
    ranges.sort_by_key(|r| r.start);

    let mut merged: Vec<HighlightRange> = Vec::with_capacity(ranges.len());
    let mut iter = ranges.into_iter();

    let Some(mut current) = iter.next() else {
        return merged;
    };

    for next in iter {
        if next.start <= current.end {
            current.end = current.end.max(next.end);
        } else {
            merged.push(current);
            current = next;
        }
    }
    merged.push(current);

    merged
}
