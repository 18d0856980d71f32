/*!
 * Evidence-quote alignment and document segmentation.
 *
 * Given the extracted text of a source document and the evidence quotes
 * attributed to it, this module splits the text into paragraphs and tables
 * and locates every quote inside each paragraph and cell, even when the quote
 * differs from the stored text by whitespace reflow, case, or punctuation.
 *
 * # Architecture
 *
 * - `normalizer`: index-preserving lowercase/alphanumeric normalization
 * - `matcher`: two-tier quote matching (exact, then approximate)
 * - `ranges`: highlight ranges and interval merging
 * - `blocks`: line-oriented paragraph/table segmentation
 * - `segments`: slicing a unit into plain and highlighted runs
 * - `excerpt`: excerpt records and preparation
 * - `coverage`: which excerpts were located, and by which pass
 * - `cache`: optional memoization of per-unit results
 * - `document`: whole-document orchestration and focus lookup
 *
 * Everything here is pure and synchronous; no I/O is performed.
 */

pub mod blocks;
pub mod cache;
pub mod coverage;
pub mod document;
pub mod excerpt;
pub mod matcher;
pub mod normalizer;
pub mod ranges;
pub mod segments;

// Re-export main types
pub use blocks::{
    is_table_row, page_marker, segment_blocks, segment_located_blocks, split_cells, Block, LocatedBlock,
    PageSpan,
};
pub use cache::SegmentCache;
pub use coverage::{CoverageReport, ExcerptCoverage};
pub use document::{
    AlignedBlock, AlignedCell, AlignedDocument, AlignmentRequest, DocumentAligner, HighlightLocator,
};
pub use excerpt::{prepare_excerpts, Excerpt};
pub use matcher::{MatchOutcome, MatchPass, PreparedQuote, QuoteMatcher};
pub use normalizer::{normalize, normalize_with, NormalizedForm, PunctuationMode};
pub use ranges::{merge_ranges, HighlightRange};
pub use segments::{align_unit, build_segments, slice_segments, unit_ranges, Segment, UnitAlignment};
