/*!
 * Whole-document alignment.
 *
 * Segments the document once, then highlights every paragraph and every
 * table cell independently against the full excerpt list. There is no shared
 * offset space: each unit is matched against its own text only, so a quote
 * straddling a block boundary is never found.
 */

use log::debug;
use serde::{Deserialize, Serialize};

use super::blocks::{segment_located_blocks, Block, PageSpan};
use super::cache::{excerpt_set_fingerprint, SegmentCache};
use super::coverage::CoverageReport;
use super::excerpt::{prepare_excerpts, Excerpt};
use super::matcher::{PreparedQuote, QuoteMatcher};
use super::normalizer::PunctuationMode;
use super::segments::{align_unit, Segment, UnitAlignment};

/// Input of one alignment run
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AlignmentRequest {
    /// Full extracted text of the document
    pub raw_text: String,
    /// Evidence quotes attributed to the document
    #[serde(default)]
    pub excerpts: Vec<Excerpt>,
    /// Whether the consumer wants the first highlight brought into view
    #[serde(default)]
    pub scroll_to_first_highlight: bool,
}

impl AlignmentRequest {
    /// Create a request without scroll focus
    pub fn new(raw_text: impl Into<String>, excerpts: Vec<Excerpt>) -> Self {
        Self {
            raw_text: raw_text.into(),
            excerpts,
            scroll_to_first_highlight: false,
        }
    }

    /// Ask for the first highlight to be located
    pub fn with_focus(mut self, focus: bool) -> Self {
        self.scroll_to_first_highlight = focus;
        self
    }
}

/// A highlighted table cell
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlignedCell {
    pub text: String,
    pub segments: Vec<Segment>,
}

/// A block with its segments
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum AlignedBlock {
    Paragraph {
        text: String,
        segments: Vec<Segment>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pages: Option<PageSpan>,
    },
    Table {
        rows: Vec<Vec<AlignedCell>>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pages: Option<PageSpan>,
    },
}

impl AlignedBlock {
    /// Pages the block came from, if known
    pub fn pages(&self) -> Option<PageSpan> {
        match self {
            AlignedBlock::Paragraph { pages, .. } | AlignedBlock::Table { pages, .. } => *pages,
        }
    }

    /// The underlying block without segments
    pub fn to_block(&self) -> Block {
        match self {
            AlignedBlock::Paragraph { text, .. } => Block::Paragraph { text: text.clone() },
            AlignedBlock::Table { rows, .. } => Block::Table {
                rows: rows
                    .iter()
                    .map(|row| row.iter().map(|cell| cell.text.clone()).collect())
                    .collect(),
            },
        }
    }
}

/// Address of a segment inside an aligned document.
///
/// `row` and `cell` are set only for table blocks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HighlightLocator {
    pub block: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub row: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cell: Option<usize>,
    pub segment: usize,
}

/// Output of one alignment run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlignedDocument {
    pub blocks: Vec<AlignedBlock>,
    /// First highlight, present only when focus was requested
    #[serde(skip_serializing_if = "Option::is_none")]
    pub focus: Option<HighlightLocator>,
    pub coverage: CoverageReport,
}

impl AlignedDocument {
    /// First highlighted segment in document order
    pub fn first_highlight(&self) -> Option<HighlightLocator> {
        for (block_index, block) in self.blocks.iter().enumerate() {
            match block {
                AlignedBlock::Paragraph { segments, .. } => {
                    if let Some(segment) = first_highlighted(segments) {
                        return Some(HighlightLocator { block: block_index, row: None, cell: None, segment });
                    }
                }
                AlignedBlock::Table { rows, .. } => {
                    for (row_index, row) in rows.iter().enumerate() {
                        for (cell_index, cell) in row.iter().enumerate() {
                            if let Some(segment) = first_highlighted(&cell.segments) {
                                return Some(HighlightLocator {
                                    block: block_index,
                                    row: Some(row_index),
                                    cell: Some(cell_index),
                                    segment,
                                });
                            }
                        }
                    }
                }
            }
        }
        None
    }

    /// Resolve a locator back to its segment
    pub fn segment_at(&self, locator: &HighlightLocator) -> Option<&Segment> {
        let segments = match (self.blocks.get(locator.block)?, locator.row, locator.cell) {
            (AlignedBlock::Paragraph { segments, .. }, None, None) => segments,
            (AlignedBlock::Table { rows, .. }, Some(row), Some(cell)) => &rows.get(row)?.get(cell)?.segments,
            _ => return None,
        };
        segments.get(locator.segment)
    }

    /// Number of highlighted segments across all units
    pub fn highlight_count(&self) -> usize {
        self.blocks
            .iter()
            .map(|block| match block {
                AlignedBlock::Paragraph { segments, .. } => count_highlighted(segments),
                AlignedBlock::Table { rows, .. } => rows
                    .iter()
                    .flatten()
                    .map(|cell| count_highlighted(&cell.segments))
                    .sum(),
            })
            .sum()
    }
}

fn first_highlighted(segments: &[Segment]) -> Option<usize> {
    segments.iter().position(|s| s.highlighted)
}

fn count_highlighted(segments: &[Segment]) -> usize {
    segments.iter().filter(|s| s.highlighted).count()
}

/// Runs segmentation and per-unit highlighting over a document
#[derive(Clone, Default)]
pub struct DocumentAligner {
    matcher: QuoteMatcher,
    cache: Option<SegmentCache>,
}

impl DocumentAligner {
    /// Create an aligner without memoization
    pub fn new(punctuation: PunctuationMode) -> Self {
        Self {
            matcher: QuoteMatcher::new(punctuation),
            cache: None,
        }
    }

    /// Memoize per-unit results in `cache`
    pub fn with_cache(mut self, cache: SegmentCache) -> Self {
        self.cache = Some(cache);
        self
    }

    /// The attached cache, if any
    pub fn cache(&self) -> Option<&SegmentCache> {
        self.cache.as_ref()
    }

    /// The quote matcher used for every unit
    pub fn matcher(&self) -> &QuoteMatcher {
        &self.matcher
    }

    /// Segment the document and highlight every unit
    pub fn align(&self, request: &AlignmentRequest) -> AlignedDocument {
        let excerpts = prepare_excerpts(&request.excerpts);
        let quotes: Vec<PreparedQuote> = excerpts
            .iter()
            .map(|excerpt| self.matcher.prepare(&excerpt.quote))
            .collect();
        let fingerprint = excerpt_set_fingerprint(&quotes);
        let mut coverage = CoverageReport::new(&excerpts);

        let mut blocks = Vec::new();
        for located in segment_located_blocks(&request.raw_text) {
            let aligned = match located.block {
                Block::Paragraph { text } => {
                    let unit = self.align_unit(&text, &quotes, &fingerprint);
                    coverage.record(&unit.passes);
                    AlignedBlock::Paragraph {
                        text,
                        segments: unit.segments,
                        pages: located.pages,
                    }
                }
                Block::Table { rows } => {
                    let mut aligned_rows = Vec::with_capacity(rows.len());
                    for row in rows {
                        let mut cells = Vec::with_capacity(row.len());
                        for text in row {
                            let unit = self.align_unit(&text, &quotes, &fingerprint);
                            coverage.record(&unit.passes);
                            cells.push(AlignedCell { text, segments: unit.segments });
                        }
                        aligned_rows.push(cells);
                    }
                    AlignedBlock::Table {
                        rows: aligned_rows,
                        pages: located.pages,
                    }
                }
            };
            blocks.push(aligned);
        }

        for missing in coverage.missing() {
            debug!("Excerpt not located: '{}' (page {:?})", missing.quote, missing.page);
        }
        debug!(
            "Aligned {} block(s), {}/{} excerpt(s) located",
            blocks.len(),
            coverage.located,
            coverage.total
        );

        let mut document = AlignedDocument {
            blocks,
            focus: None,
            coverage,
        };
        if request.scroll_to_first_highlight {
            document.focus = document.first_highlight();
        }
        document
    }

    /// Highlight one unit of text against raw excerpts
    pub fn segments_for(&self, unit_text: &str, excerpts: &[Excerpt]) -> Vec<Segment> {
        let quotes: Vec<PreparedQuote> = prepare_excerpts(excerpts)
            .iter()
            .map(|excerpt| self.matcher.prepare(&excerpt.quote))
            .collect();
        align_unit(unit_text, &quotes).segments
    }

    fn align_unit(&self, text: &str, quotes: &[PreparedQuote], fingerprint: &str) -> UnitAlignment {
        match &self.cache {
            Some(cache) => cache.get_or_align(text, quotes, fingerprint, self.matcher.punctuation()),
            None => align_unit(text, quotes),
        }
    }
}
