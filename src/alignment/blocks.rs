/*!
 * Line-oriented document segmentation.
 *
 * Partitions extracted document text into prose paragraphs and tables in a
 * single greedy pass over its lines. A line is a table-row candidate when
 * splitting it on tabs or runs of two or more spaces yields at least two
 * cells, one of them non-blank. Consecutive candidates form a table; a lone
 * candidate is demoted back to prose.
 *
 * Extracted PDF text carries `[Page N]` marker lines between pages. They are
 * kept as ordinary text, but the segmenter also reports which pages each
 * block spans.
 */

use std::ops::Range;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// Cell separator: any tab, or two or more consecutive spaces
static CELL_SEPARATOR: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r" {2,}|\t").expect("Invalid cell separator regex")
});

/// Page marker line written by the ingestion pipeline
static PAGE_MARKER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\s*\[Page (\d+)\]\s*$").expect("Invalid page marker regex")
});

/// A contiguous unit of a document
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Block {
    /// Prose, trimmed, with its original line breaks
    Paragraph { text: String },
    /// Trimmed cells per row; rows may be ragged
    Table { rows: Vec<Vec<String>> },
}

impl Block {
    /// Whether this block is a table
    pub fn is_table(&self) -> bool {
        matches!(self, Block::Table { .. })
    }

    /// Flatten the block back to text: cells joined by two spaces, rows by newlines
    pub fn plain_text(&self) -> String {
        match self {
            Block::Paragraph { text } => text.clone(),
            Block::Table { rows } => rows
                .iter()
                .map(|row| row.join("  "))
                .collect::<Vec<_>>()
                .join("\n"),
        }
    }
}

/// Inclusive range of page numbers a block was taken from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageSpan {
    pub first: u32,
    pub last: u32,
}

/// A block together with where it came from in the source text
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocatedBlock {
    pub block: Block,
    /// Zero-based source line indices covered by the block
    pub lines: Range<usize>,
    /// Pages covered, when the text carries page markers
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pages: Option<PageSpan>,
}

/// Partition `raw` into paragraph and table blocks in document order.
pub fn segment_blocks(raw: &str) -> Vec<Block> {
    segment_located_blocks(raw)
        .into_iter()
        .map(|located| located.block)
        .collect()
}

/// Partition `raw` into blocks, keeping each block's line range and page span.
pub fn segment_located_blocks(raw: &str) -> Vec<LocatedBlock> {
    let lines = split_lines(raw);
    let pages = pages_by_line(&lines);
    let mut segmenter = Segmenter::new(&pages);

    for (index, (content, terminator)) in lines.iter().enumerate() {
        let cells = split_cells(content);
        if is_table_row(&cells) {
            segmenter.push_row(index, &cells);
        } else {
            segmenter.push_prose(index, content, terminator);
        }
    }

    segmenter.finish(lines.len())
}

/// Split a line into candidate cells
pub fn split_cells(line: &str) -> Vec<&str> {
    CELL_SEPARATOR.split(line).collect()
}

/// Two or more cells with at least one non-blank
pub fn is_table_row(cells: &[&str]) -> bool {
    cells.len() >= 2 && cells.iter().any(|cell| !cell.trim().is_empty())
}

/// Page number announced by a `[Page N]` marker line
pub fn page_marker(line: &str) -> Option<u32> {
    PAGE_MARKER
        .captures(line)
        .and_then(|caps| caps.get(1))
        .and_then(|m| m.as_str().parse().ok())
}

/// Split on `\r\n`, `\n` or `\r`, keeping each line's terminator.
///
/// A trailing terminator yields a final empty line, like a regex split.
fn split_lines(raw: &str) -> Vec<(&str, &str)> {
    let bytes = raw.as_bytes();
    let mut lines = Vec::new();
    let mut start = 0;
    let mut i = 0;

    while i < bytes.len() {
        match bytes[i] {
            b'\n' => {
                lines.push((&raw[start..i], &raw[i..i + 1]));
                i += 1;
                start = i;
            }
            b'\r' => {
                let end = if bytes.get(i + 1) == Some(&b'\n') { i + 2 } else { i + 1 };
                lines.push((&raw[start..i], &raw[i..end]));
                i = end;
                start = i;
            }
            _ => i += 1,
        }
    }
    lines.push((&raw[start..], ""));

    lines
}

/// Page in effect at each line, after applying a marker on that line
fn pages_by_line(lines: &[(&str, &str)]) -> Vec<Option<u32>> {
    let mut current = None;
    lines
        .iter()
        .map(|(content, _)| {
            if let Some(page) = page_marker(content) {
                current = Some(page);
            }
            current
        })
        .collect()
}

/// Pending-run state for the single pass
struct Segmenter<'p> {
    pages: &'p [Option<u32>],
    blocks: Vec<LocatedBlock>,
    prose: String,
    prose_start: Option<usize>,
    rows: Vec<Vec<String>>,
    rows_start: usize,
}

impl<'p> Segmenter<'p> {
    fn new(pages: &'p [Option<u32>]) -> Self {
        Self {
            pages,
            blocks: Vec::new(),
            prose: String::new(),
            prose_start: None,
            rows: Vec::new(),
            rows_start: 0,
        }
    }

    fn push_row(&mut self, index: usize, cells: &[&str]) {
        self.flush_prose(index);
        if self.rows.is_empty() {
            self.rows_start = index;
        }
        self.rows.push(cells.iter().map(|cell| cell.trim().to_string()).collect());
    }

    fn push_prose(&mut self, index: usize, content: &str, terminator: &str) {
        self.flush_rows(index);
        if self.prose_start.is_none() {
            self.prose_start = Some(index);
        }
        self.prose.push_str(content);
        self.prose.push_str(terminator);
    }

    fn finish(mut self, line_count: usize) -> Vec<LocatedBlock> {
        self.flush_rows(line_count);
        self.flush_prose(line_count);
        self.blocks
    }

    fn flush_prose(&mut self, end: usize) {
        let Some(start) = self.prose_start.take() else {
            return;
        };
        let text = self.prose.trim().to_string();
        self.prose.clear();

        if !text.is_empty() {
            self.emit(Block::Paragraph { text }, start..end);
        }
    }

    fn flush_rows(&mut self, end: usize) {
        if self.rows.is_empty() {
            return;
        }
        let start = self.rows_start;
        let mut rows = std::mem::take(&mut self.rows);

        let block = if rows.len() >= 2 {
            Block::Table { rows }
        } else {
            let cells = rows.swap_remove(0);
            Block::Paragraph { text: cells.join(" ").trim().to_string() }
        };
        self.emit(block, start..end);
    }

    fn emit(&mut self, block: Block, lines: Range<usize>) {
        let pages = page_span(&self.pages[lines.clone()]);
        self.blocks.push(LocatedBlock { block, lines, pages });
    }
}

fn page_span(pages: &[Option<u32>]) -> Option<PageSpan> {
    let first = pages.iter().flatten().next().copied()?;
    let last = pages.iter().flatten().last().copied().unwrap_or(first);
    Some(PageSpan { first, last })
}
