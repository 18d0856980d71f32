/*!
 * Tests for paragraph/table segmentation
 */

use evidence_align::alignment::{
    is_table_row, page_marker, segment_blocks, segment_located_blocks, split_cells, Block, PageSpan,
};

fn paragraph(text: &str) -> Block {
    Block::Paragraph { text: text.to_string() }
}

/// Scenario: prose, a two-row table, then prose
#[test]
fn test_segmentBlocks_proseTableProse_shouldProduceThreeBlocks() {
    let raw = "Intro line.\nA    B    C\n1    2    3\nOutro.";
    let blocks = segment_blocks(raw);

    assert_eq!(
        blocks,
        vec![
            paragraph("Intro line."),
            Block::Table {
                rows: vec![
                    vec!["A".to_string(), "B".to_string(), "C".to_string()],
                    vec!["1".to_string(), "2".to_string(), "3".to_string()],
                ],
            },
            paragraph("Outro."),
        ]
    );
}

/// Scenario: a single tabular-looking line is not a table
#[test]
fn test_segmentBlocks_loneCandidateRow_shouldBecomeParagraph() {
    let blocks = segment_blocks("Name    Value");
    assert_eq!(blocks, vec![paragraph("Name Value")]);
}

#[test]
fn test_segmentBlocks_emptyInput_shouldProduceNoBlocks() {
    assert!(segment_blocks("").is_empty());
    assert!(segment_blocks("\n\n  \n").is_empty());
}

#[test]
fn test_segmentBlocks_tabSeparatedRows_shouldFormRaggedTable() {
    let blocks = segment_blocks("a\tb\tc\nd\te");
    assert_eq!(
        blocks,
        vec![Block::Table {
            rows: vec![
                vec!["a".to_string(), "b".to_string(), "c".to_string()],
                vec!["d".to_string(), "e".to_string()],
            ],
        }]
    );
}

#[test]
fn test_segmentBlocks_blankLinesInsideProse_shouldStayInOneParagraph() {
    let blocks = segment_blocks("first\n\nsecond");
    assert_eq!(blocks, vec![paragraph("first\n\nsecond")]);
}

#[test]
fn test_segmentBlocks_twoTablesSplitByProse_shouldStaySeparate() {
    let blocks = segment_blocks("a  b\nc  d\nbreak\ne  f\ng  h");
    assert_eq!(blocks.len(), 3);
    assert!(blocks[0].is_table());
    assert!(!blocks[1].is_table());
    assert!(blocks[2].is_table());
}

#[test]
fn test_plainText_table_shouldJoinCellsAndRows() {
    let blocks = segment_blocks("a  b\nc  d");
    assert_eq!(blocks[0].plain_text(), "a  b\nc  d");
}

#[test]
fn test_splitCells_mixedSeparators_shouldSplitOnEach() {
    assert_eq!(split_cells("x\ty   z w"), vec!["x", "y", "z w"]);
    assert!(is_table_row(&split_cells("x  y")));
    assert!(!is_table_row(&split_cells("x y")));
    assert!(!is_table_row(&split_cells("    ")));
}

#[test]
fn test_pageMarker_variants_shouldParseNumberOnly() {
    assert_eq!(page_marker("[Page 12]"), Some(12));
    assert_eq!(page_marker("  [Page 3]  "), Some(3));
    assert_eq!(page_marker("see [Page 3]"), None);
    assert_eq!(page_marker("[Page x]"), None);
}

#[test]
fn test_segmentLocatedBlocks_pageMarkers_shouldReportSpans() {
    let raw = "[Page 1]\nOpening remarks.\n[Page 2]\nA  B\nC  D\n\nClosing.";
    let located = segment_located_blocks(raw);

    assert_eq!(located.len(), 3);
    assert_eq!(located[0].lines, 0..3);
    assert_eq!(located[0].pages, Some(PageSpan { first: 1, last: 2 }));
    assert_eq!(located[1].lines, 3..5);
    assert_eq!(located[1].pages, Some(PageSpan { first: 2, last: 2 }));
    assert_eq!(located[2].pages, Some(PageSpan { first: 2, last: 2 }));
}

#[test]
fn test_segmentLocatedBlocks_noMarkers_shouldLeavePagesEmpty() {
    let located = segment_located_blocks("just text");
    assert_eq!(located.len(), 1);
    assert_eq!(located[0].pages, None);
}
