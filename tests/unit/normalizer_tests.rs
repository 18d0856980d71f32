/*!
 * Tests for index-preserving normalization
 */

use evidence_align::alignment::{normalize, normalize_with, PunctuationMode};

#[test]
fn test_normalize_indexMap_shouldPointAtOriginalChars() {
    let text = "Q3: EBITDA, up 12%";
    let form = normalize(text);

    assert_eq!(form.normalized, "q3 ebitda up 12");
    assert_eq!(form.index_map.len(), form.normalized.len());
    for (i, &offset) in form.index_map.iter().enumerate() {
        let original = text[offset..].chars().next().unwrap();
        let normalized = form.normalized.as_bytes()[i] as char;
        if normalized == ' ' {
            assert!(original.is_whitespace());
        } else {
            assert_eq!(original.to_ascii_lowercase(), normalized);
        }
    }
}

#[test]
fn test_normalize_punctuationBetweenTokens_shouldMergeThem() {
    // Dropping punctuation without a placeholder joins the surrounding tokens
    assert_eq!(normalize("year-over-year").normalized, "yearoveryear");
    assert_eq!(normalize("U.S.").normalized, "us");
}

#[test]
fn test_normalizeWith_spaceMode_shouldKeepTokensApart() {
    assert_eq!(
        normalize_with("year-over-year", PunctuationMode::Space).normalized,
        "year over year"
    );
}

#[test]
fn test_originalRange_roundTrip_shouldSliceMatchedText() {
    let text = "Net  income (GAAP) rose";
    let form = normalize(text);
    let start = form.normalized.find("income gaap").unwrap();
    let (a, b) = form.original_range(text, start, start + "income gaap".len()).unwrap();
    assert_eq!(&text[a..b], "income (GAAP");
}
