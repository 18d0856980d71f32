/*!
 * Tests for file utilities
 */

use anyhow::Result;

use evidence_align::alignment::Excerpt;
use evidence_align::errors::InputError;
use evidence_align::file_utils::FileManager;

use crate::common::{create_temp_dir, create_test_file};

#[test]
fn test_parseExcerpts_bareList_shouldReadFields() -> Result<()> {
    let excerpts = FileManager::parse_excerpts(
        r#"[{"quote": "margin expanded", "page": 4, "documentId": 17}, {"quote": "no page"}]"#,
    )?;

    assert_eq!(
        excerpts,
        vec![
            Excerpt::new("margin expanded").with_page(4).with_document_id(17),
            Excerpt::new("no page"),
        ]
    );
    Ok(())
}

#[test]
fn test_parseExcerpts_wrappedObject_shouldUnwrap() -> Result<()> {
    let excerpts = FileManager::parse_excerpts(r#"{"excerpts": [{"quote": "capex"}]}"#)?;
    assert_eq!(excerpts, vec![Excerpt::new("capex")]);
    Ok(())
}

#[test]
fn test_parseExcerpts_malformed_shouldReturnInputError() {
    let result = FileManager::parse_excerpts(r#"{"quotes": 3}"#);
    assert!(matches!(result, Err(InputError::MalformedExcerpts(_))));
}

#[test]
fn test_readText_invalidUtf8_shouldReplaceBytes() -> Result<()> {
    let dir = create_temp_dir()?;
    let path = dir.path().join("doc.txt");
    std::fs::write(&path, b"ok \xFF end")?;

    let text = FileManager::read_text(&path)?;
    assert_eq!(text, "ok \u{FFFD} end");
    Ok(())
}

#[test]
fn test_readText_missingFile_shouldFail() -> Result<()> {
    let dir = create_temp_dir()?;
    assert!(FileManager::read_text(dir.path().join("missing.txt")).is_err());
    Ok(())
}

#[test]
fn test_writeToFile_nestedPath_shouldCreateParents() -> Result<()> {
    let dir = create_temp_dir()?;
    let path = dir.path().join("out").join("nested").join("result.json");

    FileManager::write_to_file(&path, "{}")?;
    assert!(FileManager::file_exists(&path));
    assert_eq!(std::fs::read_to_string(&path)?, "{}");
    Ok(())
}

#[test]
fn test_loadExcerpts_file_shouldParse() -> Result<()> {
    let dir = create_temp_dir()?;
    let path = create_test_file(dir.path(), "excerpts.json", r#"[{"quote": "a"}]"#)?;

    assert_eq!(FileManager::load_excerpts(&path)?, vec![Excerpt::new("a")]);
    Ok(())
}

#[test]
fn test_toJson_compact_shouldHaveNoNewlines() -> Result<()> {
    let json = FileManager::to_json(&vec![Excerpt::new("a")], false)?;
    assert!(!json.contains('\n'));
    assert!(FileManager::to_json(&vec![Excerpt::new("a")], true)?.contains('\n'));
    Ok(())
}
