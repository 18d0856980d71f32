/*!
 * Tests for the load, align and write workflow
 */

use anyhow::Result;
use serde_json::Value;

use evidence_align::alignment::AlignmentRequest;
use evidence_align::app_config::Config;
use evidence_align::file_utils::FileManager;

use crate::common::{create_temp_dir, create_test_file, sample_document};

const EXCERPTS_JSON: &str = r#"{
    "excerpts": [
        {"quote": "raised full-year guidance for FY25, citing strong demand", "page": 1, "documentId": 7},
        {"quote": "4.6", "page": 2},
        {"quote": "not in the document", "page": 9}
    ]
}"#;

#[test]
fn test_workflow_alignFromFiles_shouldWriteJsonDocument() -> Result<()> {
    let dir = create_temp_dir()?;
    let text_path = create_test_file(dir.path(), "report.txt", sample_document())?;
    let excerpts_path = create_test_file(dir.path(), "excerpts.json", EXCERPTS_JSON)?;
    let output_path = dir.path().join("out").join("aligned.json");

    let config = Config::default();
    let raw_text = FileManager::read_text(&text_path)?;
    let excerpts = FileManager::load_excerpts(&excerpts_path)?;
    let document = config
        .build_aligner()
        .align(&AlignmentRequest::new(raw_text, excerpts).with_focus(true));

    let json = FileManager::to_json(&document, config.output.pretty)?;
    FileManager::write_to_file(&output_path, &json)?;

    let written: Value = serde_json::from_str(&std::fs::read_to_string(&output_path)?)?;
    assert_eq!(written["blocks"].as_array().map(Vec::len), Some(3));
    assert_eq!(written["blocks"][0]["type"], "paragraph");
    assert_eq!(written["blocks"][1]["type"], "table");
    assert_eq!(written["focus"]["block"], 0);
    assert_eq!(written["coverage"]["total"], 3);
    assert_eq!(written["coverage"]["located"], 2);
    Ok(())
}

#[test]
fn test_workflow_configFromFile_shouldDriveAligner() -> Result<()> {
    let dir = create_temp_dir()?;
    let config_path = create_test_file(
        dir.path(),
        "conf.json",
        r#"{"cache": {"enabled": false}, "output": {"pretty": false}}"#,
    )?;

    let config = Config::load_or_default(&config_path)?;
    config.validate()?;
    let aligner = config.build_aligner();
    assert!(aligner.cache().is_none());

    let document = aligner.align(&AlignmentRequest::new("alpha beta", Vec::new()));
    let json = FileManager::to_json(&document, config.output.pretty)?;
    assert!(!json.contains('\n'));
    Ok(())
}

#[test]
fn test_workflow_requestJson_shouldDeserializeCamelCase() -> Result<()> {
    let request: AlignmentRequest = serde_json::from_str(
        r#"{"rawText": "Capex rose.", "excerpts": [{"quote": "capex"}], "scrollToFirstHighlight": true}"#,
    )?;

    let document = Config::default().build_aligner().align(&request);
    assert!(document.focus.is_some());
    Ok(())
}
