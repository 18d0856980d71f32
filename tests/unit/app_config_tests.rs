/*!
 * Tests for application configuration
 */

use anyhow::Result;

use evidence_align::alignment::PunctuationMode;
use evidence_align::app_config::{Config, LogLevel};

use crate::common::{create_temp_dir, create_test_file};

#[test]
fn test_loadOrDefault_missingFile_shouldReturnDefaults() -> Result<()> {
    let dir = create_temp_dir()?;
    let config = Config::load_or_default(dir.path().join("absent.json"))?;

    assert_eq!(config, Config::default());
    // A missing file is not created
    assert!(!dir.path().join("absent.json").exists());
    Ok(())
}

#[test]
fn test_loadOrDefault_fullFile_shouldReadEverySection() -> Result<()> {
    let dir = create_temp_dir()?;
    let path = create_test_file(
        dir.path(),
        "conf.json",
        r#"{
            "matching": {"punctuation": "space"},
            "cache": {"enabled": false, "max_entries": 10},
            "output": {"pretty": false},
            "log_level": "debug"
        }"#,
    )?;

    let config = Config::load_or_default(&path)?;
    assert_eq!(config.matching.punctuation, PunctuationMode::Space);
    assert!(!config.cache.enabled);
    assert_eq!(config.cache.max_entries, 10);
    assert!(!config.output.pretty);
    assert_eq!(config.log_level, LogLevel::Debug);
    assert_eq!(config.log_level.to_level_filter(), log::LevelFilter::Debug);
    Ok(())
}

#[test]
fn test_loadOrDefault_invalidJson_shouldFail() -> Result<()> {
    let dir = create_temp_dir()?;
    let path = create_test_file(dir.path(), "conf.json", "{ not json")?;

    let result = Config::load_or_default(&path);
    assert!(result.is_err());
    Ok(())
}

#[test]
fn test_loadOrDefault_unknownPunctuationMode_shouldFail() -> Result<()> {
    let dir = create_temp_dir()?;
    let path = create_test_file(dir.path(), "conf.json", r#"{"matching": {"punctuation": "keep"}}"#)?;

    assert!(Config::load_or_default(&path).is_err());
    Ok(())
}

#[test]
fn test_validate_defaults_shouldPass() {
    assert!(Config::default().validate().is_ok());
}

#[test]
fn test_buildAligner_spaceMode_shouldCarryIntoMatcher() {
    let mut config = Config::default();
    config.matching.punctuation = PunctuationMode::Space;

    let aligner = config.build_aligner();
    assert_eq!(aligner.matcher().punctuation(), PunctuationMode::Space);
}
