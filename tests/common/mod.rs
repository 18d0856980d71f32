/*!
 * Common test utilities for the evidence-align test suite
 */

use std::fs;
use std::path::{Path, PathBuf};
use anyhow::Result;
use tempfile::TempDir;

use evidence_align::alignment::{Excerpt, Segment};

/// Route library logs to the test harness; safe to call from every test
pub fn init_test_logging() {
    let _ = env_logger::builder()
        .is_test(true)
        .filter_level(log::LevelFilter::Debug)
        .try_init();
}

/// Creates a temporary directory for test files
pub fn create_temp_dir() -> Result<TempDir> {
    Ok(TempDir::new()?)
}

/// Creates a test file with the given content in the specified directory
pub fn create_test_file(dir: &Path, filename: &str, content: &str) -> Result<PathBuf> {
    let file_path = dir.join(filename);
    fs::write(&file_path, content)?;
    Ok(file_path)
}

/// Extracted text of a short earnings note, as written by the ingestion pipeline
pub fn sample_document() -> &'static str {
    "[Page 1]\n\
Management raised full-year guidance for FY25,\n\
citing strong demand across cloud and data-center segments.\n\
Excluding non-recurring items, operating margin expanded 120bps.\n\
\n\
[Page 2]\n\
Segment        Q1 FY25    Q2 FY25\n\
Cloud          4.1        4.6\n\
Data center    2.3        2.9\n\
\n\
Capex is expected to remain elevated through the second half."
}

/// Excerpts attributed to `sample_document`
pub fn sample_excerpts() -> Vec<Excerpt> {
    vec![
        Excerpt::new("raised full-year guidance for FY25, citing strong demand").with_page(1),
        Excerpt::new("nonrecurring items").with_page(1),
        Excerpt::new("4.6").with_page(2),
        Excerpt::new("Capex is expected to remain elevated").with_page(2),
        Excerpt::new("dividend was suspended").with_page(3),
        Excerpt::new("   "),
    ]
}

/// Concatenate segment texts in order
pub fn joined(segments: &[Segment]) -> String {
    segments.iter().map(|s| s.text.as_str()).collect()
}
