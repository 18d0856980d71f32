use anyhow::{Context, Result};
use log::warn;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::alignment::Excerpt;
use crate::errors::InputError;

// @module: File and directory utilities

/// Excerpt files come either as a bare list or wrapped like the excerpts endpoint
#[derive(Deserialize)]
#[serde(untagged)]
enum ExcerptsFile {
    List(Vec<Excerpt>),
    Wrapped { excerpts: Vec<Excerpt> },
}

// @struct: File operations utility
pub struct FileManager;

impl FileManager {
    // @checks: File existence
    pub fn file_exists<P: AsRef<Path>>(path: P) -> bool {
        path.as_ref().exists() && path.as_ref().is_file()
    }

    // @creates: Directory and parents if needed
    pub fn ensure_dir<P: AsRef<Path>>(path: P) -> Result<()> {
        let path = path.as_ref();
        if !path.as_os_str().is_empty() && !path.exists() {
            fs::create_dir_all(path)?;
        }
        Ok(())
    }

    /// Read extracted document text, replacing invalid UTF-8 sequences
    pub fn read_text<P: AsRef<Path>>(path: P) -> Result<String> {
        let path = path.as_ref();
        let bytes = fs::read(path)
            .map_err(|e| InputError::TextUnreadable(format!("{}: {}", path.display(), e)))?;

        match String::from_utf8(bytes) {
            Ok(text) => Ok(text),
            Err(e) => {
                warn!("Document text {:?} is not valid UTF-8, replacing invalid bytes", path);
                Ok(String::from_utf8_lossy(e.as_bytes()).into_owned())
            }
        }
    }

    /// Parse excerpts from JSON: a list of excerpts or `{"excerpts": [...]}`
    pub fn parse_excerpts(content: &str) -> Result<Vec<Excerpt>, InputError> {
        let parsed: ExcerptsFile = serde_json::from_str(content)
            .map_err(|e| InputError::MalformedExcerpts(e.to_string()))?;

        Ok(match parsed {
            ExcerptsFile::List(excerpts) => excerpts,
            ExcerptsFile::Wrapped { excerpts } => excerpts,
        })
    }

    /// Load excerpts from a JSON file
    pub fn load_excerpts<P: AsRef<Path>>(path: P) -> Result<Vec<Excerpt>> {
        let content = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read excerpts file: {:?}", path.as_ref()))?;
        let excerpts = Self::parse_excerpts(&content)
            .with_context(|| format!("Failed to load excerpts from {:?}", path.as_ref()))?;
        Ok(excerpts)
    }

    /// Serialize `value` as JSON
    pub fn to_json<T: Serialize>(value: &T, pretty: bool) -> Result<String> {
        let json = if pretty {
            serde_json::to_string_pretty(value)
        } else {
            serde_json::to_string(value)
        };
        json.context("Failed to serialize output to JSON")
    }

    /// Write a string to a file
    pub fn write_to_file<P: AsRef<Path>>(path: P, content: &str) -> Result<()> {
        // Ensure the parent directory exists
        if let Some(parent) = path.as_ref().parent() {
            Self::ensure_dir(parent)?;
        }

        fs::write(&path, content)
            .with_context(|| format!("Failed to write to file: {:?}", path.as_ref()))?;

        Ok(())
    }
}
