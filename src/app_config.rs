use anyhow::{Context, Result};
use log::warn;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use crate::alignment::{DocumentAligner, PunctuationMode, SegmentCache};
use crate::errors::ConfigError;

/// Application configuration module
/// This module handles the application configuration including loading,
/// validating and building an aligner from the settings.
/// Represents the application configuration
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
pub struct Config {
    /// Quote matching settings
    #[serde(default)]
    pub matching: MatchingConfig,

    /// Per-unit result cache settings
    #[serde(default)]
    pub cache: CacheConfig,

    /// Output settings
    #[serde(default)]
    pub output: OutputConfig,

    /// Log level
    #[serde(default)]
    pub log_level: LogLevel,
}

/// Quote matching settings
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
pub struct MatchingConfig {
    /// How the approximate pass treats punctuation: "drop" (default) or "space"
    #[serde(default)]
    pub punctuation: PunctuationMode,
}

/// Cache configuration
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct CacheConfig {
    /// Whether per-unit results are memoized
    #[serde(default = "default_true")]
    pub enabled: bool,

    /// Entries kept before the cache is reset
    #[serde(default = "default_cache_max_entries")]
    pub max_entries: usize,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            max_entries: default_cache_max_entries(),
        }
    }
}

/// Output configuration
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct OutputConfig {
    /// Pretty-print JSON output
    #[serde(default = "default_true")]
    pub pretty: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self { pretty: true }
    }
}

/// Log verbosity level
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    // @returns: Matching log crate filter
    pub fn to_level_filter(&self) -> log::LevelFilter {
        match self {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_cache_max_entries() -> usize {
    4096
}

impl Config {
    /// Load configuration from a JSON file, falling back to defaults when it does not exist
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            warn!("Config file not found at '{}', using defaults.", path.display());
            return Ok(Self::default());
        }

        let file = File::open(path)
            .context(format!("Failed to open config file: {}", path.display()))?;
        let reader = BufReader::new(file);
        let config: Config = serde_json::from_reader(reader)
            .map_err(|e| ConfigError::ParseError(e.to_string()))
            .context(format!("Failed to parse config file: {}", path.display()))?;

        Ok(config)
    }

    /// Validate the configuration for consistency and required values
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.cache.enabled && self.cache.max_entries == 0 {
            return Err(ConfigError::InvalidValue {
                field: "cache.max_entries".to_string(),
                message: "must be greater than zero when the cache is enabled".to_string(),
            });
        }

        Ok(())
    }

    /// Build a document aligner from these settings
    pub fn build_aligner(&self) -> DocumentAligner {
        let aligner = DocumentAligner::new(self.matching.punctuation);
        if self.cache.enabled {
            aligner.with_cache(SegmentCache::new(true, self.cache.max_entries))
        } else {
            aligner
        }
    }
}
