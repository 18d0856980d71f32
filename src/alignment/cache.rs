/*!
 * Memoization of per-unit alignment results.
 *
 * Re-rendering the same document with the same excerpt set repeats identical
 * matching work for every paragraph and cell. This cache sits outside the
 * matching algorithm and returns exactly what `align_unit` would have
 * produced.
 */

use std::collections::HashMap;
use std::sync::Arc;

use log::debug;
use parking_lot::RwLock;
use sha2::{Digest, Sha256};

use super::matcher::PreparedQuote;
use super::normalizer::PunctuationMode;
use super::segments::{align_unit, UnitAlignment};

/// Cache key: unit text, excerpt set and punctuation handling
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct CacheKey {
    /// SHA-256 of the unit text
    unit_hash: String,

    /// Fingerprint of the ordered quote set
    excerpt_set: String,

    /// Punctuation mode of the approximate pass
    punctuation: PunctuationMode,
}

/// Shared cache of `UnitAlignment` results
pub struct SegmentCache {
    /// Internal cache storage
    cache: Arc<RwLock<HashMap<CacheKey, UnitAlignment>>>,

    /// Cache hit counter
    hits: Arc<RwLock<usize>>,

    /// Cache miss counter
    misses: Arc<RwLock<usize>>,

    /// Entries kept before the cache is reset
    max_entries: usize,

    /// Whether caching is enabled
    enabled: bool,
}

impl SegmentCache {
    /// Create a new cache holding at most `max_entries` units
    pub fn new(enabled: bool, max_entries: usize) -> Self {
        Self {
            cache: Arc::new(RwLock::new(HashMap::new())),
            hits: Arc::new(RwLock::new(0)),
            misses: Arc::new(RwLock::new(0)),
            max_entries: max_entries.max(1),
            enabled,
        }
    }

    /// Return the cached alignment of `unit_text`, computing and storing it on a miss
    pub fn get_or_align(
        &self,
        unit_text: &str,
        quotes: &[PreparedQuote],
        excerpt_set: &str,
        punctuation: PunctuationMode,
    ) -> UnitAlignment {
        if !self.enabled {
            return align_unit(unit_text, quotes);
        }

        let key = CacheKey {
            unit_hash: hash_text(unit_text),
            excerpt_set: excerpt_set.to_string(),
            punctuation,
        };

        if let Some(found) = self.cache.read().get(&key) {
            *self.hits.write() += 1;
            return found.clone();
        }

        *self.misses.write() += 1;
        let alignment = align_unit(unit_text, quotes);

        let mut cache = self.cache.write();
        if cache.len() >= self.max_entries {
            debug!("Segment cache full ({} entries), clearing", cache.len());
            cache.clear();
        }
        cache.insert(key, alignment.clone());

        alignment
    }

    /// Get cache statistics: hits, misses and hit rate
    pub fn stats(&self) -> (usize, usize, f64) {
        let hits = *self.hits.read();
        let misses = *self.misses.read();
        let total = hits + misses;

        let hit_rate = if total > 0 {
            hits as f64 / total as f64
        } else {
            0.0
        };

        (hits, misses, hit_rate)
    }

    /// Clear the cache
    pub fn clear(&self) {
        self.cache.write().clear();
        *self.hits.write() = 0;
        *self.misses.write() = 0;

        debug!("Segment cache cleared");
    }

    /// Get the number of entries in the cache
    pub fn len(&self) -> usize {
        self.cache.read().len()
    }

    /// Check if the cache is empty
    pub fn is_empty(&self) -> bool {
        self.cache.read().is_empty()
    }

    /// Enable or disable the cache
    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    /// Check if the cache is enabled
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }
}

impl Default for SegmentCache {
    fn default() -> Self {
        Self::new(true, 4096)
    }
}

impl Clone for SegmentCache {
    fn clone(&self) -> Self {
        Self {
            cache: self.cache.clone(),
            hits: self.hits.clone(),
            misses: self.misses.clone(),
            max_entries: self.max_entries,
            enabled: self.enabled,
        }
    }
}

/// Compute SHA256 hash of text
pub fn hash_text(text: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(text.as_bytes());
    format!("{:x}", hasher.finalize())
}

/// Identity of an ordered quote set
pub fn excerpt_set_fingerprint(quotes: &[PreparedQuote]) -> String {
    let mut hasher = Sha256::new();
    for quote in quotes {
        hasher.update((quote.quote().len() as u64).to_le_bytes());
        hasher.update(quote.quote().as_bytes());
    }
    format!("{:x}", hasher.finalize())
}
