/*!
 * Which excerpts were located in a document, and how.
 */

use serde::{Deserialize, Serialize};

use super::excerpt::Excerpt;
use super::matcher::MatchPass;

/// Location result for a single excerpt across all units of a document
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExcerptCoverage {
    pub quote: String,
    pub page: Option<u32>,
    /// Strongest pass that located the quote in any unit
    pub pass: Option<MatchPass>,
    /// Number of paragraphs and cells the quote was found in
    pub units: usize,
}

impl ExcerptCoverage {
    /// Whether the quote was found anywhere
    pub fn is_located(&self) -> bool {
        self.pass.is_some()
    }
}

/// Per-excerpt location summary for one alignment run
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CoverageReport {
    pub total: usize,
    pub located: usize,
    pub entries: Vec<ExcerptCoverage>,
}

impl CoverageReport {
    /// Start a report for the given prepared excerpts
    pub fn new(excerpts: &[Excerpt]) -> Self {
        let entries = excerpts
            .iter()
            .map(|excerpt| ExcerptCoverage {
                quote: excerpt.quote.clone(),
                page: excerpt.page,
                pass: None,
                units: 0,
            })
            .collect::<Vec<_>>();

        Self {
            total: entries.len(),
            located: 0,
            entries,
        }
    }

    /// Record the per-quote passes of one unit, in excerpt order
    pub fn record(&mut self, passes: &[Option<MatchPass>]) {
        for (entry, pass) in self.entries.iter_mut().zip(passes) {
            let Some(pass) = pass else {
                continue;
            };
            entry.units += 1;
            entry.pass = Some(match entry.pass {
                Some(MatchPass::Exact) => MatchPass::Exact,
                _ => *pass,
            });
        }
        self.located = self.entries.iter().filter(|e| e.is_located()).count();
    }

    /// Excerpts that were not found in any unit
    pub fn missing(&self) -> impl Iterator<Item = &ExcerptCoverage> {
        self.entries.iter().filter(|e| !e.is_located())
    }

    /// Whether every excerpt was located
    pub fn is_complete(&self) -> bool {
        self.located == self.total
    }
}
