/*!
 * # evidence-align
 *
 * A Rust library for locating evidence quotes inside extracted document text.
 *
 * ## Features
 *
 * - Split extracted text into prose paragraphs and tables
 * - Locate verbatim evidence quotes despite whitespace reflow, case and
 *   punctuation differences introduced by extraction
 * - Slice every paragraph and table cell into plain and highlighted runs
 * - Find the first highlight for scroll/focus behavior
 * - Report which excerpts could not be located
 * - Optional memoization of per-unit results across re-renders
 *
 * ## Architecture
 *
 * The library is organized in these main modules:
 * - `alignment`: The pure alignment engine:
 *   - `alignment::normalizer`: Index-preserving text normalization
 *   - `alignment::matcher`: Two-tier quote matching
 *   - `alignment::ranges`: Highlight range merging
 *   - `alignment::blocks`: Paragraph/table segmentation
 *   - `alignment::segments`: Highlight slicing per unit
 *   - `alignment::document`: Whole-document orchestration
 * - `app_config`: Configuration management
 * - `file_utils`: Loading document text and excerpts, writing results
 * - `errors`: Custom error types for the application
 *
 * ## License
 *
 * This project is licensed under the MIT License
 */

// Global lints configuration
// These lints will be allowed but not auto-fixed
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::redundant_closure_for_method_calls)]

// Public modules
pub mod alignment;
pub mod app_config;
pub mod errors;
pub mod file_utils;

// Re-export main types for easier usage
pub use alignment::{
    AlignedBlock, AlignedDocument, AlignmentRequest, Block, DocumentAligner, Excerpt,
    HighlightLocator, HighlightRange, Segment,
};
pub use app_config::Config;
pub use errors::{AppError, ConfigError, InputError};
