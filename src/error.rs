//! Error taxonomy for structure analysis
//!
//! Heuristic failures (weak heading detection, degenerate oracle output) are
//! recovered internally and never surface here; these variants cover the
//! unrecoverable input problems only.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum AnalysisError {
    /// The document has zero pages; no section list is valid for it.
    #[error("document has no pages")]
    EmptyDocument,

    /// The page list violates the input contract (sorted, unique, 1-indexed,
    /// contiguous up to `total_pages`).
    #[error("invalid page numbering: {0}")]
    InvalidPageNumbering(String),

    /// A custom split request contained no usable section ranges. Unlike
    /// heuristic noise this is explicit user intent, so it is surfaced
    /// instead of silently falling back to the planner.
    #[error("no valid sections in the requested custom split")]
    NoValidSections,
}
