//! Persistence and input validation
//!
//! Documents arrive as JSON artifacts written by the text-extraction
//! service; structures are persisted the same way for the rendering service.
//! Validation enforces the input contract before any analysis runs.

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

use super::models::{Document, Structure};
use crate::error::AnalysisError;

/// Checks the page-list contract: pages sorted by number, unique, 1-indexed,
/// contiguous, and matching `total_pages`.
pub fn validate_document(document: &Document) -> Result<(), AnalysisError> {
    if document.total_pages == 0 || document.pages.is_empty() {
        return Err(AnalysisError::EmptyDocument);
    }

    if document.pages.len() != document.total_pages {
        return Err(AnalysisError::InvalidPageNumbering(format!(
            "{} pages present but total_pages is {}",
            document.pages.len(),
            document.total_pages
        )));
    }

    for (index, page) in document.pages.iter().enumerate() {
        if page.page_number != index + 1 {
            return Err(AnalysisError::InvalidPageNumbering(format!(
                "expected page {} at position {}, found page {}",
                index + 1,
                index,
                page.page_number
            )));
        }
    }

    Ok(())
}

pub fn load_document(path: &Path) -> Result<Document> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("failed to read document from {}", path.display()))?;
    let document: Document = serde_json::from_str(&content)
        .with_context(|| format!("failed to parse document JSON from {}", path.display()))?;
    validate_document(&document)?;
    Ok(document)
}

pub fn save_structure(structure: &Structure, path: &Path) -> Result<()> {
    let content = serde_json::to_string_pretty(structure)?;
    fs::write(path, content)
        .with_context(|| format!("failed to write structure to {}", path.display()))?;
    Ok(())
}

pub fn load_structure(path: &Path) -> Result<Structure> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("failed to read structure from {}", path.display()))?;
    let structure = serde_json::from_str(&content)
        .with_context(|| format!("failed to parse structure JSON from {}", path.display()))?;
    Ok(structure)
}
