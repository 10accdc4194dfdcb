//! Read-only document queries
//!
//! Page and section text extraction used by rendering callers, plus a short
//! preview helper for structure review UIs.

use super::models::*;

/// Concatenated text of all pages covered by `section`, in page order,
/// joined by a blank line. This is the contract the rendering service
/// consumes a `Section` through.
pub fn section_text(document: &Document, section: &Section) -> String {
    let parts: Vec<&str> = document
        .pages
        .iter()
        .filter(|page| section.start_page <= page.page_number && page.page_number <= section.end_page)
        .map(|page| page.text.as_str())
        .collect();

    parts.join("\n\n")
}

pub fn page_text(document: &Document, page_number: usize) -> Option<&str> {
    document
        .pages
        .iter()
        .find(|page| page.page_number == page_number)
        .map(|page| page.text.as_str())
}

/// Character-bounded prefix of a section's text, with an ellipsis when
/// truncated.
pub fn section_preview(document: &Document, section: &Section, max_chars: usize) -> String {
    let text = section_text(document, section);

    match text.char_indices().nth(max_chars) {
        Some((byte_index, _)) => format!("{}...", &text[..byte_index]),
        None => text,
    }
}
