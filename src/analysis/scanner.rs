//! Page scanning
//!
//! Walks the page-ordered text of a document, classifies every line, and
//! collects heading candidates in discovery order. Repeated heading-like
//! lines on multiple pages intentionally produce multiple candidates; the
//! boundary resolver deals with the consequences.

use tracing::debug;

use super::classifier;
use super::profile::LanguageProfile;
use crate::document::models::{Document, HeadingCandidate};

/// Strict scan: the full exclude-then-include classifier on every line.
pub fn scan(document: &Document, profile: &LanguageProfile) -> Vec<HeadingCandidate> {
    let mut candidates = Vec::new();

    for page in &document.pages {
        for line in page.text.lines() {
            let trimmed = line.trim();
            if let Some(heading) = classifier::classify(trimmed, profile) {
                candidates.push(HeadingCandidate {
                    text: trimmed.to_string(),
                    page_number: page.page_number,
                    heading_type: heading.heading_type,
                    level: heading.level,
                });
            }
        }
    }

    debug!(candidates = candidates.len(), "strict heading scan complete");
    candidates
}

/// Relaxed re-scan, used only after the strict pass fails the quality gate.
pub fn scan_relaxed(document: &Document, _profile: &LanguageProfile) -> Vec<HeadingCandidate> {
    let mut candidates = Vec::new();

    for page in &document.pages {
        for line in page.text.lines() {
            if let Some(heading) = classifier::classify_relaxed(line) {
                candidates.push(HeadingCandidate {
                    text: line.trim().to_string(),
                    page_number: page.page_number,
                    heading_type: heading.heading_type,
                    level: heading.level,
                });
            }
        }
    }

    debug!(candidates = candidates.len(), "relaxed heading scan complete");
    candidates
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::models::{HeadingType, Page};

    fn document(pages: &[&str]) -> Document {
        Document {
            title: "Test".to_string(),
            author: String::new(),
            total_pages: pages.len(),
            pages: pages
                .iter()
                .enumerate()
                .map(|(index, text)| Page {
                    page_number: index + 1,
                    text: text.to_string(),
                })
                .collect(),
        }
    }

    #[test]
    fn scan_preserves_discovery_order() {
        let document = document(&[
            "Кіріспе\nбұл кіріспе мәтіні, ұзақ сөйлем",
            "жай мәтін жалғасады",
            "1. Тарау\nтағы мәтін",
        ]);
        let candidates = scan(&document, &LanguageProfile::default());

        assert_eq!(candidates.len(), 2);
        assert_eq!(candidates[0].text, "Кіріспе");
        assert_eq!(candidates[0].page_number, 1);
        assert_eq!(candidates[1].text, "1. Тарау");
        assert_eq!(candidates[1].page_number, 3);
    }

    #[test]
    fn scan_keeps_repeated_headings() {
        // A running header repeated across pages is two candidates, not one.
        let document = document(&["Кіріспе", "Кіріспе"]);
        let candidates = scan(&document, &LanguageProfile::default());
        assert_eq!(candidates.len(), 2);
    }

    #[test]
    fn relaxed_scan_marks_potential_headings() {
        let document = document(&["Соғыс тарихы туралы әңгіме\nжәне оның жалғасы осында, міне"]);
        let profile = LanguageProfile::default();

        assert!(scan(&document, &profile).is_empty());

        let relaxed = scan_relaxed(&document, &profile);
        assert_eq!(relaxed.len(), 1);
        assert_eq!(relaxed[0].heading_type, HeadingType::PotentialHeading);
    }
}
