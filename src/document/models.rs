//! Core data structures for document representation
//!
//! This module defines the public types shared between the analysis engine
//! and its collaborators: the page-indexed `Document` produced by the
//! upstream text extractor, and the `Structure` of sections the engine
//! produces for the downstream renderer.

use serde::{Deserialize, Serialize};

/// A book as delivered by the text-extraction service: cleaned page text,
/// 1-indexed and contiguous up to `total_pages`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Document {
    pub title: String,
    pub author: String,
    pub total_pages: usize,
    pub pages: Vec<Page>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Page {
    pub page_number: usize,
    /// Page text with control characters already stripped; internal newlines
    /// separate the extracted lines.
    pub text: String,
}

/// A contiguous, page-bounded slice of the document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    pub name: String,
    /// Free-form classification tag ("introduction", "numbered_section",
    /// "page_based", ...).
    #[serde(rename = "type")]
    pub section_type: String,
    pub start_page: usize,
    pub end_page: usize,
    pub level: u8,
}

impl Section {
    pub fn page_count(&self) -> usize {
        self.end_page - self.start_page + 1
    }
}

/// The complete ordered section list for a document, persisted verbatim and
/// later consumed by the rendering service.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Structure {
    pub title: String,
    pub author: String,
    pub total_pages: usize,
    pub sections: Vec<Section>,
    pub analysis_method: AnalysisMethod,
}

/// How a structure was derived. Serialized as snake_case strings for
/// compatibility with the stored `*_structure.json` artifacts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnalysisMethod {
    ByHeadings,
    ByMeaning,
    AiAnalysis,
    ByHeadingsImproved,
    Custom,
    PageBased,
}

/// A single line provisionally identified as a structural marker during
/// scanning. Candidates are transient: they exist only between the scanner
/// and the boundary resolver, ordered by discovery (page, then line).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeadingCandidate {
    pub text: String,
    pub page_number: usize,
    pub heading_type: HeadingType,
    pub level: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeadingType {
    Introduction,
    Conclusion,
    NumberedSection,
    RomanSection,
    RegularSection,
    /// Produced only by the relaxed re-scan after the strict pass failed the
    /// quality gate.
    PotentialHeading,
}

impl HeadingType {
    pub fn as_str(&self) -> &'static str {
        match self {
            HeadingType::Introduction => "introduction",
            HeadingType::Conclusion => "conclusion",
            HeadingType::NumberedSection => "numbered_section",
            HeadingType::RomanSection => "roman_section",
            HeadingType::RegularSection => "regular_section",
            HeadingType::PotentialHeading => "potential_heading",
        }
    }
}
