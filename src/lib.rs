//! kitap: book structure inference and section splitting
//!
//! This library takes the page-indexed text of a book (extracted upstream
//! from PDF/DOCX/EPUB) and infers its chapter/section structure with a
//! rule-based heading classifier, producing an ordered list of sections
//! that covers every page. When heuristics or an external suggestion fail
//! quality checks, an even-partition planner guarantees a usable result.

pub mod analysis;
pub mod document;
pub mod error;

// Re-export commonly used types
pub use analysis::oracle::{NoOracle, RawSection, RawStructure, StructureOracle};
pub use analysis::profile::LanguageProfile;
pub use analysis::{AnalysisMode, Analyzer};
pub use document::{AnalysisMethod, Document, Page, Section, Structure};
pub use error::AnalysisError;
