//! Structure inference engine
//!
//! Orchestrates the pipeline: scan pages for heading candidates, resolve
//! them into page-complete sections, and degrade gracefully through the
//! relaxed re-scan and the even-partition planner when detection quality is
//! too low. The oracle path validates an external suggestion with the same
//! machinery. Every entry point is a pure function of its document (plus,
//! for the oracle path, one suggestion round trip); callers may run analyses
//! concurrently without coordination.

pub mod classifier;
pub mod oracle;
pub mod planner;
pub mod profile;
pub mod resolver;
pub mod scanner;
pub mod validator;

use tracing::{debug, info, warn};

use crate::document::io::validate_document;
use crate::document::models::{AnalysisMethod, Document, Section, Structure};
use crate::error::AnalysisError;
use oracle::{RawSection, StructureOracle};
use profile::LanguageProfile;

/// Fewer heading-derived sections than this means detection failed.
const QUALITY_GATE: usize = 2;

/// How a structure should be derived. `Auto` composes the others: oracle
/// first, then headings, then the even partition.
#[derive(clap::ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum AnalysisMode {
    ByHeadings,
    ByMeaning,
    AiAssisted,
    Auto,
}

pub struct Analyzer {
    profile: LanguageProfile,
}

impl Default for Analyzer {
    fn default() -> Self {
        Analyzer::new()
    }
}

impl Analyzer {
    pub fn new() -> Self {
        Analyzer {
            profile: LanguageProfile::default(),
        }
    }

    pub fn with_profile(profile: LanguageProfile) -> Self {
        Analyzer { profile }
    }

    pub fn profile(&self) -> &LanguageProfile {
        &self.profile
    }

    /// Dispatch on the requested mode. `target_count` feeds the planner
    /// wherever it ends up being used; there is no implicit default count.
    pub async fn analyze<O: StructureOracle>(
        &self,
        document: &Document,
        mode: AnalysisMode,
        target_count: Option<usize>,
        oracle: Option<&O>,
    ) -> Result<Structure, AnalysisError> {
        match mode {
            AnalysisMode::ByHeadings => self.analyze_by_headings(document),
            AnalysisMode::ByMeaning => self.analyze_by_meaning(document, target_count),
            AnalysisMode::AiAssisted => match oracle {
                Some(oracle) => self.analyze_with_oracle(document, oracle).await,
                None => {
                    warn!("ai-assisted mode requested without an oracle, using headings");
                    self.analyze_by_headings(document)
                }
            },
            AnalysisMode::Auto => {
                if let Some(oracle) = oracle {
                    match self.oracle_structure(document, oracle).await {
                        Ok(structure) if structure.sections.len() >= QUALITY_GATE => {
                            return Ok(structure);
                        }
                        Ok(_) => debug!("oracle structure too small for auto mode"),
                        Err(error) => warn!(%error, "oracle suggestion failed"),
                    }
                }
                self.analyze_by_headings(document)
            }
        }
    }

    /// Heading-driven analysis: strict scan, then the relaxed re-scan, then
    /// the planner. The quality gate between stages is `>= 2` sections.
    pub fn analyze_by_headings(&self, document: &Document) -> Result<Structure, AnalysisError> {
        validate_document(document)?;

        let candidates = scanner::scan(document, &self.profile);
        if candidates.len() >= QUALITY_GATE {
            let sections = resolver::resolve(&candidates, document.total_pages);
            return Ok(self.structure(document, sections, AnalysisMethod::ByHeadings));
        }

        debug!(
            found = candidates.len(),
            "strict scan below quality gate, retrying relaxed"
        );
        let candidates = scanner::scan_relaxed(document, &self.profile);
        if candidates.len() >= QUALITY_GATE {
            let sections = resolver::resolve(&candidates, document.total_pages);
            return Ok(self.structure(document, sections, AnalysisMethod::ByHeadingsImproved));
        }

        info!("heading detection failed, falling back to even partition");
        self.analyze_by_meaning(document, None)
    }

    /// Even-partition analysis. `target_count` of `None` derives the count
    /// from the page count.
    pub fn analyze_by_meaning(
        &self,
        document: &Document,
        target_count: Option<usize>,
    ) -> Result<Structure, AnalysisError> {
        validate_document(document)?;

        let count =
            target_count.unwrap_or_else(|| planner::optimal_section_count(document.total_pages));
        let sections = planner::partition(document.total_pages, count, &self.profile);

        Ok(self.structure(document, sections, AnalysisMethod::ByMeaning))
    }

    /// Fixed-size chunking: every section spans `pages_per_section` pages
    /// except a possibly shorter tail.
    pub fn analyze_page_based(
        &self,
        document: &Document,
        pages_per_section: usize,
    ) -> Result<Structure, AnalysisError> {
        validate_document(document)?;

        let per_section = pages_per_section.max(1);
        let mut sections = Vec::new();
        let mut current_page = 1;
        let mut index = 1;

        while current_page <= document.total_pages {
            let end_page = (current_page + per_section - 1).min(document.total_pages);
            sections.push(Section {
                name: format!("{} {index}", self.profile.names.part),
                section_type: "page_based".to_string(),
                start_page: current_page,
                end_page,
                level: 1,
            });
            current_page = end_page + 1;
            index += 1;
        }

        Ok(self.structure(document, sections, AnalysisMethod::PageBased))
    }

    /// User-supplied split: ranges are validated but never repaired or
    /// invented, and an empty survivor set is surfaced as an error.
    pub fn analyze_custom(
        &self,
        document: &Document,
        proposals: &[RawSection],
    ) -> Result<Structure, AnalysisError> {
        validate_document(document)?;

        let sections = validator::validate_custom(proposals, document.total_pages);
        if sections.is_empty() {
            return Err(AnalysisError::NoValidSections);
        }

        Ok(self.structure(document, sections, AnalysisMethod::Custom))
    }

    /// Oracle-driven analysis with local fallback: one suggestion round
    /// trip, validated and repaired; any failure degrades to the heading
    /// pipeline.
    pub async fn analyze_with_oracle<O: StructureOracle>(
        &self,
        document: &Document,
        oracle: &O,
    ) -> Result<Structure, AnalysisError> {
        validate_document(document)?;

        match self.oracle_structure(document, oracle).await {
            Ok(structure) => Ok(structure),
            Err(error) => {
                warn!(%error, "oracle suggestion failed, using local heuristics");
                self.analyze_by_headings(document)
            }
        }
    }

    async fn oracle_structure<O: StructureOracle>(
        &self,
        document: &Document,
        oracle: &O,
    ) -> anyhow::Result<Structure> {
        let suggestion = oracle.suggest(document).await?;
        let sections = validator::validate(&suggestion, document.total_pages, &self.profile);

        debug!(sections = sections.len(), "oracle suggestion validated");
        Ok(self.structure(document, sections, AnalysisMethod::AiAnalysis))
    }

    fn structure(
        &self,
        document: &Document,
        sections: Vec<Section>,
        analysis_method: AnalysisMethod,
    ) -> Structure {
        Structure {
            title: document.title.clone(),
            author: document.author.clone(),
            total_pages: document.total_pages,
            sections,
            analysis_method,
        }
    }
}
