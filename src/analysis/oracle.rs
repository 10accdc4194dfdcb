//! External structure oracle seam
//!
//! A language model (or any other external service) may propose a book
//! structure. The proposal is untrusted: page ranges can overlap, invert,
//! run out of bounds, or be missing entirely. Transport lives behind the
//! `StructureOracle` trait; everything that comes back goes through the
//! validator before it is believed.

use anyhow::{bail, Result};
use serde::Deserialize;

use crate::document::models::Document;

/// A loosely-structured suggestion as received from the oracle. Every field
/// is optional or defaulted so a sloppy response still parses.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawStructure {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub author: Option<String>,
    #[serde(default)]
    pub sections: Vec<RawSection>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawSection {
    #[serde(default)]
    pub name: String,
    #[serde(default, rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub start_page: i64,
    #[serde(default)]
    pub end_page: i64,
    #[serde(default = "default_level")]
    pub level: i64,
}

fn default_level() -> i64 {
    1
}

impl RawSection {
    pub fn new(name: &str, start_page: i64, end_page: i64) -> Self {
        RawSection {
            name: name.to_string(),
            kind: String::new(),
            start_page,
            end_page,
            level: 1,
        }
    }
}

/// One blocking round trip to an external structure suggester. No retry
/// policy: a failure here means the caller falls back to the local
/// heuristics immediately.
pub trait StructureOracle {
    fn suggest(
        &self,
        document: &Document,
    ) -> impl std::future::Future<Output = Result<RawStructure>> + Send;
}

/// Placeholder oracle for callers that run without an external suggester.
pub struct NoOracle;

impl StructureOracle for NoOracle {
    async fn suggest(&self, _document: &Document) -> Result<RawStructure> {
        bail!("no structure oracle configured")
    }
}
