//! Language profile configuration
//!
//! The heading classifier is heuristic and alphabet-specific, so everything
//! language-bound lives here as injectable configuration: keyword tables,
//! heading regex patterns, the style-heuristic alphabet, and the localized
//! names the planner uses for synthesized sections. The built-in default
//! targets Kazakh/Russian book texts; other languages are a TOML file away.

use anyhow::Result;
use once_cell::sync::OnceCell;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LanguageProfile {
    /// Keywords marking an introduction heading (matched lowercased, by
    /// substring).
    pub introduction_keywords: Vec<String>,
    /// Keywords marking a conclusion heading.
    pub conclusion_keywords: Vec<String>,
    /// Other structural words ("chapter", "part") that make a line a heading.
    pub structural_keywords: Vec<String>,
    /// Regex patterns that make a line a heading (numbered prefixes,
    /// all-caps lines, keyword-with-number forms). Invalid patterns are
    /// skipped at compile time.
    pub patterns: Vec<String>,
    /// Lowercase alphabet of the target script, used by the letters-only
    /// style heuristic.
    pub alphabet: String,
    pub names: SectionNames,

    #[serde(skip)]
    compiled: OnceCell<Vec<Regex>>,
}

/// Localized names for synthesized sections.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SectionNames {
    pub introduction: String,
    pub body: String,
    pub conclusion: String,
    pub part: String,
}

impl Default for LanguageProfile {
    fn default() -> Self {
        LanguageProfile {
            introduction_keywords: vec![
                "кіріспе".to_string(),
                "введение".to_string(),
                "вступление".to_string(),
            ],
            conclusion_keywords: vec![
                "қорытынды".to_string(),
                "заключение".to_string(),
            ],
            structural_keywords: vec![
                "глава".to_string(),
                "бөлім".to_string(),
                "тарау".to_string(),
            ],
            patterns: vec![
                r"^\d+\.\s+\S".to_string(),
                r"^\d+(\.\d+)+\s+\S".to_string(),
                r"^\d+\s+\S".to_string(),
                r"^[IVX]+\.\s*\S".to_string(),
                r"^[IVX]+\s+\S".to_string(),
                r"^[\p{Lu}][\p{Lu}\s]+$".to_string(),
                r"(?i)^(глава|бөлім|тарау|раздел)\s+\d+".to_string(),
            ],
            alphabet: "абвгғдеёжзийкқлмнңоөпрстуұүфхһцчшщъыіьэюя".to_string(),
            names: SectionNames {
                introduction: "Кіріспе".to_string(),
                body: "Негізгі бөлім".to_string(),
                conclusion: "Қорытынды".to_string(),
                part: "Бөлім".to_string(),
            },
            compiled: OnceCell::new(),
        }
    }
}

impl LanguageProfile {
    /// Load the profile from the user config directory, falling back to the
    /// built-in default when no file exists.
    pub fn load() -> Result<Self> {
        if let Some(config_path) = Self::config_path() {
            if config_path.exists() {
                return Self::from_path(&config_path);
            }
        }

        Ok(LanguageProfile::default())
    }

    pub fn from_path(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let profile: LanguageProfile = toml::from_str(&content)?;
        Ok(profile)
    }

    /// Save the profile to the config directory.
    pub fn save(&self) -> Result<()> {
        if let Some(config_path) = Self::config_path() {
            if let Some(parent) = config_path.parent() {
                fs::create_dir_all(parent)?;
            }

            let content = toml::to_string_pretty(self)?;
            fs::write(&config_path, content)?;
        }

        Ok(())
    }

    pub fn config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("kitap").join("profile.toml"))
    }

    /// Compiled heading patterns, built once per profile. Patterns that fail
    /// to compile are dropped rather than failing the whole profile.
    pub fn compiled_patterns(&self) -> &[Regex] {
        self.compiled.get_or_init(|| {
            self.patterns
                .iter()
                .filter_map(|pattern| Regex::new(pattern).ok())
                .collect()
        })
    }

    pub fn is_introduction_keyword(&self, line_lower: &str) -> bool {
        self.introduction_keywords
            .iter()
            .any(|keyword| line_lower.contains(keyword.as_str()))
    }

    pub fn is_conclusion_keyword(&self, line_lower: &str) -> bool {
        self.conclusion_keywords
            .iter()
            .any(|keyword| line_lower.contains(keyword.as_str()))
    }

    pub fn has_structural_keyword(&self, line_lower: &str) -> bool {
        self.is_introduction_keyword(line_lower)
            || self.is_conclusion_keyword(line_lower)
            || self
                .structural_keywords
                .iter()
                .any(|keyword| line_lower.contains(keyword.as_str()))
    }

    /// True when every character is a space or a letter of the profile
    /// alphabet (case-insensitive).
    pub fn in_alphabet(&self, line: &str) -> bool {
        line.chars().all(|c| {
            c == ' ' || c.to_lowercase().all(|lower| self.alphabet.contains(lower))
        })
    }
}
