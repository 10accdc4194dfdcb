//! Heading detection and classification
//!
//! Pure line-level classifier: given one trimmed line of page text, decide
//! whether it is a structural heading, and if so its type and nesting level.
//! The layered exclude-then-include design rejects the overwhelmingly common
//! case (justified body prose) with cheap checks before the keyword, regex,
//! and style passes run.

use once_cell::sync::Lazy;
use regex::Regex;
use unicode_segmentation::UnicodeSegmentation;

use super::profile::LanguageProfile;
use crate::document::models::HeadingType;

/// Headings longer than this are prose, not structure.
const MAX_HEADING_CHARS: usize = 30;
/// Lines with an embedded digit above this length are footnote markers or
/// numbered body references, not short numbered headings.
const MAX_DIGIT_LINE_CHARS: usize = 10;
/// Upper length bound for the style heuristic.
const STYLE_MAX_CHARS: usize = 25;
/// Uppercase-letter ratio above which a short line reads as a set heading.
const UPPERCASE_RATIO: f32 = 0.8;

const FORBIDDEN_PUNCT: [char; 12] = [
    ',', ':', ';', '?', '!', '"', '\'', '«', '»', '„', '“', '”',
];

static NUMBERED_PREFIX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d+\.").unwrap());
static ROMAN_PREFIX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[IVX]+\.").unwrap());
static LEVEL_THREE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d+\.\d+\.\d+").unwrap());
static LEVEL_TWO: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d+\.\d+").unwrap());

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Heading {
    pub heading_type: HeadingType,
    pub level: u8,
}

/// Classify a trimmed line. `None` means body prose.
pub fn classify(line: &str, profile: &LanguageProfile) -> Option<Heading> {
    let line = line.trim();
    let length = line.graphemes(true).count();

    if length < 3 || length > MAX_HEADING_CHARS {
        return None;
    }
    // Multi-space runs indicate justified body text.
    if has_whitespace_run(line) {
        return None;
    }
    // Terminal sentence punctuation, unless the line trails off in an ellipsis.
    if line.ends_with('.') && !line.ends_with("...") {
        return None;
    }
    if length > MAX_DIGIT_LINE_CHARS && line.chars().any(|c| c.is_ascii_digit()) {
        return None;
    }
    // A lowercase start is a continuation of the previous sentence.
    if line.chars().next().is_some_and(|c| c.is_lowercase()) {
        return None;
    }
    if line.chars().any(|c| FORBIDDEN_PUNCT.contains(&c)) {
        return None;
    }

    let line_lower = line.to_lowercase();
    let included = profile.has_structural_keyword(&line_lower)
        || matches_pattern(line, profile)
        || matches_style(line, length, profile);

    if !included {
        return None;
    }

    Some(Heading {
        heading_type: heading_type_of(line, &line_lower, profile),
        level: heading_level(line),
    })
}

/// Relaxed classification for the aggressive re-scan: anything short-ish,
/// flush-left, and not obviously prose counts as a potential heading.
pub fn classify_relaxed(raw_line: &str) -> Option<Heading> {
    if raw_line.starts_with([' ', '\t']) {
        return None;
    }

    let line = raw_line.trim_end();
    let length = line.graphemes(true).count();

    if length <= 5 || length >= 100 {
        return None;
    }
    if line.ends_with(['.', '!', '?', ':', ';']) {
        return None;
    }
    if is_body_prose(line) {
        return None;
    }

    Some(Heading {
        heading_type: HeadingType::PotentialHeading,
        level: 1,
    })
}

/// Prose tells: justified spacing, trailing punctuation, lowercase start.
fn is_body_prose(line: &str) -> bool {
    has_whitespace_run(line)
        || line.ends_with(['.', '!', '?', ':', ';', ','])
        || line.chars().next().is_some_and(|c| c.is_lowercase())
}

fn has_whitespace_run(line: &str) -> bool {
    let mut previous_was_whitespace = false;
    for c in line.chars() {
        let whitespace = c.is_whitespace();
        if whitespace && previous_was_whitespace {
            return true;
        }
        previous_was_whitespace = whitespace;
    }
    false
}

fn matches_pattern(line: &str, profile: &LanguageProfile) -> bool {
    profile
        .compiled_patterns()
        .iter()
        .any(|pattern| pattern.is_match(line))
}

/// Style heuristic for keyword- and pattern-free headings: either a short
/// uppercase-heavy line, or a short capitalized line written purely in the
/// profile alphabet.
fn matches_style(line: &str, length: usize, profile: &LanguageProfile) -> bool {
    if length >= STYLE_MAX_CHARS {
        return false;
    }

    let char_count = line.chars().count();
    let uppercase = line.chars().filter(|c| c.is_uppercase()).count();
    if length >= 5 && uppercase as f32 / char_count as f32 > UPPERCASE_RATIO {
        return true;
    }

    line.chars().next().is_some_and(|c| c.is_uppercase())
        && (3..=20).contains(&length)
        && profile.in_alphabet(line)
        && line.chars().last().is_some_and(|c| c.is_alphabetic())
}

fn heading_type_of(line: &str, line_lower: &str, profile: &LanguageProfile) -> HeadingType {
    if profile.is_introduction_keyword(line_lower) {
        HeadingType::Introduction
    } else if profile.is_conclusion_keyword(line_lower) {
        HeadingType::Conclusion
    } else if NUMBERED_PREFIX.is_match(line) {
        HeadingType::NumberedSection
    } else if ROMAN_PREFIX.is_match(line) {
        HeadingType::RomanSection
    } else {
        HeadingType::RegularSection
    }
}

fn heading_level(line: &str) -> u8 {
    if LEVEL_THREE.is_match(line) {
        3
    } else if LEVEL_TWO.is_match(line) {
        2
    } else {
        1
    }
}
