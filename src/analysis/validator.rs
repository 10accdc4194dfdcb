//! Untrusted structure validation and repair
//!
//! Repairs an external oracle's section proposal into something safe to
//! hand to the renderer: bounded section count, clamped page ranges, no
//! sub-minimum slivers, coverage pinned to both ends of the book. Gaps
//! *between* surviving sections are left as proposed; only the ends are
//! repaired. Also hosts the stricter validation used for user-supplied
//! custom splits, which drops bad ranges but never invents new ones.

use tracing::debug;

use super::oracle::{RawSection, RawStructure};
use super::planner;
use super::profile::LanguageProfile;
use crate::document::models::Section;

/// Hard ceiling on sections accepted from an oracle.
pub const MAX_SECTIONS: usize = 8;
/// Proposed sections spanning fewer pages than this are noise.
pub const MIN_SECTION_PAGES: usize = 10;

/// Validate and repair an oracle suggestion. Always returns at least one
/// section covering page 1 through `total_pages` at the ends; internal gaps
/// in what the oracle proposed are preserved as-is.
pub fn validate(
    raw: &RawStructure,
    total_pages: usize,
    profile: &LanguageProfile,
) -> Vec<Section> {
    if raw.sections.is_empty() {
        debug!("oracle proposed no sections, synthesizing default split");
        return default_three_way(total_pages, profile);
    }

    let cap = MAX_SECTIONS.min(total_pages / MIN_SECTION_PAGES);
    let mut survivors = Vec::new();

    for (index, proposed) in raw.sections.iter().take(cap).enumerate() {
        let (raw_start, raw_end) = if proposed.start_page > proposed.end_page {
            (proposed.end_page, proposed.start_page)
        } else {
            (proposed.start_page, proposed.end_page)
        };

        let start_page = raw_start.clamp(1, total_pages as i64) as usize;
        let end_page = raw_end.clamp(start_page as i64, total_pages as i64) as usize;

        let span = end_page - start_page + 1;
        if span < MIN_SECTION_PAGES {
            debug!(
                name = %proposed.name,
                span,
                "dropping proposed section below minimum size"
            );
            continue;
        }

        survivors.push(Section {
            name: section_name(proposed, index, profile),
            section_type: if proposed.kind.trim().is_empty() {
                "chapter".to_string()
            } else {
                proposed.kind.clone()
            },
            start_page,
            end_page,
            level: proposed.level.clamp(1, 9) as u8,
        });
    }

    if survivors.is_empty() {
        debug!("no proposed sections survived validation, falling back to planner");
        return planner::partition(
            total_pages,
            planner::optimal_section_count(total_pages),
            profile,
        );
    }

    survivors.sort_by_key(|section| section.start_page);

    // Pin coverage to both ends of the book. Pages lost to gaps between
    // surviving sections stay uncovered; only the tail absorbs strays.
    if let Some(first) = survivors.first_mut() {
        first.start_page = 1;
    }
    if let Some(last) = survivors.last_mut() {
        if last.end_page < total_pages {
            last.end_page = total_pages;
        }
    }

    survivors
}

/// Validation for user-supplied custom splits: keep ranges that fit the
/// book, drop the rest verbatim. No repair, no synthesis.
pub fn validate_custom(proposals: &[RawSection], total_pages: usize) -> Vec<Section> {
    let mut sections = Vec::new();

    for proposed in proposals {
        if proposed.name.trim().is_empty() {
            continue;
        }
        if proposed.start_page < 1
            || proposed.end_page > total_pages as i64
            || proposed.start_page > proposed.end_page
        {
            debug!(name = %proposed.name, "dropping out-of-range custom section");
            continue;
        }

        sections.push(Section {
            name: proposed.name.clone(),
            section_type: if proposed.kind.trim().is_empty() {
                "custom".to_string()
            } else {
                proposed.kind.clone()
            },
            start_page: proposed.start_page as usize,
            end_page: proposed.end_page as usize,
            level: proposed.level.clamp(1, 9) as u8,
        });
    }

    sections
}

/// Exact three-way split used when the oracle proposes nothing at all:
/// introduction = first quarter, body = middle half, conclusion = last
/// quarter, degrading gracefully for very short books.
fn default_three_way(total_pages: usize, profile: &LanguageProfile) -> Vec<Section> {
    let quarter = (total_pages / 4).max(1);
    let intro_end = quarter.min(total_pages);
    let conclusion_start = total_pages.saturating_sub(quarter - 1).max(intro_end + 1);

    let mut sections = vec![Section {
        name: profile.names.introduction.clone(),
        section_type: "introduction".to_string(),
        start_page: 1,
        end_page: intro_end,
        level: 1,
    }];

    if conclusion_start > intro_end + 1 {
        sections.push(Section {
            name: profile.names.body.clone(),
            section_type: "body".to_string(),
            start_page: intro_end + 1,
            end_page: conclusion_start - 1,
            level: 1,
        });
    }

    if conclusion_start <= total_pages {
        sections.push(Section {
            name: profile.names.conclusion.clone(),
            section_type: "conclusion".to_string(),
            start_page: conclusion_start,
            end_page: total_pages,
            level: 1,
        });
    }

    sections
}

fn section_name(proposed: &RawSection, index: usize, profile: &LanguageProfile) -> String {
    let name = proposed.name.trim();
    if name.is_empty() {
        format!("{} {}", profile.names.part, index + 1)
    } else {
        name.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile() -> LanguageProfile {
        LanguageProfile::default()
    }

    fn raw(sections: Vec<RawSection>) -> RawStructure {
        RawStructure {
            title: None,
            author: None,
            sections,
        }
    }

    #[test]
    fn undersized_sections_are_dropped_and_coverage_extended() {
        let suggestion = raw(vec![
            RawSection::new("Шолу", 1, 3),
            RawSection::new("Негізгі мәтін", 4, 100),
        ]);
        let sections = validate(&suggestion, 100, &profile());

        assert_eq!(sections.len(), 1);
        assert_eq!(sections[0].name, "Негізгі мәтін");
        assert_eq!((sections[0].start_page, sections[0].end_page), (1, 100));
    }

    #[test]
    fn inverted_ranges_are_swapped() {
        let suggestion = raw(vec![RawSection::new("Тарау", 80, 30)]);
        let sections = validate(&suggestion, 100, &profile());

        assert_eq!(sections[0].start_page, 1);
        assert_eq!(sections[0].end_page, 100);
    }

    #[test]
    fn out_of_bounds_ranges_are_clamped() {
        let suggestion = raw(vec![
            RawSection::new("Кіріспе", -5, 40),
            RawSection::new("Қорытынды", 41, 900),
        ]);
        let sections = validate(&suggestion, 100, &profile());

        assert_eq!(sections.len(), 2);
        assert_eq!((sections[0].start_page, sections[0].end_page), (1, 40));
        assert_eq!((sections[1].start_page, sections[1].end_page), (41, 100));
    }

    #[test]
    fn section_count_is_capped() {
        let proposals: Vec<RawSection> = (0..20)
            .map(|index| {
                let start = index * 10 + 1;
                RawSection::new(&format!("Тарау {index}"), start, start + 9)
            })
            .collect();
        let sections = validate(&raw(proposals), 200, &profile());

        assert_eq!(sections.len(), MAX_SECTIONS);
        assert_eq!(sections.last().unwrap().end_page, 200);
    }

    #[test]
    fn cap_also_scales_down_with_page_count() {
        // 30 pages only admit 30 / 10 = 3 sections.
        let proposals: Vec<RawSection> = (0..5)
            .map(|index| RawSection::new("Тарау", index * 10 + 1, index * 10 + 10))
            .collect();
        let sections = validate(&raw(proposals), 30, &profile());
        assert_eq!(sections.len(), 3);
    }

    #[test]
    fn empty_suggestion_gets_quarter_half_quarter_split() {
        let sections = validate(&raw(vec![]), 100, &profile());

        assert_eq!(sections.len(), 3);
        assert_eq!((sections[0].start_page, sections[0].end_page), (1, 25));
        assert_eq!((sections[1].start_page, sections[1].end_page), (26, 75));
        assert_eq!((sections[2].start_page, sections[2].end_page), (76, 100));
        assert_eq!(sections[0].section_type, "introduction");
        assert_eq!(sections[2].section_type, "conclusion");
    }

    #[test]
    fn empty_suggestion_on_tiny_book_degrades_gracefully() {
        let sections = validate(&raw(vec![]), 2, &profile());
        assert_eq!(sections.len(), 2);
        assert_eq!((sections[0].start_page, sections[0].end_page), (1, 1));
        assert_eq!((sections[1].start_page, sections[1].end_page), (2, 2));
    }

    #[test]
    fn nothing_surviving_falls_back_to_planner() {
        let suggestion = raw(vec![
            RawSection::new("A", 1, 2),
            RawSection::new("B", 3, 4),
        ]);
        let sections = validate(&suggestion, 100, &profile());

        // Planner output: optimal_section_count(100) = 5 even sections.
        assert_eq!(sections.len(), 5);
        assert_eq!(sections[0].start_page, 1);
        assert_eq!(sections.last().unwrap().end_page, 100);
    }

    #[test]
    fn internal_gaps_are_preserved() {
        // Known weakness, kept deliberately: only the ends get repaired.
        let suggestion = raw(vec![
            RawSection::new("Бірінші", 1, 20),
            RawSection::new("Екінші", 41, 100),
        ]);
        let sections = validate(&suggestion, 100, &profile());

        assert_eq!(sections.len(), 2);
        assert_eq!((sections[0].start_page, sections[0].end_page), (1, 20));
        assert_eq!((sections[1].start_page, sections[1].end_page), (41, 100));
    }

    #[test]
    fn custom_sections_keep_valid_ranges_verbatim() {
        let proposals = vec![
            RawSection::new("Алғы сөз", 1, 10),
            RawSection::new("", 11, 20),
            RawSection::new("Сыртта", 90, 120),
            RawSection::new("Теріс", 30, 20),
            RawSection::new("Соңғы сөз", 11, 100),
        ];
        let sections = validate_custom(&proposals, 100);

        assert_eq!(sections.len(), 2);
        assert_eq!(sections[0].name, "Алғы сөз");
        assert_eq!(sections[1].name, "Соңғы сөз");
        assert_eq!(sections[1].section_type, "custom");
    }
}
