//! Fallback even-partition planner
//!
//! When heading detection fails its quality gate (or an untrusted suggestion
//! survives no validation), the planner synthesizes a structurally
//! reasonable split: an introduction, evenly sized body parts, and a
//! conclusion, covering every page exactly once.

use tracing::debug;

use super::profile::LanguageProfile;
use crate::document::models::Section;

/// Partition `1..=total_pages` into `target_count` contiguous sections.
///
/// The count is clamped to `max(2, min(target_count, total_pages / 5))` so a
/// short book never shatters into slivers, and never exceeds `total_pages`.
/// `total_pages` must be at least 1. The remainder of the division is
/// front-loaded: the first `total_pages % count` sections get one extra page,
/// which guarantees exact coverage.
pub fn partition(
    total_pages: usize,
    target_count: usize,
    profile: &LanguageProfile,
) -> Vec<Section> {
    let count = target_count
        .min((total_pages / 5).max(2))
        .max(2)
        .min(total_pages)
        .max(1);

    let base = total_pages / count;
    let remainder = total_pages % count;

    debug!(total_pages, count, "partitioning into even sections");

    let mut sections = Vec::with_capacity(count);
    let mut current_page = 1;

    for index in 0..count {
        let pages = base + usize::from(index < remainder);
        let end_page = current_page + pages - 1;

        sections.push(Section {
            name: section_name(index, count, profile),
            section_type: "auto_generated".to_string(),
            start_page: current_page,
            end_page,
            level: 1,
        });

        current_page = end_page + 1;
    }

    sections
}

/// Monotonic step function: more pages, more sections, capped at 15.
pub fn optimal_section_count(total_pages: usize) -> usize {
    if total_pages <= 50 {
        3
    } else if total_pages <= 100 {
        5
    } else if total_pages <= 200 {
        7
    } else if total_pages <= 300 {
        10
    } else {
        (total_pages / 20).min(15)
    }
}

fn section_name(index: usize, count: usize, profile: &LanguageProfile) -> String {
    if index == 0 {
        profile.names.introduction.clone()
    } else if index == count - 1 {
        profile.names.conclusion.clone()
    } else {
        format!("{index}. {}", profile.names.part)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile() -> LanguageProfile {
        LanguageProfile::default()
    }

    fn assert_exact_coverage(sections: &[Section], total_pages: usize) {
        assert_eq!(sections[0].start_page, 1);
        assert_eq!(sections.last().unwrap().end_page, total_pages);
        for pair in sections.windows(2) {
            assert_eq!(pair[0].end_page + 1, pair[1].start_page);
        }
    }

    #[test]
    fn remainder_pages_are_front_loaded() {
        let sections = partition(100, 8, &profile());

        assert_eq!(sections.len(), 8);
        assert_exact_coverage(&sections, 100);
        // 100 = 8 * 12 + 4: the first four sections get 13 pages.
        for section in &sections[..4] {
            assert_eq!(section.page_count(), 13);
        }
        for section in &sections[4..] {
            assert_eq!(section.page_count(), 12);
        }
    }

    #[test]
    fn first_and_last_sections_get_localized_names() {
        let sections = partition(60, 4, &profile());

        assert_eq!(sections[0].name, "Кіріспе");
        assert_eq!(sections[1].name, "1. Бөлім");
        assert_eq!(sections[2].name, "2. Бөлім");
        assert_eq!(sections[3].name, "Қорытынды");
    }

    #[test]
    fn target_count_is_clamped_for_short_books() {
        // 9 pages / 5 = 1, clamped up to 2.
        let sections = partition(9, 7, &profile());
        assert_eq!(sections.len(), 2);
        assert_exact_coverage(&sections, 9);
    }

    #[test]
    fn single_page_book_keeps_one_full_section() {
        let sections = partition(1, 5, &profile());
        assert_eq!(sections.len(), 1);
        assert_eq!((sections[0].start_page, sections[0].end_page), (1, 1));
    }

    #[test]
    fn oversized_targets_are_capped_by_page_count() {
        let sections = partition(100, 50, &profile());
        // 100 / 5 = 20 sections of 5 pages each.
        assert_eq!(sections.len(), 20);
        assert_exact_coverage(&sections, 100);
        assert!(sections.iter().all(|section| section.page_count() == 5));
    }

    #[test]
    fn optimal_count_steps_with_page_count() {
        assert_eq!(optimal_section_count(30), 3);
        assert_eq!(optimal_section_count(50), 3);
        assert_eq!(optimal_section_count(100), 5);
        assert_eq!(optimal_section_count(150), 7);
        assert_eq!(optimal_section_count(250), 10);
        assert_eq!(optimal_section_count(400), 15);
        assert_eq!(optimal_section_count(10_000), 15);
    }
}
