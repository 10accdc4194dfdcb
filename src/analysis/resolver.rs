//! Section boundary resolution
//!
//! Turns an ordered list of heading candidates into contiguous,
//! page-complete sections: each section ends where the next heading begins.
//! Two policies keep the result well-formed:
//! - candidates sharing a page collapse to the last one on that page, so no
//!   section ever spans less than a full page;
//! - the first section is pulled back to page 1, so front matter before the
//!   first detected heading stays covered.

use crate::document::models::{HeadingCandidate, Section};

pub fn resolve(candidates: &[HeadingCandidate], total_pages: usize) -> Vec<Section> {
    let mut boundaries: Vec<&HeadingCandidate> = Vec::new();
    for candidate in candidates {
        match boundaries.last_mut() {
            Some(last) if last.page_number == candidate.page_number => *last = candidate,
            _ => boundaries.push(candidate),
        }
    }

    let mut sections = Vec::with_capacity(boundaries.len());
    for (index, candidate) in boundaries.iter().enumerate() {
        let start_page = if index == 0 { 1 } else { candidate.page_number };
        let end_page = match boundaries.get(index + 1) {
            Some(next) => next.page_number - 1,
            None => total_pages,
        };

        sections.push(Section {
            name: candidate.text.clone(),
            section_type: candidate.heading_type.as_str().to_string(),
            start_page,
            end_page,
            level: candidate.level,
        });
    }

    sections
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::models::HeadingType;

    fn candidate(text: &str, page_number: usize) -> HeadingCandidate {
        HeadingCandidate {
            text: text.to_string(),
            page_number,
            heading_type: HeadingType::RegularSection,
            level: 1,
        }
    }

    #[test]
    fn each_section_ends_where_the_next_begins() {
        let candidates = vec![
            candidate("Кіріспе", 1),
            candidate("1. Тарау", 12),
            candidate("Қорытынды", 40),
        ];
        let sections = resolve(&candidates, 50);

        assert_eq!(sections.len(), 3);
        assert_eq!((sections[0].start_page, sections[0].end_page), (1, 11));
        assert_eq!((sections[1].start_page, sections[1].end_page), (12, 39));
        assert_eq!((sections[2].start_page, sections[2].end_page), (40, 50));
    }

    #[test]
    fn same_page_candidates_collapse_to_the_later_one() {
        let candidates = vec![
            candidate("Кіріспе", 1),
            candidate("Бірінші тарау", 4),
            candidate("Екінші тарау", 4),
            candidate("Қорытынды", 9),
        ];
        let sections = resolve(&candidates, 10);

        assert_eq!(sections.len(), 3);
        assert_eq!(sections[1].name, "Екінші тарау");
        assert_eq!((sections[1].start_page, sections[1].end_page), (4, 8));
    }

    #[test]
    fn front_matter_belongs_to_the_first_section() {
        let candidates = vec![candidate("1. Тарау", 5), candidate("2. Тарау", 20)];
        let sections = resolve(&candidates, 30);

        assert_eq!(sections[0].start_page, 1);
        assert_eq!(sections[0].end_page, 19);
        assert_eq!(sections[1].end_page, 30);
    }

    #[test]
    fn no_candidates_yield_no_sections() {
        assert!(resolve(&[], 100).is_empty());
    }
}
