//! Chapter derivation from accepted black sections.
//!
//! Chapter boundaries sit at the midpoints of `Ok` sections. The chapters
//! always cover `[0, duration]` without gaps or overlaps.

use super::types::{BlackSection, Chapter};
use std::time::Duration;

/// Builds the chapter list for a file of length `duration`.
///
/// Sections that are not `Ok` are ignored. With no accepted sections the
/// result is a single chapter spanning the whole file.
#[must_use]
pub fn build_chapters(sections: &[BlackSection], duration: Duration) -> Vec<Chapter> {
    let mut accepted: Vec<&BlackSection> = sections.iter().filter(|s| s.is_ok()).collect();
    accepted.sort_by_key(|s| s.start);

    let markers: Vec<Duration> = std::iter::once(Duration::ZERO)
        .chain(accepted.iter().map(|s| s.midpoint()))
        .chain(std::iter::once(duration))
        .collect();

    markers
        .windows(2)
        .map(|pair| Chapter::new(pair[0], pair[1]))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::processing::types::SectionState;

    fn secs(value: f64) -> Duration {
        crate::utils::seconds_to_duration(value).unwrap()
    }

    fn section(start: f64, finish: f64, state: SectionState) -> BlackSection {
        BlackSection {
            start: secs(start),
            finish: secs(finish),
            state,
        }
    }

    fn assert_tiles(chapters: &[Chapter], duration: Duration) {
        assert_eq!(chapters.first().map(|c| c.start), Some(Duration::ZERO));
        assert_eq!(chapters.last().map(|c| c.finish), Some(duration));
        for pair in chapters.windows(2) {
            assert_eq!(pair[0].finish, pair[1].start);
        }
    }

    #[test]
    fn test_no_sections_gives_single_chapter() {
        let chapters = build_chapters(&[], secs(120.0));
        assert_eq!(chapters, vec![Chapter::new(Duration::ZERO, secs(120.0))]);
    }

    #[test]
    fn test_only_rejected_sections_gives_single_chapter() {
        let sections = [
            section(0.5, 1.0, SectionState::TooShort),
            section(50.0, 55.0, SectionState::OutsideOfWindows),
        ];
        let chapters = build_chapters(&sections, secs(120.0));
        assert_eq!(chapters, vec![Chapter::new(Duration::ZERO, secs(120.0))]);
    }

    #[test]
    fn test_boundaries_at_midpoints() {
        let sections = [
            section(10.0, 12.0, SectionState::Ok),
            section(60.0, 61.5, SectionState::Ok),
        ];
        let chapters = build_chapters(&sections, secs(120.0));
        assert_eq!(
            chapters,
            vec![
                Chapter::new(Duration::ZERO, secs(11.0)),
                Chapter::new(secs(11.0), secs(60.75)),
                Chapter::new(secs(60.75), secs(120.0)),
            ]
        );
    }

    #[test]
    fn test_unsorted_sections_are_sorted_by_start() {
        let sections = [
            section(80.0, 82.0, SectionState::Ok),
            section(20.0, 22.0, SectionState::Ok),
            section(50.0, 52.0, SectionState::Ok),
        ];
        let chapters = build_chapters(&sections, secs(100.0));
        let starts: Vec<Duration> = chapters.iter().map(|c| c.start).collect();
        assert_eq!(starts, vec![Duration::ZERO, secs(21.0), secs(51.0), secs(81.0)]);
        assert_tiles(&chapters, secs(100.0));
    }

    #[test]
    fn test_chapters_tile_the_whole_duration() {
        let sections: Vec<BlackSection> = (1..20)
            .map(|i| section(i as f64 * 5.0, i as f64 * 5.0 + 1.25, SectionState::Ok))
            .collect();
        let chapters = build_chapters(&sections, secs(100.0));
        assert_eq!(chapters.len(), 20);
        assert_tiles(&chapters, secs(100.0));
    }

    #[test]
    fn test_section_at_end_gives_degenerate_chapter() {
        let sections = [section(98.0, 100.0, SectionState::Ok)];
        let chapters = build_chapters(&sections, secs(99.0));
        assert_eq!(chapters.len(), 2);
        assert_eq!(chapters[1], Chapter::new(secs(99.0), secs(99.0)));
    }
}
