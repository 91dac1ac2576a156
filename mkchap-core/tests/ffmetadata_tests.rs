// mkchap-core/tests/ffmetadata_tests.rs

use mkchap_core::utils::seconds_to_duration;
use mkchap_core::{Chapter, build_chapters, classify_black_sections, format_ffmetadata, parse_ffmetadata, parse_windows};
use std::time::Duration;

#[test]
fn test_round_trip_of_derived_chapters() {
    let duration = seconds_to_duration(3599.999).unwrap();
    let output = "black_start=125.125\nblack_end=127.5\n\
                  black_start=1800.001\nblack_end=1802.25\n\
                  black_start=3000\nblack_end=3001.333\n";
    let windows = parse_windows(None, duration).unwrap();
    let sections = classify_black_sections(output, 1.0, &windows).unwrap();
    let chapters = build_chapters(&sections, duration);

    let text = format_ffmetadata(&chapters);
    assert_eq!(parse_ffmetadata(&text).unwrap(), chapters);
}

#[test]
fn test_millisecond_values_survive_round_trip() {
    for millis in [0u64, 1, 999, 1_000, 60_750, 123_456, 86_399_999] {
        let chapters = vec![Chapter::new(Duration::ZERO, Duration::from_millis(millis))];
        let text = format_ffmetadata(&chapters);
        assert!(text.contains(&format!("END={millis}\n")), "{text}");
        assert_eq!(parse_ffmetadata(&text).unwrap(), chapters);
    }
}

#[test]
fn test_titles_are_numbered_from_one() {
    let second = Duration::from_secs(1);
    let chapters = vec![
        Chapter::new(Duration::ZERO, second),
        Chapter::new(second, second * 2),
        Chapter::new(second * 2, second * 3),
    ];
    let text = format_ffmetadata(&chapters);
    assert!(text.contains("title=Chapter 1\n"));
    assert!(text.contains("title=Chapter 3\n"));
    assert!(!text.contains("title=Chapter 0\n"));
    assert_eq!(text.matches("[CHAPTER]").count(), 3);
}
