//! FFMETADATA chapter serialization.
//!
//! ffmpeg reads chapters from a metadata file of the form:
//!
//! ```text
//! ;FFMETADATA1
//!
//! [CHAPTER]
//! TIMEBASE=1/1000
//! START=0
//! END=11000
//! title=Chapter 1
//!
//! ```
//!
//! Times are written in milliseconds with `.` as decimal point regardless of
//! locale.

use crate::error::{CoreError, CoreResult};
use crate::processing::Chapter;
use crate::utils::{format_milliseconds, parse_seconds, seconds_to_duration};
use std::fmt::Write;

const HEADER: &str = ";FFMETADATA1";
const CHAPTER_SECTION: &str = "[CHAPTER]";
const TIMEBASE: &str = "1/1000";

/// Renders chapters as an FFMETADATA document. Chapters are titled
/// "Chapter 1", "Chapter 2", ...
#[must_use]
pub fn format_ffmetadata(chapters: &[Chapter]) -> String {
    let mut out = String::new();
    out.push_str(HEADER);
    out.push_str("\n\n");

    for (index, chapter) in chapters.iter().enumerate() {
        // Writing to a String cannot fail.
        let _ = write!(
            out,
            "{CHAPTER_SECTION}\nTIMEBASE={TIMEBASE}\nSTART={}\nEND={}\ntitle=Chapter {}\n\n",
            format_milliseconds(chapter.start),
            format_milliseconds(chapter.finish),
            index + 1
        );
    }

    out
}

/// Reads the chapters back out of an FFMETADATA document.
///
/// Only `TIMEBASE=1/1000` is supported; other keys such as `title` are ignored.
pub fn parse_ffmetadata(text: &str) -> CoreResult<Vec<Chapter>> {
    let mut lines = text.lines().map(str::trim);
    if lines.next() != Some(HEADER) {
        return Err(CoreError::MetadataParse(format!("missing '{HEADER}' header")));
    }

    let mut chapters = Vec::new();
    let mut current: Option<(Option<f64>, Option<f64>)> = None;

    for line in lines.filter(|l| !l.is_empty() && !l.starts_with(';') && !l.starts_with('#')) {
        if line.starts_with('[') {
            if let Some(pending) = current.take() {
                chapters.push(finish_chapter(pending)?);
            }
            if line == CHAPTER_SECTION {
                current = Some((None, None));
            }
            continue;
        }

        let Some(fields) = current.as_mut() else {
            continue;
        };
        let Some((key, value)) = line.split_once('=') else {
            return Err(CoreError::MetadataParse(format!("expected key=value, got '{line}'")));
        };

        match key {
            "TIMEBASE" if value != TIMEBASE => {
                return Err(CoreError::MetadataParse(format!("unsupported TIMEBASE '{value}'")));
            }
            "START" => fields.0 = Some(parse_millis(value)?),
            "END" => fields.1 = Some(parse_millis(value)?),
            _ => {}
        }
    }

    if let Some(pending) = current {
        chapters.push(finish_chapter(pending)?);
    }

    Ok(chapters)
}

fn parse_millis(value: &str) -> CoreResult<f64> {
    parse_seconds(value)
        .filter(|v| *v >= 0.0)
        .ok_or_else(|| CoreError::MetadataParse(format!("invalid millisecond value '{value}'")))
}

fn finish_chapter(fields: (Option<f64>, Option<f64>)) -> CoreResult<Chapter> {
    match fields {
        (Some(start), Some(end)) => {
            let to_duration = |ms: f64| {
                seconds_to_duration(ms / 1000.0)
                    .ok_or_else(|| CoreError::MetadataParse(format!("invalid time {ms}ms")))
            };
            Ok(Chapter::new(to_duration(start)?, to_duration(end)?))
        }
        _ => Err(CoreError::MetadataParse(
            "chapter is missing START or END".to_string(),
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn ms(value: u64) -> Duration {
        Duration::from_millis(value)
    }

    #[test]
    fn test_format_ffmetadata_layout() {
        let chapters = vec![
            Chapter::new(ms(0), ms(11_000)),
            Chapter::new(ms(11_000), ms(60_750)),
        ];
        let expected = ";FFMETADATA1\n\n\
            [CHAPTER]\nTIMEBASE=1/1000\nSTART=0\nEND=11000\ntitle=Chapter 1\n\n\
            [CHAPTER]\nTIMEBASE=1/1000\nSTART=11000\nEND=60750\ntitle=Chapter 2\n\n";
        assert_eq!(format_ffmetadata(&chapters), expected);
    }

    #[test]
    fn test_format_ffmetadata_fractional_milliseconds() {
        let chapters = vec![Chapter::new(ms(0), Duration::from_micros(1_234_500))];
        assert!(format_ffmetadata(&chapters).contains("END=1234.5\n"));
    }

    #[test]
    fn test_format_ffmetadata_empty() {
        assert_eq!(format_ffmetadata(&[]), ";FFMETADATA1\n\n");
    }

    #[test]
    fn test_parse_ffmetadata_ignores_other_sections() {
        let text = ";FFMETADATA1\ntitle=Movie\n\n[STREAM]\nfoo=bar\n\n\
                    [CHAPTER]\nTIMEBASE=1/1000\nSTART=0\nEND=5000\ntitle=Intro\n";
        assert_eq!(parse_ffmetadata(text).unwrap(), vec![Chapter::new(ms(0), ms(5_000))]);
    }

    #[test]
    fn test_parse_ffmetadata_errors() {
        assert!(parse_ffmetadata("[CHAPTER]\nSTART=0\nEND=1\n").is_err());
        assert!(parse_ffmetadata(";FFMETADATA1\n[CHAPTER]\nSTART=0\n").is_err());
        assert!(parse_ffmetadata(";FFMETADATA1\n[CHAPTER]\nTIMEBASE=1/90000\nSTART=0\nEND=1\n").is_err());
        assert!(parse_ffmetadata(";FFMETADATA1\n[CHAPTER]\nSTART=abc\nEND=1\n").is_err());
    }

    #[test]
    fn test_round_trip_preserves_milliseconds() {
        let chapters = vec![
            Chapter::new(ms(0), ms(11_000)),
            Chapter::new(ms(11_000), ms(60_750)),
            Chapter::new(ms(60_750), ms(123_457)),
        ];
        let parsed = parse_ffmetadata(&format_ffmetadata(&chapters)).unwrap();
        assert_eq!(parsed, chapters);
    }
}
