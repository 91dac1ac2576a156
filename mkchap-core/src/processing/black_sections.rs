//! Black-section parsing and classification.
//!
//! The frame analyzer prints one `tag=<seconds>` line per event, alternating
//! between the start and the end of each black interval:
//!
//! ```text
//! lavfi.black_start=10
//! lavfi.black_end=12
//! lavfi.black_start=60
//! lavfi.black_end=61.5
//! ```
//!
//! Each start/end pair becomes a [`BlackSection`], classified against the
//! minimum black duration and the resolved windows.

use super::types::{BlackSection, SectionState, Window};
use crate::error::{CoreError, CoreResult};
use crate::utils::{parse_seconds, seconds_to_duration};
use std::time::Duration;

/// Parses analyzer output into classified black sections, in detection order.
pub fn classify_black_sections(
    output: &str,
    min_black_seconds: f64,
    windows: &[Window],
) -> CoreResult<Vec<BlackSection>> {
    let timestamps = parse_timestamps(output)?;
    let min_black = seconds_to_duration(min_black_seconds).ok_or_else(|| {
        CoreError::Config(format!("invalid minimum black duration: {min_black_seconds}"))
    })?;

    if timestamps.len() % 2 != 0 {
        log::debug!(
            "Black detection returned an odd number of timestamps ({}); dropping the last one",
            timestamps.len()
        );
    }

    let sections: Vec<BlackSection> = timestamps
        .chunks_exact(2)
        .map(|pair| classify(pair[0], pair[1], min_black, windows))
        .collect();

    for section in &sections {
        log::debug!(
            "Black section {:.3}s - {:.3}s: {:?}",
            section.start.as_secs_f64(),
            section.finish.as_secs_f64(),
            section.state
        );
    }

    Ok(sections)
}

/// Extracts the value after the last `=` of every non-empty line.
pub fn parse_timestamps(output: &str) -> CoreResult<Vec<Duration>> {
    output
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(|line| {
            let value = line.rsplit('=').next().unwrap_or(line);
            parse_seconds(value)
                .and_then(seconds_to_duration)
                .ok_or_else(|| {
                    CoreError::BlackDetectParse(
                        line.to_string(),
                        "expected a non-negative number of seconds".to_string(),
                    )
                })
        })
        .collect()
}

fn classify(start: Duration, finish: Duration, min_black: Duration, windows: &[Window]) -> BlackSection {
    let mut section = BlackSection {
        start,
        finish,
        state: SectionState::Ok,
    };

    section.state = if start < min_black || section.duration() < min_black {
        SectionState::TooShort
    } else if !windows.iter().any(|w| w.contains(section.midpoint())) {
        SectionState::OutsideOfWindows
    } else {
        SectionState::Ok
    };

    section
}
