//! Parsing of user supplied time windows.
//!
//! A window spec is a comma separated list of `start:finish` pairs in seconds,
//! e.g. `"0:300,-600:-60"`. Negative values count back from the end of the
//! media, so `-600:-60` on a one hour file covers 50:00 to 59:00.

use super::types::Window;
use crate::error::{CoreError, CoreResult};
use crate::utils::{parse_seconds, seconds_to_duration};
use std::time::Duration;

/// Parses a window spec against the media duration.
///
/// Returns a single window spanning the whole file when `spec` is `None` or
/// contains no entries.
pub fn parse_windows(spec: Option<&str>, duration: Duration) -> CoreResult<Vec<Window>> {
    let mut windows = Vec::new();

    for entry in spec
        .unwrap_or_default()
        .split(',')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
    {
        windows.push(parse_window(entry, duration)?);
    }

    if windows.is_empty() {
        windows.push(Window::new(Duration::ZERO, duration));
    }

    log::debug!("Resolved {} window(s): {:?}", windows.len(), windows);
    Ok(windows)
}

fn parse_window(entry: &str, duration: Duration) -> CoreResult<Window> {
    let parts: Vec<&str> = entry.split(':').collect();
    if parts.len() != 2 {
        return Err(CoreError::WindowSpec(
            entry.to_string(),
            "expected exactly one ':' between start and finish".to_string(),
        ));
    }

    let start = resolve_offset(entry, parts[0], duration)?;
    let finish = resolve_offset(entry, parts[1], duration)?;
    if start > finish {
        return Err(CoreError::WindowSpec(
            entry.to_string(),
            "start resolves after finish".to_string(),
        ));
    }

    Ok(Window::new(start, finish))
}

/// Resolves one side of a window; negative values are relative to the end.
fn resolve_offset(entry: &str, text: &str, duration: Duration) -> CoreResult<Duration> {
    let seconds = parse_seconds(text).ok_or_else(|| {
        CoreError::WindowSpec(entry.to_string(), format!("'{}' is not a number", text.trim()))
    })?;

    if seconds < 0.0 {
        // Offsets reaching before the start of the media clamp to zero.
        let back = seconds_to_duration(-seconds).unwrap_or(Duration::MAX);
        Ok(duration.saturating_sub(back))
    } else {
        seconds_to_duration(seconds).ok_or_else(|| {
            CoreError::WindowSpec(entry.to_string(), format!("'{}' is out of range", text.trim()))
        })
    }
}
