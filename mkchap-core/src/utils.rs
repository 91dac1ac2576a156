//! Utility functions for time conversion and formatting.
//!
//! This module provides the conversions between the decimal seconds that
//! ffmpeg/ffprobe print and `std::time::Duration`, plus the formatting used by
//! reports and FFMETADATA output.

use std::time::Duration;

const NANOS_PER_SEC: f64 = 1_000_000_000.0;
const NANOS_PER_MILLI: u128 = 1_000_000;

/// Converts decimal seconds to a Duration, rounding to the nearest nanosecond.
/// Returns None for negative, NaN or infinite input.
#[must_use]
pub fn seconds_to_duration(seconds: f64) -> Option<Duration> {
    if !seconds.is_finite() || seconds < 0.0 {
        return None;
    }
    let nanos = (seconds * NANOS_PER_SEC).round();
    if nanos >= u64::MAX as f64 {
        return None;
    }
    Some(Duration::from_nanos(nanos as u64))
}

/// Parses a `.`-decimal seconds value (e.g. "60.750000"). Returns None if invalid.
#[must_use]
pub fn parse_seconds(text: &str) -> Option<f64> {
    let trimmed = text.trim();
    // f64::from_str accepts "inf" and "nan", which never come from ffprobe
    if trimmed.is_empty() || trimmed.chars().any(|c| c.is_ascii_alphabetic() && c != 'e' && c != 'E') {
        return None;
    }
    trimmed.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Formats a Duration as whole or fractional milliseconds using `.` as the
/// decimal point (e.g. 11s -> "11000", 1.2345s -> "1234.5").
#[must_use]
pub fn format_milliseconds(value: Duration) -> String {
    let nanos = value.as_nanos();
    let millis = nanos / NANOS_PER_MILLI;
    let fraction = nanos % NANOS_PER_MILLI;
    if fraction == 0 {
        return millis.to_string();
    }
    let digits = format!("{fraction:06}");
    format!("{millis}.{}", digits.trim_end_matches('0'))
}

/// Formats a Duration as HH:MM:SS.mmm (e.g. 3725.5s -> "01:02:05.500").
#[must_use]
pub fn format_timestamp(value: Duration) -> String {
    let total_seconds = value.as_secs();
    let hours = total_seconds / 3600;
    let minutes = (total_seconds % 3600) / 60;
    let secs = total_seconds % 60;
    let millis = value.subsec_millis();
    format!("{hours:02}:{minutes:02}:{secs:02}.{millis:03}")
}

/// Serde helper rendering a Duration as floating-point seconds.
pub mod duration_secs {
    use serde::Serializer;
    use std::time::Duration;

    pub fn serialize<S: Serializer>(value: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_f64(value.as_secs_f64())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seconds_to_duration() {
        assert_eq!(seconds_to_duration(0.0), Some(Duration::ZERO));
        assert_eq!(seconds_to_duration(60.75), Some(Duration::from_millis(60_750)));
        assert_eq!(seconds_to_duration(12.345), Some(Duration::from_millis(12_345)));
        assert_eq!(seconds_to_duration(-0.5), None);
        assert_eq!(seconds_to_duration(f64::NAN), None);
        assert_eq!(seconds_to_duration(f64::INFINITY), None);
    }

    #[test]
    fn test_parse_seconds() {
        assert_eq!(parse_seconds("120.000000\n"), Some(120.0));
        assert_eq!(parse_seconds(" 61.5 "), Some(61.5));
        assert_eq!(parse_seconds("-10"), Some(-10.0));
        assert_eq!(parse_seconds("1e2"), Some(100.0));
        assert_eq!(parse_seconds("N/A"), None);
        assert_eq!(parse_seconds("inf"), None);
        assert_eq!(parse_seconds("1,5"), None);
        assert_eq!(parse_seconds(""), None);
    }

    #[test]
    fn test_format_milliseconds() {
        assert_eq!(format_milliseconds(Duration::ZERO), "0");
        assert_eq!(format_milliseconds(Duration::from_secs(11)), "11000");
        assert_eq!(format_milliseconds(Duration::from_millis(60_750)), "60750");
        assert_eq!(format_milliseconds(Duration::from_micros(1_234_500)), "1234.5");
        assert_eq!(format_milliseconds(Duration::from_nanos(1_000_001)), "1.000001");
    }

    #[test]
    fn test_format_timestamp() {
        assert_eq!(format_timestamp(Duration::ZERO), "00:00:00.000");
        assert_eq!(format_timestamp(Duration::from_millis(3_725_500)), "01:02:05.500");
        assert_eq!(format_timestamp(Duration::from_millis(60_750)), "00:01:00.750");
    }
}
