//! Data types shared by the window parser, classifier and chapter builder.

use crate::utils::duration_secs;
use serde::Serialize;
use std::time::Duration;

/// An inclusive time range in which black sections may become chapter boundaries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Window {
    #[serde(with = "duration_secs")]
    pub start: Duration,
    #[serde(with = "duration_secs")]
    pub finish: Duration,
}

impl Window {
    pub fn new(start: Duration, finish: Duration) -> Self {
        Self { start, finish }
    }

    /// True if `time` lies within `[start, finish]`.
    #[must_use]
    pub fn contains(&self, time: Duration) -> bool {
        time >= self.start && time <= self.finish
    }
}

/// Outcome of classifying a detected black interval.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SectionState {
    /// Starts before `min_black_seconds` or lasts less than it.
    TooShort,
    /// Midpoint falls inside none of the windows.
    OutsideOfWindows,
    /// Accepted as a chapter boundary.
    Ok,
}

/// A detected black interval and its classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BlackSection {
    #[serde(with = "duration_secs")]
    pub start: Duration,
    #[serde(with = "duration_secs")]
    pub finish: Duration,
    pub state: SectionState,
}

impl BlackSection {
    #[must_use]
    pub fn duration(&self) -> Duration {
        self.finish.saturating_sub(self.start)
    }

    #[must_use]
    pub fn midpoint(&self) -> Duration {
        self.start + self.duration() / 2
    }

    #[must_use]
    pub fn is_ok(&self) -> bool {
        self.state == SectionState::Ok
    }
}

/// One chapter span in the final output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Chapter {
    #[serde(with = "duration_secs")]
    pub start: Duration,
    #[serde(with = "duration_secs")]
    pub finish: Duration,
}

impl Chapter {
    pub fn new(start: Duration, finish: Duration) -> Self {
        Self { start, finish }
    }
}

/// Everything a single analysis run produced, for reporting.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalysisResult {
    #[serde(with = "duration_secs")]
    pub duration: Duration,
    pub windows: Vec<Window>,
    pub sections: Vec<BlackSection>,
    pub chapters: Vec<Chapter>,
}

impl AnalysisResult {
    /// Number of chapter markers (boundaries between chapters).
    #[must_use]
    pub fn boundaries(&self) -> usize {
        self.chapters.len().saturating_sub(1)
    }
}
