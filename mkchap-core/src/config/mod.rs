//! Configuration structures and constants for the mkchap-core library.
//!
//! This module provides the configuration for a single chapterization run:
//! the input and output paths, the black-detection thresholds and the
//! optional window spec.

mod builder;

use crate::error::{CoreError, CoreResult};
use std::path::PathBuf;

pub use builder::CoreConfigBuilder;

// Default constants

/// Default minimum length (seconds) of a black interval. Intervals starting
/// earlier than this, or shorter than this, never become chapter boundaries.
pub const DEFAULT_MIN_BLACK_SECONDS: f64 = 1.0;

/// Default ratio of black pixels a picture needs to be considered black
/// (blackdetect `pic_th`).
pub const DEFAULT_RATIO_BLACK_PIXELS: f64 = 0.9;

/// Default luminance threshold for a pixel to count as black
/// (blackdetect `pix_th`). May need raising if black isn't fully black.
pub const DEFAULT_BLACK_PIXEL_THRESHOLD: f64 = 0.1;

/// Main configuration structure for the mkchap-core library.
///
/// Usually created by the CLI from its arguments and passed to
/// [`crate::analyze_file`] / [`crate::process_file`].
///
/// # Examples
///
/// ```rust
/// use mkchap_core::config::CoreConfigBuilder;
/// use std::path::PathBuf;
///
/// let config = CoreConfigBuilder::new()
///     .input_file(PathBuf::from("/path/to/movie.mkv"))
///     .output_file(PathBuf::from("/path/to/movie.chapters.mkv"))
///     .min_black_seconds(2.0)
///     .windows("0:600,-600:-1")
///     .build();
/// assert_eq!(config.ratio_black_pixels, 0.9);
/// ```
#[derive(Debug, Clone)]
pub struct CoreConfig {
    /// Video file to analyze
    pub input_file: PathBuf,

    /// Where to write the chaptered copy; `None` only reports
    pub output_file: Option<PathBuf>,

    /// Minimum black interval length in seconds
    pub min_black_seconds: f64,

    /// Ratio of black pixels for a picture to count as black (0.0-1.0)
    pub ratio_black_pixels: f64,

    /// Luminance threshold for a pixel to count as black (0.0-1.0)
    pub black_pixel_threshold: f64,

    /// Comma separated `start:finish` windows in seconds; negative values
    /// count from the end of the file
    pub windows: Option<String>,
}

impl Default for CoreConfig {
    fn default() -> Self {
        Self {
            input_file: PathBuf::new(),
            output_file: None,
            min_black_seconds: DEFAULT_MIN_BLACK_SECONDS,
            ratio_black_pixels: DEFAULT_RATIO_BLACK_PIXELS,
            black_pixel_threshold: DEFAULT_BLACK_PIXEL_THRESHOLD,
            windows: None,
        }
    }
}

impl CoreConfig {
    pub fn new(input_file: PathBuf) -> Self {
        Self {
            input_file,
            ..Default::default()
        }
    }

    /// Validates the configuration before any external tool is run.
    pub fn validate(&self) -> CoreResult<()> {
        if !self.input_file.is_file() {
            return Err(CoreError::InputNotFound(self.input_file.display().to_string()));
        }

        if !self.min_black_seconds.is_finite() || self.min_black_seconds < 0.0 {
            return Err(CoreError::Config(format!(
                "minimum black seconds must be a non-negative number, got {}",
                self.min_black_seconds
            )));
        }

        for (name, value) in [
            ("black pixel ratio", self.ratio_black_pixels),
            ("black pixel threshold", self.black_pixel_threshold),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(CoreError::Config(format!(
                    "{name} must be between 0.0 and 1.0, got {value}"
                )));
            }
        }

        Ok(())
    }

    /// Thresholds handed to the black-frame analyzer.
    #[must_use]
    pub fn black_detect_params(&self) -> BlackDetectParams {
        BlackDetectParams {
            min_black_seconds: self.min_black_seconds,
            ratio_black_pixels: self.ratio_black_pixels,
            black_pixel_threshold: self.black_pixel_threshold,
        }
    }
}

/// Thresholds for ffmpeg's `blackdetect` filter.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BlackDetectParams {
    /// `d`: minimum detected black duration in seconds
    pub min_black_seconds: f64,
    /// `pic_th`: ratio of black pixels for a picture to be black
    pub ratio_black_pixels: f64,
    /// `pix_th`: luminance threshold for a pixel to be black
    pub black_pixel_threshold: f64,
}

impl Default for BlackDetectParams {
    fn default() -> Self {
        CoreConfig::default().black_detect_params()
    }
}
