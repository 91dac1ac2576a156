// ============================================================================
// mkchap-core/src/config/builder.rs
// ============================================================================
//
// CONFIGURATION BUILDER: Builder Pattern for CoreConfig
//
// Fluent construction of CoreConfig with the default thresholds filled in.
// Validation happens separately in CoreConfig::validate so that the CLI can
// report bad arguments before touching any external tool.

use std::path::PathBuf;

use super::CoreConfig;

/// Builder for creating CoreConfig instances.
///
/// # Examples
///
/// ```rust
/// use mkchap_core::config::CoreConfigBuilder;
/// use std::path::PathBuf;
///
/// let config = CoreConfigBuilder::new()
///     .input_file(PathBuf::from("episode.mkv"))
///     .ratio_black_pixels(0.95)
///     .build();
/// assert!(config.output_file.is_none());
/// ```
#[derive(Debug, Clone, Default)]
pub struct CoreConfigBuilder {
    config: CoreConfig,
}

impl CoreConfigBuilder {
    /// Creates a new CoreConfigBuilder with default thresholds.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the video file to analyze.
    pub fn input_file(mut self, input_file: PathBuf) -> Self {
        self.config.input_file = input_file;
        self
    }

    /// Sets the output file. The input file itself may be given to update it in place.
    pub fn output_file(mut self, output_file: PathBuf) -> Self {
        self.config.output_file = Some(output_file);
        self
    }

    /// Sets the minimum black interval length in seconds.
    pub fn min_black_seconds(mut self, seconds: f64) -> Self {
        self.config.min_black_seconds = seconds;
        self
    }

    /// Sets the ratio of black pixels for a picture to count as black.
    pub fn ratio_black_pixels(mut self, ratio: f64) -> Self {
        self.config.ratio_black_pixels = ratio;
        self
    }

    /// Sets the luminance threshold for a pixel to count as black.
    pub fn black_pixel_threshold(mut self, threshold: f64) -> Self {
        self.config.black_pixel_threshold = threshold;
        self
    }

    /// Sets the window spec, e.g. `"0:300,-300:-1"`.
    pub fn windows(mut self, windows: impl Into<String>) -> Self {
        self.config.windows = Some(windows.into());
        self
    }

    /// Builds the CoreConfig.
    pub fn build(self) -> CoreConfig {
        self.config
    }
}
