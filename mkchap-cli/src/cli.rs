// mkchap-cli/src/cli.rs
//
// Defines the command-line argument structures using clap.

use clap::Parser;
use mkchap_core::CoreConfig;
use mkchap_core::config::{
    DEFAULT_BLACK_PIXEL_THRESHOLD, DEFAULT_MIN_BLACK_SECONDS, DEFAULT_RATIO_BLACK_PIXELS,
};
use std::path::PathBuf;

// --- CLI Argument Definition ---

#[derive(Parser, Debug)]
#[command(
    author,
    version, // Reads from Cargo.toml via "cargo" feature in clap
    about = "mkchap: chapter markers from black frames",
    long_about = "Detects black-frame transitions with ffprobe and derives chapter markers \
                  from them. Optionally writes the chapters into a stream-copied container \
                  with ffmpeg."
)]
pub struct Cli {
    /// Video file to analyze
    #[arg(required = true, value_name = "INPUT")]
    pub input: PathBuf,

    /// Minimum length in seconds of a black section that can mark a chapter
    #[arg(short = 's', long = "seconds", value_name = "SECONDS", default_value_t = DEFAULT_MIN_BLACK_SECONDS)]
    pub min_black_seconds: f64,

    /// Ratio of black pixels for a frame to count as black (blackdetect pic_th)
    #[arg(short = 'r', long = "ratio", value_name = "RATIO", default_value_t = DEFAULT_RATIO_BLACK_PIXELS)]
    pub ratio_black_pixels: f64,

    /// Luminance threshold for a pixel to count as black (blackdetect pix_th)
    #[arg(short = 'b', long = "black", value_name = "THRESHOLD", default_value_t = DEFAULT_BLACK_PIXEL_THRESHOLD)]
    pub black_pixel_threshold: f64,

    /// Comma-separated START:FINISH windows in seconds; negative values count
    /// back from the end (e.g. "0:300,-600:-60")
    #[arg(short = 'w', long = "windows", value_name = "SPEC", allow_hyphen_values = true)]
    pub windows: Option<String>,

    /// Write the chapters into this file (may be the input file itself)
    #[arg(short = 'o', long = "output", value_name = "OUTPUT")]
    pub output: Option<PathBuf>,

    /// Print the report as JSON
    #[arg(long, default_value_t = false)]
    pub json: bool,

    /// Enable debug logging
    #[arg(short, long, default_value_t = false)]
    pub verbose: bool,
}

impl Cli {
    /// Builds the core configuration described by these arguments.
    pub fn to_config(&self) -> CoreConfig {
        CoreConfig {
            input_file: self.input.clone(),
            output_file: self.output.clone(),
            min_black_seconds: self.min_black_seconds,
            ratio_black_pixels: self.ratio_black_pixels,
            black_pixel_threshold: self.black_pixel_threshold,
            windows: self.windows.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::parse_from(["mkchap", "movie.mkv"]);
        assert_eq!(cli.input, PathBuf::from("movie.mkv"));
        assert_eq!(cli.min_black_seconds, 1.0);
        assert_eq!(cli.ratio_black_pixels, 0.9);
        assert_eq!(cli.black_pixel_threshold, 0.1);
        assert!(cli.windows.is_none());
        assert!(cli.output.is_none());
        assert!(!cli.json);
        assert!(!cli.verbose);
    }

    #[test]
    fn test_all_options() {
        let cli = Cli::parse_from([
            "mkchap", "-s", "2.5", "-r", "0.8", "-b", "0.05", "-w", "0:300", "-o", "out.mkv",
            "--json", "-v", "movie.mkv",
        ]);
        let config = cli.to_config();
        assert_eq!(config.input_file, PathBuf::from("movie.mkv"));
        assert_eq!(config.output_file, Some(PathBuf::from("out.mkv")));
        assert_eq!(config.min_black_seconds, 2.5);
        assert_eq!(config.ratio_black_pixels, 0.8);
        assert_eq!(config.black_pixel_threshold, 0.05);
        assert_eq!(config.windows.as_deref(), Some("0:300"));
        assert!(cli.json);
        assert!(cli.verbose);
    }

    #[test]
    fn test_negative_window_offsets() {
        let cli = Cli::parse_from(["mkchap", "--windows", "-600:-60", "movie.mkv"]);
        assert_eq!(cli.windows.as_deref(), Some("-600:-60"));
        let cli = Cli::parse_from(["mkchap", "-w", "-10:-2,0:30", "movie.mkv"]);
        assert_eq!(cli.windows.as_deref(), Some("-10:-2,0:30"));
    }

    #[test]
    fn test_missing_input_is_an_error() {
        assert!(Cli::try_parse_from(["mkchap"]).is_err());
    }

    #[test]
    fn test_non_numeric_threshold_is_an_error() {
        assert!(Cli::try_parse_from(["mkchap", "-s", "long", "movie.mkv"]).is_err());
    }
}
