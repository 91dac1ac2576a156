//! Core library for deriving chapter markers from black-frame transitions.
//!
//! This crate detects black intervals in a video with ffprobe's `blackdetect`
//! filter, classifies them against a minimum duration and optional time
//! windows, turns the accepted ones into chapter boundaries and writes the
//! chapters back into the container with ffmpeg.
//!
//! ## Usage Example
//!
//! ```rust,no_run
//! use mkchap_core::config::CoreConfigBuilder;
//! use mkchap_core::external::{CrateFfprobeExecutor, SidecarSpawner};
//! use std::path::PathBuf;
//!
//! let config = CoreConfigBuilder::new()
//!     .input_file(PathBuf::from("/path/to/episode.mkv"))
//!     .output_file(PathBuf::from("/path/to/episode.chapters.mkv"))
//!     .windows("0:600")
//!     .build();
//! config.validate().unwrap();
//!
//! if let Some(result) = mkchap_core::process_file(&CrateFfprobeExecutor::new(), &SidecarSpawner, &config).unwrap() {
//!     println!("{} chapters", result.chapters.len());
//! }
//! ```

pub mod config;
pub mod error;
pub mod external;
pub mod metadata;
pub mod processing;
pub mod temp_files;
pub mod util;
pub mod utils;

// Re-exports for public API
pub use config::{BlackDetectParams, CoreConfig, CoreConfigBuilder};
pub use error::{CoreError, CoreResult};
pub use metadata::{format_ffmetadata, parse_ffmetadata};
pub use processing::{
    AnalysisResult, BlackSection, Chapter, SectionState, Window, analyze_black_output,
    analyze_file, build_chapters, classify_black_sections, parse_windows, process_file,
};
pub use utils::{format_milliseconds, format_timestamp};
