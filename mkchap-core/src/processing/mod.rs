//! Black-section classification and chapter derivation.
//!
//! This module holds the core of mkchap: turning the raw output of the
//! black-frame analyzer into classified sections, and accepted sections into
//! a contiguous chapter list. The `pipeline` submodule wires these steps to
//! the external collaborators.

/// Parsing and classification of detected black intervals
pub mod black_sections;

/// Chapter boundaries from accepted black sections
pub mod chapters;

/// Run orchestration: probe, detect, classify, build, write
pub mod pipeline;

/// Windows, sections, chapters and the analysis result
pub mod types;

/// User supplied time windows
pub mod windows;

pub use black_sections::{classify_black_sections, parse_timestamps};
pub use chapters::build_chapters;
pub use pipeline::{analyze_black_output, analyze_file, process_file};
pub use types::{AnalysisResult, BlackSection, Chapter, SectionState, Window};
pub use windows::parse_windows;
