//! Single-file chapterization pipeline.
//!
//! Steps run strictly one after another: duration probe, window parsing,
//! black detection, classification and chapter building, then the optional
//! write-back. Every external call is attempted exactly once.

use super::black_sections::classify_black_sections;
use super::chapters::build_chapters;
use super::types::{AnalysisResult, Window};
use super::windows::parse_windows;
use crate::config::CoreConfig;
use crate::error::CoreResult;
use crate::external::{FfmpegSpawner, FfprobeExecutor, write_chapter_metadata};
use std::time::Duration;

/// Classifies raw analyzer output and derives chapters for a file of length `duration`.
pub fn analyze_black_output(
    output: &str,
    duration: Duration,
    min_black_seconds: f64,
    windows_spec: Option<&str>,
) -> CoreResult<AnalysisResult> {
    let windows = parse_windows(windows_spec, duration)?;
    analyze_with_windows(output, duration, min_black_seconds, windows)
}

fn analyze_with_windows(
    output: &str,
    duration: Duration,
    min_black_seconds: f64,
    windows: Vec<Window>,
) -> CoreResult<AnalysisResult> {
    let sections = classify_black_sections(output, min_black_seconds, &windows)?;
    let chapters = build_chapters(&sections, duration);

    Ok(AnalysisResult {
        duration,
        windows,
        sections,
        chapters,
    })
}

/// Probes and analyzes `config.input_file`.
///
/// Returns `Ok(None)` when ffprobe reports no usable duration; nothing else
/// is run in that case.
pub fn analyze_file<P: FfprobeExecutor>(
    ffprobe: &P,
    config: &CoreConfig,
) -> CoreResult<Option<AnalysisResult>> {
    let input = &config.input_file;

    let Some(duration) = ffprobe.get_duration(input)? else {
        log::warn!("No duration available for {}; nothing to do", input.display());
        return Ok(None);
    };
    log::info!("Duration of {}: {:.3}s", input.display(), duration.as_secs_f64());

    // Fail on a bad window spec before the (slow) black-frame scan.
    let windows = parse_windows(config.windows.as_deref(), duration)?;

    log::info!("Detecting black frames in {}", input.display());
    let output = ffprobe.detect_black_frames(input, &config.black_detect_params())?;

    let result = analyze_with_windows(&output, duration, config.min_black_seconds, windows)?;
    log::info!(
        "Found {} black section(s), {} accepted, {} chapter(s)",
        result.sections.len(),
        result.sections.iter().filter(|s| s.is_ok()).count(),
        result.chapters.len()
    );

    Ok(Some(result))
}

/// Analyzes `config.input_file` and, if `config.output_file` is set, writes
/// the derived chapters into it.
pub fn process_file<P: FfprobeExecutor, S: FfmpegSpawner>(
    ffprobe: &P,
    spawner: &S,
    config: &CoreConfig,
) -> CoreResult<Option<AnalysisResult>> {
    let Some(result) = analyze_file(ffprobe, config)? else {
        return Ok(None);
    };

    if let Some(output) = &config.output_file {
        log::info!("Writing chapters to {}", output.display());
        write_chapter_metadata(spawner, &config.input_file, output, &result.chapters)?;
        log::info!("Created {} chapter markers", result.boundaries());
    }

    Ok(Some(result))
}
