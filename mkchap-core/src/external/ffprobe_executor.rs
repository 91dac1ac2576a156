//! FFprobe integration for duration probing and black-frame detection.
//!
//! Duration comes from the `ffprobe` crate. Black detection runs ffprobe
//! directly with a lavfi `movie=...,blackdetect` source, because the frame
//! tags it prints are not exposed by the crate.

use crate::config::BlackDetectParams;
use crate::error::{CoreError, CoreResult, command_failed_error, command_start_error};
use crate::util::command::run_command;
use crate::utils::{parse_seconds, seconds_to_duration};
use ffprobe::{FfProbeError, ffprobe};
use std::path::Path;
use std::process::Command;
use std::time::Duration;

/// The frame analyzer and duration prober collaborators.
///
/// Implemented by [`CrateFfprobeExecutor`] for real files; tests provide
/// fakes returning canned output.
pub trait FfprobeExecutor {
    /// Total media duration, or `None` if ffprobe reports no usable value.
    fn get_duration(&self, input_path: &Path) -> CoreResult<Option<Duration>>;

    /// Raw `tag=<seconds>` lines for alternating black start/end events.
    fn detect_black_frames(&self, input_path: &Path, params: &BlackDetectParams)
    -> CoreResult<String>;
}

/// Concrete implementation of [`FfprobeExecutor`] running the ffprobe binary.
#[derive(Debug, Clone, Default)]
pub struct CrateFfprobeExecutor;

impl CrateFfprobeExecutor {
    pub fn new() -> Self {
        Self
    }
}

impl FfprobeExecutor for CrateFfprobeExecutor {
    fn get_duration(&self, input_path: &Path) -> CoreResult<Option<Duration>> {
        log::debug!(
            "Running ffprobe (via crate) for duration on: {}",
            input_path.display()
        );
        match ffprobe(input_path) {
            Ok(metadata) => {
                let duration = metadata
                    .format
                    .duration
                    .as_deref()
                    .and_then(parse_seconds)
                    .and_then(seconds_to_duration);
                if duration.is_none() {
                    log::warn!(
                        "ffprobe reported no usable duration for {}",
                        input_path.display()
                    );
                }
                Ok(duration)
            }
            Err(err) => {
                log::error!("ffprobe failed for duration on {}: {:?}", input_path.display(), err);
                Err(map_ffprobe_error(err, "duration"))
            }
        }
    }

    fn detect_black_frames(
        &self,
        input_path: &Path,
        params: &BlackDetectParams,
    ) -> CoreResult<String> {
        let args = black_detect_args(input_path, params, cfg!(windows));
        let output = run_command(Command::new("ffprobe").args(&args))?;
        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}

/// Builds the ffprobe arguments for a blackdetect run over `input_path`.
#[must_use]
pub fn black_detect_args(input_path: &Path, params: &BlackDetectParams, windows: bool) -> Vec<String> {
    let source = format!(
        "movie={},blackdetect=d={}:pic_th={}:pix_th={}[out0]",
        escape_filter_path(&input_path.to_string_lossy(), windows),
        params.min_black_seconds,
        params.ratio_black_pixels,
        params.black_pixel_threshold
    );

    [
        "-f",
        "lavfi",
        "-i",
        source.as_str(),
        "-show_entries",
        "frame_tags=lavfi.black_start,lavfi.black_end",
        "-of",
        "default=nw=1",
        "-v",
        "panic",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}

/// Escapes a path for embedding in a filtergraph `movie=` source.
///
/// Single quotes are escaped for both filtergraph levels. On Windows,
/// backslashes become forward slashes and the drive-letter colon is escaped.
#[must_use]
pub fn escape_filter_path(path: &str, windows: bool) -> String {
    let mut escaped = path.to_string();
    if windows {
        escaped = escaped.replace('\\', "/").replace(":/", r"\:/");
    }
    escaped.replace('\'', r"\\\'")
}

fn map_ffprobe_error(err: FfProbeError, context: &str) -> CoreError {
    match err {
        FfProbeError::Io(io_err) => command_start_error(format!("ffprobe ({context})"), io_err),
        FfProbeError::Status(output) => {
            let stderr = String::from_utf8_lossy(&output.stderr).into_owned();
            command_failed_error(format!("ffprobe ({context})"), output.status, stderr)
        }
        FfProbeError::Deserialize(err) => {
            CoreError::FfprobeParse(format!("ffprobe {context} output deserialization: {err}"))
        }
        _ => CoreError::FfprobeParse(format!("Unknown ffprobe error during {context}: {err:?}")),
    }
}
