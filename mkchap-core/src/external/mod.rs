// ============================================================================
// mkchap-core/src/external/mod.rs
// ============================================================================
//
// EXTERNAL TOOLS: Interactions with ffprobe and ffmpeg
//
// This module encapsulates the three external collaborators of the pipeline:
// the duration prober and black-frame analyzer (ffprobe) and the metadata
// writer (ffmpeg). Each sits behind a trait so the classification and chapter
// logic can be exercised with canned output instead of real binaries.
//
// KEY COMPONENTS:
// - FfprobeExecutor / CrateFfprobeExecutor: duration and black detection
// - FfmpegSpawner / SidecarSpawner: ffmpeg process creation
// - write_chapter_metadata: remux with a generated chapter list
// - check_dependency: verifies a tool can be started

use crate::error::{CoreError, CoreResult};

use std::io;
use std::process::{Command, Stdio};

/// Contains traits and implementations for executing ffmpeg commands
pub mod ffmpeg_executor;

/// Contains traits and implementations for executing ffprobe commands
pub mod ffprobe_executor;

/// Canned collaborators for running the pipeline without ffmpeg installed
/// (`test-mocks` feature)
pub mod mocks;

pub use ffmpeg_executor::{
    FfmpegProcess, FfmpegSpawner, SidecarProcess, SidecarSpawner, build_remux_command,
    write_chapter_metadata,
};
pub use ffprobe_executor::{
    CrateFfprobeExecutor, FfprobeExecutor, black_detect_args, escape_filter_path,
};

/// Checks if a required external command is available and executable.
///
/// Runs `<cmd_name> -version` with output discarded. Only a failure to start
/// the command counts; the exit status is ignored.
pub fn check_dependency(cmd_name: &str) -> CoreResult<()> {
    log::debug!("Executing command: {} -version", cmd_name);
    let result = Command::new(cmd_name)
        .arg("-version")
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status();

    match result {
        Ok(_) => {
            log::debug!("Found dependency: {}", cmd_name);
            Ok(())
        }
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            log::warn!("Dependency '{}' not found.", cmd_name);
            Err(CoreError::DependencyNotFound(cmd_name.to_string()))
        }
        Err(e) => {
            log::error!("Failed to start dependency check command '{}': {}", cmd_name, e);
            Err(CoreError::CommandStart(cmd_name.to_string(), e))
        }
    }
}
