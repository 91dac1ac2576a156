// ============================================================================
// mkchap-core/src/external/ffmpeg_executor.rs
// ============================================================================
//
// FFMPEG EXECUTOR: FFmpeg Process Management and Chapter Write-Back
//
// This module provides abstractions for spawning and interacting with FFmpeg
// processes, and the metadata writer that remuxes a file with a generated
// FFMETADATA chapter list.
//
// KEY COMPONENTS:
// - FfmpegProcess: Trait representing an active FFmpeg process
// - FfmpegSpawner: Trait for creating new FFmpeg processes
// - SidecarSpawner: Concrete implementation using ffmpeg-sidecar
// - write_chapter_metadata: Stream-copy remux with replaced chapters

use crate::error::{CoreError, CoreResult, command_failed_error, command_start_error, command_wait_error};
use crate::metadata::format_ffmetadata;
use crate::processing::Chapter;
use crate::temp_files;
use ffmpeg_sidecar::child::FfmpegChild as SidecarChild;
use ffmpeg_sidecar::command::FfmpegCommand;
use ffmpeg_sidecar::event::{FfmpegEvent, LogLevel};
use std::path::Path;
use std::process::ExitStatus;

// --- FFmpeg Execution Abstraction ---

/// Trait representing an active ffmpeg process instance.
pub trait FfmpegProcess {
    /// Processes events from the running command using a provided handler closure.
    fn handle_events<F>(&mut self, handler: F) -> CoreResult<()>
    where
        F: FnMut(FfmpegEvent) -> CoreResult<()>;

    /// Waits for the command to complete and returns its exit status.
    fn wait(&mut self) -> CoreResult<ExitStatus>;
}

/// Trait representing something that can spawn an FfmpegProcess.
pub trait FfmpegSpawner {
    type Process: FfmpegProcess;
    /// Spawns the ffmpeg command, consuming the command object.
    fn spawn(&self, cmd: FfmpegCommand) -> CoreResult<Self::Process>;
}

// --- Concrete Implementation using ffmpeg-sidecar ---

/// Wrapper around `ffmpeg_sidecar::child::FfmpegChild` implementing `FfmpegProcess`.
pub struct SidecarProcess(SidecarChild);

impl FfmpegProcess for SidecarProcess {
    fn handle_events<F>(&mut self, mut handler: F) -> CoreResult<()>
    where
        F: FnMut(FfmpegEvent) -> CoreResult<()>,
    {
        let iterator = self.0.iter().map_err(|e| {
            log::error!("Failed to get ffmpeg event iterator: {}", e);
            command_failed_error("ffmpeg (sidecar - get iter)", ExitStatus::default(), e.to_string())
        })?;
        for event in iterator {
            handler(event)?;
        }
        Ok(())
    }

    fn wait(&mut self) -> CoreResult<ExitStatus> {
        self.0
            .wait()
            .map_err(|e| command_wait_error("ffmpeg (sidecar)", e))
    }
}

/// Concrete implementation of `FfmpegSpawner` using `ffmpeg-sidecar`.
#[derive(Debug, Clone, Default)]
pub struct SidecarSpawner;

impl FfmpegSpawner for SidecarSpawner {
    type Process = SidecarProcess;

    fn spawn(&self, mut cmd: FfmpegCommand) -> CoreResult<Self::Process> {
        cmd.spawn()
            .map(SidecarProcess)
            .map_err(|e| command_start_error("ffmpeg (sidecar)", e))
    }
}

// --- Chapter Write-Back ---

/// Writes `chapters` into a stream-copied version of `input_path` at `output_path`.
///
/// The chapter list is passed to ffmpeg through a temporary FFMETADATA file
/// that is removed on every exit path. When `output_path` is the input file
/// itself, ffmpeg writes to a temporary file beside it which then atomically
/// replaces the original.
pub fn write_chapter_metadata<S: FfmpegSpawner>(
    spawner: &S,
    input_path: &Path,
    output_path: &Path,
    chapters: &[Chapter],
) -> CoreResult<()> {
    let metadata_file = temp_files::create_metadata_file(&format_ffmetadata(chapters))?;
    log::debug!(
        "Wrote {} chapter(s) to metadata file {}",
        chapters.len(),
        metadata_file.display()
    );

    if is_same_file(input_path, output_path) {
        let temp_output = temp_files::create_sibling_temp_file(output_path)?;
        run_remux(spawner, input_path, &temp_output, &metadata_file)?;
        temp_output
            .persist(output_path)
            .map_err(|e| CoreError::Io(e.error))?;
        log::debug!("Replaced {} in place", output_path.display());
    } else {
        run_remux(spawner, input_path, output_path, &metadata_file)?;
    }

    Ok(())
}

/// Builds the stream-copy remux command that takes chapters and global
/// metadata from the second input.
#[must_use]
pub fn build_remux_command(input_path: &Path, output_path: &Path, metadata_path: &Path) -> FfmpegCommand {
    let mut cmd = FfmpegCommand::new();
    cmd.hide_banner()
        .args(["-v", "level+error"])
        .input(input_path.to_string_lossy().as_ref())
        .input(metadata_path.to_string_lossy().as_ref())
        .args(["-map_metadata", "1", "-map_chapters", "1", "-codec", "copy"])
        .overwrite()
        .output(output_path.to_string_lossy().as_ref());
    cmd
}

fn run_remux<S: FfmpegSpawner>(
    spawner: &S,
    input_path: &Path,
    output_path: &Path,
    metadata_path: &Path,
) -> CoreResult<()> {
    let mut cmd = build_remux_command(input_path, output_path, metadata_path);
    log::debug!("Executing command: {:?}", cmd.as_inner());

    let mut process = spawner.spawn(cmd)?;
    let mut errors: Vec<String> = Vec::new();
    process.handle_events(|event| {
        match event {
            // Lines without a recognizable level prefix arrive as Unknown.
            FfmpegEvent::Error(message)
            | FfmpegEvent::Log(LogLevel::Error | LogLevel::Fatal | LogLevel::Unknown, message) => {
                log::debug!("ffmpeg: {}", message);
                errors.push(message);
            }
            _ => {}
        }
        Ok(())
    })?;

    let status = process.wait()?;
    if !status.success() {
        log::error!("ffmpeg remux of {} failed: {}", input_path.display(), errors.join("; "));
        return Err(command_failed_error("ffmpeg", status, errors.join("\n")));
    }

    Ok(())
}

fn is_same_file(a: &Path, b: &Path) -> bool {
    if a == b {
        return true;
    }
    match (a.canonicalize(), b.canonicalize()) {
        (Ok(a), Ok(b)) => a == b,
        _ => false,
    }
}
