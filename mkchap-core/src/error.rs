// ============================================================================
// mkchap-core/src/error.rs
// ============================================================================
//
// ERROR HANDLING: Custom Error Types for mkchap-core
//
// A single error enum covers everything the core library can fail at:
// spawning and waiting on ffmpeg/ffprobe, parsing their output, parsing user
// supplied window specs and validating configuration.
//
// KEY COMPONENTS:
// - CoreError: Enum of all error conditions
// - CoreResult: Type alias for Result<T, CoreError>
// - Helper constructors for command failures

use std::io;
use std::process::ExitStatus;
use thiserror::Error;

/// Errors that can occur while detecting black sections or writing chapters.
#[derive(Error, Debug)]
pub enum CoreError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Failed to execute {0}: {1}")]
    CommandStart(String, io::Error),

    #[error("Failed to wait for {0}: {1}")]
    CommandWait(String, io::Error),

    #[error("Command {0} failed with status {1}. Stderr: {2}")]
    CommandFailed(String, ExitStatus, String),

    #[error("Required external command '{0}' not found. Please install it.")]
    DependencyNotFound(String),

    #[error("ffprobe error: {0}")]
    FfprobeParse(String),

    #[error("Invalid window spec '{0}': {1}")]
    WindowSpec(String, String),

    #[error("Invalid black-detect output line '{0}': {1}")]
    BlackDetectParse(String, String),

    #[error("Invalid FFMETADATA: {0}")]
    MetadataParse(String),

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("Input file not found: {0}")]
    InputNotFound(String),

    #[error("Operation failed: {0}")]
    OperationFailed(String),
}

/// Result type for mkchap-core operations.
pub type CoreResult<T> = Result<T, CoreError>;

pub fn command_start_error(cmd: impl Into<String>, err: io::Error) -> CoreError {
    CoreError::CommandStart(cmd.into(), err)
}

pub fn command_wait_error(cmd: impl Into<String>, err: io::Error) -> CoreError {
    CoreError::CommandWait(cmd.into(), err)
}

pub fn command_failed_error(
    cmd: impl Into<String>,
    status: ExitStatus,
    stderr: impl Into<String>,
) -> CoreError {
    CoreError::CommandFailed(cmd.into(), status, stderr.into())
}

impl CoreError {
    /// Whether this error was caused by invalid user input rather than a
    /// failure while running.
    #[must_use]
    pub fn is_usage_error(&self) -> bool {
        matches!(self, CoreError::Config(_) | CoreError::InputNotFound(_))
    }
}
