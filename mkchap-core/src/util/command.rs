//! Blocking execution of external commands.
//!
//! Commands run one at a time and are waited on without a timeout; a hung
//! tool hangs the run.

use std::process::{Command, Output, Stdio};

use crate::error::{CoreResult, command_failed_error, command_start_error};

/// Logs the full command line at debug level.
pub fn log_command(cmd: &Command) {
    let program = cmd.get_program().to_string_lossy();
    let args: Vec<_> = cmd.get_args().map(|arg| arg.to_string_lossy()).collect();

    log::debug!("Executing command: {} {}", program, args.join(" "));
}

/// Executes a command, capturing stdout and stderr.
///
/// A non-zero exit status is returned as `CoreError::CommandFailed` carrying
/// the command's stderr.
pub fn run_command(cmd: &mut Command) -> CoreResult<Output> {
    log_command(cmd);
    let name = cmd.get_program().to_string_lossy().into_owned();

    let output = cmd
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .output()
        .map_err(|e| {
            log::error!("Failed to execute command {}: {}", name, e);
            command_start_error(&name, e)
        })?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
        log::error!(
            "Command {} failed with exit code {}: {}",
            name,
            output.status.code().unwrap_or(-1),
            stderr
        );
        return Err(command_failed_error(name, output.status, stderr));
    }

    Ok(output)
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;
    use crate::error::CoreError;

    #[test]
    fn test_run_command_captures_stdout() {
        let output = run_command(Command::new("sh").args(["-c", "echo black_start=1"])).unwrap();
        assert_eq!(String::from_utf8_lossy(&output.stdout).trim(), "black_start=1");
    }

    #[test]
    fn test_run_command_nonzero_exit() {
        let result = run_command(Command::new("sh").args(["-c", "echo boom >&2; exit 3"]));
        match result {
            Err(CoreError::CommandFailed(name, status, stderr)) => {
                assert_eq!(name, "sh");
                assert_eq!(status.code(), Some(3));
                assert_eq!(stderr, "boom");
            }
            other => panic!("expected CommandFailed, got {other:?}"),
        }
    }

    #[test]
    fn test_run_command_missing_binary() {
        let result = run_command(&mut Command::new("mkchap-no-such-binary"));
        assert!(matches!(result, Err(CoreError::CommandStart(_, _))));
    }
}
