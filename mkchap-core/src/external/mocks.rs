//! Canned implementations of the external tool traits.
//!
//! These let the pipeline run without ffmpeg or ffprobe installed: the
//! ffprobe mock returns a fixed duration and black-detect output, and the
//! ffmpeg mock records each command, captures the metadata file it was
//! handed, and writes a dummy output file.
//!
//! Only compiled for unit tests or with the `test-mocks` feature.

#![cfg(any(test, feature = "test-mocks"))]

use super::{FfmpegProcess, FfmpegSpawner, FfprobeExecutor};
use crate::config::BlackDetectParams;
use crate::error::{CoreError, CoreResult};
use ffmpeg_sidecar::command::FfmpegCommand;
use ffmpeg_sidecar::event::FfmpegEvent;
use std::cell::RefCell;
use std::path::{Path, PathBuf};
use std::process::ExitStatus;
use std::rc::Rc;
use std::time::Duration;

/// Builds an ExitStatus carrying `code`.
pub fn exit_status(code: i32) -> ExitStatus {
    #[cfg(unix)]
    {
        use std::os::unix::process::ExitStatusExt;
        ExitStatus::from_raw(code << 8)
    }
    #[cfg(windows)]
    {
        use std::os::windows::process::ExitStatusExt;
        ExitStatus::from_raw(code as u32)
    }
}

/// Mock implementation of FfprobeExecutor.
#[derive(Clone, Default)]
pub struct MockFfprobeExecutor {
    duration: Option<Duration>,
    black_output: String,
    black_error: Option<String>,
    received_calls: Rc<RefCell<Vec<String>>>,
}

impl MockFfprobeExecutor {
    pub fn new(duration: Option<Duration>, black_output: &str) -> Self {
        Self {
            duration,
            black_output: black_output.to_string(),
            ..Default::default()
        }
    }

    /// Makes black detection fail with `message`.
    pub fn with_black_error(mut self, message: &str) -> Self {
        self.black_error = Some(message.to_string());
        self
    }

    /// Names of the methods called so far, in order.
    pub fn get_received_calls(&self) -> Vec<String> {
        self.received_calls.borrow().clone()
    }
}

impl FfprobeExecutor for MockFfprobeExecutor {
    fn get_duration(&self, input_path: &Path) -> CoreResult<Option<Duration>> {
        log::info!("MockFfprobeExecutor::get_duration called for: {}", input_path.display());
        self.received_calls.borrow_mut().push("get_duration".to_string());
        Ok(self.duration)
    }

    fn detect_black_frames(
        &self,
        input_path: &Path,
        params: &BlackDetectParams,
    ) -> CoreResult<String> {
        log::info!(
            "MockFfprobeExecutor::detect_black_frames called for: {} ({:?})",
            input_path.display(),
            params
        );
        self.received_calls.borrow_mut().push("detect_black_frames".to_string());
        match &self.black_error {
            Some(message) => Err(CoreError::FfprobeParse(message.clone())),
            None => Ok(self.black_output.clone()),
        }
    }
}

/// Mock implementation of FfmpegProcess.
#[derive(Clone)]
pub struct MockFfmpegProcess {
    /// Events to emit when handle_events is called.
    pub events_to_emit: Vec<FfmpegEvent>,
    /// Exit status to return when wait is called.
    pub exit_status: ExitStatus,
}

impl FfmpegProcess for MockFfmpegProcess {
    fn handle_events<F>(&mut self, mut handler: F) -> CoreResult<()>
    where
        F: FnMut(FfmpegEvent) -> CoreResult<()>,
    {
        for event in self.events_to_emit.clone() {
            handler(event)?;
        }
        Ok(())
    }

    fn wait(&mut self) -> CoreResult<ExitStatus> {
        Ok(self.exit_status)
    }
}

/// A single ffmpeg invocation seen by [`MockFfmpegSpawner`].
#[derive(Debug, Clone)]
pub struct ReceivedCall {
    pub args: Vec<String>,
    /// Path of the second `-i` input (the FFMETADATA file)
    pub metadata_path: Option<PathBuf>,
    /// Contents of that file at spawn time
    pub metadata: Option<String>,
}

/// Mock implementation of FfmpegSpawner.
#[derive(Clone)]
pub struct MockFfmpegSpawner {
    exit_code: i32,
    events: Vec<FfmpegEvent>,
    create_dummy_output: bool,
    received_calls: Rc<RefCell<Vec<ReceivedCall>>>,
}

impl MockFfmpegSpawner {
    /// A spawner whose processes succeed and write a dummy output file.
    pub fn succeeding() -> Self {
        Self {
            exit_code: 0,
            events: Vec::new(),
            create_dummy_output: true,
            received_calls: Rc::default(),
        }
    }

    /// A spawner whose processes report `message` and exit with `exit_code`.
    pub fn failing(exit_code: i32, message: &str) -> Self {
        Self {
            exit_code,
            events: vec![FfmpegEvent::Error(message.to_string())],
            create_dummy_output: false,
            received_calls: Rc::default(),
        }
    }

    /// A spawner whose processes emit `events` and exit with `exit_code`,
    /// without writing any output.
    pub fn with_events(exit_code: i32, events: Vec<FfmpegEvent>) -> Self {
        Self {
            exit_code,
            events,
            create_dummy_output: false,
            received_calls: Rc::default(),
        }
    }

    pub fn get_received_calls(&self) -> Vec<ReceivedCall> {
        self.received_calls.borrow().clone()
    }
}

impl FfmpegSpawner for MockFfmpegSpawner {
    type Process = MockFfmpegProcess;

    fn spawn(&self, mut cmd: FfmpegCommand) -> CoreResult<Self::Process> {
        let args: Vec<String> = cmd
            .as_inner()
            .get_args()
            .map(|s| s.to_string_lossy().into_owned())
            .collect();

        let metadata_path = args
            .iter()
            .enumerate()
            .filter(|(_, arg)| arg.as_str() == "-i")
            .nth(1)
            .and_then(|(index, _)| args.get(index + 1))
            .map(PathBuf::from);
        let metadata = metadata_path
            .as_ref()
            .and_then(|path| std::fs::read_to_string(path).ok());

        if self.create_dummy_output {
            if let Some(output_path) = args.last() {
                std::fs::write(output_path, b"mock remux output")?;
                log::info!("MockFfmpegSpawner created dummy output file: {}", output_path);
            }
        }

        self.received_calls.borrow_mut().push(ReceivedCall {
            args,
            metadata_path,
            metadata,
        });

        Ok(MockFfmpegProcess {
            events_to_emit: self.events.clone(),
            exit_status: exit_status(self.exit_code),
        })
    }
}
