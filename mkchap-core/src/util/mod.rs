//! Utility functions and helpers module
//!
//! Provides the command execution helper shared by the ffprobe based
//! collaborators.

pub mod command;

pub use command::{log_command, run_command};
