//! Temporary file management utilities.
//!
//! This module provides helper functions for creating temporary files. It
//! leverages the tempfile crate to handle automatic cleanup via the Drop
//! trait, so files are removed even when a later step fails. Removal errors
//! on drop are ignored.

use crate::error::CoreResult;
use std::io::Write;
use std::path::Path;
use tempfile::{Builder as TempFileBuilder, NamedTempFile, TempPath};

/// Creates a temporary file with prefix and extension. Auto-deleted when dropped.
pub fn create_temp_file(dir: &Path, prefix: &str, extension: &str) -> CoreResult<NamedTempFile> {
    std::fs::create_dir_all(dir)?;
    let prefix = format!("{prefix}_");
    let suffix = format!(".{extension}");
    let mut builder = TempFileBuilder::new();
    builder.prefix(&prefix);
    if !extension.is_empty() {
        builder.suffix(&suffix);
    }
    Ok(builder.tempfile_in(dir)?)
}

/// Writes `contents` to a new file in the system temp directory and closes
/// it, so another process can open it. Auto-deleted when dropped.
pub fn create_metadata_file(contents: &str) -> CoreResult<TempPath> {
    let mut file = create_temp_file(&std::env::temp_dir(), "mkchap_metadata", "txt")?;
    file.write_all(contents.as_bytes())?;
    file.flush()?;
    Ok(file.into_temp_path())
}

/// Creates a temporary file next to `target` with the same extension, so it
/// can later replace `target` with an atomic rename (`TempPath::persist`).
/// The file is closed; it is auto-deleted when dropped unless persisted.
pub fn create_sibling_temp_file(target: &Path) -> CoreResult<TempPath> {
    let dir = match target.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let extension = target
        .extension()
        .and_then(|ext| ext.to_str())
        .unwrap_or_default();
    Ok(create_temp_file(dir, ".mkchap", extension)?.into_temp_path())
}
