// mkchap-core/tests/chapter_writer_tests.rs

use mkchap_core::Chapter;
use mkchap_core::error::CoreError;
use mkchap_core::external::mocks::MockFfmpegSpawner;
use mkchap_core::external::write_chapter_metadata;
use ffmpeg_sidecar::event::{FfmpegEvent, LogLevel};
use std::path::Path;
use std::time::Duration;
use tempfile::tempdir;

fn chapters() -> Vec<Chapter> {
    vec![
        Chapter::new(Duration::ZERO, Duration::from_millis(11_000)),
        Chapter::new(Duration::from_millis(11_000), Duration::from_millis(120_000)),
    ]
}

fn leftover_files(dir: &Path) -> Vec<String> {
    std::fs::read_dir(dir)
        .unwrap()
        .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
        .filter(|name| name.starts_with(".mkchap"))
        .collect()
}

#[test]
fn test_in_place_write_replaces_original() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let input = dir.path().join("movie.mkv");
    std::fs::write(&input, b"original content")?;
    let spawner = MockFfmpegSpawner::succeeding();

    write_chapter_metadata(&spawner, &input, &input, &chapters())?;

    let calls = spawner.get_received_calls();
    assert_eq!(calls.len(), 1);
    // ffmpeg never writes over its own input.
    let written = calls[0].args.last().cloned().unwrap_or_default();
    assert_ne!(written, input.to_string_lossy());
    assert!(written.ends_with(".mkv"));

    assert_eq!(std::fs::read(&input)?, b"mock remux output");
    assert!(leftover_files(dir.path()).is_empty());
    Ok(())
}

#[test]
fn test_failed_write_cleans_up_and_keeps_original() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let input = dir.path().join("movie.mkv");
    std::fs::write(&input, b"original content")?;
    let spawner = MockFfmpegSpawner::failing(1, "Invalid data found when processing input");

    let result = write_chapter_metadata(&spawner, &input, &input, &chapters());

    match result {
        Err(CoreError::CommandFailed(cmd, status, stderr)) => {
            assert_eq!(cmd, "ffmpeg");
            assert!(!status.success());
            assert!(stderr.contains("Invalid data found"));
        }
        other => panic!("expected CommandFailed, got {other:?}"),
    }

    assert_eq!(std::fs::read(&input)?, b"original content");
    assert!(leftover_files(dir.path()).is_empty());
    let metadata_path = spawner.get_received_calls()[0].metadata_path.clone().unwrap();
    assert!(!metadata_path.exists());
    Ok(())
}

#[test]
fn test_failed_write_to_separate_output() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let input = dir.path().join("movie.mkv");
    let output = dir.path().join("movie.out.mkv");
    std::fs::write(&input, b"original content")?;
    let spawner = MockFfmpegSpawner::failing(1, "boom");

    assert!(write_chapter_metadata(&spawner, &input, &output, &chapters()).is_err());
    assert!(!output.exists());
    Ok(())
}

#[test]
fn test_failed_write_carries_unprefixed_error_lines() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let input = dir.path().join("movie.mkv");
    let output = dir.path().join("movie.out.mkv");
    std::fs::write(&input, b"original content")?;
    // ffmpeg lines that lack a "[level]" prefix are parsed as LogLevel::Unknown.
    let spawner = MockFfmpegSpawner::with_events(
        1,
        vec![
            FfmpegEvent::Log(LogLevel::Info, "Input #0, matroska,webm".to_string()),
            FfmpegEvent::Log(
                LogLevel::Unknown,
                "movie.mkv: Invalid data found when processing input".to_string(),
            ),
        ],
    );

    match write_chapter_metadata(&spawner, &input, &output, &chapters()) {
        Err(CoreError::CommandFailed(cmd, _, stderr)) => {
            assert_eq!(cmd, "ffmpeg");
            assert!(stderr.contains("Invalid data found"), "stderr was {stderr:?}");
            assert!(!stderr.contains("Input #0"), "stderr was {stderr:?}");
        }
        other => panic!("expected CommandFailed, got {other:?}"),
    }
    Ok(())
}

#[test]
fn test_remux_keeps_level_prefixes_on_log_lines() {
    let spawner = MockFfmpegSpawner::succeeding();
    let dir = tempdir().unwrap();
    let input = dir.path().join("movie.mkv");
    let output = dir.path().join("movie.out.mkv");
    std::fs::write(&input, b"original content").unwrap();

    write_chapter_metadata(&spawner, &input, &output, &chapters()).unwrap();

    let args = &spawner.get_received_calls()[0].args;
    let verbosity = args
        .iter()
        .rposition(|arg| arg == "-v" || arg == "-loglevel")
        .and_then(|index| args.get(index + 1))
        .expect("a log level option");
    assert!(verbosity.starts_with("level+"), "last log level was {verbosity:?}");
}
