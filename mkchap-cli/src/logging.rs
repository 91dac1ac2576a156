// ============================================================================
// mkchap-cli/src/logging.rs
// ============================================================================
//
// LOGGING SETUP: env_logger configuration for the mkchap binary
//
// Logs go to stderr so that the report on stdout stays machine readable.
// The default level is `warn`; `--verbose` raises it to `debug` and the
// RUST_LOG environment variable, when set, overrides both.

use log::{Level, LevelFilter};
use owo_colors::OwoColorize;
use std::io::{IsTerminal, Write};

/// Whether stderr output should carry ANSI colors (respects NO_COLOR).
pub fn should_use_color() -> bool {
    std::env::var_os("NO_COLOR").is_none() && std::io::stderr().is_terminal()
}

/// Returns the level filter implied by the verbosity flag.
pub fn level_for(verbose: bool) -> LevelFilter {
    if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    }
}

/// Initializes the global logger. Safe to call more than once; later calls
/// are ignored.
pub fn init_logging(verbose: bool) {
    let color = should_use_color();
    let mut builder = env_logger::Builder::new();
    builder
        .target(env_logger::Target::Stderr)
        .filter_level(level_for(verbose))
        .format(move |buf, record| {
            let tag = level_tag(record.level());
            if color {
                let tag = match record.level() {
                    Level::Error => tag.bright_red().to_string(),
                    Level::Warn => tag.yellow().to_string(),
                    Level::Info => tag.green().to_string(),
                    Level::Debug => tag.blue().to_string(),
                    Level::Trace => tag.magenta().to_string(),
                };
                writeln!(buf, "{} {}", tag, record.args())
            } else {
                writeln!(buf, "{} {}", tag, record.args())
            }
        });

    if let Ok(filters) = std::env::var("RUST_LOG") {
        builder.parse_filters(&filters);
    }

    if builder.try_init().is_ok() {
        log::debug!("Logger initialized with level: {}", level_for(verbose));
    }
}

fn level_tag(level: Level) -> &'static str {
    match level {
        Level::Error => "ERROR",
        Level::Warn => "WARN ",
        Level::Info => "INFO ",
        Level::Debug => "DEBUG",
        Level::Trace => "TRACE",
    }
}
