// mkchap-cli/src/main.rs
//
// Entry point for the `mkchap` binary.
//
// Responsibilities:
// - Parsing arguments (help/version exit 0, anything else malformed exits -1).
// - Initializing logging.
// - Running the analysis and mapping its outcome to an exit code:
//   0 on success (including an input without a readable duration),
//   -1 for invalid arguments, -2 for runtime failures.

use clap::Parser;
use clap::error::ErrorKind;
use mkchap_cli::logging::{init_logging, should_use_color};
use mkchap_cli::{Cli, run_analyze};
use owo_colors::OwoColorize;
use std::process;

const EXIT_USAGE: i32 = -1;
const EXIT_RUNTIME: i32 = -2;

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => match e.kind() {
            ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => e.exit(),
            _ => {
                let _ = e.print();
                process::exit(EXIT_USAGE);
            }
        },
    };

    init_logging(cli.verbose);

    match run_analyze(&cli) {
        Ok(Some(_)) => {}
        Ok(None) => log::debug!("Nothing to do for {}", cli.input.display()),
        Err(e) => {
            if should_use_color() {
                eprintln!("{} {}", "Error:".red().bold(), e);
            } else {
                eprintln!("Error: {}", e);
            }
            process::exit(if e.is_usage_error() { EXIT_USAGE } else { EXIT_RUNTIME });
        }
    }
}
