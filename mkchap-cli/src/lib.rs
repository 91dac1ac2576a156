// mkchap-cli/src/lib.rs
//
// Library portion of the mkchap CLI application.
// Contains argument definitions, logging setup, report rendering and the
// command logic, so integration tests can reach them.

pub mod cli;
pub mod commands;
pub mod logging;
pub mod output;

// Re-export items needed by the binary or integration tests
pub use cli::Cli;
pub use commands::analyze::run_analyze;
