// mkchap-cli/src/commands/mod.rs
//
// Command implementations invoked from main.rs.

pub mod analyze;
