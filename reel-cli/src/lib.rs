// reel-cli/src/lib.rs
//
// Library portion of the Reel CLI application.
// Contains argument definitions and command logic.

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod logging;
pub mod output;

// Re-export items needed by the binary or integration tests
pub use cli::{Cli, Commands, GlobalArgs};
pub use commands::run_command;
pub use error::{CliErrorContext, CliResult};
