// reel-cli/src/main.rs
//
// Entry point for the `reel` binary.
//
// Responsibilities include:
// - Parsing command-line arguments (clap exits with code 2 on usage errors).
// - Initializing env_logger.
// - Building the core configuration from flags and environment variables.
// - Dispatching the subcommand against the system executor.
// - Mapping any failure to "Error: <message>" on stderr and exit code 1.

use clap::Parser;
use log::debug;
use reel_cli::config::core_config_from_args;
use reel_cli::logging::init_logging;
use reel_cli::output::print_error;
use reel_cli::{Cli, CliResult, run_command};
use reel_core::SystemExecutor;
use std::process;

fn run(cli: Cli) -> CliResult<()> {
    let config = core_config_from_args(&cli.global)?;
    debug!(
        "Using ffmpeg '{}' and ffprobe '{}'",
        config.ffmpeg_path, config.ffprobe_path
    );

    let executor = SystemExecutor::new();
    run_command(&executor, &config, cli.command)
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.global.verbose);

    if let Err(e) = run(cli) {
        print_error(&e.to_string());
        process::exit(1);
    }
}
