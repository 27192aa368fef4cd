//! Implementation of the 'duration' subcommand.

use crate::cli::DurationArgs;
use crate::error::CliResult;
use crate::output::print_info;

use reel_core::{CoreConfig, ProcessExecutor, format_duration, processing};

/// Prints the duration in seconds on its own line, then a readable form.
pub fn run_duration<E: ProcessExecutor>(
    executor: &E,
    config: &CoreConfig,
    args: &DurationArgs,
) -> CliResult<()> {
    let seconds = processing::get_duration(executor, config, &args.input)?;
    println!("{seconds}");
    print_info("Duration", format_duration(seconds));
    Ok(())
}
