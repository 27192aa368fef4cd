//! Implementation of the 'convert-to-mp4' subcommand.

use crate::cli::ConvertArgs;
use crate::error::CliResult;
use crate::output::print_success;

use reel_core::{CoreConfig, ProcessExecutor, processing};

pub fn run_convert<E: ProcessExecutor>(
    executor: &E,
    config: &CoreConfig,
    args: &ConvertArgs,
) -> CliResult<()> {
    let written =
        processing::convert_to_mp4(executor, config, &args.input, args.output.as_deref())?;
    print_success(&format!("Wrote {}", written.display()));
    Ok(())
}
