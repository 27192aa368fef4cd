//! Implementation of the 'remove-near-black-frames' subcommand.

use crate::cli::BlackFramesArgs;
use crate::error::CliResult;
use crate::output::print_success;

use reel_core::{BlackFrameThresholds, CoreConfig, ProcessExecutor, processing};

pub fn run_remove_black_frames<E: ProcessExecutor>(
    executor: &E,
    config: &CoreConfig,
    args: &BlackFramesArgs,
) -> CliResult<()> {
    let thresholds = BlackFrameThresholds::new(args.luma_threshold, args.percent)?;
    processing::remove_near_black_frames(executor, config, &args.input, &args.output, thresholds)?;
    print_success(&format!("Wrote {}", args.output.display()));
    Ok(())
}
