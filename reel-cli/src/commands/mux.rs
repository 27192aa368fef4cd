//! Implementation of the 'mux-audio' subcommand.

use crate::cli::MuxAudioArgs;
use crate::error::CliResult;
use crate::output::print_success;

use reel_core::{CoreConfig, ProcessExecutor, processing};

pub fn run_mux_audio<E: ProcessExecutor>(
    executor: &E,
    config: &CoreConfig,
    args: &MuxAudioArgs,
) -> CliResult<()> {
    processing::mux_audio(executor, config, &args.video, &args.audio, &args.output)?;
    print_success(&format!("Wrote {}", args.output.display()));
    Ok(())
}
