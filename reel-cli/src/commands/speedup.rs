//! Implementation of the 'speedup' subcommand.

use crate::cli::SpeedupArgs;
use crate::error::CliResult;
use crate::output::{print_info, print_success};

use reel_core::{CoreConfig, ProcessExecutor, SpeedOptions, processing};

pub fn run_speedup<E: ProcessExecutor>(
    executor: &E,
    config: &CoreConfig,
    args: SpeedupArgs,
) -> CliResult<()> {
    let options = SpeedOptions {
        input: args.input,
        output: args.output,
        factor: args.factor,
        target_duration: args.duration,
        smooth: args.smooth,
        adjust_frame_rate: args.adjust_frame_rate,
    };

    let plan = processing::speed_up(executor, config, &options)?;
    print_info("Speed factor", format!("{:.2}x", plan.factor));
    if let Some(rate) = plan.target_frame_rate {
        print_info("Frame rate", format!("{rate} fps"));
    }
    print_success(&format!("Wrote {}", options.output.display()));
    Ok(())
}
