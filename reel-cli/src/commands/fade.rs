//! Implementation of the 'fade-out' subcommand.

use crate::cli::FadeOutArgs;
use crate::error::CliResult;
use crate::output::{print_info, print_success};

use reel_core::{CoreConfig, ProcessExecutor, processing};

pub fn run_fade_out<E: ProcessExecutor>(
    executor: &E,
    config: &CoreConfig,
    args: &FadeOutArgs,
) -> CliResult<()> {
    let window =
        processing::fade_out(executor, config, &args.input, &args.output, Some(args.duration))?;
    print_info("Fade", format!("{}s from {}s", window.duration, window.start));
    print_success(&format!("Wrote {}", args.output.display()));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::test_support;
    use reel_core::external::mocks::MockExecutor;

    #[test]
    fn test_fade_starts_before_end() {
        let (dir, inputs, config) = test_support::setup(&["clip.mp4"]);
        let mock = MockExecutor::new();
        mock.expect_capture("format=duration", "10.4\n");
        mock.expect_run("fade=t=out");

        let args = FadeOutArgs {
            input: inputs[0].clone(),
            output: dir.path().join("faded.mp4"),
            duration: 3,
        };
        run_fade_out(&mock, &config, &args).unwrap();

        let calls = mock.get_received_calls();
        assert_eq!(calls[1].value_of("-vf"), Some("fade=t=out:st=7:d=3"));
    }
}
