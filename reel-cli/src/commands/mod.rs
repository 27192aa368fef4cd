//! Command implementations for the CLI.
//!
//! Each submodule implements one subcommand on top of `reel_core::processing`.
//! Handlers take the executor as a parameter so they run against a mock in
//! tests.

pub mod black_frames;
pub mod concat;
pub mod convert;
pub mod duration;
pub mod fade;
pub mod mux;
pub mod speedup;

use crate::cli::Commands;
use crate::error::CliResult;

use reel_core::{CoreConfig, ProcessExecutor};

/// Runs the parsed subcommand to completion.
pub fn run_command<E: ProcessExecutor>(
    executor: &E,
    config: &CoreConfig,
    command: Commands,
) -> CliResult<()> {
    match command {
        Commands::Duration(args) => duration::run_duration(executor, config, &args),
        Commands::ConvertToMp4(args) => convert::run_convert(executor, config, &args),
        Commands::Concat(args) => concat::run_concat(executor, config, &args),
        Commands::RemoveNearBlackFrames(args) => {
            black_frames::run_remove_black_frames(executor, config, &args)
        }
        Commands::Speedup(args) => speedup::run_speedup(executor, config, args),
        Commands::MuxAudio(args) => mux::run_mux_audio(executor, config, &args),
        Commands::FadeOut(args) => fade::run_fade_out(executor, config, &args),
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::Cli;
    use clap::Parser;
    use std::ffi::OsStr;
    use reel_core::external::mocks::MockExecutor;

    #[test]
    fn test_dispatches_parsed_mux_command() {
        let (dir, inputs, config) = test_support::setup(&["video.mp4", "music.mp3"]);
        let output = dir.path().join("out.mp4");
        let cli = Cli::try_parse_from([
            OsStr::new("reel"),
            OsStr::new("mux-audio"),
            inputs[0].as_os_str(),
            inputs[1].as_os_str(),
            OsStr::new("-o"),
            output.as_os_str(),
        ])
        .unwrap();

        let mock = MockExecutor::new();
        mock.expect_run("-shortest");
        run_command(&mock, &config, cli.command).unwrap();

        let calls = mock.get_received_calls();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].value_of("-c:v"), Some("copy"));
    }

    #[test]
    fn test_tool_failure_propagates() {
        let (dir, inputs, config) = test_support::setup(&["clip.mp4"]);
        let cli = Cli::try_parse_from([
            OsStr::new("reel"),
            OsStr::new("remove-near-black-frames"),
            inputs[0].as_os_str(),
            OsStr::new("-o"),
            dir.path().join("clean.mp4").as_os_str(),
        ])
        .unwrap();

        let mock = MockExecutor::new();
        mock.expect_run_failure("blackframe", 1);
        let err = run_command(&mock, &config, cli.command).unwrap_err();
        assert_eq!(err.exit_code(), Some(1));
    }
}
