//! Implementation of the 'concat' subcommand.

use crate::cli::ConcatArgs;
use crate::error::CliResult;
use crate::output::print_success;

use reel_core::{CoreConfig, ProcessExecutor, processing};

pub fn run_concat<E: ProcessExecutor>(
    executor: &E,
    config: &CoreConfig,
    args: &ConcatArgs,
) -> CliResult<()> {
    processing::concat(executor, config, &args.inputs, &args.output)?;
    print_success(&format!(
        "Joined {} clips into {}",
        args.inputs.len(),
        args.output.display()
    ));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::test_support;
    use reel_core::external::mocks::MockExecutor;
    use std::path::Path;

    #[test]
    fn test_manifest_removed_after_run() {
        let (dir, inputs, config) = test_support::setup(&["a.mp4", "b.mp4", "c.mp4"]);
        let mock = MockExecutor::new();
        mock.expect_run("concat");

        let args = ConcatArgs {
            inputs: inputs.clone(),
            output: dir.path().join("all.mp4"),
        };
        run_concat(&mock, &config, &args).unwrap();

        let calls = mock.get_received_calls();
        let manifest = calls[0].value_of("-i").unwrap();
        assert!(!Path::new(manifest).exists());
    }
}
