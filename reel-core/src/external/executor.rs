// ============================================================================
// reel-core/src/external/executor.rs
// ============================================================================
//
// PROCESS EXECUTOR: Running Built Commands
//
// The ProcessExecutor trait is the seam between the pure command builders and
// the operating system. Operations take an executor by reference so tests can
// substitute a recording implementation.
//
// KEY COMPONENTS:
// - ProcessExecutor: run-and-wait, or run-and-capture-stdout
// - SystemExecutor: ffmpeg-sidecar for transcodes, std::process for probes

use crate::error::{CoreError, CoreResult, command_failed_error, command_start_error};
use crate::external::ExternalCommand;

use ffmpeg_sidecar::command::FfmpegCommand;
use ffmpeg_sidecar::event::{FfmpegEvent, LogLevel};
use std::process::Command;

/// Something that can execute an `ExternalCommand` to completion.
pub trait ProcessExecutor {
    /// Runs the command, blocking until it exits. Output is not captured.
    fn run(&self, cmd: &ExternalCommand) -> CoreResult<()>;

    /// Runs the command, blocking until it exits, and returns its stdout.
    fn capture(&self, cmd: &ExternalCommand) -> CoreResult<String>;
}

impl<E: ProcessExecutor + ?Sized> ProcessExecutor for &E {
    fn run(&self, cmd: &ExternalCommand) -> CoreResult<()> {
        (**self).run(cmd)
    }

    fn capture(&self, cmd: &ExternalCommand) -> CoreResult<String> {
        (**self).capture(cmd)
    }
}

/// Executes commands on the host system.
#[derive(Debug, Clone, Default)]
pub struct SystemExecutor;

impl SystemExecutor {
    pub fn new() -> Self {
        Self
    }
}

impl ProcessExecutor for SystemExecutor {
    fn run(&self, cmd: &ExternalCommand) -> CoreResult<()> {
        log::debug!("Running: {cmd}");

        let mut ffmpeg = FfmpegCommand::new_with_path(cmd.program());
        ffmpeg.args(cmd.get_args());

        let mut child = ffmpeg
            .spawn()
            .map_err(|e| command_start_error(cmd.program(), e))?;

        let mut error_lines = Vec::new();
        let events = child.iter().map_err(|e| CoreError::ExternalTool {
            tool: cmd.program().to_string(),
            code: None,
            stderr: format!("failed to read process events: {e}"),
        })?;

        for event in events {
            match event {
                FfmpegEvent::Progress(progress) => {
                    log::debug!(
                        "{} progress: time={} speed={:.2}x",
                        cmd.program(),
                        progress.time,
                        progress.speed
                    );
                }
                FfmpegEvent::Log(LogLevel::Error | LogLevel::Fatal, line)
                | FfmpegEvent::Error(line) => {
                    log::warn!("{}: {}", cmd.program(), line);
                    error_lines.push(line);
                }
                _ => {}
            }
        }

        let status = child
            .wait()
            .map_err(|e| command_start_error(cmd.program(), e))?;

        if !status.success() {
            log::error!("{} exited with {status}", cmd.program());
            return Err(command_failed_error(
                cmd.program(),
                status,
                error_lines.join("\n"),
            ));
        }

        Ok(())
    }

    fn capture(&self, cmd: &ExternalCommand) -> CoreResult<String> {
        log::debug!("Capturing: {cmd}");

        let output = Command::new(cmd.program())
            .args(cmd.get_args())
            .output()
            .map_err(|e| command_start_error(cmd.program(), e))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            log::error!(
                "{} failed with exit code {}: {}",
                cmd.program(),
                output.status.code().unwrap_or(-1),
                stderr
            );
            return Err(command_failed_error(cmd.program(), output.status, stderr));
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}
