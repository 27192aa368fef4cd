//! FFprobe integration for duration and frame-rate queries.
//!
//! Each query asks ffprobe for a single entry printed as a bare value
//! (`-of default=noprint_wrappers=1:nokey=1`). Results are never cached;
//! every call runs the tool again.

use crate::config::CoreConfig;
use crate::error::{CoreResult, probe_error};
use crate::external::{ExternalCommand, ProcessExecutor};
use crate::params::{FrameRate, ProbeResult};

use std::path::Path;

/// Builds `ffprobe -v error -show_entries <entries> -of default=noprint_wrappers=1:nokey=1 <path>`.
pub fn build_entry_probe(config: &CoreConfig, entries: &str, path: &Path) -> ExternalCommand {
    ExternalCommand::new(&config.ffprobe_path)
        .args(["-v", "error", "-show_entries", entries])
        .args(["-of", "default=noprint_wrappers=1:nokey=1"])
        .arg(path.to_string_lossy())
}

pub fn build_duration_probe(config: &CoreConfig, path: &Path) -> ExternalCommand {
    build_entry_probe(config, "format=duration", path)
}

pub fn build_frame_rate_probe(config: &CoreConfig, path: &Path) -> ExternalCommand {
    build_entry_probe(config, "stream=r_frame_rate", path)
}

/// Container duration in seconds.
pub fn get_duration<E: ProcessExecutor>(
    executor: &E,
    config: &CoreConfig,
    path: &Path,
) -> CoreResult<f64> {
    let output = executor
        .capture(&build_duration_probe(config, path))
        .map_err(|e| probe_error(path, e))?;
    let duration = parse_duration(&output).map_err(|msg| probe_error(path, msg))?;
    log::debug!("Probed duration of {}: {duration}s", path.display());
    Ok(duration)
}

/// Frame rate of the first stream that has one, as reported (`N/D`).
///
/// Audio streams report `0/0`; those lines are skipped.
pub fn get_frame_rate<E: ProcessExecutor>(
    executor: &E,
    config: &CoreConfig,
    path: &Path,
) -> CoreResult<FrameRate> {
    let output = executor
        .capture(&build_frame_rate_probe(config, path))
        .map_err(|e| probe_error(path, e))?;
    let line = first_frame_rate(&output)
        .ok_or_else(|| probe_error(path, "ffprobe printed no frame rate"))?;
    let rate = line.parse::<FrameRate>().map_err(|e| probe_error(path, e))?;
    log::debug!("Probed frame rate of {}: {rate}", path.display());
    Ok(rate)
}

/// Duration and frame rate, two separate tool invocations.
pub fn probe<E: ProcessExecutor>(
    executor: &E,
    config: &CoreConfig,
    path: &Path,
) -> CoreResult<ProbeResult> {
    Ok(ProbeResult {
        duration: get_duration(executor, config, path)?,
        frame_rate: get_frame_rate(executor, config, path)?,
    })
}

fn first_frame_rate(output: &str) -> Option<&str> {
    output
        .lines()
        .map(str::trim)
        .find(|l| !l.is_empty() && *l != "0/0")
}

fn parse_duration(output: &str) -> Result<f64, String> {
    let value = output.trim();
    let duration = value
        .parse::<f64>()
        .map_err(|_| format!("ffprobe output '{value}' is not a duration"))?;
    if !duration.is_finite() || duration < 0.0 {
        return Err(format!("ffprobe reported an invalid duration '{value}'"));
    }
    Ok(duration)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CoreError;
    use crate::external::mocks::MockExecutor;

    #[test]
    fn test_duration_probe_arguments() {
        let cmd = build_duration_probe(&CoreConfig::default(), Path::new("clip.mp4"));
        assert_eq!(cmd.program(), "ffprobe");
        assert_eq!(
            cmd.get_args(),
            [
                "-v",
                "error",
                "-show_entries",
                "format=duration",
                "-of",
                "default=noprint_wrappers=1:nokey=1",
                "clip.mp4"
            ]
        );
    }

    #[test]
    fn test_frame_rate_probe_uses_configured_program() {
        let config = CoreConfig {
            ffprobe_path: "/usr/local/bin/ffprobe".to_string(),
            ..CoreConfig::default()
        };
        let cmd = build_frame_rate_probe(&config, Path::new("clip.mp4"));
        assert_eq!(cmd.program(), "/usr/local/bin/ffprobe");
        assert_eq!(cmd.value_of("-show_entries"), Some("stream=r_frame_rate"));
    }

    #[test]
    fn test_get_duration_parses_output() {
        let mock = MockExecutor::new();
        mock.expect_capture("format=duration", "20.000000\n");
        let duration = get_duration(&mock, &CoreConfig::default(), Path::new("clip.mp4")).unwrap();
        assert_eq!(duration, 20.0);
        assert_eq!(mock.get_received_calls().len(), 1);
    }

    #[test]
    fn test_get_duration_rejects_garbage() {
        let mock = MockExecutor::new();
        mock.expect_capture("format=duration", "N/A\n");
        let err = get_duration(&mock, &CoreConfig::default(), Path::new("clip.mp4")).unwrap_err();
        assert!(matches!(err, CoreError::Probe { .. }));
    }

    #[test]
    fn test_tool_failure_becomes_probe_error() {
        let mock = MockExecutor::new();
        mock.expect_capture_failure("format=duration", 1);
        let err = get_duration(&mock, &CoreConfig::default(), Path::new("missing.mp4")).unwrap_err();
        match err {
            CoreError::Probe { path, .. } => assert_eq!(path, "missing.mp4"),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_get_frame_rate_takes_first_stream() {
        let mock = MockExecutor::new();
        mock.expect_capture("stream=r_frame_rate", "30000/1001\n0/0\n");
        let rate = get_frame_rate(&mock, &CoreConfig::default(), Path::new("clip.mp4")).unwrap();
        assert_eq!(rate, FrameRate::new(30000, 1001));
    }

    #[test]
    fn test_get_frame_rate_skips_audio_first_stream() {
        let mock = MockExecutor::new();
        mock.expect_capture("stream=r_frame_rate", "0/0\n25/1\n");
        let rate = get_frame_rate(&mock, &CoreConfig::default(), Path::new("clip.mp4")).unwrap();
        assert_eq!(rate, FrameRate::new(25, 1));
    }

    #[test]
    fn test_get_frame_rate_audio_only() {
        let mock = MockExecutor::new();
        mock.expect_capture("stream=r_frame_rate", "0/0\n");
        let err = get_frame_rate(&mock, &CoreConfig::default(), Path::new("song.m4a")).unwrap_err();
        assert!(matches!(err, CoreError::Probe { .. }));
    }

    #[test]
    fn test_get_frame_rate_empty_output() {
        let mock = MockExecutor::new();
        mock.expect_capture("stream=r_frame_rate", "\n");
        assert!(get_frame_rate(&mock, &CoreConfig::default(), Path::new("clip.mp4")).is_err());
    }

    #[test]
    fn test_probe_invokes_tool_every_time() {
        let mock = MockExecutor::new();
        mock.expect_capture("format=duration", "12.5");
        mock.expect_capture("stream=r_frame_rate", "25/1");
        mock.expect_capture("format=duration", "12.5");
        mock.expect_capture("stream=r_frame_rate", "25/1");

        let config = CoreConfig::default();
        let first = probe(&mock, &config, Path::new("clip.mp4")).unwrap();
        let second = probe(&mock, &config, Path::new("clip.mp4")).unwrap();
        assert_eq!(first, second);
        assert_eq!(first.duration, 12.5);
        assert_eq!(first.frame_rate, FrameRate::new(25, 1));
        assert_eq!(mock.get_received_calls().len(), 4);
    }

    #[test]
    fn test_parse_duration_edge_cases() {
        assert_eq!(parse_duration("0\n").unwrap(), 0.0);
        assert!(parse_duration("").is_err());
        assert!(parse_duration("-1.0").is_err());
        assert!(parse_duration("inf").is_err());
    }
}
