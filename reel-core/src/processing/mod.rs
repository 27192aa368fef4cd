// ============================================================================
// reel-core/src/processing/mod.rs
// ============================================================================
//
// PROCESSING: The Video Operations
//
// Each operation follows the same flow: probe the input when a derived value
// needs metadata, compute parameters, build the ffmpeg command, and run it
// through the supplied executor. Operations run one at a time and block until
// the external tool exits.
//
// KEY COMPONENTS:
// - get_duration: probe-only operation
// - edit: convert, concat, mux audio, remove near-black frames, fade out
// - speed: speed change by factor or to a target duration

use crate::config::CoreConfig;
use crate::error::{CoreError, CoreResult};
use crate::external::{ProcessExecutor, ffprobe};

use std::path::Path;

pub mod edit;
pub mod speed;

pub use edit::{concat, convert_to_mp4, fade_out, mux_audio, remove_near_black_frames};
pub use speed::{SpeedOptions, shrink_to_duration, speed_up};

/// Duration of `input` in seconds.
pub fn get_duration<E: ProcessExecutor>(
    executor: &E,
    config: &CoreConfig,
    input: &Path,
) -> CoreResult<f64> {
    ensure_input_exists(input)?;
    ffprobe::get_duration(executor, config, input)
}

pub(crate) fn ensure_input_exists(path: &Path) -> CoreResult<()> {
    if path.is_file() {
        Ok(())
    } else {
        Err(CoreError::PathError(format!(
            "Input file '{}' does not exist",
            path.display()
        )))
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use crate::config::CoreConfig;
    use std::path::PathBuf;
    use tempfile::TempDir;

    /// Temp dir holding empty stand-ins for the named input files.
    pub fn inputs(names: &[&str]) -> (TempDir, Vec<PathBuf>) {
        let dir = tempfile::tempdir().unwrap();
        let paths = names
            .iter()
            .map(|name| {
                let path = dir.path().join(name);
                std::fs::write(&path, b"").unwrap();
                path
            })
            .collect();
        (dir, paths)
    }

    pub fn config_in(dir: &TempDir) -> CoreConfig {
        CoreConfig {
            temp_dir: Some(dir.path().join("tmp")),
            ..CoreConfig::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::external::mocks::MockExecutor;

    #[test]
    fn test_get_duration_requires_existing_input() {
        let mock = MockExecutor::new();
        let err = get_duration(&mock, &CoreConfig::default(), Path::new("no/such/clip.mp4"))
            .unwrap_err();
        assert!(matches!(err, CoreError::PathError(_)));
        assert!(mock.get_received_calls().is_empty());
    }

    #[test]
    fn test_get_duration_probes_input() {
        let (_dir, inputs) = test_support::inputs(&["clip.mp4"]);
        let mock = MockExecutor::new();
        mock.expect_capture("format=duration", "42.25\n");
        let duration = get_duration(&mock, &CoreConfig::default(), &inputs[0]).unwrap();
        assert_eq!(duration, 42.25);
    }
}
