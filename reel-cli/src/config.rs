// reel-cli/src/config.rs
//
// Builds the core configuration from global CLI flags and environment
// variables.

use crate::cli::GlobalArgs;
use crate::error::{CliErrorContext, CliResult};

use reel_core::CoreConfig;

/// Overlays the global flags on the core defaults and validates the result.
pub fn core_config_from_args(global: &GlobalArgs) -> CliResult<CoreConfig> {
    let mut config = CoreConfig::default();
    if let Some(ffmpeg) = &global.ffmpeg {
        config.ffmpeg_path = ffmpeg.clone();
    }
    if let Some(ffprobe) = &global.ffprobe {
        config.ffprobe_path = ffprobe.clone();
    }
    config.temp_dir = global.temp_dir.clone();

    config.validate().cli_context("Invalid options")?;
    Ok(config)
}
