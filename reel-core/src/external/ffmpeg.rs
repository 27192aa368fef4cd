//! FFmpeg command construction for every transcode operation.
//!
//! Each `build_*` function maps typed parameters to the exact argument list
//! ffmpeg needs and performs no I/O. The one exception is concatenation,
//! whose manifest file is created by [`prepare_concat`] and owned by the
//! caller until ffmpeg has exited.

use crate::config::CoreConfig;
use crate::error::{CoreError, CoreResult};
use crate::external::{ConcatManifest, ExternalCommand};
use crate::params::{BlackFrameThresholds, FadeWindow, SpeedPlan, format_pts_multiplier};

use std::path::Path;

/// Builder for the arguments every ffmpeg invocation starts with.
pub struct FfmpegCommandBuilder {
    program: String,
    hide_banner: bool,
    overwrite: bool,
}

impl FfmpegCommandBuilder {
    #[must_use]
    pub fn new(program: &str) -> Self {
        Self {
            program: program.to_string(),
            hide_banner: true,
            overwrite: false,
        }
    }

    /// Starts from the configured program and overwrite setting.
    #[must_use]
    pub fn from_config(config: &CoreConfig) -> Self {
        Self::new(&config.ffmpeg_path).with_overwrite(config.overwrite)
    }

    #[must_use]
    pub fn with_hide_banner(mut self, hide: bool) -> Self {
        self.hide_banner = hide;
        self
    }

    /// Adds `-y` so an existing output never triggers a prompt
    #[must_use]
    pub fn with_overwrite(mut self, overwrite: bool) -> Self {
        self.overwrite = overwrite;
        self
    }

    #[must_use]
    pub fn build(self) -> ExternalCommand {
        let mut cmd = ExternalCommand::new(self.program);
        if self.hide_banner {
            cmd = cmd.arg("-hide_banner");
        }
        if self.overwrite {
            cmd = cmd.arg("-y");
        }
        cmd
    }
}

/// Builder for comma-separated filter chains
#[derive(Default)]
pub struct FilterChain {
    filters: Vec<String>,
}

impl FilterChain {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn add_filter(mut self, filter: impl Into<String>) -> Self {
        let filter = filter.into();
        if !filter.is_empty() {
            self.filters.push(filter);
        }
        self
    }

    #[must_use]
    pub fn build(self) -> Option<String> {
        if self.filters.is_empty() {
            None
        } else {
            Some(self.filters.join(","))
        }
    }
}

fn path_arg(path: &Path) -> String {
    path.to_string_lossy().into_owned()
}

/// Re-encodes to H.264/AAC in an MP4 container.
pub fn build_convert_to_mp4(config: &CoreConfig, input: &Path, output: &Path) -> ExternalCommand {
    FfmpegCommandBuilder::from_config(config)
        .build()
        .args(["-i".to_string(), path_arg(input)])
        .args(["-c:v", "libx264", "-pix_fmt", "yuv420p"])
        .args(["-c:a", "aac"])
        .args(["-movflags", "+faststart"])
        .arg(path_arg(output))
}

/// Stream-copies the clips listed in `manifest` into `output`.
pub fn build_concat(config: &CoreConfig, manifest: &Path, output: &Path) -> ExternalCommand {
    FfmpegCommandBuilder::from_config(config)
        .build()
        .args(["-f", "concat", "-safe", "0"])
        .args(["-i".to_string(), path_arg(manifest)])
        .args(["-c", "copy"])
        .arg(path_arg(output))
}

/// Writes the manifest for `inputs` and builds the matching concat command.
///
/// The manifest must be kept alive until the command has run; dropping it
/// deletes the file.
pub fn prepare_concat<P: AsRef<Path>>(
    config: &CoreConfig,
    inputs: &[P],
    output: &Path,
) -> CoreResult<(ConcatManifest, ExternalCommand)> {
    let manifest = ConcatManifest::create(config, inputs)?;
    let cmd = build_concat(config, manifest.path(), output);
    Ok((manifest, cmd))
}

/// Video filter for a speed plan.
///
/// Without interpolation this is a presentation-timestamp rescale by
/// `1/factor`; with interpolation it is `minterpolate` at the target rate.
pub fn speed_filter(plan: &SpeedPlan) -> CoreResult<String> {
    if plan.interpolate {
        let fps = plan.target_frame_rate.ok_or_else(|| {
            CoreError::InvalidArgument(
                "smoothing requires a target frame rate".to_string(),
            )
        })?;
        Ok(format!(
            "minterpolate=fps={fps}:mi_mode=mci:mc_mode=aobmc:vsbmc=1"
        ))
    } else {
        let multiplier = format_pts_multiplier(plan.factor);
        if multiplier == "0.00" {
            return Err(CoreError::InvalidArgument(format!(
                "speed factor {} is too large: setpts multiplier rounds to zero",
                plan.factor
            )));
        }
        Ok(format!("setpts={multiplier}*PTS"))
    }
}

pub fn build_speed_change(
    config: &CoreConfig,
    input: &Path,
    output: &Path,
    plan: &SpeedPlan,
) -> CoreResult<ExternalCommand> {
    if !(plan.factor.is_finite() && plan.factor > 0.0) {
        return Err(CoreError::InvalidArgument(format!(
            "speed factor must be greater than zero, got {}",
            plan.factor
        )));
    }

    let mut cmd = FfmpegCommandBuilder::from_config(config)
        .build()
        .args(["-i".to_string(), path_arg(input)])
        .args(["-filter:v".to_string(), speed_filter(plan)?]);

    if !plan.interpolate {
        if let Some(fps) = plan.target_frame_rate {
            cmd = cmd.args(["-r".to_string(), fps.to_string()]);
        }
    }

    Ok(cmd.arg(path_arg(output)))
}

/// Copies video from `video`, encodes audio from `audio` at the configured
/// bitrate, and stops at the shorter input.
pub fn build_mux_audio(
    config: &CoreConfig,
    video: &Path,
    audio: &Path,
    output: &Path,
) -> ExternalCommand {
    FfmpegCommandBuilder::from_config(config)
        .build()
        .args(["-i".to_string(), path_arg(video)])
        .args(["-i".to_string(), path_arg(audio)])
        .args(["-c:v", "copy", "-c:a", "aac"])
        .args(["-b:a", config.audio_bitrate.as_str()])
        .args(["-map", "0:v:0", "-map", "1:a:0"])
        .arg("-shortest")
        .arg(path_arg(output))
}

/// Filter chain dropping frames whose black-pixel share reaches the threshold.
///
/// `blackframe=amount=0` tags every frame with its black percentage so the
/// `metadata` filter can keep the ones below `percent`; timestamps are then
/// renumbered to close the gaps.
pub fn black_frame_filter(thresholds: &BlackFrameThresholds) -> String {
    FilterChain::new()
        .add_filter(format!("blackframe=amount=0:threshold={}", thresholds.luma))
        .add_filter(format!(
            "metadata=select:key=lavfi.blackframe.pblack:value={}:function=less",
            thresholds.percent
        ))
        .add_filter("setpts=N/FRAME_RATE/TB")
        .build()
        .unwrap_or_default()
}

pub fn build_remove_near_black_frames(
    config: &CoreConfig,
    input: &Path,
    output: &Path,
    thresholds: &BlackFrameThresholds,
) -> ExternalCommand {
    FfmpegCommandBuilder::from_config(config)
        .build()
        .args(["-i".to_string(), path_arg(input)])
        .args(["-vf".to_string(), black_frame_filter(thresholds)])
        // audio would no longer line up with the remaining frames
        .arg("-an")
        .arg(path_arg(output))
}

pub fn build_fade_out(
    config: &CoreConfig,
    input: &Path,
    output: &Path,
    window: &FadeWindow,
) -> ExternalCommand {
    let FadeWindow { start, duration } = *window;
    FfmpegCommandBuilder::from_config(config)
        .build()
        .args(["-i".to_string(), path_arg(input)])
        .args(["-af".to_string(), format!("afade=t=out:st={start}:d={duration}")])
        .args(["-vf".to_string(), format!("fade=t=out:st={start}:d={duration}")])
        .arg(path_arg(output))
}
