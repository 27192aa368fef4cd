//! Single-pass edits: container conversion, concatenation, audio muxing,
//! near-black frame removal and fade-out.

use crate::config::{CoreConfig, DEFAULT_FADE_DURATION_SECS};
use crate::error::{CoreError, CoreResult};
use crate::external::{ProcessExecutor, ffmpeg, ffprobe};
use crate::params::{
    BlackFrameThresholds, FadeWindow, compute_fade_window, validate_fade_duration,
};
use crate::processing::ensure_input_exists;

use log::info;
use std::path::{Path, PathBuf};

/// Converts `input` to an H.264/AAC MP4.
///
/// Without an explicit `output` the result is written next to the input with
/// an `.mp4` extension. Returns the path written.
pub fn convert_to_mp4<E: ProcessExecutor>(
    executor: &E,
    config: &CoreConfig,
    input: &Path,
    output: Option<&Path>,
) -> CoreResult<PathBuf> {
    ensure_input_exists(input)?;
    let output = output.map_or_else(|| input.with_extension("mp4"), Path::to_path_buf);
    if output == input {
        return Err(CoreError::InvalidArgument(format!(
            "'{}' is already the output path; choose a different output",
            input.display()
        )));
    }

    info!("Converting {} -> {}", input.display(), output.display());
    executor.run(&ffmpeg::build_convert_to_mp4(config, input, &output))?;
    Ok(output)
}

/// Joins `inputs` in order into `output` without re-encoding.
pub fn concat<E: ProcessExecutor, P: AsRef<Path>>(
    executor: &E,
    config: &CoreConfig,
    inputs: &[P],
    output: &Path,
) -> CoreResult<()> {
    for input in inputs {
        ensure_input_exists(input.as_ref())?;
    }

    // The manifest is deleted when it goes out of scope, after ffmpeg exits.
    let (manifest, cmd) = ffmpeg::prepare_concat(config, inputs, output)?;
    info!(
        "Concatenating {} clips -> {}",
        manifest.entries().len(),
        output.display()
    );
    executor.run(&cmd)
}

/// Replaces the audio of `video` with `audio`, cut to the shorter of the two.
pub fn mux_audio<E: ProcessExecutor>(
    executor: &E,
    config: &CoreConfig,
    video: &Path,
    audio: &Path,
    output: &Path,
) -> CoreResult<()> {
    ensure_input_exists(video)?;
    ensure_input_exists(audio)?;

    info!(
        "Muxing audio {} into {} -> {}",
        audio.display(),
        video.display(),
        output.display()
    );
    executor.run(&ffmpeg::build_mux_audio(config, video, audio, output))
}

/// Drops frames that are at least `thresholds.percent` % black.
pub fn remove_near_black_frames<E: ProcessExecutor>(
    executor: &E,
    config: &CoreConfig,
    input: &Path,
    output: &Path,
    thresholds: BlackFrameThresholds,
) -> CoreResult<()> {
    ensure_input_exists(input)?;
    let thresholds = BlackFrameThresholds::new(thresholds.luma, thresholds.percent)?;

    info!(
        "Removing near-black frames (luma <= {}, >= {}% of frame) from {} -> {}",
        thresholds.luma,
        thresholds.percent,
        input.display(),
        output.display()
    );
    executor.run(&ffmpeg::build_remove_near_black_frames(
        config,
        input,
        output,
        &thresholds,
    ))
}

/// Fades audio and video out over the last `fade_duration` seconds.
pub fn fade_out<E: ProcessExecutor>(
    executor: &E,
    config: &CoreConfig,
    input: &Path,
    output: &Path,
    fade_duration: Option<i64>,
) -> CoreResult<FadeWindow> {
    ensure_input_exists(input)?;
    let fade_duration = fade_duration.unwrap_or(DEFAULT_FADE_DURATION_SECS);
    validate_fade_duration(fade_duration)?;

    let duration = ffprobe::get_duration(executor, config, input)?;
    let window = compute_fade_window(duration, fade_duration)?;

    info!(
        "Fading out {} from {}s for {}s -> {}",
        input.display(),
        window.start,
        window.duration,
        output.display()
    );
    executor.run(&ffmpeg::build_fade_out(config, input, output, &window))?;
    Ok(window)
}
