//! Speed changes: by an explicit factor or to fit a target duration.

use crate::config::CoreConfig;
use crate::error::{CoreError, CoreResult};
use crate::external::{ProcessExecutor, ffmpeg, ffprobe};
use crate::params::{
    SpeedPlan, SpeedRequest, compute_speed_factor_for_duration, compute_target_frame_rate,
    validate_speed_request,
};
use crate::processing::ensure_input_exists;

use log::info;
use std::path::PathBuf;

/// Everything a speed change needs.
#[derive(Debug, Clone, Default)]
pub struct SpeedOptions {
    pub input: PathBuf,
    pub output: PathBuf,
    /// Playback-rate multiplier. Takes precedence over `target_duration`.
    pub factor: Option<f64>,
    /// Desired output length in seconds
    pub target_duration: Option<f64>,
    /// Motion-interpolate to the target frame rate instead of rescaling timestamps
    pub smooth: bool,
    /// Raise the output frame rate along with the speed (capped at 60)
    pub adjust_frame_rate: bool,
}

/// Resolves the request into a `SpeedPlan`, probing the input as needed.
pub fn plan_speed_change<E: ProcessExecutor>(
    executor: &E,
    config: &CoreConfig,
    options: &SpeedOptions,
) -> CoreResult<SpeedPlan> {
    let factor = match validate_speed_request(options.factor, options.target_duration)? {
        SpeedRequest::Factor(factor) => factor,
        SpeedRequest::TargetDuration(target) => {
            let current = ffprobe::get_duration(executor, config, &options.input)?;
            let factor = compute_speed_factor_for_duration(current, target)?;
            info!("Shrinking {current:.2}s to {target:.2}s (factor {factor:.4})");
            factor
        }
    };

    if !(factor.is_finite() && factor > 0.0) {
        return Err(CoreError::Arithmetic(format!(
            "derived speed factor {factor} is not positive"
        )));
    }

    let target_frame_rate = if options.smooth || options.adjust_frame_rate {
        let current = ffprobe::get_frame_rate(executor, config, &options.input)?.as_f64()?;
        let target = compute_target_frame_rate(current, factor);
        log::debug!("Frame rate {current:.3} x {factor:.4} -> {target}");
        Some(target)
    } else {
        None
    };

    Ok(SpeedPlan {
        factor,
        target_frame_rate,
        interpolate: options.smooth,
    })
}

/// Changes playback speed of `options.input`, writing `options.output`.
pub fn speed_up<E: ProcessExecutor>(
    executor: &E,
    config: &CoreConfig,
    options: &SpeedOptions,
) -> CoreResult<SpeedPlan> {
    ensure_input_exists(&options.input)?;

    let plan = plan_speed_change(executor, config, options)?;
    let cmd = ffmpeg::build_speed_change(config, &options.input, &options.output, &plan)?;

    info!(
        "Changing speed of {} by {:.2}x -> {}",
        options.input.display(),
        plan.factor,
        options.output.display()
    );
    executor.run(&cmd)?;
    Ok(plan)
}

/// Speeds `input` up (or slows it down) so it lasts `target_duration` seconds.
pub fn shrink_to_duration<E: ProcessExecutor>(
    executor: &E,
    config: &CoreConfig,
    input: PathBuf,
    output: PathBuf,
    target_duration: f64,
    smooth: bool,
    adjust_frame_rate: bool,
) -> CoreResult<SpeedPlan> {
    // Zero would read as "not given" to the request validation.
    if target_duration == 0.0 {
        return Err(CoreError::Arithmetic(
            "target duration must be greater than zero, got 0".to_string(),
        ));
    }
    speed_up(
        executor,
        config,
        &SpeedOptions {
            input,
            output,
            factor: None,
            target_duration: Some(target_duration),
            smooth,
            adjust_frame_rate,
        },
    )
}
