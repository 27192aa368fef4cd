//! Derived-parameter calculations.
//!
//! Pure functions that turn probed metadata and user requests into the
//! numbers the ffmpeg command builders need: speed factors, target frame
//! rates and fade windows. Nothing here performs I/O.

use crate::config::MAX_TARGET_FRAME_RATE;
use crate::error::{CoreError, CoreResult};

use std::fmt;
use std::str::FromStr;

/// Frame rate as reported by ffprobe (`N/D`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameRate {
    pub num: u32,
    pub den: u32,
}

impl FrameRate {
    pub fn new(num: u32, den: u32) -> Self {
        Self { num, den }
    }

    /// Frames per second as a float. Fails for a zero denominator.
    pub fn as_f64(&self) -> CoreResult<f64> {
        rational_to_float(self.num, self.den)
    }
}

impl fmt::Display for FrameRate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.num, self.den)
    }
}

impl FromStr for FrameRate {
    type Err = CoreError;

    fn from_str(s: &str) -> CoreResult<Self> {
        let s = s.trim();
        let parse = |part: &str| {
            part.trim().parse::<u32>().map_err(|e| {
                CoreError::InvalidArgument(format!("invalid frame rate '{s}': {e}"))
            })
        };
        match s.split_once('/') {
            Some((num, den)) => Ok(Self::new(parse(num)?, parse(den)?)),
            None => Ok(Self::new(parse(s)?, 1)),
        }
    }
}

/// Metadata gathered from a single file.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProbeResult {
    pub duration: f64,
    pub frame_rate: FrameRate,
}

/// How the caller asked for the speed change.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SpeedRequest {
    Factor(f64),
    TargetDuration(f64),
}

/// Fully resolved speed change, consumed once by the command builder.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpeedPlan {
    /// Playback-rate multiplier, always > 0
    pub factor: f64,
    /// Output frame rate in [1, 60]; set when smoothing or frame-rate
    /// adjustment was requested
    pub target_frame_rate: Option<u32>,
    /// Use motion interpolation instead of a timestamp rescale
    pub interpolate: bool,
}

/// Start and length, in whole seconds, of a fade-out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FadeWindow {
    pub start: i64,
    pub duration: i64,
}

/// Thresholds for the near-black frame filter, both percentages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlackFrameThresholds {
    pub luma: u8,
    pub percent: u8,
}

impl BlackFrameThresholds {
    pub fn new(luma: u8, percent: u8) -> CoreResult<Self> {
        validate_black_frame_thresholds(luma, percent)?;
        Ok(Self { luma, percent })
    }
}

impl Default for BlackFrameThresholds {
    fn default() -> Self {
        Self {
            luma: crate::config::DEFAULT_BLACK_LUMA_THRESHOLD,
            percent: crate::config::DEFAULT_BLACK_PERCENT_THRESHOLD,
        }
    }
}

pub fn rational_to_float(num: u32, den: u32) -> CoreResult<f64> {
    if den == 0 {
        return Err(CoreError::Arithmetic(format!(
            "cannot convert {num}/{den}: denominator is zero"
        )));
    }
    Ok(f64::from(num) / f64::from(den))
}

/// Factor that turns `current_duration` into `target_duration`.
pub fn compute_speed_factor_for_duration(
    current_duration: f64,
    target_duration: f64,
) -> CoreResult<f64> {
    if !target_duration.is_finite() || target_duration <= 0.0 {
        return Err(CoreError::Arithmetic(format!(
            "target duration must be greater than zero, got {target_duration}"
        )));
    }
    Ok(current_duration / target_duration)
}

/// `floor(current_frame_rate * factor)`, clamped to [1, 60].
pub fn compute_target_frame_rate(current_frame_rate: f64, factor: f64) -> u32 {
    let raw = (current_frame_rate * factor).floor();
    if raw.is_nan() || raw < 1.0 {
        1
    } else if raw >= f64::from(MAX_TARGET_FRAME_RATE) {
        MAX_TARGET_FRAME_RATE
    } else {
        raw as u32
    }
}

/// Resolves the factor/duration pair into a single request.
///
/// A value counts as given when it is present and non-zero. When both are
/// given the factor takes precedence and the duration is ignored.
pub fn validate_speed_request(
    factor: Option<f64>,
    target_duration: Option<f64>,
) -> CoreResult<SpeedRequest> {
    let factor = factor.filter(|f| *f != 0.0);
    let target_duration = target_duration.filter(|d| *d != 0.0);

    match (factor, target_duration) {
        (Some(f), other) => {
            if !f.is_finite() || f < 0.0 {
                return Err(CoreError::InvalidArgument(format!(
                    "speed factor must be a positive number, got {f}"
                )));
            }
            if other.is_some() {
                log::debug!("Both factor and duration given; using factor {f}");
            }
            Ok(SpeedRequest::Factor(f))
        }
        (None, Some(d)) => Ok(SpeedRequest::TargetDuration(d)),
        (None, None) => Err(CoreError::InvalidArgument(
            "must provide either factor or duration".to_string(),
        )),
    }
}

pub fn validate_fade_duration(fade_duration: i64) -> CoreResult<()> {
    if fade_duration <= 0 {
        return Err(CoreError::InvalidArgument(format!(
            "fade duration must be greater than zero, got {fade_duration}"
        )));
    }
    Ok(())
}

/// Fade that ends with the clip. A negative start is passed through as is.
pub fn compute_fade_window(duration: f64, fade_duration: i64) -> CoreResult<FadeWindow> {
    validate_fade_duration(fade_duration)?;
    let start = (duration.floor() as i64)
        .checked_sub(fade_duration)
        .ok_or_else(|| {
            CoreError::Arithmetic(format!(
                "fade start {duration} - {fade_duration} is out of range"
            ))
        })?;
    if start < 0 {
        log::warn!(
            "Fade of {fade_duration}s is longer than the {duration}s clip; start time {start} passed through"
        );
    }
    Ok(FadeWindow {
        start,
        duration: fade_duration,
    })
}

/// `1/factor` with two decimals, as used in `setpts=<x>*PTS`.
pub fn format_pts_multiplier(factor: f64) -> String {
    format!("{:.2}", 1.0 / factor)
}


pub fn validate_black_frame_thresholds(luma: u8, percent: u8) -> CoreResult<()> {
    if luma > 100 {
        return Err(CoreError::InvalidArgument(format!(
            "luma threshold must be between 0 and 100, got {luma}"
        )));
    }
    if percent > 100 {
        return Err(CoreError::InvalidArgument(format!(
            "black percentage must be between 0 and 100, got {percent}"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rational_to_float() {
        assert_eq!(rational_to_float(30, 1).unwrap(), 30.0);
        assert!((rational_to_float(30000, 1001).unwrap() - 29.97).abs() < 0.01);
        assert!(matches!(rational_to_float(0, 0), Err(CoreError::Arithmetic(_))));
        assert!(matches!(rational_to_float(25, 0), Err(CoreError::Arithmetic(_))));
    }

    #[test]
    fn test_frame_rate_parsing() {
        assert_eq!("30000/1001".parse::<FrameRate>().unwrap(), FrameRate::new(30000, 1001));
        assert_eq!(" 25/1\n".parse::<FrameRate>().unwrap(), FrameRate::new(25, 1));
        assert_eq!("24".parse::<FrameRate>().unwrap(), FrameRate::new(24, 1));
        assert!("N/A".parse::<FrameRate>().is_err());
        assert!("".parse::<FrameRate>().is_err());
        assert!("0/0".parse::<FrameRate>().unwrap().as_f64().is_err());
        assert_eq!(FrameRate::new(60, 1).to_string(), "60/1");
    }

    #[test]
    fn test_speed_factor_for_duration() {
        assert_eq!(compute_speed_factor_for_duration(20.0, 10.0).unwrap(), 2.0);
        assert!((compute_speed_factor_for_duration(10.0, 40.0).unwrap() - 0.25).abs() < 1e-12);
        assert!((compute_speed_factor_for_duration(7.3, 2.1).unwrap() - 7.3 / 2.1).abs() < 1e-12);
        assert!(compute_speed_factor_for_duration(10.0, 0.0).is_err());
        assert!(compute_speed_factor_for_duration(10.0, -5.0).is_err());
        assert!(compute_speed_factor_for_duration(10.0, f64::NAN).is_err());
    }

    #[test]
    fn test_target_frame_rate_floor_and_upper_clamp() {
        assert_eq!(compute_target_frame_rate(30.0, 1.5), 45);
        assert_eq!(compute_target_frame_rate(29.97, 1.0), 29);
        assert_eq!(compute_target_frame_rate(30.0, 2.0), 60);
        assert_eq!(compute_target_frame_rate(30.0, 4.0), 60);
        assert_eq!(compute_target_frame_rate(120.0, 1.0), 60);

        for (rate, factor) in [(24.0_f64, 1.25_f64), (25.0, 2.0), (59.94, 0.5), (23.976, 3.0)] {
            let expected = (rate * factor).floor().min(60.0) as u32;
            assert_eq!(compute_target_frame_rate(rate, factor), expected);
        }
    }

    #[test]
    fn test_target_frame_rate_lower_clamp() {
        assert_eq!(compute_target_frame_rate(1.0, 0.5), 1);
        assert_eq!(compute_target_frame_rate(0.0, 2.0), 1);
        assert_eq!(compute_target_frame_rate(f64::NAN, 2.0), 1);
    }

    #[test]
    fn test_validate_speed_request() {
        assert!(matches!(
            validate_speed_request(None, None),
            Err(CoreError::InvalidArgument(_))
        ));
        assert!(matches!(
            validate_speed_request(Some(0.0), Some(0.0)),
            Err(CoreError::InvalidArgument(_))
        ));
        assert_eq!(
            validate_speed_request(Some(2.0), None).unwrap(),
            SpeedRequest::Factor(2.0)
        );
        assert_eq!(
            validate_speed_request(None, Some(10.0)).unwrap(),
            SpeedRequest::TargetDuration(10.0)
        );
        assert_eq!(
            validate_speed_request(Some(0.0), Some(10.0)).unwrap(),
            SpeedRequest::TargetDuration(10.0)
        );
    }

    #[test]
    fn test_factor_wins_over_duration() {
        assert_eq!(
            validate_speed_request(Some(1.5), Some(10.0)).unwrap(),
            SpeedRequest::Factor(1.5)
        );
    }

    #[test]
    fn test_negative_factor_rejected() {
        assert!(matches!(
            validate_speed_request(Some(-2.0), None),
            Err(CoreError::InvalidArgument(_))
        ));
        assert!(validate_speed_request(Some(f64::INFINITY), None).is_err());
    }

    #[test]
    fn test_fade_window() {
        assert_eq!(compute_fade_window(10.0, 2).unwrap(), FadeWindow { start: 8, duration: 2 });
        assert_eq!(compute_fade_window(10.9, 2).unwrap(), FadeWindow { start: 8, duration: 2 });
        assert_eq!(compute_fade_window(1.0, 2).unwrap(), FadeWindow { start: -1, duration: 2 });
    }

    #[test]
    fn test_fade_window_rejects_non_positive_lengths() {
        for bad in [0, -3, i64::MIN] {
            assert!(matches!(
                compute_fade_window(10.0, bad),
                Err(CoreError::InvalidArgument(_))
            ));
        }
    }

    #[test]
    fn test_fade_window_start_overflow() {
        assert!(matches!(
            compute_fade_window(-1e300, 2),
            Err(CoreError::Arithmetic(_))
        ));
        assert_eq!(
            compute_fade_window(10.0, i64::MAX).unwrap().start,
            10 - i64::MAX
        );
    }

    #[test]
    fn test_pts_multiplier_formatting() {
        assert_eq!(format_pts_multiplier(2.0), "0.50");
        assert_eq!(format_pts_multiplier(3.0), "0.33");
        assert_eq!(format_pts_multiplier(0.5), "2.00");
        assert_eq!(format_pts_multiplier(1.0), "1.00");
    }

    #[test]
    fn test_black_frame_thresholds() {
        assert!(BlackFrameThresholds::new(0, 0).is_ok());
        assert!(BlackFrameThresholds::new(100, 100).is_ok());
        assert!(BlackFrameThresholds::new(101, 50).is_err());
        assert!(BlackFrameThresholds::new(32, 101).is_err());
        assert_eq!(
            BlackFrameThresholds::default(),
            BlackFrameThresholds { luma: 32, percent: 98 }
        );
    }
}
