// ============================================================================
// reel-core/src/config.rs
// ============================================================================
//
// CONFIGURATION: Core Configuration Structures and Constants
//
// KEY COMPONENTS:
// - CoreConfig: tool locations, temp directory and fixed encoding values
// - Default constants shared with the CLI
//
// USAGE:
// Instances of CoreConfig are created by consumers of the library (like reel-cli)
// and passed to every operation in `processing`.

use crate::error::{CoreError, CoreResult};

use std::path::PathBuf;

// ============================================================================
// DEFAULT CONSTANTS
// ============================================================================

/// Program name used for the transcoding tool unless overridden.
pub const DEFAULT_FFMPEG_PATH: &str = "ffmpeg";

/// Program name used for the probing tool unless overridden.
pub const DEFAULT_FFPROBE_PATH: &str = "ffprobe";

/// Fixed bitrate for audio re-encoded while muxing.
pub const DEFAULT_AUDIO_BITRATE: &str = "192k";

/// Fade-out length in seconds when none is requested.
pub const DEFAULT_FADE_DURATION_SECS: i64 = 2;

/// Luma threshold below which a pixel counts as black (0-100).
pub const DEFAULT_BLACK_LUMA_THRESHOLD: u8 = 32;

/// Percentage of black pixels at which a frame is dropped (0-100).
pub const DEFAULT_BLACK_PERCENT_THRESHOLD: u8 = 98;

/// Upper bound for any frame rate we hand to ffmpeg.
pub const MAX_TARGET_FRAME_RATE: u32 = 60;

// ============================================================================
// CORE CONFIGURATION
// ============================================================================

/// Main configuration structure for the reel-core library.
///
/// # Examples
///
/// ```rust
/// use reel_core::CoreConfig;
///
/// let mut config = CoreConfig::default();
/// config.ffmpeg_path = "/opt/ffmpeg/bin/ffmpeg".to_string();
/// config.validate().unwrap();
/// ```
#[derive(Debug, Clone)]
pub struct CoreConfig {
    /// Program invoked for transcoding
    pub ffmpeg_path: String,

    /// Program invoked for probing
    pub ffprobe_path: String,

    /// Directory for concat manifests. Falls back to the platform temp dir.
    pub temp_dir: Option<PathBuf>,

    /// Bitrate for audio encoded during muxing (e.g. "192k")
    pub audio_bitrate: String,

    /// Pass `-y` so ffmpeg never stops to ask about an existing output
    pub overwrite: bool,
}

impl Default for CoreConfig {
    fn default() -> Self {
        Self {
            ffmpeg_path: DEFAULT_FFMPEG_PATH.to_string(),
            ffprobe_path: DEFAULT_FFPROBE_PATH.to_string(),
            temp_dir: None,
            audio_bitrate: DEFAULT_AUDIO_BITRATE.to_string(),
            overwrite: true,
        }
    }
}

impl CoreConfig {
    /// Creates a configuration with default tool names and settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Checks the configuration before any tool is invoked.
    pub fn validate(&self) -> CoreResult<()> {
        if self.ffmpeg_path.trim().is_empty() {
            return Err(CoreError::Config("ffmpeg path must not be empty".to_string()));
        }
        if self.ffprobe_path.trim().is_empty() {
            return Err(CoreError::Config("ffprobe path must not be empty".to_string()));
        }

        let digits = self
            .audio_bitrate
            .strip_suffix(['k', 'K', 'm', 'M'])
            .unwrap_or(&self.audio_bitrate);
        if digits.is_empty() || !digits.chars().all(|c| c.is_ascii_digit()) {
            return Err(CoreError::Config(format!(
                "audio bitrate '{}' is not a bitrate like 192k",
                self.audio_bitrate
            )));
        }

        if let Some(dir) = &self.temp_dir {
            if dir.exists() && !dir.is_dir() {
                return Err(CoreError::Config(format!(
                    "temp dir '{}' is not a directory",
                    dir.display()
                )));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = CoreConfig::default();
        assert_eq!(config.ffmpeg_path, "ffmpeg");
        assert_eq!(config.ffprobe_path, "ffprobe");
        assert_eq!(config.audio_bitrate, "192k");
        assert!(config.overwrite);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_empty_tool_path_rejected() {
        let config = CoreConfig {
            ffprobe_path: "  ".to_string(),
            ..CoreConfig::default()
        };
        assert!(matches!(config.validate(), Err(CoreError::Config(_))));
    }

    #[test]
    fn test_bitrate_validation() {
        for ok in ["128k", "320K", "2M", "64000"] {
            let config = CoreConfig {
                audio_bitrate: ok.to_string(),
                ..CoreConfig::default()
            };
            assert!(config.validate().is_ok(), "{ok} should be accepted");
        }
        for bad in ["", "k", "fast", "12.5k"] {
            let config = CoreConfig {
                audio_bitrate: bad.to_string(),
                ..CoreConfig::default()
            };
            assert!(config.validate().is_err(), "{bad} should be rejected");
        }
    }

    #[test]
    fn test_temp_dir_must_be_directory() {
        let file = tempfile::NamedTempFile::new().unwrap();
        let config = CoreConfig {
            temp_dir: Some(file.path().to_path_buf()),
            ..CoreConfig::default()
        };
        assert!(config.validate().is_err());
    }
}
