//! Core library for video operations driven by ffmpeg and ffprobe.
//!
//! This crate measures durations, converts containers, concatenates clips,
//! changes playback speed, removes near-black frames, muxes audio and applies
//! fade-outs. All media work is delegated to the external tools; the crate
//! validates arguments, derives parameters, builds command lines and runs
//! them through an injectable [`ProcessExecutor`].
//!
//! ## Usage Example
//!
//! ```rust,no_run
//! use reel_core::{CoreConfig, SystemExecutor, processing};
//! use std::path::Path;
//!
//! let config = CoreConfig::default();
//! let executor = SystemExecutor::new();
//!
//! let plan = processing::shrink_to_duration(
//!     &executor,
//!     &config,
//!     "talk.mp4".into(),
//!     "talk_short.mp4".into(),
//!     60.0,
//!     false,
//!     false,
//! ).unwrap();
//! println!("sped up by {:.2}x", plan.factor);
//!
//! let seconds = processing::get_duration(&executor, &config, Path::new("talk_short.mp4")).unwrap();
//! println!("{seconds}");
//! ```

pub mod config;
pub mod error;
pub mod external;
pub mod params;
pub mod processing;
pub mod temp_files;
pub mod utils;

// Re-exports for public API
pub use config::CoreConfig;
pub use error::{CoreError, CoreResult};
pub use external::{ConcatManifest, ExternalCommand, ProcessExecutor, SystemExecutor};
pub use params::{
    BlackFrameThresholds, FadeWindow, FrameRate, ProbeResult, SpeedPlan, SpeedRequest,
};
pub use processing::SpeedOptions;
pub use utils::format_duration;
