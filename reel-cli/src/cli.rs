// reel-cli/src/cli.rs
//
// Defines the command-line argument structures using clap.

use clap::{Args, Parser, Subcommand};
use reel_core::config::{
    DEFAULT_BLACK_LUMA_THRESHOLD, DEFAULT_BLACK_PERCENT_THRESHOLD, DEFAULT_FADE_DURATION_SECS,
};
use std::path::PathBuf;

// --- CLI Argument Definition ---

#[derive(Parser, Debug)]
#[command(
    author,
    version, // Reads from Cargo.toml via "cargo" feature in clap
    about = "Reel: video operations on top of ffmpeg",
    long_about = "Measures, converts, concatenates, speeds up, trims black frames from, \
                  muxes audio into and fades out videos by driving ffmpeg and ffprobe."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[command(flatten)]
    pub global: GlobalArgs,
}

#[derive(Args, Debug, Clone)]
pub struct GlobalArgs {
    /// Enable debug logging (RUST_LOG overrides)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// ffmpeg executable to run
    #[arg(long, global = true, value_name = "PATH", env = "REEL_FFMPEG")]
    pub ffmpeg: Option<String>,

    /// ffprobe executable to run
    #[arg(long, global = true, value_name = "PATH", env = "REEL_FFPROBE")]
    pub ffprobe: Option<String>,

    /// Directory for temporary concat manifests
    #[arg(long, global = true, value_name = "DIR", env = "REEL_TEMP_DIR")]
    pub temp_dir: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the duration of a video in seconds
    Duration(DurationArgs),

    /// Re-encode a video as H.264/AAC MP4
    #[command(name = "convert-to-mp4")]
    ConvertToMp4(ConvertArgs),

    /// Join clips end to end without re-encoding
    Concat(ConcatArgs),

    /// Drop frames that are almost entirely black
    #[command(name = "remove-near-black-frames")]
    RemoveNearBlackFrames(BlackFramesArgs),

    /// Change playback speed by a factor or to fit a duration
    Speedup(SpeedupArgs),

    /// Replace a video's audio track
    #[command(name = "mux-audio")]
    MuxAudio(MuxAudioArgs),

    /// Fade audio and video out at the end of a clip
    #[command(name = "fade-out")]
    FadeOut(FadeOutArgs),
}

#[derive(Args, Debug)]
pub struct DurationArgs {
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,
}

#[derive(Args, Debug)]
pub struct ConvertArgs {
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Output file (defaults to INPUT with an .mp4 extension)
    #[arg(short, long, value_name = "OUTPUT")]
    pub output: Option<PathBuf>,
}

#[derive(Args, Debug)]
pub struct ConcatArgs {
    /// Clips to join, in order
    #[arg(required = true, value_name = "INPUTS")]
    pub inputs: Vec<PathBuf>,

    #[arg(short, long, value_name = "OUTPUT")]
    pub output: PathBuf,
}

#[derive(Args, Debug)]
pub struct BlackFramesArgs {
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    #[arg(short, long, value_name = "OUTPUT")]
    pub output: PathBuf,

    /// Luma level (0-100) at or below which a pixel counts as black
    #[arg(
        long,
        value_name = "LUMA",
        default_value_t = DEFAULT_BLACK_LUMA_THRESHOLD,
        value_parser = clap::value_parser!(u8).range(0..=100)
    )]
    pub luma_threshold: u8,

    /// Percentage (0-100) of black pixels at which a frame is dropped
    #[arg(
        long,
        value_name = "PERCENT",
        default_value_t = DEFAULT_BLACK_PERCENT_THRESHOLD,
        value_parser = clap::value_parser!(u8).range(0..=100)
    )]
    pub percent: u8,
}

#[derive(Args, Debug)]
pub struct SpeedupArgs {
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    #[arg(short, long, value_name = "OUTPUT")]
    pub output: PathBuf,

    /// Playback-rate multiplier (2 = twice as fast)
    #[arg(short, long, value_name = "FACTOR", conflicts_with = "duration")]
    pub factor: Option<f64>,

    /// Target length in seconds
    #[arg(short, long, value_name = "SECONDS")]
    pub duration: Option<f64>,

    /// Smooth motion with frame interpolation
    #[arg(long)]
    pub smooth: bool,

    /// Raise the output frame rate with the speed (max 60 fps)
    #[arg(long)]
    pub adjust_frame_rate: bool,
}

#[derive(Args, Debug)]
pub struct MuxAudioArgs {
    #[arg(value_name = "VIDEO")]
    pub video: PathBuf,

    #[arg(value_name = "AUDIO")]
    pub audio: PathBuf,

    #[arg(short, long, value_name = "OUTPUT")]
    pub output: PathBuf,
}

#[derive(Args, Debug)]
pub struct FadeOutArgs {
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    #[arg(short, long, value_name = "OUTPUT")]
    pub output: PathBuf,

    /// Fade length in seconds (at least 1)
    #[arg(
        short,
        long,
        value_name = "SECONDS",
        default_value_t = DEFAULT_FADE_DURATION_SECS,
        value_parser = clap::value_parser!(i64).range(1..)
    )]
    pub duration: i64,
}
