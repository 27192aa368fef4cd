// ============================================================================
// reel-cli/src/logging.rs
// ============================================================================
//
// LOGGING: env_logger setup for the CLI
//
// The core logs through the `log` facade; this module installs env_logger as
// the backend.
//
// USAGE:
// - default: info
// - --verbose: debug (shows every ffmpeg/ffprobe command line)
// - RUST_LOG overrides both, e.g. RUST_LOG=reel_core=trace

use log::LevelFilter;
use std::io::Write;

/// Level used when RUST_LOG is unset.
pub fn default_level(verbose: bool) -> LevelFilter {
    if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    }
}

/// Installs the global logger. Safe to call more than once; later calls are
/// ignored.
pub fn init_logging(verbose: bool) {
    let mut builder = env_logger::Builder::new();
    builder
        .filter_level(default_level(verbose))
        .parse_default_env()
        .format(|buf, record| {
            let level_style = buf.default_level_style(record.level());
            writeln!(
                buf,
                "{level_style}{:<5}{level_style:#} {}",
                record.level(),
                record.args()
            )
        });

    let _ = builder.try_init();
}
