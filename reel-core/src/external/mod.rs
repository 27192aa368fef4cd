// ============================================================================
// reel-core/src/external/mod.rs
// ============================================================================
//
// EXTERNAL TOOLS: Interactions with ffmpeg and ffprobe
//
// This module encapsulates every interaction with the external command-line
// tools. Commands are built as plain argument lists (ExternalCommand) by pure
// functions and handed to a ProcessExecutor, so the whole pipeline can be
// exercised in tests without the real binaries.
//
// KEY COMPONENTS:
// - ExternalCommand: program name plus ordered argument tokens
// - ProcessExecutor trait and the SystemExecutor implementation
// - ffprobe: duration and frame-rate queries
// - ffmpeg: argument construction for every transcode operation
// - manifest: scoped concat demuxer manifest files

use std::fmt;

// ============================================================================
// SUBMODULES
// ============================================================================

/// Traits and implementations for executing external commands
pub mod executor;

/// Argument construction for ffmpeg transcode operations
pub mod ffmpeg;

/// Duration and frame-rate probing via ffprobe
pub mod ffprobe;

/// Concat demuxer manifest files
pub mod manifest;

#[cfg(any(test, feature = "test-mocks"))]
pub mod mocks;

// ============================================================================
// RE-EXPORTS
// ============================================================================

pub use executor::{ProcessExecutor, SystemExecutor};
pub use manifest::ConcatManifest;

// ============================================================================
// EXTERNAL COMMAND
// ============================================================================

/// A fully built invocation of an external tool.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExternalCommand {
    program: String,
    args: Vec<String>,
}

impl ExternalCommand {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
        }
    }

    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    pub fn get_args(&self) -> &[String] {
        &self.args
    }

    /// Value following the first occurrence of `flag`, if any.
    pub fn value_of(&self, flag: &str) -> Option<&str> {
        self.args
            .iter()
            .position(|a| a == flag)
            .and_then(|i| self.args.get(i + 1))
            .map(String::as_str)
    }

    pub fn has_arg(&self, arg: &str) -> bool {
        self.args.iter().any(|a| a == arg)
    }
}

impl fmt::Display for ExternalCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program)?;
        for arg in &self.args {
            if arg.is_empty() || arg.contains([' ', '\'', '"']) {
                write!(f, " '{}'", arg.replace('\'', r"'\''"))?;
            } else {
                write!(f, " {arg}")?;
            }
        }
        Ok(())
    }
}
