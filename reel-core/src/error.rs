// ============================================================================
// reel-core/src/error.rs
// ============================================================================
//
// ERROR HANDLING: Error Types for the Core Library
//
// Every failure in the core surfaces to the caller as a CoreError. Nothing is
// recovered or retried internally; each external invocation is attempted once.
//
// KEY COMPONENTS:
// - CoreError: probe, arithmetic, argument and external tool failures
// - CoreResult: result alias used throughout the crate
// - Helper constructors for command start/failure errors

use std::io;
use std::path::Path;
use std::process::ExitStatus;

use thiserror::Error;

/// Errors produced by the core library.
#[derive(Error, Debug)]
pub enum CoreError {
    /// The probing tool is missing, failed, or produced unparseable output.
    #[error("Failed to probe '{path}': {message}")]
    Probe { path: String, message: String },

    /// Invalid numeric input, such as a zero denominator or a non-positive
    /// target duration.
    #[error("Arithmetic error: {0}")]
    Arithmetic(String),

    /// Missing or conflicting parameters.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// The external tool ran but exited with a non-zero status.
    #[error("{tool} failed with exit code {}: {stderr}", display_code(.code))]
    ExternalTool {
        tool: String,
        code: Option<i32>,
        stderr: String,
    },

    #[error("Failed to start {0}: {1}")]
    CommandStart(String, #[source] io::Error),

    #[error("Path error: {0}")]
    PathError(String),

    #[error("Invalid configuration: {0}")]
    Config(String),

    /// A failure with caller-supplied context prepended.
    #[error("{0}")]
    OperationFailed(String),

    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

fn display_code(code: &Option<i32>) -> String {
    code.map_or_else(|| "unknown".to_string(), |c| c.to_string())
}

/// Result alias for core operations.
pub type CoreResult<T> = Result<T, CoreError>;

impl CoreError {
    /// Exit code of the external tool, when this error carries one.
    pub fn exit_code(&self) -> Option<i32> {
        match self {
            CoreError::ExternalTool { code, .. } => *code,
            _ => None,
        }
    }
}

/// Builds an `ExternalTool` error from a finished process.
pub fn command_failed_error(
    tool: impl Into<String>,
    status: ExitStatus,
    stderr: impl Into<String>,
) -> CoreError {
    CoreError::ExternalTool {
        tool: tool.into(),
        code: status.code(),
        stderr: stderr.into(),
    }
}

/// Builds a `CommandStart` error for a process that could not be spawned.
pub fn command_start_error(tool: impl Into<String>, err: io::Error) -> CoreError {
    CoreError::CommandStart(tool.into(), err)
}

/// Wraps any failure of the probing tool into a `Probe` error.
pub(crate) fn probe_error(path: &Path, err: impl std::fmt::Display) -> CoreError {
    CoreError::Probe {
        path: path.display().to_string(),
        message: err.to_string(),
    }
}
