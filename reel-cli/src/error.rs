// ============================================================================
// reel-cli/src/error.rs
// ============================================================================
//
// CLI ERROR HANDLING
//
// Commands return the core's CoreError unchanged so the message printed by
// main names the failing tool or path. Setup steps that happen before any
// command runs prefix their failures with CliErrorContext.

use reel_core::{CoreError, CoreResult};

use std::fmt;

/// Result of a CLI step.
pub type CliResult<T> = CoreResult<T>;

/// Prefixes a failure with the CLI step that produced it.
pub trait CliErrorContext<T> {
    fn cli_context<C: fmt::Display>(self, context: C) -> CliResult<T>;
}

impl<T> CliErrorContext<T> for CoreResult<T> {
    fn cli_context<C: fmt::Display>(self, context: C) -> CliResult<T> {
        self.map_err(|e| CoreError::OperationFailed(format!("{context}: {e}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_context_is_prepended() {
        let result: CoreResult<()> =
            Err(CoreError::Config("ffmpeg path must not be empty".to_string()));
        let err = result.cli_context("Invalid options").unwrap_err();
        assert!(matches!(err, CoreError::OperationFailed(_)));
        assert_eq!(
            err.to_string(),
            "Invalid options: Invalid configuration: ffmpeg path must not be empty"
        );
    }

    #[test]
    fn test_success_passes_through() {
        let result: CoreResult<u8> = Ok(7);
        assert_eq!(result.cli_context("unused").unwrap(), 7);
    }
}
