// reel-core/src/external/mocks.rs

// --- Mocking Infrastructure (for testing) ---

// Compiled for unit tests and when the "test-mocks" feature is enabled.

use crate::error::{CoreError, CoreResult};
use crate::external::{ExternalCommand, ProcessExecutor};

use std::cell::RefCell;
use std::rc::Rc;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CallKind {
    Run,
    Capture,
}

/// Represents an expected command and its mock result.
struct MockExpectation {
    kind: CallKind,
    arg_pattern: String,
    // Ok(stdout) or Err(exit code)
    result: Result<String, i32>,
}

/// Mock implementation of ProcessExecutor supporting multiple expectations.
///
/// Each call consumes the first expectation of the same kind whose pattern
/// occurs in one of the command's arguments.
#[derive(Clone, Default)]
pub struct MockExecutor {
    expectations: Rc<RefCell<Vec<MockExpectation>>>,
    received_calls: Rc<RefCell<Vec<ExternalCommand>>>,
}

impl MockExecutor {
    pub fn new() -> Self {
        Default::default()
    }

    fn add_expectation(&self, kind: CallKind, arg_pattern: &str, result: Result<String, i32>) {
        self.expectations.borrow_mut().push(MockExpectation {
            kind,
            arg_pattern: arg_pattern.to_string(),
            result,
        });
    }

    /// A capture whose args match `arg_pattern` prints `stdout`.
    pub fn expect_capture(&self, arg_pattern: &str, stdout: &str) {
        self.add_expectation(CallKind::Capture, arg_pattern, Ok(stdout.to_string()));
    }

    /// A capture whose args match `arg_pattern` exits with `exit_code`.
    pub fn expect_capture_failure(&self, arg_pattern: &str, exit_code: i32) {
        self.add_expectation(CallKind::Capture, arg_pattern, Err(exit_code));
    }

    /// A run whose args match `arg_pattern` succeeds.
    pub fn expect_run(&self, arg_pattern: &str) {
        self.add_expectation(CallKind::Run, arg_pattern, Ok(String::new()));
    }

    /// A run whose args match `arg_pattern` exits with `exit_code`.
    pub fn expect_run_failure(&self, arg_pattern: &str, exit_code: i32) {
        self.add_expectation(CallKind::Run, arg_pattern, Err(exit_code));
    }

    pub fn get_received_calls(&self) -> Vec<ExternalCommand> {
        self.received_calls.borrow().clone()
    }

    /// Expectations that were never matched.
    pub fn pending_expectations(&self) -> usize {
        self.expectations.borrow().len()
    }

    fn dispatch(&self, kind: CallKind, cmd: &ExternalCommand) -> CoreResult<String> {
        self.received_calls.borrow_mut().push(cmd.clone());

        let mut expectations = self.expectations.borrow_mut();
        let found_index = expectations.iter().position(|exp| {
            exp.kind == kind && cmd.get_args().iter().any(|arg| arg.contains(&exp.arg_pattern))
        });

        let Some(index) = found_index else {
            log::error!("MockExecutor: No expectation found for {kind:?} of: {cmd}");
            panic!("MockExecutor: No expectation found for {kind:?} of: {cmd}");
        };

        let expectation = expectations.remove(index);
        log::info!(
            "MockExecutor: Matched expectation with pattern '{}'",
            expectation.arg_pattern
        );
        expectation.result.map_err(|code| CoreError::ExternalTool {
            tool: cmd.program().to_string(),
            code: Some(code),
            stderr: format!("mock failure for pattern '{}'", expectation.arg_pattern),
        })
    }
}

impl ProcessExecutor for MockExecutor {
    fn run(&self, cmd: &ExternalCommand) -> CoreResult<()> {
        self.dispatch(CallKind::Run, cmd).map(|_| ())
    }

    fn capture(&self, cmd: &ExternalCommand) -> CoreResult<String> {
        self.dispatch(CallKind::Capture, cmd)
    }
}
