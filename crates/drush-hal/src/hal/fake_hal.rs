//! Fake HAL implementation for testing.
//!
//! This implementation records all invocations without spawning anything and
//! replays scripted responses in order, allowing deterministic adapter tests.

use super::ProcessOps;
use crate::HalResult;
use std::collections::VecDeque;
#[cfg(unix)]
use std::os::unix::process::ExitStatusExt;
use std::path::{Path, PathBuf};
use std::process::{ExitStatus, Output};
use std::sync::{Arc, Mutex};

/// Operation records for testing and verification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Operation {
    Command {
        program: PathBuf,
        args: Vec<String>,
        cwd: Option<PathBuf>,
    },
}

impl Operation {
    pub fn args(&self) -> &[String] {
        match self {
            Operation::Command { args, .. } => args,
        }
    }
}

/// A scripted child result.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FakeResponse {
    pub code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl FakeResponse {
    pub fn ok(stdout: impl Into<String>) -> Self {
        Self {
            code: 0,
            stdout: stdout.into(),
            stderr: String::new(),
        }
    }

    pub fn fail(code: i32, stderr: impl Into<String>) -> Self {
        Self {
            code,
            stdout: String::new(),
            stderr: stderr.into(),
        }
    }
}

#[derive(Debug, Clone, Default)]
struct FakeHalState {
    operations: Vec<Operation>,
    responses: VecDeque<FakeResponse>,
}

/// Fake HAL implementation that records operations without executing them.
///
/// Responses are consumed first-in first-out; once the script runs dry every
/// command "succeeds" with empty output.
#[derive(Debug, Clone, Default)]
pub struct FakeHal {
    state: Arc<Mutex<FakeHalState>>,
}

impl FakeHal {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a fake that answers with `responses` in order.
    pub fn with_responses(responses: impl IntoIterator<Item = FakeResponse>) -> Self {
        let hal = Self::new();
        for response in responses {
            hal.push_response(response);
        }
        hal
    }

    pub fn push_response(&self, response: FakeResponse) {
        self.state.lock().unwrap().responses.push_back(response);
    }

    /// Get all recorded operations.
    pub fn operations(&self) -> Vec<Operation> {
        self.state.lock().unwrap().operations.clone()
    }

    /// Get the number of operations recorded.
    pub fn operation_count(&self) -> usize {
        self.state.lock().unwrap().operations.len()
    }

    /// Check if a specific operation was recorded.
    pub fn has_operation(&self, check: impl Fn(&Operation) -> bool) -> bool {
        self.state.lock().unwrap().operations.iter().any(check)
    }

    /// Clear recorded operations and any unconsumed responses.
    pub fn clear(&self) {
        let mut state = self.state.lock().unwrap();
        state.operations.clear();
        state.responses.clear();
    }

    fn record_operation(&self, op: Operation) -> FakeResponse {
        let mut state = self.state.lock().unwrap();
        state.operations.push(op);
        state.responses.pop_front().unwrap_or_default()
    }
}

#[cfg(unix)]
fn exit_status(code: i32) -> ExitStatus {
    ExitStatus::from_raw((code & 0xff) << 8)
}

#[cfg(not(unix))]
fn exit_status(code: i32) -> ExitStatus {
    use std::os::windows::process::ExitStatusExt;
    ExitStatus::from_raw(code as u32)
}

impl ProcessOps for FakeHal {
    fn command_output_with_cwd(
        &self,
        program: &Path,
        args: &[&str],
        cwd: Option<&Path>,
    ) -> HalResult<Output> {
        let response = self.record_operation(Operation::Command {
            program: program.to_path_buf(),
            args: args.iter().map(|s| s.to_string()).collect(),
            cwd: cwd.map(Path::to_path_buf),
        });

        Ok(Output {
            status: exit_status(response.code),
            stdout: response.stdout.into_bytes(),
            stderr: response.stderr.into_bytes(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fake_hal_records_commands() {
        let hal = FakeHal::new();
        hal.command_output_with_cwd(
            Path::new("/usr/bin/drush"),
            &["status", "--format=json"],
            Some(Path::new("/var/www")),
        )
        .unwrap();

        assert_eq!(hal.operation_count(), 1);
        assert!(hal.has_operation(|op| op.args() == ["status", "--format=json"]));
        assert_eq!(
            hal.operations()[0],
            Operation::Command {
                program: PathBuf::from("/usr/bin/drush"),
                args: vec!["status".to_string(), "--format=json".to_string()],
                cwd: Some(PathBuf::from("/var/www")),
            }
        );
    }

    #[test]
    fn fake_hal_replays_responses_in_order() {
        let hal = FakeHal::with_responses([
            FakeResponse::ok("1800\n"),
            FakeResponse::fail(2, "command not found"),
        ]);
        let drush = Path::new("drush");

        let first = hal.command_output(drush, &["vget"]).unwrap();
        assert_eq!(first.status.code(), Some(0));
        assert_eq!(first.stdout, b"1800\n");

        let second = hal.command_output(drush, &["bogus"]).unwrap();
        assert_eq!(second.status.code(), Some(2));
        assert_eq!(second.stderr, b"command not found");

        let third = hal.command_output(drush, &["status"]).unwrap();
        assert!(third.status.success());
        assert!(third.stdout.is_empty());
    }

    #[test]
    fn fake_hal_can_clear() {
        let hal = FakeHal::with_responses([FakeResponse::fail(1, "x")]);
        hal.command_output(Path::new("drush"), &["cc"]).unwrap();
        hal.push_response(FakeResponse::fail(1, "y"));

        hal.clear();

        assert_eq!(hal.operation_count(), 0);
        let out = hal.command_output(Path::new("drush"), &["cc"]).unwrap();
        assert!(out.status.success());
    }
}
