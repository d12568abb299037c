//! Process execution helpers.
//!
//! External commands are considered "world-touching" and must go through the HAL so we can
//! test the adapter without spawning real processes.

use crate::HalResult;
use std::path::Path;
use std::process::Output;

/// Process execution trait (external command runner).
///
/// Implementations block until the child exits. No timeout is applied; callers that need one
/// must supervise the whole adapter process.
pub trait ProcessOps {
    fn command_output_with_cwd(
        &self,
        program: &Path,
        args: &[&str],
        cwd: Option<&Path>,
    ) -> HalResult<Output>;

    fn command_output(&self, program: &Path, args: &[&str]) -> HalResult<Output> {
        self.command_output_with_cwd(program, args, None)
    }
}
