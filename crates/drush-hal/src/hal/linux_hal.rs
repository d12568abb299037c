//! Linux HAL implementation spawning real child processes.

use super::ProcessOps;
use crate::{HalError, HalResult};
use log::debug;
use std::path::Path;
use std::process::{Command, Output, Stdio};

/// Real HAL implementation for Linux systems.
#[derive(Debug, Clone, Default)]
pub struct LinuxHal;

impl LinuxHal {
    pub fn new() -> Self {
        Self
    }
}

fn map_command_err(program: &Path, err: std::io::Error) -> HalError {
    if err.kind() == std::io::ErrorKind::NotFound {
        return HalError::CommandNotFound {
            program: program.display().to_string(),
            searched: std::env::var("PATH").unwrap_or_default(),
        };
    }
    HalError::Io(err)
}

impl ProcessOps for LinuxHal {
    fn command_output_with_cwd(
        &self,
        program: &Path,
        args: &[&str],
        cwd: Option<&Path>,
    ) -> HalResult<Output> {
        let mut cmd = Command::new(program);
        cmd.args(args);
        if let Some(dir) = cwd {
            // A missing cwd surfaces from spawn as NotFound, which would be misreported
            // as a missing program.
            if !dir.is_dir() {
                return Err(HalError::MissingWorkingDir(dir.display().to_string()));
            }
            cmd.current_dir(dir);
        }
        // Avoid commands hanging waiting for input.
        cmd.stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped());

        debug!("spawning {} {:?}", program.display(), args);
        let output = cmd.output().map_err(|e| map_command_err(program, e))?;
        debug!(
            "{} exited with {:?} ({} bytes stdout, {} bytes stderr)",
            program.display(),
            output.status.code(),
            output.stdout.len(),
            output.stderr.len()
        );
        Ok(output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use tempfile::tempdir;

    #[test]
    fn captures_stdout_and_exit_code() {
        let hal = LinuxHal::new();
        let out = hal
            .command_output(Path::new("/bin/sh"), &["-c", "printf hello; exit 3"])
            .unwrap();
        assert_eq!(out.status.code(), Some(3));
        assert_eq!(String::from_utf8_lossy(&out.stdout), "hello");
    }

    #[test]
    fn runs_in_requested_directory() {
        let dir = tempdir().unwrap();
        let hal = LinuxHal::new();
        let out = hal
            .command_output_with_cwd(Path::new("/bin/sh"), &["-c", "pwd"], Some(dir.path()))
            .unwrap();
        let printed = PathBuf::from(String::from_utf8_lossy(&out.stdout).trim());
        assert_eq!(
            printed.canonicalize().unwrap(),
            dir.path().canonicalize().unwrap()
        );
    }

    #[test]
    fn missing_program_maps_to_command_not_found() {
        let hal = LinuxHal::new();
        let err = hal
            .command_output(Path::new("/nonexistent/drush"), &[])
            .unwrap_err();
        assert!(matches!(err, HalError::CommandNotFound { .. }));
    }

    #[test]
    fn missing_working_dir_is_reported() {
        let hal = LinuxHal::new();
        let err = hal
            .command_output_with_cwd(
                Path::new("/bin/sh"),
                &["-c", "true"],
                Some(Path::new("/nonexistent/site")),
            )
            .unwrap_err();
        assert!(matches!(err, HalError::MissingWorkingDir(_)));
    }
}
