//! Runs one request against drush and decides whether anything changed.

use crate::command_line::CommandLine;
use crate::errors::{DrushError, Result};
use crate::outcome::{self, Outcome, Payload};
use crate::request::{ChangeDetection, CommandIntent, Request};
use drush_hal::ProcessOps;
use log::{debug, info, warn};
use std::path::{Path, PathBuf};
use std::process::{ExitStatus, Output};

pub struct Adapter<P: ProcessOps> {
    hal: P,
    program: PathBuf,
}

impl<P: ProcessOps> Adapter<P> {
    /// `program` is the resolved drush executable.
    pub fn new(hal: P, program: impl Into<PathBuf>) -> Self {
        Self {
            hal,
            program: program.into(),
        }
    }

    pub fn hal(&self) -> &P {
        &self.hal
    }

    /// Execute `request`. With `check_mode` set, only read-only commands are run.
    pub fn execute(&self, request: &Request, check_mode: bool) -> Result<Outcome> {
        let intent = request.intent()?;
        let effective = intent.effective(check_mode);
        let detection = intent.change_detection(check_mode);

        let baseline = match (detection, intent.variable_name()) {
            (ChangeDetection::AgainstBaseline, Some(name)) => {
                Some(self.capture_baseline(name, &request.path)?)
            }
            _ => None,
        };

        let line = CommandLine::for_intent(&self.program, &effective);
        let mut result = Outcome::new(line.to_string());
        result.original_value = baseline;

        if check_mode && !intent.safe_in_check_mode(check_mode) {
            info!("check mode: not running {}", result.cmd);
            return Ok(result);
        }

        info!("running {}", result.cmd);
        let output = self.run(&line, &request.path)?;
        result.rc = exit_code(output.status);
        result.stdout = String::from_utf8_lossy(&output.stdout).into_owned();
        result.stderr = String::from_utf8_lossy(&output.stderr).into_owned();
        debug!(
            "drush exited {} ({} bytes stdout, {} bytes stderr)",
            result.rc,
            result.stdout.len(),
            result.stderr.len()
        );

        if result.rc != 0 {
            if detection == ChangeDetection::AgainstCurrent {
                // A never-set variable makes the read fail; treat it as unset.
                warn!(
                    "reading {} failed (rc={}), treating it as unset: {}",
                    intent.variable_name().unwrap_or_default(),
                    result.rc,
                    result.stderr.trim_end()
                );
                let original = String::new();
                result.changed = Some(original.as_str()) != intent.requested_value();
                result.original_value = Some(original);
                return Ok(result);
            }
            return Err(DrushError::ExecutionFailure {
                stderr: result.stderr.clone(),
                outcome: Box::new(result),
            });
        }

        let decoded = match outcome::decode(&result.stdout) {
            Ok(value) => value,
            Err(source) => {
                return Err(DrushError::MalformedOutput {
                    source,
                    outcome: Box::new(result),
                })
            }
        };

        result.changed = match detection {
            ChangeDetection::Never => false,
            ChangeDetection::Always => true,
            ChangeDetection::AgainstBaseline => {
                result.original_value.as_deref() != intent.requested_value()
            }
            ChangeDetection::AgainstCurrent => {
                let current = outcome::scalar_text(&decoded);
                let changed = Some(current.as_str()) != intent.requested_value();
                result.original_value = Some(current);
                changed
            }
        };

        result.payload = Some(match effective {
            CommandIntent::Get { name } => Payload::Named {
                name: name.to_string(),
                value: decoded,
            },
            _ => Payload::Generic(decoded),
        });

        Ok(result)
    }

    /// Read the current value before a set. Failure means "not set yet".
    fn capture_baseline(&self, name: &str, cwd: &Path) -> Result<String> {
        let line = CommandLine::baseline(&self.program, name);
        debug!("capturing baseline: {}", line);
        let output = self.run(&line, cwd)?;
        if output.status.success() {
            return Ok(String::from_utf8_lossy(&output.stdout)
                .trim_end()
                .to_string());
        }
        warn!(
            "baseline read of {} failed (rc={}), assuming it was never set: {}",
            name,
            exit_code(output.status),
            String::from_utf8_lossy(&output.stderr).trim_end()
        );
        Ok(String::new())
    }

    fn run(&self, line: &CommandLine, cwd: &Path) -> Result<Output> {
        Ok(self
            .hal
            .command_output_with_cwd(line.program(), &line.args(), Some(cwd))?)
    }
}

/// Exit code of the child; a signal-terminated child reports minus the signal number.
fn exit_code(status: ExitStatus) -> i32 {
    if let Some(code) = status.code() {
        return code;
    }
    #[cfg(unix)]
    {
        use std::os::unix::process::ExitStatusExt;
        if let Some(signal) = status.signal() {
            return -signal;
        }
    }
    -1
}

#[cfg(test)]
mod tests {
    use super::*;
    use drush_hal::{FakeHal, FakeResponse};
    use serde_json::json;

    fn adapter(responses: Vec<FakeResponse>) -> Adapter<FakeHal> {
        Adapter::new(FakeHal::with_responses(responses), "/usr/bin/drush")
    }

    #[test]
    fn core_status_is_read_only() {
        let adapter = adapter(vec![FakeResponse::ok("{\"drupal-version\":\"7.56\"}")]);
        let req = Request::new("/var/www/example", "core-status");

        let out = adapter.execute(&req, false).unwrap();

        assert!(!out.changed);
        assert_eq!(out.rc, 0);
        assert_eq!(
            out.payload,
            Some(Payload::Generic(json!({"drupal-version": "7.56"})))
        );
        assert_eq!(adapter.hal().operation_count(), 1);
    }

    #[test]
    fn missing_name_spawns_nothing() {
        let adapter = adapter(vec![]);
        let req = Request::new("/var/www", "variable-get");
        let err = adapter.execute(&req, false).unwrap_err();
        assert!(matches!(err, DrushError::MissingParameter("name")));
        assert_eq!(adapter.hal().operation_count(), 0);
    }

    #[test]
    fn malformed_json_is_fatal() {
        let adapter = adapter(vec![FakeResponse::ok("Drupal version : 7.56")]);
        let req = Request::new("/var/www", "status");
        let err = adapter.execute(&req, false).unwrap_err();
        assert!(matches!(err, DrushError::MalformedOutput { .. }));
        assert_eq!(err.outcome().unwrap().stdout, "Drupal version : 7.56");
    }

    #[test]
    fn real_set_runs_baseline_first() {
        let adapter = adapter(vec![FakeResponse::ok("1800\n"), FakeResponse::ok("")]);
        let req = Request::new("/var/www", "variable-set")
            .with_name("page_cache_maximum_age")
            .with_value("3600");

        let out = adapter.execute(&req, false).unwrap();

        let ops = adapter.hal().operations();
        assert_eq!(ops.len(), 2);
        assert_eq!(ops[0].args()[0], "vget");
        assert_eq!(ops[1].args()[0], "variable-set");
        assert!(out.changed);
        assert_eq!(out.original_value.as_deref(), Some("1800"));
    }

    #[test]
    fn exit_code_passes_through() {
        let adapter = adapter(vec![FakeResponse::fail(2, "command not found")]);
        let req = Request::new("/var/www", "bogus");
        match adapter.execute(&req, false).unwrap_err() {
            DrushError::ExecutionFailure { stderr, outcome } => {
                assert_eq!(stderr, "command not found");
                assert_eq!(outcome.rc, 2);
                assert!(!outcome.changed);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
