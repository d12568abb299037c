//! Validated requests and the intent derived from them.

use crate::commands::{KnownCommand, SubCommand};
use crate::errors::{DrushError, Result};
use serde::Deserialize;
use std::path::PathBuf;

/// One task invocation as supplied by the caller.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Request {
    /// Drupal site root; drush runs with this as its working directory.
    pub path: PathBuf,
    pub command: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub value: String,
}

impl Request {
    pub fn new(path: impl Into<PathBuf>, command: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            command: command.into(),
            name: String::new(),
            value: String::new(),
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = value.into();
        self
    }

    /// Check the per-command preconditions and classify the request.
    pub fn intent(&self) -> Result<CommandIntent<'_>> {
        if self.path.as_os_str().is_empty() {
            return Err(DrushError::MissingParameter("path"));
        }
        if self.command.is_empty() {
            return Err(DrushError::MissingParameter("command"));
        }

        match SubCommand::parse(&self.command) {
            SubCommand::Known(KnownCommand::VariableGet) => {
                if self.name.is_empty() {
                    return Err(DrushError::MissingParameter("name"));
                }
                Ok(CommandIntent::Get { name: &self.name })
            }
            SubCommand::Known(KnownCommand::VariableSet) => {
                if self.name.is_empty() {
                    return Err(DrushError::MissingParameter("name"));
                }
                if self.value.is_empty() {
                    return Err(DrushError::MissingParameter("value"));
                }
                Ok(CommandIntent::Set {
                    name: &self.name,
                    value: &self.value,
                })
            }
            command => Ok(CommandIntent::Other {
                command,
                name: non_empty(&self.name),
                value: non_empty(&self.value),
            }),
        }
    }
}

fn non_empty(s: &str) -> Option<&str> {
    (!s.is_empty()).then_some(s)
}

/// What the caller asked for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandIntent<'a> {
    Get {
        name: &'a str,
    },
    Set {
        name: &'a str,
        value: &'a str,
    },
    Other {
        command: SubCommand,
        name: Option<&'a str>,
        value: Option<&'a str>,
    },
}

/// How `changed` is decided once the command has run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeDetection {
    /// Read-only command; never reports a change.
    Never,
    /// Mutating command with no way to observe the effect.
    Always,
    /// Real set: compare the value captured before the set with the requested one.
    AgainstBaseline,
    /// Simulated set: compare the value currently stored with the requested one.
    AgainstCurrent,
}

impl<'a> CommandIntent<'a> {
    pub fn sub_command(&self) -> SubCommand {
        match self {
            CommandIntent::Get { .. } => SubCommand::Known(KnownCommand::VariableGet),
            CommandIntent::Set { .. } => SubCommand::Known(KnownCommand::VariableSet),
            CommandIntent::Other { command, .. } => command.clone(),
        }
    }

    /// The command actually executed. In check mode a set becomes a get of the same name.
    pub fn effective(&self, check_mode: bool) -> CommandIntent<'a> {
        match self {
            CommandIntent::Set { name, .. } if check_mode => CommandIntent::Get { name: *name },
            other => other.clone(),
        }
    }

    pub fn change_detection(&self, check_mode: bool) -> ChangeDetection {
        match self {
            CommandIntent::Get { .. } => ChangeDetection::Never,
            CommandIntent::Set { .. } if check_mode => ChangeDetection::AgainstCurrent,
            CommandIntent::Set { .. } => ChangeDetection::AgainstBaseline,
            CommandIntent::Other { command, .. } if command.is_read_only() => {
                ChangeDetection::Never
            }
            CommandIntent::Other { .. } => ChangeDetection::Always,
        }
    }

    /// Whether the effective command may run when nothing is allowed to change.
    pub fn safe_in_check_mode(&self, check_mode: bool) -> bool {
        self.effective(check_mode).sub_command().is_read_only()
    }

    /// The variable name for named-value operations.
    pub fn variable_name(&self) -> Option<&'a str> {
        match self {
            CommandIntent::Get { name } | CommandIntent::Set { name, .. } => Some(*name),
            CommandIntent::Other { .. } => None,
        }
    }

    /// The value a set asks for.
    pub fn requested_value(&self) -> Option<&'a str> {
        match self {
            CommandIntent::Set { value, .. } => Some(*value),
            _ => None,
        }
    }
}
