//! Module argument loading.
//!
//! Callers hand over their arguments as a file: either a JSON object (possibly
//! wrapped in `ANSIBLE_MODULE_ARGS`) or the legacy `key=value` token form.
//! Internal keys starting with `_` are accepted and, apart from
//! `_ansible_check_mode`, ignored.

use crate::errors::{DrushError, Result};
use crate::request::Request;
use serde_json::{Map, Value};
use std::path::PathBuf;

const SUPPORTED: &[&str] = &["path", "command", "name", "value"];
const CHECK_MODE_KEY: &str = "_ansible_check_mode";
const WRAPPER_KEY: &str = "ANSIBLE_MODULE_ARGS";

/// Arguments as supplied, before validation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ModuleArgs {
    pub path: Option<String>,
    pub command: Option<String>,
    pub name: Option<String>,
    pub value: Option<String>,
    pub check_mode: bool,
}

impl ModuleArgs {
    /// Parse the contents of an arguments file, detecting its format.
    pub fn parse(contents: &str) -> Result<Self> {
        if contents.trim_start().starts_with('{') {
            Self::from_json(contents)
        } else {
            Self::from_key_value(contents)
        }
    }

    pub fn from_json(contents: &str) -> Result<Self> {
        let mut root: Map<String, Value> = serde_json::from_str(contents)
            .map_err(|e| DrushError::InvalidArguments(format!("invalid JSON arguments: {e}")))?;
        if let Some(Value::Object(inner)) = root.remove(WRAPPER_KEY) {
            root = inner;
        }

        let mut args = ModuleArgs::default();
        for (key, value) in root {
            if key == CHECK_MODE_KEY {
                args.check_mode = as_bool(&key, &value)?;
                continue;
            }
            let text = as_text(&key, value)?;
            args.assign(&key, text)?;
        }
        Ok(args)
    }

    pub fn from_key_value(contents: &str) -> Result<Self> {
        let mut args = ModuleArgs::default();
        for token in split_tokens(contents)? {
            let Some((key, value)) = token.split_once('=') else {
                return Err(DrushError::InvalidArguments(format!(
                    "this module requires key=value arguments, got: {token}"
                )));
            };
            if key == CHECK_MODE_KEY {
                args.check_mode = parse_bool(key, value)?;
                continue;
            }
            args.assign(key, Some(value.to_string()))?;
        }
        Ok(args)
    }

    fn assign(&mut self, key: &str, value: Option<String>) -> Result<()> {
        match key {
            "path" => self.path = value,
            "command" => self.command = value,
            "name" => self.name = value,
            "value" => self.value = value,
            internal if internal.starts_with('_') => {}
            other => {
                return Err(DrushError::InvalidArguments(format!(
                    "Unsupported parameters for (drush) module: {other}. Supported parameters include: {}",
                    SUPPORTED.join(", ")
                )))
            }
        }
        Ok(())
    }

    /// Overlay explicitly given values on top of `self`.
    pub fn merge(mut self, overrides: ModuleArgs) -> Self {
        self.path = overrides.path.or(self.path);
        self.command = overrides.command.or(self.command);
        self.name = overrides.name.or(self.name);
        self.value = overrides.value.or(self.value);
        self.check_mode |= overrides.check_mode;
        self
    }

    /// Build a request; `path` and `command` are mandatory.
    pub fn into_request(self) -> Result<(Request, bool)> {
        let path = self.path.ok_or(DrushError::MissingParameter("path"))?;
        let command = self
            .command
            .ok_or(DrushError::MissingParameter("command"))?;
        let request = Request::new(PathBuf::from(path), command)
            .with_name(self.name.unwrap_or_default())
            .with_value(self.value.unwrap_or_default());
        Ok((request, self.check_mode))
    }
}

fn as_text(key: &str, value: Value) -> Result<Option<String>> {
    match value {
        Value::Null => Ok(None),
        Value::String(s) => Ok(Some(s)),
        Value::Number(n) => Ok(Some(n.to_string())),
        Value::Bool(b) => Ok(Some(b.to_string())),
        other => Err(DrushError::InvalidArguments(format!(
            "argument {key} must be a string, got {other}"
        ))),
    }
}

fn as_bool(key: &str, value: &Value) -> Result<bool> {
    match value {
        Value::Bool(b) => Ok(*b),
        Value::String(s) => parse_bool(key, s),
        Value::Null => Ok(false),
        other => Err(DrushError::InvalidArguments(format!(
            "argument {key} must be a boolean, got {other}"
        ))),
    }
}

fn parse_bool(key: &str, raw: &str) -> Result<bool> {
    match raw.to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" | "y" => Ok(true),
        "0" | "false" | "no" | "off" | "n" | "" => Ok(false),
        _ => Err(DrushError::InvalidArguments(format!(
            "argument {key} must be a boolean, got {raw}"
        ))),
    }
}

/// Split on whitespace, honouring single and double quotes. Inside double
/// quotes a backslash escapes the next character.
fn split_tokens(input: &str) -> Result<Vec<String>> {
    let mut tokens = Vec::new();
    let mut current = String::new();
    let mut in_token = false;
    let mut chars = input.chars();

    while let Some(c) = chars.next() {
        match c {
            '\'' => {
                in_token = true;
                loop {
                    match chars.next() {
                        Some('\'') => break,
                        Some(inner) => current.push(inner),
                        None => return Err(unterminated()),
                    }
                }
            }
            '"' => {
                in_token = true;
                loop {
                    match chars.next() {
                        Some('"') => break,
                        Some('\\') => match chars.next() {
                            Some(escaped) => current.push(escaped),
                            None => return Err(unterminated()),
                        },
                        Some(inner) => current.push(inner),
                        None => return Err(unterminated()),
                    }
                }
            }
            c if c.is_whitespace() => {
                if in_token {
                    tokens.push(std::mem::take(&mut current));
                    in_token = false;
                }
            }
            c => {
                in_token = true;
                current.push(c);
            }
        }
    }
    if in_token {
        tokens.push(current);
    }
    Ok(tokens)
}

fn unterminated() -> DrushError {
    DrushError::InvalidArguments("unterminated quote in arguments".to_string())
}
