//! The normalized result of one invocation.

use serde_json::{Map, Value};

/// Key under which non-variable output is reported.
pub const GENERIC_KEY: &str = "drush";

/// Decoded drush output.
#[derive(Debug, Clone, PartialEq)]
pub enum Payload {
    Generic(Value),
    /// Output of a variable read, reported under the variable's own name.
    Named { name: String, value: Value },
}

impl Payload {
    pub fn key(&self) -> &str {
        match self {
            Payload::Generic(_) => GENERIC_KEY,
            Payload::Named { name, .. } => name,
        }
    }

    pub fn value(&self) -> &Value {
        match self {
            Payload::Generic(value) | Payload::Named { value, .. } => value,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Outcome {
    pub changed: bool,
    pub rc: i32,
    pub stdout: String,
    pub stderr: String,
    /// Rendered command line, for diagnostics.
    pub cmd: String,
    pub payload: Option<Payload>,
    /// Value of the variable before a set, when one was requested.
    pub original_value: Option<String>,
}

impl Outcome {
    pub fn new(cmd: String) -> Self {
        Self {
            changed: false,
            rc: 0,
            stdout: String::new(),
            stderr: String::new(),
            cmd,
            payload: None,
            original_value: None,
        }
    }

    /// Response fields in the caller's wire format.
    pub fn to_fields(&self) -> Map<String, Value> {
        let mut fields = Map::new();
        fields.insert("changed".into(), Value::Bool(self.changed));
        fields.insert("rc".into(), Value::from(self.rc));
        fields.insert("stdout".into(), Value::String(self.stdout.clone()));
        fields.insert("stderr".into(), Value::String(self.stderr.clone()));
        fields.insert("cmd".into(), Value::String(self.cmd.clone()));
        if let Some(original) = &self.original_value {
            fields.insert("original_value".into(), Value::String(original.clone()));
        }
        // Inserted last so a variable literally named like a fixed field wins.
        if let Some(payload) = &self.payload {
            fields.insert(payload.key().to_string(), payload.value().clone());
        }
        fields
    }
}

/// Decode drush stdout. Empty output stands for an empty list.
pub fn decode(stdout: &str) -> serde_json::Result<Value> {
    if stdout.is_empty() {
        return Ok(Value::Array(Vec::new()));
    }
    serde_json::from_str(stdout)
}

/// Text form of a decoded value, for comparing against a requested string.
///
/// Strings compare by content, `null` as empty, everything else by its JSON text.
pub fn scalar_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}
