//! The JSON object printed back to the orchestrator.

use crate::errors::DrushError;
use crate::outcome::Outcome;
use serde_json::{Map, Value};

#[derive(Debug, Clone, PartialEq)]
pub struct Response {
    failed: bool,
    fields: Map<String, Value>,
}

impl Response {
    pub fn success(outcome: &Outcome) -> Self {
        Self {
            failed: false,
            fields: outcome.to_fields(),
        }
    }

    /// Failure report. Whatever was gathered before the failure is included.
    pub fn failure(err: &anyhow::Error) -> Self {
        let mut fields = match err.downcast_ref::<DrushError>().and_then(DrushError::outcome) {
            Some(outcome) => outcome.to_fields(),
            None => Outcome::new(String::new()).to_fields(),
        };
        fields.insert("failed".into(), Value::Bool(true));
        fields.insert("msg".into(), Value::String(format!("{err:#}")));
        Self {
            failed: true,
            fields,
        }
    }

    pub fn failed(&self) -> bool {
        self.failed
    }

    pub fn fields(&self) -> &Map<String, Value> {
        &self.fields
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(&self.fields)
    }
}
