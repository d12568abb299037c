use crate::outcome::Outcome;
use drush_error::HalError;
use thiserror::Error;

/// Result type alias for adapter operations
pub type Result<T> = std::result::Result<T, DrushError>;

#[derive(Error, Debug)]
pub enum DrushError {
    /// A field required by the requested sub-command is empty or absent.
    #[error("{}", missing_message(.0))]
    MissingParameter(&'static str),

    #[error("{0}")]
    InvalidArguments(String),

    /// drush exited nonzero. The message is drush's own stderr.
    #[error("{stderr}")]
    ExecutionFailure {
        stderr: String,
        outcome: Box<Outcome>,
    },

    #[error("drush output is not valid JSON: {source}")]
    MalformedOutput {
        source: serde_json::Error,
        outcome: Box<Outcome>,
    },

    #[error(transparent)]
    Hal(#[from] HalError),
}

impl DrushError {
    /// The partial outcome gathered before the failure, if a command ran.
    pub fn outcome(&self) -> Option<&Outcome> {
        match self {
            DrushError::ExecutionFailure { outcome, .. }
            | DrushError::MalformedOutput { outcome, .. } => Some(outcome),
            _ => None,
        }
    }
}

fn missing_message(param: &str) -> String {
    match param {
        "name" => "Variable name required".to_string(),
        "value" => "Variable value required".to_string(),
        other => format!("missing required arguments: {other}"),
    }
}
