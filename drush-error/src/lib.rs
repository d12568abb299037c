use std::io;
use thiserror::Error;

pub type HalResult<T> = Result<T, HalError>;

#[derive(Error, Debug)]
pub enum HalError {
    #[error("Failed to find required executable {program} in paths: {searched}")]
    CommandNotFound { program: String, searched: String },

    #[error("Working directory does not exist: {0}")]
    MissingWorkingDir(String),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}
