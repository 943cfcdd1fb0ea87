//! Error types for the checklist tracker.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// The keyword resource parsed as JSON but is not a keyword → category object.
    #[error("invalid keyword table: {0}")]
    InvalidKeywords(String),

    #[error("no task with id {0}")]
    TaskNotFound(u64),
}

pub type Result<T> = std::result::Result<T, Error>;
