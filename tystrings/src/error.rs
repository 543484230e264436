//! All error types for the tystrings crate.
//!
//! These are returned from every fallible operation (parsing, extraction,
//! synchronization, translation).

use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("cannot decode `{path}` as {encoding}")]
    Decode { path: PathBuf, encoding: String },

    #[error("failed to run `{program}`: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("extraction failed with {status}")]
    ExtractionFailed { status: String, output: String },

    #[error("parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("translation error: {0}")]
    Translation(String),

    #[error("invalid resource: {0}")]
    InvalidResource(String),
}

impl Error {
    /// Creates a new translation error
    pub fn translation_error(message: impl Into<String>) -> Self {
        Error::Translation(message.into())
    }
}
