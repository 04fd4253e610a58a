//! Error handling for the classifier front-end.

use std::io;
use std::path::PathBuf;

pub mod util;

/// Specialized error type for the classifier front-end
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Error opening or reading a file
    #[error("IO error for {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Error decoding or encoding JSON
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A model artifact is malformed or inconsistent
    #[error("Artifact error: {0}")]
    Artifact(String),

    /// The feature vector does not match what a model artifact was fitted on
    #[error("Feature mismatch: model expects {expected} features, got {actual}")]
    FeatureMismatch { expected: usize, actual: usize },

    /// The classifier produced a class outside the label map
    #[error("Unknown class {0}: expected 0 (Mild), 1 (Moderate) or 2 (Severe)")]
    UnknownClass(i64),

    /// No feature with this key exists in the schema
    #[error("Unknown feature: {0}")]
    UnknownFeature(String),

    /// No built-in schema with this name exists
    #[error("Unknown schema: {0}")]
    UnknownSchema(String),

    /// A value could not be used as a measurement
    #[error("Invalid value: {0}")]
    InvalidValue(String),

    /// The form schema is inconsistent
    #[error("Schema error: {0}")]
    Schema(String),

    /// A front-end command could not be parsed
    #[error("Command error: {0}")]
    Command(String),
}

impl Error {
    /// Wrap an IO error together with the path that caused it
    pub fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

/// Result type for classifier front-end operations
pub type Result<T> = std::result::Result<T, Error>;
