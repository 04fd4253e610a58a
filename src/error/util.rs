//! Utility functions for error handling
//!
//! Helpers that read the JSON documents the front-end depends on (model
//! artifacts, schemas, configuration) and attach the offending path to
//! every failure.

use std::fs;
use std::io;
use std::path::Path;

use serde::de::DeserializeOwned;

use crate::error::{Error, Result};

/// Read a file to string, explaining why it was needed if that fails
///
/// # Arguments
/// * `path` - The path to the file to read
/// * `purpose` - Why the file is being read (for error context)
pub fn safe_read_to_string(path: &Path, purpose: &str) -> Result<String> {
    if !path.exists() {
        return Err(Error::io(
            path,
            io::Error::new(
                io::ErrorKind::NotFound,
                format!("file not found, needed for: {purpose}"),
            ),
        ));
    }

    if !path.is_file() {
        return Err(Error::io(
            path,
            io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("path is not a file, expected a file for: {purpose}"),
            ),
        ));
    }

    fs::read_to_string(path).map_err(|e| {
        let context = match e.kind() {
            io::ErrorKind::PermissionDenied => {
                "permission denied - check file permissions".to_string()
            }
            io::ErrorKind::InvalidData => {
                "file contains invalid UTF-8 data - cannot read as text".to_string()
            }
            _ => format!("failed to read file content for: {purpose}"),
        };
        Error::io(path, io::Error::new(e.kind(), format!("{context}: {e}")))
    })
}

/// Read and decode a JSON document
pub fn read_json<T: DeserializeOwned>(path: &Path, purpose: &str) -> Result<T> {
    let content = safe_read_to_string(path, purpose)?;
    serde_json::from_str(&content).map_err(|e| {
        Error::Artifact(format!(
            "{} is not a valid {purpose}: {e}",
            path.display()
        ))
    })
}
