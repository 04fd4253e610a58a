//! Logging utilities
//!
//! This module provides standardized logging functions for operations.

use std::path::Path;

/// Initialise `env_logger` with an `info` default, overridable via `RUST_LOG`
///
/// Calling this more than once is harmless; later calls are ignored.
pub fn init_logging(default_filter: &str) {
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .format_timestamp(None)
        .try_init();
}

/// Log an operation start with consistent format
///
/// # Arguments
/// * `operation` - Description of the operation
/// * `path` - Path of the file being operated on
pub fn log_operation_start(operation: &str, path: &Path) {
    log::info!("{} {}", operation, path.display());
}

/// Log an operation completion with consistent format
///
/// # Arguments
/// * `operation` - Description of the operation
/// * `path` - Path of the file that was operated on
/// * `elapsed` - Optional elapsed time
pub fn log_operation_complete(operation: &str, path: &Path, elapsed: Option<std::time::Duration>) {
    if let Some(duration) = elapsed {
        log::info!(
            "Successfully {} from {} in {:?}",
            operation,
            path.display(),
            duration
        );
    } else {
        log::info!("Successfully {} from {}", operation, path.display());
    }
}

/// Log an operation warning with consistent format
///
/// # Arguments
/// * `message` - Warning message
/// * `path` - Optional path related to the warning
pub fn log_warning(message: &str, path: Option<&Path>) {
    if let Some(path) = path {
        log::warn!("{}: {}", message, path.display());
    } else {
        log::warn!("{message}");
    }
}
