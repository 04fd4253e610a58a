//! Logging utilities for output and prediction tracking
//!
//! This module provides utilities for consistent log lines and for
//! initialising the logger in binaries.

pub mod log;

// Re-export commonly used functions for convenience
pub use self::log::{init_logging, log_operation_complete, log_operation_start, log_warning};
