//! Utility functions shared across the front-end

pub mod format;
pub mod logging;
