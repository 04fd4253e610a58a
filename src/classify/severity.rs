//! Severity labels produced by the classifier
//!
//! The trained models emit an integer class. This module fixes the mapping of
//! those classes onto the labels shown to the user.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Severity levels a classifier can predict
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum SeverityLabel {
    /// Class 0
    Mild = 0,
    /// Class 1
    Moderate = 1,
    /// Class 2
    Severe = 2,
}

impl SeverityLabel {
    /// All labels in class order
    pub const ALL: [Self; 3] = [Self::Mild, Self::Moderate, Self::Severe];

    /// Convert a classifier output to a label, if it is one of the known classes
    #[must_use]
    pub const fn from_class(class: i64) -> Option<Self> {
        match class {
            0 => Some(Self::Mild),
            1 => Some(Self::Moderate),
            2 => Some(Self::Severe),
            _ => None,
        }
    }

    /// Get the class index for this label
    #[must_use]
    pub const fn as_class(self) -> i64 {
        self as i64
    }

    /// Get a descriptive name for this label
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::Mild => "Mild",
            Self::Moderate => "Moderate",
            Self::Severe => "Severe",
        }
    }
}

impl TryFrom<i64> for SeverityLabel {
    type Error = Error;

    fn try_from(class: i64) -> Result<Self> {
        Self::from_class(class).ok_or(Error::UnknownClass(class))
    }
}

impl fmt::Display for SeverityLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.description())
    }
}
