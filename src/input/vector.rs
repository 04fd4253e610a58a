//! Feature vectors handed to the model

use std::ops::Deref;

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// Ordered measurements in the order the model was trained on
///
/// Schemas collect five or ten measurements, so the values stay inline.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct FeatureVector(SmallVec<[f64; 10]>);

impl FeatureVector {
    #[must_use]
    pub fn new(values: impl IntoIterator<Item = f64>) -> Self {
        Self(values.into_iter().collect())
    }

    #[must_use]
    pub fn as_slice(&self) -> &[f64] {
        &self.0
    }

    /// Whether any value is exactly zero
    #[must_use]
    pub fn has_zero(&self) -> bool {
        self.0.iter().any(|&v| v == 0.0)
    }
}

impl Deref for FeatureVector {
    type Target = [f64];

    fn deref(&self) -> &[f64] {
        &self.0
    }
}

impl From<Vec<f64>> for FeatureVector {
    fn from(values: Vec<f64>) -> Self {
        Self(SmallVec::from_vec(values))
    }
}

impl<const N: usize> From<[f64; N]> for FeatureVector {
    fn from(values: [f64; N]) -> Self {
        Self::new(values)
    }
}

impl FromIterator<f64> for FeatureVector {
    fn from_iter<I: IntoIterator<Item = f64>>(iter: I) -> Self {
        Self::new(iter)
    }
}
