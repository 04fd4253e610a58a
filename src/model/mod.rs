//! Pre-trained model artifacts
//!
//! The front-end never fits anything. It loads a fitted scaler and a fitted
//! classifier once and then only calls [`Scaler::transform`] and
//! [`Classifier::predict`].

pub mod artifacts;
pub mod logistic;
pub mod scaler;

pub use artifacts::{ArtifactPaths, ModelArtifacts};
pub use logistic::LogisticRegression;
pub use scaler::StandardScaler;

use crate::error::Result;

/// A fitted feature transform
pub trait Scaler: Send + Sync {
    /// Number of features the scaler was fitted on
    fn n_features(&self) -> usize;

    /// Scale one feature vector
    fn transform(&self, features: &[f64]) -> Result<Vec<f64>>;
}

/// A fitted classifier over scaled features
pub trait Classifier: Send + Sync {
    /// Number of features the classifier was fitted on
    fn n_features(&self) -> usize;

    /// Predict the class of one scaled feature vector
    fn predict(&self, features: &[f64]) -> Result<i64>;
}

/// Fail with `InvalidValue` if any feature is NaN or infinite
pub(crate) fn check_finite(features: &[f64]) -> Result<()> {
    match features.iter().position(|v| !v.is_finite()) {
        None => Ok(()),
        Some(i) => Err(crate::error::Error::InvalidValue(format!(
            "feature {i} is {}, measurements must be finite",
            features[i]
        ))),
    }
}

/// Fail with `FeatureMismatch` unless `features` has `expected` entries
pub(crate) fn check_len(expected: usize, features: &[f64]) -> Result<()> {
    if features.len() == expected {
        Ok(())
    } else {
        Err(crate::error::Error::FeatureMismatch {
            expected,
            actual: features.len(),
        })
    }
}
