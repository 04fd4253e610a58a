//! Standard (z-score) scaling

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::model::{Scaler, check_finite, check_len};

/// Per-feature `(x - mean) / scale` transform
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StandardScaler {
    pub mean: Vec<f64>,
    pub scale: Vec<f64>,
}

impl StandardScaler {
    pub fn new(mean: Vec<f64>, scale: Vec<f64>) -> Result<Self> {
        let scaler = Self { mean, scale };
        scaler.validate()?;
        Ok(scaler)
    }

    /// Check the fitted parameters are usable
    pub fn validate(&self) -> Result<()> {
        if self.mean.is_empty() {
            return Err(Error::Artifact("scaler has no features".to_string()));
        }
        if self.mean.len() != self.scale.len() {
            return Err(Error::Artifact(format!(
                "scaler has {} means but {} scales",
                self.mean.len(),
                self.scale.len()
            )));
        }
        if self.mean.iter().chain(&self.scale).any(|v| !v.is_finite()) {
            return Err(Error::Artifact(
                "scaler parameters must be finite".to_string(),
            ));
        }
        Ok(())
    }
}

impl Scaler for StandardScaler {
    fn n_features(&self) -> usize {
        self.mean.len()
    }

    fn transform(&self, features: &[f64]) -> Result<Vec<f64>> {
        check_len(self.mean.len(), features)?;
        check_finite(features)?;
        Ok(features
            .iter()
            .zip(self.mean.iter().zip(&self.scale))
            .map(|(x, (mean, scale))| {
                // constant features were fitted with zero variance
                let scale = if *scale == 0.0 { 1.0 } else { *scale };
                (x - mean) / scale
            })
            .collect())
    }
}
