//! Logistic regression decision rule
//!
//! Only prediction is implemented. The coefficients come from a model fitted
//! elsewhere and exported as JSON.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::model::{Classifier, check_finite, check_len};

/// A fitted (binary or multinomial) logistic regression
///
/// `coef` holds one row per class, or a single row for a binary model whose
/// positive class is `classes[1]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogisticRegression {
    pub classes: Vec<i64>,
    pub coef: Vec<Vec<f64>>,
    pub intercept: Vec<f64>,
}

impl LogisticRegression {
    pub fn new(classes: Vec<i64>, coef: Vec<Vec<f64>>, intercept: Vec<f64>) -> Result<Self> {
        let model = Self {
            classes,
            coef,
            intercept,
        };
        model.validate()?;
        Ok(model)
    }

    /// Check the fitted parameters describe a usable model
    pub fn validate(&self) -> Result<()> {
        let Some(first) = self.coef.first() else {
            return Err(Error::Artifact("classifier has no coefficients".to_string()));
        };
        if first.is_empty() {
            return Err(Error::Artifact("classifier has no features".to_string()));
        }
        if self.coef.iter().any(|row| row.len() != first.len()) {
            return Err(Error::Artifact(
                "classifier coefficient rows differ in length".to_string(),
            ));
        }
        if self.intercept.len() != self.coef.len() {
            return Err(Error::Artifact(format!(
                "classifier has {} coefficient rows but {} intercepts",
                self.coef.len(),
                self.intercept.len()
            )));
        }

        let expected_classes = if self.coef.len() == 1 { 2 } else { self.coef.len() };
        if self.classes.len() != expected_classes {
            return Err(Error::Artifact(format!(
                "classifier with {} coefficient rows needs {expected_classes} classes, found {}",
                self.coef.len(),
                self.classes.len()
            )));
        }
        Ok(())
    }

    /// Decision value of every coefficient row
    pub fn decision_function(&self, features: &[f64]) -> Result<Vec<f64>> {
        check_len(self.n_features(), features)?;
        check_finite(features)?;
        Ok(self
            .coef
            .iter()
            .zip(&self.intercept)
            .map(|(row, intercept)| {
                row.iter().zip(features).map(|(w, x)| w * x).sum::<f64>() + intercept
            })
            .collect())
    }
}

impl Classifier for LogisticRegression {
    fn n_features(&self) -> usize {
        self.coef.first().map_or(0, Vec::len)
    }

    fn predict(&self, features: &[f64]) -> Result<i64> {
        let scores = self.decision_function(features)?;

        let index = if let [score] = scores.as_slice() {
            usize::from(*score > 0.0)
        } else {
            // first maximum wins on ties
            scores
                .iter()
                .enumerate()
                .fold((0, f64::NEG_INFINITY), |best, (i, &score)| {
                    if score > best.1 { (i, score) } else { best }
                })
                .0
        };

        self.classes
            .get(index)
            .copied()
            .ok_or_else(|| Error::Artifact(format!("classifier has no class at index {index}")))
    }
}
