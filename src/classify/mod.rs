//! Classification dispatch
//!
//! Turns a feature vector into a severity label: completeness check, scaling,
//! prediction, then the fixed class-to-label mapping.

pub mod severity;

pub use severity::SeverityLabel;

use crate::config::CompletenessPolicy;
use crate::error::Result;
use crate::input::FeatureVector;
use crate::model::ModelArtifacts;
use crate::utils::logging::log_warning;

/// Message shown when the completeness check rejects the input
pub const FILL_IN_MESSAGE: &str = "Please fill in all the fields correctly.";

/// Outcome of one classification request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Prediction {
    /// The input failed the completeness check; the model was not consulted
    Incomplete,
    /// The model produced a label
    Classified(SeverityLabel),
}

impl Prediction {
    #[must_use]
    pub const fn label(self) -> Option<SeverityLabel> {
        match self {
            Self::Incomplete => None,
            Self::Classified(label) => Some(label),
        }
    }

    /// User-facing text, `outcome` naming what was predicted
    #[must_use]
    pub fn message(self, outcome: &str) -> String {
        match self {
            Self::Incomplete => FILL_IN_MESSAGE.to_string(),
            Self::Classified(label) => format!("The predicted {outcome} is: {label}"),
        }
    }
}

/// Classify with the default policy (any exact zero counts as an unfilled field)
pub fn classify(models: &ModelArtifacts, vector: &FeatureVector) -> Result<Prediction> {
    classify_with_policy(models, vector, CompletenessPolicy::default())
}

/// Classify one feature vector
///
/// The vector must be in the order the artifacts were fitted on; a length
/// mismatch surfaces as `FeatureMismatch` from the scaler.
pub fn classify_with_policy(
    models: &ModelArtifacts,
    vector: &FeatureVector,
    policy: CompletenessPolicy,
) -> Result<Prediction> {
    if !policy.is_complete(vector) {
        log_warning("Rejected incomplete input, a field is zero", None);
        return Ok(Prediction::Incomplete);
    }

    log::debug!("Classifying {:?}", vector.as_slice());
    let scaled = models.scaler().transform(vector)?;
    let class = models.classifier().predict(&scaled)?;
    let label = SeverityLabel::try_from(class)?;
    log::info!("Predicted class {class} ({label})");

    Ok(Prediction::Classified(label))
}
