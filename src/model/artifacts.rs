//! Loading the fitted scaler and classifier
//!
//! Both artifacts are read once at start-up and never mutated afterwards.
//! A missing or corrupt artifact is fatal: the caller is expected to abort.

use std::fmt;
use std::path::{Path, PathBuf};
use std::time::Instant;

use serde::{Deserialize, Serialize};

use crate::error::util::read_json;
use crate::error::{Error, Result};
use crate::model::{Classifier, LogisticRegression, Scaler, StandardScaler};
use crate::schema::FormSchema;
use crate::utils::logging::{log_operation_complete, log_operation_start};

/// Where the fitted artifacts are stored
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArtifactPaths {
    /// Fitted classifier
    pub model: PathBuf,
    /// Fitted scaler
    pub scaler: PathBuf,
}

impl ArtifactPaths {
    pub fn new(model: impl Into<PathBuf>, scaler: impl Into<PathBuf>) -> Self {
        Self {
            model: model.into(),
            scaler: scaler.into(),
        }
    }

    /// Resolve relative paths against `base`
    #[must_use]
    pub fn relative_to(&self, base: &Path) -> Self {
        Self {
            model: base.join(&self.model),
            scaler: base.join(&self.scaler),
        }
    }
}

/// The immutable scaler/classifier pair shared by every prediction
pub struct ModelArtifacts {
    scaler: Box<dyn Scaler>,
    classifier: Box<dyn Classifier>,
}

impl ModelArtifacts {
    pub fn new(scaler: impl Scaler + 'static, classifier: impl Classifier + 'static) -> Self {
        Self {
            scaler: Box::new(scaler),
            classifier: Box::new(classifier),
        }
    }

    /// Read both artifacts from disk
    pub fn load(paths: &ArtifactPaths) -> Result<Self> {
        let scaler = load_artifact(&paths.scaler, "scaler", |s: &StandardScaler| s.validate())?;
        let classifier = load_artifact(&paths.model, "classifier", |m: &LogisticRegression| {
            m.validate()
        })?;

        if scaler.n_features() != classifier.n_features() {
            return Err(Error::Artifact(format!(
                "scaler expects {} features but classifier expects {}",
                scaler.n_features(),
                classifier.n_features()
            )));
        }

        Ok(Self::new(scaler, classifier))
    }

    #[must_use]
    pub fn scaler(&self) -> &dyn Scaler {
        self.scaler.as_ref()
    }

    #[must_use]
    pub fn classifier(&self) -> &dyn Classifier {
        self.classifier.as_ref()
    }

    /// Verify both artifacts were fitted on as many features as the schema collects
    pub fn check_schema(&self, schema: &FormSchema) -> Result<()> {
        let actual = schema.feature_count();
        for expected in [self.scaler.n_features(), self.classifier.n_features()] {
            if expected != actual {
                return Err(Error::FeatureMismatch { expected, actual });
            }
        }
        Ok(())
    }
}

impl fmt::Debug for ModelArtifacts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ModelArtifacts")
            .field("scaler_features", &self.scaler.n_features())
            .field("classifier_features", &self.classifier.n_features())
            .finish()
    }
}

fn load_artifact<T, F>(path: &Path, kind: &str, validate: F) -> Result<T>
where
    T: serde::de::DeserializeOwned,
    F: FnOnce(&T) -> Result<()>,
{
    let start = Instant::now();
    log_operation_start(&format!("Loading {kind} from"), path);

    let artifact: T = read_json(path, kind)?;
    validate(&artifact).map_err(|e| match e {
        Error::Artifact(msg) => Error::Artifact(format!("{}: {msg}", path.display())),
        other => other,
    })?;

    log_operation_complete(&format!("loaded {kind}"), path, Some(start.elapsed()));
    Ok(artifact)
}
