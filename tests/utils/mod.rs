use std::fs;
use std::path::Path;

use clinical_severity::{
    ArtifactPaths, CompletenessPolicy, FrontEnd, LogisticRegression, ModelArtifacts,
    StandardScaler, schema::builtin::renal,
};
use tempfile::TempDir;

/// Means of the renal measurements the test model is centred on
pub const RENAL_MEAN: [f64; 5] = [50.0, 10.0, 5.0, 140.0, 90.0];

/// Spread of the renal measurements
pub const RENAL_SCALE: [f64; 5] = [20.0, 5.0, 0.8, 20.0, 12.0];

/// Scaler fitted on renal data
#[must_use]
pub fn renal_scaler() -> StandardScaler {
    StandardScaler::new(RENAL_MEAN.to_vec(), RENAL_SCALE.to_vec()).unwrap()
}

/// Three-class model: below-average values are Mild, average Moderate, above Severe
#[must_use]
pub fn renal_classifier() -> LogisticRegression {
    LogisticRegression::new(
        vec![0, 1, 2],
        vec![vec![-1.0; 5], vec![0.0; 5], vec![1.0; 5]],
        vec![0.0, 0.5, 0.0],
    )
    .unwrap()
}

#[must_use]
pub fn renal_models() -> ModelArtifacts {
    ModelArtifacts::new(renal_scaler(), renal_classifier())
}

#[must_use]
pub fn renal_front_end() -> FrontEnd {
    FrontEnd::new(renal(), renal_models(), CompletenessPolicy::RejectZero).unwrap()
}

/// Write the renal artifacts as JSON under the schema's default file names
pub fn write_renal_artifacts(dir: &Path) -> ArtifactPaths {
    let paths = renal().artifacts.relative_to(dir);
    fs::write(&paths.scaler, serde_json::to_string(&renal_scaler()).unwrap()).unwrap();
    fs::write(&paths.model, serde_json::to_string(&renal_classifier()).unwrap()).unwrap();
    paths
}

/// A temporary directory holding renal artifacts
#[must_use]
pub fn renal_artifact_dir() -> (TempDir, ArtifactPaths) {
    let dir = tempfile::tempdir().unwrap();
    let paths = write_renal_artifacts(dir.path());
    (dir, paths)
}
