use std::fs;

use crate::utils::renal_artifact_dir;
use clinical_severity::{
    ArtifactPaths, CompletenessPolicy, Error, FeatureVector, FrontEnd, ModelArtifacts,
    SeverityLabel, classify, schema::builtin::renal,
};

/// Artifacts written to disk load and classify like the in-memory models
#[test]
fn test_load_renal_artifacts_from_disk() -> clinical_severity::Result<()> {
    let (_dir, paths) = renal_artifact_dir();
    let models = ModelArtifacts::load(&paths)?;
    models.check_schema(&renal())?;

    let prediction = classify(&models, &FeatureVector::from([100.0, 20.0, 6.5, 180.0, 110.0]))?;
    assert_eq!(prediction.label(), Some(SeverityLabel::Severe));
    Ok(())
}

/// A missing classifier file is fatal at start-up
#[test]
fn test_missing_classifier_is_fatal() {
    let (dir, paths) = renal_artifact_dir();
    fs::remove_file(&paths.model).unwrap();

    let err = ModelArtifacts::load(&paths).unwrap_err();
    assert!(matches!(err, Error::Io { ref path, .. } if path.starts_with(dir.path())));
}

/// A corrupt scaler file is fatal at start-up
#[test]
fn test_corrupt_scaler_is_fatal() {
    let (_dir, paths) = renal_artifact_dir();
    fs::write(&paths.scaler, "not json at all").unwrap();

    assert!(matches!(ModelArtifacts::load(&paths), Err(Error::Artifact(_))));
}

/// Artifacts fitted on a different number of features are refused by the front-end
#[test]
fn test_schema_mismatch_is_refused() {
    let dir = tempfile::tempdir().unwrap();
    let paths = ArtifactPaths::new("model.json", "scaler.json").relative_to(dir.path());
    fs::write(&paths.scaler, r#"{"mean":[0,0,0],"scale":[1,1,1]}"#).unwrap();
    fs::write(
        &paths.model,
        r#"{"classes":[0,1,2],"coef":[[1,0,0],[0,1,0],[0,0,1]],"intercept":[0,0,0]}"#,
    )
    .unwrap();

    let models = ModelArtifacts::load(&paths).unwrap();
    let err = FrontEnd::new(renal(), models, CompletenessPolicy::RejectZero).unwrap_err();
    assert!(matches!(
        err,
        Error::FeatureMismatch {
            expected: 3,
            actual: 5
        }
    ));
}
