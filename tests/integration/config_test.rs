use std::fs;

use crate::utils::write_renal_artifacts;
use clinical_severity::{
    CompletenessPolicy, FormSchema, FrontEnd, FrontEndConfig, Prediction, Reply, SchemaSource,
    schema::builtin::renal,
};

/// A configuration file can point at a custom schema and relocated artifacts
#[test]
fn test_front_end_from_config_file() -> clinical_severity::Result<()> {
    let dir = tempfile::tempdir().unwrap();
    let paths = write_renal_artifacts(dir.path());

    let mut schema = renal();
    schema.name = "renal-lab".to_string();
    schema.outcome = "dialysis stage".to_string();
    let schema_path = dir.path().join("renal-lab.json");
    fs::write(&schema_path, schema.to_json()?).unwrap();

    let config = FrontEndConfig {
        schema: SchemaSource::File(schema_path),
        model_path: Some(paths.model),
        scaler_path: Some(paths.scaler),
        completeness: CompletenessPolicy::RejectZero,
    };
    let config_path = dir.path().join("config.json");
    fs::write(&config_path, serde_json::to_string_pretty(&config).unwrap()).unwrap();

    let loaded = FrontEndConfig::from_file(&config_path)?;
    assert_eq!(loaded, config);

    let front_end = FrontEnd::from_config(&loaded)?;
    assert_eq!(front_end.schema().name, "renal-lab");
    match front_end.predict()? {
        Reply::Prediction { prediction, message } => {
            assert!(matches!(prediction, Prediction::Classified(_)));
            assert!(message.starts_with("The predicted dialysis stage is: "));
        }
        other => panic!("expected a prediction, got {other:?}"),
    }
    Ok(())
}

/// The built-in renal schema survives a trip through its JSON form
#[test]
fn test_renal_schema_json_round_trip() -> clinical_severity::Result<()> {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("renal.json");
    fs::write(&path, renal().to_json()?).unwrap();

    assert_eq!(FormSchema::from_file(&path)?, renal());
    Ok(())
}

/// Invalid schema files are rejected when loaded
#[test]
fn test_invalid_schema_file_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let mut schema = renal();
    schema.features[0].min = 200.0;
    let path = dir.path().join("broken.json");
    fs::write(&path, schema.to_json().unwrap()).unwrap();

    assert!(matches!(
        FormSchema::from_file(&path),
        Err(clinical_severity::Error::Schema(_))
    ));
}

/// Command-line values win over the configuration file, absent ones leave it alone
#[test]
fn test_command_line_overrides_config_file() -> clinical_severity::Result<()> {
    let dir = tempfile::tempdir().unwrap();
    let paths = write_renal_artifacts(dir.path());
    let config_path = dir.path().join("config.json");
    fs::write(
        &config_path,
        serde_json::json!({
            "schema": { "builtin": "renal" },
            "model_path": dir.path().join("missing-model.json"),
            "scaler_path": paths.scaler,
            "completeness": "reject_zero"
        })
        .to_string(),
    )
    .unwrap();

    let config = FrontEndConfig::from_file(&config_path)?.with_overrides(
        None,
        Some(paths.model.clone()),
        None,
        true,
    );

    assert_eq!(config.schema, SchemaSource::Builtin("renal".to_string()));
    assert_eq!(config.model_path, Some(paths.model));
    assert_eq!(config.scaler_path, Some(paths.scaler));
    assert_eq!(config.completeness, CompletenessPolicy::AcceptAll);
    FrontEnd::from_config(&config)?;
    Ok(())
}
