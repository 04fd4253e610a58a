//! Schemas shipped with the crate

use crate::model::ArtifactPaths;
use crate::schema::{FeatureSpec, FormSchema, SeverityBands};

fn feature(
    key: &str,
    label: &str,
    unit: &str,
    (min, max, default, step): (f64, f64, f64, f64),
    bands: SeverityBands,
) -> FeatureSpec {
    FeatureSpec {
        key: key.to_string(),
        label: label.to_string(),
        unit: Some(unit.to_string()),
        min,
        max,
        default,
        step,
        bands: Some(bands),
    }
}

/// Renal dialysis staging from five routine measurements
///
/// Feature order is BUN, creatinine, potassium, systolic and diastolic blood
/// pressure; the bundled model was fitted in exactly that order.
#[must_use]
pub fn renal() -> FormSchema {
    FormSchema {
        name: "renal".to_string(),
        title: "Renal Dialysis Patient Classification App".to_string(),
        subtitle: "Adjust the patient data below to predict the renal dialysis stage".to_string(),
        outcome: "renal dialysis stage".to_string(),
        features: vec![
            feature(
                "bun",
                "BUN",
                "mg/dL",
                (10.0, 120.0, 50.0, 0.1),
                SeverityBands::new((10.0, 50.0), (50.0, 70.0), (70.0, 120.0)),
            ),
            feature(
                "creatinine",
                "Creatinine",
                "mg/dL",
                (2.0, 25.0, 10.0, 0.1),
                SeverityBands::new((2.0, 10.0), (10.0, 15.0), (15.0, 25.0)),
            ),
            feature(
                "potassium",
                "Potassium",
                "mEq/L",
                (3.5, 7.0, 5.0, 0.1),
                SeverityBands::new((3.5, 5.0), (5.1, 5.5), (5.5, 7.0)),
            ),
            feature(
                "bp_systolic",
                "Systolic Blood Pressure",
                "mmHg",
                (100.0, 200.0, 140.0, 1.0),
                SeverityBands::new((100.0, 140.0), (140.0, 160.0), (160.0, 200.0)),
            ),
            feature(
                "bp_diastolic",
                "Diastolic Blood Pressure",
                "mmHg",
                (60.0, 120.0, 90.0, 1.0),
                SeverityBands::new((60.0, 90.0), (90.0, 100.0), (100.0, 120.0)),
            ),
        ],
        artifacts: ArtifactPaths::new("log_reg_model.json", "scaler.json"),
    }
}
