//! Form schemas
//!
//! A schema is everything that distinguishes one classifier front-end from
//! another: the page text, the ordered list of measurements the model was
//! trained on, the reference ranges behind the help text, and where the
//! fitted artifacts live by default.

use std::path::Path;

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::error::util::read_json;
use crate::model::ArtifactPaths;

pub mod bands;
pub mod builtin;

pub use bands::{RangeTable, SeverityBands};

/// One measurement collected by the form
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureSpec {
    /// Short identifier used on the command line (`bun`, `creatinine`, ...)
    pub key: String,
    /// Human-readable name
    pub label: String,
    /// Measurement unit, shown next to the label
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
    pub min: f64,
    pub max: f64,
    pub default: f64,
    pub step: f64,
    /// Reference ranges used for help text
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bands: Option<SeverityBands>,
}

impl FeatureSpec {
    /// Label with unit, e.g. `BUN (mg/dL)`
    #[must_use]
    pub fn display_label(&self) -> String {
        match &self.unit {
            Some(unit) => format!("{} ({unit})", self.label),
            None => self.label.clone(),
        }
    }

    fn validate(&self) -> Result<()> {
        let bounds = [self.min, self.max, self.default, self.step];
        if bounds.iter().any(|v| !v.is_finite()) {
            return Err(Error::Schema(format!(
                "feature '{}' has a non-finite bound",
                self.key
            )));
        }
        if self.min >= self.max {
            return Err(Error::Schema(format!(
                "feature '{}': min {} must be below max {}",
                self.key, self.min, self.max
            )));
        }
        if self.step <= 0.0 {
            return Err(Error::Schema(format!(
                "feature '{}': step must be positive",
                self.key
            )));
        }
        if !(self.min..=self.max).contains(&self.default) {
            return Err(Error::Schema(format!(
                "feature '{}': default {} outside [{}, {}]",
                self.key, self.default, self.min, self.max
            )));
        }
        Ok(())
    }
}

/// Description of a complete classifier front-end
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormSchema {
    pub name: String,
    pub title: String,
    pub subtitle: String,
    /// What the prediction is called in the result message
    pub outcome: String,
    /// Measurements in the order the model was trained on
    pub features: Vec<FeatureSpec>,
    /// Artifact locations used when configuration does not override them
    pub artifacts: ArtifactPaths,
}

impl FormSchema {
    /// Load a schema from a JSON file and validate it
    pub fn from_file(path: &Path) -> Result<Self> {
        let schema: Self = read_json(path, "form schema")?;
        schema.validate()?;
        Ok(schema)
    }

    /// Look up a schema shipped with the crate
    pub fn builtin(name: &str) -> Result<Self> {
        match name.to_ascii_lowercase().as_str() {
            "renal" => Ok(builtin::renal()),
            _ => Err(Error::UnknownSchema(name.to_string())),
        }
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Check that feature keys are unique and every bound is usable
    pub fn validate(&self) -> Result<()> {
        if self.features.is_empty() {
            return Err(Error::Schema(format!(
                "schema '{}' defines no features",
                self.name
            )));
        }

        let mut seen = FxHashSet::default();
        for feature in &self.features {
            if !seen.insert(feature.key.as_str()) {
                return Err(Error::Schema(format!(
                    "duplicate feature key '{}'",
                    feature.key
                )));
            }
            feature.validate()?;
        }
        Ok(())
    }

    #[must_use]
    pub fn feature_count(&self) -> usize {
        self.features.len()
    }

    /// The reference ranges of every feature that has them
    #[must_use]
    pub fn range_table(&self) -> RangeTable {
        RangeTable::new(
            self.features
                .iter()
                .filter_map(|f| f.bands.map(|bands| (f.label.clone(), bands)))
                .collect(),
        )
    }
}
