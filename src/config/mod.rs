//! Configuration for the classifier front-end.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::error::util::read_json;
use crate::input::FeatureVector;
use crate::model::ArtifactPaths;
use crate::schema::FormSchema;

/// Which inputs count as filled in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CompletenessPolicy {
    /// Any value that is exactly zero is treated as an unfilled field
    #[default]
    RejectZero,
    /// Every vector is passed to the model
    AcceptAll,
}

impl CompletenessPolicy {
    #[must_use]
    pub fn is_complete(self, vector: &FeatureVector) -> bool {
        match self {
            Self::RejectZero => !vector.has_zero(),
            Self::AcceptAll => true,
        }
    }
}

/// Where the form schema comes from
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SchemaSource {
    /// A schema shipped with the crate, by name
    Builtin(String),
    /// A JSON schema file
    File(PathBuf),
}

impl SchemaSource {
    /// Interpret a command-line value: an existing file or a `.json` path is
    /// a file, anything else names a built-in schema
    #[must_use]
    pub fn parse(value: &str) -> Self {
        let path = Path::new(value);
        if path.is_file() || path.extension().is_some_and(|ext| ext == "json") {
            Self::File(path.to_path_buf())
        } else {
            Self::Builtin(value.to_string())
        }
    }
}

impl Default for SchemaSource {
    fn default() -> Self {
        Self::Builtin("renal".to_string())
    }
}

/// Configuration for the front-end
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FrontEndConfig {
    /// Form schema to present
    pub schema: SchemaSource,
    /// Classifier artifact, overriding the schema default
    pub model_path: Option<PathBuf>,
    /// Scaler artifact, overriding the schema default
    pub scaler_path: Option<PathBuf>,
    /// How unfilled fields are detected
    pub completeness: CompletenessPolicy,
}

impl FrontEndConfig {
    /// Load configuration from a JSON file; missing keys take their defaults
    pub fn from_file(path: &Path) -> Result<Self> {
        read_json(path, "front-end configuration")
    }

    /// Apply command-line overrides; absent values keep what the file set
    #[must_use]
    pub fn with_overrides(
        mut self,
        schema: Option<&str>,
        model_path: Option<PathBuf>,
        scaler_path: Option<PathBuf>,
        accept_zero: bool,
    ) -> Self {
        if let Some(schema) = schema {
            self.schema = SchemaSource::parse(schema);
        }
        if model_path.is_some() {
            self.model_path = model_path;
        }
        if scaler_path.is_some() {
            self.scaler_path = scaler_path;
        }
        if accept_zero {
            self.completeness = CompletenessPolicy::AcceptAll;
        }
        self
    }

    /// Load and validate the configured schema
    pub fn resolve_schema(&self) -> Result<FormSchema> {
        match &self.schema {
            SchemaSource::Builtin(name) => FormSchema::builtin(name),
            SchemaSource::File(path) => FormSchema::from_file(path),
        }
    }

    /// Artifact locations: explicit overrides first, then the schema defaults
    #[must_use]
    pub fn artifact_paths(&self, schema: &FormSchema) -> ArtifactPaths {
        ArtifactPaths {
            model: self
                .model_path
                .clone()
                .unwrap_or_else(|| schema.artifacts.model.clone()),
            scaler: self
                .scaler_path
                .clone()
                .unwrap_or_else(|| schema.artifacts.scaler.clone()),
        }
    }
}
