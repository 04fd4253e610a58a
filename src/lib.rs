//! A schema-driven front-end for pre-trained clinical severity classifiers.
//!
//! A form schema describes the measurements to collect, the model artifacts
//! translate them into a class, and the dispatcher maps that class onto a
//! severity label.

pub mod app;
pub mod classify;
pub mod config;
pub mod error;
pub mod input;
pub mod model;
pub mod schema;
pub mod utils;

// Re-export the most common types for easier use
pub use app::{Event, FrontEnd, Reply};
pub use classify::{FILL_IN_MESSAGE, Prediction, SeverityLabel, classify, classify_with_policy};
pub use config::{CompletenessPolicy, FrontEndConfig, SchemaSource};
pub use error::{Error, Result};
pub use input::{FeatureControl, FeatureVector, InputForm};
pub use model::{ArtifactPaths, Classifier, LogisticRegression, ModelArtifacts, Scaler, StandardScaler};
pub use schema::{FeatureSpec, FormSchema, RangeTable, SeverityBands};
