//! Input collection
//!
//! The form owns one [`FeatureControl`] per schema feature and hands out
//! [`FeatureVector`] snapshots in schema order.

use rustc_hash::FxHashMap;

use crate::error::{Error, Result};
use crate::schema::FormSchema;

pub mod control;
pub mod vector;

pub use control::FeatureControl;
pub use vector::FeatureVector;

/// The set of controls making up one form
#[derive(Debug, Clone)]
pub struct InputForm {
    controls: Vec<FeatureControl>,
    /// Lower-cased key and label to control index
    index: FxHashMap<String, usize>,
}

impl InputForm {
    #[must_use]
    pub fn from_schema(schema: &FormSchema) -> Self {
        let controls: Vec<_> = schema
            .features
            .iter()
            .cloned()
            .map(FeatureControl::new)
            .collect();

        let mut index = FxHashMap::default();
        for (i, control) in controls.iter().enumerate() {
            index.insert(control.spec().label.to_lowercase(), i);
        }
        // keys win over labels that happen to collide with them
        for (i, control) in controls.iter().enumerate() {
            index.insert(control.key().to_lowercase(), i);
        }

        Self { controls, index }
    }

    #[must_use]
    pub fn controls(&self) -> &[FeatureControl] {
        &self.controls
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.controls.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.controls.is_empty()
    }

    /// Find a control by key or label, ignoring case
    #[must_use]
    pub fn control(&self, name: &str) -> Option<&FeatureControl> {
        self.index
            .get(&name.to_lowercase())
            .map(|&i| &self.controls[i])
    }

    /// Set a control and return the value it actually took
    pub fn set(&mut self, name: &str, value: f64) -> Result<f64> {
        let i = *self
            .index
            .get(&name.to_lowercase())
            .ok_or_else(|| Error::UnknownFeature(name.to_string()))?;
        self.controls[i].set(value)
    }

    /// Restore every control to its default
    pub fn reset(&mut self) {
        self.controls.iter_mut().for_each(FeatureControl::reset);
    }

    /// Current values in schema order
    #[must_use]
    pub fn snapshot(&self) -> FeatureVector {
        self.controls.iter().map(FeatureControl::value).collect()
    }
}
