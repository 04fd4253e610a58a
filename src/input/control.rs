//! A single bounded numeric control

use crate::error::{Error, Result};
use crate::schema::FeatureSpec;
use crate::utils::format::{decimals, format_fixed, round_to};

/// Slider-like control over one measurement
///
/// Values are clamped into `[min, max]` and snapped onto the `min + k * step`
/// grid, rounded to the precision of the bounds and `step`.
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureControl {
    spec: FeatureSpec,
    value: f64,
    precision: usize,
}

impl FeatureControl {
    #[must_use]
    pub fn new(spec: FeatureSpec) -> Self {
        let precision = [spec.min, spec.max, spec.step]
            .into_iter()
            .map(decimals)
            .max()
            .unwrap_or(0);
        Self {
            value: spec.default,
            spec,
            precision,
        }
    }

    #[must_use]
    pub fn spec(&self) -> &FeatureSpec {
        &self.spec
    }

    #[must_use]
    pub fn key(&self) -> &str {
        &self.spec.key
    }

    #[must_use]
    pub fn value(&self) -> f64 {
        self.value
    }

    /// The value this control would hold after being set to `requested`
    pub fn clamp(&self, requested: f64) -> Result<f64> {
        if !requested.is_finite() {
            return Err(Error::InvalidValue(format!(
                "{} must be a finite number, got {requested}",
                self.spec.key
            )));
        }

        let FeatureSpec { min, max, step, .. } = self.spec;
        if requested <= min {
            return Ok(min);
        }
        if requested >= max {
            return Ok(max);
        }

        let steps = ((requested - min) / step).round();
        let snapped = round_to(min + steps * step, self.precision);
        Ok(snapped.clamp(min, max))
    }

    /// Set the value, returning what was actually stored
    pub fn set(&mut self, requested: f64) -> Result<f64> {
        self.value = self.clamp(requested)?;
        Ok(self.value)
    }

    pub fn reset(&mut self) {
        self.value = self.spec.default;
    }

    /// Help text derived from the reference ranges
    #[must_use]
    pub fn help(&self) -> Option<String> {
        self.spec.bands.map(|bands| bands.help_text())
    }

    /// The current value printed with the control's precision
    #[must_use]
    pub fn display_value(&self) -> String {
        format_fixed(self.value, self.precision.max(1))
    }

    /// One line describing the control, e.g. for a text front-end
    #[must_use]
    pub fn describe(&self) -> String {
        let precision = self.precision.max(1);
        let mut line = format!(
            "{} [{}]: {} (range {}..{}, step {})",
            self.spec.display_label(),
            self.spec.key,
            self.display_value(),
            format_fixed(self.spec.min, precision),
            format_fixed(self.spec.max, precision),
            self.spec.step
        );
        if let Some(band) = self.spec.bands.and_then(|b| b.band_for(self.value)) {
            line.push_str(&format!(" within {band} range"));
        }
        if let Some(help) = self.help() {
            line.push_str(&format!("\n    {help}"));
        }
        line
    }
}
