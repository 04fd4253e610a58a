//! Clinical reference ranges per severity band
//!
//! The range table is descriptive only: it feeds the help text shown next to
//! each control and never takes part in classification.

use itertools::Itertools;
use serde::{Deserialize, Serialize};

use crate::classify::SeverityLabel;
use crate::utils::format::{decimals, format_fixed};

/// Inclusive `(min, max)` ranges of one measurement for each severity band
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SeverityBands {
    pub mild: (f64, f64),
    pub moderate: (f64, f64),
    pub severe: (f64, f64),
}

impl SeverityBands {
    #[must_use]
    pub const fn new(mild: (f64, f64), moderate: (f64, f64), severe: (f64, f64)) -> Self {
        Self {
            mild,
            moderate,
            severe,
        }
    }

    /// Range for a single label
    #[must_use]
    pub const fn range(&self, label: SeverityLabel) -> (f64, f64) {
        match label {
            SeverityLabel::Mild => self.mild,
            SeverityLabel::Moderate => self.moderate,
            SeverityLabel::Severe => self.severe,
        }
    }

    /// First band (in label order) whose range contains `value`
    ///
    /// Adjacent bands share their boundary, so a boundary value reports the
    /// milder band.
    #[must_use]
    pub fn band_for(&self, value: f64) -> Option<SeverityLabel> {
        SeverityLabel::ALL.into_iter().find(|&label| {
            let (lo, hi) = self.range(label);
            (lo..=hi).contains(&value)
        })
    }

    /// Number of decimals needed to print every bound of this table row
    fn precision(&self) -> usize {
        SeverityLabel::ALL
            .into_iter()
            .flat_map(|label| {
                let (lo, hi) = self.range(label);
                [lo, hi]
            })
            .map(decimals)
            .max()
            .unwrap_or(0)
    }

    /// Help text such as `Mild: 10-50, Moderate: 50-70, Severe: 70-120`
    #[must_use]
    pub fn help_text(&self) -> String {
        let precision = self.precision();
        SeverityLabel::ALL
            .into_iter()
            .map(|label| {
                let (lo, hi) = self.range(label);
                format!(
                    "{label}: {}-{}",
                    format_fixed(lo, precision),
                    format_fixed(hi, precision)
                )
            })
            .join(", ")
    }
}

/// Ordered mapping from measurement name to its severity bands
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RangeTable {
    entries: Vec<(String, SeverityBands)>,
}

impl RangeTable {
    #[must_use]
    pub fn new(entries: Vec<(String, SeverityBands)>) -> Self {
        Self { entries }
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&SeverityBands> {
        self.entries
            .iter()
            .find(|(entry, _)| entry == name)
            .map(|(_, bands)| bands)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &SeverityBands)> {
        self.entries.iter().map(|(name, bands)| (name.as_str(), bands))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
