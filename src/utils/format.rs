//! Number formatting for measurements and bounds

/// Upper bound on printed decimals; anything finer is float noise
const MAX_DECIMALS: usize = 6;

/// Number of decimals in the shortest representation of `value`
///
/// `10.0` has none, `3.5` has one, `0.25` has two.
#[must_use]
pub fn decimals(value: f64) -> usize {
    if !value.is_finite() {
        return 0;
    }
    let repr = value.to_string();
    repr.split_once('.')
        .map_or(0, |(_, fraction)| fraction.len().min(MAX_DECIMALS))
}

/// Format `value` with exactly `precision` decimals
#[must_use]
pub fn format_fixed(value: f64, precision: usize) -> String {
    format!("{value:.precision$}")
}

/// Round `value` to `precision` decimals
#[must_use]
pub fn round_to(value: f64, precision: usize) -> f64 {
    // precision is capped by `decimals`, so the cast cannot truncate
    let factor = 10f64.powi(precision as i32);
    (value * factor).round() / factor
}
