//! Guarded ratio helpers.
//!
//! Every derived ratio in the UI is defined as `0.0` when its denominator is
//! zero; `NaN`/`Infinity` never reach a rendered value.

/// Round to one decimal place, the precision every ratio is rendered at.
pub fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Percentage change from `previous` to `current`, one decimal place.
/// Defined as `0.0` when `previous` is zero.
pub fn percent_change(current: f64, previous: f64) -> f64 {
    if previous == 0.0 {
        return 0.0;
    }
    round1((current - previous) / previous * 100.0)
}
