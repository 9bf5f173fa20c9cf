//! Shared numeric and labelling helpers.
//!
//! Problems keep masses and percentages as `f64`; these helpers do the
//! rounding during generation and the fixed-decimal formatting at the
//! display boundary, so no arithmetic ever round-trips through strings.

/// Round `value` to `decimals` places (half away from zero).
pub fn round_to(value: f64, decimals: u32) -> f64 {
    let scale = 10f64.powi(decimals as i32);
    (value * scale).round() / scale
}

/// Format `value` with exactly `decimals` fractional digits (e.g. "55.120").
pub fn fixed(value: f64, decimals: usize) -> String {
    format!("{:.*}", decimals, value)
}

/// Convert hundredths of a percent to a percentage (`4512` → `45.12`).
pub fn percent_from_hundredths(hundredths: u32) -> f64 {
    f64::from(hundredths) / 100.0
}

/// Display name of a synthetic element, e.g. "Element Alpha".
pub fn subject_name(base: &str) -> String {
    format!("Element {base}")
}

/// Display name of one isotope, e.g. "Element Alpha-87".
pub fn isotope_label(base: &str, mass_number: u32) -> String {
    format!("Element {base}-{mass_number}")
}

/// Stable id for the problem at `index` within a set.
pub fn problem_id(index: usize) -> String {
    format!("problem-{index}")
}
