/// Rescales one metric's raw values onto [0, 1] with min-max scaling.
///
/// A zero-variance metric (all values equal) normalizes to 1.0 for every
/// candidate, not 0.0: a metric with no spread must not zero out each
/// project's contribution to the weighted score. Empty input yields empty
/// output.
pub fn min_max_normalize(values: &[f64]) -> Vec<f64> {
    if values.is_empty() {
        return Vec::new();
    }
    let lo = values.iter().copied().fold(f64::INFINITY, f64::min);
    let hi = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    if lo == hi {
        return vec![1.0; values.len()];
    }
    values.iter().map(|v| (v - lo) / (hi - lo)).collect()
}
