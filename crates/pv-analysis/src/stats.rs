//! Small reductions over trial output.

use pv_core::Voter;

/// Arithmetic mean, or `None` for an empty slice.
pub fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    Some(values.iter().sum::<f64>() / values.len() as f64)
}

/// Mean of `start_time - arrival_time` over `voters`, or `None` if empty.
pub fn mean_wait(voters: &[Voter]) -> Option<f64> {
    if voters.is_empty() {
        return None;
    }
    Some(voters.iter().map(Voter::wait).sum::<f64>() / voters.len() as f64)
}

/// Element at index `len / 2` after sorting ascending.
///
/// For even lengths this is the upper of the two middle values; the two are
/// never averaged.
pub fn upper_median(mut values: Vec<f64>) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    values.sort_by(f64::total_cmp);
    Some(values[values.len() / 2])
}
