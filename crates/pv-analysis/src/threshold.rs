//! Split-ticket threshold search.
//!
//! Split-ticket voters take longer than straight-ticket voters, so the
//! median wait grows as the split-ticket share grows.  The search walks a
//! fixed eleven-point grid from 0% to 100% split-ticket and reports the
//! first share whose median wait is strictly above the target.  There is no
//! interpolation between grid points.

use pv_core::Precinct;
use tracing::info;

use crate::{AnalysisError, AnalysisResult, average_wait};

/// Number of equal steps between 0% and 100% split-ticket.
pub const SPLIT_GRID_STEPS: u32 = 10;

/// Result of [`find_threshold`].
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Threshold {
    /// Split-ticket share at which the search stopped.
    pub split_percent: f64,
    /// Median wait at that share, or `None` if no share on the grid pushed
    /// the wait above the target (`split_percent` is then `1.0`).
    pub wait: Option<f64>,
}

impl Threshold {
    /// `false` when the target wait is never exceeded on the grid.
    pub fn is_feasible(&self) -> bool {
        self.wait.is_some()
    }
}

/// Split-ticket shares `0.0, 0.1, …, 1.0`.
///
/// Each point is computed as `i / 10` rather than by repeated addition so
/// that the endpoints are exact.
pub fn split_grid() -> impl Iterator<Item = f64> {
    (0..=SPLIT_GRID_STEPS).map(|i| f64::from(i) / f64::from(SPLIT_GRID_STEPS))
}

/// Smallest split-ticket share on the grid whose median wait over
/// `n_trials` trials (seeded from `seed`) exceeds `target_wait`.
pub fn find_threshold(
    precinct:    &Precinct,
    target_wait: f64,
    n_trials:    usize,
    seed:        u64,
) -> AnalysisResult<Threshold> {
    if target_wait.is_nan() {
        return Err(AnalysisError::NanTarget);
    }

    for split_percent in split_grid() {
        let wait = average_wait(precinct, 1.0 - split_percent, n_trials, seed)?;
        if wait > target_wait {
            info!(precinct = precinct.name(), split_percent, wait, target_wait, "threshold found");
            return Ok(Threshold { split_percent, wait: Some(wait) });
        }
    }

    info!(precinct = precinct.name(), target_wait, "target wait never exceeded");
    Ok(Threshold { split_percent: 1.0, wait: None })
}
