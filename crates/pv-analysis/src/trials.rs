//! Seeded repeated trials for one precinct and ballot mix.

use pv_core::Precinct;
use pv_sim::PrecinctSim;
use tracing::debug;

use crate::stats::{mean_wait, upper_median};
use crate::{AnalysisError, AnalysisResult};

/// Seed for trial `trial` of a batch starting at `initial_seed`.
#[inline]
pub fn trial_seed(initial_seed: u64, trial: usize) -> u64 {
    initial_seed.wrapping_add(trial as u64)
}

/// Median wait for `precinct` when a `percent_straight_ticket` share of
/// voters votes straight-ticket.
///
/// Runs `n_trials` simulations seeded `initial_seed`, `initial_seed + 1`, …,
/// reduces each to its mean wait, and returns the upper median of those
/// means.  The precinct's own straight-ticket share is ignored; its
/// straight-ticket duration is kept.
pub fn average_wait(
    precinct:                &Precinct,
    percent_straight_ticket: f64,
    n_trials:                usize,
    initial_seed:            u64,
) -> AnalysisResult<f64> {
    let ballots = precinct.ballots.with_percent(percent_straight_ticket);
    let sim = PrecinctSim::new(precinct.config.clone(), ballots)?;

    let means = trial_mean_waits(&sim, n_trials, initial_seed)?;
    let median = upper_median(means).ok_or(AnalysisError::NoTrials)?;
    debug!(
        precinct = precinct.name(),
        percent_straight_ticket,
        n_trials,
        initial_seed,
        median,
        "average wait"
    );
    Ok(median)
}

/// Mean wait of every trial, in trial order.
///
/// With the `parallel` feature the trials run on Rayon's pool; each trial
/// owns its RNG and booth pool, so the values are identical either way.
pub fn trial_mean_waits(
    sim:          &PrecinctSim,
    n_trials:     usize,
    initial_seed: u64,
) -> AnalysisResult<Vec<f64>> {
    if n_trials == 0 {
        return Err(AnalysisError::NoTrials);
    }

    #[cfg(not(feature = "parallel"))]
    {
        (0..n_trials)
            .map(|trial| trial_mean_wait(sim, trial, initial_seed))
            .collect()
    }

    #[cfg(feature = "parallel")]
    {
        use rayon::prelude::*;

        (0..n_trials)
            .into_par_iter()
            .map(|trial| trial_mean_wait(sim, trial, initial_seed))
            .collect()
    }
}

fn trial_mean_wait(sim: &PrecinctSim, trial: usize, initial_seed: u64) -> AnalysisResult<f64> {
    let seed = trial_seed(initial_seed, trial);
    let voters = sim.run(seed)?;
    let mean = mean_wait(&voters).ok_or(AnalysisError::DegenerateTrial { trial, seed })?;
    debug!(precinct = %sim.config().name, trial, seed, voters = voters.len(), mean, "trial complete");
    Ok(mean)
}
