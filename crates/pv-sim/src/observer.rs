//! Simulation observer trait for progress reporting and data collection.

use pv_core::{Minutes, Voter};

/// Outcome of one precinct run, reported to [`SimObserver::on_sim_end`].
#[derive(Clone, Debug, PartialEq)]
pub struct RunSummary {
    pub precinct:       String,
    pub seed:           u64,
    /// Voters who arrived before closing and were assigned a booth.
    pub voters:         usize,
    /// `true` if the run stopped because a voter arrived after closing,
    /// `false` if it stopped at the voter cap.
    pub turned_away:    bool,
    /// Latest departure among served voters; `None` for an empty run.
    pub last_departure: Option<Minutes>,
}

/// Callbacks invoked by [`PrecinctSim::run_observed`][crate::PrecinctSim::run_observed].
///
/// All methods have default no-op implementations so implementors only need to
/// override what they care about.
///
/// # Example: wait-time tally
///
/// ```rust,ignore
/// struct LongWaits { threshold: f64, count: usize }
///
/// impl SimObserver for LongWaits {
///     fn on_voter(&mut self, voter: &Voter) {
///         if voter.wait() > self.threshold {
///             self.count += 1;
///         }
///     }
/// }
/// ```
pub trait SimObserver {
    /// Called before the first arrival is drawn.
    fn on_sim_start(&mut self, _precinct: &str, _seed: u64) {}

    /// Called once per voter, in arrival order, as soon as the booth pool
    /// has resolved their start and departure times.
    fn on_voter(&mut self, _voter: &Voter) {}

    /// Called for the first voter who arrives after closing.  That voter is
    /// not recorded and the run ends.
    fn on_turned_away(&mut self, _arrival_time: Minutes) {}

    /// Called once after the run completes.
    fn on_sim_end(&mut self, _summary: &RunSummary) {}
}

/// A [`SimObserver`] that does nothing.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}
