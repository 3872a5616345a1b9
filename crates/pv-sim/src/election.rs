//! Whole-file runs: every precinct in a configuration, one shared seed.

use std::collections::BTreeMap;

use pv_core::{Precinct, Voter};

use crate::{NoopObserver, PrecinctSim, SimError, SimObserver, SimResult};

/// Voters for every precinct simulated on one election day, keyed by
/// precinct name.
#[derive(Clone, Debug, Default)]
pub struct ElectionDay {
    seed:    u64,
    results: BTreeMap<String, Vec<Voter>>,
}

impl ElectionDay {
    /// The seed every precinct was run with.
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Voters for precinct `name`.
    ///
    /// A name that was not part of the run is a configuration error.
    pub fn voters(&self, name: &str) -> SimResult<&[Voter]> {
        self.results
            .get(name)
            .map(Vec::as_slice)
            .ok_or_else(|| SimError::UnknownPrecinct(name.to_owned()))
    }

    /// `(name, voters)` pairs in ascending name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[Voter])> {
        self.results.iter().map(|(name, voters)| (name.as_str(), voters.as_slice()))
    }

    /// Number of precincts.
    pub fn len(&self) -> usize {
        self.results.len()
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    pub fn into_inner(self) -> BTreeMap<String, Vec<Voter>> {
        self.results
    }
}

/// Simulate every precinct with the same `seed`.
///
/// Each precinct restarts the random stream from `seed`, so adding or
/// removing a precinct never changes another precinct's voters.
pub fn simulate_election_day(precincts: &[Precinct], seed: u64) -> SimResult<ElectionDay> {
    simulate_election_day_observed(precincts, seed, &mut NoopObserver)
}

/// Like [`simulate_election_day`] but reports every run to `observer`.
pub fn simulate_election_day_observed<O: SimObserver>(
    precincts: &[Precinct],
    seed:      u64,
    observer:  &mut O,
) -> SimResult<ElectionDay> {
    let mut results = BTreeMap::new();
    for precinct in precincts {
        if results.contains_key(precinct.name()) {
            return Err(SimError::DuplicatePrecinct(precinct.name().to_owned()));
        }
        let voters = PrecinctSim::from_precinct(precinct)?.run_observed(seed, observer)?;
        results.insert(precinct.name().to_owned(), voters);
    }
    Ok(ElectionDay { seed, results })
}
