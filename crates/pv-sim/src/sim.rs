//! The `PrecinctSim` driver.

use pv_core::{BallotMix, Minutes, Precinct, PrecinctConfig, SimRng, Voter};
use pv_queue::{ArrivalGenerator, BoothPool};
use tracing::{debug, trace};

use crate::{NoopObserver, RunSummary, SimObserver, SimResult};

/// Upper bound on the up-front voter `Vec` reservation.
const MAX_PREALLOCATED_VOTERS: usize = 4_096;

/// Simulates one precinct for one ballot mix.
///
/// Holds no per-run state: every call to [`run`](Self::run) seeds a fresh
/// [`SimRng`] and builds a fresh [`BoothPool`], so one `PrecinctSim` can be
/// reused across many seeds (and shared across threads).
#[derive(Clone, Debug)]
pub struct PrecinctSim {
    config:    PrecinctConfig,
    generator: ArrivalGenerator,
}

impl PrecinctSim {
    /// Validate `config` and `ballots` and prepare the arrival distributions.
    pub fn new(config: PrecinctConfig, ballots: BallotMix) -> SimResult<Self> {
        config.validate()?;
        let generator = ArrivalGenerator::for_precinct(&config, ballots)?;
        Ok(Self { config, generator })
    }

    /// Simulator for a configured precinct with its own ballot mix.
    pub fn from_precinct(precinct: &Precinct) -> SimResult<Self> {
        Self::new(precinct.config.clone(), precinct.ballots)
    }

    pub fn config(&self) -> &PrecinctConfig {
        &self.config
    }

    pub fn ballots(&self) -> BallotMix {
        self.generator.ballots()
    }

    /// Run one simulated day seeded with `seed` and return the served voters
    /// in arrival order.
    pub fn run(&self, seed: u64) -> SimResult<Vec<Voter>> {
        self.run_observed(seed, &mut NoopObserver)
    }

    /// Like [`run`](Self::run) but reports progress to `observer`.
    pub fn run_observed<O: SimObserver>(&self, seed: u64, observer: &mut O) -> SimResult<Vec<Voter>> {
        let closing = self.config.closing_time();
        let cap = self.config.max_num_voters;

        let mut rng = SimRng::new(seed);
        let mut pool = BoothPool::new(self.config.num_booths)?;
        let mut voters = Vec::with_capacity(cap.min(MAX_PREALLOCATED_VOTERS));
        let mut arrival_time = Minutes::ZERO;
        let mut turned_away = false;

        observer.on_sim_start(&self.config.name, seed);

        for arrival in self.generator.arrivals(&mut rng).take(cap) {
            arrival_time += arrival.gap;
            if arrival_time > closing {
                turned_away = true;
                observer.on_turned_away(arrival_time);
                break;
            }

            let voter = pool.resolve(arrival_time, arrival.duration)?;
            trace!(
                precinct = %self.config.name,
                arrival = arrival_time.0,
                start = voter.start_time.0,
                wait = voter.wait(),
                straight_ticket = arrival.straight_ticket,
                busy_booths = pool.len(),
                "voter resolved"
            );
            observer.on_voter(&voter);
            voters.push(voter);
        }

        let summary = RunSummary {
            precinct:       self.config.name.clone(),
            seed,
            voters:         voters.len(),
            turned_away,
            last_departure: voters.iter().map(|v| v.departure_time).max(),
        };
        debug!(
            precinct = %summary.precinct,
            seed,
            voters = summary.voters,
            turned_away,
            last_departure = summary.last_departure.map(|t| t.0),
            "precinct run complete"
        );
        observer.on_sim_end(&summary);

        Ok(voters)
    }
}
