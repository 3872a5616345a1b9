//! Synthetic voter arrival stream.
//!
//! Each draw yields the gap since the previous arrival and the new voter's
//! voting duration.  The stream never ends on its own; the simulation driver
//! stops pulling when the precinct closes or the voter cap is reached.
//!
//! # Draw order
//!
//! Every value comes from the single [`SimRng`] passed in by the caller, in
//! this order:
//!
//! 1. interarrival gap     : `Exp(arrival_rate)`
//! 2. straight-ticket flip : `Bernoulli(percent_straight_ticket)`
//! 3. voting duration      : `Exp(voting_duration_rate)`, skipped when the
//!    flip succeeds (the duration is then `straight_ticket_duration`)
//!
//! Reordering these draws changes every run's output for a given seed.

use pv_core::{BallotMix, PrecinctConfig, PvError, SimRng};
use rand_distr::Exp;

use crate::QueueResult;

/// One draw from the arrival stream.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Arrival {
    /// Minutes since the previous arrival (or since opening, for the first).
    pub gap: f64,
    /// Minutes the voter will occupy a booth.
    pub duration: f64,
    /// Whether the duration came from the straight-ticket override.
    pub straight_ticket: bool,
}

/// Stateless sampler for [`Arrival`]s.
///
/// Holds only the distributions; all randomness lives in the caller's
/// [`SimRng`], so restarting the stream is just reseeding that RNG.
#[derive(Clone, Debug)]
pub struct ArrivalGenerator {
    interarrival: Exp<f64>,
    duration:     Exp<f64>,
    ballots:      BallotMix,
}

impl ArrivalGenerator {
    pub fn new(arrival_rate: f64, voting_duration_rate: f64, ballots: BallotMix) -> QueueResult<Self> {
        ballots.validate()?;
        Ok(Self {
            interarrival: exp(arrival_rate, "arrival_rate")?,
            duration:     exp(voting_duration_rate, "voting_duration_rate")?,
            ballots,
        })
    }

    /// Build the generator for a precinct's rates and the given ballot mix.
    pub fn for_precinct(config: &PrecinctConfig, ballots: BallotMix) -> QueueResult<Self> {
        Self::new(config.arrival_rate, config.voting_duration_rate, ballots)
    }

    pub fn ballots(&self) -> BallotMix {
        self.ballots
    }

    /// Draw the next arrival from `rng`.
    pub fn next_arrival(&self, rng: &mut SimRng) -> Arrival {
        let gap = rng.sample(&self.interarrival);
        let straight_ticket = rng.gen_bool(self.ballots.percent_straight_ticket);
        let duration = if straight_ticket {
            self.ballots.straight_ticket_duration
        } else {
            rng.sample(&self.duration)
        };
        Arrival { gap, duration, straight_ticket }
    }

    /// Infinite iterator of arrivals drawn from `rng`.
    pub fn arrivals<'a>(&'a self, rng: &'a mut SimRng) -> Arrivals<'a> {
        Arrivals { generator: self, rng }
    }
}

/// Lazy, infinite arrival stream borrowed from an [`ArrivalGenerator`].
pub struct Arrivals<'a> {
    generator: &'a ArrivalGenerator,
    rng:       &'a mut SimRng,
}

impl Iterator for Arrivals<'_> {
    type Item = Arrival;

    #[inline]
    fn next(&mut self) -> Option<Arrival> {
        Some(self.generator.next_arrival(self.rng))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (usize::MAX, None)
    }
}

fn exp(rate: f64, what: &str) -> QueueResult<Exp<f64>> {
    if !(rate.is_finite() && rate > 0.0) {
        return Err(PvError::Distribution(format!("{what} must be positive and finite, got {rate}")).into());
    }
    Exp::new(rate).map_err(|e| PvError::Distribution(format!("{what}: {e}")).into())
}
