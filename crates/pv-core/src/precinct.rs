//! Precinct configuration and ballot mix.
//!
//! A [`Precinct`] is the unit of simulation: the structural
//! [`PrecinctConfig`] (hours, booths, rates) plus the [`BallotMix`] that
//! decides how many voters take the short straight-ticket path.  The two are
//! kept apart because the analysis layer sweeps the ballot mix while holding
//! the structure fixed.

use crate::{Minutes, PvError, PvResult};

// ── PrecinctConfig ────────────────────────────────────────────────────────────

/// Structural parameters of one polling location.
///
/// Read-only for the lifetime of a simulation.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PrecinctConfig {
    pub name: String,

    /// How long the doors stay open.  Voters arriving after
    /// `hours_open * 60` minutes are turned away.
    pub hours_open: u32,

    /// Upper bound on voters served in one run.  Zero is allowed and
    /// yields an empty run.
    pub max_num_voters: usize,

    /// Number of interchangeable booths.
    pub num_booths: usize,

    /// Expected arrivals per minute (mean gap = `1 / arrival_rate`).
    pub arrival_rate: f64,

    /// Rate parameter of the exponential voting-duration distribution
    /// (mean duration = `1 / voting_duration_rate`).
    pub voting_duration_rate: f64,
}

impl PrecinctConfig {
    /// Closing time in minutes after opening.
    #[inline]
    pub fn closing_time(&self) -> Minutes {
        Minutes::from_hours(self.hours_open)
    }

    /// Reject configurations the simulator cannot run.
    pub fn validate(&self) -> PvResult<()> {
        if self.hours_open == 0 {
            return Err(self.invalid("hours_open must be positive"));
        }
        if self.num_booths == 0 {
            return Err(self.invalid("num_booths must be positive"));
        }
        if !is_positive_rate(self.arrival_rate) {
            return Err(self.invalid(&format!(
                "arrival_rate must be positive and finite, got {}",
                self.arrival_rate
            )));
        }
        if !is_positive_rate(self.voting_duration_rate) {
            return Err(self.invalid(&format!(
                "voting_duration_rate must be positive and finite, got {}",
                self.voting_duration_rate
            )));
        }
        Ok(())
    }

    fn invalid(&self, what: &str) -> PvError {
        PvError::Config(format!("precinct {:?}: {what}", self.name))
    }
}

// ── BallotMix ─────────────────────────────────────────────────────────────────

/// Share of straight-ticket voters and their fixed voting duration.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BallotMix {
    /// Probability in `[0, 1]` that a voter votes straight-ticket.
    pub percent_straight_ticket: f64,

    /// Voting duration (minutes) used for every straight-ticket voter.
    pub straight_ticket_duration: f64,
}

impl BallotMix {
    pub fn new(percent_straight_ticket: f64, straight_ticket_duration: f64) -> Self {
        Self { percent_straight_ticket, straight_ticket_duration }
    }

    /// Same straight-ticket duration, different share.
    pub fn with_percent(self, percent_straight_ticket: f64) -> Self {
        Self { percent_straight_ticket, ..self }
    }

    pub fn validate(&self) -> PvResult<()> {
        if !(0.0..=1.0).contains(&self.percent_straight_ticket) {
            return Err(PvError::Config(format!(
                "percent_straight_ticket must be in [0, 1], got {}",
                self.percent_straight_ticket
            )));
        }
        if !is_positive_rate(self.straight_ticket_duration) {
            return Err(PvError::Config(format!(
                "straight_ticket_duration must be positive and finite, got {}",
                self.straight_ticket_duration
            )));
        }
        Ok(())
    }
}

// ── Precinct ──────────────────────────────────────────────────────────────────

/// A precinct as read from a configuration file.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Precinct {
    pub config:  PrecinctConfig,
    pub ballots: BallotMix,
}

impl Precinct {
    pub fn new(config: PrecinctConfig, ballots: BallotMix) -> Self {
        Self { config, ballots }
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.config.name
    }

    pub fn validate(&self) -> PvResult<()> {
        self.config.validate()?;
        self.ballots.validate().map_err(|e| match e {
            PvError::Config(msg) => {
                PvError::Config(format!("precinct {:?}: {msg}", self.config.name))
            }
            other => other,
        })
    }
}

fn is_positive_rate(x: f64) -> bool {
    x.is_finite() && x > 0.0
}
