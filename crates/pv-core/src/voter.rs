//! The `Voter` record produced by a simulation run.

use std::fmt;

use crate::Minutes;

/// One voter who arrived before closing and was assigned a booth.
///
/// All four timestamps are known when the record is built, so a `Voter` is
/// never mutated afterward.  Wait time is derived, not stored.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Voter {
    pub arrival_time:    Minutes,
    pub voting_duration: f64,
    pub start_time:      Minutes,
    pub departure_time:  Minutes,
}

impl Voter {
    /// Build a voter from an arrival and the booth allocator's decision.
    ///
    /// # Panics
    /// Panics in debug mode if `start_time < arrival_time`.
    #[inline]
    pub fn new(arrival_time: Minutes, voting_duration: f64, start_time: Minutes) -> Self {
        debug_assert!(start_time >= arrival_time, "voter started before arriving");
        Self {
            arrival_time,
            voting_duration,
            start_time,
            departure_time: start_time + voting_duration,
        }
    }

    /// Minutes spent queued before a booth became free.
    #[inline]
    pub fn wait(&self) -> f64 {
        self.start_time - self.arrival_time
    }
}

impl fmt::Display for Voter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "arrived {:>8.2}  duration {:>7.2}  start {:>8.2}  departed {:>8.2}  wait {:>7.2}",
            self.arrival_time.0,
            self.voting_duration,
            self.start_time.0,
            self.departure_time.0,
            self.wait(),
        )
    }
}
