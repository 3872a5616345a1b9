//! Simulation time model.
//!
//! # Design
//!
//! Time is continuous: every timestamp is a count of minutes since the
//! precinct opened, stored as `f64`.  `Minutes` wraps that value and gives it
//! a *total* order (via [`f64::total_cmp`]) so it can live in ordered
//! collections such as the booth pool's binary heap.
//!
//! Only finite, non-negative values are produced by the simulator; the total
//! order exists so that the heap never has to reason about `NaN`.

use std::cmp::Ordering;
use std::fmt;

/// Minutes elapsed since the precinct opened.
#[derive(Copy, Clone, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Minutes(pub f64);

impl Minutes {
    pub const ZERO: Minutes = Minutes(0.0);

    /// Opening-hours horizon: `hours * 60` minutes.
    #[inline]
    pub fn from_hours(hours: u32) -> Minutes {
        Minutes(f64::from(hours) * 60.0)
    }

    /// Minutes elapsed from `earlier` to `self`.
    #[inline]
    pub fn since(self, earlier: Minutes) -> f64 {
        self.0 - earlier.0
    }
}

impl PartialEq for Minutes {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Minutes {}

impl PartialOrd for Minutes {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Minutes {
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

impl std::ops::Add<f64> for Minutes {
    type Output = Minutes;
    #[inline]
    fn add(self, rhs: f64) -> Minutes {
        Minutes(self.0 + rhs)
    }
}

impl std::ops::AddAssign<f64> for Minutes {
    #[inline]
    fn add_assign(&mut self, rhs: f64) {
        self.0 += rhs;
    }
}

impl std::ops::Sub for Minutes {
    type Output = f64;
    #[inline]
    fn sub(self, rhs: Minutes) -> f64 {
        self.0 - rhs.0
    }
}

impl fmt::Display for Minutes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}m", self.0)
    }
}
