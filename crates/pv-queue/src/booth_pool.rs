//! `BoothPool`: earliest-departure-first tracking of occupied booths.
//!
//! # Why a heap of times
//!
//! Booths are interchangeable, so the only question the allocator ever asks
//! is "when does the *next* booth free up?".  A min-heap of pending
//! departure times answers it in O(1) and updates in O(log B) where B is the
//! booth count.  Equal departure times are popped in unspecified order;
//! nothing downstream can tell them apart.

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use pv_core::{Minutes, PvError, Voter};

use crate::{QueueError, QueueResult};

/// Bounded multiset of pending departure times.
#[derive(Clone, Debug)]
pub struct BoothPool {
    departures: BinaryHeap<Reverse<Minutes>>,
    capacity:   usize,
}

impl BoothPool {
    /// Create an empty pool for `num_booths` booths.
    pub fn new(num_booths: usize) -> QueueResult<Self> {
        if num_booths == 0 {
            return Err(PvError::Config("booth pool needs at least one booth".into()).into());
        }
        Ok(Self {
            departures: BinaryHeap::with_capacity(num_booths),
            capacity:   num_booths,
        })
    }

    /// Decide when a voter arriving at `arrival_time` starts voting.
    ///
    /// With a free booth the voter starts on arrival.  Otherwise the earliest
    /// pending departure is removed and the voter starts at the later of that
    /// time and their own arrival.  The voter's departure then occupies the
    /// booth.
    pub fn resolve(&mut self, arrival_time: Minutes, voting_duration: f64) -> QueueResult<Voter> {
        let start_time = if self.is_full() {
            match self.pop_earliest() {
                Some(t_free) => t_free.max(arrival_time),
                None => arrival_time,
            }
        } else {
            arrival_time
        };

        let voter = Voter::new(arrival_time, voting_duration, start_time);
        self.insert(voter.departure_time)?;
        Ok(voter)
    }

    /// Mark a booth busy until `departure`.
    ///
    /// Fails with [`QueueError::PoolFull`] rather than dropping the entry.
    pub fn insert(&mut self, departure: Minutes) -> QueueResult<()> {
        if self.is_full() {
            return Err(QueueError::PoolFull { capacity: self.capacity });
        }
        self.departures.push(Reverse(departure));
        Ok(())
    }

    /// Remove and return the earliest pending departure.
    pub fn pop_earliest(&mut self) -> Option<Minutes> {
        self.departures.pop().map(|Reverse(t)| t)
    }

    /// The earliest pending departure, if any booth is busy.
    pub fn peek_earliest(&self) -> Option<Minutes> {
        self.departures.peek().map(|&Reverse(t)| t)
    }

    /// Number of occupied booths.
    pub fn len(&self) -> usize {
        self.departures.len()
    }

    pub fn is_empty(&self) -> bool {
        self.departures.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.departures.len() >= self.capacity
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}
