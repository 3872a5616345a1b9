//! `pv-sim` — simulation driver for one polling precinct.
//!
//! # Run loop
//!
//! ```text
//! rng  = SimRng::new(seed)              (fresh stream every run)
//! pool = BoothPool::new(num_booths)     (fresh pool every run)
//! for (gap, duration) in arrivals.take(max_num_voters):
//!   ① arrival_time += gap
//!   ② arrival_time > closing_time  → voter turned away, stop
//!   ③ pool.resolve(arrival_time, duration) → Voter, record it
//! ```
//!
//! The run ends at whichever bound is hit first.  Same precinct, ballot mix
//! and seed always produce the same voters.
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use pv_core::{BallotMix, PrecinctConfig};
//! use pv_sim::PrecinctSim;
//!
//! let sim = PrecinctSim::new(config, BallotMix::new(0.2, 2.0))?;
//! let voters = sim.run(/*seed=*/ 1468604453)?;
//! ```

pub mod election;
pub mod error;
pub mod observer;
pub mod sim;


pub use election::{ElectionDay, simulate_election_day, simulate_election_day_observed};
pub use error::{SimError, SimResult};
pub use observer::{NoopObserver, RunSummary, SimObserver};
pub use sim::PrecinctSim;
