//! `pv-core` — foundational types for the precinct voter-flow simulator.
//!
//! This crate is a dependency of every other `pv-*` crate.  It intentionally
//! has no `pv-*` dependencies and minimal external ones (only `rand` and
//! `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module        | Contents                                                |
//! |---------------|---------------------------------------------------------|
//! | [`time`]      | `Minutes` (totally ordered simulation time)             |
//! | [`voter`]     | `Voter`, one completed voter record                     |
//! | [`precinct`]  | `PrecinctConfig`, `BallotMix`, `Precinct`               |
//! | [`rng`]       | `SimRng` (one seeded stream per simulation run)         |
//! | [`error`]     | `PvError`, `PvResult`                                   |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod error;
pub mod precinct;
pub mod rng;
pub mod time;
pub mod voter;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{PvError, PvResult};
pub use precinct::{BallotMix, Precinct, PrecinctConfig};
pub use rng::SimRng;
pub use time::Minutes;
pub use voter::Voter;
