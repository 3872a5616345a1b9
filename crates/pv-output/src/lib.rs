//! `pv-output` — simulation output writers.
//!
//! | Backend | Files created                                 |
//! |---------|-----------------------------------------------|
//! | CSV     | `voters.csv`, `precinct_summaries.csv`        |
//!
//! Backends implement [`OutputWriter`] and are driven by
//! [`VoterOutputObserver`], which implements `pv_sim::SimObserver`.
//!
//! # Usage
//!
//! ```rust,ignore
//! use pv_output::{CsvWriter, VoterOutputObserver};
//!
//! let writer = CsvWriter::new(Path::new("./output"))?;
//! let mut obs = VoterOutputObserver::new(writer);
//! simulate_election_day_observed(&file.precincts, file.seed, &mut obs)?;
//! obs.finish();
//! obs.take_error().map(|e| eprintln!("output error: {e}"));
//! ```

pub mod csv;
pub mod error;
pub mod observer;
pub mod row;
pub mod writer;

#[cfg(test)]
mod tests;

pub use csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use observer::VoterOutputObserver;
pub use row::{PrecinctSummaryRow, VoterRow};
pub use writer::OutputWriter;
