//! JSON precinct loader.
//!
//! # File format
//!
//! One global seed shared by every precinct, and a list of precincts:
//!
//! ```json
//! {
//!   "seed": 1468604453,
//!   "precincts": [
//!     {
//!       "name": "Downtown",
//!       "hours_open": 13,
//!       "num_voters": 500,
//!       "num_booths": 3,
//!       "arrival_rate": 0.55,
//!       "voting_duration_rate": 0.1,
//!       "percent_straight_ticket": 0.2,
//!       "straight_ticket_duration": 2.0
//!     }
//!   ]
//! }
//! ```
//!
//! `num_voters` is the per-run voter cap.  Unknown keys are ignored.  Every
//! precinct is validated on load, and names must be unique.

use std::collections::HashSet;
use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use pv_core::{BallotMix, Precinct, PrecinctConfig};

use crate::{ConfigError, ConfigResult};

// ── JSON records ──────────────────────────────────────────────────────────────

#[derive(Deserialize)]
struct FileRecord {
    seed:      u64,
    precincts: Vec<PrecinctRecord>,
}

#[derive(Deserialize)]
struct PrecinctRecord {
    name:                     String,
    hours_open:               u32,
    num_voters:               usize,
    num_booths:               usize,
    arrival_rate:             f64,
    voting_duration_rate:     f64,
    percent_straight_ticket:  f64,
    straight_ticket_duration: f64,
}

impl From<PrecinctRecord> for Precinct {
    fn from(r: PrecinctRecord) -> Self {
        Precinct::new(
            PrecinctConfig {
                name:                 r.name,
                hours_open:           r.hours_open,
                max_num_voters:       r.num_voters,
                num_booths:           r.num_booths,
                arrival_rate:         r.arrival_rate,
                voting_duration_rate: r.voting_duration_rate,
            },
            BallotMix::new(r.percent_straight_ticket, r.straight_ticket_duration),
        )
    }
}

// ── Public API ────────────────────────────────────────────────────────────────

/// A validated precinct file.
#[derive(Clone, Debug, PartialEq)]
pub struct PrecinctFile {
    /// Seed shared by every precinct in the file.
    pub seed:      u64,
    /// Precincts in file order.
    pub precincts: Vec<Precinct>,
}

impl PrecinctFile {
    /// Look up a precinct by name.
    pub fn precinct(&self, name: &str) -> ConfigResult<&Precinct> {
        self.precincts
            .iter()
            .find(|p| p.name() == name)
            .ok_or_else(|| ConfigError::UnknownPrecinct(name.to_owned()))
    }
}

/// Load and validate a precinct file.
pub fn load_precincts_json(path: &Path) -> ConfigResult<PrecinctFile> {
    let file = std::fs::File::open(path)?;
    load_precincts_reader(std::io::BufReader::new(file))
}

/// Like [`load_precincts_json`] but accepts any `Read` source.
///
/// Useful for testing (pass a `std::io::Cursor`).
pub fn load_precincts_reader<R: Read>(reader: R) -> ConfigResult<PrecinctFile> {
    let record: FileRecord = serde_json::from_reader(reader)?;

    let mut seen = HashSet::with_capacity(record.precincts.len());
    let mut precincts = Vec::with_capacity(record.precincts.len());
    for row in record.precincts {
        let precinct = Precinct::from(row);
        precinct.validate()?;
        if !seen.insert(precinct.name().to_owned()) {
            return Err(ConfigError::DuplicatePrecinct(precinct.config.name));
        }
        precincts.push(precinct);
    }

    Ok(PrecinctFile { seed: record.seed, precincts })
}
