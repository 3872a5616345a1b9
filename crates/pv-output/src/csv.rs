//! CSV output backend.
//!
//! Creates two files in the configured output directory:
//! - `voters.csv`
//! - `precinct_summaries.csv`

use std::fs::File;
use std::path::Path;

use csv::Writer;

use crate::writer::OutputWriter;
use crate::{OutputResult, PrecinctSummaryRow, VoterRow};

/// Writes simulation output to two CSV files.
pub struct CsvWriter {
    voters:    Writer<File>,
    summaries: Writer<File>,
    finished:  bool,
}

impl CsvWriter {
    /// Open (or create) the two CSV files in `dir` and write the header rows.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let mut voters = Writer::from_path(dir.join("voters.csv"))?;
        voters.write_record([
            "precinct",
            "voter_index",
            "arrival_time",
            "voting_duration",
            "start_time",
            "departure_time",
            "wait",
        ])?;

        let mut summaries = Writer::from_path(dir.join("precinct_summaries.csv"))?;
        summaries.write_record(["precinct", "seed", "voters", "last_departure", "average_wait"])?;

        Ok(Self {
            voters,
            summaries,
            finished: false,
        })
    }
}

impl OutputWriter for CsvWriter {
    fn write_voter(&mut self, row: &VoterRow<'_>) -> OutputResult<()> {
        self.voters.write_record(&[
            row.precinct.to_owned(),
            row.voter_index.to_string(),
            row.arrival_time.to_string(),
            row.voting_duration.to_string(),
            row.start_time.to_string(),
            row.departure_time.to_string(),
            row.wait.to_string(),
        ])?;
        Ok(())
    }

    fn write_summary(&mut self, row: &PrecinctSummaryRow<'_>) -> OutputResult<()> {
        self.summaries.write_record(&[
            row.precinct.to_owned(),
            row.seed.to_string(),
            row.voters.to_string(),
            optional(row.last_departure),
            optional(row.average_wait),
        ])?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.voters.flush()?;
        self.summaries.flush()?;
        Ok(())
    }
}

fn optional(value: Option<f64>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}
