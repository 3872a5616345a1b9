//! `VoterOutputObserver<W>`: bridges `SimObserver` to an `OutputWriter`.

use pv_core::Voter;
use pv_sim::{RunSummary, SimObserver};

use crate::row::{PrecinctSummaryRow, VoterRow};
use crate::writer::OutputWriter;
use crate::{OutputError, OutputResult};

/// A [`SimObserver`] that streams every served voter and one summary row
/// per run to any [`OutputWriter`] backend.
///
/// Errors from the writer are stored internally because `SimObserver` methods
/// have no return value.  After the runs complete, call
/// [`finish`][Self::finish] and check for errors with
/// [`take_error`][Self::take_error].
pub struct VoterOutputObserver<W: OutputWriter> {
    writer:     W,
    precinct:   String,
    served:     usize,
    wait_total: f64,
    last_error: Option<OutputError>,
}

impl<W: OutputWriter> VoterOutputObserver<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            precinct:   String::new(),
            served:     0,
            wait_total: 0.0,
            last_error: None,
        }
    }

    /// Flush the writer.  Call once after the last run.
    pub fn finish(&mut self) {
        let result = self.writer.finish();
        self.store_err(result);
    }

    /// Take the stored write error (if any).
    ///
    /// Returns `None` if all writes succeeded.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    /// Unwrap the inner writer (e.g. to inspect files after the run).
    pub fn into_writer(self) -> W {
        self.writer
    }

    fn store_err(&mut self, result: OutputResult<()>) {
        if let Err(e) = result {
            // Keep only the first error.
            if self.last_error.is_none() {
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: OutputWriter> SimObserver for VoterOutputObserver<W> {
    fn on_sim_start(&mut self, precinct: &str, _seed: u64) {
        self.precinct.clear();
        self.precinct.push_str(precinct);
        self.served = 0;
        self.wait_total = 0.0;
    }

    fn on_voter(&mut self, voter: &Voter) {
        let row = VoterRow {
            precinct:        &self.precinct,
            voter_index:     self.served,
            arrival_time:    voter.arrival_time.0,
            voting_duration: voter.voting_duration,
            start_time:      voter.start_time.0,
            departure_time:  voter.departure_time.0,
            wait:            voter.wait(),
        };
        let result = self.writer.write_voter(&row);
        self.store_err(result);
        self.served += 1;
        self.wait_total += voter.wait();
    }

    fn on_sim_end(&mut self, summary: &RunSummary) {
        let average_wait = (self.served > 0).then(|| self.wait_total / self.served as f64);
        let row = PrecinctSummaryRow {
            precinct:       &summary.precinct,
            seed:           summary.seed,
            voters:         summary.voters as u64,
            last_departure: summary.last_departure.map(|t| t.0),
            average_wait,
        };
        let result = self.writer.write_summary(&row);
        self.store_err(result);
    }
}
