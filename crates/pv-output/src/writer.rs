//! The `OutputWriter` trait implemented by all backend writers.

use crate::{OutputResult, PrecinctSummaryRow, VoterRow};

/// Trait implemented by output backends.
///
/// All methods are infallible from the observer's perspective; errors are
/// stored internally and retrieved with
/// [`VoterOutputObserver::take_error`][crate::VoterOutputObserver::take_error].
pub trait OutputWriter {
    /// Write one voter row.
    fn write_voter(&mut self, row: &VoterRow<'_>) -> OutputResult<()>;

    /// Write one precinct summary row.
    fn write_summary(&mut self, row: &PrecinctSummaryRow<'_>) -> OutputResult<()>;

    /// Flush and close all underlying file handles.
    ///
    /// Idempotent: safe to call more than once.
    fn finish(&mut self) -> OutputResult<()>;
}
