//! Plain data row types written by output backends.

/// One served voter.  Times are minutes after the precinct opened.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VoterRow<'a> {
    pub precinct:        &'a str,
    /// Position in arrival order, starting at 0.
    pub voter_index:     usize,
    pub arrival_time:    f64,
    pub voting_duration: f64,
    pub start_time:      f64,
    pub departure_time:  f64,
    pub wait:            f64,
}

/// Per-run totals for one precinct.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PrecinctSummaryRow<'a> {
    pub precinct:       &'a str,
    pub seed:           u64,
    pub voters:         u64,
    /// `None` when no voter was served.
    pub last_departure: Option<f64>,
    /// `None` when no voter was served.
    pub average_wait:   Option<f64>,
}
