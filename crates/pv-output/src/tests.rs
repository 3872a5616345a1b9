//! Integration tests for pv-output.

#[cfg(test)]
mod csv_tests {
    use tempfile::TempDir;

    use crate::csv::CsvWriter;
    use crate::row::{PrecinctSummaryRow, VoterRow};
    use crate::writer::OutputWriter;

    fn tmp() -> TempDir {
        tempfile::tempdir().expect("create temp dir")
    }

    fn voter_row(voter_index: usize) -> VoterRow<'static> {
        VoterRow {
            precinct:        "Downtown",
            voter_index,
            arrival_time:    voter_index as f64,
            voting_duration: 4.0,
            start_time:      voter_index as f64 + 1.0,
            departure_time:  voter_index as f64 + 5.0,
            wait:            1.0,
        }
    }

    #[test]
    fn csv_files_created() {
        let dir = tmp();
        let _w = CsvWriter::new(dir.path()).unwrap();
        assert!(dir.path().join("voters.csv").exists());
        assert!(dir.path().join("precinct_summaries.csv").exists());
    }

    #[test]
    fn csv_headers_correct() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.finish().unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join("voters.csv")).unwrap();
        let headers: Vec<_> = rdr.headers().unwrap().iter().map(str::to_owned).collect();
        assert_eq!(
            headers,
            ["precinct", "voter_index", "arrival_time", "voting_duration", "start_time", "departure_time", "wait"]
        );

        let mut rdr2 = csv::Reader::from_path(dir.path().join("precinct_summaries.csv")).unwrap();
        let headers2: Vec<_> = rdr2.headers().unwrap().iter().map(str::to_owned).collect();
        assert_eq!(headers2, ["precinct", "seed", "voters", "last_departure", "average_wait"]);
    }

    #[test]
    fn voter_rows_written() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        for i in 0..3 {
            w.write_voter(&voter_row(i)).unwrap();
        }
        w.finish().unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join("voters.csv")).unwrap();
        let rows: Vec<_> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), 3);
        assert_eq!(&rows[0][0], "Downtown");
        assert_eq!(&rows[2][1], "2");   // voter_index
        assert_eq!(&rows[2][5], "7");   // departure_time
    }

    #[test]
    fn empty_summary_leaves_blank_fields() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.write_summary(&PrecinctSummaryRow {
            precinct:       "Empty",
            seed:           9,
            voters:         0,
            last_departure: None,
            average_wait:   None,
        })
        .unwrap();
        w.finish().unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join("precinct_summaries.csv")).unwrap();
        let rows: Vec<_> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), 1);
        assert_eq!(&rows[0][2], "0");
        assert_eq!(&rows[0][3], "");
        assert_eq!(&rows[0][4], "");
    }

    #[test]
    fn finish_is_idempotent() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.finish().unwrap();
        w.finish().unwrap();
    }
}

#[cfg(test)]
mod observer_tests {
    use pv_core::{BallotMix, Precinct, PrecinctConfig};
    use pv_sim::{PrecinctSim, simulate_election_day_observed};

    use crate::row::{PrecinctSummaryRow, VoterRow};
    use crate::writer::OutputWriter;
    use crate::{CsvWriter, OutputError, OutputResult, VoterOutputObserver};

    fn precinct(name: &str, max_num_voters: usize) -> Precinct {
        Precinct::new(
            PrecinctConfig {
                name: name.into(),
                hours_open: 2,
                max_num_voters,
                num_booths: 2,
                arrival_rate: 0.5,
                voting_duration_rate: 0.2,
            },
            BallotMix::new(0.25, 1.0),
        )
    }

    /// In-memory writer that records owned copies of every row.
    #[derive(Default)]
    struct MemoryWriter {
        voters:    Vec<(String, usize, f64)>,
        summaries: Vec<(String, u64, Option<f64>, Option<f64>)>,
        finished:  usize,
    }

    impl OutputWriter for MemoryWriter {
        fn write_voter(&mut self, row: &VoterRow<'_>) -> OutputResult<()> {
            self.voters.push((row.precinct.to_owned(), row.voter_index, row.wait));
            Ok(())
        }
        fn write_summary(&mut self, row: &PrecinctSummaryRow<'_>) -> OutputResult<()> {
            self.summaries.push((row.precinct.to_owned(), row.voters, row.last_departure, row.average_wait));
            Ok(())
        }
        fn finish(&mut self) -> OutputResult<()> {
            self.finished += 1;
            Ok(())
        }
    }

    /// Writer whose every call fails.
    struct FailingWriter;

    impl OutputWriter for FailingWriter {
        fn write_voter(&mut self, _row: &VoterRow<'_>) -> OutputResult<()> {
            Err(std::io::Error::other("disk full").into())
        }
        fn write_summary(&mut self, _row: &PrecinctSummaryRow<'_>) -> OutputResult<()> {
            Err(std::io::Error::other("summary failed").into())
        }
        fn finish(&mut self) -> OutputResult<()> {
            Ok(())
        }
    }

    #[test]
    fn rows_match_simulated_voters() {
        let p = precinct("Downtown", 50);
        let expected = PrecinctSim::from_precinct(&p).unwrap().run(4).unwrap();

        let mut obs = VoterOutputObserver::new(MemoryWriter::default());
        PrecinctSim::from_precinct(&p).unwrap().run_observed(4, &mut obs).unwrap();
        obs.finish();
        assert!(obs.take_error().is_none());

        let w = obs.into_writer();
        assert_eq!(w.finished, 1);
        assert_eq!(w.voters.len(), expected.len());
        for (i, ((name, index, wait), voter)) in w.voters.iter().zip(&expected).enumerate() {
            assert_eq!(name, "Downtown");
            assert_eq!(*index, i);
            assert_eq!(*wait, voter.wait());
        }

        let (name, count, last, avg) = &w.summaries[0];
        assert_eq!(name, "Downtown");
        assert_eq!(*count, expected.len() as u64);
        assert_eq!(*last, expected.iter().map(|v| v.departure_time).max().map(|t| t.0));
        let mean = expected.iter().map(|v| v.wait()).sum::<f64>() / expected.len() as f64;
        assert!((avg.unwrap() - mean).abs() < 1e-9);
    }

    #[test]
    fn indices_restart_per_precinct() {
        let precincts = [precinct("A", 3), precinct("B", 3)];
        let mut obs = VoterOutputObserver::new(MemoryWriter::default());
        simulate_election_day_observed(&precincts, 11, &mut obs).unwrap();

        let w = obs.into_writer();
        let indices: Vec<(String, usize)> = w.voters.iter().map(|(n, i, _)| (n.clone(), *i)).collect();
        assert_eq!(
            indices,
            vec![
                ("A".to_owned(), 0), ("A".to_owned(), 1), ("A".to_owned(), 2),
                ("B".to_owned(), 0), ("B".to_owned(), 1), ("B".to_owned(), 2),
            ]
        );
        assert_eq!(w.summaries.len(), 2);
    }

    #[test]
    fn empty_run_summary_has_no_average() {
        let mut obs = VoterOutputObserver::new(MemoryWriter::default());
        PrecinctSim::from_precinct(&precinct("Empty", 0)).unwrap().run_observed(1, &mut obs).unwrap();
        let w = obs.into_writer();
        assert_eq!(w.summaries, vec![("Empty".to_owned(), 0, None, None)]);
    }

    #[test]
    fn first_error_is_kept() {
        let mut obs = VoterOutputObserver::new(FailingWriter);
        PrecinctSim::from_precinct(&precinct("A", 5)).unwrap().run_observed(1, &mut obs).unwrap();
        match obs.take_error() {
            Some(OutputError::Io(e)) => assert_eq!(e.to_string(), "disk full"),
            other => panic!("expected the first I/O error, got {other:?}"),
        }
        assert!(obs.take_error().is_none());
    }

    #[test]
    fn csv_end_to_end() {
        let dir = tempfile::tempdir().unwrap();
        let mut obs = VoterOutputObserver::new(CsvWriter::new(dir.path()).unwrap());
        simulate_election_day_observed(&[precinct("A", 10)], 3, &mut obs).unwrap();
        obs.finish();
        assert!(obs.take_error().is_none());

        let mut rdr = csv::Reader::from_path(dir.path().join("voters.csv")).unwrap();
        assert_eq!(rdr.records().count(), 10);
    }
}
