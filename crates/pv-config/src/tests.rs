//! Unit tests for pv-config.

use std::io::Cursor;

use pv_core::{BallotMix, PrecinctConfig};

use crate::{ConfigError, load_precincts_json, load_precincts_reader};

// ── Helpers ───────────────────────────────────────────────────────────────────

const TWO_PRECINCTS: &str = r#"{
  "seed": 1468604453,
  "precincts": [
    {
      "name": "Downtown",
      "hours_open": 13,
      "num_voters": 500,
      "num_booths": 3,
      "arrival_rate": 0.55,
      "voting_duration_rate": 0.1,
      "percent_straight_ticket": 0.2,
      "straight_ticket_duration": 2.0
    },
    {
      "name": "Hyde Park",
      "hours_open": 1,
      "num_voters": 20,
      "num_booths": 1,
      "arrival_rate": 0.5,
      "voting_duration_rate": 0.2,
      "percent_straight_ticket": 0.0,
      "straight_ticket_duration": 1.5,
      "comment": "unknown keys are ignored"
    }
  ]
}"#;

fn precinct_json(name: &str, num_booths: usize, percent: f64) -> String {
    format!(
        r#"{{"name": "{name}", "hours_open": 1, "num_voters": 10, "num_booths": {num_booths},
            "arrival_rate": 1.0, "voting_duration_rate": 0.5,
            "percent_straight_ticket": {percent}, "straight_ticket_duration": 1.0}}"#
    )
}

fn file_json(precincts: &[String]) -> String {
    format!(r#"{{"seed": 7, "precincts": [{}]}}"#, precincts.join(","))
}

// ── Loading ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod loader {
    use super::*;

    #[test]
    fn loads_seed_and_precincts_in_order() {
        let file = load_precincts_reader(Cursor::new(TWO_PRECINCTS)).unwrap();
        assert_eq!(file.seed, 1_468_604_453);
        assert_eq!(file.precincts.len(), 2);

        let downtown = &file.precincts[0];
        assert_eq!(
            downtown.config,
            PrecinctConfig {
                name:                 "Downtown".into(),
                hours_open:           13,
                max_num_voters:       500,
                num_booths:           3,
                arrival_rate:         0.55,
                voting_duration_rate: 0.1,
            }
        );
        assert_eq!(downtown.ballots, BallotMix::new(0.2, 2.0));
        assert_eq!(file.precincts[1].name(), "Hyde Park");
    }

    #[test]
    fn lookup_by_name() {
        let file = load_precincts_reader(Cursor::new(TWO_PRECINCTS)).unwrap();
        assert_eq!(file.precinct("Hyde Park").unwrap().config.num_booths, 1);
        assert!(matches!(file.precinct("Nowhere"), Err(ConfigError::UnknownPrecinct(_))));
    }

    #[test]
    fn empty_precinct_list_is_allowed() {
        let file = load_precincts_reader(Cursor::new(file_json(&[]))).unwrap();
        assert_eq!(file.seed, 7);
        assert!(file.precincts.is_empty());
    }

    #[test]
    fn missing_field_is_a_parse_error() {
        let json = r#"{"seed": 1, "precincts": [{"name": "A", "hours_open": 1}]}"#;
        assert!(matches!(load_precincts_reader(Cursor::new(json)), Err(ConfigError::Parse(_))));
    }

    #[test]
    fn missing_seed_is_a_parse_error() {
        let json = r#"{"precincts": []}"#;
        assert!(matches!(load_precincts_reader(Cursor::new(json)), Err(ConfigError::Parse(_))));
    }

    #[test]
    fn invalid_values_rejected() {
        let json = file_json(&[precinct_json("A", 0, 0.5)]);
        assert!(matches!(load_precincts_reader(Cursor::new(json)), Err(ConfigError::Invalid(_))));

        let json = file_json(&[precinct_json("A", 2, 1.5)]);
        assert!(matches!(load_precincts_reader(Cursor::new(json)), Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn duplicate_names_rejected() {
        let json = file_json(&[precinct_json("A", 1, 0.5), precinct_json("A", 2, 0.5)]);
        match load_precincts_reader(Cursor::new(json)) {
            Err(ConfigError::DuplicatePrecinct(name)) => assert_eq!(name, "A"),
            other => panic!("expected DuplicatePrecinct, got {other:?}"),
        }
    }

    #[test]
    fn missing_file_is_io_error() {
        let result = load_precincts_json(std::path::Path::new("/definitely/not/here.json"));
        assert!(matches!(result, Err(ConfigError::Io(_))));
    }
}
