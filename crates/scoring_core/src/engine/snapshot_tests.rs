//! Snapshot tests for outcome JSON using insta
//!
//! These pin the wire shape handed to the persistence layer so that
//! serialization changes show up in review.

use insta::assert_json_snapshot;

use super::*;
use crate::config::EngineSettings;
use crate::models::{MatchConfig, SetFormat};

fn match_tiebreak_config() -> MatchConfig {
    MatchConfig::standard().with_final_set(SetFormat::tiebreak_only(10, false))
}

#[test]
fn snapshot_outcome_with_match_tiebreak() {
    let config = match_tiebreak_config();
    let sets = vec![
        build_set_score(0, "6", "4", "", &config),
        build_set_score(1, "6", "7", "3", &config),
        build_set_score(2, "10", "7", "", &config),
    ];

    assert_json_snapshot!(build_match_outcome(sets, &config), @r###"
    {
      "sets": [
        {
          "setNumber": 1,
          "side1Score": 6,
          "side2Score": 4,
          "winningSide": 1
        },
        {
          "setNumber": 2,
          "side1Score": 6,
          "side2Score": 7,
          "side1TiebreakScore": 3,
          "side2TiebreakScore": 7,
          "winningSide": 2
        },
        {
          "setNumber": 3,
          "side1Score": 0,
          "side2Score": 0,
          "side1TiebreakScore": 10,
          "side2TiebreakScore": 7,
          "winningSide": 1
        }
      ],
      "winningSide": 1,
      "isComplete": true,
      "scoreString": "6-4 6-7(3) [10-7]",
      "winnerScoreString": "6-4 6-7(3) [10-7]"
    }
    "###);
}

#[test]
fn snapshot_declined_complement() {
    let config = match_tiebreak_config();
    let decision =
        should_apply_smart_complement(7, false, 2, &[], &config, &UsedSetIndices::new(), true);

    assert_json_snapshot!(decision, @r###"
    {
      "field1Value": 7,
      "field2Value": null,
      "shouldApply": false,
      "reason": "Tiebreak-only set"
    }
    "###);
}

#[test]
fn snapshot_entry_update() {
    let mut entry = ScoreEntry::new(MatchConfig::standard(), EngineSettings::default());
    let update = entry
        .apply(EntryEvent::Digit {
            set_index: 0,
            digit: 5,
            shift_pressed: true,
        })
        .unwrap();

    assert_json_snapshot!(update, @r###"
    {
      "outcome": {
        "sets": [
          {
            "setNumber": 1,
            "side1Score": 7,
            "side2Score": 5,
            "winningSide": 1
          },
          {
            "setNumber": 2,
            "side1Score": 0,
            "side2Score": 0
          }
        ],
        "isComplete": false,
        "scoreString": "7-5"
      },
      "complement": {
        "field1Value": 7,
        "field2Value": 5,
        "shouldApply": true
      },
      "nextSetOpened": true
    }
    "###);
}
