//! Property tests for the rules engine.

use proptest::prelude::*;

use super::*;
use crate::models::{MatchConfig, SetFormat, SetScore, Side, SideScores, TiebreakFormat};

fn side_strategy() -> impl Strategy<Value = Option<Side>> {
    prop_oneof![Just(None), Just(Some(Side::One)), Just(Some(Side::Two))]
}

fn regular_format_strategy() -> impl Strategy<Value = SetFormat> {
    (1u32..=8, prop::option::of(1u32..=10), any::<bool>()).prop_map(|(set_to, at, no_ad)| {
        let format = SetFormat::regular(set_to).with_tiebreak(TiebreakFormat::new(7, no_ad));
        match at {
            Some(at) => format.with_tiebreak_at(at),
            None => format,
        }
    })
}

fn best_of_strategy() -> impl Strategy<Value = u32> {
    prop_oneof![Just(1u32), Just(3u32), Just(5u32)]
}

proptest! {
    /// Property: set completion is a pure function of its inputs
    #[test]
    fn prop_completion_is_stable(
        format in regular_format_strategy(),
        side1 in 0u32..=15,
        side2 in 0u32..=15,
        tiebreak in prop::option::of(0u32..=15),
    ) {
        let config = MatchConfig::new(3, format);
        let scores = SideScores { side1, side2, tiebreak };
        let first = is_set_complete(0, &scores, &config);
        prop_assert_eq!(first, is_set_complete(0, &scores, &config));
        prop_assert_eq!(first, set_winner(0, &scores, &config).is_some());
    }

    /// Property: without a tiebreak entry a regular set is only won by two
    #[test]
    fn prop_win_by_two_without_tiebreak(
        format in regular_format_strategy(),
        side1 in 0u32..=15,
        side2 in 0u32..=15,
    ) {
        let set_to = format.regular_rules().unwrap().set_to;
        let config = MatchConfig::new(3, format);
        if is_set_complete(0, &SideScores::new(side1, side2), &config) {
            prop_assert!(side1.abs_diff(side2) >= 2);
            prop_assert!(side1.max(side2) >= set_to);
        }
    }

    /// Property: match completion agrees with the won-set count
    #[test]
    fn prop_best_of_consistency(
        best_of in best_of_strategy(),
        winners in prop::collection::vec(side_strategy(), 0..6),
    ) {
        let sets: Vec<SetScore> = winners
            .iter()
            .enumerate()
            .map(|(index, winner)| SetScore { winning_side: *winner, ..SetScore::empty(index) })
            .collect();
        let needed = sets_needed(best_of);
        let (one, two) = sets_won(&sets);

        prop_assert_eq!(is_match_complete(&sets, best_of), one >= needed || two >= needed);
        match match_winner(&sets, best_of) {
            Some(Side::One) => {
                prop_assert!(one >= needed);
            }
            Some(Side::Two) => {
                prop_assert!(two >= needed);
            }
            None => {
                prop_assert!(one < needed && two < needed);
            }
        }
    }

    /// Property: tiebreak-only sets never take a smart complement
    #[test]
    fn prop_tiebreak_only_never_complemented(
        digit in 0u32..=20,
        shift in any::<bool>(),
        enabled in any::<bool>(),
        tiebreak_to in 1u32..=15,
    ) {
        let config = MatchConfig::new(1, SetFormat::tiebreak_only(tiebreak_to, false));
        let decision = should_apply_smart_complement(
            digit, shift, 0, &[], &config, &UsedSetIndices::new(), enabled,
        );
        prop_assert!(!decision.should_apply);
    }

    /// Property: an applied complement always closes the set for the other side
    #[test]
    fn prop_complement_closes_set(digit in 0u32..6, shift in any::<bool>()) {
        let config = MatchConfig::standard();
        let decision = should_apply_smart_complement(
            digit, shift, 0, &[], &config, &UsedSetIndices::new(), true,
        );
        prop_assert!(decision.should_apply);

        let scores = SideScores::new(decision.field1_value.unwrap(), decision.field2_value.unwrap());
        let expected = if shift { Side::One } else { Side::Two };
        prop_assert_eq!(set_winner(0, &scores, &config), Some(expected));
    }

    /// Property: clamped entries never exceed the legal ceiling
    #[test]
    fn prop_clamp_respects_ceiling(
        format in regular_format_strategy(),
        value in 0u32..=30,
        opp in 0u32..=15,
    ) {
        let config = MatchConfig::new(3, format);
        let current = SideScores::new(0, opp);
        let clamped = clamp_entry(0, Side::One, value, &current, &config);
        prop_assert!(clamped <= max_allowed_score(0, Side::One, &current, &config));
        prop_assert!(clamped <= value);
    }

    /// Property: built set records carry a winner iff the set is complete
    #[test]
    fn prop_built_set_matches_evaluator(
        side1 in 0u32..=9,
        side2 in 0u32..=9,
        tiebreak in prop::option::of(0u32..=12),
    ) {
        let config = MatchConfig::standard();
        let scores = SideScores { side1, side2, tiebreak };
        let set = build_set_score_from(0, &scores, &config);
        prop_assert_eq!(set.winning_side, set_winner(0, &scores, &config));
        prop_assert_eq!(
            set.side1_tiebreak_score.is_some(),
            set.winning_side.is_some() && tiebreak.is_some()
        );
    }
}
