//! Outcome Builder
//!
//! Turns raw field text into `SetScore` records and assembles the match
//! outcome handed to the persistence layer. Called on every keystroke, so
//! nothing here fails: unparseable input reads as `0` (games) or absent
//! (tiebreak).

use super::format_resolver::resolve_format;
use super::match_eval::match_winner;
use super::score_string::score_string;
use super::set_eval::set_winner;
use crate::models::{MatchConfig, MatchOutcome, SetScore, Side, SideScores, TiebreakFormat};

/// Parses one score field; `None` for empty or non-numeric text.
pub fn parse_score_input(raw: &str) -> Option<u32> {
    raw.trim().parse().ok()
}

/// Winner's tiebreak points implied by the loser's.
///
/// Below `tiebreak_to - 1` the winner simply reached the target; otherwise
/// the tiebreak went long and the winner finished one (no-ad) or two points
/// ahead.
pub fn winner_tiebreak_score(loser_score: u32, format: &TiebreakFormat) -> u32 {
    if loser_score < format.tiebreak_to.saturating_sub(1) {
        format.tiebreak_to
    } else {
        loser_score.saturating_add(format.margin())
    }
}

pub fn build_set_score(
    set_index: usize,
    side1_raw: &str,
    side2_raw: &str,
    tiebreak_raw: &str,
    config: &MatchConfig,
) -> SetScore {
    let side1 = parse_score_input(side1_raw).unwrap_or(0);
    let side2 = parse_score_input(side2_raw).unwrap_or(0);
    let tiebreak = parse_score_input(tiebreak_raw);

    build_set_score_from(
        set_index,
        &SideScores {
            side1,
            side2,
            tiebreak,
        },
        config,
    )
}

/// [`build_set_score`] for already-parsed values.
pub fn build_set_score_from(set_index: usize, scores: &SideScores, config: &MatchConfig) -> SetScore {
    let format = resolve_format(set_index, config);

    if format.is_tiebreak_only() {
        // The two fields carry tiebreak points, games stay at zero.
        return SetScore {
            side1_tiebreak_score: Some(scores.side1),
            side2_tiebreak_score: Some(scores.side2),
            winning_side: set_winner(set_index, scores, config),
            ..SetScore::empty(set_index)
        };
    }

    let winning_side = set_winner(set_index, scores, config);
    let (side1_tiebreak_score, side2_tiebreak_score) = match (winning_side, scores.tiebreak) {
        (Some(winner), Some(loser_points)) => {
            let tiebreak_format = format.tiebreak_game().unwrap_or_default();
            let winner_points = winner_tiebreak_score(loser_points, &tiebreak_format);
            match winner {
                Side::One => (Some(winner_points), Some(loser_points)),
                Side::Two => (Some(loser_points), Some(winner_points)),
            }
        }
        _ => (None, None),
    };

    SetScore {
        side1_score: scores.side1,
        side2_score: scores.side2,
        side1_tiebreak_score,
        side2_tiebreak_score,
        winning_side,
        ..SetScore::empty(set_index)
    }
}

/// Assembles the outcome for `sets`, renumbering them by position.
pub fn build_match_outcome(sets: Vec<SetScore>, config: &MatchConfig) -> MatchOutcome {
    let sets: Vec<SetScore> = sets
        .into_iter()
        .enumerate()
        .map(|(index, set)| SetScore {
            set_number: index as u32 + 1,
            ..set
        })
        .collect();

    let winning_side = match_winner(&sets, config.best_of);
    let score = score_string(&sets, Side::One, config);
    let winner_score_string = winning_side.map(|winner| score_string(&sets, winner, config));

    MatchOutcome {
        is_complete: winning_side.is_some(),
        winning_side,
        score_string: score,
        winner_score_string,
        sets,
    }
}
