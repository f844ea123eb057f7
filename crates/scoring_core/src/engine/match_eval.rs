//! Match Evaluator: best-of-N completion and next-set decisions.

use crate::models::{MatchConfig, SetScore, Side};

/// Sets a side must win to take a best-of-`best_of` match.
pub fn sets_needed(best_of: u32) -> u32 {
    best_of.div_ceil(2)
}

/// Sets won by (side 1, side 2).
pub fn sets_won(sets: &[SetScore]) -> (u32, u32) {
    sets.iter()
        .fold((0, 0), |(one, two), set| match set.winning_side {
            Some(Side::One) => (one + 1, two),
            Some(Side::Two) => (one, two + 1),
            None => (one, two),
        })
}

pub fn is_match_complete(sets: &[SetScore], best_of: u32) -> bool {
    match_winner(sets, best_of).is_some()
}

pub fn match_winner(sets: &[SetScore], best_of: u32) -> Option<Side> {
    let needed = sets_needed(best_of);
    let (one, two) = sets_won(sets);
    if one >= needed {
        Some(Side::One)
    } else if two >= needed {
        Some(Side::Two)
    } else {
        None
    }
}

/// Whether a new set should be opened after the set at `current_set_index`.
pub fn should_create_next_set(
    current_set_index: usize,
    sets: &[SetScore],
    config: &MatchConfig,
) -> bool {
    if current_set_index + 1 >= config.best_of as usize {
        return false;
    }
    if is_match_complete(sets, config.best_of) {
        return false;
    }
    sets.get(current_set_index)
        .is_some_and(|set| set.winning_side.is_some())
}
