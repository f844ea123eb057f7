//! Set Evaluator
//!
//! Per-set rules: the highest score a side may legally enter, whether a set is
//! over, and who won it.
//!
//! ## Entry ceiling (regular sets)
//! ```text
//! opponent score            max for this side
//! ─────────────────────────────────────────────
//! 0                         set_to + 2
//! < set_to - 1              set_to
//! = set_to - 1              set_to + 1
//! = set_to                  set_to + 2
//! >= tiebreak_at            opponent + 2
//! otherwise                 set_to + 2
//! ```

use super::format_resolver::resolve_format;
use crate::models::{MatchConfig, SetFormat, Side, SideScores};

pub fn is_tiebreak_only_set(format: &SetFormat) -> bool {
    format.is_tiebreak_only()
}

/// Highest score `side` may enter given the opponent's current score.
///
/// Only meaningful for regular sets; a tiebreak-only set has no ceiling and
/// yields `u32::MAX`.
pub fn max_allowed_score(
    set_index: usize,
    side: Side,
    current: &SideScores,
    config: &MatchConfig,
) -> u32 {
    let Some(rules) = resolve_format(set_index, config).regular_rules() else {
        log::debug!(
            "max_allowed_score called for tiebreak-only set {}; no ceiling applied",
            set_index + 1
        );
        return u32::MAX;
    };

    let set_to = rules.set_to;
    let opp = current.get(side.opponent());

    if opp == 0 {
        set_to.saturating_add(2)
    } else if opp < set_to.saturating_sub(1) {
        set_to
    } else if opp == set_to.saturating_sub(1) {
        set_to.saturating_add(1)
    } else if opp == set_to {
        set_to.saturating_add(2)
    } else if opp >= rules.tiebreak_at {
        opp.saturating_add(2)
    } else {
        set_to.saturating_add(2)
    }
}

/// Caps an entered value at [`max_allowed_score`]; tiebreak-only sets pass through.
pub fn clamp_entry(
    set_index: usize,
    side: Side,
    value: u32,
    current: &SideScores,
    config: &MatchConfig,
) -> u32 {
    let max = max_allowed_score(set_index, side, current, config);
    if value > max {
        log::trace!(
            "clamped {} entry {} to {} in set {}",
            side,
            value,
            max,
            set_index + 1
        );
    }
    value.min(max)
}

pub fn is_set_complete(set_index: usize, scores: &SideScores, config: &MatchConfig) -> bool {
    let format = resolve_format(set_index, config);
    let Some(rules) = format.regular_rules() else {
        // Margin of the tiebreak game itself is not enforced here.
        return scores.side1 > 0 && scores.side2 > 0 && scores.side1 != scores.side2;
    };

    let high = scores.side1.max(scores.side2);
    let low = scores.side1.min(scores.side2);

    let won_by_margin = high >= rules.set_to && high - low >= 2;
    let won_by_tiebreak =
        high == rules.tiebreak_at.saturating_add(1)
            && low == rules.tiebreak_at
            && scores.tiebreak.is_some();

    won_by_margin || won_by_tiebreak
}

pub fn set_winner(set_index: usize, scores: &SideScores, config: &MatchConfig) -> Option<Side> {
    if !is_set_complete(set_index, scores, config) {
        return None;
    }
    scores.leader()
}
