//! Complement Predictor
//!
//! Typing a losing side's games usually pins down the winner's games: in a
//! six-game set, `2` can only be paired with `6`, and `5` only with `7`. The
//! predictor returns that implied value and decides whether the entry UI
//! should pre-fill it.

use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize, Serializer};

use super::format_resolver::resolve_format;
use super::match_eval::is_match_complete;
use crate::models::{MatchConfig, SetFormat, SetScore};

/// Set indices that have already consumed their one automatic complement.
///
/// Held by the caller between keystrokes; engine functions take it by
/// reference and hand back a new value instead of mutating it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UsedSetIndices(BTreeSet<usize>);

impl UsedSetIndices {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, set_index: usize) -> bool {
        self.0.contains(&set_index)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.0.iter().copied()
    }

    /// Copy with `set_index` marked as used.
    pub fn with(&self, set_index: usize) -> Self {
        let mut next = self.0.clone();
        next.insert(set_index);
        Self(next)
    }

    /// Copy keeping only indices below `set_index`.
    pub fn before(&self, set_index: usize) -> Self {
        Self(self.0.range(..set_index).copied().collect())
    }
}

impl FromIterator<usize> for UsedSetIndices {
    fn from_iter<I: IntoIterator<Item = usize>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Records that the complement for `set_index` has been applied.
pub fn record_complement_use(used: &UsedSetIndices, set_index: usize) -> UsedSetIndices {
    used.with(set_index)
}

/// Why a complement was not applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeclineReason {
    FeatureDisabled,
    AlreadyApplied,
    MatchComplete,
    TiebreakOnlySet,
    NoComplement,
}

impl DeclineReason {
    pub fn message(&self) -> &'static str {
        match self {
            DeclineReason::FeatureDisabled => "Feature disabled",
            DeclineReason::AlreadyApplied => "Complement already applied for this set",
            DeclineReason::MatchComplete => "Match already complete",
            DeclineReason::TiebreakOnlySet => "Tiebreak-only set",
            DeclineReason::NoComplement => "No predictable complement",
        }
    }
}

impl fmt::Display for DeclineReason {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.message())
    }
}

impl Serialize for DeclineReason {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.message())
    }
}

/// Field values the entry UI should show after a digit was typed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ComplementDecision {
    pub field1_value: Option<u32>,
    pub field2_value: Option<u32>,
    pub should_apply: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<DeclineReason>,
}

impl ComplementDecision {
    fn declined(digit: u32, reason: DeclineReason) -> Self {
        Self {
            field1_value: Some(digit),
            field2_value: None,
            should_apply: false,
            reason: Some(reason),
        }
    }

    fn applied(field1: u32, field2: u32) -> Self {
        Self {
            field1_value: Some(field1),
            field2_value: Some(field2),
            should_apply: true,
            reason: None,
        }
    }
}

/// Opponent score implied by `digit`, when the rules leave only one option.
pub fn calculate_complement(digit: u32, format: &SetFormat) -> Option<u32> {
    let rules = format.regular_rules()?;
    let set_to = rules.set_to;
    let tiebreak_at = rules.tiebreak_at;

    if digit >= set_to {
        return None;
    }
    // Early tiebreak formats (e.g. sets to 4 with a tiebreak at 3-3).
    if tiebreak_at < set_to && tiebreak_at.checked_sub(1) == Some(digit) {
        return Some(tiebreak_at + 1);
    }
    if digit < set_to - 1 {
        Some(set_to)
    } else {
        Some(set_to + 1)
    }
}

/// Decides whether to pre-fill the paired field after `digit` was typed.
///
/// With `shift_pressed` the entry is reversed: the complement lands in the
/// side 1 field and the typed digit in side 2.
pub fn should_apply_smart_complement(
    digit: u32,
    shift_pressed: bool,
    set_index: usize,
    sets: &[SetScore],
    config: &MatchConfig,
    used_set_indices: &UsedSetIndices,
    enabled: bool,
) -> ComplementDecision {
    let decision = decide(
        digit,
        shift_pressed,
        set_index,
        sets,
        config,
        used_set_indices,
        enabled,
    );
    if let Some(reason) = decision.reason {
        log::debug!(
            "smart complement declined for set {} digit {}: {}",
            set_index + 1,
            digit,
            reason
        );
    }
    decision
}

fn decide(
    digit: u32,
    shift_pressed: bool,
    set_index: usize,
    sets: &[SetScore],
    config: &MatchConfig,
    used_set_indices: &UsedSetIndices,
    enabled: bool,
) -> ComplementDecision {
    if !enabled {
        return ComplementDecision::declined(digit, DeclineReason::FeatureDisabled);
    }
    if used_set_indices.contains(set_index) {
        return ComplementDecision::declined(digit, DeclineReason::AlreadyApplied);
    }
    if is_match_complete(sets, config.best_of) {
        return ComplementDecision::declined(digit, DeclineReason::MatchComplete);
    }

    let format = resolve_format(set_index, config);
    if format.is_tiebreak_only() {
        return ComplementDecision::declined(digit, DeclineReason::TiebreakOnlySet);
    }
    let Some(complement) = calculate_complement(digit, format) else {
        return ComplementDecision::declined(digit, DeclineReason::NoComplement);
    };

    if shift_pressed {
        ComplementDecision::applied(complement, digit)
    } else {
        ComplementDecision::applied(digit, complement)
    }
}
