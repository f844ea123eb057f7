//! Score entry session
//!
//! Holds the caller-side state the pure engine functions need between
//! keystrokes (the growing list of sets and the set indices that already used
//! their smart complement) and drives it with [`EntryEvent`]s.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::complement::{should_apply_smart_complement, ComplementDecision, UsedSetIndices};
use super::format_resolver::resolve_format;
use super::match_eval::{is_match_complete, should_create_next_set};
use super::outcome::{
    build_match_outcome, build_set_score, build_set_score_from, parse_score_input,
};
use super::set_eval::clamp_entry;
use crate::config::EngineSettings;
use crate::error::{Result, ScoringError};
use crate::models::{MatchConfig, MatchOutcome, SetScore, Side, SideScores};

/// One user action on the score entry form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum EntryEvent {
    /// A digit typed for a set. Unshifted digits are side 1's, shifted side 2's.
    #[serde(rename_all = "camelCase")]
    Digit {
        set_index: usize,
        digit: u32,
        #[serde(default)]
        shift_pressed: bool,
    },
    /// Losing side's tiebreak points for a regular set.
    #[serde(rename_all = "camelCase")]
    Tiebreak { set_index: usize, points: u32 },
    /// Raw field text for a whole set.
    #[serde(rename_all = "camelCase")]
    SetScores {
        set_index: usize,
        side1: String,
        side2: String,
        #[serde(default)]
        tiebreak: String,
    },
    /// Drops the set at `set_index` and every set after it.
    #[serde(rename_all = "camelCase")]
    Clear { set_index: usize },
}

impl EntryEvent {
    pub fn set_index(&self) -> usize {
        match self {
            EntryEvent::Digit { set_index, .. }
            | EntryEvent::Tiebreak { set_index, .. }
            | EntryEvent::SetScores { set_index, .. }
            | EntryEvent::Clear { set_index } => *set_index,
        }
    }
}

/// Result of applying one event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EntryUpdate {
    pub outcome: MatchOutcome,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub complement: Option<ComplementDecision>,
    pub next_set_opened: bool,
}

/// Serializable session state for handing back to the caller.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreEntryState {
    pub sets: Vec<SetScore>,
    pub used_set_indices: UsedSetIndices,
    /// Tiebreak points typed per set index. A set record only carries its
    /// tiebreak once decided, so the typed value is kept here until then.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub tiebreaks: BTreeMap<usize, u32>,
}

pub struct ScoreEntry {
    config: MatchConfig,
    settings: EngineSettings,
    state: ScoreEntryState,
}

impl ScoreEntry {
    /// New session with the first set already open.
    pub fn new(config: MatchConfig, settings: EngineSettings) -> Self {
        Self {
            config,
            settings,
            state: ScoreEntryState {
                sets: vec![SetScore::empty(0)],
                used_set_indices: UsedSetIndices::new(),
                tiebreaks: BTreeMap::new(),
            },
        }
    }

    /// Resume from saved state.
    pub fn from_state(config: MatchConfig, settings: EngineSettings, state: ScoreEntryState) -> Self {
        Self {
            config,
            settings,
            state,
        }
    }

    pub fn config(&self) -> &MatchConfig {
        &self.config
    }

    pub fn state(&self) -> &ScoreEntryState {
        &self.state
    }

    pub fn sets(&self) -> &[SetScore] {
        &self.state.sets
    }

    pub fn outcome(&self) -> MatchOutcome {
        build_match_outcome(self.state.sets.clone(), &self.config)
    }

    pub fn apply(&mut self, event: EntryEvent) -> Result<EntryUpdate> {
        let set_index = event.set_index();
        if set_index >= self.config.best_of as usize {
            return Err(ScoringError::SetIndexOutOfRange {
                index: set_index,
                best_of: self.config.best_of,
            });
        }

        let was_complete = is_match_complete(&self.state.sets, self.config.best_of);
        // Set whose closing may open the next one.
        let anchor = match event {
            EntryEvent::Clear { .. } => set_index.checked_sub(1),
            _ => Some(set_index),
        };
        let mut complement = None;

        match event {
            EntryEvent::Digit {
                digit,
                shift_pressed,
                ..
            } => {
                complement = Some(self.apply_digit(set_index, digit, shift_pressed));
            }
            EntryEvent::Tiebreak { points, .. } => {
                self.state.tiebreaks.insert(set_index, points);
                let mut scores = self.entered_scores(set_index);
                scores.tiebreak = Some(points);
                self.store(set_index, build_set_score_from(set_index, &scores, &self.config));
            }
            EntryEvent::SetScores {
                side1,
                side2,
                tiebreak,
                ..
            } => {
                if let Some(points) = parse_score_input(&tiebreak) {
                    self.state.tiebreaks.insert(set_index, points);
                } else {
                    self.state.tiebreaks.remove(&set_index);
                }
                let set = build_set_score(set_index, &side1, &side2, &tiebreak, &self.config);
                self.store(set_index, set);
            }
            EntryEvent::Clear { .. } => {
                self.state.sets.truncate(set_index);
                self.state.used_set_indices = self.state.used_set_indices.before(set_index);
                self.state.tiebreaks.split_off(&set_index);
                if self.state.sets.is_empty() {
                    self.state.sets.push(SetScore::empty(0));
                }
            }
        }

        let next_set_opened = anchor.is_some_and(|index| self.open_next_set(index));
        let now_complete = is_match_complete(&self.state.sets, self.config.best_of);
        if now_complete && !was_complete {
            self.drop_trailing_empty_sets();
        }

        let outcome = self.outcome();
        if now_complete && !was_complete {
            log::info!(
                "match decided for {}: {}",
                outcome.winning_side.map(|s| s.to_string()).unwrap_or_default(),
                outcome.score_string
            );
        }

        Ok(EntryUpdate {
            outcome,
            complement,
            next_set_opened,
        })
    }

    fn apply_digit(&mut self, set_index: usize, digit: u32, shift_pressed: bool) -> ComplementDecision {
        let decision = should_apply_smart_complement(
            digit,
            shift_pressed,
            set_index,
            &self.state.sets,
            &self.config,
            &self.state.used_set_indices,
            self.settings.smart_complement,
        );

        let mut scores = self.entered_scores(set_index);
        match (decision.should_apply, decision.field1_value, decision.field2_value) {
            (true, Some(field1), Some(field2)) => {
                scores.side1 = field1;
                scores.side2 = field2;
                self.state.used_set_indices = self.state.used_set_indices.with(set_index);
            }
            _ => {
                let side = if shift_pressed { Side::Two } else { Side::One };
                let value = clamp_entry(set_index, side, digit, &scores, &self.config);
                scores.set(side, value);
            }
        }

        log::trace!(
            "set {} entry now {}-{}",
            set_index + 1,
            scores.side1,
            scores.side2
        );
        self.store(set_index, build_set_score_from(set_index, &scores, &self.config));
        decision
    }

    /// Values the user has entered for a set, read back from its record.
    fn entered_scores(&self, set_index: usize) -> SideScores {
        let Some(set) = self.state.sets.get(set_index) else {
            return SideScores::default();
        };

        if resolve_format(set_index, &self.config).is_tiebreak_only() {
            return SideScores::new(
                set.side1_tiebreak_score.unwrap_or(0),
                set.side2_tiebreak_score.unwrap_or(0),
            );
        }

        let tiebreak = match (set.side1_tiebreak_score, set.side2_tiebreak_score) {
            (Some(t1), Some(t2)) => Some(t1.min(t2)),
            _ => self.state.tiebreaks.get(&set_index).copied(),
        };
        SideScores {
            side1: set.side1_score,
            side2: set.side2_score,
            tiebreak,
        }
    }

    fn store(&mut self, set_index: usize, set: SetScore) {
        while self.state.sets.len() <= set_index {
            let index = self.state.sets.len();
            self.state.sets.push(SetScore::empty(index));
        }
        self.state.sets[set_index] = set;
    }

    fn open_next_set(&mut self, set_index: usize) -> bool {
        if self.state.sets.len() != set_index + 1 {
            return false;
        }
        if !should_create_next_set(set_index, &self.state.sets, &self.config) {
            return false;
        }
        self.state.sets.push(SetScore::empty(set_index + 1));
        true
    }

    fn drop_trailing_empty_sets(&mut self) {
        while self.state.sets.len() > 1
            && self.state.sets.last().is_some_and(|set| !set.has_entries())
        {
            self.state.sets.pop();
        }
    }
}
