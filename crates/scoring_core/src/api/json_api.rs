//! JSON entry points
//!
//! String in, string out, camelCase on the wire. Every request carries either
//! an explicit `config` or the name of a format `preset`.

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::config::EngineSettings;
use crate::data::presets::{preset_config, presets};
use crate::engine::{
    build_match_outcome, build_set_score, is_set_complete, max_allowed_score, resolve_format,
    set_winner, should_apply_smart_complement, ComplementDecision, EntryEvent, ScoreEntry,
    ScoreEntryState, UsedSetIndices,
};
use crate::error::{Result, ScoringError};
use crate::models::{MatchConfig, MatchOutcome, SetScore, Side, SideScores};

/// Score field as typed: accepts `"6"` or `6`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum RawField {
    Number(u64),
    Text(String),
}

impl RawField {
    fn as_text(&self) -> String {
        match self {
            RawField::Number(n) => n.to_string(),
            RawField::Text(s) => s.clone(),
        }
    }
}

impl Default for RawField {
    fn default() -> Self {
        RawField::Text(String::new())
    }
}

/// Match configuration source shared by all requests.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigSource {
    #[serde(default)]
    pub config: Option<MatchConfig>,
    #[serde(default)]
    pub preset: Option<String>,
}

impl ConfigSource {
    /// Explicit config wins over a preset name.
    pub fn resolve(&self) -> Result<MatchConfig> {
        let config = match (&self.config, &self.preset) {
            (Some(config), _) => config.clone(),
            (None, Some(name)) => preset_config(name)?,
            (None, None) => {
                return Err(ScoringError::InvalidConfig(
                    "request needs either `config` or `preset`".to_string(),
                ))
            }
        };
        config.check()?;
        Ok(config)
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EvaluateSetRequest {
    #[serde(flatten)]
    pub source: ConfigSource,
    pub set_index: usize,
    pub side1: u32,
    pub side2: u32,
    #[serde(default)]
    pub tiebreak: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EvaluateSetResponse {
    pub is_complete: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub winning_side: Option<Side>,
    pub is_tiebreak_only: bool,
    /// Entry ceilings; absent for tiebreak-only sets.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_side1: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_side2: Option<u32>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawSetEntry {
    #[serde(default)]
    pub side1: RawField,
    #[serde(default)]
    pub side2: RawField,
    #[serde(default)]
    pub tiebreak: RawField,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OutcomeRequest {
    #[serde(flatten)]
    pub source: ConfigSource,
    pub sets: Vec<RawSetEntry>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComplementRequest {
    #[serde(flatten)]
    pub source: ConfigSource,
    pub digit: u32,
    #[serde(default)]
    pub shift_pressed: bool,
    pub set_index: usize,
    #[serde(default)]
    pub sets: Vec<SetScore>,
    #[serde(default)]
    pub used_set_indices: UsedSetIndices,
    /// Overrides `EngineSettings::smart_complement` when present.
    #[serde(default)]
    pub enabled: Option<bool>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EntryRequest {
    #[serde(flatten)]
    pub source: ConfigSource,
    #[serde(default)]
    pub state: Option<ScoreEntryState>,
    pub events: Vec<EntryEvent>,
    #[serde(default)]
    pub enabled: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EntryResponse {
    pub state: ScoreEntryState,
    pub outcome: MatchOutcome,
    pub complements: Vec<ComplementDecision>,
}

fn settings_with_override(enabled: Option<bool>) -> EngineSettings {
    let mut settings = EngineSettings::from_env_or_default();
    if let Some(enabled) = enabled {
        settings.smart_complement = enabled;
    }
    settings
}

/// Evaluates one set: completion, winner and entry ceilings.
pub fn evaluate_set_json(request_json: &str) -> Result<String> {
    let request: EvaluateSetRequest = serde_json::from_str(request_json)?;
    let config = request.source.resolve()?;

    let scores = SideScores {
        side1: request.side1,
        side2: request.side2,
        tiebreak: request.tiebreak,
    };
    let set_index = request.set_index;
    let is_tiebreak_only = resolve_format(set_index, &config).is_tiebreak_only();
    let (max_side1, max_side2) = if is_tiebreak_only {
        (None, None)
    } else {
        (
            Some(max_allowed_score(set_index, Side::One, &scores, &config)),
            Some(max_allowed_score(set_index, Side::Two, &scores, &config)),
        )
    };

    let response = EvaluateSetResponse {
        is_complete: is_set_complete(set_index, &scores, &config),
        winning_side: set_winner(set_index, &scores, &config),
        is_tiebreak_only,
        max_side1,
        max_side2,
    };
    debug!(set_index, complete = response.is_complete, "evaluated set");
    Ok(serde_json::to_string(&response)?)
}

/// Builds set records and the match outcome from raw field text.
pub fn build_outcome_json(request_json: &str) -> Result<String> {
    let request: OutcomeRequest = serde_json::from_str(request_json)?;
    let config = request.source.resolve()?;

    if request.sets.len() > config.best_of as usize {
        warn!(
            sets = request.sets.len(),
            best_of = config.best_of,
            "outcome request has more sets than the format allows"
        );
        return Err(ScoringError::SetIndexOutOfRange {
            index: request.sets.len() - 1,
            best_of: config.best_of,
        });
    }

    let sets = request
        .sets
        .iter()
        .enumerate()
        .map(|(index, raw)| {
            build_set_score(
                index,
                &raw.side1.as_text(),
                &raw.side2.as_text(),
                &raw.tiebreak.as_text(),
                &config,
            )
        })
        .collect();

    let outcome = build_match_outcome(sets, &config);
    if outcome.is_complete {
        info!(score = %outcome.score_string, "built complete match outcome");
    }
    Ok(serde_json::to_string(&outcome)?)
}

/// Smart complement decision for one typed digit.
pub fn smart_complement_json(request_json: &str) -> Result<String> {
    let request: ComplementRequest = serde_json::from_str(request_json)?;
    let config = request.source.resolve()?;
    let settings = settings_with_override(request.enabled);

    let decision = should_apply_smart_complement(
        request.digit,
        request.shift_pressed,
        request.set_index,
        &request.sets,
        &config,
        &request.used_set_indices,
        settings.smart_complement,
    );
    Ok(serde_json::to_string(&decision)?)
}

/// Replays entry events on a (possibly resumed) session and returns its new state.
pub fn apply_entry_events_json(request_json: &str) -> Result<String> {
    let request: EntryRequest = serde_json::from_str(request_json)?;
    let config = request.source.resolve()?;
    let settings = settings_with_override(request.enabled);

    let mut entry = match request.state {
        Some(state) => ScoreEntry::from_state(config, settings, state),
        None => ScoreEntry::new(config, settings),
    };

    let mut complements = Vec::new();
    for event in request.events {
        let update = entry.apply(event)?;
        complements.extend(update.complement);
    }

    let response = EntryResponse {
        outcome: entry.outcome(),
        state: entry.state().clone(),
        complements,
    };
    Ok(serde_json::to_string(&response)?)
}

/// The `MatchConfig` of a named preset.
pub fn preset_config_json(name: &str) -> Result<String> {
    let config = preset_config(name)?;
    Ok(serde_json::to_string(&config)?)
}

/// All presets with their descriptions.
pub fn presets_json() -> Result<String> {
    Ok(serde_json::to_string(presets())?)
}
