//! # scoring_core - Tennis Match-Scoring Rules Engine
//!
//! Turns raw per-set game and tiebreak entries into validated set records, a
//! match winner and a canonical score string, and predicts the opponent's
//! score to speed up numeric entry.
//!
//! ## Features
//! - Regular sets with configurable target, tiebreak trigger and tiebreak game
//! - Tiebreak-only sets (match tiebreaks) and separate deciding-set formats
//! - Best-of-N match completion
//! - Smart complement prediction for score entry
//! - JSON API and named format presets

// Engine entry points mirror the entry form's inputs one-to-one.
#![allow(clippy::too_many_arguments)]

pub mod api;
pub mod config;
pub mod data;
pub mod engine;
pub mod error;
pub mod models;

pub use api::{
    apply_entry_events_json, build_outcome_json, evaluate_set_json, preset_config_json,
    presets_json, smart_complement_json,
};
pub use config::EngineSettings;
pub use engine::{
    build_match_outcome, build_set_score, calculate_complement, is_match_complete,
    is_set_complete, is_tiebreak_only_set, match_winner, max_allowed_score, resolve_format,
    score_string, set_winner, sets_needed, should_apply_smart_complement, should_create_next_set,
    ComplementDecision, DeclineReason, EntryEvent, EntryUpdate, ScoreEntry, UsedSetIndices,
};
pub use error::{Result, ScoringError};
pub use models::{MatchConfig, MatchOutcome, SetFormat, SetScore, Side, SideScores, TiebreakFormat};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
