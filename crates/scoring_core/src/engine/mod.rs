//! Tennis scoring rules engine
//!
//! ## Data flow
//! ```text
//! MatchConfig + raw input
//!        │
//!  format_resolver ──► set_eval / complement
//!                            │
//!                         outcome ──► match_eval ──► MatchOutcome
//! ```
//!
//! Everything except [`entry::ScoreEntry`] is a pure function of its
//! arguments. The entry session owns the caller-side state (sets entered so
//! far, set indices that used their smart complement).

pub mod complement;
pub mod entry;
pub mod format_resolver;
pub mod match_eval;
pub mod outcome;
pub mod score_string;
pub mod set_eval;

#[cfg(test)]
mod proptests;
#[cfg(test)]
mod snapshot_tests;

pub use complement::{
    calculate_complement, record_complement_use, should_apply_smart_complement,
    ComplementDecision, DeclineReason, UsedSetIndices,
};
pub use entry::{EntryEvent, EntryUpdate, ScoreEntry, ScoreEntryState};
pub use format_resolver::{is_deciding_set, resolve_format};
pub use match_eval::{
    is_match_complete, match_winner, sets_needed, sets_won, should_create_next_set,
};
pub use outcome::{
    build_match_outcome, build_set_score, build_set_score_from, parse_score_input,
    winner_tiebreak_score,
};
pub use score_string::{score_string, set_score_string};
pub use set_eval::{
    clamp_entry, is_set_complete, is_tiebreak_only_set, max_allowed_score, set_winner,
};
