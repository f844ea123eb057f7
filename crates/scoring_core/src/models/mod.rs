pub mod format;
pub mod score;

pub use format::{
    MatchConfig, RegularRules, SetFormat, TiebreakFormat, DEFAULT_SET_TO, DEFAULT_TIEBREAK_TO,
};
pub use score::{MatchOutcome, SetScore, Side, SideScores};
