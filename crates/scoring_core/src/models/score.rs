use std::fmt;

use serde::{Deserialize, Serialize};

/// One of the two sides of a match. Serialised as `1` / `2`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum Side {
    One,
    Two,
}

impl Side {
    pub fn opponent(&self) -> Self {
        match self {
            Side::One => Side::Two,
            Side::Two => Side::One,
        }
    }

    pub fn number(&self) -> u8 {
        match self {
            Side::One => 1,
            Side::Two => 2,
        }
    }
}

impl TryFrom<u8> for Side {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Side::One),
            2 => Ok(Side::Two),
            other => Err(format!("side must be 1 or 2, got {other}")),
        }
    }
}

impl From<Side> for u8 {
    fn from(side: Side) -> Self {
        side.number()
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "side {}", self.number())
    }
}

/// Two side scores for one set, plus the tiebreak entry if one was made.
///
/// For regular sets `side1`/`side2` are games and `tiebreak` is the losing
/// side's tiebreak points. For tiebreak-only sets `side1`/`side2` are the
/// tiebreak points themselves.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SideScores {
    pub side1: u32,
    pub side2: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tiebreak: Option<u32>,
}

impl SideScores {
    pub fn new(side1: u32, side2: u32) -> Self {
        Self {
            side1,
            side2,
            tiebreak: None,
        }
    }

    pub fn with_tiebreak(mut self, tiebreak: u32) -> Self {
        self.tiebreak = Some(tiebreak);
        self
    }

    pub fn get(&self, side: Side) -> u32 {
        match side {
            Side::One => self.side1,
            Side::Two => self.side2,
        }
    }

    pub fn set(&mut self, side: Side, value: u32) {
        match side {
            Side::One => self.side1 = value,
            Side::Two => self.side2 = value,
        }
    }

    /// The side with strictly more, `None` on a tie.
    pub fn leader(&self) -> Option<Side> {
        match self.side1.cmp(&self.side2) {
            std::cmp::Ordering::Greater => Some(Side::One),
            std::cmp::Ordering::Less => Some(Side::Two),
            std::cmp::Ordering::Equal => None,
        }
    }
}

/// Persisted record for one played or in-progress set.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SetScore {
    /// 1-based position in the match.
    pub set_number: u32,
    pub side1_score: u32,
    pub side2_score: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub side1_tiebreak_score: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub side2_tiebreak_score: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub winning_side: Option<Side>,
}

impl SetScore {
    /// Fresh record for the set at `set_index` (0-based).
    pub fn empty(set_index: usize) -> Self {
        Self {
            set_number: set_index as u32 + 1,
            ..Self::default()
        }
    }

    pub fn score(&self, side: Side) -> u32 {
        match side {
            Side::One => self.side1_score,
            Side::Two => self.side2_score,
        }
    }

    pub fn tiebreak_score(&self, side: Side) -> Option<u32> {
        match side {
            Side::One => self.side1_tiebreak_score,
            Side::Two => self.side2_tiebreak_score,
        }
    }

    pub fn is_complete(&self) -> bool {
        self.winning_side.is_some()
    }

    /// True once a non-zero score has been entered for this set.
    ///
    /// A blank tiebreak-only set is recorded as `0`/`0` tiebreak points and
    /// still counts as empty.
    pub fn has_entries(&self) -> bool {
        self.side1_score > 0
            || self.side2_score > 0
            || self.side1_tiebreak_score.unwrap_or(0) > 0
            || self.side2_tiebreak_score.unwrap_or(0) > 0
    }
}

/// Sets plus the derived match result, as handed to the persistence layer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchOutcome {
    pub sets: Vec<SetScore>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub winning_side: Option<Side>,
    pub is_complete: bool,
    /// Side 1 perspective, e.g. `6-4 3-6 7-6(4)`.
    pub score_string: String,
    /// Winner perspective, present once the match is decided.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub winner_score_string: Option<String>,
}
