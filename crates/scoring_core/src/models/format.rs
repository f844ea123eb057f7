//! Match and set format types
//!
//! `SetFormat` is a tagged variant: a set is either played in games
//! (`Regular`) or is a single tiebreak game (`TiebreakOnly`). The wire shape
//! keeps the flat `setTo` / `tiebreakAt` / `tiebreakFormat` / `tiebreakSet`
//! object; the variant is picked once, at deserialisation.

use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError, ValidationErrors};

use crate::error::{Result, ScoringError};

/// Games needed to win a standard set.
pub const DEFAULT_SET_TO: u32 = 6;

/// Points needed to win a standard tiebreak game.
pub const DEFAULT_TIEBREAK_TO: u32 = 7;

/// Parameters of a tiebreak game (set-deciding tiebreak or tiebreak-only set).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TiebreakFormat {
    pub tiebreak_to: u32,
    #[serde(default)]
    pub no_ad: bool,
}

impl TiebreakFormat {
    pub fn new(tiebreak_to: u32, no_ad: bool) -> Self {
        Self { tiebreak_to, no_ad }
    }

    /// Required winning margin once the nominal target has been passed.
    pub fn margin(&self) -> u32 {
        if self.no_ad {
            1
        } else {
            2
        }
    }
}

impl Default for TiebreakFormat {
    fn default() -> Self {
        Self::new(DEFAULT_TIEBREAK_TO, false)
    }
}

/// How one set is played.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "SetFormatRepr", into = "SetFormatRepr")]
pub enum SetFormat {
    /// Games-based set, won by margin or by a tiebreak game at `tiebreak_at`.
    Regular {
        set_to: u32,
        /// Absent means "same as `set_to`"; resolved by [`SetFormat::regular_rules`].
        tiebreak_at: Option<u32>,
        tiebreak: Option<TiebreakFormat>,
    },
    /// The whole set is one tiebreak game (e.g. a 10-point match tiebreak).
    TiebreakOnly(TiebreakFormat),
}

/// Regular-set thresholds with defaults already substituted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RegularRules {
    pub set_to: u32,
    pub tiebreak_at: u32,
    pub tiebreak: Option<TiebreakFormat>,
}

impl SetFormat {
    /// Regular set to `set_to` games with no tiebreak game defined.
    pub fn regular(set_to: u32) -> Self {
        SetFormat::Regular {
            set_to,
            tiebreak_at: None,
            tiebreak: None,
        }
    }

    /// Standard six-game set with a 7-point tiebreak at 6-6.
    pub fn standard() -> Self {
        Self::regular(DEFAULT_SET_TO).with_tiebreak(TiebreakFormat::default())
    }

    pub fn tiebreak_only(tiebreak_to: u32, no_ad: bool) -> Self {
        SetFormat::TiebreakOnly(TiebreakFormat::new(tiebreak_to, no_ad))
    }

    /// Adds (or replaces) the set-deciding tiebreak game. No-op on tiebreak-only sets.
    pub fn with_tiebreak(self, format: TiebreakFormat) -> Self {
        match self {
            SetFormat::Regular {
                set_to,
                tiebreak_at,
                ..
            } => SetFormat::Regular {
                set_to,
                tiebreak_at,
                tiebreak: Some(format),
            },
            other => other,
        }
    }

    /// Moves the tiebreak trigger. No-op on tiebreak-only sets.
    pub fn with_tiebreak_at(self, at: u32) -> Self {
        match self {
            SetFormat::Regular {
                set_to, tiebreak, ..
            } => SetFormat::Regular {
                set_to,
                tiebreak_at: Some(at),
                tiebreak,
            },
            other => other,
        }
    }

    pub fn is_tiebreak_only(&self) -> bool {
        matches!(self, SetFormat::TiebreakOnly(_))
    }

    /// Resolved thresholds for a regular set, `None` for tiebreak-only sets.
    pub fn regular_rules(&self) -> Option<RegularRules> {
        match *self {
            SetFormat::Regular {
                set_to,
                tiebreak_at,
                tiebreak,
            } => Some(RegularRules {
                set_to,
                tiebreak_at: tiebreak_at.unwrap_or(set_to),
                tiebreak,
            }),
            SetFormat::TiebreakOnly(_) => None,
        }
    }

    /// The tiebreak game played in this set, if any.
    pub fn tiebreak_game(&self) -> Option<TiebreakFormat> {
        match *self {
            SetFormat::Regular { tiebreak, .. } => tiebreak,
            SetFormat::TiebreakOnly(format) => Some(format),
        }
    }
}

impl Default for SetFormat {
    fn default() -> Self {
        Self::standard()
    }
}

impl Validate for SetFormat {
    fn validate(&self) -> std::result::Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        match self {
            SetFormat::Regular {
                set_to,
                tiebreak_at,
                tiebreak,
            } => {
                if *set_to == 0 {
                    errors.add("setTo", ValidationError::new("range"));
                }
                if *tiebreak_at == Some(0) {
                    errors.add("tiebreakAt", ValidationError::new("range"));
                }
                if matches!(tiebreak, Some(t) if t.tiebreak_to == 0) {
                    errors.add("tiebreakFormat", ValidationError::new("range"));
                }
            }
            SetFormat::TiebreakOnly(format) => {
                if format.tiebreak_to == 0 {
                    errors.add("tiebreakSet", ValidationError::new("range"));
                }
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

// Flat wire shape; absent optional fields get their defaults on conversion.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SetFormatRepr {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    set_to: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    tiebreak_at: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    tiebreak_format: Option<TiebreakRepr>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    tiebreak_set: Option<TiebreakRepr>,
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct TiebreakRepr {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    tiebreak_to: Option<u32>,
    #[serde(default)]
    no_ad: bool,
}

impl From<TiebreakFormat> for TiebreakRepr {
    fn from(format: TiebreakFormat) -> Self {
        Self {
            tiebreak_to: Some(format.tiebreak_to),
            no_ad: format.no_ad,
        }
    }
}

impl From<SetFormatRepr> for SetFormat {
    fn from(repr: SetFormatRepr) -> Self {
        if let Some(TiebreakRepr {
            tiebreak_to: Some(tiebreak_to),
            no_ad,
        }) = repr.tiebreak_set
        {
            return SetFormat::tiebreak_only(tiebreak_to, no_ad);
        }

        SetFormat::Regular {
            set_to: repr.set_to.unwrap_or(DEFAULT_SET_TO),
            tiebreak_at: repr.tiebreak_at,
            tiebreak: repr.tiebreak_format.map(|t| {
                TiebreakFormat::new(t.tiebreak_to.unwrap_or(DEFAULT_TIEBREAK_TO), t.no_ad)
            }),
        }
    }
}

impl From<SetFormat> for SetFormatRepr {
    fn from(format: SetFormat) -> Self {
        match format {
            SetFormat::Regular {
                set_to,
                tiebreak_at,
                tiebreak,
            } => SetFormatRepr {
                set_to: Some(set_to),
                tiebreak_at,
                tiebreak_format: tiebreak.map(TiebreakRepr::from),
                tiebreak_set: None,
            },
            SetFormat::TiebreakOnly(format) => SetFormatRepr {
                tiebreak_set: Some(format.into()),
                ..SetFormatRepr::default()
            },
        }
    }
}

/// Match-level configuration, immutable for one entry session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct MatchConfig {
    #[validate(range(min = 1, max = 99))]
    pub best_of: u32,
    #[validate]
    pub set_format: SetFormat,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub final_set_format: Option<SetFormat>,
}

impl MatchConfig {
    pub fn new(best_of: u32, set_format: SetFormat) -> Self {
        Self {
            best_of,
            set_format,
            final_set_format: None,
        }
    }

    /// Best of three standard sets.
    pub fn standard() -> Self {
        Self::new(3, SetFormat::standard())
    }

    pub fn with_final_set(mut self, format: SetFormat) -> Self {
        self.final_set_format = Some(format);
        self
    }

    /// Boundary check for configurations arriving from outside the crate.
    ///
    /// The engine functions assume a sane configuration and never call this.
    pub fn check(&self) -> Result<()> {
        self.validate()?;
        if self.best_of % 2 == 0 {
            return Err(ScoringError::InvalidConfig(format!(
                "bestOf must be odd, got {}",
                self.best_of
            )));
        }
        if let Some(final_set) = &self.final_set_format {
            final_set.validate()?;
        }
        Ok(())
    }
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self::standard()
    }
}
