//! Named match-format presets
//!
//! Loaded from YAML embedded at compile time and cached on first use.
//!
//! ```rust
//! use scoring_core::data::presets::preset_config;
//!
//! let config = preset_config("match_tiebreak").unwrap();
//! assert_eq!(config.best_of, 3);
//! ```

use std::sync::OnceLock;

use serde::{Deserialize, Serialize};

use crate::error::{Result, ScoringError};
use crate::models::MatchConfig;

/// Preset catalogue YAML (compile-time embedded)
pub const PRESETS_YAML: &str = include_str!("../../../../data/formats/presets.yaml");

static PRESETS: OnceLock<PresetCatalog> = OnceLock::new();

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormatPreset {
    pub name: String,
    pub description: String,
    pub config: MatchConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PresetCatalog {
    pub presets: Vec<FormatPreset>,
}

impl PresetCatalog {
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let catalog: PresetCatalog =
            serde_yaml::from_str(yaml).map_err(|e| ScoringError::Deserialization(e.to_string()))?;
        for preset in &catalog.presets {
            preset.config.check().map_err(|e| {
                ScoringError::InvalidConfig(format!("preset '{}': {}", preset.name, e))
            })?;
        }
        Ok(catalog)
    }

    pub fn get(&self, name: &str) -> Option<&FormatPreset> {
        let name = name.trim();
        self.presets
            .iter()
            .find(|p| p.name.eq_ignore_ascii_case(name))
    }
}

/// The embedded preset catalogue.
///
/// # Panics
///
/// Panics if the embedded YAML is invalid; it is checked by the tests below,
/// so a normal build never hits this.
pub fn presets() -> &'static PresetCatalog {
    PRESETS.get_or_init(|| {
        PresetCatalog::from_yaml(PRESETS_YAML).expect("Failed to parse presets.yaml")
    })
}

pub fn preset_names() -> Vec<&'static str> {
    presets().presets.iter().map(|p| p.name.as_str()).collect()
}

pub fn preset(name: &str) -> Result<&'static FormatPreset> {
    presets().get(name).ok_or_else(|| ScoringError::UnknownPreset {
        name: name.to_string(),
    })
}

pub fn preset_config(name: &str) -> Result<MatchConfig> {
    preset(name).map(|p| p.config.clone())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{SetFormat, TiebreakFormat};

    #[test]
    fn test_embedded_catalog_parses() {
        let catalog = PresetCatalog::from_yaml(PRESETS_YAML).unwrap();
        assert!(catalog.presets.len() >= 5);
        assert!(preset_names().contains(&"standard"));
    }

    #[test]
    fn test_standard_preset() {
        assert_eq!(preset_config("standard").unwrap(), MatchConfig::standard());
    }

    #[test]
    fn test_match_tiebreak_preset() {
        let config = preset_config("match_tiebreak").unwrap();
        assert_eq!(config.final_set_format, Some(SetFormat::tiebreak_only(10, false)));
    }

    #[test]
    fn test_fast4_preset() {
        let config = preset_config("FAST4").unwrap();
        let rules = config.set_format.regular_rules().unwrap();
        assert_eq!(rules.set_to, 4);
        assert_eq!(rules.tiebreak_at, 3);
        assert_eq!(rules.tiebreak, Some(TiebreakFormat::new(5, true)));
    }

    #[test]
    fn test_unknown_preset() {
        let err = preset_config("doubles_super_tiebreak_x").unwrap_err();
        assert!(matches!(err, ScoringError::UnknownPreset { .. }));
    }

    #[test]
    fn test_invalid_catalog_rejected() {
        let yaml = r#"
presets:
  - name: broken
    description: even best-of
    config:
      bestOf: 2
      setFormat:
        setTo: 6
"#;
        assert!(matches!(
            PresetCatalog::from_yaml(yaml),
            Err(ScoringError::InvalidConfig(_))
        ));
    }
}
