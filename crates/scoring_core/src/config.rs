//! Engine settings
//!
//! Resolution order: built-in defaults, then the JSON file named by
//! `SCORING_SETTINGS_PATH`, then the `SCORING_SMART_COMPLEMENT` flag.

use std::{env, fs};

use serde::{Deserialize, Serialize};

use crate::error::{Result, ScoringError};

pub const SETTINGS_PATH_ENV: &str = "SCORING_SETTINGS_PATH";
pub const SMART_COMPLEMENT_ENV: &str = "SCORING_SMART_COMPLEMENT";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EngineSettings {
    /// Pre-fill the paired score field when the rules imply it.
    pub smart_complement: bool,
}

impl Default for EngineSettings {
    fn default() -> Self {
        Self {
            smart_complement: true,
        }
    }
}

impl EngineSettings {
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| ScoringError::Settings(e.to_string()))
    }

    /// Settings from the process environment.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Like [`EngineSettings::from_env`], falling back to defaults on any error.
    pub fn from_env_or_default() -> Self {
        Self::from_env().unwrap_or_else(|e| {
            log::warn!("ignoring engine settings: {}", e);
            Self::default()
        })
    }

    /// Resolves settings through `lookup` instead of the real environment.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut settings = match lookup(SETTINGS_PATH_ENV) {
            Some(path) if !path.trim().is_empty() => {
                let path = path.trim();
                let content = fs::read_to_string(path).map_err(|source| ScoringError::Io {
                    path: path.to_string(),
                    source,
                })?;
                Self::from_json(&content)?
            }
            _ => Self::default(),
        };

        if let Some(raw) = lookup(SMART_COMPLEMENT_ENV) {
            match parse_flag(&raw) {
                Some(flag) => settings.smart_complement = flag,
                None => {
                    return Err(ScoringError::Settings(format!(
                        "{SMART_COMPLEMENT_ENV} must be a boolean, got '{raw}'"
                    )))
                }
            }
        }

        Ok(settings)
    }
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_lowercase().as_str() {
        "1" | "true" | "on" | "yes" => Some(true),
        "0" | "false" | "off" | "no" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::io::Write;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_without_environment() {
        let settings = EngineSettings::from_lookup(|_| None).unwrap();
        assert!(settings.smart_complement);
    }

    #[test]
    fn test_flag_overrides_default() {
        for raw in ["0", "false", "OFF", " no "] {
            let settings =
                EngineSettings::from_lookup(lookup_from(&[(SMART_COMPLEMENT_ENV, raw)])).unwrap();
            assert!(!settings.smart_complement, "{raw} should disable");
        }
    }

    #[test]
    fn test_invalid_flag_is_an_error() {
        let err = EngineSettings::from_lookup(lookup_from(&[(SMART_COMPLEMENT_ENV, "maybe")]))
            .unwrap_err();
        assert!(matches!(err, ScoringError::Settings(_)));
    }

    #[test]
    fn test_file_then_flag() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"smartComplement": false}}"#).unwrap();
        let path = file.path().to_str().unwrap().to_string();

        let from_file =
            EngineSettings::from_lookup(lookup_from(&[(SETTINGS_PATH_ENV, path.as_str())])).unwrap();
        assert!(!from_file.smart_complement);

        let overridden = EngineSettings::from_lookup(lookup_from(&[
            (SETTINGS_PATH_ENV, path.as_str()),
            (SMART_COMPLEMENT_ENV, "on"),
        ]))
        .unwrap();
        assert!(overridden.smart_complement);
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let err = EngineSettings::from_lookup(lookup_from(&[(
            SETTINGS_PATH_ENV,
            "/nonexistent/scoring-settings.json",
        )]))
        .unwrap_err();
        assert!(matches!(
            err,
            ScoringError::Io { ref path, .. } if path.ends_with("scoring-settings.json")
        ));
    }

    #[test]
    fn test_empty_json_object_uses_defaults() {
        assert_eq!(EngineSettings::from_json("{}").unwrap(), EngineSettings::default());
    }
}
