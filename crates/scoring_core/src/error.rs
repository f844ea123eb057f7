use thiserror::Error;

/// Errors raised by the outer surfaces (JSON API, presets, settings, entry session).
///
/// The rules engine itself never fails: malformed input degrades to `0` or an
/// absent value, and undecidable complements come back as declined decisions.
#[derive(Error, Debug)]
pub enum ScoringError {
    #[error("Invalid match configuration: {0}")]
    InvalidConfig(String),

    #[error("Unknown format preset: {name}")]
    UnknownPreset { name: String },

    #[error("Set index {index} out of range for best of {best_of}")]
    SetIndexOutOfRange { index: usize, best_of: u32 },

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Deserialization error: {0}")]
    Deserialization(String),

    #[error("IO error reading {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Settings error: {0}")]
    Settings(String),
}

impl From<serde_json::Error> for ScoringError {
    fn from(err: serde_json::Error) -> Self {
        if err.is_data() || err.is_syntax() || err.is_eof() {
            ScoringError::Deserialization(err.to_string())
        } else {
            ScoringError::Serialization(err.to_string())
        }
    }
}

impl From<validator::ValidationErrors> for ScoringError {
    fn from(err: validator::ValidationErrors) -> Self {
        ScoringError::InvalidConfig(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, ScoringError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_data_errors_map_to_deserialization() {
        let err: ScoringError = serde_json::from_str::<u32>("\"six\"").unwrap_err().into();
        assert!(matches!(err, ScoringError::Deserialization(_)));
    }

    #[test]
    fn test_display_messages() {
        let err = ScoringError::SetIndexOutOfRange { index: 3, best_of: 3 };
        assert_eq!(err.to_string(), "Set index 3 out of range for best of 3");

        let err = ScoringError::UnknownPreset { name: "pro".to_string() };
        assert_eq!(err.to_string(), "Unknown format preset: pro");

        let err = ScoringError::Io {
            path: "settings.json".to_string(),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "missing"),
        };
        assert_eq!(err.to_string(), "IO error reading settings.json: missing");
    }
}
