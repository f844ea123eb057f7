//! Picks the set format that applies at a given set index.

use crate::models::{MatchConfig, SetFormat};

/// True if `set_index` (0-based) is the deciding set of the match.
pub fn is_deciding_set(set_index: usize, config: &MatchConfig) -> bool {
    config.best_of == 1 || set_index + 1 == config.best_of as usize
}

/// Format for the set at `set_index`: the final-set format on the deciding set
/// when one is configured, the ordinary set format everywhere else.
pub fn resolve_format(set_index: usize, config: &MatchConfig) -> &SetFormat {
    match &config.final_set_format {
        Some(final_set) if is_deciding_set(set_index, config) => final_set,
        _ => &config.set_format,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with_match_tiebreak() -> MatchConfig {
        MatchConfig::standard().with_final_set(SetFormat::tiebreak_only(10, false))
    }

    #[test]
    fn test_final_set_format_only_on_deciding_set() {
        let config = with_match_tiebreak();
        assert_eq!(resolve_format(0, &config), &SetFormat::standard());
        assert_eq!(resolve_format(1, &config), &SetFormat::standard());
        assert_eq!(resolve_format(2, &config), &SetFormat::tiebreak_only(10, false));
    }

    #[test]
    fn test_best_of_one_is_always_deciding() {
        let config = MatchConfig::new(1, SetFormat::regular(8))
            .with_final_set(SetFormat::tiebreak_only(7, false));
        assert!(is_deciding_set(0, &config));
        assert_eq!(resolve_format(0, &config), &SetFormat::tiebreak_only(7, false));
    }

    #[test]
    fn test_falls_back_to_set_format() {
        let config = MatchConfig::standard();
        assert_eq!(resolve_format(2, &config), &SetFormat::standard());
        // Beyond best_of is not the deciding set either.
        let config = with_match_tiebreak();
        assert_eq!(resolve_format(5, &config), &SetFormat::standard());
    }

    #[test]
    fn test_resolution_is_idempotent() {
        let config = with_match_tiebreak();
        for set_index in 0..3 {
            assert!(std::ptr::eq(
                resolve_format(set_index, &config),
                resolve_format(set_index, &config)
            ));
        }
    }
}
