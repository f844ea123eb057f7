//! Canonical score strings: `6-4 3-6 7-6(4) [10-7]`.

use super::format_resolver::resolve_format;
use crate::models::{MatchConfig, SetScore, Side};

/// One set from `perspective`'s point of view.
///
/// Regular sets read `games-games`, with the losing side's tiebreak points in
/// parentheses when a tiebreak was played. Tiebreak-only sets read
/// `[points-points]`.
pub fn set_score_string(
    set_index: usize,
    set: &SetScore,
    perspective: Side,
    config: &MatchConfig,
) -> String {
    let other = perspective.opponent();

    if resolve_format(set_index, config).is_tiebreak_only() {
        return format!(
            "[{}-{}]",
            set.tiebreak_score(perspective).unwrap_or(0),
            set.tiebreak_score(other).unwrap_or(0)
        );
    }

    let games = format!("{}-{}", set.score(perspective), set.score(other));
    match (set.side1_tiebreak_score, set.side2_tiebreak_score) {
        (Some(t1), Some(t2)) => format!("{games}({})", t1.min(t2)),
        _ => games,
    }
}

/// Whole match from `perspective`'s point of view; sets with nothing entered
/// are left out.
pub fn score_string(sets: &[SetScore], perspective: Side, config: &MatchConfig) -> String {
    sets.iter()
        .enumerate()
        .filter(|(_, set)| set.has_entries())
        .map(|(index, set)| set_score_string(index, set, perspective, config))
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::outcome::build_set_score;
    use crate::models::SetFormat;

    #[test]
    fn test_tiebreak_set_shows_loser_points() {
        let config = MatchConfig::standard();
        let set = build_set_score(0, "7", "6", "4", &config);
        assert_eq!(set_score_string(0, &set, Side::One, &config), "7-6(4)");
        assert_eq!(set_score_string(0, &set, Side::Two, &config), "6-7(4)");
    }

    #[test]
    fn test_match_with_match_tiebreak() {
        let config = MatchConfig::standard().with_final_set(SetFormat::tiebreak_only(10, false));
        let sets = vec![
            build_set_score(0, "6", "4", "", &config),
            build_set_score(1, "3", "6", "", &config),
            build_set_score(2, "10", "7", "", &config),
        ];
        assert_eq!(score_string(&sets, Side::One, &config), "6-4 3-6 [10-7]");
        assert_eq!(score_string(&sets, Side::Two, &config), "4-6 6-3 [7-10]");
    }

    #[test]
    fn test_empty_sets_skipped() {
        let config = MatchConfig::standard();
        let sets = vec![build_set_score(0, "6", "1", "", &config), SetScore::empty(1)];
        assert_eq!(score_string(&sets, Side::One, &config), "6-1");
        assert_eq!(score_string(&[], Side::One, &config), "");
    }

    #[test]
    fn test_blank_match_tiebreak_skipped() {
        let config = MatchConfig::standard().with_final_set(SetFormat::tiebreak_only(10, false));
        let sets = vec![
            build_set_score(0, "6", "4", "", &config),
            build_set_score(1, "3", "6", "", &config),
            build_set_score(2, "", "", "", &config),
        ];
        assert_eq!(score_string(&sets, Side::One, &config), "6-4 3-6");
    }
}
