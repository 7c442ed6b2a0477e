//! Stat inspection helpers over a player's raw stat list.
//!
//! Feeds deliver stats as a list that may contain `null` placeholders; those
//! entries are skipped, never treated as an error.

use crate::models::{PlayerStat, StatType, StatValue};

/// True if any non-null entry has the given type.
pub fn has_stat(stats: &[Option<PlayerStat>], stat_type: StatType) -> bool {
    stats.iter().flatten().any(|stat| stat.stat_type == stat_type)
}

/// Value of the first non-null entry with the given type, or numeric 0.
///
/// Duplicate entries of the same type are not summed; only the first one in
/// list order counts.
pub fn get_stat_value(stats: &[Option<PlayerStat>], stat_type: StatType) -> StatValue {
    stats
        .iter()
        .flatten()
        .find(|stat| stat.stat_type == stat_type)
        .map(|stat| stat.value.clone())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stats() -> Vec<Option<PlayerStat>> {
        vec![
            None,
            Some(PlayerStat::new(StatType::Goals, "2")),
            None,
            Some(PlayerStat::new(StatType::GoalAssist, "1")),
            Some(PlayerStat::new(StatType::Goals, "5")),
        ]
    }

    #[test]
    fn test_has_stat_skips_null_entries() {
        let stats = stats();
        assert!(has_stat(&stats, StatType::Goals));
        assert!(has_stat(&stats, StatType::GoalAssist));
        assert!(!has_stat(&stats, StatType::RedCard));
    }

    #[test]
    fn test_empty_and_all_null_lists() {
        assert!(!has_stat(&[], StatType::Goals));
        assert!(!has_stat(&[None, None], StatType::Goals));
        assert_eq!(get_stat_value(&[], StatType::Goals), StatValue::Number(0.0));
        assert_eq!(get_stat_value(&[None], StatType::OwnGoals), StatValue::Number(0.0));
    }

    #[test]
    fn test_get_stat_value_first_match_wins() {
        let stats = stats();
        assert_eq!(get_stat_value(&stats, StatType::Goals), StatValue::from("2"));
        assert_eq!(get_stat_value(&stats, StatType::Goals).as_count(), 2);
    }

    #[test]
    fn test_get_stat_value_missing_type() {
        assert_eq!(get_stat_value(&stats(), StatType::YellowCard), StatValue::Number(0.0));
    }
}
