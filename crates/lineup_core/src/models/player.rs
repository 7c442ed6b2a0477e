use schemars::JsonSchema;
use serde::{Deserialize, Deserializer, Serialize};

use crate::formation::{expand_formation_code, parse_slot, DEFAULT_FORMATION};

/// Position value the data feed uses for bench players.
pub const SUBSTITUTE_POSITION: &str = "Substitute";

/// Match statistic kinds the renderer knows how to badge.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "camelCase")]
pub enum StatType {
    Goals,
    YellowCard,
    RedCard,
    GoalAssist,
    TotalSubOff,
    OwnGoals,
    /// Any other stat type sent by the feed, or none at all
    #[default]
    #[serde(other)]
    Unknown,
}

/// Stat value as delivered by the feed: either a JSON number or a string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(untagged)]
pub enum StatValue {
    Number(f64),
    Text(String),
}

impl Default for StatValue {
    fn default() -> Self {
        StatValue::Number(0.0)
    }
}

impl StatValue {
    /// Numeric coercion for badge counts.
    ///
    /// Strings are trimmed and parsed as decimals (empty string is 0).
    /// Fractions truncate toward zero; NaN, infinities, negatives and
    /// non-numeric text all yield 0.
    pub fn as_count(&self) -> u32 {
        let value = match self {
            StatValue::Number(n) => *n,
            StatValue::Text(s) => {
                let trimmed = s.trim();
                if trimmed.is_empty() {
                    0.0
                } else {
                    trimmed.parse::<f64>().unwrap_or(f64::NAN)
                }
            }
        };

        if value.is_finite() && value > 0.0 {
            value.trunc().min(u32::MAX as f64) as u32
        } else {
            0
        }
    }
}

impl From<u32> for StatValue {
    fn from(value: u32) -> Self {
        StatValue::Number(value as f64)
    }
}

impl From<&str> for StatValue {
    fn from(value: &str) -> Self {
        StatValue::Text(value.to_string())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct PlayerStat {
    #[serde(rename = "type", default, deserialize_with = "null_as_default")]
    pub stat_type: StatType,
    #[serde(default, deserialize_with = "null_as_default")]
    pub value: StatValue,
}

impl PlayerStat {
    pub fn new(stat_type: StatType, value: impl Into<StatValue>) -> Self {
        Self { stat_type, value: value.into() }
    }
}

/// One roster entry from the match-statistics feed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Player {
    pub player_id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub match_name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub shirt_number: u32,
    #[serde(default, deserialize_with = "null_as_default")]
    pub rating: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub position: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub formation_place: Option<String>,
    /// Null entries are kept; stat helpers skip them
    #[serde(default, deserialize_with = "null_as_default")]
    pub stats: Vec<Option<PlayerStat>>,
}

impl Player {
    pub fn new(player_id: impl Into<String>, formation_place: impl Into<String>) -> Self {
        Self {
            player_id: player_id.into(),
            match_name: String::new(),
            shirt_number: 0,
            rating: String::new(),
            position: String::new(),
            formation_place: Some(formation_place.into()),
            stats: Vec::new(),
        }
    }

    pub fn with_name(mut self, match_name: impl Into<String>) -> Self {
        self.match_name = match_name.into();
        self
    }

    pub fn with_position(mut self, position: impl Into<String>) -> Self {
        self.position = position.into();
        self
    }

    pub fn with_shirt_number(mut self, shirt_number: u32) -> Self {
        self.shirt_number = shirt_number;
        self
    }

    pub fn with_stat(mut self, stat: PlayerStat) -> Self {
        self.stats.push(Some(stat));
        self
    }

    /// Formation slot (1-11) if the player is assigned one.
    pub fn slot(&self) -> Option<u8> {
        let place = parse_slot(self.formation_place.as_deref()?)?;
        if (1..=11).contains(&place) {
            Some(place as u8)
        } else {
            None
        }
    }

    pub fn is_substitute(&self) -> bool {
        self.position == SUBSTITUTE_POSITION
    }

    /// Valid slot assignment and not listed on the bench.
    pub fn is_starter(&self) -> bool {
        self.slot().is_some() && !self.is_substitute()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct TeamLineup {
    #[serde(default, deserialize_with = "null_as_default")]
    pub players: Vec<Player>,
    /// Compact formation code, e.g. "433"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub formation_used: Option<String>,
}

impl TeamLineup {
    pub fn new(players: Vec<Player>, formation_used: impl Into<String>) -> Self {
        Self { players, formation_used: Some(formation_used.into()) }
    }

    /// Dash-separated formation identifier ("433" -> "4-3-3").
    ///
    /// Missing or empty `formationUsed` falls back to "4-3-3".
    pub fn formation_id(&self) -> String {
        match self.formation_used.as_deref() {
            Some(code) if !code.is_empty() => expand_formation_code(code),
            _ => DEFAULT_FORMATION.to_string(),
        }
    }

    pub fn starters(&self) -> impl Iterator<Item = &Player> {
        self.players.iter().filter(|p| p.is_starter())
    }
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_player_from_feed_json() {
        let player: Player = serde_json::from_value(json!({
            "playerId": "p9",
            "matchName": "Salah",
            "shirtNumber": 11,
            "rating": "9.1",
            "position": "Forward",
            "positionSide": "Right",
            "formationPlace": "10",
            "stats": [{ "type": "goals", "value": "2" }, null, { "type": "minsPlayed", "value": 90 }]
        }))
        .unwrap();

        assert_eq!(player.slot(), Some(10));
        assert!(player.is_starter());
        assert_eq!(player.stats.len(), 3);
        assert!(player.stats[1].is_none());
        let unknown = player.stats[2].as_ref().unwrap();
        assert_eq!(unknown.stat_type, StatType::Unknown);
        assert_eq!(unknown.value, StatValue::Number(90.0));
    }

    #[test]
    fn test_null_stat_fields_default() {
        let lineup: TeamLineup = serde_json::from_value(json!({
            "players": [{
                "playerId": "1",
                "formationPlace": "1",
                "stats": [
                    { "type": "goals", "value": null },
                    { "type": null, "value": "1" },
                    { "value": 2 },
                    { "type": "redCard" }
                ]
            }]
        }))
        .unwrap();

        let stats: Vec<&PlayerStat> = lineup.players[0].stats.iter().flatten().collect();
        assert_eq!(stats.len(), 4);
        assert_eq!(stats[0].stat_type, StatType::Goals);
        assert_eq!(stats[0].value, StatValue::Number(0.0));
        assert_eq!(stats[1].stat_type, StatType::Unknown);
        assert_eq!(stats[2].stat_type, StatType::Unknown);
        assert_eq!(stats[3].value, StatValue::default());
    }

    #[test]
    fn test_starters_skip_bench_and_unplaced() {
        let lineup = TeamLineup::new(
            vec![
                Player::new("a", "1"),
                Player::new("b", "2").with_position(SUBSTITUTE_POSITION),
                Player::new("c", "12"),
                Player::new("d", "3"),
            ],
            "433",
        );
        let ids: Vec<&str> = lineup.starters().map(|p| p.player_id.as_str()).collect();
        assert_eq!(ids, vec!["a", "d"]);
    }

    #[test]
    fn test_missing_optional_fields_default() {
        let player: Player = serde_json::from_value(json!({
            "playerId": "p1",
            "matchName": null,
            "stats": null
        }))
        .unwrap();

        assert_eq!(player.match_name, "");
        assert_eq!(player.shirt_number, 0);
        assert!(player.stats.is_empty());
        assert_eq!(player.slot(), None);
        assert!(!player.is_starter());
    }

    #[test]
    fn test_slot_bounds() {
        assert_eq!(Player::new("a", "1").slot(), Some(1));
        assert_eq!(Player::new("a", "11").slot(), Some(11));
        assert_eq!(Player::new("a", "0").slot(), None);
        assert_eq!(Player::new("a", "12").slot(), None);
        assert_eq!(Player::new("a", "").slot(), None);
        assert_eq!(Player::new("a", "abc").slot(), None);
        assert_eq!(Player::new("a", " 7").slot(), Some(7));
    }

    #[test]
    fn test_substitute_is_not_starter() {
        let player = Player::new("s", "5").with_position("Substitute");
        assert!(player.is_substitute());
        assert!(!player.is_starter());
    }

    #[test]
    fn test_formation_id_expansion_and_default() {
        let lineup = TeamLineup::new(vec![], "433");
        assert_eq!(lineup.formation_id(), "4-3-3");

        let lineup = TeamLineup::new(vec![], "4231");
        assert_eq!(lineup.formation_id(), "4-2-3-1");

        let lineup = TeamLineup::new(vec![], "");
        assert_eq!(lineup.formation_id(), "4-3-3");

        assert_eq!(TeamLineup::default().formation_id(), "4-3-3");
    }

    #[test]
    fn test_stat_value_as_count() {
        assert_eq!(StatValue::from("2").as_count(), 2);
        assert_eq!(StatValue::from(" 3 ").as_count(), 3);
        assert_eq!(StatValue::from("").as_count(), 0);
        assert_eq!(StatValue::from("abc").as_count(), 0);
        assert_eq!(StatValue::Number(1.9).as_count(), 1);
        assert_eq!(StatValue::Number(-1.0).as_count(), 0);
        assert_eq!(StatValue::Number(f64::NAN).as_count(), 0);
        assert_eq!(StatValue::from(4u32).as_count(), 4);
    }
}
