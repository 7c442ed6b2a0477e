use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::formation::{FieldCoordinate, PositionLabel};

/// A starter positioned on the pitch, with badge flags derived from stats.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct LineupFormationPlayer {
    pub player_id: String,
    pub match_name: String,
    pub shirt_number: u32,
    pub rating: String,
    pub formation_place: String,
    pub position: PositionLabel,
    pub x: f32, // 0 = left touchline, 100 = right touchline
    pub y: f32, // 0 = own goal line, 100 = opponent goal line
    pub photo: String,
    pub is_scorer: bool,
    pub is_substitute: bool,
    pub is_yellow_card: bool,
    pub is_red_card: bool,
    pub is_goal_assist: bool,
    pub is_own_goal: bool,
    pub goals: u32,
    pub own_goals: u32,
}

impl LineupFormationPlayer {
    pub fn coordinate(&self) -> FieldCoordinate {
        FieldCoordinate { x: self.x, y: self.y }
    }

    /// Numeric slot; the transform only emits players whose place parsed.
    pub fn slot(&self) -> u8 {
        crate::formation::parse_slot(&self.formation_place)
            .and_then(|n| u8::try_from(n).ok())
            .unwrap_or(0)
    }
}
