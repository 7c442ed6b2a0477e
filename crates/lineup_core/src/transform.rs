//! Lineup → positioned player view-models.
//!
//! Pure and synchronous: reads the lineup and the static coordinate table,
//! allocates a fresh output vector, and never fails.

use crate::formation::{infer_position, lookup};
use crate::models::{LineupFormationPlayer, Player, StatType, TeamLineup};
use crate::stats::{get_stat_value, has_stat};

/// Number of starters a lineup needs before anything is rendered.
pub const STARTING_XI: usize = 11;

/// Placeholder substituted by [`PhotoUrlTemplate`].
pub const PLAYER_ID_PLACEHOLDER: &str = "{playerId}";

/// Resolves a player's photo URL from their id.
///
/// Must be synchronous and side-effect free; callers that fetch URLs
/// asynchronously resolve them before or after the transform.
pub trait PhotoResolver {
    fn photo_url(&self, player_id: &str) -> String;
}

impl<F> PhotoResolver for F
where
    F: Fn(&str) -> String,
{
    fn photo_url(&self, player_id: &str) -> String {
        self(player_id)
    }
}

/// URL template resolver, e.g. `https://cdn.example.com/players/{playerId}.png`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhotoUrlTemplate(String);

impl PhotoUrlTemplate {
    pub fn new(template: impl Into<String>) -> Self {
        Self(template.into())
    }
}

impl PhotoResolver for PhotoUrlTemplate {
    fn photo_url(&self, player_id: &str) -> String {
        self.0.replace(PLAYER_ID_PLACEHOLDER, player_id)
    }
}

/// Position the starters of `lineup` on `formation_id`.
///
/// Players without a slot in 1-11 and players listed as "Substitute" are
/// dropped. If fewer than [`STARTING_XI`] remain the result is empty: a
/// partial lineup is never rendered. Output is sorted by slot.
pub fn transform_lineup(
    lineup: &TeamLineup,
    formation_id: &str,
    photo_resolver: Option<&dyn PhotoResolver>,
) -> Vec<LineupFormationPlayer> {
    let mut starters: Vec<(u8, &Player)> =
        lineup.starters().filter_map(|p| p.slot().map(|slot| (slot, p))).collect();

    if starters.len() < STARTING_XI {
        log::debug!(
            "lineup has {} valid starters (need {}), nothing to render",
            starters.len(),
            STARTING_XI
        );
        return Vec::new();
    }

    // stable: duplicate slots keep feed order
    starters.sort_by_key(|(slot, _)| *slot);

    starters
        .into_iter()
        .map(|(slot, player)| position_player(player, slot, formation_id, photo_resolver))
        .collect()
}

/// [`transform_lineup`] using the lineup's own formation code.
pub fn transform_team_lineup(
    lineup: &TeamLineup,
    photo_resolver: Option<&dyn PhotoResolver>,
) -> Vec<LineupFormationPlayer> {
    transform_lineup(lineup, &lineup.formation_id(), photo_resolver)
}

fn position_player(
    player: &Player,
    slot: u8,
    formation_id: &str,
    photo_resolver: Option<&dyn PhotoResolver>,
) -> LineupFormationPlayer {
    let formation_place = player.formation_place.clone().unwrap_or_default();
    let coordinate = lookup(formation_id, &formation_place);
    let stats = &player.stats;

    LineupFormationPlayer {
        player_id: player.player_id.clone(),
        match_name: player.match_name.clone(),
        shirt_number: player.shirt_number,
        rating: player.rating.clone(),
        position: infer_position(formation_id, slot as i64),
        formation_place,
        x: coordinate.x,
        y: coordinate.y,
        photo: photo_resolver.map(|r| r.photo_url(&player.player_id)).unwrap_or_default(),
        is_scorer: has_stat(stats, StatType::Goals),
        is_substitute: has_stat(stats, StatType::TotalSubOff),
        is_yellow_card: has_stat(stats, StatType::YellowCard),
        is_red_card: has_stat(stats, StatType::RedCard),
        is_goal_assist: has_stat(stats, StatType::GoalAssist),
        is_own_goal: has_stat(stats, StatType::OwnGoals),
        goals: get_stat_value(stats, StatType::Goals).as_count(),
        own_goals: get_stat_value(stats, StatType::OwnGoals).as_count(),
    }
}
