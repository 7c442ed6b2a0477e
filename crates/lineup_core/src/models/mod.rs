pub mod lineup_player;
pub mod player;

pub use lineup_player::LineupFormationPlayer;
pub use player::{Player, PlayerStat, StatType, StatValue, TeamLineup, SUBSTITUTE_POSITION};
