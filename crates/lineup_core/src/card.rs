//! Player card presentation math: where a card sits on the field, how its
//! name is shortened, and which badges it carries. Renderers consume these;
//! nothing here draws.

use serde::{Deserialize, Serialize};

use crate::models::{LineupFormationPlayer, TeamLineup};

/// Longest name shown on a card before it is cut with an ellipsis.
pub const MAX_NAME_CHARS: usize = 10;

/// Field and card dimensions in renderer units (points or pixels).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CardGeometry {
    pub field_width: f32,
    pub field_height: f32,
    pub card_width: f32,
    pub card_height: f32,
}

impl Default for CardGeometry {
    fn default() -> Self {
        Self { field_width: 400.0, field_height: 395.0, card_width: 70.0, card_height: 50.0 }
    }
}

/// Top-left corner of a card, relative to the field's top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CardPlacement {
    pub left: f32,
    pub top: f32,
}

impl CardGeometry {
    pub fn with_field(mut self, width: f32, height: f32) -> Self {
        self.field_width = width;
        self.field_height = height;
        self
    }

    /// Centre the card on the player's pitch coordinate.
    pub fn place(&self, player: &LineupFormationPlayer) -> CardPlacement {
        CardPlacement {
            left: player.x / 100.0 * self.field_width - self.card_width / 2.0,
            top: player.y / 100.0 * self.field_height - self.card_height / 2.0,
        }
    }
}

/// First [`MAX_NAME_CHARS`] characters of `name`, with "…" if it was longer.
pub fn display_name(name: &str) -> String {
    let mut chars = name.chars();
    let mut shown: String = chars.by_ref().take(MAX_NAME_CHARS).collect();
    if chars.next().is_some() {
        shown.push('…');
    }
    shown
}

/// Footer label for a lineup, e.g. "4-3-3".
pub fn formation_display(lineup: &TeamLineup) -> String {
    lineup.formation_id()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum Badge {
    Assist,
    OwnGoal { count: u32 },
    Goal { count: u32 },
    YellowCard,
    RedCard,
    SubstitutedOff,
}

impl Badge {
    /// Counts are only printed next to the icon for braces and up.
    pub fn show_count(&self) -> bool {
        match self {
            Badge::OwnGoal { count } | Badge::Goal { count } => *count > 1,
            _ => false,
        }
    }
}

/// Badges for a card in paint order.
pub fn badges(player: &LineupFormationPlayer) -> Vec<Badge> {
    let mut out = Vec::new();
    if player.is_goal_assist {
        out.push(Badge::Assist);
    }
    if player.is_own_goal {
        out.push(Badge::OwnGoal { count: player.own_goals });
    }
    if player.is_scorer {
        out.push(Badge::Goal { count: player.goals });
    }
    if player.is_yellow_card {
        out.push(Badge::YellowCard);
    }
    if player.is_red_card {
        out.push(Badge::RedCard);
    }
    if player.is_substitute {
        out.push(Badge::SubstitutedOff);
    }
    out
}
