use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Role abbreviation shown on a player card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub enum PositionLabel {
    #[serde(rename = "GK")]
    Goalkeeper,
    #[serde(rename = "RB")]
    RightBack,
    #[serde(rename = "LB")]
    LeftBack,
    #[serde(rename = "CB")]
    CentreBack,
    #[serde(rename = "CM")]
    CentralMidfielder,
    #[serde(rename = "CAM")]
    AttackingMidfielder,
    #[serde(rename = "ST")]
    Striker,
    #[serde(rename = "RW")]
    RightWinger,
    #[serde(rename = "LW")]
    LeftWinger,
}

impl PositionLabel {
    pub fn short_name(&self) -> &'static str {
        match self {
            Self::Goalkeeper => "GK",
            Self::RightBack => "RB",
            Self::LeftBack => "LB",
            Self::CentreBack => "CB",
            Self::CentralMidfielder => "CM",
            Self::AttackingMidfielder => "CAM",
            Self::Striker => "ST",
            Self::RightWinger => "RW",
            Self::LeftWinger => "LW",
        }
    }
}

impl std::fmt::Display for PositionLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.short_name())
    }
}

/// Infer a role label from the formation family and slot number.
///
/// Heuristic, first matching rule wins:
/// - 1 is the goalkeeper
/// - 2-6 are defenders; back-three shapes ("3-") put full backs on 2/3,
///   back-five shapes ("5-") label 2/3 as LB, everything else is a back four
/// - 7-8 central midfield, 9 striker
/// - 10-11 are wingers in front-three shapes (contains "-3-", ends in "3"),
///   attacking midfielders otherwise
pub fn infer_position(formation_id: &str, slot: i64) -> PositionLabel {
    use PositionLabel::*;

    match slot {
        1 => Goalkeeper,
        // back-three and back-four shapes share the same defensive labels
        2 | 3 if formation_id.starts_with("5-") => LeftBack,
        2 => RightBack,
        3 => LeftBack,
        4..=6 => CentreBack,
        7..=8 => CentralMidfielder,
        9 => Striker,
        10..=11 => {
            if formation_id.contains("-3-") && formation_id.ends_with('3') {
                if slot == 10 {
                    RightWinger
                } else {
                    LeftWinger
                }
            } else {
                AttackingMidfielder
            }
        }
        _ => CentralMidfielder,
    }
}
