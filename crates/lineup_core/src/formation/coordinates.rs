// Formation slot coordinate table
// 23 formations, 11 slots each, on a 0-100 pitch surface

use std::collections::HashMap;

use once_cell::sync::Lazy;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Percentage position on the pitch surface.
///
/// - x: 0 = left touchline, 100 = right touchline
/// - y: 0 = own goal line (top of the surface), 100 = opponent goal line
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct FieldCoordinate {
    pub x: f32,
    pub y: f32,
}

impl FieldCoordinate {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn distance(&self, other: &FieldCoordinate) -> f32 {
        ((self.x - other.x).powi(2) + (self.y - other.y).powi(2)).sqrt()
    }
}

/// Centre-field fallback for unknown formations or slots.
pub const DEFAULT_COORDINATE: FieldCoordinate = FieldCoordinate::new(49.0, 40.0);

/// The 11 slot coordinates of one formation; index 0 is slot "1".
#[derive(Debug, Clone, Copy)]
pub struct FormationSlots {
    pub id: &'static str,
    pub coords: [FieldCoordinate; 11],
}

impl FormationSlots {
    /// `(slot, coordinate)` pairs, slot numbered from 1.
    pub fn slots(&self) -> impl Iterator<Item = (u8, FieldCoordinate)> + '_ {
        self.coords.iter().enumerate().map(|(i, c)| (i as u8 + 1, *c))
    }
}

const fn at(x: f32, y: f32) -> FieldCoordinate {
    FieldCoordinate::new(x, y)
}

// Slot convention:
//   1 GK | 2 right back / right wing-back | 3 left back / left wing-back
//   4-6 central defenders (4-back shapes: 5/6 are the centre backs, 4 the
//   deepest central midfielder) | 7-8 midfielders | 9 centre forward
//   10-11 wide or attacking players
pub const FORMATIONS: &[FormationSlots] = &[
    FormationSlots {
        id: "4-4-2",
        coords: [
            at(50.0, 6.0),  // GK
            at(85.0, 25.0), // RB
            at(15.0, 25.0), // LB
            at(62.0, 50.0), // RCM
            at(62.0, 22.0), // RCB
            at(38.0, 22.0), // LCB
            at(86.0, 54.0), // RM
            at(38.0, 50.0), // LCM
            at(40.0, 86.0), // ST
            at(60.0, 86.0), // ST
            at(14.0, 54.0), // LM
        ],
    },
    FormationSlots {
        id: "4-1-2-1-2",
        coords: [
            at(50.0, 6.0),
            at(85.0, 25.0),
            at(15.0, 25.0),
            at(50.0, 36.0), // DM
            at(62.0, 22.0),
            at(38.0, 22.0),
            at(70.0, 50.0),
            at(30.0, 50.0),
            at(40.0, 88.0),
            at(50.0, 66.0), // CAM, tip of the diamond
            at(60.0, 88.0),
        ],
    },
    FormationSlots {
        id: "4-3-3",
        coords: [
            at(50.0, 6.0),
            at(85.0, 25.0),
            at(15.0, 25.0),
            at(50.0, 40.0), // DM
            at(62.0, 22.0),
            at(38.0, 22.0),
            at(68.0, 52.0),
            at(32.0, 52.0),
            at(50.0, 88.0),
            at(82.0, 80.0), // RW
            at(18.0, 80.0), // LW
        ],
    },
    FormationSlots {
        id: "4-5-1",
        coords: [
            at(50.0, 6.0),
            at(85.0, 25.0),
            at(15.0, 25.0),
            at(50.0, 40.0),
            at(62.0, 22.0),
            at(38.0, 22.0),
            at(66.0, 54.0),
            at(34.0, 54.0),
            at(50.0, 88.0),
            at(86.0, 60.0),
            at(14.0, 60.0),
        ],
    },
    FormationSlots {
        id: "4-4-1-1",
        coords: [
            at(50.0, 6.0),
            at(85.0, 25.0),
            at(15.0, 25.0),
            at(62.0, 48.0),
            at(62.0, 22.0),
            at(38.0, 22.0),
            at(86.0, 52.0),
            at(38.0, 48.0),
            at(50.0, 88.0),
            at(50.0, 70.0), // second striker
            at(14.0, 52.0),
        ],
    },
    FormationSlots {
        id: "4-1-4-1",
        coords: [
            at(50.0, 6.0),
            at(85.0, 25.0),
            at(15.0, 25.0),
            at(50.0, 36.0),
            at(62.0, 22.0),
            at(38.0, 22.0),
            at(64.0, 54.0),
            at(36.0, 54.0),
            at(50.0, 88.0),
            at(86.0, 58.0),
            at(14.0, 58.0),
        ],
    },
    FormationSlots {
        id: "4-2-3-1",
        coords: [
            at(50.0, 6.0),
            at(85.0, 25.0),
            at(15.0, 25.0),
            at(60.0, 40.0),
            at(62.0, 22.0),
            at(38.0, 22.0),
            at(84.0, 66.0),
            at(40.0, 40.0),
            at(50.0, 88.0),
            at(50.0, 66.0),
            at(16.0, 66.0),
        ],
    },
    FormationSlots {
        id: "4-3-2-1",
        coords: [
            at(50.0, 6.0),
            at(85.0, 25.0),
            at(15.0, 25.0),
            at(50.0, 40.0),
            at(62.0, 22.0),
            at(38.0, 22.0),
            at(70.0, 50.0),
            at(30.0, 50.0),
            at(50.0, 88.0),
            at(64.0, 70.0),
            at(36.0, 70.0),
        ],
    },
    FormationSlots {
        id: "5-3-2",
        coords: [
            at(50.0, 6.0),
            at(88.0, 34.0), // RWB
            at(12.0, 34.0), // LWB
            at(72.0, 22.0),
            at(50.0, 20.0),
            at(28.0, 22.0),
            at(70.0, 52.0),
            at(30.0, 52.0),
            at(40.0, 88.0),
            at(60.0, 88.0),
            at(50.0, 56.0),
        ],
    },
    FormationSlots {
        id: "5-4-1",
        coords: [
            at(50.0, 6.0),
            at(88.0, 32.0),
            at(12.0, 32.0),
            at(72.0, 22.0),
            at(50.0, 20.0),
            at(28.0, 22.0),
            at(62.0, 52.0),
            at(38.0, 52.0),
            at(50.0, 88.0),
            at(84.0, 60.0),
            at(16.0, 60.0),
        ],
    },
    FormationSlots {
        id: "3-5-2",
        coords: [
            at(50.0, 6.0),
            at(88.0, 48.0),
            at(12.0, 48.0),
            at(70.0, 22.0),
            at(50.0, 20.0),
            at(30.0, 22.0),
            at(66.0, 50.0),
            at(34.0, 50.0),
            at(40.0, 88.0),
            at(50.0, 64.0),
            at(60.0, 88.0),
        ],
    },
    FormationSlots {
        id: "3-4-3",
        coords: [
            at(50.0, 6.0),
            at(86.0, 50.0),
            at(14.0, 50.0),
            at(70.0, 22.0),
            at(50.0, 20.0),
            at(30.0, 22.0),
            at(60.0, 50.0),
            at(40.0, 50.0),
            at(50.0, 88.0),
            at(78.0, 80.0),
            at(22.0, 80.0),
        ],
    },
    FormationSlots {
        id: "4-2-2-2",
        coords: [
            at(50.0, 6.0),
            at(85.0, 25.0),
            at(15.0, 25.0),
            at(60.0, 42.0),
            at(62.0, 22.0),
            at(38.0, 22.0),
            at(80.0, 64.0),
            at(40.0, 42.0),
            at(40.0, 88.0),
            at(60.0, 88.0),
            at(20.0, 64.0),
        ],
    },
    FormationSlots {
        id: "3-5-1-1",
        coords: [
            at(50.0, 6.0),
            at(88.0, 48.0),
            at(12.0, 48.0),
            at(70.0, 22.0),
            at(50.0, 20.0),
            at(30.0, 22.0),
            at(68.0, 48.0),
            at(32.0, 48.0),
            at(50.0, 88.0),
            at(50.0, 70.0),
            at(50.0, 52.0),
        ],
    },
    FormationSlots {
        id: "3-4-2-1",
        coords: [
            at(50.0, 6.0),
            at(86.0, 50.0),
            at(14.0, 50.0),
            at(70.0, 22.0),
            at(50.0, 20.0),
            at(30.0, 22.0),
            at(60.0, 48.0),
            at(40.0, 48.0),
            at(50.0, 88.0),
            at(64.0, 70.0),
            at(36.0, 70.0),
        ],
    },
    FormationSlots {
        id: "3-4-1-2",
        coords: [
            at(50.0, 6.0),
            at(86.0, 50.0),
            at(14.0, 50.0),
            at(70.0, 22.0),
            at(50.0, 20.0),
            at(30.0, 22.0),
            at(60.0, 48.0),
            at(40.0, 48.0),
            at(40.0, 88.0),
            at(50.0, 66.0),
            at(60.0, 88.0),
        ],
    },
    FormationSlots {
        id: "3-1-4-2",
        coords: [
            at(50.0, 6.0),
            at(86.0, 52.0),
            at(14.0, 52.0),
            at(70.0, 22.0),
            at(50.0, 20.0),
            at(30.0, 22.0),
            at(64.0, 54.0),
            at(50.0, 36.0), // DM
            at(40.0, 88.0),
            at(60.0, 88.0),
            at(36.0, 54.0),
        ],
    },
    FormationSlots {
        id: "3-4-3d",
        coords: [
            at(50.0, 6.0),
            at(86.0, 50.0),
            at(14.0, 50.0),
            at(70.0, 22.0),
            at(50.0, 20.0),
            at(30.0, 22.0),
            at(50.0, 64.0), // top of the diamond
            at(50.0, 38.0), // base of the diamond
            at(50.0, 90.0),
            at(78.0, 82.0),
            at(22.0, 82.0),
        ],
    },
    FormationSlots {
        id: "4-1-3-2",
        coords: [
            at(50.0, 6.0),
            at(85.0, 25.0),
            at(15.0, 25.0),
            at(50.0, 38.0),
            at(62.0, 22.0),
            at(38.0, 22.0),
            at(82.0, 56.0),
            at(50.0, 56.0),
            at(40.0, 88.0),
            at(60.0, 88.0),
            at(18.0, 56.0),
        ],
    },
    FormationSlots {
        id: "4-2-4-0",
        coords: [
            at(50.0, 6.0),
            at(85.0, 25.0),
            at(15.0, 25.0),
            at(60.0, 42.0),
            at(62.0, 22.0),
            at(38.0, 22.0),
            at(86.0, 78.0),
            at(40.0, 42.0),
            at(38.0, 82.0),
            at(62.0, 82.0),
            at(14.0, 78.0),
        ],
    },
    FormationSlots {
        id: "4-3-1-2",
        coords: [
            at(50.0, 6.0),
            at(85.0, 25.0),
            at(15.0, 25.0),
            at(50.0, 40.0),
            at(62.0, 22.0),
            at(38.0, 22.0),
            at(70.0, 52.0),
            at(30.0, 52.0),
            at(40.0, 88.0),
            at(50.0, 68.0),
            at(60.0, 88.0),
        ],
    },
    FormationSlots {
        id: "3-2-4-1",
        coords: [
            at(50.0, 6.0),
            at(86.0, 64.0),
            at(14.0, 64.0),
            at(70.0, 22.0),
            at(50.0, 20.0),
            at(30.0, 22.0),
            at(60.0, 40.0),
            at(40.0, 40.0),
            at(50.0, 88.0),
            at(64.0, 68.0),
            at(36.0, 68.0),
        ],
    },
    FormationSlots {
        id: "3-3-3-1",
        coords: [
            at(50.0, 6.0),
            at(82.0, 46.0),
            at(18.0, 46.0),
            at(70.0, 22.0),
            at(50.0, 20.0),
            at(30.0, 22.0),
            at(50.0, 66.0),
            at(50.0, 42.0),
            at(50.0, 88.0),
            at(76.0, 68.0),
            at(24.0, 68.0),
        ],
    },
];

static FORMATION_INDEX: Lazy<HashMap<&'static str, &'static FormationSlots>> =
    Lazy::new(|| FORMATIONS.iter().map(|f| (f.id, f)).collect());

/// Coordinate of `slot` ("1".."11") in `formation_id`.
///
/// Unknown formations and anything other than the canonical slot keys
/// "1".."11" fall back to [`DEFAULT_COORDINATE`].
pub fn lookup(formation_id: &str, slot: &str) -> FieldCoordinate {
    let Some(formation) = FORMATION_INDEX.get(formation_id) else {
        log::trace!("unknown formation '{}', using default coordinate", formation_id);
        return DEFAULT_COORDINATE;
    };

    match slot_index(slot) {
        Some(index) => formation.coords[index],
        None => {
            log::trace!("no slot '{}' in formation {}, using default coordinate", slot, formation_id);
            DEFAULT_COORDINATE
        }
    }
}

/// All 11 coordinates of a known formation.
pub fn formation_coordinates(formation_id: &str) -> Option<&'static [FieldCoordinate; 11]> {
    FORMATION_INDEX.get(formation_id).map(|f| &f.coords)
}

pub fn is_supported_formation(formation_id: &str) -> bool {
    FORMATION_INDEX.contains_key(formation_id)
}

/// Supported identifiers in table order.
pub fn supported_formations() -> Vec<&'static str> {
    FORMATIONS.iter().map(|f| f.id).collect()
}

// Table keys are the plain decimal strings "1".."11"
fn slot_index(slot: &str) -> Option<usize> {
    let n: usize = slot.parse().ok()?;
    if (1..=11).contains(&n) && n.to_string() == slot {
        Some(n - 1)
    } else {
        None
    }
}
