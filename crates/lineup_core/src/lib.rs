//! # lineup_core - Football Lineup Formation Core
//!
//! Turns a team lineup (players tagged with formation slots and match stats)
//! into positioned, annotated view-models ready for a pitch renderer.
//!
//! ## Features
//! - Static coordinate table for 23 formations (slots 1-11, 0-100 scale)
//! - Position label inference (GK, CB, RB, LB, CM, ST, RW, LW, CAM)
//! - Stat badges: goals, own goals, assists, cards, substitutions
//! - Deterministic output order (ascending formation slot)
//! - JSON API for host integrations

// Doc formatting lints - purely cosmetic
#![allow(clippy::doc_lazy_continuation)]

pub mod api;
pub mod card;
pub mod config;
pub mod error;
pub mod formation;
pub mod models;
pub mod stats;
pub mod transform;

pub use api::{transform_lineup_json, LineupRequest, LineupResponse};
pub use card::{
    badges, display_name, formation_display, Badge, CardGeometry, CardPlacement,
};
pub use config::{LineupConfig, CONFIG_PATH_ENV};
pub use error::{LineupError, Result};
pub use formation::{
    expand_formation_code, infer_position, lookup, supported_formations, FieldCoordinate,
    PositionLabel, DEFAULT_COORDINATE, DEFAULT_FORMATION,
};
pub use models::{LineupFormationPlayer, Player, PlayerStat, StatType, StatValue, TeamLineup};
pub use stats::{get_stat_value, has_stat};
pub use transform::{
    transform_lineup, transform_team_lineup, PhotoResolver, PhotoUrlTemplate, STARTING_XI,
};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const SCHEMA_VERSION: u8 = 1;
