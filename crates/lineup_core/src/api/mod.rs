pub mod json_api;

pub use json_api::{transform_lineup_json, LineupRequest, LineupResponse};
