use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::{LineupError, Result};
use crate::models::{LineupFormationPlayer, TeamLineup};
use crate::transform::{transform_lineup, PhotoResolver, PhotoUrlTemplate};
use crate::SCHEMA_VERSION;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineupRequest {
    pub schema_version: u8,
    pub lineup: TeamLineup,
    /// Formation identifier overriding the lineup's own code, e.g. "4-2-3-1"
    #[serde(default)]
    pub formation: Option<String>,
    /// Photo URL template containing `{playerId}`
    #[serde(default)]
    pub photo_url_template: Option<String>,
}

impl LineupRequest {
    pub fn new(lineup: TeamLineup) -> Self {
        Self { schema_version: SCHEMA_VERSION, lineup, formation: None, photo_url_template: None }
    }

    /// Formation the players will be laid out on.
    pub fn formation_id(&self) -> String {
        match self.formation.as_deref() {
            Some(id) if !id.is_empty() => id.to_string(),
            _ => self.lineup.formation_id(),
        }
    }

    pub fn respond(&self) -> LineupResponse {
        let formation = self.formation_id();
        let template = self.photo_url_template.as_deref().map(PhotoUrlTemplate::new);
        let resolver = template.as_ref().map(|t| t as &dyn PhotoResolver);

        let players = transform_lineup(&self.lineup, &formation, resolver);
        LineupResponse { schema_version: SCHEMA_VERSION, formation, players }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct LineupResponse {
    pub schema_version: u8,
    pub formation: String,
    pub players: Vec<LineupFormationPlayer>,
}

impl LineupResponse {
    /// Generate JSON schema for the response structure
    pub fn json_schema() -> schemars::schema::RootSchema {
        schemars::schema_for!(LineupResponse)
    }
}

/// Transform a lineup request given as JSON and return the positioned
/// players as JSON.
///
/// Only malformed requests are errors; a lineup with fewer than eleven
/// starters returns an empty `players` array.
pub fn transform_lineup_json(request_json: &str) -> Result<String> {
    let request: LineupRequest = serde_json::from_str(request_json)
        .map_err(|e| LineupError::InvalidRequest(e.to_string()))?;

    if request.schema_version != SCHEMA_VERSION {
        return Err(LineupError::UnsupportedSchemaVersion {
            found: request.schema_version,
            expected: SCHEMA_VERSION,
        });
    }

    serde_json::to_string(&request.respond())
        .map_err(|e| LineupError::Serialization(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};

    fn generate_players(count: usize) -> Value {
        let players: Vec<Value> = (1..=count)
            .map(|slot| {
                let position = if slot == 1 { "Goalkeeper" } else { "Outfield" };
                json!({
                    "playerId": format!("{}", slot),
                    "matchName": format!("Player {}", slot),
                    "shirtNumber": slot,
                    "rating": "7.0",
                    "position": position,
                    "formationPlace": slot.to_string(),
                    "stats": []
                })
            })
            .collect();
        Value::Array(players)
    }

    #[test]
    fn test_basic_transform() {
        let request = json!({
            "schemaVersion": 1,
            "lineup": { "players": generate_players(11), "formationUsed": "433" }
        });

        let result = transform_lineup_json(&request.to_string()).unwrap();
        let parsed: Value = serde_json::from_str(&result).unwrap();

        assert_eq!(parsed["schemaVersion"], 1);
        assert_eq!(parsed["formation"], "4-3-3");
        assert_eq!(parsed["players"].as_array().unwrap().len(), 11);
        assert_eq!(parsed["players"][0]["position"], "GK");
        assert_eq!(parsed["players"][9]["position"], "RW");
        assert_eq!(parsed["players"][0]["photo"], "");
        assert_eq!(parsed["players"][0]["isScorer"], false);
    }

    #[test]
    fn test_formation_override_and_photo_template() {
        let request = json!({
            "schemaVersion": 1,
            "lineup": { "players": generate_players(11), "formationUsed": "433" },
            "formation": "4-2-3-1",
            "photoUrlTemplate": "https://img/{playerId}.png"
        });

        let result = transform_lineup_json(&request.to_string()).unwrap();
        let parsed: Value = serde_json::from_str(&result).unwrap();

        assert_eq!(parsed["formation"], "4-2-3-1");
        assert_eq!(parsed["players"][9]["position"], "CAM");
        assert_eq!(parsed["players"][4]["photo"], "https://img/5.png");
    }

    #[test]
    fn test_incomplete_lineup_is_not_an_error() {
        let request = json!({
            "schemaVersion": 1,
            "lineup": { "players": generate_players(10), "formationUsed": "442" }
        });

        let result = transform_lineup_json(&request.to_string()).unwrap();
        let parsed: Value = serde_json::from_str(&result).unwrap();
        assert!(parsed["players"].as_array().unwrap().is_empty());
    }

    #[test]
    fn test_rejects_bad_schema_version() {
        let request = json!({ "schemaVersion": 2, "lineup": { "players": [] } });
        let err = transform_lineup_json(&request.to_string()).unwrap_err();
        assert!(matches!(err, LineupError::UnsupportedSchemaVersion { found: 2, expected: 1 }));
    }

    #[test]
    fn test_rejects_malformed_json() {
        let err = transform_lineup_json("{\"schemaVersion\": 1").unwrap_err();
        assert!(matches!(err, LineupError::InvalidRequest(_)));

        let err = transform_lineup_json(r#"{ "schemaVersion": 1 }"#).unwrap_err();
        assert!(matches!(err, LineupError::InvalidRequest(_)));
    }

    #[test]
    fn test_response_validates_against_schema() {
        let request = json!({
            "schemaVersion": 1,
            "lineup": { "players": generate_players(11), "formationUsed": "352" }
        });
        let result = transform_lineup_json(&request.to_string()).unwrap();
        let instance: Value = serde_json::from_str(&result).unwrap();

        let schema = serde_json::to_value(LineupResponse::json_schema()).unwrap();
        let compiled = jsonschema::JSONSchema::compile(&schema).unwrap();
        assert!(compiled.is_valid(&instance));
    }
}
