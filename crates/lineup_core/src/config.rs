use std::{env, fs, path::Path};

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::card::CardGeometry;
use crate::error::{LineupError, Result};
use crate::formation::{is_supported_formation, DEFAULT_FORMATION};
use crate::transform::PhotoUrlTemplate;

/// Environment variable naming a JSON config file.
pub const CONFIG_PATH_ENV: &str = "LINEUP_CONFIG_PATH";

/// Rendering defaults shared by the CLI and host integrations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase", default)]
pub struct LineupConfig {
    /// Used when a lineup carries no formation code
    #[validate(length(min = 1))]
    pub default_formation: String,
    /// e.g. "https://cdn.example.com/players/{playerId}.png"
    pub photo_url_template: Option<String>,
    #[validate(range(min = 1.0))]
    pub field_width: f32,
    #[validate(range(min = 1.0))]
    pub field_height: f32,
    #[validate(range(min = 1.0))]
    pub card_width: f32,
    #[validate(range(min = 1.0))]
    pub card_height: f32,
}

impl Default for LineupConfig {
    fn default() -> Self {
        let geometry = CardGeometry::default();
        Self {
            default_formation: DEFAULT_FORMATION.to_string(),
            photo_url_template: None,
            field_width: geometry.field_width,
            field_height: geometry.field_height,
            card_width: geometry.card_width,
            card_height: geometry.card_height,
        }
    }
}

impl LineupConfig {
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)
            .map_err(|e| LineupError::Config(format!("failed to parse config JSON: {e}")))?;
        config.check()?;
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        Self::from_json(&content)
    }

    /// Load from the file named by [`CONFIG_PATH_ENV`]; defaults when unset.
    pub fn from_env() -> Result<Self> {
        Self::from_env_var(CONFIG_PATH_ENV)
    }

    fn from_env_var(var: &str) -> Result<Self> {
        let Ok(path) = env::var(var) else {
            return Ok(Self::default());
        };

        let path = path.trim();
        if path.is_empty() {
            return Ok(Self::default());
        }

        log::debug!("loading lineup config from {var}='{path}'");
        Self::load(path).map_err(|e| match e {
            LineupError::Io(io) => {
                LineupError::Config(format!("failed to read config file from {var}='{path}': {io}"))
            }
            other => other,
        })
    }

    fn check(&self) -> Result<()> {
        self.validate().map_err(|e| LineupError::Config(e.to_string()))?;

        if !is_supported_formation(&self.default_formation) {
            log::warn!(
                "default formation '{}' has no coordinate table, players will be centred",
                self.default_formation
            );
        }
        Ok(())
    }

    pub fn geometry(&self) -> CardGeometry {
        CardGeometry {
            field_width: self.field_width,
            field_height: self.field_height,
            card_width: self.card_width,
            card_height: self.card_height,
        }
    }

    pub fn photo_resolver(&self) -> Option<PhotoUrlTemplate> {
        self.photo_url_template.as_deref().filter(|t| !t.is_empty()).map(PhotoUrlTemplate::new)
    }
}
