use thiserror::Error;

/// Errors raised at the fallible edges of the crate (JSON API, configuration).
///
/// The lineup transform itself never fails; malformed lineups degrade to
/// default coordinates or an empty result.
#[derive(Error, Debug)]
pub enum LineupError {
    #[error("Invalid JSON request: {0}")]
    InvalidRequest(String),

    #[error("Unsupported schema version: found {found}, expected {expected}")]
    UnsupportedSchemaVersion { found: u8, expected: u8 },

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Invalid config: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl LineupError {
    /// Whether the caller can fix the problem by correcting its input.
    pub fn is_input_error(&self) -> bool {
        match self {
            LineupError::InvalidRequest(_) => true,
            LineupError::UnsupportedSchemaVersion { .. } => true,
            LineupError::Config(_) => true,
            LineupError::Serialization(_) => false,
            LineupError::Io(_) => false,
        }
    }
}

impl From<serde_json::Error> for LineupError {
    fn from(err: serde_json::Error) -> Self {
        if err.is_data() || err.is_syntax() || err.is_eof() {
            LineupError::InvalidRequest(err.to_string())
        } else {
            LineupError::Serialization(err.to_string())
        }
    }
}

pub type Result<T> = std::result::Result<T, LineupError>;
