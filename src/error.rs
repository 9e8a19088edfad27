use thiserror::Error;

/// Reasons a grid size entered by the user is rejected
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GridSizeError {
    #[error("Size can not be empty")]
    Empty,

    #[error("'{0}' is not a whole number")]
    NotANumber(String),

    #[error("{value} is outside {min}..={max}")]
    OutOfRange { value: i64, min: usize, max: usize },
}

/// A color string that is not `#rrggbb` (or `#rgb`)
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Invalid hex color: '{0}'")]
pub struct ColorParseError(pub String);

/// Errors that can occur while loading a [`crate::config::SketchConfig`]
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse config: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid config: {0}")]
    Invalid(String),
}

/// Result type for config operations
pub type ConfigResult<T> = Result<T, ConfigError>;
