use thiserror::Error;

/// StudyLog error types
#[derive(Error, Debug)]
pub enum StudyLogError {
    #[error("Invalid input: {0}")]
    Validation(#[from] ValidationError),

    #[error("No entries to act on")]
    NoRows,

    #[error("Selection cancelled")]
    SelectionCancelled,

    #[error("Storage error: {0}")]
    Storage(#[from] rusqlite::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parsing error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Rejected user input
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Please enter your study time in minutes.")]
    Empty,

    #[error("Please enter in half-width numbers.")]
    NotNumeric,

    #[error("Study time must be at least 1 minute.")]
    Zero,

    #[error("It's exceeding the time on a day.")]
    ExceedsDay,

    #[error("Unknown genre '{0}'")]
    UnknownGenre(String),

    #[error("Invalid date '{0}'")]
    InvalidDate(String),
}

/// Result type for StudyLog operations
pub type Result<T> = std::result::Result<T, StudyLogError>;
