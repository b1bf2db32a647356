use thiserror::Error;

/// Main error type for the fallible edges of the DSL
///
/// Rendering a node never fails; errors come from text conversion, config
/// loading and decoding responses from raw JSON text.
#[derive(Error, Debug)]
pub enum DslError {
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("Invalid geo point: {0:?}, expected \"lat,lon\"")]
    InvalidGeoPoint(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

/// Result type alias for DSL operations
pub type Result<T> = std::result::Result<T, DslError>;

impl DslError {
    /// Check if the error was caused by malformed input text
    pub fn is_parse_error(&self) -> bool {
        matches!(
            self,
            DslError::Json(_) | DslError::InvalidResponse(_) | DslError::InvalidGeoPoint(_)
        )
    }
}
