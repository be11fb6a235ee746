//! Error types for the drawing-display workspace.

use thiserror::Error;

/// Result type alias using DrawingError.
pub type DrawingResult<T> = Result<T, DrawingError>;

/// Primary error type for drawing operations.
///
/// None of these are fatal to a draw pass: callers degrade to a solid line
/// or skip the offending primitive and keep rendering.
#[derive(Debug, Error)]
pub enum DrawingError {
    #[error("Line pattern not found: {0}")]
    PatternNotFound(String),

    #[error("Symbol pattern not found: {0}")]
    SymbolNotFound(String),

    #[error("Invalid pattern '{name}': {message}")]
    InvalidPattern { name: String, message: String },

    #[error("Backend sink rejected primitive: {0}")]
    SinkError(String),
}

impl From<serde_json::Error> for DrawingError {
    fn from(err: serde_json::Error) -> Self {
        DrawingError::InvalidPattern {
            name: "<json>".to_string(),
            message: err.to_string(),
        }
    }
}
