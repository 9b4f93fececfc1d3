use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Failure of a single shorten request.
///
/// The UI only ever shows the display text of these, so the variants exist
/// for logging and tests rather than for recovery.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ShortenError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("{0}")]
    Api(String),
}

/// Convenience type alias for Results with AppError
pub type Result<T> = std::result::Result<T, AppError>;
