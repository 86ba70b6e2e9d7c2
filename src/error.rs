#[derive(Debug, thiserror::Error)]
pub enum DeckcheckError {
    #[error("Card not found: {0}")]
    CardNotFound(String),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, DeckcheckError>;
