use thiserror::Error;

pub type Result<T> = std::result::Result<T, BoardError>;

/// Reasons a board transition was not applied.
///
/// The engine never surfaces these to callers of its intent methods: a
/// rejected intent leaves the committed board untouched.
#[derive(Debug, Error)]
pub enum BoardError {
    #[error("List not found: {0}")]
    ListNotFound(String),

    #[error("Card {card} not found in list {list}")]
    CardNotFound { list: String, card: String },

    #[error("Text is empty after trimming")]
    EmptyText,

    #[error("Value is unchanged")]
    Unchanged,

    #[error("Drag was cancelled")]
    DragCancelled,

    #[error("Drag ended where it started")]
    NoMovement,

    #[error("Stale drag coordinates: {0}")]
    StaleDrag(String),

    #[error("Duplicate list ID: {0}")]
    DuplicateListId(String),

    #[error("Duplicate card ID: {0}")]
    DuplicateCardId(String),

    #[error("Invalid ID: {0:?}")]
    InvalidId(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}
