use thiserror::Error;

pub type Result<T> = std::result::Result<T, CardwallError>;

#[derive(Debug, Error)]
pub enum CardwallError {
    #[error("Column not found: {0}")]
    ColumnNotFound(String),

    #[error("Card not found: {0}")]
    CardNotFound(String),

    #[error("Index {index} out of range in column {column} (length {len})")]
    IndexOutOfRange {
        column: String,
        index: usize,
        len: usize,
    },

    #[error("Dragged card mismatch in column {column} at index {index}: event carries {event}, board holds {board}")]
    DraggedCardMismatch {
        column: String,
        index: usize,
        event: String,
        board: String,
    },

    #[error("Duplicate column id: {0}")]
    DuplicateColumn(String),

    #[error("Card {0} is referenced more than once")]
    DuplicateCard(String),

    #[error("Card {0} is not referenced by any column")]
    OrphanCard(String),
}
