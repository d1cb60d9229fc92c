//! Error types for trivia-core.

use thiserror::Error;

/// Result type alias using GameError.
pub type Result<T> = std::result::Result<T, GameError>;

/// Errors that can occur while building a game session. As in the
/// matching engine, gameplay input itself never errors; invalid answers
/// and swipes are silent no-ops.
#[derive(Debug, Error)]
pub enum GameError {
    #[error("empty question list")]
    EmptyQuestionList,

    #[error("question {id} has no choices")]
    NoChoices { id: i64 },

    #[error("question {id} marks choice {index} correct but has {len} choices")]
    CorrectOutOfRange { id: i64, index: usize, len: usize },

    #[error("empty card list")]
    EmptyCardList,

    #[error("card {id} has category {category:?}, which is not one of the bins")]
    UnknownCategory { id: i64, category: String },
}
