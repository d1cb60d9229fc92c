//! Error types for matching-core.

use crate::types::EntryId;
use thiserror::Error;

/// Result type alias using DeckError.
pub type Result<T> = std::result::Result<T, DeckError>;

/// Errors that can occur while building a deck.
///
/// Gameplay never produces errors: invalid attempts (connected targets,
/// stale drags, out-of-phase input) are rejected silently as no-ops.
#[derive(Debug, Error)]
pub enum DeckError {
    #[error("empty vocabulary")]
    EmptyVocabulary,

    #[error("duplicate vocabulary entry id {id}")]
    DuplicateEntry { id: EntryId },
}
