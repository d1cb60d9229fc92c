//! Core types for the matching engine.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Identity of a vocabulary entry.
pub type EntryId = i64;

/// Which side of a pairing a card belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Term,
    Definition,
}

impl Role {
    /// The role a card of this role pairs with.
    pub fn opposite(self) -> Self {
        match self {
            Self::Term => Self::Definition,
            Self::Definition => Self::Term,
        }
    }
}

/// Identity of a rendered card instance.
///
/// A vocabulary entry produces two cards (one per role); the pair
/// `(role, entry)` disambiguates them deterministically, so card ids are
/// stable across rebuilds of the same vocabulary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CardId {
    pub role: Role,
    pub entry: EntryId,
}

impl CardId {
    pub fn term(entry: EntryId) -> Self {
        Self {
            role: Role::Term,
            entry,
        }
    }

    pub fn definition(entry: EntryId) -> Self {
        Self {
            role: Role::Definition,
            entry,
        }
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.role {
            Role::Term => write!(f, "term-{}", self.entry),
            Role::Definition => write!(f, "definition-{}", self.entry),
        }
    }
}

/// A vocabulary entry supplied by the embedding application.
///
/// Entry ids are assumed unique; the deck builder rejects duplicates but
/// performs no further validation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VocabEntry {
    pub id: EntryId,
    pub term: String,
    pub definition: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
}

/// One rendered card. Immutable within a round except for `connected`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Card {
    pub card_id: CardId,
    pub label: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    pub connected: bool,
}

impl Card {
    pub fn role(&self) -> Role {
        self.card_id.role
    }

    pub fn entry(&self) -> EntryId {
        self.card_id.entry
    }
}

/// A completed pairing attempt. Append-only: once recorded it is never
/// revised or removed within a round.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Connection {
    pub term_card: CardId,
    pub definition_card: CardId,
    pub is_correct: bool,
    pub created_at: DateTime<Utc>,
}

/// Attempt counters for a round.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Counters {
    /// Number of attempts; always equals the connection count.
    pub moves: u32,
    pub correct: u32,
    pub incorrect: u32,
}

/// Transient feedback signal after an attempt. The presentation layer
/// clears it after a short delay; the core only records the latest kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FeedbackKind {
    Correct,
    Incorrect,
}

/// Round lifecycle phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    NotStarted,
    Playing,
    Complete,
}

/// Score summary emitted once per completed round.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoreReport {
    pub round_id: Uuid,
    pub attempted: u32,
    pub correct: u32,
    pub total: u32,
}

impl ScoreReport {
    /// Fraction of attempts that were correct, in `[0.0, 1.0]`.
    pub fn accuracy(&self) -> f64 {
        if self.attempted == 0 {
            0.0
        } else {
            self.correct as f64 / self.attempted as f64
        }
    }

    /// Score as a percentage of the full round, in `[0.0, 100.0]`.
    pub fn percentage(&self) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            self.correct as f64 / self.total as f64 * 100.0
        }
    }
}

/// Presentation projection of a card: everything the UI needs to render
/// it, nothing it can mutate.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CardView {
    pub card_id: CardId,
    pub role: Role,
    pub label: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    pub connected: bool,
    pub selected: bool,
}
