//! Mini-game catalogue for the agricultural-training platform.
//!
//! Provides:
//! - Multiple-choice quiz sessions
//! - Swipe-card classification game
//! - Event-driven round countdown
//! - Score reporting boundary (one submission per completed round)
//! - Built-in agricultural training content
//!
//! Every game follows the same shape as the matching engine in
//! `matching-core`: a session state machine with counters, transient
//! feedback, completion by attempt count, and a [`ScoreReport`] emitted
//! once per round.

pub mod classify;
pub mod error;
pub mod quiz;
pub mod score;
pub mod timer;
pub mod vocabulary;

pub use classify::{Bins, ClassifyCard, ClassifySession, SwipeDirection, SwipeRecord};
pub use error::{GameError, Result};
pub use matching_core::ScoreReport;
pub use quiz::{AnswerRecord, QuizQuestion, QuizSession};
pub use score::{ScoreReporter, ScoreSink, SubmissionStatus, SubmitError};
pub use timer::RoundTimer;
pub use vocabulary::{builtin_classification, builtin_quiz, builtin_vocabulary};
