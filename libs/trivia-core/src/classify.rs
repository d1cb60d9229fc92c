//! Swipe-card classification game.
//!
//! The player sorts a stack of cards into two bins by swiping left or
//! right; each card gets exactly one attempt and the round completes
//! when the stack is empty.

use crate::error::{GameError, Result};
use chrono::{DateTime, Utc};
use matching_core::{AudioSession, Counters, FeedbackKind, NullAudio, Phase, ScoreReport};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A card to be classified into one of the two bins.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassifyCard {
    pub id: i64,
    pub label: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    /// Must equal one of the bin labels.
    pub category: String,
}

/// The two swipe targets.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Bins {
    pub left: String,
    pub right: String,
}

impl Bins {
    pub fn new(left: impl Into<String>, right: impl Into<String>) -> Self {
        Self {
            left: left.into(),
            right: right.into(),
        }
    }

    fn label(&self, direction: SwipeDirection) -> &str {
        match direction {
            SwipeDirection::Left => &self.left,
            SwipeDirection::Right => &self.right,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SwipeDirection {
    Left,
    Right,
}

/// A recorded swipe.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SwipeRecord {
    pub card: i64,
    pub direction: SwipeDirection,
    pub is_correct: bool,
    pub swiped_at: DateTime<Utc>,
}

/// One play-through of the classification game.
pub struct ClassifySession {
    round_id: Uuid,
    phase: Phase,
    bins: Bins,
    cards: Vec<ClassifyCard>,
    current: usize,
    swipes: Vec<SwipeRecord>,
    counters: Counters,
    feedback: Option<FeedbackKind>,
    audio: Box<dyn AudioSession>,
}

impl ClassifySession {
    /// Validate that every card's category matches a bin and create a
    /// session.
    pub fn new(bins: Bins, cards: Vec<ClassifyCard>) -> Result<Self> {
        if cards.is_empty() {
            return Err(GameError::EmptyCardList);
        }
        for card in &cards {
            if card.category != bins.left && card.category != bins.right {
                return Err(GameError::UnknownCategory {
                    id: card.id,
                    category: card.category.clone(),
                });
            }
        }
        Ok(Self {
            round_id: Uuid::new_v4(),
            phase: Phase::NotStarted,
            bins,
            cards,
            current: 0,
            swipes: Vec::new(),
            counters: Counters::default(),
            feedback: None,
            audio: Box::new(NullAudio),
        })
    }

    /// Attach an audio session; started and stopped on lifecycle
    /// transitions.
    pub fn with_audio(mut self, audio: Box<dyn AudioSession>) -> Self {
        self.audio = audio;
        self
    }

    pub fn start(&mut self) {
        if self.phase != Phase::NotStarted {
            return;
        }
        self.phase = Phase::Playing;
        self.audio.start();
        tracing::info!(round_id = %self.round_id, cards = self.cards.len(), "classification started");
    }

    /// Restart from the top of the stack, discarding all swipes.
    pub fn reset(&mut self) {
        if self.phase == Phase::Playing {
            self.audio.stop();
        }
        self.round_id = Uuid::new_v4();
        self.current = 0;
        self.swipes.clear();
        self.counters = Counters::default();
        self.feedback = None;
        self.phase = Phase::Playing;
        self.audio.start();
    }

    /// The card currently on top of the stack.
    pub fn current_card(&self) -> Option<&ClassifyCard> {
        if self.phase != Phase::Playing {
            return None;
        }
        self.cards.get(self.current)
    }

    /// Swipe the current card into a bin. Ignored outside of play.
    pub fn swipe(&mut self, direction: SwipeDirection) -> Option<SwipeRecord> {
        if self.phase != Phase::Playing {
            return None;
        }
        let card = self.cards.get(self.current)?;

        let is_correct = card.category == self.bins.label(direction);
        let record = SwipeRecord {
            card: card.id,
            direction,
            is_correct,
            swiped_at: Utc::now(),
        };

        self.counters.moves += 1;
        self.swipes.push(record.clone());
        if is_correct {
            self.counters.correct += 1;
            self.feedback = Some(FeedbackKind::Correct);
        } else {
            self.counters.incorrect += 1;
            self.feedback = Some(FeedbackKind::Incorrect);
        }
        self.current += 1;

        if self.current == self.cards.len() {
            self.phase = Phase::Complete;
            self.audio.stop();
            tracing::info!(
                round_id = %self.round_id,
                correct = self.counters.correct,
                "classification complete"
            );
        }

        Some(record)
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn round_id(&self) -> Uuid {
        self.round_id
    }

    pub fn bins(&self) -> &Bins {
        &self.bins
    }

    pub fn swipes(&self) -> &[SwipeRecord] {
        &self.swipes
    }

    pub fn counters(&self) -> Counters {
        self.counters
    }

    pub fn feedback(&self) -> Option<FeedbackKind> {
        self.feedback
    }

    pub fn clear_feedback(&mut self) {
        self.feedback = None;
    }

    /// Score summary for a completed round; `None` while playing.
    pub fn score_report(&self) -> Option<ScoreReport> {
        if self.phase != Phase::Complete {
            return None;
        }
        Some(ScoreReport {
            round_id: self.round_id,
            attempted: self.counters.moves,
            correct: self.counters.correct,
            total: self.cards.len() as u32,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn bins() -> Bins {
        Bins::new("crop", "livestock")
    }

    fn cards() -> Vec<ClassifyCard> {
        vec![
            ClassifyCard {
                id: 1,
                label: "Barley".into(),
                icon: None,
                category: "crop".into(),
            },
            ClassifyCard {
                id: 2,
                label: "Holstein".into(),
                icon: None,
                category: "livestock".into(),
            },
        ]
    }

    fn playing() -> ClassifySession {
        let mut session = ClassifySession::new(bins(), cards()).unwrap();
        session.start();
        session
    }

    #[test]
    fn swipes_score_against_the_chosen_bin() {
        let mut session = playing();

        assert_eq!(session.current_card().unwrap().id, 1);
        assert!(session.swipe(SwipeDirection::Left).unwrap().is_correct);
        assert!(!session.swipe(SwipeDirection::Left).unwrap().is_correct);

        assert_eq!(session.phase(), Phase::Complete);
        let report = session.score_report().unwrap();
        assert_eq!((report.attempted, report.correct, report.total), (2, 1, 2));
    }

    #[test]
    fn swipes_outside_of_play_are_ignored() {
        let mut session = ClassifySession::new(bins(), cards()).unwrap();
        assert!(session.swipe(SwipeDirection::Left).is_none());

        session.start();
        session.swipe(SwipeDirection::Left);
        session.swipe(SwipeDirection::Right);
        assert!(session.swipe(SwipeDirection::Left).is_none());
        assert_eq!(session.counters().moves, 2);
    }

    #[test]
    fn reset_returns_to_the_top_of_the_stack() {
        let mut session = playing();
        session.swipe(SwipeDirection::Right);

        session.reset();
        assert_eq!(session.current_card().unwrap().id, 1);
        assert!(session.swipes().is_empty());
        assert_eq!(session.counters(), Counters::default());
    }

    #[test]
    fn unknown_category_is_rejected_at_build() {
        let mut bad = cards();
        bad[0].category = "machinery".into();
        assert!(matches!(
            ClassifySession::new(bins(), bad),
            Err(GameError::UnknownCategory { id: 1, .. })
        ));
        assert!(matches!(
            ClassifySession::new(bins(), Vec::new()),
            Err(GameError::EmptyCardList)
        ));
    }
}
