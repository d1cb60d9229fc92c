//! Round session: lifecycle, connection validation, and scoring.

use crate::audio::{AudioSession, NullAudio};
use crate::controller::{ControlOutcome, DragState, PointerInput, SelectionController};
use crate::deck::Deck;
use crate::error::Result;
use crate::geometry::{self, ConnectionCurve, CurveSpec, LayoutProbe};
use crate::types::{
    CardId, CardView, Connection, Counters, FeedbackKind, Phase, Role, ScoreReport, VocabEntry,
};
use chrono::Utc;
use rand::Rng;
use uuid::Uuid;

/// What one pointer event did to the session.
#[derive(Debug, Clone, PartialEq)]
pub enum SessionEvent {
    /// Invalid or irrelevant input; nothing changed.
    Ignored,
    /// The armed selection changed (or cleared, on `None`).
    SelectionChanged(Option<CardId>),
    /// The live drag pointer moved.
    PointerMoved,
    /// A connection was recorded.
    Connected(Connection),
    /// The final connection was recorded and the round is complete.
    Completed(Connection),
}

/// One play-through of the matching game, from deck build to
/// all-cards-attempted.
///
/// All transitions happen on discrete input events, processed strictly
/// sequentially; nothing here blocks.
pub struct MatchSession {
    round_id: Uuid,
    phase: Phase,
    vocabulary: Vec<VocabEntry>,
    deck: Deck,
    controller: SelectionController,
    connections: Vec<Connection>,
    counters: Counters,
    feedback: Option<FeedbackKind>,
    audio: Box<dyn AudioSession>,
}

impl MatchSession {
    pub fn new(vocabulary: Vec<VocabEntry>) -> Self {
        Self {
            round_id: Uuid::new_v4(),
            phase: Phase::NotStarted,
            vocabulary,
            deck: Deck::default(),
            controller: SelectionController::default(),
            connections: Vec::new(),
            counters: Counters::default(),
            feedback: None,
            audio: Box::new(NullAudio),
        }
    }

    /// Attach an audio session; started and stopped on lifecycle
    /// transitions.
    pub fn with_audio(mut self, audio: Box<dyn AudioSession>) -> Self {
        self.audio = audio;
        self
    }

    /// Build the deck and begin playing. No-op unless the session is
    /// `NotStarted`; use [`reset`](Self::reset) to restart a round.
    pub fn start<R: Rng>(&mut self, rng: &mut R) -> Result<()> {
        if self.phase != Phase::NotStarted {
            return Ok(());
        }
        self.deck = Deck::build(&self.vocabulary, rng)?;
        self.phase = Phase::Playing;
        self.audio.start();
        tracing::info!(round_id = %self.round_id, pairs = self.deck.pair_count(), "round started");
        Ok(())
    }

    /// Rebuild the deck and discard all connections, counters, and
    /// selection state. Nothing carries over between rounds.
    pub fn reset<R: Rng>(&mut self, rng: &mut R) -> Result<()> {
        let deck = Deck::build(&self.vocabulary, rng)?;
        if self.phase == Phase::Playing {
            self.audio.stop();
        }
        self.deck = deck;
        self.round_id = Uuid::new_v4();
        self.controller.reset();
        self.connections.clear();
        self.counters = Counters::default();
        self.feedback = None;
        self.phase = Phase::Playing;
        self.audio.start();
        tracing::info!(round_id = %self.round_id, "round reset");
        Ok(())
    }

    /// Apply one pointer event (from either input adapter).
    pub fn handle_input(&mut self, input: PointerInput) -> SessionEvent {
        if self.phase != Phase::Playing {
            return SessionEvent::Ignored;
        }
        match self.controller.handle(&self.deck, input) {
            ControlOutcome::Ignored => SessionEvent::Ignored,
            ControlOutcome::Armed(card) => SessionEvent::SelectionChanged(Some(card)),
            ControlOutcome::Disarmed => SessionEvent::SelectionChanged(None),
            ControlOutcome::PointerMoved => SessionEvent::PointerMoved,
            ControlOutcome::Attempt(request) => {
                match self.attempt_connection(request.term, request.definition) {
                    Some(connection) if self.phase == Phase::Complete => {
                        SessionEvent::Completed(connection)
                    }
                    Some(connection) => SessionEvent::Connected(connection),
                    None => SessionEvent::Ignored,
                }
            }
        }
    }

    /// Validate and record a pairing attempt.
    ///
    /// Returns `None` for invalid attempts (unknown cards, wrong roles,
    /// already-connected endpoints): no move is recorded and state is
    /// unchanged. Valid attempts always count as a move, correct or not.
    pub fn attempt_connection(&mut self, term: CardId, definition: CardId) -> Option<Connection> {
        if self.phase != Phase::Playing {
            return None;
        }
        let term_card = self.deck.card(term).filter(|c| !c.connected)?;
        let definition_card = self.deck.card(definition).filter(|c| !c.connected)?;
        if term_card.role() != Role::Term || definition_card.role() != Role::Definition {
            return None;
        }

        let is_correct = term_card.entry() == definition_card.entry();
        let connection = Connection {
            term_card: term,
            definition_card: definition,
            is_correct,
            created_at: Utc::now(),
        };

        self.counters.moves += 1;
        self.connections.push(connection.clone());
        self.deck.mark_connected(term);
        self.deck.mark_connected(definition);
        if is_correct {
            self.counters.correct += 1;
            self.feedback = Some(FeedbackKind::Correct);
        } else {
            self.counters.incorrect += 1;
            self.feedback = Some(FeedbackKind::Incorrect);
        }
        self.controller.reset();

        tracing::debug!(
            round_id = %self.round_id,
            term = %term,
            definition = %definition,
            is_correct,
            moves = self.counters.moves,
            "connection recorded"
        );

        // Completion is strictly move-count based: one attempt per pair,
        // correct or not.
        if self.counters.moves as usize == self.deck.pair_count() {
            self.phase = Phase::Complete;
            self.audio.stop();
            tracing::info!(
                round_id = %self.round_id,
                correct = self.counters.correct,
                incorrect = self.counters.incorrect,
                "round complete"
            );
        }

        Some(connection)
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn round_id(&self) -> Uuid {
        self.round_id
    }

    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    pub fn connections(&self) -> &[Connection] {
        &self.connections
    }

    pub fn counters(&self) -> Counters {
        self.counters
    }

    pub fn armed(&self) -> Option<CardId> {
        self.controller.armed()
    }

    pub fn drag_state(&self) -> Option<&DragState> {
        self.controller.drag()
    }

    /// Latest transient feedback, if the presentation layer has not
    /// cleared it yet.
    pub fn feedback(&self) -> Option<FeedbackKind> {
        self.feedback
    }

    /// Clear the transient feedback signal. Called by the presentation
    /// layer after its display delay.
    pub fn clear_feedback(&mut self) {
        self.feedback = None;
    }

    /// Fraction of attempts that were correct so far.
    pub fn accuracy(&self) -> f64 {
        if self.counters.moves == 0 {
            0.0
        } else {
            self.counters.correct as f64 / self.counters.moves as f64
        }
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
            total: self.deck.pair_count() as u32,
        })
    }

    /// Presentation projection of every card, terms first.
    pub fn card_views(&self) -> Vec<CardView> {
        let armed = self.controller.armed();
        self.deck
            .cards()
            .map(|card| CardView {
                card_id: card.card_id,
                role: card.role(),
                label: card.label.clone(),
                icon: card.icon.clone(),
                connected: card.connected,
                selected: armed == Some(card.card_id),
            })
            .collect()
    }

    /// Recompute connector geometry for every resolved connection
    /// against current layout. Safe to call redundantly on resize and
    /// scroll events.
    pub fn connection_curves(&self, probe: &impl LayoutProbe) -> Vec<ConnectionCurve> {
        geometry::recompute_all(&self.connections, probe)
    }

    /// The in-progress curve from the dragged card to the live pointer,
    /// if a drag is active.
    pub fn drag_curve(&self, probe: &impl LayoutProbe) -> Option<CurveSpec> {
        let drag = self.controller.drag()?;
        geometry::drag_preview(drag.card, drag.pointer, probe)
    }
}
