//! Selection and drag input handling.
//!
//! One state machine over a single card-selection slot serves both input
//! modalities. Tap and drag events are normalized into the same tagged
//! [`AttemptRequest`] before validation, so the rest of the engine never
//! distinguishes tap-origin from drag-origin attempts.

use crate::deck::Deck;
use crate::geometry::Point;
use crate::types::{Card, CardId, Role};
use serde::{Deserialize, Serialize};

/// A pointer event from either input adapter (tap or drag).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind")]
pub enum PointerInput {
    /// Tap/click on a card.
    Tap { card: CardId },
    /// Drag gesture started on a card. Only Term cards are draggable.
    DragStart { card: CardId, at: Point },
    /// Pointer moved while a drag is active. Fires at high frequency.
    DragMove { at: Point },
    /// Drag released. `target` is the card under the pointer, if any.
    Drop { target: Option<CardId> },
    /// Drag aborted (pointer capture lost, escape, leaving the surface).
    Cancel,
}

/// An active drag: the dragged Term card plus the live pointer position,
/// in container-relative coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DragState {
    pub card: CardId,
    pub pointer: Point,
}

/// A normalized connection attempt, always (term, definition) regardless
/// of which card was armed first or which modality produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttemptRequest {
    pub term: CardId,
    pub definition: CardId,
}

impl AttemptRequest {
    /// Order two opposite-role cards into (term, definition).
    fn normalize(armed: CardId, other: CardId) -> Self {
        match armed.role {
            Role::Term => Self {
                term: armed,
                definition: other,
            },
            Role::Definition => Self {
                term: other,
                definition: armed,
            },
        }
    }
}

/// What a pointer event did to the controller.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ControlOutcome {
    /// Invalid or irrelevant input; state unchanged.
    Ignored,
    /// A card became the armed selection.
    Armed(CardId),
    /// The selection was cleared without an attempt.
    Disarmed,
    /// The live drag pointer moved.
    PointerMoved,
    /// Both halves of a pairing were offered; hand off to the validator.
    Attempt(AttemptRequest),
}

/// State machine over the single selection slot.
#[derive(Debug, Clone, Default)]
pub struct SelectionController {
    armed: Option<CardId>,
    drag: Option<DragState>,
}

impl SelectionController {
    pub fn armed(&self) -> Option<CardId> {
        self.armed
    }

    pub fn drag(&self) -> Option<&DragState> {
        self.drag.as_ref()
    }

    /// Return to `Idle`, dropping any selection or drag.
    pub fn reset(&mut self) {
        self.armed = None;
        self.drag = None;
    }

    /// Apply one pointer event against the current deck.
    pub fn handle(&mut self, deck: &Deck, input: PointerInput) -> ControlOutcome {
        match input {
            PointerInput::Tap { card } => self.on_tap(deck, card),
            PointerInput::DragStart { card, at } => self.on_drag_start(deck, card, at),
            PointerInput::DragMove { at } => self.on_drag_move(at),
            PointerInput::Drop { target } => self.on_drop(deck, target),
            PointerInput::Cancel => self.on_cancel(),
        }
    }

    fn on_tap(&mut self, deck: &Deck, card_id: CardId) -> ControlOutcome {
        // Taps are pointer-up events; an in-flight drag owns the pointer.
        if self.drag.is_some() {
            return ControlOutcome::Ignored;
        }
        let Some(card) = selectable(deck, card_id) else {
            return ControlOutcome::Ignored;
        };

        match self.armed {
            None => {
                self.armed = Some(card.card_id);
                ControlOutcome::Armed(card.card_id)
            }
            Some(armed) if armed == card.card_id => {
                self.armed = None;
                ControlOutcome::Disarmed
            }
            Some(armed) if armed.role == card.role() => {
                // Same-role tap replaces the selection. Default policy,
                // not load-bearing; does not count as a move.
                self.armed = Some(card.card_id);
                ControlOutcome::Armed(card.card_id)
            }
            Some(armed) => {
                self.armed = None;
                ControlOutcome::Attempt(AttemptRequest::normalize(armed, card.card_id))
            }
        }
    }

    fn on_drag_start(&mut self, deck: &Deck, card_id: CardId, at: Point) -> ControlOutcome {
        if card_id.role != Role::Term || selectable(deck, card_id).is_none() {
            return ControlOutcome::Ignored;
        }
        // A drag replaces any tap-armed selection.
        self.armed = Some(card_id);
        self.drag = Some(DragState {
            card: card_id,
            pointer: at,
        });
        ControlOutcome::Armed(card_id)
    }

    fn on_drag_move(&mut self, at: Point) -> ControlOutcome {
        match self.drag.as_mut() {
            Some(drag) => {
                drag.pointer = at;
                ControlOutcome::PointerMoved
            }
            None => ControlOutcome::Ignored,
        }
    }

    fn on_drop(&mut self, deck: &Deck, target: Option<CardId>) -> ControlOutcome {
        let Some(drag) = self.drag.take() else {
            return ControlOutcome::Ignored;
        };
        self.armed = None;

        let dropped_on = target.and_then(|id| selectable(deck, id));
        match dropped_on {
            Some(card) if card.role() == Role::Definition => ControlOutcome::Attempt(
                AttemptRequest::normalize(drag.card, card.card_id),
            ),
            // Anything else cancels the drag without recording a move.
            _ => ControlOutcome::Disarmed,
        }
    }

    fn on_cancel(&mut self) -> ControlOutcome {
        if self.armed.is_none() && self.drag.is_none() {
            return ControlOutcome::Ignored;
        }
        self.reset();
        ControlOutcome::Disarmed
    }
}

/// A card that exists and is not yet part of a connection.
fn selectable(deck: &Deck, id: CardId) -> Option<&Card> {
    deck.card(id).filter(|card| !card.connected)
}
