//! Term/definition matching engine for the agricultural-training games.
//!
//! Provides:
//! - Deck builder (paired term/definition cards, Fisher–Yates shuffle)
//! - Selection/drag controller unifying tap and drag input into one
//!   connection-attempt protocol
//! - Connection validation and scoring with move-count completion
//! - Connector geometry (cubic Bezier paths over measured layout)
//! - Round lifecycle with an injected audio session

pub mod audio;
pub mod controller;
pub mod deck;
pub mod error;
pub mod geometry;
pub mod session;
pub mod types;

pub use audio::{AudioSession, NullAudio};
pub use controller::{
    AttemptRequest, ControlOutcome, DragState, PointerInput, SelectionController,
};
pub use deck::Deck;
pub use error::{DeckError, Result};
pub use geometry::{
    connector_curve, curve_between, drag_preview, recompute_all, ConnectionCurve, CurveSpec,
    LayoutProbe, Point, Rect,
};
pub use session::{MatchSession, SessionEvent};
pub use types::{
    Card, CardId, CardView, Connection, Counters, EntryId, FeedbackKind, Phase, Role, ScoreReport,
    VocabEntry,
};
