//! Score reporting boundary.
//!
//! Games emit a [`ScoreReport`] once per completed round; the embedding
//! application supplies a [`ScoreSink`] that carries it to the remote
//! scoring endpoint. Submission is fire-and-forget relative to gameplay:
//! failures are logged, never retried, and never surface back into game
//! state.

use matching_core::ScoreReport;
use std::collections::HashSet;
use thiserror::Error;
use uuid::Uuid;

/// Submission failure reported by a sink.
#[derive(Debug, Error)]
pub enum SubmitError {
    #[error("scoring endpoint rejected the submission: {0}")]
    Rejected(String),

    #[error("transport failure: {0}")]
    Transport(String),
}

/// Destination for completed-round scores. Implemented by the embedding
/// application; authentication and transport live there.
pub trait ScoreSink {
    fn submit(&mut self, report: &ScoreReport) -> Result<(), SubmitError>;
}

/// Outcome of a submission request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmissionStatus {
    Submitted,
    /// The sink failed; the failure was logged and will not be retried.
    Failed,
    /// This round was already submitted (or attempted); no-op.
    AlreadySubmitted,
}

/// Wraps a sink and enforces at most one submission attempt per round.
pub struct ScoreReporter<S: ScoreSink> {
    sink: S,
    attempted: HashSet<Uuid>,
}

impl<S: ScoreSink> ScoreReporter<S> {
    pub fn new(sink: S) -> Self {
        Self {
            sink,
            attempted: HashSet::new(),
        }
    }

    /// Submit a round's score once. Repeat calls for the same round id
    /// are no-ops, including after a failure — there is no automatic
    /// retry.
    pub fn submit_once(&mut self, report: &ScoreReport) -> SubmissionStatus {
        if !self.attempted.insert(report.round_id) {
            return SubmissionStatus::AlreadySubmitted;
        }
        match self.sink.submit(report) {
            Ok(()) => {
                tracing::info!(
                    round_id = %report.round_id,
                    percentage = report.percentage(),
                    "score submitted"
                );
                SubmissionStatus::Submitted
            }
            Err(error) => {
                tracing::warn!(
                    round_id = %report.round_id,
                    %error,
                    "score submission failed; round stays complete"
                );
                SubmissionStatus::Failed
            }
        }
    }

    pub fn into_inner(self) -> S {
        self.sink
    }
}
