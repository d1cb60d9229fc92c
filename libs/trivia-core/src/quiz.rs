//! Multiple-choice quiz sessions.
//!
//! Same session shape as the matching game: a fixed question list, one
//! attempt per question, counters, transient feedback, and completion by
//! attempt count.

use crate::error::{GameError, Result};
use chrono::{DateTime, Utc};
use matching_core::{AudioSession, Counters, FeedbackKind, NullAudio, Phase, ScoreReport};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One multiple-choice question.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuizQuestion {
    pub id: i64,
    pub prompt: String,
    pub choices: Vec<String>,
    /// Index into `choices`.
    pub correct: usize,
}

/// A recorded answer. Append-only, one per question.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnswerRecord {
    pub question: i64,
    pub choice: usize,
    pub is_correct: bool,
    pub answered_at: DateTime<Utc>,
}

/// One play-through of a quiz.
pub struct QuizSession {
    round_id: Uuid,
    phase: Phase,
    questions: Vec<QuizQuestion>,
    current: usize,
    answers: Vec<AnswerRecord>,
    counters: Counters,
    feedback: Option<FeedbackKind>,
    audio: Box<dyn AudioSession>,
}

impl QuizSession {
    /// Validate the question list and create a session.
    pub fn new(questions: Vec<QuizQuestion>) -> Result<Self> {
        if questions.is_empty() {
            return Err(GameError::EmptyQuestionList);
        }
        for question in &questions {
            if question.choices.is_empty() {
                return Err(GameError::NoChoices { id: question.id });
            }
            if question.correct >= question.choices.len() {
                return Err(GameError::CorrectOutOfRange {
                    id: question.id,
                    index: question.correct,
                    len: question.choices.len(),
                });
            }
        }
        Ok(Self {
            round_id: Uuid::new_v4(),
            phase: Phase::NotStarted,
            questions,
            current: 0,
            answers: Vec::new(),
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
        tracing::info!(round_id = %self.round_id, questions = self.questions.len(), "quiz started");
    }

    /// Restart from the first question, discarding all answers.
    pub fn reset(&mut self) {
        if self.phase == Phase::Playing {
            self.audio.stop();
        }
        self.round_id = Uuid::new_v4();
        self.current = 0;
        self.answers.clear();
        self.counters = Counters::default();
        self.feedback = None;
        self.phase = Phase::Playing;
        self.audio.start();
    }

    /// The question currently awaiting an answer.
    pub fn current_question(&self) -> Option<&QuizQuestion> {
        if self.phase != Phase::Playing {
            return None;
        }
        self.questions.get(self.current)
    }

    /// Answer the current question. Out-of-range choices and answers
    /// outside of play are silently rejected.
    pub fn answer(&mut self, choice: usize) -> Option<AnswerRecord> {
        if self.phase != Phase::Playing {
            return None;
        }
        let question = self.questions.get(self.current)?;
        if choice >= question.choices.len() {
            return None;
        }

        let is_correct = choice == question.correct;
        let record = AnswerRecord {
            question: question.id,
            choice,
            is_correct,
            answered_at: Utc::now(),
        };

        self.counters.moves += 1;
        self.answers.push(record.clone());
        if is_correct {
            self.counters.correct += 1;
            self.feedback = Some(FeedbackKind::Correct);
        } else {
            self.counters.incorrect += 1;
            self.feedback = Some(FeedbackKind::Incorrect);
        }
        self.current += 1;

        if self.current == self.questions.len() {
            self.phase = Phase::Complete;
            self.audio.stop();
            tracing::info!(
                round_id = %self.round_id,
                correct = self.counters.correct,
                "quiz complete"
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

    pub fn answers(&self) -> &[AnswerRecord] {
        &self.answers
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

    /// Score summary for a completed quiz; `None` while playing.
    pub fn score_report(&self) -> Option<ScoreReport> {
        if self.phase != Phase::Complete {
            return None;
        }
        Some(ScoreReport {
            round_id: self.round_id,
            attempted: self.counters.moves,
            correct: self.counters.correct,
            total: self.questions.len() as u32,
        })
    }
}
