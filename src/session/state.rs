//! Session state machine for one quiz attempt

use rand::Rng;
use serde::Serialize;
use std::fmt;

use crate::bank::QuestionBank;
use crate::config::{Question, QuizConfig};
use crate::error::{QuizError, Result};
use crate::selection::select_from_bank;
use crate::timer::{Countdown, Tick};

use super::scoring::{score, FinishReason, QuizResult};
use super::snapshot::SessionSnapshot;

/// Lifecycle of a session. `Finished` is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionStatus {
    NotStarted,
    InProgress,
    Finished,
}

impl fmt::Display for SessionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SessionStatus::NotStarted => "not started",
            SessionStatus::InProgress => "in progress",
            SessionStatus::Finished => "finished",
        };
        f.write_str(name)
    }
}

/// What a single timer tick did to the session
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TickOutcome {
    /// Session was not running; nothing changed
    Inactive,
    /// One second elapsed, this many remain
    Remaining(u32),
    /// Time ran out and the session was finished
    Expired(QuizResult),
}

/// One timed attempt over a random subset of the bank
///
/// Positions are 0-based indices into the selection, not the bank. The
/// number of positions and the answer slots are fixed at construction.
#[derive(Debug, Clone)]
pub struct Session {
    bank: QuestionBank,
    /// Bank index for each position
    selected: Vec<usize>,
    current_index: usize,
    answers: Vec<Option<usize>>,
    status: SessionStatus,
    countdown: Countdown,
    result: Option<QuizResult>,
}

impl Session {
    /// Select questions and build a session in `NotStarted`
    pub fn prepare(bank: &QuestionBank, config: &QuizConfig) -> Result<Self> {
        Self::prepare_with_rng(bank, config, &mut rand::thread_rng())
    }

    pub fn prepare_with_rng<R: Rng + ?Sized>(
        bank: &QuestionBank,
        config: &QuizConfig,
        rng: &mut R,
    ) -> Result<Self> {
        config.validate()?;
        if bank.is_empty() {
            return Err(QuizError::Configuration(
                "question bank is empty".to_string(),
            ));
        }

        let selected = select_from_bank(bank, config.question_count, rng);
        let answers = vec![None; selected.len()];

        Ok(Self {
            bank: bank.clone(),
            selected,
            current_index: 0,
            answers,
            status: SessionStatus::NotStarted,
            countdown: Countdown::new(config.time_limit_secs),
            result: None,
        })
    }

    /// Select questions and start the attempt immediately
    pub fn start(bank: &QuestionBank, config: &QuizConfig) -> Result<Self> {
        Self::start_with_rng(bank, config, &mut rand::thread_rng())
    }

    pub fn start_with_rng<R: Rng + ?Sized>(
        bank: &QuestionBank,
        config: &QuizConfig,
        rng: &mut R,
    ) -> Result<Self> {
        let mut session = Self::prepare_with_rng(bank, config, rng)?;
        session.begin()?;
        Ok(session)
    }

    /// Move from `NotStarted` to `InProgress`
    pub fn begin(&mut self) -> Result<()> {
        if self.status != SessionStatus::NotStarted {
            return Err(QuizError::InvalidState {
                status: self.status,
            });
        }
        self.status = SessionStatus::InProgress;
        tracing::info!(
            questions = self.selected.len(),
            time_limit = self.countdown.remaining(),
            "quiz session started"
        );
        Ok(())
    }

    // ------------------------------------------------------------------------
    // Queries
    // ------------------------------------------------------------------------

    #[inline]
    pub fn len(&self) -> usize {
        self.selected.len()
    }

    /// Never true: a session always holds at least one question
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    #[inline]
    pub fn status(&self) -> SessionStatus {
        self.status
    }

    #[inline]
    pub fn is_finished(&self) -> bool {
        self.status == SessionStatus::Finished
    }

    #[inline]
    pub fn current_index(&self) -> usize {
        self.current_index
    }

    #[inline]
    pub fn remaining_seconds(&self) -> u32 {
        self.countdown.remaining()
    }

    pub fn question(&self, position: usize) -> Option<&Question> {
        self.selected.get(position).map(|&i| &self.bank[i])
    }

    pub fn current_question(&self) -> &Question {
        &self.bank[self.selected[self.current_index]]
    }

    /// Bank index backing a position
    pub fn bank_index(&self, position: usize) -> Option<usize> {
        self.selected.get(position).copied()
    }

    pub fn answer(&self, position: usize) -> Option<usize> {
        self.answers.get(position).copied().flatten()
    }

    pub fn answers(&self) -> &[Option<usize>] {
        &self.answers
    }

    /// The result produced when the session finished
    pub fn result(&self) -> Option<&QuizResult> {
        self.result.as_ref()
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            status: self.status,
            current_index: self.current_index,
            total: self.selected.len(),
            answers: self.answers.clone(),
            remaining_seconds: self.countdown.remaining(),
        }
    }

    // ------------------------------------------------------------------------
    // Navigation
    // ------------------------------------------------------------------------

    /// Jump to any position, visited or not
    pub fn go_to(&mut self, position: usize) -> Result<()> {
        if position >= self.selected.len() {
            return Err(QuizError::OutOfRange {
                index: position as i64,
                len: self.selected.len(),
            });
        }
        self.current_index = position;
        tracing::debug!(position, "navigated");
        Ok(())
    }

    /// Fails with `OutOfRange` on the last position
    pub fn next(&mut self) -> Result<()> {
        self.step(1)
    }

    /// Fails with `OutOfRange` on the first position
    pub fn previous(&mut self) -> Result<()> {
        self.step(-1)
    }

    fn step(&mut self, delta: i64) -> Result<()> {
        let target = self.current_index as i64 + delta;
        if target < 0 {
            return Err(QuizError::OutOfRange {
                index: target,
                len: self.selected.len(),
            });
        }
        self.go_to(target as usize)
    }

    // ------------------------------------------------------------------------
    // Answers
    // ------------------------------------------------------------------------

    /// Record (or overwrite) the answer for the current position
    pub fn record_answer(&mut self, option: usize) -> Result<()> {
        if self.status != SessionStatus::InProgress {
            return Err(QuizError::InvalidState {
                status: self.status,
            });
        }

        let available = self.current_question().option_count();
        if option >= available {
            return Err(QuizError::InvalidOption { option, available });
        }

        self.answers[self.current_index] = Some(option);
        tracing::debug!(position = self.current_index, option, "answer recorded");
        Ok(())
    }

    // ------------------------------------------------------------------------
    // Completion
    // ------------------------------------------------------------------------

    /// Submit the attempt. Only the first call on a running session succeeds.
    pub fn finish(&mut self) -> Result<QuizResult> {
        self.complete(FinishReason::Submitted)
    }

    /// Advance the countdown by one second, finishing the session when it
    /// reaches zero. A session that is not running ignores ticks.
    pub fn tick(&mut self) -> TickOutcome {
        if self.status != SessionStatus::InProgress {
            return TickOutcome::Inactive;
        }

        match self.countdown.tick() {
            Tick::Remaining(remaining) => {
                tracing::trace!(remaining, "tick");
                TickOutcome::Remaining(remaining)
            }
            Tick::Expired => match self.complete(FinishReason::Expired) {
                Ok(result) => TickOutcome::Expired(result),
                Err(_) => TickOutcome::Inactive,
            },
            Tick::Stopped => TickOutcome::Inactive,
        }
    }

    fn complete(&mut self, reason: FinishReason) -> Result<QuizResult> {
        if self.status != SessionStatus::InProgress {
            return Err(QuizError::InvalidState {
                status: self.status,
            });
        }

        self.countdown.stop();
        self.status = SessionStatus::Finished;

        let bank = &self.bank;
        let result = score(
            self.selected
                .iter()
                .zip(self.answers.iter())
                .map(|(&i, &chosen)| (&bank[i], chosen)),
            reason,
        );

        tracing::info!(
            ?reason,
            correct = result.correct_count,
            total = result.total,
            percentage = result.percentage,
            "quiz session finished"
        );

        self.result = Some(result.clone());
        Ok(result)
    }
}
