//! Quiz controller - owns the one live session and its countdown
//!
//! Front ends drive every operation through the controller. Starting a new
//! attempt always builds a fresh session and cancels the previous timer
//! before the old session is dropped. Each attempt gets a new `AttemptId`;
//! timer notifications still queued from a replaced attempt carry the old id
//! and are recognised with [`QuizController::is_current`].

use parking_lot::Mutex;
use std::sync::Arc;

use crate::bank::QuestionBank;
use crate::config::QuizConfig;
use crate::error::{QuizError, Result};
use crate::input::{apply_command, Command};
use crate::session::{QuizResult, Session, SessionSnapshot, SessionStatus};
use crate::timer::{
    AttemptId, CountdownTimer, NoopObserver, SharedSession, TimerEvent, TimerObserver,
};

/// A running attempt and the task counting it down
struct LiveSession {
    attempt: AttemptId,
    session: SharedSession,
    timer: CountdownTimer,
}

/// Entry point for front ends
///
/// Holds the question bank, the attempt parameters and at most one live
/// session. Must be used from within a tokio runtime.
pub struct QuizController {
    bank: QuestionBank,
    config: QuizConfig,
    observer: Arc<dyn TimerObserver>,
    last_attempt: AttemptId,
    live: Option<LiveSession>,
}

impl QuizController {
    pub fn new(bank: QuestionBank, config: QuizConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            bank,
            config,
            observer: Arc::new(NoopObserver),
            last_attempt: 0,
            live: None,
        })
    }

    /// Observer notified on every tick of every session this controller starts
    pub fn with_observer(mut self, observer: Arc<dyn TimerObserver>) -> Self {
        self.observer = observer;
        self
    }

    pub fn config(&self) -> &QuizConfig {
        &self.config
    }

    pub fn bank(&self) -> &QuestionBank {
        &self.bank
    }

    /// Begin a new attempt, replacing any previous one
    ///
    /// The new session and its timer are fully set up before the old one is
    /// touched, so a failed start leaves the previous attempt running.
    pub fn start(&mut self) -> Result<SessionSnapshot> {
        let mut session = Session::prepare(&self.bank, &self.config)?;
        session.begin()?;
        let snapshot = session.snapshot();

        let attempt = self.last_attempt + 1;
        let session = Arc::new(Mutex::new(session));
        let timer = CountdownTimer::spawn(
            session.clone(),
            attempt,
            self.config.tick_period(),
            self.observer.clone(),
        )?;

        let live = LiveSession {
            attempt,
            session,
            timer,
        };
        if let Some(mut previous) = self.live.replace(live) {
            previous.timer.stop();
        }
        self.last_attempt = attempt;
        tracing::debug!(attempt, total = snapshot.total, "attempt started");
        Ok(snapshot)
    }

    /// Id of the live attempt, if one has been started
    pub fn current_attempt(&self) -> Option<AttemptId> {
        self.live.as_ref().map(|live| live.attempt)
    }

    /// Whether `event` came from the live attempt's countdown
    ///
    /// Events from a replaced attempt can still be queued in a channel after
    /// `start`; front ends should drop them.
    pub fn is_current(&self, event: &TimerEvent) -> bool {
        self.current_attempt() == Some(event.attempt())
    }

    /// Shared handle to the live session, if any
    pub fn session(&self) -> Option<SharedSession> {
        self.live.as_ref().map(|live| live.session.clone())
    }

    /// Run `f` against the live session under its lock
    pub fn with_session<R>(&self, f: impl FnOnce(&Session) -> R) -> Option<R> {
        self.live.as_ref().map(|live| f(&*live.session.lock()))
    }

    pub fn snapshot(&self) -> Option<SessionSnapshot> {
        self.with_session(Session::snapshot)
    }

    /// Result of the live session once it has finished, by submission or expiry
    pub fn result(&self) -> Option<QuizResult> {
        self.with_session(|s| s.result().cloned()).flatten()
    }

    pub fn is_timer_active(&self) -> bool {
        self.live.as_ref().is_some_and(|live| live.timer.is_active())
    }

    /// Submission is offered once the current question has an answer and the
    /// attempt is still running
    pub fn can_submit(&self) -> bool {
        self.with_session(|s| {
            s.status() == SessionStatus::InProgress && s.answer(s.current_index()).is_some()
        })
        .unwrap_or(false)
    }

    pub fn go_to(&self, position: usize) -> Result<()> {
        self.with_live(|s| s.go_to(position))
    }

    pub fn next(&self) -> Result<()> {
        self.with_live(Session::next)
    }

    pub fn previous(&self) -> Result<()> {
        self.with_live(Session::previous)
    }

    pub fn record_answer(&self, option: usize) -> Result<()> {
        self.with_live(|s| s.record_answer(option))
    }

    /// Apply a keyboard or navigator command to the live session
    pub fn apply(&self, command: Command) -> Result<()> {
        self.with_live(|s| apply_command(s, command))
    }

    /// Submit the live attempt and stop its countdown
    pub fn finish(&mut self) -> Result<QuizResult> {
        let live = self.live.as_mut().ok_or(QuizError::InvalidState {
            status: SessionStatus::NotStarted,
        })?;

        let result = live.session.lock().finish()?;
        live.timer.stop();
        Ok(result)
    }

    fn with_live<R>(&self, f: impl FnOnce(&mut Session) -> Result<R>) -> Result<R> {
        let live = self.live.as_ref().ok_or(QuizError::InvalidState {
            status: SessionStatus::NotStarted,
        })?;
        let mut session = live.session.lock();
        f(&mut *session)
    }
}
