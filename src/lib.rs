//! Quiz Runner Core - timed multiple-choice quiz session engine
//!
//! This crate owns the logic of one quiz attempt: it draws a random subset of
//! questions from a bank, tracks position and answers, counts down the time
//! limit and scores the attempt. Front ends read snapshots and view models and
//! call the session operations; they hold no quiz logic of their own.
//!
//! ```no_run
//! use quiz_runner_core::{QuestionBank, QuizConfig, QuizController};
//!
//! # async fn run() -> quiz_runner_core::Result<()> {
//! let bank = QuestionBank::bundled()?;
//! let mut controller = QuizController::new(bank, QuizConfig::default())?;
//! controller.start()?;
//! controller.record_answer(1)?;
//! controller.next()?;
//! let result = controller.finish()?;
//! println!("{}%", result.percentage);
//! # Ok(())
//! # }
//! ```

pub mod bank;
pub mod config;
pub mod controller;
pub mod error;
pub mod input;
pub mod markup;
pub mod selection;
pub mod session;
pub mod timer;
pub mod view;

pub use crate::bank::QuestionBank;
pub use crate::config::{Question, QuizConfig};
pub use crate::controller::QuizController;
pub use crate::error::{QuizError, Result};
pub use crate::session::{
    CommentTier, FinishReason, QuestionOutcome, QuizResult, Session, SessionSnapshot,
    SessionStatus,
};
pub use crate::timer::{AttemptId, CountdownTimer, TimerEvent, TimerObserver};
