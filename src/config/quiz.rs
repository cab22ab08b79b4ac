//! Quiz attempt parameters

use crate::error::{QuizError, Result};
use serde::{Deserialize, Serialize};
use std::time::Duration;

pub const DEFAULT_QUESTION_COUNT: usize = 45;
pub const DEFAULT_TIME_LIMIT_SECS: u32 = 45 * 60;
pub const DEFAULT_TICK_MILLIS: u64 = 1000;

/// Parameters for one quiz attempt
///
/// `question_count` is a target: sessions silently clamp it to the size of
/// the question bank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct QuizConfig {
    pub question_count: usize,
    pub time_limit_secs: u32,
    /// Countdown period. Each tick removes exactly one second from the
    /// remaining time regardless of this value.
    pub tick_millis: u64,
}

impl Default for QuizConfig {
    fn default() -> Self {
        Self {
            question_count: DEFAULT_QUESTION_COUNT,
            time_limit_secs: DEFAULT_TIME_LIMIT_SECS,
            tick_millis: DEFAULT_TICK_MILLIS,
        }
    }
}

impl QuizConfig {
    /// Build a validated config with the default tick period
    pub fn new(question_count: usize, time_limit_secs: u32) -> Result<Self> {
        let config = Self {
            question_count,
            time_limit_secs,
            ..Self::default()
        };
        config.validate()?;
        Ok(config)
    }

    /// Parse a config from JSON, filling missing fields with defaults
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn with_tick_millis(mut self, tick_millis: u64) -> Self {
        self.tick_millis = tick_millis;
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.question_count == 0 {
            return Err(QuizError::Configuration(
                "question count must be positive".to_string(),
            ));
        }
        if self.time_limit_secs == 0 {
            return Err(QuizError::Configuration(
                "time limit must be positive".to_string(),
            ));
        }
        if self.tick_millis == 0 {
            return Err(QuizError::Configuration(
                "tick period must be positive".to_string(),
            ));
        }
        Ok(())
    }

    #[inline]
    pub fn tick_period(&self) -> Duration {
        Duration::from_millis(self.tick_millis)
    }
}
