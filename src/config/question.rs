//! Question record structure

use crate::error::{QuizError, Result};
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// Fewest options a well-formed question may carry
pub const MIN_OPTIONS: usize = 2;

/// Inline capacity for option lists; every bundled question has four
pub type Options = SmallVec<[String; 4]>;

/// A single multiple-choice question
///
/// Field names on the wire follow the bank format: `question`, `options`,
/// `answer`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    #[serde(rename = "question")]
    pub text: String,
    pub options: Options,
    #[serde(rename = "answer")]
    pub correct_index: usize,
}

impl Question {
    pub fn new<I, S>(text: impl Into<String>, options: I, correct_index: usize) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            text: text.into(),
            options: options.into_iter().map(Into::into).collect(),
            correct_index,
        }
    }

    #[inline]
    pub fn option_count(&self) -> usize {
        self.options.len()
    }

    #[inline]
    pub fn option(&self, index: usize) -> Option<&str> {
        self.options.get(index).map(String::as_str)
    }

    /// Text of the correct option. Only meaningful on a validated record.
    pub fn correct_option(&self) -> &str {
        self.option(self.correct_index).unwrap_or_default()
    }

    #[inline]
    pub fn is_correct(&self, option: usize) -> bool {
        option == self.correct_index
    }

    /// Check the record is well-formed: at least two options and a correct
    /// index inside them.
    pub fn validate(&self) -> Result<()> {
        if self.options.len() < MIN_OPTIONS {
            return Err(QuizError::Configuration(format!(
                "expected at least {} options, found {}",
                MIN_OPTIONS,
                self.options.len()
            )));
        }
        if self.correct_index >= self.options.len() {
            return Err(QuizError::Configuration(format!(
                "correct index {} is outside {} options",
                self.correct_index,
                self.options.len()
            )));
        }
        Ok(())
    }
}
