//! Result computation for a finished session

use crate::config::Question;
use serde::Serialize;
use std::fmt;

/// Lower bound (inclusive) of the high tier
pub const HIGH_TIER_MIN: u32 = 80;
/// Lower bound (inclusive) of the mid tier
pub const MID_TIER_MIN: u32 = 60;

/// How a session reached `Finished`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FinishReason {
    Submitted,
    Expired,
}

/// Coarse feedback bucket derived from the percentage
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CommentTier {
    High,
    Mid,
    Low,
}

impl CommentTier {
    pub fn from_percentage(percentage: u32) -> Self {
        if percentage >= HIGH_TIER_MIN {
            CommentTier::High
        } else if percentage >= MID_TIER_MIN {
            CommentTier::Mid
        } else {
            CommentTier::Low
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            CommentTier::High => "high",
            CommentTier::Mid => "mid",
            CommentTier::Low => "low",
        }
    }

    /// Feedback line shown under the score
    pub fn message(&self) -> &'static str {
        match self {
            CommentTier::High => "Excellent work! You have a strong grasp of this material.",
            CommentTier::Mid => "Good effort! Review the incorrect answers to improve.",
            CommentTier::Low => "Keep studying! Focus on the topics you missed.",
        }
    }
}

impl fmt::Display for CommentTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Per-position grading
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuestionOutcome {
    pub position: usize,
    pub question: Question,
    pub chosen: Option<usize>,
    pub is_correct: bool,
}

impl QuestionOutcome {
    /// Text of the chosen option, if any
    pub fn chosen_text(&self) -> Option<&str> {
        self.chosen.and_then(|i| self.question.option(i))
    }
}

/// Final score of a session
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuizResult {
    pub outcomes: Vec<QuestionOutcome>,
    pub correct_count: usize,
    pub total: usize,
    pub percentage: u32,
    pub tier: CommentTier,
    pub reason: FinishReason,
}

/// `round(100 * correct / total)` with half-up rounding on the exact
/// fraction, computed in integers.
pub fn percentage(correct: usize, total: usize) -> u32 {
    if total == 0 {
        return 0;
    }
    let correct = correct as u64;
    let total = total as u64;
    ((200 * correct + total) / (2 * total)) as u32
}

/// Grade `(question, chosen)` pairs in position order. Unanswered positions
/// are always incorrect.
pub fn score<'a, I>(answers: I, reason: FinishReason) -> QuizResult
where
    I: IntoIterator<Item = (&'a Question, Option<usize>)>,
{
    let outcomes: Vec<QuestionOutcome> = answers
        .into_iter()
        .enumerate()
        .map(|(position, (question, chosen))| QuestionOutcome {
            position,
            question: question.clone(),
            chosen,
            is_correct: chosen.is_some_and(|c| question.is_correct(c)),
        })
        .collect();

    let total = outcomes.len();
    let correct_count = outcomes.iter().filter(|o| o.is_correct).count();
    let percentage = percentage(correct_count, total);

    QuizResult {
        outcomes,
        correct_count,
        total,
        percentage,
        tier: CommentTier::from_percentage(percentage),
        reason,
    }
}
