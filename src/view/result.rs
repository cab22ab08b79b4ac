//! Results screen view model

use serde::Serialize;

use crate::markup::{render_markup, MathRenderer};
use crate::session::{QuestionOutcome, QuizResult};

/// Shown in place of an answer for unanswered questions
pub const NO_ANSWER: &str = "No Answer";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OutcomeView {
    /// `"Q{n}"`
    pub label: String,
    pub question: String,
    pub your_answer: String,
    pub is_correct: bool,
    /// Only present when the answer was wrong or missing
    pub correct_answer: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResultView {
    pub score_line: String,
    pub comment: &'static str,
    pub percentage: u32,
    pub outcomes: Vec<OutcomeView>,
}

pub fn result_view(result: &QuizResult, renderer: &dyn MathRenderer) -> ResultView {
    ResultView {
        score_line: format!(
            "You answered {} out of {} questions correctly.",
            result.correct_count, result.total
        ),
        comment: result.tier.message(),
        percentage: result.percentage,
        outcomes: result
            .outcomes
            .iter()
            .map(|outcome| outcome_view(outcome, renderer))
            .collect(),
    }
}

fn outcome_view(outcome: &QuestionOutcome, renderer: &dyn MathRenderer) -> OutcomeView {
    let your_answer = outcome.chosen_text().unwrap_or(NO_ANSWER);
    let correct_answer = (!outcome.is_correct)
        .then(|| render_markup(outcome.question.correct_option(), renderer));

    OutcomeView {
        label: format!("Q{}", outcome.position + 1),
        question: render_markup(&outcome.question.text, renderer),
        your_answer: render_markup(your_answer, renderer),
        is_correct: outcome.is_correct,
        correct_answer,
    }
}
