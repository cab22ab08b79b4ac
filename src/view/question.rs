//! Question screen view model

use serde::Serialize;

use crate::markup::{render_markup, MathRenderer};
use crate::session::Session;

use super::{option_label, time_left_label};

/// One answer choice as displayed
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OptionView {
    pub index: usize,
    pub label: char,
    /// Rendered `"{label}. {text}"`
    pub markup: String,
    pub selected: bool,
}

/// Everything needed to draw the current question
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuestionView {
    /// `"Question {n} of {total}"`
    pub heading: String,
    pub markup: String,
    pub options: Vec<OptionView>,
    pub time_left: String,
    pub can_go_previous: bool,
    pub can_go_next: bool,
    /// Submission is offered once the current question has an answer
    pub can_submit: bool,
}

/// Numbered navigator entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NavigatorEntry {
    pub number: usize,
    pub answered: bool,
    pub current: bool,
}

pub fn question_view(session: &Session, renderer: &dyn MathRenderer) -> QuestionView {
    let position = session.current_index();
    let question = session.current_question();
    let chosen = session.answer(position);

    let options = question
        .options
        .iter()
        .enumerate()
        .map(|(index, text)| {
            let label = option_label(index);
            OptionView {
                index,
                label,
                markup: render_markup(&format!("{}. {}", label, text), renderer),
                selected: chosen == Some(index),
            }
        })
        .collect();

    QuestionView {
        heading: format!("Question {} of {}", position + 1, session.len()),
        markup: render_markup(&question.text, renderer),
        options,
        time_left: time_left_label(session.remaining_seconds()),
        can_go_previous: position > 0,
        can_go_next: position + 1 < session.len(),
        can_submit: chosen.is_some(),
    }
}

pub fn navigator_view(session: &Session) -> Vec<NavigatorEntry> {
    (0..session.len())
        .map(|position| NavigatorEntry {
            number: position + 1,
            answered: session.answer(position).is_some(),
            current: position == session.current_index(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bank::QuestionBank;
    use crate::config::{Question, QuizConfig};
    use crate::markup::HtmlMathRenderer;

    fn session() -> Session {
        let questions = vec![
            Question::new("Speed at $t=1$?", ["$1$ m/s", "2 m/s"], 0),
            Question::new("Speed at $t=2$?", ["$2$ m/s", "4 m/s"], 1),
        ];
        let bank = QuestionBank::from_questions(questions).unwrap();
        Session::start(&bank, &QuizConfig::new(2, 90).unwrap()).unwrap()
    }

    #[test]
    fn test_first_question_view() {
        let session = session();
        let view = question_view(&session, &HtmlMathRenderer);
        assert_eq!(view.heading, "Question 1 of 2");
        assert_eq!(view.time_left, "Time Left: 01:30");
        assert!(view.markup.contains("<span class=\"math\">t="));
        assert_eq!(view.options.len(), 2);
        assert_eq!(view.options[1].label, 'B');
        assert!(view.options[1].markup.starts_with("B. "));
        assert!(!view.can_go_previous);
        assert!(view.can_go_next);
        assert!(!view.can_submit);
    }

    #[test]
    fn test_selection_reflected() {
        let mut session = session();
        session.go_to(1).unwrap();
        session.record_answer(1).unwrap();
        let view = question_view(&session, &HtmlMathRenderer);
        assert!(view.options[1].selected);
        assert!(!view.options[0].selected);
        assert!(view.can_submit);
        assert!(view.can_go_previous);
        assert!(!view.can_go_next);
    }

    #[test]
    fn test_navigator() {
        let mut session = session();
        session.record_answer(0).unwrap();
        session.go_to(1).unwrap();
        let nav = navigator_view(&session);
        assert_eq!(
            nav,
            vec![
                NavigatorEntry {
                    number: 1,
                    answered: true,
                    current: false
                },
                NavigatorEntry {
                    number: 2,
                    answered: false,
                    current: true
                },
            ]
        );
    }
}
