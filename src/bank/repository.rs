//! Immutable question repository shared by every session

use crate::config::{deserialize_questions, Question};
use crate::error::{QuizError, Result};
use ahash::AHashSet;
use once_cell::sync::Lazy;
use std::ops::Index;
use std::sync::Arc;

const BUNDLED_JSON: &str = include_str!("../../data/questions.json");

/// Bundled bank, parsed and validated on first use
static BUNDLED: Lazy<Result<QuestionBank>> = Lazy::new(|| QuestionBank::from_json(BUNDLED_JSON));

/// Read-only, validated collection of questions
///
/// Cloning is cheap: all clones share one allocation. A bank is never empty
/// and every record in it has passed [`Question::validate`].
#[derive(Debug, Clone)]
pub struct QuestionBank {
    questions: Arc<[Question]>,
}

impl QuestionBank {
    /// Build a bank from records, rejecting malformed ones
    pub fn from_questions(questions: Vec<Question>) -> Result<Self> {
        validate_questions(&questions)?;
        Ok(Self {
            questions: questions.into(),
        })
    }

    /// Parse and validate a bank from JSON
    pub fn from_json(json: &str) -> Result<Self> {
        Self::from_questions(deserialize_questions(json)?)
    }

    /// The bank shipped with the crate
    pub fn bundled() -> Result<Self> {
        BUNDLED.clone()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.questions.len()
    }

    /// Always false for a constructed bank; provided for API symmetry
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    #[inline]
    pub fn get(&self, index: usize) -> Option<&Question> {
        self.questions.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Question> {
        self.questions.iter()
    }

    pub fn as_slice(&self) -> &[Question] {
        &self.questions
    }
}

impl Index<usize> for QuestionBank {
    type Output = Question;

    fn index(&self, index: usize) -> &Self::Output {
        &self.questions[index]
    }
}

/// Validate every record, naming the first malformed one by its bank index.
/// Repeated question texts are allowed but logged.
fn validate_questions(questions: &[Question]) -> Result<()> {
    if questions.is_empty() {
        return Err(QuizError::Configuration(
            "question bank is empty".to_string(),
        ));
    }

    let mut seen: AHashSet<&str> = AHashSet::with_capacity(questions.len());
    for (index, question) in questions.iter().enumerate() {
        question.validate().map_err(|err| match err {
            QuizError::Configuration(msg) => {
                QuizError::Configuration(format!("question #{}: {}", index, msg))
            }
            other => other,
        })?;

        if !seen.insert(question.text.as_str()) {
            tracing::warn!(index, text = %question.text, "duplicate question text in bank");
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn question(text: &str, correct: usize) -> Question {
        Question::new(text, ["A", "B", "C", "D"], correct)
    }

    #[test]
    fn test_bundled_bank_loads() {
        let bank = QuestionBank::bundled().unwrap();
        assert_eq!(bank.len(), 170);
        assert!(bank.iter().all(|q| q.option_count() == 4));
    }

    #[test]
    fn test_empty_bank_rejected() {
        let err = QuestionBank::from_questions(Vec::new()).unwrap_err();
        assert_eq!(
            err,
            QuizError::Configuration("question bank is empty".to_string())
        );
    }

    #[test]
    fn test_malformed_record_named_by_index() {
        let questions = vec![question("ok", 0), question("bad", 7)];
        let err = QuestionBank::from_questions(questions).unwrap_err();
        match err {
            QuizError::Configuration(msg) => assert!(msg.starts_with("question #1:")),
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_duplicates_are_allowed() {
        let questions = vec![question("same", 0), question("same", 1)];
        let bank = QuestionBank::from_questions(questions).unwrap();
        assert_eq!(bank.len(), 2);
    }

    #[test]
    fn test_from_json_invalid_syntax() {
        let err = QuestionBank::from_json("[{").unwrap_err();
        assert!(matches!(err, QuizError::Deserialization(_)));
    }

    #[test]
    fn test_clones_share_storage() {
        let bank = QuestionBank::from_questions(vec![question("q", 2)]).unwrap();
        let copy = bank.clone();
        assert!(std::ptr::eq(bank.as_slice(), copy.as_slice()));
        assert_eq!(copy[0].correct_index, 2);
    }
}
