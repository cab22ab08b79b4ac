//! Configuration module for quiz data structures
//!
//! This module holds the question record format and the per-attempt
//! parameters, and deserializes question lists from JSON.

mod question;
mod quiz;

pub use question::*;
pub use quiz::*;

use crate::error::Result;

/// Deserialize a question list from JSON
/// Expected format: `[{"question": str, "options": [str, ...], "answer": int}, ...]`
///
/// Only the shape is checked here; see [`Question::validate`] for the
/// record-level rules.
pub fn deserialize_questions(json: &str) -> Result<Vec<Question>> {
    let questions: Vec<Question> = serde_json::from_str(json)?;
    Ok(questions)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::QuizError;

    #[test]
    fn test_deserialize_questions() {
        let json = r#"[
            {"question": "A", "options": ["x", "y"], "answer": 1},
            {"question": "B", "options": ["x", "y", "z"], "answer": 2}
        ]"#;
        let questions = deserialize_questions(json).unwrap();
        assert_eq!(questions.len(), 2);
        assert_eq!(questions[1].correct_index, 2);
    }

    #[test]
    fn test_deserialize_questions_missing_field() {
        let json = r#"[{"question": "A", "options": ["x", "y"]}]"#;
        assert!(matches!(
            deserialize_questions(json),
            Err(QuizError::Deserialization(_))
        ));
    }
}
