//! Keyboard shortcuts
//!
//! Letters `A`-`E` pick an option, `N` and `P` move between questions.
//! Keys are case-insensitive.

use crate::error::Result;
use crate::session::Session;

/// Number of options reachable by letter shortcut (`A`..=`E`)
pub const SHORTCUT_OPTIONS: usize = 5;

/// A user action on the live session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    SelectOption(usize),
    Next,
    Previous,
    GoTo(usize),
}

/// Translate a key press into a command for a question with
/// `option_count` options. Letters beyond the options are ignored.
pub fn map_key(key: char, option_count: usize) -> Option<Command> {
    let key = key.to_ascii_uppercase();
    match key {
        'N' => Some(Command::Next),
        'P' => Some(Command::Previous),
        'A'..='E' => {
            let index = (key as u8 - b'A') as usize;
            (index < option_count.min(SHORTCUT_OPTIONS)).then_some(Command::SelectOption(index))
        }
        _ => None,
    }
}

pub fn apply_command(session: &mut Session, command: Command) -> Result<()> {
    match command {
        Command::SelectOption(option) => session.record_answer(option),
        Command::Next => session.next(),
        Command::Previous => session.previous(),
        Command::GoTo(position) => session.go_to(position),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bank::QuestionBank;
    use crate::config::{Question, QuizConfig};
    use crate::error::QuizError;

    #[test]
    fn test_letters_map_to_options() {
        assert_eq!(map_key('a', 4), Some(Command::SelectOption(0)));
        assert_eq!(map_key('D', 4), Some(Command::SelectOption(3)));
        assert_eq!(map_key('e', 4), None);
        assert_eq!(map_key('E', 6), Some(Command::SelectOption(4)));
        assert_eq!(map_key('F', 6), None);
    }

    #[test]
    fn test_navigation_keys() {
        assert_eq!(map_key('n', 4), Some(Command::Next));
        assert_eq!(map_key('P', 4), Some(Command::Previous));
        assert_eq!(map_key('x', 4), None);
        assert_eq!(map_key('1', 4), None);
    }

    #[test]
    fn test_apply_command() {
        let questions = (0..3)
            .map(|i| Question::new(format!("Q{}", i), ["A", "B", "C", "D"], 0))
            .collect();
        let bank = QuestionBank::from_questions(questions).unwrap();
        let mut session = Session::start(&bank, &QuizConfig::new(3, 60).unwrap()).unwrap();

        apply_command(&mut session, Command::SelectOption(2)).unwrap();
        apply_command(&mut session, Command::Next).unwrap();
        assert_eq!(session.current_index(), 1);
        assert_eq!(session.answer(0), Some(2));

        apply_command(&mut session, Command::GoTo(2)).unwrap();
        assert!(matches!(
            apply_command(&mut session, Command::Next),
            Err(QuizError::OutOfRange { index: 3, len: 3 })
        ));
    }
}
