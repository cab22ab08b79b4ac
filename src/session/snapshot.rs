//! Pull-based view of a session for presentation layers

use super::SessionStatus;
use serde::Serialize;

/// Copy of everything a front end needs to re-render
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SessionSnapshot {
    pub status: SessionStatus,
    pub current_index: usize,
    pub total: usize,
    /// Chosen option per position, `None` when unanswered
    pub answers: Vec<Option<usize>>,
    pub remaining_seconds: u32,
}

impl SessionSnapshot {
    #[inline]
    pub fn is_answered(&self, position: usize) -> bool {
        matches!(self.answers.get(position), Some(Some(_)))
    }

    pub fn answered_count(&self) -> usize {
        self.answers.iter().filter(|a| a.is_some()).count()
    }

    #[inline]
    pub fn is_current(&self, position: usize) -> bool {
        position == self.current_index
    }

    #[inline]
    pub fn has_previous(&self) -> bool {
        self.current_index > 0
    }

    #[inline]
    pub fn has_next(&self) -> bool {
        self.current_index + 1 < self.total
    }
}
