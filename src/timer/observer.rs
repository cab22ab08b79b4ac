//! Tick and expiry notifications

use crate::session::QuizResult;
use tokio::sync::mpsc::UnboundedSender;

/// Identifies one attempt started by a controller. Ids increase by one per
/// successful start, so a notification from a replaced attempt never carries
/// the live attempt's id.
pub type AttemptId = u64;

/// Receives countdown notifications. Called from the timer task, never
/// while the session lock is held.
pub trait TimerObserver: Send + Sync + 'static {
    /// Called after every decrement, including the final one to zero
    fn on_tick(&self, attempt: AttemptId, remaining: u32);

    /// Called once when time runs out, after the session finished
    fn on_expired(&self, _attempt: AttemptId, _result: &QuizResult) {}
}

/// Observer that ignores everything
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopObserver;

impl TimerObserver for NoopObserver {
    fn on_tick(&self, _attempt: AttemptId, _remaining: u32) {}
}

/// Timer notification as a value, for channel-based front ends
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TimerEvent {
    Tick {
        attempt: AttemptId,
        remaining: u32,
    },
    Expired {
        attempt: AttemptId,
        result: QuizResult,
    },
}

impl TimerEvent {
    /// Attempt whose countdown produced this event
    pub fn attempt(&self) -> AttemptId {
        match self {
            TimerEvent::Tick { attempt, .. } | TimerEvent::Expired { attempt, .. } => *attempt,
        }
    }
}

/// Forward notifications into a channel. A closed receiver is ignored.
impl TimerObserver for UnboundedSender<TimerEvent> {
    fn on_tick(&self, attempt: AttemptId, remaining: u32) {
        let _ = self.send(TimerEvent::Tick { attempt, remaining });
    }

    fn on_expired(&self, attempt: AttemptId, result: &QuizResult) {
        let _ = self.send(TimerEvent::Expired {
            attempt,
            result: result.clone(),
        });
    }
}
