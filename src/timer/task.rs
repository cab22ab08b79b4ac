//! Periodic countdown task bound to one session

use parking_lot::Mutex;
use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;

use crate::error::{QuizError, Result};
use crate::session::{Session, TickOutcome};

use super::{AttemptId, TimerObserver};

/// Session shared between the front end and its timer task
pub type SharedSession = Arc<Mutex<Session>>;

/// Handle to the task ticking one session
///
/// Stopping is permanent; a new session gets a new timer. Dropping the
/// handle stops the task.
#[derive(Debug)]
pub struct CountdownTimer {
    handle: Option<JoinHandle<()>>,
}

impl CountdownTimer {
    /// Spawn the ticking task on the current tokio runtime
    ///
    /// Every `period` the session loses one second. The task ends on expiry
    /// or as soon as it finds the session no longer running. Every
    /// notification carries `attempt`.
    pub fn spawn(
        session: SharedSession,
        attempt: AttemptId,
        period: Duration,
        observer: Arc<dyn TimerObserver>,
    ) -> Result<Self> {
        let runtime = tokio::runtime::Handle::try_current().map_err(|e| {
            QuizError::Configuration(format!("countdown needs a tokio runtime: {}", e))
        })?;

        let handle = runtime.spawn(async move {
            let mut interval = tokio::time::interval(period);
            interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
            // The first tick completes immediately
            interval.tick().await;

            loop {
                interval.tick().await;

                let outcome = session.lock().tick();
                match outcome {
                    TickOutcome::Remaining(remaining) => observer.on_tick(attempt, remaining),
                    TickOutcome::Expired(result) => {
                        tracing::info!(attempt, "quiz time expired");
                        observer.on_tick(attempt, 0);
                        observer.on_expired(attempt, &result);
                        break;
                    }
                    TickOutcome::Inactive => break,
                }
            }
        });

        Ok(Self {
            handle: Some(handle),
        })
    }

    /// Cancel the task. Idempotent.
    pub fn stop(&mut self) {
        if let Some(handle) = self.handle.take() {
            handle.abort();
            tracing::debug!("countdown stopped");
        }
    }

    pub fn is_active(&self) -> bool {
        self.handle.as_ref().is_some_and(|h| !h.is_finished())
    }
}

impl Drop for CountdownTimer {
    fn drop(&mut self) {
        self.stop();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bank::QuestionBank;
    use crate::config::{Question, QuizConfig};
    use crate::session::{FinishReason, SessionStatus};
    use crate::timer::TimerEvent;
    use tokio::sync::mpsc;

    fn shared_session(limit: u32) -> SharedSession {
        let questions = (0..6)
            .map(|i| Question::new(format!("Q{}", i), ["A", "B"], i % 2))
            .collect();
        let bank = QuestionBank::from_questions(questions).unwrap();
        let config = QuizConfig::new(3, limit).unwrap();
        Arc::new(Mutex::new(Session::start(&bank, &config).unwrap()))
    }

    #[tokio::test(start_paused = true)]
    async fn test_ticks_until_expiry() {
        let session = shared_session(3);
        let (tx, mut rx) = mpsc::unbounded_channel();
        let timer = CountdownTimer::spawn(
            session.clone(),
            1,
            Duration::from_secs(1),
            Arc::new(tx),
        )
        .unwrap();

        tokio::time::sleep(Duration::from_secs(10)).await;

        let mut events = Vec::new();
        while let Ok(event) = rx.try_recv() {
            events.push(event);
        }
        assert_eq!(events.len(), 4);
        let ticks: Vec<_> = events[..3]
            .iter()
            .map(|event| match event {
                TimerEvent::Tick { remaining, .. } => *remaining,
                other => panic!("expected tick, got {:?}", other),
            })
            .collect();
        assert_eq!(ticks, vec![2, 1, 0]);
        match &events[3] {
            TimerEvent::Expired { result, .. } => {
                assert_eq!(result.reason, FinishReason::Expired)
            }
            other => panic!("expected expiry, got {:?}", other),
        }
        assert!(events.iter().all(|event| event.attempt() == 1));

        let session = session.lock();
        assert_eq!(session.status(), SessionStatus::Finished);
        assert_eq!(session.remaining_seconds(), 0);
        assert!(!timer.is_active());
    }

    #[tokio::test(start_paused = true)]
    async fn test_stop_freezes_remaining_time() {
        let session = shared_session(60);
        let mut timer = CountdownTimer::spawn(
            session.clone(),
            1,
            Duration::from_secs(1),
            Arc::new(crate::timer::NoopObserver),
        )
        .unwrap();

        tokio::time::sleep(Duration::from_millis(2500)).await;
        timer.stop();
        tokio::time::sleep(Duration::from_secs(5)).await;

        let session = session.lock();
        assert_eq!(session.remaining_seconds(), 58);
        assert_eq!(session.status(), SessionStatus::InProgress);
    }

    #[test]
    fn test_spawn_without_runtime() {
        let session = shared_session(5);
        let err = CountdownTimer::spawn(
            session,
            1,
            Duration::from_secs(1),
            Arc::new(crate::timer::NoopObserver),
        )
        .unwrap_err();
        assert!(err.is_configuration());
    }
}
