//! Countdown state, independent of any clock

/// Outcome of a single countdown tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tick {
    /// One second was removed; this many remain (always > 0)
    Remaining(u32),
    /// The last second was removed. Returned exactly once.
    Expired,
    /// The countdown was already stopped; nothing changed
    Stopped,
}

/// Remaining-time counter for one session
///
/// Decrements by one per [`tick`](Self::tick), never below zero. Reaching
/// zero or calling [`stop`](Self::stop) stops it permanently.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Countdown {
    remaining: u32,
    stopped: bool,
}

impl Countdown {
    pub fn new(limit_secs: u32) -> Self {
        Self {
            remaining: limit_secs,
            stopped: limit_secs == 0,
        }
    }

    #[inline]
    pub fn remaining(&self) -> u32 {
        self.remaining
    }

    #[inline]
    pub fn is_stopped(&self) -> bool {
        self.stopped
    }

    pub fn tick(&mut self) -> Tick {
        if self.stopped {
            return Tick::Stopped;
        }

        self.remaining = self.remaining.saturating_sub(1);
        if self.remaining == 0 {
            self.stopped = true;
            Tick::Expired
        } else {
            Tick::Remaining(self.remaining)
        }
    }

    pub fn stop(&mut self) {
        self.stopped = true;
    }
}
