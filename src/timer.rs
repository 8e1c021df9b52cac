//! Auto-dismiss timing.

use std::time::{Duration, Instant};

/// Cancellable single-shot deadline for auto-dismissing the active alert.
///
/// The coordinator arms one token per presentation cycle and discards it
/// afterwards; it never reuses a token across alerts. Cancelling twice, or
/// cancelling after the deadline has already passed, is harmless.
#[derive(Debug, Clone, Copy)]
pub struct DismissTimer {
    deadline: Instant,
    cancelled: bool,
}

impl DismissTimer {
    /// Arm a timer that fires `duration` after `now`.
    pub fn arm(now: Instant, duration: Duration) -> Self {
        Self {
            deadline: now + duration,
            cancelled: false,
        }
    }

    /// Cancel the timer. Idempotent.
    pub fn cancel(&mut self) {
        self.cancelled = true;
    }

    /// Whether the deadline has passed and the timer was not cancelled.
    pub fn is_fired(&self, now: Instant) -> bool {
        !self.cancelled && now >= self.deadline
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled
    }

    pub fn deadline(&self) -> Instant {
        self.deadline
    }
}
