//! Replaceable one-shot deadlines
//!
//! The controller never sleeps. It records when something should happen and
//! the shell calls `tick` once that moment has passed.

use std::time::{Duration, Instant};

#[derive(Debug, Clone, Default)]
pub struct Timer {
    deadline: Option<Instant>,
}

impl Timer {
    /// Arm the timer, replacing any pending deadline
    ///
    /// A delay too large to represent is shortened to the furthest deadline
    /// the clock can hold.
    pub fn arm(&mut self, now: Instant, after: Duration) -> Instant {
        let deadline = saturating_deadline(now, after);
        self.deadline = Some(deadline);
        deadline
    }

    pub fn cancel(&mut self) {
        self.deadline = None;
    }

    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    pub fn is_armed(&self) -> bool {
        self.deadline.is_some()
    }

    /// Returns true exactly once, when `now` has reached the deadline
    pub fn fire_if_due(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }
}

fn saturating_deadline(now: Instant, mut after: Duration) -> Instant {
    loop {
        if let Some(deadline) = now.checked_add(after) {
            return deadline;
        }
        after /= 2;
    }
}
