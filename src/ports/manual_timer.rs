//! Deterministic virtual clock.

use super::TimerPort;
use crate::coordinator::TimerEvent;
use std::time::Duration;

#[derive(Debug)]
struct Scheduled {
    due: Duration,
    seq: u64,
    event: TimerEvent,
}

/// Timer whose clock only moves when told to.
///
/// Events come out in deadline order; events sharing a deadline come out
/// in the order they were scheduled. The coordinator's
/// [`advance`](crate::coordinator::OperationCoordinator::advance) drives
/// this timer and delivers what falls due.
#[derive(Debug, Default)]
pub struct ManualTimer {
    now: Duration,
    next_seq: u64,
    queue: Vec<Scheduled>,
}

impl ManualTimer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Virtual time elapsed since construction.
    pub fn now(&self) -> Duration {
        self.now
    }

    /// Number of scheduled events not yet delivered.
    pub fn pending(&self) -> usize {
        self.queue.len()
    }

    /// Deadline of the earliest scheduled event.
    pub fn next_due(&self) -> Option<Duration> {
        self.queue.iter().map(|s| s.due).min()
    }

    /// Remove the earliest event due at or before `deadline`, moving the
    /// clock to its due time.
    pub fn pop_due(&mut self, deadline: Duration) -> Option<TimerEvent> {
        let index = self
            .queue
            .iter()
            .enumerate()
            .filter(|(_, s)| s.due <= deadline)
            .min_by_key(|(_, s)| (s.due, s.seq))
            .map(|(i, _)| i)?;

        let scheduled = self.queue.swap_remove(index);
        self.now = self.now.max(scheduled.due);
        Some(scheduled.event)
    }

    /// Move the clock forward without delivering anything.
    pub fn advance_to(&mut self, instant: Duration) {
        self.now = self.now.max(instant);
    }
}

impl TimerPort for ManualTimer {
    fn after(&mut self, delay: Duration, event: TimerEvent) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.queue.push(Scheduled {
            due: self.now + delay,
            seq,
            event,
        });
    }
}
