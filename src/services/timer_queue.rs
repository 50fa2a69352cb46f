//! Cancellable queue of deadline-ordered tasks.
//!
//! Nothing here sleeps or spawns. The owner polls [`TimerQueue::pop_due`]
//! from its event loop with the current instant and runs whatever came
//! due, so firing order and cancellation stay on the single event thread.
//! Tasks sharing a deadline fire in the order they were scheduled.

use std::collections::BTreeMap;
use std::time::{Duration, Instant};

/// Insertion sequence number, breaks ties between equal deadlines
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
struct TimerId(u64);

#[derive(Debug)]
pub struct TimerQueue<T> {
    pending: BTreeMap<(Instant, TimerId), T>,
    next_id: u64,
}

impl<T> Default for TimerQueue<T> {
    fn default() -> Self {
        Self {
            pending: BTreeMap::new(),
            next_id: 0,
        }
    }
}

impl<T> TimerQueue<T> {
    pub fn new() -> Self {
        Self::default()
    }

    fn schedule_at(&mut self, deadline: Instant, task: T) {
        let id = TimerId(self.next_id);
        self.next_id += 1;
        self.pending.insert((deadline, id), task);
    }

    pub fn schedule_after(&mut self, now: Instant, delay: Duration, task: T) {
        self.schedule_at(now + delay, task);
    }

    /// Revoke every pending task at once. Returns how many were revoked.
    pub fn cancel_all(&mut self) -> usize {
        let revoked = self.pending.len();
        self.pending.clear();
        revoked
    }

    /// Remove and return every task whose deadline is at or before `now`,
    /// earliest first.
    pub fn pop_due(&mut self, now: Instant) -> Vec<T> {
        let mut due = Vec::new();
        while let Some((&(deadline, _), _)) = self.pending.first_key_value() {
            if deadline > now {
                break;
            }
            if let Some((_, task)) = self.pending.pop_first() {
                due.push(task);
            }
        }
        due
    }

    pub fn next_deadline(&self) -> Option<Instant> {
        self.pending.keys().next().map(|(deadline, _)| *deadline)
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}
