#![forbid(unsafe_code)]

//! Fire-and-forget deferred actions on a host-driven clock.
//!
//! A [`TimerQueue`] stores payloads keyed by a monotonic deadline. Nothing is
//! ever cancelled: the owner pops due entries after the host advances time
//! and handles each payload in deadline order.
//!
//! # Invariants
//!
//! 1. Entries pop in ascending deadline order.
//! 2. Entries with equal deadlines pop in scheduling order.
//! 3. An entry never pops before its deadline.
//!
//! # Example
//!
//! ```
//! use swiper_core::timer::TimerQueue;
//! use std::time::Duration;
//!
//! let mut timers = TimerQueue::new();
//! timers.schedule_after(Duration::ZERO, Duration::from_millis(300), "release");
//! timers.schedule_after(Duration::ZERO, Duration::from_millis(60), "pop");
//!
//! assert_eq!(timers.pop_due(Duration::from_millis(100)), Some("pop"));
//! assert_eq!(timers.pop_due(Duration::from_millis(100)), None);
//! assert_eq!(timers.pop_due(Duration::from_millis(300)), Some("release"));
//! ```

use std::cmp::Ordering;
use std::collections::BinaryHeap;
use std::time::Duration;

/// Handle for a scheduled entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerId(u64);

impl TimerId {
    /// Raw sequence number.
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }
}

#[derive(Debug)]
struct Entry<T> {
    deadline: Duration,
    seq: u64,
    payload: T,
}

impl<T> PartialEq for Entry<T> {
    fn eq(&self, other: &Self) -> bool {
        self.deadline == other.deadline && self.seq == other.seq
    }
}

impl<T> Eq for Entry<T> {}

impl<T> PartialOrd for Entry<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T> Ord for Entry<T> {
    // Reversed so the max-heap yields the earliest deadline first.
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .deadline
            .cmp(&self.deadline)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

/// Min-deadline queue of deferred payloads.
#[derive(Debug)]
pub struct TimerQueue<T> {
    heap: BinaryHeap<Entry<T>>,
    next_seq: u64,
}

impl<T> Default for TimerQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> TimerQueue<T> {
    /// Create an empty queue.
    #[must_use]
    pub fn new() -> Self {
        Self {
            heap: BinaryHeap::new(),
            next_seq: 0,
        }
    }

    /// Schedule `payload` at an absolute deadline.
    pub fn schedule(&mut self, deadline: Duration, payload: T) -> TimerId {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.heap.push(Entry {
            deadline,
            seq,
            payload,
        });
        TimerId(seq)
    }

    /// Schedule `payload` at `now + delay`.
    pub fn schedule_after(&mut self, now: Duration, delay: Duration, payload: T) -> TimerId {
        self.schedule(now.saturating_add(delay), payload)
    }

    /// Pop the earliest entry whose deadline is `<= now`.
    pub fn pop_due(&mut self, now: Duration) -> Option<T> {
        if self.heap.peek()?.deadline > now {
            return None;
        }
        self.heap.pop().map(|entry| entry.payload)
    }

    /// Deadline of the earliest pending entry.
    #[must_use]
    pub fn next_deadline(&self) -> Option<Duration> {
        self.heap.peek().map(|entry| entry.deadline)
    }

    /// Number of pending entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Whether nothing is pending.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }
}
