//! Cancellable one-shot timers on a simulation clock.
//!
//! Timers live in a min-heap keyed by due time. Cancelling only disarms
//! the handle; the heap entry is discarded lazily when it surfaces.

use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashSet};
use std::time::Duration;

use super::types::MessageId;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerKind {
    /// Repeating simulation tick (re-armed by the simulator)
    Tick,
    /// Remove a message from the log
    Expire(MessageId),
}

/// Handle returned by [`TimerQueue::schedule`], used to cancel a timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimerHandle(u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Scheduled {
    at: Duration,
    seq: u64,
    kind: TimerKind,
}

impl Ord for Scheduled {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reversed so BinaryHeap pops the earliest timer; ties keep scheduling order.
        other
            .at
            .cmp(&self.at)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for Scheduled {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

#[derive(Debug, Default)]
pub struct TimerQueue {
    heap: BinaryHeap<Scheduled>,
    armed: HashSet<u64>,
    next_seq: u64,
}

impl TimerQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn schedule(&mut self, at: Duration, kind: TimerKind) -> TimerHandle {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.heap.push(Scheduled { at, seq, kind });
        self.armed.insert(seq);
        TimerHandle(seq)
    }

    /// Disarm a timer. Returns false if it already fired or was cancelled.
    pub fn cancel(&mut self, handle: TimerHandle) -> bool {
        self.armed.remove(&handle.0)
    }

    /// Pop the earliest armed timer due at or before `now`.
    pub fn pop_due(&mut self, now: Duration) -> Option<(Duration, TimerKind)> {
        while let Some(next) = self.heap.peek() {
            if !self.armed.contains(&next.seq) {
                self.heap.pop();
                continue;
            }
            if next.at > now {
                return None;
            }
            let fired = self.heap.pop()?;
            self.armed.remove(&fired.seq);
            return Some((fired.at, fired.kind));
        }
        None
    }

    /// Due time of the earliest armed timer
    pub fn next_deadline(&self) -> Option<Duration> {
        self.heap
            .iter()
            .filter(|s| self.armed.contains(&s.seq))
            .map(|s| s.at)
            .min()
    }

    /// Number of armed timers
    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.armed.len()
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.armed.is_empty()
    }

    /// Number of expiry timers still armed
    #[cfg(test)]
    pub fn armed_expiries(&self) -> usize {
        self.heap
            .iter()
            .filter(|s| self.armed.contains(&s.seq) && matches!(s.kind, TimerKind::Expire(_)))
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn pops_timers_in_due_order() {
        let mut timers = TimerQueue::new();
        timers.schedule(ms(30), TimerKind::Expire(MessageId(3)));
        timers.schedule(ms(10), TimerKind::Tick);
        timers.schedule(ms(20), TimerKind::Expire(MessageId(2)));

        assert_eq!(timers.pop_due(ms(100)), Some((ms(10), TimerKind::Tick)));
        assert_eq!(
            timers.pop_due(ms(100)),
            Some((ms(20), TimerKind::Expire(MessageId(2))))
        );
        assert_eq!(
            timers.pop_due(ms(100)),
            Some((ms(30), TimerKind::Expire(MessageId(3))))
        );
        assert!(timers.pop_due(ms(100)).is_none());
        assert!(timers.is_empty());
    }

    #[test]
    fn ties_fire_in_scheduling_order() {
        let mut timers = TimerQueue::new();
        timers.schedule(ms(5), TimerKind::Expire(MessageId(1)));
        timers.schedule(ms(5), TimerKind::Tick);

        assert_eq!(
            timers.pop_due(ms(5)),
            Some((ms(5), TimerKind::Expire(MessageId(1))))
        );
        assert_eq!(timers.pop_due(ms(5)), Some((ms(5), TimerKind::Tick)));
    }

    #[test]
    fn nothing_fires_before_its_deadline() {
        let mut timers = TimerQueue::new();
        timers.schedule(ms(1000), TimerKind::Tick);
        assert!(timers.pop_due(ms(999)).is_none());
        assert_eq!(timers.next_deadline(), Some(ms(1000)));
        assert!(timers.pop_due(ms(1000)).is_some());
    }

    #[test]
    fn cancelled_timers_never_fire() {
        let mut timers = TimerQueue::new();
        let tick = timers.schedule(ms(10), TimerKind::Tick);
        timers.schedule(ms(20), TimerKind::Expire(MessageId(7)));

        assert!(timers.cancel(tick));
        assert!(!timers.cancel(tick));
        assert_eq!(timers.next_deadline(), Some(ms(20)));
        assert_eq!(
            timers.pop_due(ms(50)),
            Some((ms(20), TimerKind::Expire(MessageId(7))))
        );
        assert!(timers.pop_due(ms(50)).is_none());
    }

    #[test]
    fn fired_handle_cannot_be_cancelled() {
        let mut timers = TimerQueue::new();
        let handle = timers.schedule(ms(1), TimerKind::Tick);
        timers.pop_due(ms(1));
        assert!(!timers.cancel(handle));
    }

    #[test]
    fn counts_only_armed_expiries() {
        let mut timers = TimerQueue::new();
        timers.schedule(ms(1), TimerKind::Tick);
        let a = timers.schedule(ms(2), TimerKind::Expire(MessageId(1)));
        timers.schedule(ms(3), TimerKind::Expire(MessageId(2)));
        timers.cancel(a);
        assert_eq!(timers.armed_expiries(), 1);
        assert_eq!(timers.len(), 2);
        assert_eq!(timers.next_deadline(), Some(ms(1)));
    }
}
