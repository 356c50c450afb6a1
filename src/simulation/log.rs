//! Bounded recency log of live messages.

use std::collections::VecDeque;

use super::timer::TimerHandle;
use super::types::{MessageId, SimulatedMessage};

/// Maximum number of messages shown at once
pub const LOG_CAPACITY: usize = 5;

/// A live message together with the timer that will expire it
#[derive(Debug, Clone)]
pub struct LogEntry {
    pub message: SimulatedMessage,
    pub expiry: TimerHandle,
}

/// FIFO of at most [`LOG_CAPACITY`] messages, oldest first.
#[derive(Debug, Default)]
pub struct MessageLog {
    entries: VecDeque<LogEntry>,
}

impl MessageLog {
    pub fn new() -> Self {
        Self {
            entries: VecDeque::with_capacity(LOG_CAPACITY),
        }
    }

    /// Append a message. Returns the oldest entry if it had to make room.
    pub fn push(&mut self, message: SimulatedMessage, expiry: TimerHandle) -> Option<LogEntry> {
        let evicted = if self.entries.len() >= LOG_CAPACITY {
            self.entries.pop_front()
        } else {
            None
        };
        self.entries.push_back(LogEntry { message, expiry });
        evicted
    }

    /// Remove a message by id, if it is still in the log
    pub fn remove(&mut self, id: MessageId) -> Option<LogEntry> {
        let pos = self.entries.iter().position(|e| e.message.id == id)?;
        self.entries.remove(pos)
    }

    /// Messages in arrival order
    pub fn messages(&self) -> impl Iterator<Item = &SimulatedMessage> {
        self.entries.iter().map(|e| &e.message)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
