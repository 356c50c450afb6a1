//! Message and configuration types for the event simulator.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Message identifier, derived from the creation time in milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MessageId(pub u64);

impl MessageId {
    /// Id for a message created at `at`, kept strictly above `previous`.
    pub fn at(at: Duration, previous: Option<MessageId>) -> Self {
        let millis = u64::try_from(at.as_millis()).unwrap_or(u64::MAX);
        match previous {
            Some(MessageId(prev)) if millis <= prev => MessageId(prev.saturating_add(1)),
            _ => MessageId(millis),
        }
    }
}

/// A fake data transfer between two adjacent nodes
#[derive(Debug, Clone, PartialEq)]
pub struct SimulatedMessage {
    pub id: MessageId,
    pub from: String,
    pub to: String,
    pub content: String,
    /// Simulation time since the visualization was mounted
    pub created_at: Duration,
}

/// Events produced while advancing the simulator
#[derive(Debug, Clone, PartialEq)]
pub enum SimEvent {
    /// A message was generated and appended to the log
    Sent(MessageId),
    /// The picked node had no eligible neighbour
    Skipped { source: String },
    /// A message was pushed out by the capacity bound at `at`
    Evicted { message: SimulatedMessage, at: Duration },
    /// A message reached the end of its display window at `at`
    Expired { message: SimulatedMessage, at: Duration },
}

/// Timing knobs for the simulator (persisted in settings)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimulationConfig {
    #[serde(default = "default_tick_period_ms")]
    pub tick_period_ms: u64,
    #[serde(default = "default_expiry_ms")]
    pub expiry_ms: u64,
}

/// Lower bound for the tick period; anything faster floods the log.
pub const MIN_TICK_PERIOD_MS: u64 = 50;
pub const MIN_EXPIRY_MS: u64 = 100;

fn default_tick_period_ms() -> u64 {
    1000
}

fn default_expiry_ms() -> u64 {
    3000
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            tick_period_ms: default_tick_period_ms(),
            expiry_ms: default_expiry_ms(),
        }
    }
}

impl SimulationConfig {
    /// Clamp values that would stall or flood the simulator
    pub fn sanitized(self) -> Self {
        Self {
            tick_period_ms: self.tick_period_ms.max(MIN_TICK_PERIOD_MS),
            expiry_ms: self.expiry_ms.max(MIN_EXPIRY_MS),
        }
    }

    pub fn tick_period(&self) -> Duration {
        Duration::from_millis(self.tick_period_ms.max(MIN_TICK_PERIOD_MS))
    }

    pub fn expiry(&self) -> Duration {
        Duration::from_millis(self.expiry_ms.max(MIN_EXPIRY_MS))
    }
}
