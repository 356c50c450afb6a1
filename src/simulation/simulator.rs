//! Idle/Running state machine that fakes traffic on the mock graph.
//!
//! Time is a `Duration` supplied by the caller and randomness is any
//! `rand::Rng`, so the whole loop can be driven step by step in tests.

use rand::seq::SliceRandom;
use rand::Rng;
use std::time::Duration;
use tracing::{debug, info, trace};

use super::log::MessageLog;
use super::timer::{TimerHandle, TimerKind, TimerQueue};
use super::types::{MessageId, SimEvent, SimulatedMessage, SimulationConfig};
use crate::graph::types::{MockGraph, Node};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SimState {
    Idle,
    Running,
}

/// Outcome of one random pick
#[derive(Debug, Clone, Copy)]
pub enum Pick<'a> {
    Transfer { from: &'a Node, to: &'a Node },
    /// The chosen source has no eligible neighbour
    NoNeighbor(&'a Node),
    EmptyGraph,
}

/// Pick a source uniformly from all nodes, then a destination uniformly
/// from its neighbours.
pub fn pick_transfer<'a, R: Rng + ?Sized>(graph: &'a MockGraph, rng: &mut R) -> Pick<'a> {
    let Some(from) = graph.nodes().choose(rng) else {
        return Pick::EmptyGraph;
    };
    match graph.neighbors(&from.id).choose(rng) {
        Some(&to) => Pick::Transfer { from, to },
        None => Pick::NoNeighbor(from),
    }
}

pub fn transfer_text(source: &Node) -> String {
    format!("Data transfer from {}", source.label)
}

pub struct Simulator {
    config: SimulationConfig,
    state: SimState,
    timers: TimerQueue,
    /// Handle of the armed tick while running
    tick: Option<TimerHandle>,
    log: MessageLog,
    last_id: Option<MessageId>,
}

impl Default for Simulator {
    fn default() -> Self {
        Self::new(SimulationConfig::default())
    }
}

impl Simulator {
    pub fn new(config: SimulationConfig) -> Self {
        Self {
            config: config.sanitized(),
            state: SimState::Idle,
            timers: TimerQueue::new(),
            tick: None,
            log: MessageLog::new(),
            last_id: None,
        }
    }

    #[cfg(test)]
    pub fn state(&self) -> SimState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state == SimState::Running
    }

    /// Enter Running; the first tick fires one period after `now`.
    pub fn start(&mut self, now: Duration) {
        if self.is_running() {
            return;
        }
        self.state = SimState::Running;
        self.tick = Some(
            self.timers
                .schedule(now + self.config.tick_period(), TimerKind::Tick),
        );
        info!(
            "Simulation started (tick {:?}, expiry {:?})",
            self.config.tick_period(),
            self.config.expiry()
        );
    }

    /// Enter Idle and cancel the repeating tick.
    ///
    /// Pending expiries stay armed: each one targets a message that is still
    /// in the log, so the log keeps draining after a stop.
    pub fn stop(&mut self) {
        if !self.is_running() {
            return;
        }
        if let Some(tick) = self.tick.take() {
            self.timers.cancel(tick);
        }
        self.state = SimState::Idle;
        info!("Simulation stopped ({} messages still live)", self.log.len());
    }

    pub fn toggle(&mut self, now: Duration) -> SimState {
        match self.state {
            SimState::Idle => self.start(now),
            SimState::Running => self.stop(),
        }
        self.state
    }

    /// Fire every timer due at or before `now`, in due order.
    pub fn advance<R: Rng + ?Sized>(
        &mut self,
        graph: &MockGraph,
        rng: &mut R,
        now: Duration,
    ) -> Vec<SimEvent> {
        let mut events = Vec::new();

        while let Some((at, kind)) = self.timers.pop_due(now) {
            match kind {
                TimerKind::Tick => {
                    self.tick = None;
                    if !self.is_running() {
                        continue;
                    }
                    self.on_tick(graph, rng, at, &mut events);
                    // Fixed rate: next tick is relative to this one, not to `now`
                    self.tick = Some(
                        self.timers
                            .schedule(at + self.config.tick_period(), TimerKind::Tick),
                    );
                }
                TimerKind::Expire(id) => {
                    if let Some(entry) = self.log.remove(id) {
                        trace!("Message {:?} expired at {:?}", id, at);
                        events.push(SimEvent::Expired {
                            message: entry.message,
                            at,
                        });
                    }
                }
            }
        }

        events
    }

    fn on_tick<R: Rng + ?Sized>(
        &mut self,
        graph: &MockGraph,
        rng: &mut R,
        at: Duration,
        events: &mut Vec<SimEvent>,
    ) {
        match pick_transfer(graph, rng) {
            Pick::Transfer { from, to } => {
                let id = MessageId::at(at, self.last_id);
                self.last_id = Some(id);

                let message = SimulatedMessage {
                    id,
                    from: from.id.clone(),
                    to: to.id.clone(),
                    content: transfer_text(from),
                    created_at: at,
                };
                debug!("Message {:?}: {} -> {}", id, message.from, message.to);

                let expiry = self
                    .timers
                    .schedule(at + self.config.expiry(), TimerKind::Expire(id));
                events.push(SimEvent::Sent(id));

                if let Some(evicted) = self.log.push(message, expiry) {
                    self.timers.cancel(evicted.expiry);
                    debug!("Message {:?} evicted by capacity", evicted.message.id);
                    events.push(SimEvent::Evicted {
                        message: evicted.message,
                        at,
                    });
                }
            }
            Pick::NoNeighbor(source) => {
                debug!("Tick skipped: {} has no neighbours", source.id);
                events.push(SimEvent::Skipped {
                    source: source.id.clone(),
                });
            }
            Pick::EmptyGraph => {
                trace!("Tick skipped: graph is empty");
            }
        }
    }

    /// Live messages in arrival order
    pub fn messages(&self) -> impl Iterator<Item = &SimulatedMessage> {
        self.log.messages()
    }

    #[cfg(test)]
    pub fn message_count(&self) -> usize {
        self.log.len()
    }

    /// Earliest pending timer, for repaint scheduling
    pub fn next_deadline(&self) -> Option<Duration> {
        self.timers.next_deadline()
    }

    /// Number of armed timers (tick plus expiries)
    #[cfg(test)]
    pub fn pending_timers(&self) -> usize {
        self.timers.len()
    }

    #[cfg(test)]
    pub fn pending_expiries(&self) -> usize {
        self.timers.armed_expiries()
    }
}

impl Drop for Simulator {
    fn drop(&mut self) {
        self.stop();
    }
}
