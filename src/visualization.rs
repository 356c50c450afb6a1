//! Interactive system visualization shown on the Overview panel.
//!
//! Owns the mock graph, the canvas selection and the simulator. Dropping
//! it tears the simulation down, so remounting starts from a clean, idle
//! state with an empty log. The details card and removed log rows linger
//! while they animate out.

use chrono::{DateTime, Local};
use egui::{RichText, Ui, Vec2};
use std::time::{Duration, Instant};
use tracing::{debug, trace};

use crate::graph::types::NodeDetails;
use crate::graph::{legend_swatch, render_system_graph, GraphViewState, MockGraph, NodeKind};
use crate::motion::{Pose, Presence, ENTER_SECS, SLIDE_DISTANCE};
use crate::simulation::types::SimEvent;
use crate::simulation::{render_message_log, LeavingRow, SimState, SimulationConfig, Simulator};
use crate::theme;

/// Canvas height in points
const CANVAS_HEIGHT: f32 = 380.0;
const CANVAS_MAX_WIDTH: f32 = 760.0;

pub struct SystemVisualization {
    graph: MockGraph,
    view: GraphViewState,
    simulator: Simulator,
    /// Last shown node details, kept while the card animates out
    details: Option<NodeDetails>,
    details_presence: Presence,
    /// Log rows still animating out
    leaving: Vec<LeavingRow>,
    /// Simulation time zero
    epoch: Instant,
    /// Wall-clock time at `epoch`, for log timestamps
    epoch_wall: DateTime<Local>,
}

impl SystemVisualization {
    pub fn new(config: SimulationConfig, autostart: bool) -> Self {
        let mut simulator = Simulator::new(config);
        if autostart {
            simulator.start(Duration::ZERO);
        }
        debug!("System visualization mounted (autostart: {})", autostart);
        Self {
            graph: MockGraph::default(),
            view: GraphViewState::default(),
            simulator,
            details: None,
            details_presence: Presence::hidden(ENTER_SECS),
            leaving: Vec::new(),
            epoch: Instant::now(),
            epoch_wall: Local::now(),
        }
    }

    #[cfg(test)]
    pub fn graph(&self) -> &MockGraph {
        &self.graph
    }

    pub fn view(&self) -> &GraphViewState {
        &self.view
    }

    pub fn simulator(&self) -> &Simulator {
        &self.simulator
    }

    pub fn is_running(&self) -> bool {
        self.simulator.is_running()
    }

    /// Simulation time since mount
    pub fn elapsed(&self) -> Duration {
        self.epoch.elapsed()
    }

    pub fn toggle(&mut self, now: Duration) -> SimState {
        self.simulator.toggle(now)
    }

    /// Select or deselect a node, animating the details card
    pub fn toggle_node(&mut self, id: &str, now: Duration) {
        self.view.toggle_selected(id);
        self.sync_details(now);
    }

    fn sync_details(&mut self, now: Duration) {
        let now = now.as_secs_f64();
        match self.view.selected_details(&self.graph) {
            Some(details) => {
                // Switching nodes updates the card in place
                self.details = Some(details);
                self.details_presence.set(true, now);
            }
            None => {
                self.details_presence.set(false, now);
                if self.details_presence.is_gone(now) {
                    self.details = None;
                }
            }
        }
    }

    /// Details card contents and pose, while shown or animating out
    pub fn details_card(&self, now: Duration) -> Option<(&NodeDetails, Pose)> {
        let details = self.details.as_ref()?;
        let pose = self.details_presence.pose(now.as_secs_f64(), 1.0, -1.0);
        Some((details, pose))
    }

    /// Fire due timers up to `now`
    pub fn step(&mut self, now: Duration) -> Vec<SimEvent> {
        let events = self
            .simulator
            .advance(&self.graph, &mut rand::thread_rng(), now);

        for event in &events {
            match event {
                SimEvent::Evicted { message, at } | SimEvent::Expired { message, at } => {
                    self.leaving.push(LeavingRow {
                        message: message.clone(),
                        removed_at: *at,
                    });
                }
                SimEvent::Sent(id) => trace!("Row {:?} entering", id),
                SimEvent::Skipped { source } => trace!("No row for tick from {}", source),
            }
        }
        self.leaving.retain(|row| !row.is_gone(now));

        events
    }

    /// Delay until the next timer is due, if any
    pub fn repaint_after(&self, now: Duration) -> Option<Duration> {
        self.simulator
            .next_deadline()
            .map(|deadline| deadline.saturating_sub(now))
    }

    /// True while log rows or the details card are mid-animation
    pub fn is_animating(&self, now: Duration) -> bool {
        !self.leaving.is_empty()
            || self.details_presence.is_animating(now.as_secs_f64())
            || self
                .simulator
                .messages()
                .any(|m| now.saturating_sub(m.created_at).as_secs_f32() < ENTER_SECS)
    }

    pub fn show(&mut self, ui: &mut Ui) {
        let now = self.elapsed();
        self.step(now);

        // Controls + legend
        ui.horizontal(|ui| {
            let running = self.is_running();
            let label = if running {
                "⏸ Pause Simulation"
            } else {
                "▶ Start Simulation"
            };
            if ui.add(egui::Button::new(label).selected(running)).clicked() {
                self.toggle(now);
            }

            ui.add_space(16.0);
            for kind in NodeKind::ALL {
                legend_swatch(ui, kind.gradient(), kind.label());
            }
        });
        ui.add_space(8.0);

        let width = ui.available_width().min(CANVAS_MAX_WIDTH);
        if let Some(id) = render_system_graph(ui, &self.graph, &mut self.view, Vec2::new(width, CANVAS_HEIGHT)) {
            self.toggle_node(&id, now);
        }
        self.sync_details(now);

        if let Some((details, pose)) = self.details_card(now) {
            ui.scope(|ui| {
                ui.multiply_opacity(pose.opacity);
                // Slides between 0 and twice the slide distance below the canvas
                ui.add_space(SLIDE_DISTANCE + pose.offset);
                theme::card(ui, |ui| {
                    ui.heading("Node Details");
                    ui.horizontal(|ui| {
                        ui.label(RichText::new("Type:").strong());
                        ui.label(details.kind.id());
                    });
                    ui.horizontal(|ui| {
                        ui.label(RichText::new("Label:").strong());
                        ui.label(&details.label);
                    });
                    ui.horizontal(|ui| {
                        ui.label(RichText::new("Connections:").strong());
                        ui.label(&details.connections);
                    });
                });
            });
            ui.add_space(8.0);
        }

        theme::card(ui, |ui| {
            ui.set_min_width(width - 24.0);
            render_message_log(ui, &self.leaving, self.simulator.messages(), self.epoch_wall, now);
        });

        // Timers are only evaluated on frames, so wake up for the next one
        if let Some(delay) = self.repaint_after(now) {
            ui.ctx().request_repaint_after(delay);
        }
        if self.is_animating(now) {
            ui.ctx().request_repaint();
        }
    }
}
