//! Static content panels.

use egui::{Rect, RichText, Ui, Vec2};
use tracing::debug;

use crate::motion::{self, Pose, ENTER_SECS, HOVER_LIFT};
use crate::theme;
use crate::visualization::SystemVisualization;

/// Overview intro: the hero settles first, then the visualization fades in
const HERO_DELAY_SECS: f32 = 0.2;
const VISUAL_DELAY_SECS: f32 = 0.4;

pub struct Layer {
    pub title: &'static str,
    pub items: &'static [&'static str],
}

pub const ARCHITECTURE_LAYERS: [Layer; 3] = [
    Layer {
        title: "Interface Layer",
        items: &["Telegram, WhatsApp, Discord", "Web Dashboard", "API Endpoints"],
    },
    Layer {
        title: "Processing Layer",
        items: &["Message Routing", "Intent Recognition", "Context Management"],
    },
    Layer {
        title: "Tool Layer",
        items: &["File Operations", "Web Browsing", "System Commands", "External APIs"],
    },
];

pub struct FeatureCard {
    pub icon: &'static str,
    pub title: &'static str,
    pub blurb: &'static str,
}

pub const FEATURES: [FeatureCard; 3] = [
    FeatureCard {
        icon: "🤖",
        title: "Intelligent Agents",
        blurb: "Autonomous units that can perform complex tasks independently",
    },
    FeatureCard {
        icon: "🔧",
        title: "Extensive Toolset",
        blurb: "Built-in capabilities for file management, web browsing, and system operations",
    },
    FeatureCard {
        icon: "🌐",
        title: "Cross-Platform",
        blurb: "Connect multiple communication channels in one unified interface",
    },
];

pub struct IntegrationGroup {
    pub icon: &'static str,
    pub title: &'static str,
    pub items: &'static [&'static str],
}

pub const INTEGRATIONS: [IntegrationGroup; 3] = [
    IntegrationGroup {
        icon: "💬",
        title: "Chat Platforms",
        items: &["Telegram", "WhatsApp", "Discord", "Slack"],
    },
    IntegrationGroup {
        icon: "💾",
        title: "Storage",
        items: &["Local File System", "Cloud Storage", "Database Systems"],
    },
    IntegrationGroup {
        icon: "⚙",
        title: "System Tools",
        items: &["Command Execution", "Process Management", "Automation Scripts"],
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Speaker {
    User,
    Bot,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatLine {
    pub speaker: Speaker,
    pub text: &'static str,
}

/// Maximum transcript length in the demo panel
pub const MAX_CHAT_LINES: usize = 12;

const OPENING: [(Speaker, &str); 2] = [
    (Speaker::User, "Tell me about Clawdbot's capabilities"),
    (
        Speaker::Bot,
        "Clawdbot is an intelligent automation platform that can help you with file management, web research, system operations, and more!",
    ),
];

const TRY_COMMAND: [(Speaker, &str); 2] = [
    (Speaker::User, "List the files in my project folder"),
    (
        Speaker::Bot,
        "Using the File Tool: found 3 folders and 12 files. Want me to summarize any of them?",
    ),
];

const EXPLORE_TOOLS: [(Speaker, &str); 2] = [
    (Speaker::User, "Which tools can you use?"),
    (
        Speaker::Bot,
        "I can work with files, browse the web, run system commands and call external APIs.",
    ),
];

/// Scripted chat transcript for the Demo panel
#[derive(Debug, Clone)]
pub struct DemoChat {
    lines: Vec<ChatLine>,
}

impl Default for DemoChat {
    fn default() -> Self {
        let mut chat = Self { lines: Vec::new() };
        chat.append(&OPENING);
        chat
    }
}

impl DemoChat {
    pub fn lines(&self) -> &[ChatLine] {
        &self.lines
    }

    pub fn try_command(&mut self) {
        self.append(&TRY_COMMAND);
    }

    pub fn explore_tools(&mut self) {
        self.append(&EXPLORE_TOOLS);
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    fn append(&mut self, exchange: &[(Speaker, &'static str)]) {
        self.lines.extend(
            exchange
                .iter()
                .map(|&(speaker, text)| ChatLine { speaker, text }),
        );
        if self.lines.len() > MAX_CHAT_LINES {
            let excess = self.lines.len() - MAX_CHAT_LINES;
            self.lines.drain(..excess);
        }
    }
}

fn section_header(ui: &mut Ui, title: &str, subtitle: &str) {
    ui.heading(RichText::new(title).size(26.0).color(theme::text::PRIMARY));
    ui.label(RichText::new(subtitle).color(theme::text::SECONDARY));
    ui.add_space(16.0);
}

fn bullet_list(ui: &mut Ui, items: &[&str]) {
    for item in items {
        ui.label(RichText::new(format!("• {}", item)).color(theme::text::SECONDARY));
    }
}

/// Hero pose `since_mount` seconds after the Overview panel appeared
pub fn hero_pose(since_mount: f32) -> Pose {
    Pose::entering(motion::progress(since_mount, HERO_DELAY_SECS, ENTER_SECS), 1.0)
}

/// Visualization opacity `since_mount` seconds after the Overview panel appeared
pub fn visual_opacity(since_mount: f32) -> f32 {
    motion::progress(since_mount, VISUAL_DELAY_SECS, ENTER_SECS)
}

pub fn render_overview(ui: &mut Ui, visualization: &mut SystemVisualization) {
    let since_mount = visualization.elapsed().as_secs_f32();
    let hero = hero_pose(since_mount);

    ui.scope(|ui| {
        ui.multiply_opacity(hero.opacity);
        ui.add_space(hero.offset);
        ui.vertical_centered(|ui| {
            ui.heading(RichText::new("Discover Clawdbot").size(34.0).strong());
            ui.label(
                RichText::new(
                    "An intelligent automation platform that bridges the gap between AI and real-world applications.",
                )
                .color(theme::text::SECONDARY),
            );
        });
        // Keeps the visualization still while the hero slides
        ui.add_space(motion::SLIDE_DISTANCE - hero.offset);
    });

    ui.scope(|ui| {
        ui.multiply_opacity(visual_opacity(since_mount));
        visualization.show(ui);
    });

    if since_mount < VISUAL_DELAY_SECS + ENTER_SECS {
        ui.ctx().request_repaint();
    }
}

pub fn render_architecture(ui: &mut Ui) {
    section_header(
        ui,
        "System Architecture",
        "Clawdbot follows a modular architecture with clear separation of concerns.",
    );
    for layer in &ARCHITECTURE_LAYERS {
        theme::card(ui, |ui| {
            ui.set_min_width(ui.available_width());
            ui.label(RichText::new(layer.title).strong().size(16.0));
            ui.add_space(4.0);
            bullet_list(ui, layer.items);
        });
        ui.add_space(8.0);
    }
}

pub fn render_features(ui: &mut Ui) {
    section_header(ui, "Key Features", "Discover the powerful capabilities of Clawdbot.");
    ui.columns(FEATURES.len(), |columns| {
        for (ui, feature) in columns.iter_mut().zip(FEATURES.iter()) {
            let hover_id = ui.id().with(("feature_hover", feature.title));
            let hovered = ui.ctx().data(|d| d.get_temp::<bool>(hover_id)).unwrap_or(false);
            let lift = ui.ctx().animate_bool_with_time(hover_id, hovered, ENTER_SECS);
            ui.add_space(HOVER_LIFT + motion::hover_lift(lift));

            let response = egui::Frame::none()
                .fill(theme::bg::SURFACE)
                .stroke(theme::stroke(theme::border::DEFAULT, 1.0))
                .rounding(8.0)
                .inner_margin(16.0)
                .show(ui, |ui| {
                    ui.label(RichText::new(feature.icon).size(28.0));
                    ui.label(RichText::new(feature.title).strong().size(16.0));
                    ui.label(RichText::new(feature.blurb).color(theme::text::SECONDARY));
                })
                .response;

            // Count the gap left under a lifted card as hovered too
            let hover_rect = Rect::from_min_max(response.rect.min, response.rect.max + Vec2::new(0.0, HOVER_LIFT));
            let hovered = ui.rect_contains_pointer(hover_rect);
            ui.ctx().data_mut(|d| d.insert_temp(hover_id, hovered));
            if hovered {
                ui.painter().rect_stroke(
                    response.rect,
                    8.0,
                    theme::stroke(theme::accent::PURPLE, 1.5),
                );
            }
        }
    });
}

pub fn render_demo(ui: &mut Ui, chat: &mut DemoChat) {
    section_header(
        ui,
        "Interactive Demo",
        "Try out the core functionality of Clawdbot in this simulated environment.",
    );

    theme::card(ui, |ui| {
        ui.set_min_width(ui.available_width());
        for line in chat.lines() {
            let (layout, fill) = match line.speaker {
                Speaker::User => (egui::Layout::right_to_left(egui::Align::TOP), theme::accent::PURPLE),
                Speaker::Bot => (egui::Layout::left_to_right(egui::Align::TOP), theme::bg::SURFACE_HOVER),
            };
            ui.with_layout(layout, |ui| {
                egui::Frame::none()
                    .fill(fill)
                    .rounding(10.0)
                    .inner_margin(8.0)
                    .show(ui, |ui| {
                        ui.set_max_width(420.0);
                        ui.label(RichText::new(line.text).color(theme::text::PRIMARY));
                    });
            });
            ui.add_space(4.0);
        }
    });

    ui.add_space(8.0);
    ui.horizontal(|ui| {
        if ui.button("Try Command").clicked() {
            debug!("Demo: try command");
            chat.try_command();
        }
        if ui.button("Explore Tools").clicked() {
            debug!("Demo: explore tools");
            chat.explore_tools();
        }
        if ui.button("↺ Reset").clicked() {
            chat.reset();
        }
    });
}

pub fn render_integration(ui: &mut Ui) {
    section_header(
        ui,
        "Easy Integration",
        "Connect Clawdbot to your preferred platforms and services.",
    );
    ui.columns(INTEGRATIONS.len(), |columns| {
        for (ui, group) in columns.iter_mut().zip(INTEGRATIONS.iter()) {
            theme::card(ui, |ui| {
                ui.label(RichText::new(group.icon).size(26.0));
                ui.label(RichText::new(group.title).strong().size(16.0));
                ui.add_space(4.0);
                bullet_list(ui, group.items);
            });
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn demo_starts_with_opening_exchange() {
        let chat = DemoChat::default();
        assert_eq!(chat.lines().len(), 2);
        assert_eq!(chat.lines()[0].speaker, Speaker::User);
        assert_eq!(chat.lines()[0].text, "Tell me about Clawdbot's capabilities");
        assert_eq!(chat.lines()[1].speaker, Speaker::Bot);
    }

    #[test]
    fn demo_buttons_append_exchanges() {
        let mut chat = DemoChat::default();
        chat.try_command();
        chat.explore_tools();
        assert_eq!(chat.lines().len(), 6);
        assert_eq!(chat.lines()[4].text, "Which tools can you use?");
    }

    #[test]
    fn demo_transcript_is_capped() {
        let mut chat = DemoChat::default();
        for _ in 0..20 {
            chat.try_command();
        }
        assert_eq!(chat.lines().len(), MAX_CHAT_LINES);
        // Oldest lines dropped first, so the opening is gone
        assert_ne!(chat.lines()[0].text, OPENING[0].1);
        assert_eq!(chat.lines().last().unwrap().speaker, Speaker::Bot);

        chat.reset();
        assert_eq!(chat.lines().len(), 2);
    }

    #[test]
    fn hero_settles_before_visualization_fades_in() {
        let early = hero_pose(0.1);
        assert_eq!(early.opacity, 0.0);
        assert_eq!(early.offset, motion::SLIDE_DISTANCE);
        assert_eq!(visual_opacity(0.1), 0.0);

        assert!((hero_pose(0.35).opacity - 0.5).abs() < 1e-4);
        assert_eq!(visual_opacity(0.35), 0.0);

        assert_eq!(hero_pose(1.0), Pose::REST);
        assert_eq!(visual_opacity(1.0), 1.0);
    }

    #[test]
    fn static_panels_match_page_copy() {
        assert_eq!(ARCHITECTURE_LAYERS[2].items.len(), 4);
        assert_eq!(FEATURES[1].title, "Extensive Toolset");
        assert_eq!(INTEGRATIONS[0].items, &["Telegram", "WhatsApp", "Discord", "Slack"]);
    }
}
