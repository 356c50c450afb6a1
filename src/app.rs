//! Main application state and UI.

use crate::content::{self, DemoChat};
use crate::section::{nav_intro_running, nav_intro_scale, Section, SectionSwitcher, TransitionFrame};
use crate::settings::Settings;
use crate::theme;
use crate::visualization::SystemVisualization;
use eframe::egui::{self, RichText};
use std::path::PathBuf;
use std::time::{Duration, Instant};
use tracing::{debug, info};

/// Minimum gap between debounced settings saves
const SETTINGS_SAVE_DEBOUNCE: Duration = Duration::from_secs(2);

/// Whether dirty settings are due for a debounced save
fn settings_save_due(dirty: bool, since_last_save: Duration) -> bool {
    dirty && since_last_save >= SETTINGS_SAVE_DEBOUNCE
}

/// Main explorer application
pub struct ExplorerApp {
    // Navigation
    switcher: SectionSwitcher,

    // Overview visualization, only alive while its panel is on screen
    visualization: Option<SystemVisualization>,

    // Demo panel transcript
    demo_chat: DemoChat,

    // Clock for transitions and the navbar intro
    launched: Instant,

    // Settings persistence
    settings: Settings,
    settings_path: Option<PathBuf>,
    settings_dirty: bool,
    last_settings_save: Instant,
}

impl ExplorerApp {
    pub fn new(_cc: &eframe::CreationContext<'_>) -> Self {
        // Load saved settings
        Self::with_settings(Settings::load(), Settings::config_path())
    }

    pub fn with_settings(settings: Settings, settings_path: Option<PathBuf>) -> Self {
        let settings = settings.sanitized();
        let switcher = SectionSwitcher::new(settings.active_section, settings.transition_secs, 0.0);

        Self {
            switcher,
            visualization: None,
            demo_chat: DemoChat::default(),
            launched: Instant::now(),
            settings,
            settings_path,
            settings_dirty: false,
            last_settings_save: Instant::now(),
        }
    }

    /// Seconds since launch
    fn now(&self) -> f64 {
        self.launched.elapsed().as_secs_f64()
    }

    /// Mark settings as needing to be saved
    fn mark_settings_dirty(&mut self) {
        self.settings_dirty = true;
    }

    /// Save settings if dirty and enough time has passed (debounce)
    fn maybe_save_settings(&mut self, now: Instant) -> bool {
        let since_last_save = now.saturating_duration_since(self.last_settings_save);
        if !settings_save_due(self.settings_dirty, since_last_save) {
            return false;
        }
        self.save_settings(now);
        true
    }

    /// Save immediately if anything changed
    fn flush_settings(&mut self) -> bool {
        if !self.settings_dirty {
            return false;
        }
        self.save_settings(Instant::now());
        true
    }

    fn save_settings(&mut self, now: Instant) {
        self.settings.save(self.settings_path.as_deref());
        self.settings_dirty = false;
        self.last_settings_save = now;
    }

    fn select_section(&mut self, section: Section, now: f64) {
        if self.switcher.select(section, now) {
            info!("Section changed to {}", section.id());
            self.settings.active_section = section;
            self.mark_settings_dirty();
        }
    }

    /// Mount or tear down the visualization to match what is on screen.
    fn sync_mounted(&mut self, now: f64) -> TransitionFrame {
        let frame = self.switcher.frame(now);
        let overview_shown = frame.section == Section::Overview;

        if overview_shown && self.visualization.is_none() {
            self.visualization = Some(SystemVisualization::new(
                self.settings.simulation,
                self.settings.simulate_on_launch,
            ));
        } else if !overview_shown && self.visualization.is_some() {
            self.visualization = None;
            debug!("System visualization unmounted");
        }

        frame
    }

    fn render_navbar(&mut self, ui: &mut egui::Ui, now: f64) {
        ui.horizontal(|ui| {
            ui.label(RichText::new("🐾").size(24.0));
            ui.label(RichText::new("Clawdbot Explorer").size(20.0).strong());
            ui.add_space(24.0);

            for (i, section) in Section::ALL.into_iter().enumerate() {
                let scale = nav_intro_scale(i, now as f32);
                let active = self.switcher.active() == section;
                let text = RichText::new(format!("{} {}", section.icon(), section.title()))
                    .size(14.0 * (0.6 + 0.4 * scale))
                    .color(theme::text::PRIMARY.gamma_multiply(scale));

                let button = egui::Button::new(text)
                    .selected(active)
                    .fill(if active { theme::accent::PURPLE } else { theme::bg::SURFACE });
                if ui.add(button).clicked() {
                    self.select_section(section, now);
                }
            }

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.menu_button("⚙", |ui| self.render_settings_menu(ui));
            });
        });
    }

    fn render_settings_menu(&mut self, ui: &mut egui::Ui) {
        ui.label(RichText::new("Settings").strong());
        ui.separator();

        if ui
            .checkbox(&mut self.settings.simulate_on_launch, "Start simulation on open")
            .changed()
        {
            self.mark_settings_dirty();
        }

        if ui
            .add(egui::Slider::new(&mut self.settings.transition_secs, 0.0..=2.0).text("Transition (s)"))
            .changed()
        {
            self.switcher.set_duration(self.settings.transition_secs);
            self.mark_settings_dirty();
        }

        ui.add_space(4.0);
        ui.label(RichText::new("Simulation").color(theme::text::SECONDARY));
        let tick = ui.add(
            egui::Slider::new(&mut self.settings.simulation.tick_period_ms, 50..=5000)
                .text("Tick (ms)"),
        );
        let expiry = ui.add(
            egui::Slider::new(&mut self.settings.simulation.expiry_ms, 100..=10_000)
                .text("Message lifetime (ms)"),
        );
        if tick.changed() || expiry.changed() {
            self.settings.simulation = self.settings.simulation.sanitized();
            // Remount on the next frame so the new timing applies
            self.visualization = None;
            self.mark_settings_dirty();
        }

        ui.add_space(4.0);
        if ui.button("↺ Reset All").clicked() {
            let section = self.settings.active_section;
            self.settings = Settings {
                active_section: section,
                ..Settings::default()
            };
            self.switcher.set_duration(self.settings.transition_secs);
            self.visualization = None;
            self.mark_settings_dirty();
        }
    }

    fn render_content(&mut self, ui: &mut egui::Ui, section: Section) {
        match section {
            Section::Overview => {
                if let Some(visualization) = self.visualization.as_mut() {
                    content::render_overview(ui, visualization);
                }
            }
            Section::Architecture => content::render_architecture(ui),
            Section::Features => content::render_features(ui),
            Section::Demo => content::render_demo(ui, &mut self.demo_chat),
            Section::Integration => content::render_integration(ui),
        }
    }
}

impl eframe::App for ExplorerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.maybe_save_settings(Instant::now());
        let now = self.now();

        // Dark theme
        ctx.set_visuals(egui::Visuals::dark());

        egui::TopBottomPanel::top("navbar")
            .frame(egui::Frame::none()
                .fill(theme::bg::PANEL)
                .inner_margin(egui::Margin::symmetric(16.0, 10.0)))
            .show(ctx, |ui| {
                self.render_navbar(ui, now);
            });

        let frame = self.sync_mounted(now);

        egui::CentralPanel::default()
            .frame(egui::Frame::none()
                .fill(theme::bg::CONTENT)
                .inner_margin(egui::Margin::symmetric(32.0, 0.0)))
            .show(ctx, |ui| {
                egui::ScrollArea::vertical().show(ui, |ui| {
                    ui.set_opacity(frame.opacity);
                    // Base gap plus the slide offset, which ranges over -20..20
                    ui.add_space(24.0 + frame.offset_y);
                    self.render_content(ui, frame.section);
                    ui.add_space(24.0);
                });
            });

        // Keep animating transitions and the navbar intro
        if self.switcher.is_animating(now) || nav_intro_running(now as f32) {
            ctx.request_repaint();
        }
    }

    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        // Force save settings on exit
        self.flush_settings();
    }
}

#[cfg(test)]
#[path = "app_tests.rs"]
mod tests;
