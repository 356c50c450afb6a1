//! Top-level content sections and the transition between them.

use serde::{Deserialize, Serialize};

use crate::motion::Pose;

/// Navbar intro: per-button stagger and pop duration, in seconds
const NAV_STAGGER_SECS: f32 = 0.1;
const NAV_POP_SECS: f32 = 0.3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Section {
    #[default]
    Overview,
    Architecture,
    Features,
    Demo,
    Integration,
}

impl Section {
    /// All sections in navbar order
    pub const ALL: [Section; 5] = [
        Section::Overview,
        Section::Architecture,
        Section::Features,
        Section::Demo,
        Section::Integration,
    ];

    pub fn id(&self) -> &'static str {
        match self {
            Section::Overview => "overview",
            Section::Architecture => "architecture",
            Section::Features => "features",
            Section::Demo => "demo",
            Section::Integration => "integration",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Section::Overview => "Overview",
            Section::Architecture => "Architecture",
            Section::Features => "Features",
            Section::Demo => "Demo",
            Section::Integration => "Integration",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Section::Overview => "🌐",
            Section::Architecture => "🏗",
            Section::Features => "✨",
            Section::Demo => "🎬",
            Section::Integration => "🔗",
        }
    }
}

/// What to draw this frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransitionFrame {
    pub section: Section,
    pub opacity: f32,
    /// Vertical offset in points (negative = up)
    pub offset_y: f32,
}

/// Holds the active section and animates changes.
///
/// A change first lets the old section exit (fade out, slide up), then
/// the new one enters (fade in, slide down into place).
#[derive(Debug, Clone)]
pub struct SectionSwitcher {
    active: Section,
    previous: Option<Section>,
    /// Time of the last change, in seconds
    changed_at: f64,
    /// Length of each phase, in seconds
    duration: f32,
}

impl SectionSwitcher {
    /// Start on `section`, playing the enter phase from `now`.
    pub fn new(section: Section, duration: f32, now: f64) -> Self {
        Self {
            active: section,
            previous: None,
            changed_at: now,
            duration: duration.max(0.0),
        }
    }

    pub fn active(&self) -> Section {
        self.active
    }

    pub fn set_duration(&mut self, duration: f32) {
        self.duration = duration.max(0.0);
    }

    /// Switch to `section`. Returns false if it was already active.
    pub fn select(&mut self, section: Section, now: f64) -> bool {
        if section == self.active {
            return false;
        }
        // Whatever is on screen now leaves, starting from its current opacity
        let shown = self.frame(now);
        self.previous = Some(shown.section);
        self.active = section;
        self.changed_at = now - ((1.0 - shown.opacity) * self.duration) as f64;
        true
    }

    pub fn frame(&self, now: f64) -> TransitionFrame {
        let elapsed = (now - self.changed_at).max(0.0) as f32;
        let d = self.duration;

        let (section, pose) = match self.previous {
            _ if d <= 0.0 => (self.active, Pose::REST),
            Some(previous) if elapsed < d => (previous, Pose::leaving(elapsed / d, -1.0)),
            Some(_) => (self.active, Pose::entering((elapsed - d) / d, 1.0)),
            None => (self.active, Pose::entering(elapsed / d, 1.0)),
        };
        TransitionFrame {
            section,
            opacity: pose.opacity,
            offset_y: pose.offset,
        }
    }

    pub fn is_animating(&self, now: f64) -> bool {
        let phases = if self.previous.is_some() { 2.0 } else { 1.0 };
        let elapsed = (now - self.changed_at) as f32;
        self.duration > 0.0 && elapsed < self.duration * phases
    }
}

/// Pop-in scale (0..1) of navbar button `index`, `elapsed` seconds after launch.
pub fn nav_intro_scale(index: usize, elapsed: f32) -> f32 {
    let start = NAV_STAGGER_SECS * index as f32;
    ((elapsed - start) / NAV_POP_SECS).clamp(0.0, 1.0)
}

/// True while any navbar button is still popping in
pub fn nav_intro_running(elapsed: f32) -> bool {
    nav_intro_scale(Section::ALL.len() - 1, elapsed) < 1.0
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::motion::SLIDE_DISTANCE;

    fn close(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-4
    }

    #[test]
    fn ids_and_titles_are_fixed() {
        let ids: Vec<&str> = Section::ALL.iter().map(|s| s.id()).collect();
        assert_eq!(ids, vec!["overview", "architecture", "features", "demo", "integration"]);
        assert_eq!(Section::default(), Section::Overview);
        assert_eq!(Section::Demo.title(), "Demo");
    }

    #[test]
    fn serializes_as_lowercase_id() {
        let json = serde_json::to_string(&Section::Integration).unwrap();
        assert_eq!(json, "\"integration\"");
        let back: Section = serde_json::from_str("\"features\"").unwrap();
        assert_eq!(back, Section::Features);
    }

    #[test]
    fn first_frame_enters_without_exit() {
        let switcher = SectionSwitcher::new(Section::Overview, 0.3, 10.0);
        let start = switcher.frame(10.0);
        assert_eq!(start.section, Section::Overview);
        assert!(close(start.opacity, 0.0));
        assert!(close(start.offset_y, SLIDE_DISTANCE));

        let done = switcher.frame(10.3);
        assert!(close(done.opacity, 1.0));
        assert!(close(done.offset_y, 0.0));
        assert!(!switcher.is_animating(10.31));
    }

    #[test]
    fn switch_exits_old_section_then_enters_new() {
        let mut switcher = SectionSwitcher::new(Section::Overview, 0.3, 0.0);
        assert!(switcher.select(Section::Demo, 5.0));
        assert_eq!(switcher.active(), Section::Demo);

        let exiting = switcher.frame(5.15);
        assert_eq!(exiting.section, Section::Overview);
        assert!(close(exiting.opacity, 0.5));
        assert!(close(exiting.offset_y, -10.0));

        let entering = switcher.frame(5.45);
        assert_eq!(entering.section, Section::Demo);
        assert!(close(entering.opacity, 0.5));
        assert!(close(entering.offset_y, 10.0));

        assert!(switcher.is_animating(5.5));
        assert!(!switcher.is_animating(5.61));
        assert!(close(switcher.frame(6.0).opacity, 1.0));
    }

    #[test]
    fn switching_mid_enter_fades_out_from_current_opacity() {
        let mut switcher = SectionSwitcher::new(Section::Overview, 0.3, 0.0);
        switcher.select(Section::Demo, 1.0);

        // Demo is a third of the way in
        let before = switcher.frame(1.4);
        assert_eq!(before.section, Section::Demo);
        assert!(close(before.opacity, 1.0 / 3.0));

        assert!(switcher.select(Section::Features, 1.4));
        let after = switcher.frame(1.4);
        assert_eq!(after.section, Section::Demo);
        assert!(close(after.opacity, before.opacity));
        assert!(switcher.frame(1.45).opacity < after.opacity);

        // The shortened exit hands over to Features on schedule
        let entering = switcher.frame(1.55);
        assert_eq!(entering.section, Section::Features);
        assert!(entering.opacity < 0.5);
        assert!(switcher.is_animating(1.75));
        assert!(!switcher.is_animating(1.85));
    }

    #[test]
    fn switching_mid_exit_keeps_old_section_leaving() {
        let mut switcher = SectionSwitcher::new(Section::Overview, 0.3, 0.0);
        switcher.select(Section::Architecture, 1.0);
        let before = switcher.frame(1.15);
        assert_eq!(before.section, Section::Overview);

        switcher.select(Section::Integration, 1.15);
        let after = switcher.frame(1.15);
        assert_eq!(after.section, Section::Overview);
        assert!(close(after.opacity, before.opacity));
        assert_eq!(switcher.frame(1.5).section, Section::Integration);
    }

    #[test]
    fn selecting_active_section_is_noop() {
        let mut switcher = SectionSwitcher::new(Section::Features, 0.3, 0.0);
        assert!(!switcher.select(Section::Features, 1.0));
        assert_eq!(switcher.frame(1.0).section, Section::Features);
        assert!(!switcher.is_animating(1.0));
    }

    #[test]
    fn opacity_stays_in_unit_range() {
        let mut switcher = SectionSwitcher::new(Section::Overview, 0.3, 0.0);
        switcher.select(Section::Architecture, 1.0);
        for i in 0..100 {
            let frame = switcher.frame(0.5 + i as f64 * 0.01);
            assert!((0.0..=1.0).contains(&frame.opacity));
        }
    }

    #[test]
    fn zero_duration_switches_instantly() {
        let mut switcher = SectionSwitcher::new(Section::Overview, 0.0, 0.0);
        switcher.select(Section::Integration, 1.0);
        let frame = switcher.frame(1.0);
        assert_eq!(frame.section, Section::Integration);
        assert_eq!(frame.opacity, 1.0);
        assert!(!switcher.is_animating(1.0));
    }

    #[test]
    fn nav_buttons_pop_in_staggered() {
        assert_eq!(nav_intro_scale(0, 0.0), 0.0);
        assert!(close(nav_intro_scale(0, 0.15), 0.5));
        assert_eq!(nav_intro_scale(2, 0.15), 0.0);
        assert_eq!(nav_intro_scale(4, 0.8), 1.0);
        assert!(nav_intro_running(0.5));
        assert!(!nav_intro_running(0.8));
    }
}
