//! Enter/exit poses for animated pieces of the UI.
//!
//! Everything here is a pure function of elapsed seconds; callers feed in
//! their own clock and paint the returned [`Pose`].

/// Distance content travels while entering or leaving, in points
pub const SLIDE_DISTANCE: f32 = 20.0;

/// Default length of an enter or exit animation, in seconds
pub const ENTER_SECS: f32 = 0.3;

/// How far a hovered card rises, in points
pub const HOVER_LIFT: f32 = 10.0;

/// Opacity plus offset along the slide axis
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pose {
    pub opacity: f32,
    /// Offset in points; negative is up (or left)
    pub offset: f32,
}

impl Pose {
    pub const REST: Pose = Pose {
        opacity: 1.0,
        offset: 0.0,
    };

    /// Fading in at progress `t`, sliding from `from * SLIDE_DISTANCE` to rest.
    pub fn entering(t: f32, from: f32) -> Self {
        let t = t.clamp(0.0, 1.0);
        Self {
            opacity: t,
            offset: from * SLIDE_DISTANCE * (1.0 - t),
        }
    }

    /// Fading out at progress `t`, sliding from rest to `to * SLIDE_DISTANCE`.
    pub fn leaving(t: f32, to: f32) -> Self {
        let t = t.clamp(0.0, 1.0);
        Self {
            opacity: 1.0 - t,
            offset: to * SLIDE_DISTANCE * t,
        }
    }
}

/// Progress (0..1) of a `duration`-long animation that starts after `delay`.
pub fn progress(elapsed: f32, delay: f32, duration: f32) -> f32 {
    if duration <= 0.0 {
        return if elapsed >= delay { 1.0 } else { 0.0 };
    }
    ((elapsed - delay) / duration).clamp(0.0, 1.0)
}

/// Vertical offset of a card that is `t` (0..1) of the way into its hover lift
pub fn hover_lift(t: f32) -> f32 {
    -HOVER_LIFT * t.clamp(0.0, 1.0)
}

/// Show/hide state that animates both ways.
///
/// Flipping mid-animation starts the new phase at the current opacity.
#[derive(Debug, Clone, Copy)]
pub struct Presence {
    visible: bool,
    changed_at: f64,
    duration: f32,
}

impl Presence {
    /// Starts fully hidden
    pub fn hidden(duration: f32) -> Self {
        Self {
            visible: false,
            changed_at: f64::NEG_INFINITY,
            duration: duration.max(0.0),
        }
    }

    /// Show or hide at `now`. Returns false if nothing changed.
    pub fn set(&mut self, visible: bool, now: f64) -> bool {
        if visible == self.visible {
            return false;
        }
        // Current opacity is `t` entering or `1 - t` leaving; either way the
        // new phase picks up at `1 - t`.
        let carried = 1.0 - self.phase_progress(now);
        self.visible = visible;
        self.changed_at = now - (carried * self.duration) as f64;
        true
    }

    fn phase_progress(&self, now: f64) -> f32 {
        progress((now - self.changed_at) as f32, 0.0, self.duration)
    }

    /// Pose at `now`, entering from `from` and leaving toward `to`
    pub fn pose(&self, now: f64, from: f32, to: f32) -> Pose {
        let t = self.phase_progress(now);
        if self.visible {
            Pose::entering(t, from)
        } else {
            Pose::leaving(t, to)
        }
    }

    /// Hidden and done animating out
    pub fn is_gone(&self, now: f64) -> bool {
        !self.visible && self.phase_progress(now) >= 1.0
    }

    pub fn is_animating(&self, now: f64) -> bool {
        self.phase_progress(now) < 1.0
    }
}
