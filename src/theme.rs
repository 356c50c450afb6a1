//! Unified theme and color constants for the explorer.
//!
//! Panels, the node canvas and the message log all pull their colors
//! from here so the showcase reads as one surface.

use egui::Color32;

/// Background colors for different layers
pub mod bg {
    use super::*;

    /// Main content background - darkest layer
    pub const CONTENT: Color32 = Color32::from_rgb(14, 17, 23);

    /// Navbar background
    pub const PANEL: Color32 = Color32::from_rgb(20, 22, 28);

    /// Card/elevated surface backgrounds
    pub const SURFACE: Color32 = Color32::from_rgb(28, 30, 38);

    /// Visualization canvas background
    pub const CANVAS: Color32 = Color32::from_rgb(25, 28, 35);

    /// Hover state for cards
    pub const SURFACE_HOVER: Color32 = Color32::from_rgb(38, 41, 52);
}

/// Accent colors
pub mod accent {
    use super::*;

    /// Brand purple, used for the active nav button
    pub const PURPLE: Color32 = Color32::from_rgb(139, 92, 246);

    /// Cyan for links between nodes in the log
    pub const CYAN: Color32 = Color32::from_rgb(6, 182, 212);

    /// Yellow for selection highlighting
    pub const YELLOW: Color32 = Color32::from_rgb(255, 220, 80);
}

/// Two-stop gradients per node category (start, end)
pub mod node {
    use super::*;

    pub const GATEWAY: (Color32, Color32) =
        (Color32::from_rgb(168, 85, 247), Color32::from_rgb(79, 70, 229));
    pub const AGENT: (Color32, Color32) =
        (Color32::from_rgb(244, 114, 182), Color32::from_rgb(239, 68, 68));
    pub const TOOL: (Color32, Color32) =
        (Color32::from_rgb(96, 165, 250), Color32::from_rgb(6, 182, 212));
    pub const CHANNEL: (Color32, Color32) =
        (Color32::from_rgb(74, 222, 128), Color32::from_rgb(20, 184, 166));
}

/// Text colors at different emphasis levels
pub mod text {
    use super::*;

    /// Primary text - high contrast
    pub const PRIMARY: Color32 = Color32::from_rgb(240, 240, 245);

    /// Secondary text - medium contrast
    pub const SECONDARY: Color32 = Color32::from_rgb(180, 180, 190);

    /// Muted text - low contrast for less important info
    pub const MUTED: Color32 = Color32::from_rgb(120, 125, 135);
}

/// Border colors
pub mod border {
    use super::*;

    /// Subtle border for separators
    pub const SUBTLE: Color32 = Color32::from_rgb(45, 48, 55);

    /// Default border for cards/panels
    pub const DEFAULT: Color32 = Color32::from_rgb(55, 58, 65);
}

/// Connection line color on the canvas
pub const EDGE: Color32 = Color32::from_rgba_premultiplied(30, 30, 30, 77);

/// Helper to create a stroke with consistent styling
pub fn stroke(color: Color32, width: f32) -> egui::Stroke {
    egui::Stroke::new(width, color)
}

/// Node rendering stroke widths
pub mod stroke_width {
    /// Normal node border
    pub const NORMAL: f32 = 1.0;

    /// Hovered node border
    pub const HOVER: f32 = 2.0;

    /// Selected node glow ring
    pub const SELECTED: f32 = 3.0;
}

/// Blend two colors; `t` = 0 gives `a`, `t` = 1 gives `b`.
pub fn mix(a: Color32, b: Color32, t: f32) -> Color32 {
    let t = t.clamp(0.0, 1.0);
    Color32::from_rgb(
        lerp_u8(a.r(), b.r(), t),
        lerp_u8(a.g(), b.g(), t),
        lerp_u8(a.b(), b.b(), t),
    )
}

fn lerp_u8(a: u8, b: u8, t: f32) -> u8 {
    let result = a as f32 + (b as f32 - a as f32) * t;
    result.clamp(0.0, 255.0) as u8
}

/// Draw a titled card frame and run `add_contents` inside it.
pub fn card<R>(ui: &mut egui::Ui, add_contents: impl FnOnce(&mut egui::Ui) -> R) -> R {
    egui::Frame::none()
        .fill(bg::SURFACE)
        .stroke(stroke(border::DEFAULT, 1.0))
        .rounding(8.0)
        .inner_margin(12.0)
        .show(ui, add_contents)
        .inner
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mix_endpoints_return_inputs() {
        let (a, b) = node::AGENT;
        assert_eq!(mix(a, b, 0.0), a);
        assert_eq!(mix(a, b, 1.0), b);
    }

    #[test]
    fn mix_clamps_out_of_range() {
        let (a, b) = node::TOOL;
        assert_eq!(mix(a, b, -3.0), a);
        assert_eq!(mix(a, b, 7.5), b);
    }
}
