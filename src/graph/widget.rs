//! Node canvas for the system visualization.

use egui::{Align2, Color32, FontId, Pos2, Rect, Sense, Stroke, Ui, Vec2};

use super::types::{GraphViewState, MockGraph, Node};
use crate::theme;

/// Base node radius in points
const NODE_RADIUS: f32 = 26.0;
/// Scale applied to the hovered node
const HOVER_SCALE: f32 = 1.1;
/// Inset so nodes at 0% or 100% stay inside the canvas
const CANVAS_PADDING: f32 = 40.0;

/// Map percentage coordinates (0-100) into `rect`.
pub fn to_screen(rect: Rect, percent: Pos2) -> Pos2 {
    let inner = rect.shrink(CANVAS_PADDING);
    Pos2::new(
        inner.left() + inner.width() * percent.x / 100.0,
        inner.top() + inner.height() * percent.y / 100.0,
    )
}

/// First node whose disc contains `pointer`
pub fn node_at<'a>(graph: &'a MockGraph, rect: Rect, pointer: Pos2) -> Option<&'a Node> {
    graph
        .nodes()
        .iter()
        .find(|node| to_screen(rect, node.position).distance(pointer) <= NODE_RADIUS)
}

/// Render the node canvas and update hover state.
///
/// Returns the id of the node clicked this frame; clicks on empty canvas
/// are ignored.
pub fn render_system_graph(
    ui: &mut Ui,
    graph: &MockGraph,
    view: &mut GraphViewState,
    size: Vec2,
) -> Option<String> {
    let (response, painter) = ui.allocate_painter(size, Sense::click());
    let rect = response.rect;

    // Background
    painter.rect_filled(rect, 8.0, theme::bg::CANVAS);
    painter.rect_stroke(rect, 8.0, theme::stroke(theme::border::SUBTLE, 1.0));

    // Hover
    view.hovered_node = response
        .hover_pos()
        .and_then(|pos| node_at(graph, rect, pos))
        .map(|node| node.id.clone());

    let clicked = if response.clicked() {
        response
            .interact_pointer_pos()
            .and_then(|pos| node_at(graph, rect, pos))
            .map(|node| node.id.clone())
    } else {
        None
    };

    // Connection lines first (behind nodes)
    for edge in graph.edges() {
        let (Some(a), Some(b)) = (graph.get(&edge.source), graph.get(&edge.target)) else {
            continue;
        };
        painter.line_segment(
            [to_screen(rect, a.position), to_screen(rect, b.position)],
            Stroke::new(2.0, theme::EDGE),
        );
    }

    for node in graph.nodes() {
        let center = to_screen(rect, node.position);
        let hovered = view.is_hovered(&node.id);
        let selected = view.is_selected(&node.id);
        let radius = if hovered { NODE_RADIUS * HOVER_SCALE } else { NODE_RADIUS };

        if selected {
            painter.circle_filled(center, radius + 8.0, Color32::from_white_alpha(40));
            painter.circle_stroke(
                center,
                radius + 3.0,
                theme::stroke(theme::accent::YELLOW, theme::stroke_width::SELECTED),
            );
        } else {
            // Drop shadow
            painter.circle_filled(center + Vec2::new(0.0, 4.0), radius, Color32::from_black_alpha(60));
        }

        paint_gradient_disc(&painter, center, radius, node.kind.gradient());

        let border = if hovered {
            theme::stroke(Color32::WHITE, theme::stroke_width::HOVER)
        } else {
            theme::stroke(Color32::from_white_alpha(60), theme::stroke_width::NORMAL)
        };
        painter.circle_stroke(center, radius, border);

        painter.text(
            center - Vec2::new(0.0, 5.0),
            Align2::CENTER_CENTER,
            node.kind.icon(),
            FontId::proportional(18.0),
            Color32::WHITE,
        );
        painter.text(
            center + Vec2::new(0.0, 12.0),
            Align2::CENTER_CENTER,
            &node.label,
            FontId::proportional(9.0),
            Color32::WHITE,
        );
    }

    if view.hovered_node.is_some() {
        ui.ctx().set_cursor_icon(egui::CursorIcon::PointingHand);
    }

    clicked
}

/// Approximate a diagonal two-stop gradient with concentric discs.
fn paint_gradient_disc(painter: &egui::Painter, center: Pos2, radius: f32, (start, end): (Color32, Color32)) {
    const STEPS: usize = 6;
    for i in 0..STEPS {
        let t = i as f32 / (STEPS - 1) as f32;
        let r = radius * (1.0 - t * 0.6);
        // Shift the lighter stops toward the top-left
        let offset = Vec2::splat(-radius * 0.25 * t);
        painter.circle_filled(center + offset, r, theme::mix(end, start, t));
    }
}

/// Small colored swatch + label for the legend
pub fn legend_swatch(ui: &mut Ui, colors: (Color32, Color32), label: &str) {
    ui.horizontal(|ui| {
        let (rect, _) = ui.allocate_exact_size(Vec2::splat(12.0), Sense::hover());
        ui.painter().rect_filled(rect, 3.0, theme::mix(colors.0, colors.1, 0.5));
        ui.label(label);
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    fn canvas() -> Rect {
        Rect::from_min_size(Pos2::ZERO, Vec2::new(480.0, 380.0))
    }

    #[test]
    fn percent_corners_map_inside_padding() {
        let rect = canvas();
        assert_eq!(to_screen(rect, Pos2::new(0.0, 0.0)), Pos2::new(40.0, 40.0));
        assert_eq!(to_screen(rect, Pos2::new(100.0, 100.0)), Pos2::new(440.0, 340.0));
        assert_eq!(to_screen(rect, Pos2::new(50.0, 50.0)), rect.center());
    }

    #[test]
    fn hit_test_finds_node_under_pointer() {
        let graph = MockGraph::default();
        let rect = canvas();
        let gateway = to_screen(rect, graph.get("gateway").unwrap().position);

        assert_eq!(node_at(&graph, rect, gateway).map(|n| n.id.as_str()), Some("gateway"));
        assert_eq!(
            node_at(&graph, rect, gateway + Vec2::new(NODE_RADIUS - 1.0, 0.0)).map(|n| n.id.as_str()),
            Some("gateway")
        );
        // Empty space between gateway and the tools
        assert!(node_at(&graph, rect, Pos2::new(120.0, 100.0)).is_none());
    }
}
