//! Mock system graph: static nodes, adjacency and the node canvas.

pub mod types;
pub mod widget;

pub use types::{GraphViewState, MockGraph, NodeKind};
pub use widget::{legend_swatch, render_system_graph};
