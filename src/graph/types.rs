//! Static node model for the system visualization.

use egui::{Color32, Pos2};
use std::collections::HashMap;

use crate::theme;

/// Category of a node in the mock system
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    Gateway,
    Agent,
    Tool,
    Channel,
}

impl NodeKind {
    /// All kinds in legend order
    pub const ALL: [NodeKind; 4] = [
        NodeKind::Gateway,
        NodeKind::Agent,
        NodeKind::Tool,
        NodeKind::Channel,
    ];

    /// Lowercase identifier, as shown in the details card
    pub fn id(&self) -> &'static str {
        match self {
            NodeKind::Gateway => "gateway",
            NodeKind::Agent => "agent",
            NodeKind::Tool => "tool",
            NodeKind::Channel => "channel",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            NodeKind::Gateway => "Gateway",
            NodeKind::Agent => "Agent",
            NodeKind::Tool => "Tool",
            NodeKind::Channel => "Channel",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            NodeKind::Gateway => "📡",
            NodeKind::Agent => "🤖",
            NodeKind::Tool => "🔧",
            NodeKind::Channel => "💬",
        }
    }

    /// Gradient stops (start, end) for this kind
    pub fn gradient(&self) -> (Color32, Color32) {
        match self {
            NodeKind::Gateway => theme::node::GATEWAY,
            NodeKind::Agent => theme::node::AGENT,
            NodeKind::Tool => theme::node::TOOL,
            NodeKind::Channel => theme::node::CHANNEL,
        }
    }
}

/// A fixed point in the mock graph
#[derive(Debug, Clone)]
pub struct Node {
    pub id: String,
    pub kind: NodeKind,
    pub label: String,
    /// Percentage coordinates, 0-100 on both axes
    pub position: Pos2,
    /// Neighbour ids in declared order
    pub connections: Vec<String>,
}

impl Node {
    pub fn new(id: &str, kind: NodeKind, label: &str, x: f32, y: f32, connections: &[&str]) -> Self {
        Self {
            id: id.to_string(),
            kind,
            label: label.to_string(),
            position: Pos2::new(x, y),
            connections: connections.iter().map(|c| c.to_string()).collect(),
        }
    }
}

/// One undirected connection line
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Edge {
    pub source: String,
    pub target: String,
}

/// What the details card shows for a selected node
#[derive(Debug, Clone, PartialEq)]
pub struct NodeDetails {
    pub kind: NodeKind,
    pub label: String,
    /// Declared connections joined with ", "
    pub connections: String,
}

/// Read-only collection of nodes and their adjacency.
#[derive(Debug, Clone)]
pub struct MockGraph {
    nodes: Vec<Node>,
    /// id -> index in `nodes`
    index: HashMap<String, usize>,
}

impl Default for MockGraph {
    fn default() -> Self {
        let graph = Self::new(vec![
            Node::new("gateway", NodeKind::Gateway, "Gateway", 50.0, 50.0, &["agent1", "agent2", "channel1"]),
            Node::new("agent1", NodeKind::Agent, "Agent 1", 20.0, 80.0, &["gateway", "tool1"]),
            Node::new("agent2", NodeKind::Agent, "Agent 2", 80.0, 80.0, &["gateway", "tool2"]),
            Node::new("channel1", NodeKind::Channel, "Telegram", 50.0, 20.0, &["gateway"]),
            Node::new("tool1", NodeKind::Tool, "File Tool", 10.0, 50.0, &["agent1"]),
            Node::new("tool2", NodeKind::Tool, "Web Tool", 90.0, 50.0, &["agent2"]),
        ]);
        debug_assert!(graph.is_symmetric(), "mock graph connections must be mutual");
        graph
    }
}

impl MockGraph {
    pub fn new(nodes: Vec<Node>) -> Self {
        let index = nodes
            .iter()
            .enumerate()
            .map(|(i, node)| (node.id.clone(), i))
            .collect();
        Self { nodes, index }
    }

    /// All nodes in declaration order
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Get a node by ID
    pub fn get(&self, id: &str) -> Option<&Node> {
        self.index.get(id).map(|&i| &self.nodes[i])
    }

    /// Nodes listed in `id`'s connections, excluding `id` itself.
    ///
    /// Returned in node declaration order, not connection order.
    pub fn neighbors(&self, id: &str) -> Vec<&Node> {
        let Some(source) = self.get(id) else {
            return Vec::new();
        };
        self.nodes
            .iter()
            .filter(|n| n.id != source.id && source.connections.contains(&n.id))
            .collect()
    }

    /// One edge per adjacent pair.
    ///
    /// An edge is only emitted from the endpoint whose id sorts first, so a
    /// pair listed on both sides is drawn once and self-references never are.
    pub fn edges(&self) -> Vec<Edge> {
        let mut edges = Vec::new();
        for node in &self.nodes {
            for conn in &node.connections {
                if self.get(conn).is_some() && node.id < *conn {
                    edges.push(Edge {
                        source: node.id.clone(),
                        target: conn.clone(),
                    });
                }
            }
        }
        edges
    }

    pub fn details(&self, id: &str) -> Option<NodeDetails> {
        self.get(id).map(|node| NodeDetails {
            kind: node.kind,
            label: node.label.clone(),
            connections: node.connections.join(", "),
        })
    }

    /// True when every connection is listed from both endpoints.
    pub fn is_symmetric(&self) -> bool {
        self.nodes.iter().all(|node| {
            node.connections.iter().all(|conn| {
                self.get(conn)
                    .map_or(false, |other| other.connections.contains(&node.id))
            })
        })
    }
}

/// Interaction state for the node canvas
#[derive(Debug, Clone, Default)]
pub struct GraphViewState {
    /// Currently hovered node
    pub hovered_node: Option<String>,
    /// Currently selected node
    pub selected_node: Option<String>,
}

impl GraphViewState {
    /// Select `id`, or clear the selection if it is already selected.
    pub fn toggle_selected(&mut self, id: &str) {
        if self.selected_node.as_deref() == Some(id) {
            self.selected_node = None;
        } else {
            self.selected_node = Some(id.to_string());
        }
    }

    pub fn is_selected(&self, id: &str) -> bool {
        self.selected_node.as_deref() == Some(id)
    }

    pub fn is_hovered(&self, id: &str) -> bool {
        self.hovered_node.as_deref() == Some(id)
    }

    /// Details for the selected node, if any
    pub fn selected_details(&self, graph: &MockGraph) -> Option<NodeDetails> {
        self.selected_node.as_deref().and_then(|id| graph.details(id))
    }
}
