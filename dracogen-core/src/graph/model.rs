use crate::foundation::core::Vec2;

/// Index into [`Graph::nodes`].
pub type NodeId = usize;

/// Role of a node in the drawing.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum NodeKind {
    /// Ordinary state.
    #[default]
    Regular,
    /// Initial state.
    Start,
    /// Accepting state.
    Final,
    /// Invisible source of the arrow pointing at the start state.
    Prestart,
    /// Invisible anchor that keeps a self-loop short.
    Control,
}

impl NodeKind {
    /// Virtual nodes steer the layout but are never drawn.
    pub fn is_virtual(self) -> bool {
        matches!(self, Self::Prestart | Self::Control)
    }
}

/// A state plus its layout state.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Node {
    /// Position in [`Graph::nodes`].
    pub id: NodeId,
    /// Role.
    pub kind: NodeKind,
    /// State name; virtual nodes have none.
    pub name: Option<String>,
    /// Object id printed next to the state name.
    pub object_id: Option<String>,
    /// Position in world units.
    pub pos: Vec2,
    /// Velocity.
    pub vel: Vec2,
    /// Force accumulated during the current step.
    pub acc: Vec2,
}

/// A transition arrow.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Edge {
    /// Tail node.
    pub source: NodeId,
    /// Head node.
    pub dest: NodeId,
    /// Control node of a self-loop.
    pub control: Option<NodeId>,
    /// Label; `"."` once several transitions share the edge.
    pub transition: Option<String>,
    /// Transitions folded into this edge beyond the first.
    pub other_transitions: u32,
    /// Set on the first of a pair of opposite edges; the layout ignores it.
    pub half_bidirectional: bool,
    /// Source and destination are the same node.
    pub loopback: bool,
}

/// An automaton laid out as a node-link diagram.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Graph {
    /// Object id of the automaton.
    pub name_id: Option<String>,
    /// Nodes, indexed by [`NodeId`].
    pub nodes: Vec<Node>,
    /// Edges in insertion order.
    pub edges: Vec<Edge>,
}

impl Graph {
    /// Append a node and return its id.
    pub fn add_node(
        &mut self,
        kind: NodeKind,
        name: Option<String>,
        object_id: Option<String>,
    ) -> NodeId {
        let id = self.nodes.len();
        self.nodes.push(Node {
            id,
            kind,
            name,
            object_id,
            ..Node::default()
        });
        id
    }

    /// Append an edge.
    pub fn add_edge(&mut self, edge: Edge) {
        self.edges.push(edge);
    }

    /// First named node called `name`.
    pub fn find_node(&self, name: &str) -> Option<NodeId> {
        self.nodes
            .iter()
            .position(|n| n.name.as_deref() == Some(name))
    }

    /// Index of the first edge from `source` to `dest`.
    pub fn find_edge(&self, source: NodeId, dest: NodeId) -> Option<usize> {
        self.edges
            .iter()
            .position(|e| e.source == source && e.dest == dest)
    }

    /// Nodes that are drawn.
    pub fn visible_nodes(&self) -> impl Iterator<Item = &Node> {
        self.nodes.iter().filter(|n| !n.kind.is_virtual())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/graph/model.rs"]
mod tests;
