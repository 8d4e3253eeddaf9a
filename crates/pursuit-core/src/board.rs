//! Transport graph adapter.
//!
//! The engine treats the city map as a directed-edge graph: every node is a
//! numbered stop, every edge is labelled with the transport that serves it.
//! The only query the rules need is "which edges leave this node", so the
//! board is a thin adjacency map over whatever data the host assembled.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Identifier of a stop on the board.
pub type NodeId = usize;

/// Transport serving an edge of the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Transport {
    /// Short hop between neighbouring stops
    Taxi,
    /// Medium hop along a bus route
    Bus,
    /// Long hop across the map
    Underground,
}

impl Transport {
    /// All transport kinds
    pub const ALL: [Transport; 3] = [Transport::Taxi, Transport::Bus, Transport::Underground];
}

/// A single outgoing edge: where it leads and what serves it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BoardEdge {
    /// Destination stop
    pub to: NodeId,
    /// Transport serving the edge
    pub transport: Transport,
}

/// The transport graph, keyed by source node.
///
/// Construction stays with the host: the engine never parses map data, it
/// only answers adjacency queries against whatever edges were added.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    edges: HashMap<NodeId, Vec<BoardEdge>>,
}

impl Board {
    /// Create an empty board
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a directed edge
    pub fn add_edge(&mut self, from: NodeId, to: NodeId, transport: Transport) {
        self.edges
            .entry(from)
            .or_default()
            .push(BoardEdge { to, transport });
    }

    /// Add an edge in both directions (most transport links run both ways)
    pub fn add_link(&mut self, a: NodeId, b: NodeId, transport: Transport) {
        self.add_edge(a, b, transport);
        self.add_edge(b, a, transport);
    }

    /// Outgoing edges from a node (empty if the node has none)
    pub fn edges_from(&self, node: NodeId) -> &[BoardEdge] {
        self.edges.get(&node).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Whether the board has no edges at all
    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    /// Whether the node has at least one outgoing edge
    pub fn contains(&self, node: NodeId) -> bool {
        self.edges.contains_key(&node)
    }
}
