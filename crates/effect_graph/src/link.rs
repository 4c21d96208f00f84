// SPDX-License-Identifier: MIT OR Apache-2.0
//! Link (edge) definitions for the graph.

use crate::node::NodeId;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a link
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LinkId(pub Uuid);

impl LinkId {
    /// Create a new random link ID
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for LinkId {
    fn default() -> Self {
        Self::new()
    }
}

/// A link from one node's output socket to another node's input socket
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Link {
    /// Unique link ID
    pub id: LinkId,
    /// Source node ID
    pub from_node: NodeId,
    /// Source output index
    pub from_output: usize,
    /// Target node ID
    pub to_node: NodeId,
    /// Target input index
    pub to_input: usize,
}

impl Link {
    /// Create a new link
    pub fn new(from_node: NodeId, from_output: usize, to_node: NodeId, to_input: usize) -> Self {
        Self {
            id: LinkId::new(),
            from_node,
            from_output,
            to_node,
            to_input,
        }
    }

    /// Check if this link involves a specific node
    pub fn involves_node(&self, node_id: NodeId) -> bool {
        self.from_node == node_id || self.to_node == node_id
    }

    /// Check if this link feeds a specific input socket
    pub fn feeds(&self, node_id: NodeId, input: usize) -> bool {
        self.to_node == node_id && self.to_input == input
    }
}
