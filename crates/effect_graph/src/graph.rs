// SPDX-License-Identifier: MIT OR Apache-2.0
//! Graph data structure containing nodes, links and the boundary interface.

use crate::interface::InterfaceItem;
use crate::link::{Link, LinkId};
use crate::node::{Node, NodeId};
use indexmap::IndexMap;
use std::collections::HashMap;

/// A node graph
#[derive(Debug, Clone)]
pub struct Graph {
    /// Graph name
    pub name: String,
    inputs: Vec<InterfaceItem>,
    outputs: Vec<InterfaceItem>,
    /// Nodes in insertion order
    nodes: IndexMap<NodeId, Node>,
    names: HashMap<String, NodeId>,
    /// Links between nodes
    links: IndexMap<LinkId, Link>,
}

impl Graph {
    /// Create a new empty graph
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            inputs: Vec::new(),
            outputs: Vec::new(),
            nodes: IndexMap::new(),
            names: HashMap::new(),
            links: IndexMap::new(),
        }
    }

    /// Declared inputs, in wire order
    pub fn inputs(&self) -> &[InterfaceItem] {
        &self.inputs
    }

    /// Declared outputs, in wire order
    pub fn outputs(&self) -> &[InterfaceItem] {
        &self.outputs
    }

    /// Declare a graph input and return its index
    pub fn declare_input(&mut self, item: InterfaceItem) -> usize {
        self.inputs.push(item);
        self.sync_boundary_nodes();
        self.inputs.len() - 1
    }

    /// Declare a graph output and return its index
    pub fn declare_output(&mut self, item: InterfaceItem) -> usize {
        self.outputs.push(item);
        self.sync_boundary_nodes();
        self.outputs.len() - 1
    }

    fn sync_boundary_nodes(&mut self) {
        for node in self.nodes.values_mut() {
            node.sync_interface(&self.inputs, &self.outputs);
        }
    }

    /// Add a node, renaming it with a numeric suffix if the name is taken
    pub fn add_node(&mut self, mut node: Node) -> NodeId {
        node.name = self.unique_name(&node.name);
        self.insert(node)
    }

    /// Add a node under an exact name
    pub fn add_node_named(&mut self, mut node: Node, name: &str) -> Result<NodeId, NameTaken> {
        if self.names.contains_key(name) {
            return Err(NameTaken(name.to_string()));
        }
        node.name = name.to_string();
        Ok(self.insert(node))
    }

    fn insert(&mut self, mut node: Node) -> NodeId {
        node.sync_interface(&self.inputs, &self.outputs);
        let id = node.id;
        self.names.insert(node.name.clone(), id);
        self.nodes.insert(id, node);
        id
    }

    fn unique_name(&self, base: &str) -> String {
        if !self.names.contains_key(base) {
            return base.to_string();
        }
        (1..)
            .map(|n| format!("{base}.{n:03}"))
            .find(|candidate| !self.names.contains_key(candidate))
            .unwrap_or_else(|| base.to_string())
    }

    /// Remove a node and its links
    pub fn remove_node(&mut self, node_id: NodeId) -> Option<Node> {
        self.links.retain(|_, l| !l.involves_node(node_id));
        let node = self.nodes.shift_remove(&node_id)?;
        self.names.remove(&node.name);
        Some(node)
    }

    /// Get a node by ID
    pub fn node(&self, node_id: NodeId) -> Option<&Node> {
        self.nodes.get(&node_id)
    }

    /// Get a mutable node by ID
    pub fn node_mut(&mut self, node_id: NodeId) -> Option<&mut Node> {
        self.nodes.get_mut(&node_id)
    }

    /// Look up a node ID by name
    pub fn node_id(&self, name: &str) -> Option<NodeId> {
        self.names.get(name).copied()
    }

    /// Look up a node by name
    pub fn node_by_name(&self, name: &str) -> Option<&Node> {
        self.node_id(name).and_then(|id| self.nodes.get(&id))
    }

    /// Get all nodes in insertion order
    pub fn nodes(&self) -> impl Iterator<Item = &Node> {
        self.nodes.values()
    }

    /// Get the number of nodes
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Link an output socket to an input socket.
    ///
    /// Rejects self-loops and a second link into a single-link input.
    pub fn connect(
        &mut self,
        from_node: NodeId,
        from_output: usize,
        to_node: NodeId,
        to_input: usize,
    ) -> Result<LinkId, LinkError> {
        let multi_input = self.check_endpoints(from_node, from_output, to_node, to_input)?;

        if from_node == to_node {
            return Err(LinkError::SelfLoop);
        }

        // Single-link inputs accept one link only
        if !multi_input && self.links.values().any(|l| l.feeds(to_node, to_input)) {
            let node = self.nodes.get(&to_node).map(|n| n.name().to_string()).unwrap_or_default();
            return Err(LinkError::SocketOccupied { node, index: to_input });
        }

        Ok(self.insert_link(from_node, from_output, to_node, to_input))
    }

    /// Link two sockets, checking only that both exist.
    ///
    /// Links already feeding the input are kept, so a single-link input may
    /// end up with several incoming links.
    pub fn add_link(
        &mut self,
        from_node: NodeId,
        from_output: usize,
        to_node: NodeId,
        to_input: usize,
    ) -> Result<LinkId, LinkError> {
        self.check_endpoints(from_node, from_output, to_node, to_input)?;
        Ok(self.insert_link(from_node, from_output, to_node, to_input))
    }

    /// Returns whether the target input is multi-link
    fn check_endpoints(
        &self,
        from_node: NodeId,
        from_output: usize,
        to_node: NodeId,
        to_input: usize,
    ) -> Result<bool, LinkError> {
        let source = self.nodes.get(&from_node).ok_or(LinkError::NodeNotFound(from_node))?;
        let target = self.nodes.get(&to_node).ok_or(LinkError::NodeNotFound(to_node))?;

        if from_output >= source.output_count() {
            return Err(LinkError::SocketOutOfRange {
                node: source.name().to_string(),
                index: from_output,
            });
        }
        match target.input(to_input) {
            Some(socket) => Ok(socket.multi_input),
            None => Err(LinkError::SocketOutOfRange {
                node: target.name().to_string(),
                index: to_input,
            }),
        }
    }

    fn insert_link(&mut self, from_node: NodeId, from_output: usize, to_node: NodeId, to_input: usize) -> LinkId {
        let link = Link::new(from_node, from_output, to_node, to_input);
        let id = link.id;
        self.links.insert(id, link);
        id
    }

    /// Remove a link
    pub fn disconnect(&mut self, link_id: LinkId) -> Option<Link> {
        self.links.shift_remove(&link_id)
    }

    /// Get all links in creation order
    pub fn links(&self) -> impl Iterator<Item = &Link> {
        self.links.values()
    }

    /// Links feeding one input socket, in creation order
    pub fn links_into(&self, node_id: NodeId, input: usize) -> impl Iterator<Item = &Link> {
        self.links.values().filter(move |l| l.feeds(node_id, input))
    }

    /// Get the number of links
    pub fn link_count(&self) -> usize {
        self.links.len()
    }
}

impl Default for Graph {
    fn default() -> Self {
        Self::new("Effect")
    }
}

/// Error when creating a link
#[derive(Debug, thiserror::Error)]
pub enum LinkError {
    /// Node not found
    #[error("Node not found: {0:?}")]
    NodeNotFound(NodeId),

    /// Socket index past the node's socket count
    #[error("Socket {index} out of range on node {node}")]
    SocketOutOfRange {
        /// Node name
        node: String,
        /// Requested index
        index: usize,
    },

    /// Single-link input already has a link
    #[error("Input {index} of node {node} is already linked")]
    SocketOccupied {
        /// Node name
        node: String,
        /// Input index
        index: usize,
    },

    /// Self-loop not allowed
    #[error("Self-loop not allowed")]
    SelfLoop,
}

/// Error when a node name is already in use within a graph
#[derive(Debug, thiserror::Error)]
#[error("Node name already in use: {0}")]
pub struct NameTaken(pub String);
