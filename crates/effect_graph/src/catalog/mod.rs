// SPDX-License-Identifier: MIT OR Apache-2.0
//! Node type catalogs.
//!
//! A catalog is the codec's only window into host node types: it builds a
//! fresh node for a type tag and reports the default attribute values that
//! property encoding diffs against.

pub mod geometry;
pub mod shader;

use crate::node::{Node, NodeCategory, NodeType};
use crate::value::AttrValue;
use indexmap::IndexMap;
use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::Arc;

/// Default writable attribute values of one node type
pub type DefaultProperties = IndexMap<String, AttrValue>;

/// Knowledge of the node types a host platform provides
pub trait NodeCatalog {
    /// Construct a fresh node of the given type
    fn construct(&self, type_id: &str) -> Option<Node>;

    /// Writable attribute values of a freshly constructed node
    fn default_properties(&self, type_id: &str) -> Option<Arc<DefaultProperties>> {
        self.construct(type_id).map(|node| Arc::new(node.writable_attributes()))
    }
}

/// Registry of available node types
pub struct NodeRegistry {
    /// Registered node types by ID
    types: IndexMap<String, NodeType>,
    defaults: RwLock<HashMap<String, Arc<DefaultProperties>>>,
}

impl NodeRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self {
            types: IndexMap::new(),
            defaults: RwLock::new(HashMap::new()),
        }
    }

    /// Register a node type, replacing any type with the same ID
    pub fn register(&mut self, node_type: NodeType) {
        self.defaults.get_mut().remove(&node_type.id);
        self.types.insert(node_type.id.clone(), node_type);
    }

    /// Get a node type by ID
    pub fn get(&self, id: &str) -> Option<&NodeType> {
        self.types.get(id)
    }

    /// Get all registered types
    pub fn types(&self) -> impl Iterator<Item = &NodeType> {
        self.types.values()
    }

    /// Get types by category
    pub fn types_in_category(&self, category: NodeCategory) -> impl Iterator<Item = &NodeType> {
        self.types.values().filter(move |t| t.category == category)
    }

    /// Create a node from a type ID
    pub fn create_node(&self, type_id: &str) -> Option<Node> {
        self.get(type_id).map(Node::new)
    }
}

impl Default for NodeRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl NodeCatalog for NodeRegistry {
    fn construct(&self, type_id: &str) -> Option<Node> {
        self.create_node(type_id)
    }

    fn default_properties(&self, type_id: &str) -> Option<Arc<DefaultProperties>> {
        if let Some(cached) = self.defaults.read().get(type_id) {
            return Some(Arc::clone(cached));
        }
        let defaults = Arc::new(self.create_node(type_id)?.writable_attributes());
        self.defaults
            .write()
            .insert(type_id.to_string(), Arc::clone(&defaults));
        Some(defaults)
    }
}

/// Registry with every built-in effect node type
pub fn create_effect_registry() -> NodeRegistry {
    let mut registry = NodeRegistry::new();
    geometry::register(&mut registry);
    shader::register(&mut registry);
    registry
}
