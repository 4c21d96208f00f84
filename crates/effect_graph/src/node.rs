// SPDX-License-Identifier: MIT OR Apache-2.0
//! Node definitions for the effect graph.

use crate::graph::Graph;
use crate::interface::InterfaceItem;
use crate::payload::{AuxData, ColorRamp, CurveMapping};
use crate::socket::{InputSocket, OutputSocket};
use crate::value::{AttrValue, NormalizedValue};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a node
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NodeId(pub Uuid);

impl NodeId {
    /// Create a new random node ID
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for NodeId {
    fn default() -> Self {
        Self::new()
    }
}

/// Structural kind of a node
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NodeKind {
    /// Ordinary node with properties
    Primitive,
    /// Node owning a nested graph
    Group,
    /// Exposes the owning graph's inputs as outputs
    GroupInput,
    /// Collects the owning graph's outputs as inputs
    GroupOutput,
}

/// Node type category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NodeCategory {
    /// Graph boundary and field inputs
    Input,
    /// Graph outputs
    Output,
    /// Geometry operations
    Geometry,
    /// Mesh primitives
    Mesh,
    /// Math operations
    Math,
    /// Color and gradient operations
    Color,
    /// Texture generators
    Texture,
    /// Utility nodes
    Utility,
    /// Nested groups
    Group,
}

/// How an attribute may be accessed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    /// Readable and writable
    ReadWrite,
    /// Computed by the host, never written back
    ReadOnly,
    /// Callable member, not data
    Method,
}

/// A named attribute slot on a node
#[derive(Debug, Clone, PartialEq)]
pub struct Attribute {
    /// Current value
    pub value: AttrValue,
    /// Access mode
    pub access: Access,
}

impl Attribute {
    /// Writable attribute
    pub fn read_write(value: AttrValue) -> Self {
        Self {
            value,
            access: Access::ReadWrite,
        }
    }

    /// Read-only attribute
    pub fn read_only(value: AttrValue) -> Self {
        Self {
            value,
            access: Access::ReadOnly,
        }
    }

    /// Callable member
    pub fn method() -> Self {
        Self {
            value: AttrValue::Opaque,
            access: Access::Method,
        }
    }
}

/// Node type definition
#[derive(Debug, Clone)]
pub struct NodeType {
    /// Unique type identifier, the wire `type` tag
    pub id: String,
    /// Display name, also the initial node name
    pub name: String,
    /// Category
    pub category: NodeCategory,
    /// Description
    pub description: String,
    /// Structural kind
    pub kind: NodeKind,
    /// Default input sockets
    pub inputs: Vec<InputSocket>,
    /// Default output sockets
    pub outputs: Vec<OutputSocket>,
    /// Type-specific attributes with their defaults
    pub attributes: Vec<(String, Attribute)>,
    /// Auxiliary payload a fresh node starts with
    pub payload: Option<AuxData>,
}

impl NodeType {
    /// Start a primitive type definition with no sockets
    pub fn new(id: impl Into<String>, name: impl Into<String>, category: NodeCategory) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            category,
            description: String::new(),
            kind: NodeKind::Primitive,
            inputs: Vec::new(),
            outputs: Vec::new(),
            attributes: Vec::new(),
            payload: None,
        }
    }

    /// Set the description
    pub fn describe(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Set the structural kind
    pub fn kind(mut self, kind: NodeKind) -> Self {
        self.kind = kind;
        self
    }

    /// Append an input socket
    pub fn input(mut self, socket: InputSocket) -> Self {
        self.inputs.push(socket);
        self
    }

    /// Append an output socket
    pub fn output(mut self, socket: OutputSocket) -> Self {
        self.outputs.push(socket);
        self
    }

    /// Declare a writable attribute
    pub fn attribute(mut self, name: impl Into<String>, value: AttrValue) -> Self {
        self.attributes.push((name.into(), Attribute::read_write(value)));
        self
    }

    /// Attach an auxiliary payload
    pub fn payload(mut self, payload: AuxData) -> Self {
        self.payload = Some(payload);
        self
    }
}

/// Attributes every node carries regardless of type
fn standard_attributes() -> IndexMap<String, Attribute> {
    let mut attributes = IndexMap::new();
    attributes.insert("location".to_string(), Attribute::read_write(AttrValue::Vector(vec![0.0, 0.0])));
    attributes.insert("width".to_string(), Attribute::read_write(AttrValue::Float(140.0)));
    attributes.insert("mute".to_string(), Attribute::read_write(AttrValue::Bool(false)));
    attributes.insert("use_custom_color".to_string(), Attribute::read_write(AttrValue::Bool(false)));
    attributes.insert("color".to_string(), Attribute::read_write(AttrValue::Vector(vec![0.608, 0.608, 0.608])));
    attributes.insert("dimensions".to_string(), Attribute::read_only(AttrValue::Vector(vec![0.0, 0.0])));
    attributes.insert("update".to_string(), Attribute::method());
    attributes
}

/// A node instance in a graph
#[derive(Debug, Clone)]
pub struct Node {
    /// Unique instance ID
    pub id: NodeId,
    /// Node type ID
    pub node_type: String,
    /// Structural kind
    pub kind: NodeKind,
    pub(crate) name: String,
    /// Display label (empty means "use the name")
    pub label: String,
    /// Input sockets
    pub inputs: Vec<InputSocket>,
    /// Output sockets
    pub outputs: Vec<OutputSocket>,
    /// Whether the node is collapsed in the editor
    pub hide: bool,
    /// Position of the node in the editor's draw order
    pub display_order: i32,
    attributes: IndexMap<String, Attribute>,
    payload: Option<AuxData>,
    group: Option<Box<Graph>>,
}

impl Node {
    /// Create a new node from a type definition
    pub fn new(node_type: &NodeType) -> Self {
        let mut attributes = standard_attributes();
        for (name, attribute) in &node_type.attributes {
            attributes.insert(name.clone(), attribute.clone());
        }
        Self {
            id: NodeId::new(),
            node_type: node_type.id.clone(),
            kind: node_type.kind,
            name: node_type.name.clone(),
            label: String::new(),
            inputs: node_type.inputs.clone(),
            outputs: node_type.outputs.clone(),
            hide: false,
            display_order: 0,
            attributes,
            payload: node_type.payload.clone(),
            group: None,
        }
    }

    /// Node name, unique within its graph
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Number of input sockets
    pub fn input_count(&self) -> usize {
        self.inputs.len()
    }

    /// Number of output sockets
    pub fn output_count(&self) -> usize {
        self.outputs.len()
    }

    /// Get an input socket by index
    pub fn input(&self, index: usize) -> Option<&InputSocket> {
        self.inputs.get(index)
    }

    /// Get a mutable input socket by index
    pub fn input_mut(&mut self, index: usize) -> Option<&mut InputSocket> {
        self.inputs.get_mut(index)
    }

    /// Get an output socket by index
    pub fn output(&self, index: usize) -> Option<&OutputSocket> {
        self.outputs.get(index)
    }

    /// Attribute names with their access mode, in declaration order
    pub fn attribute_names(&self) -> impl Iterator<Item = (&str, Access)> {
        self.attributes.iter().map(|(name, a)| (name.as_str(), a.access))
    }

    /// Current value of an attribute
    pub fn attribute(&self, name: &str) -> Option<&AttrValue> {
        self.attributes.get(name).map(|a| &a.value)
    }

    /// Snapshot of every writable attribute
    pub fn writable_attributes(&self) -> IndexMap<String, AttrValue> {
        self.attributes
            .iter()
            .filter(|(_, a)| a.access == Access::ReadWrite)
            .map(|(name, a)| (name.clone(), a.value.clone()))
            .collect()
    }

    /// Assign a typed value to a writable attribute
    pub fn set(&mut self, name: &str, value: AttrValue) -> Result<(), AttributeError> {
        let attribute = self.writable_slot(name)?;
        if std::mem::discriminant(&attribute.value) != std::mem::discriminant(&value) {
            return Err(AttributeError::TypeMismatch {
                name: name.to_string(),
                expected: attribute.value.shape(),
            });
        }
        attribute.value = value;
        Ok(())
    }

    /// Assign a normalized value, converting it into the attribute's shape
    pub fn set_attribute(&mut self, name: &str, value: &NormalizedValue) -> Result<(), AttributeError> {
        let attribute = self.writable_slot(name)?;
        let coerced = attribute.value.coerce(value).ok_or_else(|| AttributeError::TypeMismatch {
            name: name.to_string(),
            expected: attribute.value.shape(),
        })?;
        attribute.value = coerced;
        Ok(())
    }

    fn writable_slot(&mut self, name: &str) -> Result<&mut Attribute, AttributeError> {
        let attribute = self
            .attributes
            .get_mut(name)
            .ok_or_else(|| AttributeError::Unknown(name.to_string()))?;
        match attribute.access {
            Access::ReadWrite => Ok(attribute),
            Access::ReadOnly | Access::Method => Err(AttributeError::ReadOnly(name.to_string())),
        }
    }

    /// Auxiliary payload, if the type has one
    pub fn payload(&self) -> Option<&AuxData> {
        self.payload.as_ref()
    }

    /// Color ramp of a gradient node
    pub fn color_ramp(&self) -> Option<&ColorRamp> {
        match &self.payload {
            Some(AuxData::ColorRamp(ramp)) => Some(ramp),
            _ => None,
        }
    }

    /// Mutable color ramp of a gradient node
    pub fn color_ramp_mut(&mut self) -> Option<&mut ColorRamp> {
        match &mut self.payload {
            Some(AuxData::ColorRamp(ramp)) => Some(ramp),
            _ => None,
        }
    }

    /// Curve of a curve-mapping node
    pub fn curve(&self) -> Option<&CurveMapping> {
        match &self.payload {
            Some(AuxData::CurveMapping(curve)) => Some(curve),
            _ => None,
        }
    }

    /// Mutable curve of a curve-mapping node
    pub fn curve_mut(&mut self) -> Option<&mut CurveMapping> {
        match &mut self.payload {
            Some(AuxData::CurveMapping(curve)) => Some(curve),
            _ => None,
        }
    }

    /// Nested graph of a group node
    pub fn group(&self) -> Option<&Graph> {
        self.group.as_deref()
    }

    /// Mutable nested graph of a group node
    pub fn group_mut(&mut self) -> Option<&mut Graph> {
        self.group.as_deref_mut()
    }

    /// Give a group node its nested graph; sockets follow the graph's interface.
    ///
    /// Returns the graph back if this node is not a group.
    pub fn attach_group(&mut self, graph: Graph) -> Result<(), Graph> {
        if self.kind != NodeKind::Group {
            return Err(graph);
        }
        self.inputs = graph.inputs().iter().map(InterfaceItem::to_input_socket).collect();
        self.outputs = graph.outputs().iter().map(InterfaceItem::to_output_socket).collect();
        self.group = Some(Box::new(graph));
        Ok(())
    }

    /// Rebuild boundary sockets from the owning graph's interface
    pub(crate) fn sync_interface(&mut self, inputs: &[InterfaceItem], outputs: &[InterfaceItem]) {
        match self.kind {
            NodeKind::GroupInput => {
                self.outputs = inputs.iter().map(InterfaceItem::to_output_socket).collect();
            }
            NodeKind::GroupOutput => {
                self.inputs = outputs.iter().map(InterfaceItem::to_input_socket).collect();
            }
            NodeKind::Primitive | NodeKind::Group => {}
        }
    }
}

/// Failure to assign one attribute
#[derive(Debug, thiserror::Error)]
pub enum AttributeError {
    /// No attribute with that name
    #[error("Unknown attribute: {0}")]
    Unknown(String),

    /// Attribute cannot be written
    #[error("Attribute is read-only: {0}")]
    ReadOnly(String),

    /// Value does not fit the attribute
    #[error("Type mismatch for attribute {name}: expected {expected}")]
    TypeMismatch {
        /// Attribute name
        name: String,
        /// Shape the attribute holds
        expected: &'static str,
    },
}
