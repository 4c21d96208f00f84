// SPDX-License-Identifier: MIT OR Apache-2.0
//! Socket definitions for node inputs/outputs.

use crate::value::AttrValue;
use serde::{Deserialize, Serialize};

/// Socket direction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SocketDirection {
    /// Input socket
    Input,
    /// Output socket
    Output,
}

impl std::fmt::Display for SocketDirection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Input => f.write_str("input"),
            Self::Output => f.write_str("output"),
        }
    }
}

/// Data type carried by a socket
///
/// The serialized names are the wire type tags used by interface items.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SocketType {
    /// Floating point value
    #[serde(rename = "NodeSocketFloat")]
    Float,
    /// Integer value
    #[serde(rename = "NodeSocketInt")]
    Int,
    /// Boolean value
    #[serde(rename = "NodeSocketBool")]
    Bool,
    /// 3D vector
    #[serde(rename = "NodeSocketVector")]
    Vector,
    /// Color (RGBA)
    #[serde(rename = "NodeSocketColor")]
    Color,
    /// String value
    #[serde(rename = "NodeSocketString")]
    String,
    /// Geometry stream
    #[serde(rename = "NodeSocketGeometry")]
    Geometry,
    /// Material reference
    #[serde(rename = "NodeSocketMaterial")]
    Material,
    /// Texture reference
    #[serde(rename = "NodeSocketTexture")]
    Texture,
    /// Object reference
    #[serde(rename = "NodeSocketObject")]
    Object,
    /// Collection reference
    #[serde(rename = "NodeSocketCollection")]
    Collection,
    /// Image reference
    #[serde(rename = "NodeSocketImage")]
    Image,
}

impl SocketType {
    /// Whether an unconnected socket of this type holds a meaningful constant
    pub fn has_constant(self) -> bool {
        !matches!(
            self,
            Self::Geometry
                | Self::Material
                | Self::Texture
                | Self::Object
                | Self::Collection
                | Self::Image
        )
    }

    /// Whether interface items of this type carry default/min/max
    pub fn is_numeric(self) -> bool {
        matches!(self, Self::Float | Self::Int | Self::Vector)
    }

    /// Default constant for a freshly declared socket of this type
    pub fn default_value(self) -> Option<AttrValue> {
        match self {
            Self::Float => Some(AttrValue::Float(0.0)),
            Self::Int => Some(AttrValue::Int(0)),
            Self::Bool => Some(AttrValue::Bool(false)),
            Self::Vector => Some(AttrValue::Vector(vec![0.0; 3])),
            Self::Color => Some(AttrValue::Color([0.0, 0.0, 0.0, 1.0])),
            Self::String => Some(AttrValue::String(String::new())),
            _ => None,
        }
    }
}

/// Input socket on a node
#[derive(Debug, Clone, PartialEq)]
pub struct InputSocket {
    /// Socket name
    pub name: String,
    /// Data type
    pub socket_type: SocketType,
    /// Constant used while unconnected (`None` for types without constants)
    pub default_value: Option<AttrValue>,
    /// Whether several links may feed this socket at once
    pub multi_input: bool,
}

impl InputSocket {
    /// Create an input socket with the type's default constant
    pub fn new(name: impl Into<String>, socket_type: SocketType) -> Self {
        Self {
            name: name.into(),
            socket_type,
            default_value: socket_type.default_value(),
            multi_input: false,
        }
    }

    /// Set the default constant
    pub fn with_default(mut self, value: AttrValue) -> Self {
        self.default_value = Some(value);
        self
    }

    /// Allow several simultaneous links (join-style sockets)
    pub fn multi(mut self) -> Self {
        self.multi_input = true;
        self
    }
}

/// Output socket on a node
#[derive(Debug, Clone, PartialEq)]
pub struct OutputSocket {
    /// Socket name
    pub name: String,
    /// Data type
    pub socket_type: SocketType,
}

impl OutputSocket {
    /// Create an output socket
    pub fn new(name: impl Into<String>, socket_type: SocketType) -> Self {
        Self {
            name: name.into(),
            socket_type,
        }
    }
}
