// SPDX-License-Identifier: MIT OR Apache-2.0
//! Serialized record types of the effect wire format.
//!
//! These mirror the JSON document one to one. Host objects never appear here;
//! the codec translates between the two.

use crate::payload::{HandleType, RampInterpolation};
use crate::socket::SocketType;
use crate::value::NormalizedValue;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// A graph: name, nodes and boundary interface
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphRecord {
    /// Graph name
    pub name: String,
    /// Nodes in host iteration order
    #[serde(default)]
    pub nodes: Vec<NodeRecord>,
    /// Declared inputs
    #[serde(default)]
    pub inputs: Vec<InterfaceRecord>,
    /// Declared outputs
    #[serde(default)]
    pub outputs: Vec<InterfaceRecord>,
}

/// One node
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodeRecord {
    /// Node type tag
    #[serde(rename = "type")]
    pub node_type: String,
    /// Node name, unique within its graph
    pub name: String,
    /// Display label
    #[serde(default)]
    pub label: String,
    /// Attributes that differ from the type's defaults
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub properties: IndexMap<String, NormalizedValue>,
    /// Ramp or curve payload
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub aux: Option<AuxRecord>,
    /// Nested graph of a group node
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub node_group: Option<Box<GraphRecord>>,
    /// Input socket states
    #[serde(default)]
    pub inputs: Vec<InputRecord>,
}

/// State of one input socket.
///
/// On the wire this is `[index, constant]` or `[index, source, output]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum InputRecord {
    /// Linked from another node's output
    Edge(usize, String, usize),
    /// Unconnected; `null` marks a socket with no constant
    Const(usize, NormalizedValue),
}

impl InputRecord {
    /// Destination socket index
    pub fn index(&self) -> usize {
        match self {
            Self::Edge(index, ..) | Self::Const(index, _) => *index,
        }
    }
}

/// Auxiliary node payload
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum AuxRecord {
    /// Gradient stops
    ColorRamp {
        /// Interpolation mode
        #[serde(default)]
        interpolation: RampInterpolation,
        /// Stops in order, at least two
        stops: Vec<StopRecord>,
    },
    /// Curve points
    CurveMapping {
        /// Points in order, at least two
        points: Vec<PointRecord>,
    },
}

/// Ramp stop as `[position, [r, g, b, a]]`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StopRecord(pub f32, pub [f32; 4]);

/// Curve point as `[[x, y], handle]`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PointRecord(pub [f32; 2], pub HandleType);

/// One declared graph input or output
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InterfaceRecord {
    /// Socket type tag
    #[serde(rename = "type")]
    pub socket_type: SocketType,
    /// Display name
    pub name: String,
    /// Default value
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<NormalizedValue>,
    /// Lower bound, omitted when open
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min: Option<f64>,
    /// Upper bound, omitted when open
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max: Option<f64>,
}
