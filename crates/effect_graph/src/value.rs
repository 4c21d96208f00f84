// SPDX-License-Identifier: MIT OR Apache-2.0
//! Attribute values and their JSON-safe normalized form.

use serde::{Deserialize, Serialize};

/// Value held by a node attribute or socket default on the host side
#[derive(Debug, Clone, PartialEq)]
pub enum AttrValue {
    /// Boolean
    Bool(bool),
    /// Integer
    Int(i32),
    /// Float
    Float(f32),
    /// Fixed-length vector
    Vector(Vec<f32>),
    /// Color (RGBA)
    Color([f32; 4]),
    /// Free text
    String(String),
    /// Enum item identifier
    Enum(String),
    /// Reference to a named datablock (material, object, image)
    Reference(Option<String>),
    /// Host structure with no serializable shape
    Opaque,
}

impl AttrValue {
    /// Short name of the value shape, used in diagnostics
    pub fn shape(&self) -> &'static str {
        match self {
            Self::Bool(_) => "bool",
            Self::Int(_) => "int",
            Self::Float(_) => "float",
            Self::Vector(_) => "vector",
            Self::Color(_) => "color",
            Self::String(_) => "string",
            Self::Enum(_) => "enum",
            Self::Reference(_) => "reference",
            Self::Opaque => "opaque",
        }
    }

    /// Convert a normalized value back into the shape of `self`.
    ///
    /// Returns `None` when the normalized value cannot take that shape.
    pub fn coerce(&self, value: &NormalizedValue) -> Option<AttrValue> {
        match (self, value) {
            (Self::Bool(_), NormalizedValue::Bool(b)) => Some(Self::Bool(*b)),
            (Self::Int(_), NormalizedValue::Int(i)) => i32::try_from(*i).ok().map(Self::Int),
            (Self::Float(_), NormalizedValue::Float(f)) => Some(Self::Float(*f as f32)),
            (Self::Float(_), NormalizedValue::Int(i)) => Some(Self::Float(*i as f32)),
            (Self::Vector(current), NormalizedValue::Sequence(items)) => {
                if items.len() != current.len() {
                    return None;
                }
                items
                    .iter()
                    .map(NormalizedValue::as_f64)
                    .map(|f| f.map(|f| f as f32))
                    .collect::<Option<Vec<_>>>()
                    .map(Self::Vector)
            }
            (Self::Color(_), NormalizedValue::Sequence(items)) => {
                let channels = items
                    .iter()
                    .map(NormalizedValue::as_f64)
                    .collect::<Option<Vec<_>>>()?;
                match channels.as_slice() {
                    [r, g, b, a] => Some(Self::Color([*r as f32, *g as f32, *b as f32, *a as f32])),
                    _ => None,
                }
            }
            (Self::String(_), NormalizedValue::Text(s)) => Some(Self::String(s.clone())),
            (Self::Enum(_), NormalizedValue::Text(s)) => Some(Self::Enum(s.clone())),
            (Self::Reference(_), NormalizedValue::Null) => Some(Self::Reference(None)),
            (Self::Reference(_), NormalizedValue::Text(s)) => Some(Self::Reference(Some(s.clone()))),
            _ => None,
        }
    }
}

/// JSON-safe value produced by [`normalize`]
///
/// Serialized untagged, so the wire form is a plain JSON scalar, array or `null`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum NormalizedValue {
    /// Value with no representable shape
    Null,
    /// Boolean
    Bool(bool),
    /// Integer
    Int(i64),
    /// Float
    Float(f64),
    /// Text
    Text(String),
    /// Ordered sequence of normalized values
    Sequence(Vec<NormalizedValue>),
}

impl NormalizedValue {
    /// Whether this is `null`
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Numeric view of the value, if it is a number
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Int(i) => Some(*i as f64),
            Self::Float(f) => Some(*f),
            _ => None,
        }
    }
}

/// Reduce a host value to its JSON-safe form.
///
/// Text stays text, anything with a length becomes a sequence, numbers and
/// booleans pass through, and everything else degrades to `null`. Never fails.
pub fn normalize(value: &AttrValue) -> NormalizedValue {
    match value {
        AttrValue::String(s) | AttrValue::Enum(s) => NormalizedValue::Text(s.clone()),
        AttrValue::Vector(items) => {
            NormalizedValue::Sequence(items.iter().map(|v| NormalizedValue::Float(f64::from(*v))).collect())
        }
        AttrValue::Color(rgba) => {
            NormalizedValue::Sequence(rgba.iter().map(|v| NormalizedValue::Float(f64::from(*v))).collect())
        }
        AttrValue::Bool(b) => NormalizedValue::Bool(*b),
        AttrValue::Int(i) => NormalizedValue::Int(i64::from(*i)),
        AttrValue::Float(f) => NormalizedValue::Float(f64::from(*f)),
        AttrValue::Reference(_) | AttrValue::Opaque => NormalizedValue::Null,
    }
}
