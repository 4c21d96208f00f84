// SPDX-License-Identifier: MIT OR Apache-2.0
//! Graph boundary declarations (group inputs and outputs).

use crate::socket::{InputSocket, OutputSocket, SocketType};
use crate::value::AttrValue;

/// Bound magnitude at or beyond which a min/max counts as open
pub const UNBOUNDED: f64 = 1e20;

/// A named, typed input or output declared at a graph boundary.
///
/// Items are identified on the wire by their index, not their name.
#[derive(Debug, Clone, PartialEq)]
pub struct InterfaceItem {
    /// Display name
    pub name: String,
    /// Data type
    pub socket_type: SocketType,
    /// Default value (numeric types only)
    pub default_value: Option<AttrValue>,
    /// Lower bound
    pub min: f64,
    /// Upper bound
    pub max: f64,
}

impl InterfaceItem {
    /// Create an unbounded item with the type's default
    pub fn new(name: impl Into<String>, socket_type: SocketType) -> Self {
        let default_value = if socket_type.is_numeric() {
            socket_type.default_value()
        } else {
            None
        };
        Self {
            name: name.into(),
            socket_type,
            default_value,
            min: -UNBOUNDED,
            max: UNBOUNDED,
        }
    }

    /// Set the default value
    pub fn with_default(mut self, value: AttrValue) -> Self {
        self.default_value = Some(value);
        self
    }

    /// Set the lower and upper bound
    pub fn with_range(mut self, min: f64, max: f64) -> Self {
        self.min = min;
        self.max = max;
        self
    }

    /// Socket seen from the outside of the group (an input of the group node)
    pub fn to_input_socket(&self) -> InputSocket {
        let mut socket = InputSocket::new(self.name.clone(), self.socket_type);
        if let Some(value) = &self.default_value {
            socket.default_value = Some(value.clone());
        }
        socket
    }

    /// Socket seen from the outside of the group (an output of the group node)
    pub fn to_output_socket(&self) -> OutputSocket {
        OutputSocket::new(self.name.clone(), self.socket_type)
    }
}
