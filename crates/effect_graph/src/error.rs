// SPDX-License-Identifier: MIT OR Apache-2.0
//! Errors raised by the effect codec.

use crate::graph::LinkError;
use crate::socket::SocketDirection;
use std::path::PathBuf;

/// Result alias for codec operations
pub type Result<T, E = CodecError> = std::result::Result<T, E>;

/// Error while encoding, decoding, reading or writing an effect
#[derive(Debug, thiserror::Error)]
pub enum CodecError {
    /// No constructor for a decoded node type
    #[error("Unknown node type: {0}")]
    UnknownNodeType(String),

    /// A link names a node that does not exist in the graph
    #[error("Node {node} links from missing node {source_node}")]
    MissingSourceNode {
        /// Node whose input holds the link
        node: String,
        /// Name that failed to resolve
        source_node: String,
    },

    /// Socket index past a node's declared socket count
    #[error("Node {node} has {count} {direction} sockets, index {index} is out of range")]
    InvalidSocketIndex {
        /// Node name
        node: String,
        /// Which side of the node
        direction: SocketDirection,
        /// Requested index
        index: usize,
        /// Declared socket count
        count: usize,
    },

    /// Ramp or curve payload with fewer than two entries
    #[error("Malformed {payload} on node {node}: {count} entries, at least 2 required")]
    MalformedAux {
        /// Node name
        node: String,
        /// Payload kind
        payload: &'static str,
        /// Entries found
        count: usize,
    },

    /// Partial-read mode not recognized
    #[error("Unsupported selector: {0} (expected full, meta or graph)")]
    UnsupportedSelector(String),

    /// Two node records in one graph share a name
    #[error("Duplicate node name {node} in graph {graph}")]
    DuplicateNodeName {
        /// Graph name
        graph: String,
        /// Repeated node name
        node: String,
    },

    /// The graph refused a link
    #[error(transparent)]
    Link(#[from] LinkError),

    /// JSON (de)serialization failure
    #[error("Invalid effect document: {0}")]
    Json(#[from] serde_json::Error),

    /// Codec settings file could not be parsed
    #[error("Invalid codec config: {0}")]
    Config(#[from] ron::error::SpannedError),

    /// File system failure
    #[error("I/O error on {path:?}: {source}")]
    Io {
        /// File involved
        path: PathBuf,
        /// Underlying error
        source: std::io::Error,
    },
}
