// SPDX-License-Identifier: MIT OR Apache-2.0
//! Effect graph model and codec.
//!
//! An effect is a procedural node graph plus a little metadata. This crate
//! provides:
//! - An in-memory host model (graphs, nodes, sockets, links)
//! - Node type catalogs with memoized defaults
//! - A JSON codec for graphs, including nested groups, multi-link sockets,
//!   color ramps and curve mappings
//! - The effect container file format
//!
//! ## Round trip
//!
//! ```
//! use effect_graph::{create_effect_registry, EffectCodec, Graph};
//!
//! let registry = create_effect_registry();
//! let codec = EffectCodec::new(&registry);
//!
//! let mut graph = Graph::new("Scatter");
//! let cube = graph.add_node(registry.create_node("GeometryNodeMeshCube").unwrap());
//! let join = graph.add_node(registry.create_node("GeometryNodeJoinGeometry").unwrap());
//! graph.connect(cube, 0, join, 0).unwrap();
//!
//! let record = codec.encode_graph(&graph);
//! let decoded = codec.decode_graph(&record).unwrap();
//! assert_eq!(codec.encode_graph(&decoded), record);
//! ```

pub mod catalog;
pub mod codec;
pub mod effect;
pub mod error;
pub mod graph;
pub mod interface;
pub mod link;
pub mod node;
pub mod payload;
pub mod socket;
pub mod value;
pub mod wire;

pub use catalog::{create_effect_registry, NodeCatalog, NodeRegistry};
pub use codec::{CodecConfig, EffectCodec};
pub use effect::{Decoded, Effect, EffectMeta, EffectRecord, Selector};
pub use error::CodecError;
pub use graph::{Graph, LinkError};
pub use interface::InterfaceItem;
pub use link::{Link, LinkId};
pub use node::{Node, NodeId, NodeKind, NodeType};
pub use payload::{ColorRamp, ColorStop, CurveMapping, CurvePoint, HandleType};
pub use socket::{InputSocket, OutputSocket, SocketType};
pub use value::{normalize, AttrValue, NormalizedValue};
