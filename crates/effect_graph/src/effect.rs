// SPDX-License-Identifier: MIT OR Apache-2.0
//! Effect container: metadata plus one root graph, and the on-disk format.

use crate::catalog::NodeCatalog;
use crate::codec::EffectCodec;
use crate::error::{CodecError, Result};
use crate::graph::Graph;
use crate::wire::GraphRecord;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::str::FromStr;

/// Current effect schema version
pub const EFFECT_SCHEMA_VERSION: u32 = 1;

/// Flat descriptive metadata of an effect
///
/// Version fields are carried through unchanged and never interpreted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EffectMeta {
    /// Display name
    pub name: String,
    /// Description
    pub description: String,
    /// Author
    pub author: String,
    /// Icon identifier
    pub icon: String,
    /// Schema version the file was written with
    pub schema_version: u32,
    /// Version of the host application that authored the graph
    pub host_version: Vec<u32>,
    /// Category
    pub category: String,
    /// Subcategory
    pub subcategory: String,
}

impl EffectMeta {
    /// Metadata with a name and the current schema version
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }
}

impl Default for EffectMeta {
    fn default() -> Self {
        Self {
            name: "Effect".to_string(),
            description: String::new(),
            author: String::new(),
            icon: "NODETREE".to_string(),
            schema_version: EFFECT_SCHEMA_VERSION,
            host_version: Vec::new(),
            category: String::new(),
            subcategory: String::new(),
        }
    }
}

/// Top-level wire document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EffectRecord {
    /// Metadata
    pub meta: EffectMeta,
    /// Root graph
    pub node_group: GraphRecord,
}

/// Metadata-only view of the document; the graph is not parsed
#[derive(Deserialize)]
struct MetaEnvelope {
    meta: EffectMeta,
}

/// An effect in host form
#[derive(Debug, Clone)]
pub struct Effect {
    /// Metadata
    pub meta: EffectMeta,
    /// Root graph
    pub graph: Graph,
}

/// Which part of an effect document to decode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selector {
    /// Metadata and graph
    Full,
    /// Metadata only
    Meta,
    /// Graph only
    Graph,
}

impl FromStr for Selector {
    type Err = CodecError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "full" => Ok(Self::Full),
            "meta" => Ok(Self::Meta),
            "graph" => Ok(Self::Graph),
            other => Err(CodecError::UnsupportedSelector(other.to_string())),
        }
    }
}

impl std::fmt::Display for Selector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Full => f.write_str("full"),
            Self::Meta => f.write_str("meta"),
            Self::Graph => f.write_str("graph"),
        }
    }
}

/// Result of a selective decode
#[derive(Debug, Clone)]
pub enum Decoded {
    /// Metadata and graph
    Full(Effect),
    /// Metadata only
    Meta(EffectMeta),
    /// Graph only
    Graph(Graph),
}

impl Decoded {
    /// The metadata, if it was decoded
    pub fn meta(&self) -> Option<&EffectMeta> {
        match self {
            Self::Full(effect) => Some(&effect.meta),
            Self::Meta(meta) => Some(meta),
            Self::Graph(_) => None,
        }
    }

    /// The graph, if it was decoded
    pub fn graph(&self) -> Option<&Graph> {
        match self {
            Self::Full(effect) => Some(&effect.graph),
            Self::Graph(graph) => Some(graph),
            Self::Meta(_) => None,
        }
    }

    /// The full effect, if both parts were decoded
    pub fn into_effect(self) -> Option<Effect> {
        match self {
            Self::Full(effect) => Some(effect),
            Self::Meta(_) | Self::Graph(_) => None,
        }
    }
}

impl<C: NodeCatalog + ?Sized> EffectCodec<'_, C> {
    /// Pair metadata with the encoded root graph
    pub fn encode_effect(&self, meta: &EffectMeta, graph: &Graph) -> EffectRecord {
        EffectRecord {
            meta: meta.clone(),
            node_group: self.encode_graph(graph),
        }
    }

    /// Decode the selected part of a wire document
    pub fn decode_effect(&self, record: &EffectRecord, selector: Selector) -> Result<Decoded> {
        Ok(match selector {
            Selector::Full => Decoded::Full(Effect {
                meta: record.meta.clone(),
                graph: self.decode_graph(&record.node_group)?,
            }),
            Selector::Meta => Decoded::Meta(record.meta.clone()),
            Selector::Graph => Decoded::Graph(self.decode_graph(&record.node_group)?),
        })
    }

    /// Serialize an effect as pretty-printed JSON
    pub fn to_json(&self, meta: &EffectMeta, graph: &Graph) -> Result<String> {
        let record = self.encode_effect(meta, graph);
        let indent = vec![b' '; self.config().indent];
        let mut buffer = Vec::new();
        let formatter = serde_json::ser::PrettyFormatter::with_indent(&indent);
        let mut serializer = serde_json::Serializer::with_formatter(&mut buffer, formatter);
        record.serialize(&mut serializer)?;
        // serde_json only emits valid UTF-8
        String::from_utf8(buffer)
            .map_err(|e| CodecError::Json(<serde_json::Error as serde::ser::Error>::custom(e)))
    }

    /// Parse JSON text and decode the selected part
    pub fn from_json(&self, text: &str, selector: Selector) -> Result<Decoded> {
        if selector == Selector::Meta {
            let envelope: MetaEnvelope = serde_json::from_str(text)?;
            return Ok(Decoded::Meta(envelope.meta));
        }
        let record: EffectRecord = serde_json::from_str(text)?;
        self.decode_effect(&record, selector)
    }

    /// Write an effect file
    pub fn write_effect(&self, path: &Path, meta: &EffectMeta, graph: &Graph) -> Result<()> {
        let json = self.to_json(meta, graph)?;
        std::fs::write(path, json).map_err(|source| CodecError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::info!("Saved effect {} to {:?}", meta.name, path);
        Ok(())
    }

    /// Read an effect file and decode the selected part
    pub fn read_effect(&self, path: &Path, selector: Selector) -> Result<Decoded> {
        let text = std::fs::read_to_string(path).map_err(|source| CodecError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let decoded = self.from_json(&text, selector)?;
        tracing::info!("Loaded effect ({selector}) from {:?}", path);
        Ok(decoded)
    }
}
