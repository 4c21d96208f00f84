// SPDX-License-Identifier: MIT OR Apache-2.0
//! Conversion between host graphs and wire records.
//!
//! Encoding walks a [`Graph`](crate::graph::Graph) top-down and never fails.
//! Decoding runs in two passes per graph: every node is created first and
//! indexed by name, then input sockets are wired against that index, so a
//! link may name a node that appears later in the record.

mod graph;
mod link;
mod node;

use crate::catalog::NodeCatalog;
use crate::error::{CodecError, Result};
use crate::interface::UNBOUNDED;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Property key stored in the node's visibility slot
pub const HIDE_KEY: &str = "hide";
/// Property key stored in the node's display-order slot
pub const DISPLAY_ORDER_KEY: &str = "display_order";

/// Codec settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CodecConfig {
    /// Bound magnitude treated as "no bound" on interface items
    pub unbounded_limit: f64,
    /// Spaces per indentation level when writing effect files
    pub indent: usize,
}

impl Default for CodecConfig {
    fn default() -> Self {
        Self {
            unbounded_limit: UNBOUNDED,
            indent: 4,
        }
    }
}

impl CodecConfig {
    /// Parse settings from RON text
    pub fn from_ron(s: &str) -> Result<Self> {
        Ok(ron::from_str(s)?)
    }

    /// Load settings from a RON file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| CodecError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_ron(&content)
    }

    /// Whether a min/max value means "unbounded"
    pub fn is_open_bound(&self, bound: f64) -> bool {
        bound.abs() >= self.unbounded_limit * (1.0 - 1e-6)
    }
}

/// Encoder/decoder bound to a node catalog
pub struct EffectCodec<'a, C: NodeCatalog + ?Sized> {
    catalog: &'a C,
    config: CodecConfig,
}

impl<'a, C: NodeCatalog + ?Sized> EffectCodec<'a, C> {
    /// Create a codec with default settings
    pub fn new(catalog: &'a C) -> Self {
        Self {
            catalog,
            config: CodecConfig::default(),
        }
    }

    /// Replace the settings
    pub fn with_config(mut self, config: CodecConfig) -> Self {
        self.config = config;
        self
    }

    /// Current settings
    pub fn config(&self) -> &CodecConfig {
        &self.config
    }

    /// Catalog used to construct nodes
    pub fn catalog(&self) -> &C {
        self.catalog
    }
}
