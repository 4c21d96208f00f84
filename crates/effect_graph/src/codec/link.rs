// SPDX-License-Identifier: MIT OR Apache-2.0
//! Input socket wiring: constants, links and multi-link fan-out.

use super::EffectCodec;
use crate::catalog::NodeCatalog;
use crate::error::{CodecError, Result};
use crate::graph::Graph;
use crate::node::{Node, NodeId};
use crate::socket::SocketDirection;
use crate::value::{normalize, NormalizedValue};
use crate::wire::{InputRecord, NodeRecord};
use std::collections::HashMap;

/// Nodes created in decode pass 1, by name
pub(crate) type NodeArena<'r> = HashMap<&'r str, NodeId>;

impl<C: NodeCatalog + ?Sized> EffectCodec<'_, C> {
    /// Encode every input socket of `node`.
    ///
    /// A linked socket yields one `[index, source, output]` record per link,
    /// so multi-input sockets fan out. An unlinked socket yields its
    /// normalized constant, or `[index, null]` when its type has none.
    pub fn encode_inputs(&self, graph: &Graph, node: &Node) -> Vec<InputRecord> {
        let mut records = Vec::with_capacity(node.input_count());

        for (index, socket) in node.inputs.iter().enumerate() {
            let mut linked = false;
            for link in graph.links_into(node.id, index) {
                let Some(source) = graph.node(link.from_node) else {
                    continue;
                };
                records.push(InputRecord::Edge(index, source.name().to_string(), link.from_output));
                linked = true;
            }
            if linked {
                continue;
            }

            let constant = if socket.socket_type.has_constant() {
                socket.default_value.as_ref().map_or(NormalizedValue::Null, normalize)
            } else {
                NormalizedValue::Null
            };
            records.push(InputRecord::Const(index, constant));
        }
        records
    }

    /// Apply the input records of node `target` (decode pass 2).
    ///
    /// Every name in `arena` must already exist in `graph`.
    pub(crate) fn decode_inputs(
        &self,
        graph: &mut Graph,
        arena: &NodeArena<'_>,
        target: NodeId,
        record: &NodeRecord,
    ) -> Result<()> {
        for input in &record.inputs {
            match input {
                InputRecord::Const(index, value) => apply_constant(graph, target, *index, value)?,
                InputRecord::Edge(index, source_name, output) => {
                    let source = arena.get(source_name.as_str()).copied().ok_or_else(|| {
                        CodecError::MissingSourceNode {
                            node: record.name.clone(),
                            source_node: source_name.clone(),
                        }
                    })?;
                    check_index(graph, target, SocketDirection::Input, *index)?;
                    check_index(graph, source, SocketDirection::Output, *output)?;
                    // Repeated records on one index each become an edge
                    graph.add_link(source, *output, target, *index)?;
                }
            }
        }
        Ok(())
    }
}

fn check_index(graph: &Graph, node_id: NodeId, direction: SocketDirection, index: usize) -> Result<()> {
    let Some(node) = graph.node(node_id) else {
        return Ok(());
    };
    let count = match direction {
        SocketDirection::Input => node.input_count(),
        SocketDirection::Output => node.output_count(),
    };
    if index < count {
        return Ok(());
    }
    Err(CodecError::InvalidSocketIndex {
        node: node.name().to_string(),
        direction,
        index,
        count,
    })
}

fn apply_constant(graph: &mut Graph, target: NodeId, index: usize, value: &NormalizedValue) -> Result<()> {
    check_index(graph, target, SocketDirection::Input, index)?;
    let Some(node) = graph.node_mut(target) else {
        return Ok(());
    };
    let name = node.name().to_string();
    let Some(socket) = node.input_mut(index) else {
        return Ok(());
    };

    let coerced = match &socket.default_value {
        Some(current) => current.coerce(value).ok_or(current.shape()),
        None => {
            if !value.is_null() {
                tracing::warn!(node = %name, socket = index, "Ignoring constant on a socket without one");
            }
            return Ok(());
        }
    };
    match coerced {
        Ok(coerced) => socket.default_value = Some(coerced),
        Err(expected) => tracing::warn!(
            node = %name,
            socket = index,
            expected,
            "Skipping socket constant of the wrong shape"
        ),
    }
    Ok(())
}
