// SPDX-License-Identifier: MIT OR Apache-2.0
//! Whole-graph encoding and the two-pass decode.

use super::link::NodeArena;
use super::EffectCodec;
use crate::catalog::NodeCatalog;
use crate::error::Result;
use crate::graph::Graph;
use crate::interface::InterfaceItem;
use crate::value::normalize;
use crate::wire::{GraphRecord, InterfaceRecord};

impl<C: NodeCatalog + ?Sized> EffectCodec<'_, C> {
    /// Encode a graph, its interface and every node, recursing into groups
    pub fn encode_graph(&self, graph: &Graph) -> GraphRecord {
        let nodes = graph
            .nodes()
            .map(|node| {
                let mut record = self.encode_node(node);
                record.inputs = self.encode_inputs(graph, node);
                record
            })
            .collect();

        GraphRecord {
            name: graph.name.clone(),
            nodes,
            inputs: graph.inputs().iter().map(|i| self.encode_interface(i)).collect(),
            outputs: graph.outputs().iter().map(|i| self.encode_interface(i)).collect(),
        }
    }

    fn encode_interface(&self, item: &InterfaceItem) -> InterfaceRecord {
        let numeric = item.socket_type.is_numeric();
        let bound = |value: f64| (numeric && !self.config.is_open_bound(value)).then_some(value);
        InterfaceRecord {
            socket_type: item.socket_type,
            name: item.name.clone(),
            default: if numeric {
                item.default_value.as_ref().map(normalize)
            } else {
                None
            },
            min: bound(item.min),
            max: bound(item.max),
        }
    }

    /// Rebuild a graph from its record.
    ///
    /// The interface is declared first, then every node is created (pass 1),
    /// then every input is wired (pass 2). Any node failure aborts the graph;
    /// nodes created before the failure are dropped with it.
    pub fn decode_graph(&self, record: &GraphRecord) -> Result<Graph> {
        let mut graph = Graph::new(record.name.clone());
        for input in &record.inputs {
            graph.declare_input(decode_interface(input));
        }
        for output in &record.outputs {
            graph.declare_output(decode_interface(output));
        }

        let mut arena = NodeArena::with_capacity(record.nodes.len());
        let mut created = Vec::with_capacity(record.nodes.len());
        for node_record in &record.nodes {
            let id = self.decode_node(node_record, &mut graph)?;
            arena.insert(node_record.name.as_str(), id);
            created.push((id, node_record));
        }

        for (id, node_record) in created {
            self.decode_inputs(&mut graph, &arena, id, node_record)?;
        }

        tracing::debug!(
            graph = %graph.name,
            nodes = graph.node_count(),
            links = graph.link_count(),
            "Decoded graph"
        );
        Ok(graph)
    }
}

fn decode_interface(record: &InterfaceRecord) -> InterfaceItem {
    let mut item = InterfaceItem::new(record.name.clone(), record.socket_type);
    if let Some(default) = &record.default {
        let coerced = record
            .socket_type
            .default_value()
            .and_then(|template| template.coerce(default));
        match coerced {
            Some(value) => item.default_value = Some(value),
            None => tracing::warn!(item = %record.name, "Skipping interface default of the wrong shape"),
        }
    }
    if let Some(min) = record.min {
        item.min = min;
    }
    if let Some(max) = record.max {
        item.max = max;
    }
    item
}
