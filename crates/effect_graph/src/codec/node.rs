// SPDX-License-Identifier: MIT OR Apache-2.0
//! Per-node encoding: type, name, label, property diff and aux payload.

use super::{EffectCodec, DISPLAY_ORDER_KEY, HIDE_KEY};
use crate::catalog::NodeCatalog;
use crate::error::{CodecError, Result};
use crate::graph::Graph;
use crate::node::{Access, AttributeError, Node, NodeId, NodeKind};
use crate::payload::{AuxData, ColorStop};
use crate::value::{normalize, NormalizedValue};
use crate::wire::{AuxRecord, NodeRecord, PointRecord, StopRecord};
use indexmap::IndexMap;

impl<C: NodeCatalog + ?Sized> EffectCodec<'_, C> {
    /// Encode one node without its input sockets.
    ///
    /// Group nodes embed their nested graph; other nodes carry the
    /// attributes that differ from a fresh node of the same type.
    pub fn encode_node(&self, node: &Node) -> NodeRecord {
        let mut record = NodeRecord {
            node_type: node.node_type.clone(),
            name: node.name().to_string(),
            label: node.label.clone(),
            properties: IndexMap::new(),
            aux: None,
            node_group: None,
            inputs: Vec::new(),
        };

        if node.kind == NodeKind::Group {
            record.node_group = node.group().map(|g| Box::new(self.encode_graph(g)));
            return record;
        }

        record.properties = self.encode_properties(node);
        record.aux = node.payload().map(encode_aux);
        record
    }

    fn encode_properties(&self, node: &Node) -> IndexMap<String, NormalizedValue> {
        let defaults = self.catalog.default_properties(&node.node_type);
        let mut properties = IndexMap::new();

        for (name, access) in node.attribute_names() {
            if access != Access::ReadWrite {
                continue;
            }
            let Some(value) = node.attribute(name) else {
                continue;
            };
            let unchanged = defaults
                .as_ref()
                .and_then(|d| d.get(name))
                .is_some_and(|default| default == value);
            if !unchanged {
                properties.insert(name.to_string(), normalize(value));
            }
        }

        // Display slots ride along with any other change
        if !properties.is_empty() {
            properties.insert(HIDE_KEY.to_string(), NormalizedValue::Bool(node.hide));
            properties.insert(
                DISPLAY_ORDER_KEY.to_string(),
                NormalizedValue::Int(i64::from(node.display_order)),
            );
        }
        properties
    }

    /// Create the node described by `record` and add it to `graph` (decode pass 1).
    ///
    /// Inputs are not touched; they are wired once every node of the graph exists.
    pub fn decode_node(&self, record: &NodeRecord, graph: &mut Graph) -> Result<NodeId> {
        let mut node = self
            .catalog
            .construct(&record.node_type)
            .ok_or_else(|| CodecError::UnknownNodeType(record.node_type.clone()))?;
        node.label = record.label.clone();

        if let Some(nested) = &record.node_group {
            let nested = self.decode_graph(nested)?;
            if node.attach_group(nested).is_err() {
                tracing::warn!(
                    node = %record.name,
                    node_type = %record.node_type,
                    "Ignoring nested graph on a non-group node"
                );
            }
        } else {
            self.apply_properties(&mut node, record);
            if let Some(aux) = &record.aux {
                apply_aux(&mut node, &record.name, aux)?;
            }
        }

        tracing::debug!(node = %record.name, node_type = %record.node_type, "Created node");
        match graph.add_node_named(node, &record.name) {
            Ok(id) => Ok(id),
            Err(taken) => Err(CodecError::DuplicateNodeName {
                graph: graph.name.clone(),
                node: taken.0,
            }),
        }
    }

    fn apply_properties(&self, node: &mut Node, record: &NodeRecord) {
        for (key, value) in &record.properties {
            let applied = match key.as_str() {
                HIDE_KEY => set_hide(node, value),
                DISPLAY_ORDER_KEY => set_display_order(node, value),
                _ => node.set_attribute(key, value),
            };
            // Attribute drift between host versions is tolerated
            if let Err(err) = applied {
                tracing::warn!(node = %record.name, property = %key, "Skipping property: {err}");
            }
        }
    }
}

fn set_hide(node: &mut Node, value: &NormalizedValue) -> Result<(), AttributeError> {
    match value {
        NormalizedValue::Bool(hide) => {
            node.hide = *hide;
            Ok(())
        }
        _ => Err(AttributeError::TypeMismatch {
            name: HIDE_KEY.to_string(),
            expected: "bool",
        }),
    }
}

fn set_display_order(node: &mut Node, value: &NormalizedValue) -> Result<(), AttributeError> {
    let order = match value {
        NormalizedValue::Int(order) => i32::try_from(*order).ok(),
        _ => None,
    };
    let order = order.ok_or_else(|| AttributeError::TypeMismatch {
        name: DISPLAY_ORDER_KEY.to_string(),
        expected: "int",
    })?;
    node.display_order = order;
    Ok(())
}

fn encode_aux(payload: &AuxData) -> AuxRecord {
    match payload {
        AuxData::ColorRamp(ramp) => AuxRecord::ColorRamp {
            interpolation: ramp.interpolation,
            stops: ramp
                .stops()
                .iter()
                .map(|s| StopRecord(s.position, s.color))
                .collect(),
        },
        AuxData::CurveMapping(curve) => AuxRecord::CurveMapping {
            points: curve
                .points()
                .iter()
                .map(|p| PointRecord(p.location, p.handle))
                .collect(),
        },
    }
}

fn apply_aux(node: &mut Node, name: &str, aux: &AuxRecord) -> Result<()> {
    match aux {
        AuxRecord::ColorRamp { interpolation, stops } => {
            if stops.len() < 2 {
                return Err(CodecError::MalformedAux {
                    node: name.to_string(),
                    payload: "color ramp",
                    count: stops.len(),
                });
            }
            let Some(ramp) = node.color_ramp_mut() else {
                tracing::warn!(node = %name, "Ignoring color ramp on a node without one");
                return Ok(());
            };
            ramp.interpolation = *interpolation;
            // The first two stops always exist on a fresh ramp
            for (slot, stop) in stops.iter().take(2).enumerate() {
                ramp.set_stop(slot, ColorStop::new(stop.0, stop.1));
            }
            for stop in &stops[2..] {
                ramp.push_stop(ColorStop::new(stop.0, stop.1));
            }
        }
        AuxRecord::CurveMapping { points } => {
            if points.len() < 2 {
                return Err(CodecError::MalformedAux {
                    node: name.to_string(),
                    payload: "curve mapping",
                    count: points.len(),
                });
            }
            let Some(curve) = node.curve_mut() else {
                tracing::warn!(node = %name, "Ignoring curve mapping on a node without one");
                return Ok(());
            };
            let first = points[0];
            let last = points[points.len() - 1];
            let interior = &points[1..points.len() - 1];

            // Interior points go in before the end points are rewritten,
            // otherwise insertion would shift the end slots
            for point in interior {
                let index = curve.insert(point.0);
                if let Some(inserted) = curve.point_mut(index) {
                    inserted.handle = point.1;
                }
            }
            if let Some(start) = curve.point_mut(0) {
                start.location = first.0;
                start.handle = first.1;
            }
            let end = curve.last_index();
            if let Some(end) = curve.point_mut(end) {
                end.location = last.0;
                end.handle = last.1;
            }
        }
    }
    Ok(())
}
