// SPDX-License-Identifier: MIT OR Apache-2.0
//! End-to-end encode/decode behavior of the effect codec.

use effect_graph::wire::{AuxRecord, GraphRecord, InputRecord, PointRecord, StopRecord};
use effect_graph::{
    create_effect_registry, AttrValue, CodecError, ColorStop, EffectCodec, EffectMeta, Graph, HandleType,
    InterfaceItem, NodeRegistry, NormalizedValue, Selector, SocketType,
};
use serde_json::json;

const WHITE: [f32; 4] = [1.0, 1.0, 1.0, 1.0];
const RED: [f32; 4] = [1.0, 0.0, 0.0, 1.0];
const BLACK: [f32; 4] = [0.0, 0.0, 0.0, 1.0];

/// Scatter effect touching every codec feature except nesting
fn scatter_graph(registry: &NodeRegistry) -> Graph {
    let mut graph = Graph::new("Scatter");
    graph.declare_input(InterfaceItem::new("Geometry", SocketType::Geometry));
    graph.declare_input(
        InterfaceItem::new("Density", SocketType::Float)
            .with_default(AttrValue::Float(10.0))
            .with_range(0.0, 1e20),
    );
    graph.declare_output(InterfaceItem::new("Geometry", SocketType::Geometry));

    // Output first, so its link names a node that appears later
    let output = graph.add_node(registry.create_node("NodeGroupOutput").unwrap());
    let input = graph.add_node(registry.create_node("NodeGroupInput").unwrap());
    let distribute = graph.add_node(registry.create_node("GeometryNodeDistributePointsOnFaces").unwrap());
    let cube = graph.add_node(registry.create_node("GeometryNodeMeshCube").unwrap());
    let instance = graph.add_node(registry.create_node("GeometryNodeInstanceOnPoints").unwrap());
    let join = graph.add_node(registry.create_node("GeometryNodeJoinGeometry").unwrap());
    graph.add_node(registry.create_node("GeometryNodeSetMaterial").unwrap());

    let mut math = registry.create_node("ShaderNodeMath").unwrap();
    math.set("operation", AttrValue::Enum("MULTIPLY".into())).unwrap();
    math.set("location", AttrValue::Vector(vec![200.0, -50.0])).unwrap();
    math.label = "Scale Factor".to_string();
    math.hide = true;
    math.input_mut(1).unwrap().default_value = Some(AttrValue::Float(3.0));
    graph.add_node(math);

    let mut ramp = registry.create_node("ShaderNodeValToRGB").unwrap();
    let stops = ramp.color_ramp_mut().unwrap();
    stops.set_stop(0, ColorStop::new(0.0, WHITE));
    stops.set_stop(1, ColorStop::new(0.5, RED));
    stops.push_stop(ColorStop::new(1.0, BLACK));
    graph.add_node(ramp);

    let mut curve = registry.create_node("ShaderNodeFloatCurve").unwrap();
    let mapping = curve.curve_mut().unwrap();
    for (location, handle) in [([0.25, 0.4], HandleType::Vector), ([0.75, 0.6], HandleType::AutoClamped)] {
        let index = mapping.insert(location);
        mapping.point_mut(index).unwrap().handle = handle;
    }
    let first = mapping.point_mut(0).unwrap();
    first.location = [0.0, 0.1];
    first.handle = HandleType::Vector;
    graph.add_node(curve);

    graph.connect(input, 0, distribute, 0).unwrap();
    graph.connect(input, 1, distribute, 2).unwrap();
    graph.connect(distribute, 0, instance, 0).unwrap();
    graph.connect(cube, 0, instance, 2).unwrap();
    graph.connect(input, 0, join, 0).unwrap();
    graph.connect(instance, 0, join, 0).unwrap();
    graph.connect(cube, 0, join, 0).unwrap();
    graph.connect(join, 0, output, 0).unwrap();
    graph
}

fn node_record<'a>(record: &'a GraphRecord, name: &str) -> &'a effect_graph::wire::NodeRecord {
    record.nodes.iter().find(|n| n.name == name).unwrap()
}

#[test]
fn round_trip_preserves_nodes_properties_and_wiring() {
    let registry = create_effect_registry();
    let codec = EffectCodec::new(&registry);
    let original = scatter_graph(&registry);

    let text = codec.to_json(&EffectMeta::new("Scatter"), &original).unwrap();
    let decoded = codec.from_json(&text, Selector::Graph).unwrap();
    let graph = decoded.graph().unwrap();

    let names: Vec<_> = graph.nodes().map(|n| n.name().to_string()).collect();
    let expected: Vec<_> = original.nodes().map(|n| n.name().to_string()).collect();
    assert_eq!(names, expected);
    assert_eq!(graph.link_count(), original.link_count());

    let math = graph.node_by_name("Math").unwrap();
    assert_eq!(math.attribute("operation"), Some(&AttrValue::Enum("MULTIPLY".into())));
    assert_eq!(math.attribute("location"), Some(&AttrValue::Vector(vec![200.0, -50.0])));
    assert_eq!(math.label, "Scale Factor");
    assert!(math.hide);
    assert_eq!(math.input(1).unwrap().default_value, Some(AttrValue::Float(3.0)));

    let density = &graph.inputs()[1];
    assert_eq!(density.default_value, Some(AttrValue::Float(10.0)));
    assert_eq!(density.min, 0.0);

    let output = graph.node_by_name("Group Output").unwrap();
    let join = graph.node_id("Join Geometry").unwrap();
    let feeding: Vec<_> = graph.links_into(output.id, 0).collect();
    assert_eq!(feeding.len(), 1);
    assert_eq!(feeding[0].from_node, join);
}

#[test]
fn encoding_is_idempotent() {
    let registry = create_effect_registry();
    let codec = EffectCodec::new(&registry);
    let meta = EffectMeta {
        author: "FX Team".to_string(),
        host_version: vec![4, 1, 0],
        category: "Scatter".to_string(),
        subcategory: "Instances".to_string(),
        ..EffectMeta::new("Scatter")
    };

    let first = codec.to_json(&meta, &scatter_graph(&registry)).unwrap();
    let effect = codec.from_json(&first, Selector::Full).unwrap().into_effect().unwrap();
    let second = codec.to_json(&effect.meta, &effect.graph).unwrap();

    let first: serde_json::Value = serde_json::from_str(&first).unwrap();
    let second: serde_json::Value = serde_json::from_str(&second).unwrap();
    assert_eq!(first, second);
}

#[test]
fn multi_link_socket_fans_out() {
    let registry = create_effect_registry();
    let codec = EffectCodec::new(&registry);
    let record = codec.encode_graph(&scatter_graph(&registry));

    let join = node_record(&record, "Join Geometry");
    assert_eq!(
        join.inputs,
        vec![
            InputRecord::Edge(0, "Group Input".into(), 0),
            InputRecord::Edge(0, "Instance on Points".into(), 0),
            InputRecord::Edge(0, "Cube".into(), 0),
        ]
    );

    let graph = codec.decode_graph(&record).unwrap();
    let join = graph.node_id("Join Geometry").unwrap();
    let sources: Vec<_> = graph
        .links_into(join, 0)
        .map(|l| graph.node(l.from_node).unwrap().name().to_string())
        .collect();
    assert_eq!(sources, ["Group Input", "Instance on Points", "Cube"]);
}

#[test]
fn sockets_without_constants_encode_as_null() {
    let registry = create_effect_registry();
    let codec = EffectCodec::new(&registry);
    let record = codec.encode_graph(&scatter_graph(&registry));

    let set_material = node_record(&record, "Set Material");
    let wire = serde_json::to_value(&set_material.inputs).unwrap();
    assert_eq!(wire, json!([[0, null], [1, true], [2, null]]));
}

#[test]
fn properties_hold_only_changed_attributes_plus_display_slots() {
    let registry = create_effect_registry();
    let codec = EffectCodec::new(&registry);
    let record = codec.encode_graph(&scatter_graph(&registry));

    let math = node_record(&record, "Math");
    let keys: Vec<_> = math.properties.keys().map(String::as_str).collect();
    assert_eq!(keys, ["location", "operation", "hide", "display_order"]);
    assert_eq!(math.properties["hide"], NormalizedValue::Bool(true));
    assert_eq!(math.properties["display_order"], NormalizedValue::Int(0));

    // Untouched nodes carry no properties at all
    assert!(node_record(&record, "Cube").properties.is_empty());
}

#[test]
fn color_ramp_round_trip_keeps_three_stops_in_order() {
    let registry = create_effect_registry();
    let codec = EffectCodec::new(&registry);
    let record = codec.encode_graph(&scatter_graph(&registry));

    let Some(AuxRecord::ColorRamp { stops, .. }) = &node_record(&record, "Color Ramp").aux else {
        panic!("color ramp aux missing");
    };
    assert_eq!(stops, &[StopRecord(0.0, WHITE), StopRecord(0.5, RED), StopRecord(1.0, BLACK)]);

    let graph = codec.decode_graph(&record).unwrap();
    let ramp = graph.node_by_name("Color Ramp").unwrap().color_ramp().unwrap();
    assert_eq!(
        ramp.stops(),
        &[ColorStop::new(0.0, WHITE), ColorStop::new(0.5, RED), ColorStop::new(1.0, BLACK)]
    );
}

#[test]
fn curve_mapping_round_trip_keeps_end_points_and_handles() {
    let registry = create_effect_registry();
    let codec = EffectCodec::new(&registry);
    let record = codec.encode_graph(&scatter_graph(&registry));

    let Some(AuxRecord::CurveMapping { points }) = &node_record(&record, "Float Curve").aux else {
        panic!("curve aux missing");
    };
    assert_eq!(
        points,
        &[
            PointRecord([0.0, 0.1], HandleType::Vector),
            PointRecord([0.25, 0.4], HandleType::Vector),
            PointRecord([0.75, 0.6], HandleType::AutoClamped),
            PointRecord([1.0, 1.0], HandleType::Auto),
        ]
    );

    let graph = codec.decode_graph(&record).unwrap();
    let curve = graph.node_by_name("Float Curve").unwrap().curve().unwrap();
    let decoded: Vec<_> = curve.points().iter().map(|p| PointRecord(p.location, p.handle)).collect();
    assert_eq!(&decoded, points);
}

#[test]
fn unknown_node_type_aborts_graph_decode() {
    let registry = create_effect_registry();
    let codec = EffectCodec::new(&registry);
    let record: GraphRecord = serde_json::from_value(json!({
        "name": "Broken",
        "nodes": [
            {"type": "GeometryNodeMeshCube", "name": "Cube", "inputs": []},
            {"type": "NoSuchNode", "name": "Mystery", "inputs": []},
            {"type": "GeometryNodeJoinGeometry", "name": "Join", "inputs": [[0, "Cube", 0]]}
        ]
    }))
    .unwrap();

    let err = codec.decode_graph(&record).unwrap_err();
    assert!(matches!(err, CodecError::UnknownNodeType(t) if t == "NoSuchNode"));
}

#[test]
fn nested_group_round_trip_scopes_names() {
    let registry = create_effect_registry();
    let codec = EffectCodec::new(&registry);

    let mut inner = Graph::new("Cube Pair");
    inner.declare_output(InterfaceItem::new("Geometry", SocketType::Geometry));
    let cube = inner.add_node(registry.create_node("GeometryNodeMeshCube").unwrap());
    let output = inner.add_node(registry.create_node("NodeGroupOutput").unwrap());
    inner.connect(cube, 0, output, 0).unwrap();

    let mut outer = Graph::new("Outer");
    // Same node name as inside the group
    let outer_cube = outer.add_node(registry.create_node("GeometryNodeMeshCube").unwrap());
    let mut group = registry.create_node("GeometryNodeGroup").unwrap();
    group.attach_group(inner).unwrap();
    let group = outer.add_node(group);
    let join = outer.add_node(registry.create_node("GeometryNodeJoinGeometry").unwrap());
    outer.connect(outer_cube, 0, join, 0).unwrap();
    outer.connect(group, 0, join, 0).unwrap();

    let record = codec.encode_graph(&outer);
    let group_record = node_record(&record, "Group");
    assert!(group_record.properties.is_empty());
    assert!(group_record.aux.is_none());
    let nested = group_record.node_group.as_ref().unwrap();
    assert_eq!(nested.name, "Cube Pair");
    assert_eq!(nested.nodes.len(), 2);

    let decoded = codec.decode_graph(&record).unwrap();
    assert!(decoded.node_by_name("Cube").is_some());
    let group = decoded.node_by_name("Group").unwrap();
    assert_eq!(group.output_count(), 1);
    let inner = group.group().unwrap();
    assert_eq!(inner.node_count(), 2);
    assert!(inner.node_by_name("Cube").is_some());
    assert_eq!(inner.link_count(), 1);
    assert_eq!(decoded.links_into(decoded.node_id("Join Geometry").unwrap(), 0).count(), 2);
    assert_eq!(codec.encode_graph(&decoded), record);
}

#[test]
fn link_to_missing_node_is_rejected() {
    let registry = create_effect_registry();
    let codec = EffectCodec::new(&registry);
    let record: GraphRecord = serde_json::from_value(json!({
        "name": "Dangling",
        "nodes": [
            {"type": "GeometryNodeJoinGeometry", "name": "Join", "inputs": [[0, "Ghost", 0]]}
        ]
    }))
    .unwrap();

    let err = codec.decode_graph(&record).unwrap_err();
    assert!(matches!(
        err,
        CodecError::MissingSourceNode { node, source_node } if node == "Join" && source_node == "Ghost"
    ));
}

#[test]
fn repeated_edges_into_single_link_socket_all_decode() {
    let registry = create_effect_registry();
    let codec = EffectCodec::new(&registry);
    let record: GraphRecord = serde_json::from_value(json!({
        "name": "Repeated",
        "nodes": [
            {"type": "GeometryNodeMeshCube", "name": "A", "inputs": []},
            {"type": "GeometryNodeMeshGrid", "name": "B", "inputs": []},
            {"type": "GeometryNodeTransform", "name": "T", "inputs": [[0, "A", 0], [0, "B", 0], [1, "T", 0]]}
        ]
    }))
    .unwrap();

    let decoded = codec.decode_graph(&record).unwrap();
    let target = decoded.node_id("T").unwrap();
    assert_eq!(decoded.links_into(target, 0).count(), 2);
    assert_eq!(decoded.links_into(target, 1).count(), 1);

    let encoded = codec.encode_graph(&decoded);
    let edges: Vec<_> = encoded.nodes[2].inputs.iter().filter(|i| matches!(i, InputRecord::Edge(..))).collect();
    assert_eq!(
        edges,
        [
            &InputRecord::Edge(0, "A".to_string(), 0),
            &InputRecord::Edge(0, "B".to_string(), 0),
            &InputRecord::Edge(1, "T".to_string(), 0),
        ]
    );
}

#[test]
fn out_of_range_socket_indices_are_rejected() {
    let registry = create_effect_registry();
    let codec = EffectCodec::new(&registry);
    let bad_input: GraphRecord = serde_json::from_value(json!({
        "name": "Bad",
        "nodes": [
            {"type": "GeometryNodeMeshCube", "name": "Cube", "inputs": []},
            {"type": "GeometryNodeJoinGeometry", "name": "Join", "inputs": [[4, "Cube", 0]]}
        ]
    }))
    .unwrap();
    assert!(matches!(
        codec.decode_graph(&bad_input),
        Err(CodecError::InvalidSocketIndex { index: 4, count: 1, .. })
    ));

    let bad_output: GraphRecord = serde_json::from_value(json!({
        "name": "Bad",
        "nodes": [
            {"type": "GeometryNodeMeshCube", "name": "Cube", "inputs": []},
            {"type": "GeometryNodeJoinGeometry", "name": "Join", "inputs": [[0, "Cube", 7]]}
        ]
    }))
    .unwrap();
    assert!(matches!(
        codec.decode_graph(&bad_output),
        Err(CodecError::InvalidSocketIndex { index: 7, count: 2, .. })
    ));

    let bad_constant: GraphRecord = serde_json::from_value(json!({
        "name": "Bad",
        "nodes": [{"type": "ShaderNodeMath", "name": "Math", "inputs": [[3, 1.0]]}]
    }))
    .unwrap();
    assert!(matches!(
        codec.decode_graph(&bad_constant),
        Err(CodecError::InvalidSocketIndex { index: 3, count: 3, .. })
    ));
}

#[test]
fn short_aux_payloads_are_malformed() {
    let registry = create_effect_registry();
    let codec = EffectCodec::new(&registry);
    let ramp: GraphRecord = serde_json::from_value(json!({
        "name": "Bad",
        "nodes": [{
            "type": "ShaderNodeValToRGB",
            "name": "Color Ramp",
            "aux": {"kind": "color_ramp", "stops": [[0.0, [0.0, 0.0, 0.0, 1.0]]]}
        }]
    }))
    .unwrap();
    assert!(matches!(
        codec.decode_graph(&ramp),
        Err(CodecError::MalformedAux { count: 1, .. })
    ));

    let curve: GraphRecord = serde_json::from_value(json!({
        "name": "Bad",
        "nodes": [{
            "type": "ShaderNodeFloatCurve",
            "name": "Float Curve",
            "aux": {"kind": "curve_mapping", "points": []}
        }]
    }))
    .unwrap();
    assert!(matches!(
        codec.decode_graph(&curve),
        Err(CodecError::MalformedAux { count: 0, .. })
    ));
}

#[test]
fn failed_property_assignments_are_skipped() {
    let registry = create_effect_registry();
    let codec = EffectCodec::new(&registry);
    let record: GraphRecord = serde_json::from_value(json!({
        "name": "Drift",
        "nodes": [{
            "type": "ShaderNodeMath",
            "name": "Math",
            "properties": {
                "removed_in_newer_host": 3,
                "use_clamp": "not a bool",
                "dimensions": [10.0, 10.0],
                "operation": "POWER",
                "hide": true,
                "display_order": 4
            },
            "inputs": [[0, 2.0], [1, "wrong shape"]]
        }]
    }))
    .unwrap();

    let graph = codec.decode_graph(&record).unwrap();
    let math = graph.node_by_name("Math").unwrap();
    assert_eq!(math.attribute("operation"), Some(&AttrValue::Enum("POWER".into())));
    assert_eq!(math.attribute("use_clamp"), Some(&AttrValue::Bool(false)));
    assert!(math.hide);
    assert_eq!(math.display_order, 4);
    assert_eq!(math.input(0).unwrap().default_value, Some(AttrValue::Float(2.0)));
    assert_eq!(math.input(1).unwrap().default_value, Some(AttrValue::Float(0.5)));
}

#[test]
fn duplicate_node_names_are_rejected() {
    let registry = create_effect_registry();
    let codec = EffectCodec::new(&registry);
    let record: GraphRecord = serde_json::from_value(json!({
        "name": "Twins",
        "nodes": [
            {"type": "GeometryNodeMeshCube", "name": "Cube"},
            {"type": "GeometryNodeMeshGrid", "name": "Cube"}
        ]
    }))
    .unwrap();

    assert!(matches!(
        codec.decode_graph(&record),
        Err(CodecError::DuplicateNodeName { node, .. }) if node == "Cube"
    ));
}
