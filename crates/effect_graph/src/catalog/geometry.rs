// SPDX-License-Identifier: MIT OR Apache-2.0
//! Geometry node types: boundaries, groups, mesh primitives and operations.

use super::NodeRegistry;
use crate::node::{NodeCategory, NodeKind, NodeType};
use crate::socket::{InputSocket, OutputSocket, SocketType};
use crate::value::AttrValue;

/// Register the geometry node types
pub fn register(registry: &mut NodeRegistry) {
    // ========================================================================
    // Graph boundaries and groups
    // ========================================================================

    registry.register(
        NodeType::new("NodeGroupInput", "Group Input", NodeCategory::Input)
            .describe("Exposes the graph inputs")
            .kind(NodeKind::GroupInput),
    );

    registry.register(
        NodeType::new("NodeGroupOutput", "Group Output", NodeCategory::Output)
            .describe("Collects the graph outputs")
            .kind(NodeKind::GroupOutput)
            .attribute("is_active_output", AttrValue::Bool(true)),
    );

    registry.register(
        NodeType::new("GeometryNodeGroup", "Group", NodeCategory::Group)
            .describe("Instance of a nested node graph")
            .kind(NodeKind::Group),
    );

    // ========================================================================
    // Mesh primitives
    // ========================================================================

    registry.register(
        NodeType::new("GeometryNodeMeshCube", "Cube", NodeCategory::Mesh)
            .describe("Box mesh")
            .input(InputSocket::new("Size", SocketType::Vector).with_default(AttrValue::Vector(vec![1.0, 1.0, 1.0])))
            .input(InputSocket::new("Vertices X", SocketType::Int).with_default(AttrValue::Int(2)))
            .input(InputSocket::new("Vertices Y", SocketType::Int).with_default(AttrValue::Int(2)))
            .input(InputSocket::new("Vertices Z", SocketType::Int).with_default(AttrValue::Int(2)))
            .output(OutputSocket::new("Mesh", SocketType::Geometry))
            .output(OutputSocket::new("UV Map", SocketType::Vector)),
    );

    registry.register(
        NodeType::new("GeometryNodeMeshGrid", "Grid", NodeCategory::Mesh)
            .describe("Planar grid mesh")
            .input(InputSocket::new("Size X", SocketType::Float).with_default(AttrValue::Float(1.0)))
            .input(InputSocket::new("Size Y", SocketType::Float).with_default(AttrValue::Float(1.0)))
            .input(InputSocket::new("Vertices X", SocketType::Int).with_default(AttrValue::Int(3)))
            .input(InputSocket::new("Vertices Y", SocketType::Int).with_default(AttrValue::Int(3)))
            .output(OutputSocket::new("Mesh", SocketType::Geometry))
            .output(OutputSocket::new("UV Map", SocketType::Vector)),
    );

    registry.register(
        NodeType::new("GeometryNodeMeshLine", "Mesh Line", NodeCategory::Mesh)
            .describe("Line of vertices")
            .attribute("mode", AttrValue::Enum("OFFSET".into()))
            .attribute("count_mode", AttrValue::Enum("TOTAL".into()))
            .input(InputSocket::new("Count", SocketType::Int).with_default(AttrValue::Int(10)))
            .input(InputSocket::new("Start Location", SocketType::Vector))
            .input(InputSocket::new("Offset", SocketType::Vector).with_default(AttrValue::Vector(vec![0.0, 0.0, 1.0])))
            .output(OutputSocket::new("Mesh", SocketType::Geometry)),
    );

    // ========================================================================
    // Geometry operations
    // ========================================================================

    registry.register(
        NodeType::new("GeometryNodeJoinGeometry", "Join Geometry", NodeCategory::Geometry)
            .describe("Merge several geometries into one")
            .input(InputSocket::new("Geometry", SocketType::Geometry).multi())
            .output(OutputSocket::new("Geometry", SocketType::Geometry)),
    );

    registry.register(
        NodeType::new("GeometryNodeTransform", "Transform Geometry", NodeCategory::Geometry)
            .describe("Translate, rotate and scale geometry")
            .input(InputSocket::new("Geometry", SocketType::Geometry))
            .input(InputSocket::new("Translation", SocketType::Vector))
            .input(InputSocket::new("Rotation", SocketType::Vector))
            .input(InputSocket::new("Scale", SocketType::Vector).with_default(AttrValue::Vector(vec![1.0, 1.0, 1.0])))
            .output(OutputSocket::new("Geometry", SocketType::Geometry)),
    );

    registry.register(
        NodeType::new("GeometryNodeSetPosition", "Set Position", NodeCategory::Geometry)
            .describe("Move points of a geometry")
            .input(InputSocket::new("Geometry", SocketType::Geometry))
            .input(InputSocket::new("Selection", SocketType::Bool).with_default(AttrValue::Bool(true)))
            .input(InputSocket::new("Position", SocketType::Vector))
            .input(InputSocket::new("Offset", SocketType::Vector))
            .output(OutputSocket::new("Geometry", SocketType::Geometry)),
    );

    registry.register(
        NodeType::new("GeometryNodeSetMaterial", "Set Material", NodeCategory::Geometry)
            .describe("Assign a material to faces")
            .input(InputSocket::new("Geometry", SocketType::Geometry))
            .input(InputSocket::new("Selection", SocketType::Bool).with_default(AttrValue::Bool(true)))
            .input(InputSocket::new("Material", SocketType::Material))
            .output(OutputSocket::new("Geometry", SocketType::Geometry)),
    );

    registry.register(
        NodeType::new("GeometryNodeDistributePointsOnFaces", "Distribute Points on Faces", NodeCategory::Geometry)
            .describe("Scatter points over mesh faces")
            .attribute("distribute_method", AttrValue::Enum("RANDOM".into()))
            .input(InputSocket::new("Mesh", SocketType::Geometry))
            .input(InputSocket::new("Selection", SocketType::Bool).with_default(AttrValue::Bool(true)))
            .input(InputSocket::new("Density", SocketType::Float).with_default(AttrValue::Float(10.0)))
            .input(InputSocket::new("Seed", SocketType::Int))
            .output(OutputSocket::new("Points", SocketType::Geometry))
            .output(OutputSocket::new("Normal", SocketType::Vector))
            .output(OutputSocket::new("Rotation", SocketType::Vector)),
    );

    registry.register(
        NodeType::new("GeometryNodeInstanceOnPoints", "Instance on Points", NodeCategory::Geometry)
            .describe("Place an instance on every point")
            .input(InputSocket::new("Points", SocketType::Geometry))
            .input(InputSocket::new("Selection", SocketType::Bool).with_default(AttrValue::Bool(true)))
            .input(InputSocket::new("Instance", SocketType::Geometry))
            .input(InputSocket::new("Rotation", SocketType::Vector))
            .input(InputSocket::new("Scale", SocketType::Vector).with_default(AttrValue::Vector(vec![1.0, 1.0, 1.0])))
            .output(OutputSocket::new("Instances", SocketType::Geometry)),
    );

    registry.register(
        NodeType::new("GeometryNodeRealizeInstances", "Realize Instances", NodeCategory::Geometry)
            .describe("Turn instances into real geometry")
            .input(InputSocket::new("Geometry", SocketType::Geometry))
            .output(OutputSocket::new("Geometry", SocketType::Geometry)),
    );

    registry.register(
        NodeType::new("GeometryNodeObjectInfo", "Object Info", NodeCategory::Input)
            .describe("Geometry and transform of a scene object")
            .attribute("transform_space", AttrValue::Enum("ORIGINAL".into()))
            .input(InputSocket::new("Object", SocketType::Object))
            .input(InputSocket::new("As Instance", SocketType::Bool))
            .output(OutputSocket::new("Location", SocketType::Vector))
            .output(OutputSocket::new("Rotation", SocketType::Vector))
            .output(OutputSocket::new("Scale", SocketType::Vector))
            .output(OutputSocket::new("Geometry", SocketType::Geometry)),
    );

    registry.register(
        NodeType::new("GeometryNodeInputPosition", "Position", NodeCategory::Input)
            .describe("Position of the evaluated element")
            .output(OutputSocket::new("Position", SocketType::Vector)),
    );
}
