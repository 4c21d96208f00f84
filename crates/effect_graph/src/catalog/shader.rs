// SPDX-License-Identifier: MIT OR Apache-2.0
//! Field and shader-style node types: math, vectors, color ramps, curves and textures.

use super::NodeRegistry;
use crate::node::{NodeCategory, NodeType};
use crate::payload::{AuxData, ColorRamp, CurveMapping};
use crate::socket::{InputSocket, OutputSocket, SocketType};
use crate::value::AttrValue;

/// Register the field and shader node types
pub fn register(registry: &mut NodeRegistry) {
    // ========================================================================
    // Math
    // ========================================================================

    registry.register(
        NodeType::new("ShaderNodeMath", "Math", NodeCategory::Math)
            .describe("Scalar math operation")
            .attribute("operation", AttrValue::Enum("ADD".into()))
            .attribute("use_clamp", AttrValue::Bool(false))
            .input(InputSocket::new("Value", SocketType::Float).with_default(AttrValue::Float(0.5)))
            .input(InputSocket::new("Value", SocketType::Float).with_default(AttrValue::Float(0.5)))
            .input(InputSocket::new("Value", SocketType::Float).with_default(AttrValue::Float(0.5)))
            .output(OutputSocket::new("Value", SocketType::Float)),
    );

    registry.register(
        NodeType::new("ShaderNodeVectorMath", "Vector Math", NodeCategory::Math)
            .describe("Vector math operation")
            .attribute("operation", AttrValue::Enum("ADD".into()))
            .input(InputSocket::new("Vector", SocketType::Vector))
            .input(InputSocket::new("Vector", SocketType::Vector))
            .input(InputSocket::new("Scale", SocketType::Float).with_default(AttrValue::Float(1.0)))
            .output(OutputSocket::new("Vector", SocketType::Vector))
            .output(OutputSocket::new("Value", SocketType::Float)),
    );

    registry.register(
        NodeType::new("ShaderNodeCombineXYZ", "Combine XYZ", NodeCategory::Math)
            .describe("Build a vector from components")
            .input(InputSocket::new("X", SocketType::Float))
            .input(InputSocket::new("Y", SocketType::Float))
            .input(InputSocket::new("Z", SocketType::Float))
            .output(OutputSocket::new("Vector", SocketType::Vector)),
    );

    registry.register(
        NodeType::new("FunctionNodeRandomValue", "Random Value", NodeCategory::Utility)
            .describe("Pseudo-random value per element")
            .attribute("data_type", AttrValue::Enum("FLOAT".into()))
            .input(InputSocket::new("Min", SocketType::Float))
            .input(InputSocket::new("Max", SocketType::Float).with_default(AttrValue::Float(1.0)))
            .input(InputSocket::new("ID", SocketType::Int))
            .input(InputSocket::new("Seed", SocketType::Int))
            .output(OutputSocket::new("Value", SocketType::Float)),
    );

    // ========================================================================
    // Color and curves
    // ========================================================================

    registry.register(
        NodeType::new("ShaderNodeValToRGB", "Color Ramp", NodeCategory::Color)
            .describe("Map a factor through a gradient")
            .input(InputSocket::new("Fac", SocketType::Float).with_default(AttrValue::Float(0.5)))
            .output(OutputSocket::new("Color", SocketType::Color))
            .output(OutputSocket::new("Alpha", SocketType::Float))
            .payload(AuxData::ColorRamp(ColorRamp::new())),
    );

    registry.register(
        NodeType::new("ShaderNodeFloatCurve", "Float Curve", NodeCategory::Color)
            .describe("Remap a value through a curve")
            .input(InputSocket::new("Factor", SocketType::Float).with_default(AttrValue::Float(1.0)))
            .input(InputSocket::new("Value", SocketType::Float).with_default(AttrValue::Float(1.0)))
            .output(OutputSocket::new("Value", SocketType::Float))
            .payload(AuxData::CurveMapping(CurveMapping::new())),
    );

    // ========================================================================
    // Textures
    // ========================================================================

    registry.register(
        NodeType::new("ShaderNodeTexNoise", "Noise Texture", NodeCategory::Texture)
            .describe("Procedural noise")
            .attribute("noise_dimensions", AttrValue::Enum("3D".into()))
            .attribute("normalize", AttrValue::Bool(true))
            .input(InputSocket::new("Vector", SocketType::Vector))
            .input(InputSocket::new("Scale", SocketType::Float).with_default(AttrValue::Float(5.0)))
            .input(InputSocket::new("Detail", SocketType::Float).with_default(AttrValue::Float(2.0)))
            .input(InputSocket::new("Roughness", SocketType::Float).with_default(AttrValue::Float(0.5)))
            .output(OutputSocket::new("Fac", SocketType::Float))
            .output(OutputSocket::new("Color", SocketType::Color)),
    );

    registry.register(
        NodeType::new("GeometryNodeImageTexture", "Image Texture", NodeCategory::Texture)
            .describe("Sample an image")
            .attribute("interpolation", AttrValue::Enum("Linear".into()))
            .attribute("extension", AttrValue::Enum("REPEAT".into()))
            .attribute("image_user", AttrValue::Opaque)
            .input(InputSocket::new("Image", SocketType::Image))
            .input(InputSocket::new("Vector", SocketType::Vector))
            .input(InputSocket::new("Frame", SocketType::Int))
            .output(OutputSocket::new("Color", SocketType::Color))
            .output(OutputSocket::new("Alpha", SocketType::Float)),
    );

    registry.register(
        NodeType::new("GeometryNodeInputMaterial", "Material", NodeCategory::Input)
            .describe("Reference to a material datablock")
            .attribute("material", AttrValue::Reference(None))
            .output(OutputSocket::new("Material", SocketType::Material)),
    );
}
