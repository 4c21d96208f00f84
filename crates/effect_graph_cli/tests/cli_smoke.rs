// SPDX-License-Identifier: MIT OR Apache-2.0
//! Runs the `effectc` binary against effect files on disk.

use effect_graph::{create_effect_registry, EffectCodec, EffectMeta, Graph};
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

fn effectc(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_effectc"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .unwrap()
}

fn arg(path: &Path) -> String {
    path.to_string_lossy().to_string()
}

/// Cube and grid joined into one geometry
fn write_scatter(dir: &Path) -> PathBuf {
    let registry = create_effect_registry();
    let codec = EffectCodec::new(&registry);

    let mut graph = Graph::new("Scatter");
    let cube = graph.add_node(registry.create_node("GeometryNodeMeshCube").unwrap());
    let grid = graph.add_node(registry.create_node("GeometryNodeMeshGrid").unwrap());
    let join = graph.add_node(registry.create_node("GeometryNodeJoinGeometry").unwrap());
    graph.connect(cube, 0, join, 0).unwrap();
    graph.connect(grid, 0, join, 0).unwrap();

    let mut meta = EffectMeta::new("Scatter");
    meta.author = "Studio".to_string();
    let path = dir.join("scatter.json");
    codec.write_effect(&path, &meta, &graph).unwrap();
    path
}

#[test]
fn cli_roundtrip_is_byte_stable() {
    let dir = tempfile::tempdir().unwrap();
    let source = write_scatter(dir.path());
    let first = dir.path().join("first.json");
    let second = dir.path().join("second.json");

    let out = effectc(&["roundtrip", "--in", &arg(&source), "--out", &arg(&first)]);
    assert!(out.status.success(), "{}", String::from_utf8_lossy(&out.stderr));
    let out = effectc(&["roundtrip", "--in", &arg(&first), "--out", &arg(&second)]);
    assert!(out.status.success(), "{}", String::from_utf8_lossy(&out.stderr));

    let original = std::fs::read(&source).unwrap();
    assert_eq!(std::fs::read(&first).unwrap(), original);
    assert_eq!(std::fs::read(&second).unwrap(), original);
}

#[test]
fn cli_inspect_meta_prints_only_metadata() {
    let dir = tempfile::tempdir().unwrap();
    let source = write_scatter(dir.path());

    let out = effectc(&["inspect", &arg(&source), "--select", "meta"]);
    assert!(out.status.success(), "{}", String::from_utf8_lossy(&out.stderr));
    let stdout = String::from_utf8(out.stdout).unwrap();
    assert!(stdout.contains("\"author\": \"Studio\""));
    assert!(!stdout.contains("3 nodes"));
}

#[test]
fn cli_inspect_full_summarizes_graph() {
    let dir = tempfile::tempdir().unwrap();
    let source = write_scatter(dir.path());

    let out = effectc(&["inspect", &arg(&source)]);
    assert!(out.status.success(), "{}", String::from_utf8_lossy(&out.stderr));
    let stdout = String::from_utf8(out.stdout).unwrap();
    assert!(stdout.contains("Scatter (3 nodes, 2 links, 0 inputs, 0 outputs)"));
    assert!(stdout.contains("- Join Geometry [GeometryNodeJoinGeometry]"));
}

#[test]
fn cli_inspect_rejects_unknown_selector() {
    let dir = tempfile::tempdir().unwrap();
    let source = write_scatter(dir.path());

    let out = effectc(&["inspect", &arg(&source), "--select", "nodes"]);
    assert!(!out.status.success());
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("Unsupported selector: nodes"), "{stderr}");
}

#[test]
fn cli_types_lists_builtin_catalog() {
    let out = effectc(&["types"]);
    assert!(out.status.success());
    let stdout = String::from_utf8(out.stdout).unwrap();
    assert!(stdout.contains("GeometryNodeMeshCube"));
    assert!(stdout.contains("ShaderNodeValToRGB"));
}
