// SPDX-License-Identifier: MIT OR Apache-2.0
//! `effectc` - inspect and round-trip effect graph files.

use anyhow::Context as _;
use clap::{Parser, Subcommand};
use effect_graph::{create_effect_registry, CodecConfig, Decoded, EffectCodec, Graph, NodeRegistry, Selector};
use std::path::{Path, PathBuf};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[derive(Parser, Debug)]
#[command(name = "effectc", version)]
struct Cli {
    /// Codec settings file (RON).
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print a summary of an effect file.
    Inspect {
        /// Effect JSON file.
        file: PathBuf,
        /// Part to decode: full, meta or graph.
        #[arg(long, default_value = "full")]
        select: String,
    },
    /// Decode an effect file and write it back out.
    Roundtrip {
        /// Input effect JSON.
        #[arg(long = "in")]
        in_path: PathBuf,
        /// Output effect JSON.
        #[arg(long)]
        out: PathBuf,
    },
    /// List the node types the built-in catalog can construct.
    Types,
}

fn main() {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("effect_graph=info,effectc=info"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    if let Err(e) = run(Cli::parse()) {
        tracing::error!("{e:#}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let config = match &cli.config {
        Some(path) => CodecConfig::load(path).with_context(|| format!("load config {}", path.display()))?,
        None => CodecConfig::default(),
    };
    let registry = create_effect_registry();
    let codec = EffectCodec::new(&registry).with_config(config);

    match cli.cmd {
        Command::Inspect { file, select } => {
            let selector: Selector = select.parse()?;
            let decoded = codec
                .read_effect(&file, selector)
                .with_context(|| format!("read {}", file.display()))?;
            print_summary(&decoded)?;
        }
        Command::Roundtrip { in_path, out } => roundtrip(&codec, &in_path, &out)?,
        Command::Types => print_types(&registry),
    }
    Ok(())
}

fn roundtrip(codec: &EffectCodec<'_, NodeRegistry>, in_path: &Path, out: &Path) -> anyhow::Result<()> {
    let effect = codec
        .read_effect(in_path, Selector::Full)
        .with_context(|| format!("read {}", in_path.display()))?
        .into_effect()
        .context("effect decoded without metadata")?;
    codec
        .write_effect(out, &effect.meta, &effect.graph)
        .with_context(|| format!("write {}", out.display()))?;
    Ok(())
}

fn print_summary(decoded: &Decoded) -> anyhow::Result<()> {
    if let Some(meta) = decoded.meta() {
        println!("{}", serde_json::to_string_pretty(meta)?);
    }
    if let Some(graph) = decoded.graph() {
        print_graph(graph, 0);
    }
    Ok(())
}

fn print_graph(graph: &Graph, depth: usize) {
    let pad = "  ".repeat(depth);
    println!(
        "{pad}{} ({} nodes, {} links, {} inputs, {} outputs)",
        graph.name,
        graph.node_count(),
        graph.link_count(),
        graph.inputs().len(),
        graph.outputs().len()
    );
    for node in graph.nodes() {
        println!("{pad}  - {} [{}]", node.name(), node.node_type);
        if let Some(nested) = node.group() {
            print_graph(nested, depth + 2);
        }
    }
}

fn print_types(registry: &NodeRegistry) {
    for node_type in registry.types() {
        println!("{:<40} {:?}  {}", node_type.id, node_type.category, node_type.description);
    }
}
