//! Plain text export implementation.
//!
//! Lists every module with its parents and children, followed by the
//! edges in the order they were read.

use super::Exporter;
use crate::graph::ModuleGraph;
use std::collections::BTreeSet;
use std::io::{self, Write};

/// Text exporter implementation.
pub struct TextExporter;

impl TextExporter {
    fn join_ids(ids: &BTreeSet<String>) -> String {
        if ids.is_empty() {
            "-".to_string()
        } else {
            ids.iter().map(String::as_str).collect::<Vec<_>>().join(", ")
        }
    }
}

impl Exporter for TextExporter {
    fn export<W: Write>(&self, graph: &ModuleGraph, writer: &mut W) -> io::Result<()> {
        writeln!(
            writer,
            "Module graph: {} nodes, {} edges",
            graph.node_count(),
            graph.edge_count()
        )?;

        if graph.is_empty() {
            return Ok(());
        }

        writeln!(writer)?;
        writeln!(writer, "Nodes:")?;
        for node in graph.nodes() {
            writeln!(writer, "  {}", node.label)?;
            writeln!(writer, "    parents:  {}", Self::join_ids(&node.parent_ids))?;
            writeln!(writer, "    children: {}", Self::join_ids(&node.child_ids))?;
        }

        writeln!(writer)?;
        writeln!(writer, "Edges:")?;
        for edge in graph.edges() {
            writeln!(writer, "  {} -> {}", edge.from, edge.to)?;
        }

        Ok(())
    }
}
