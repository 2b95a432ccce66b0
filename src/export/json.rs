//! JSON export implementation.
//!
//! Exports the module graph in JSON format for machine-readable output.

use super::Exporter;
use crate::graph::{ModuleEdge, ModuleGraph, ModuleNode};
use serde::Serialize;
use std::io::{self, Write};

/// JSON exporter implementation.
pub struct JsonExporter;

/// Summary statistics for JSON output.
#[derive(Serialize)]
struct JsonSummary {
    nodes: usize,
    edges: usize,
    roots: Vec<String>,
}

/// Root JSON export structure.
#[derive(Serialize)]
struct JsonExport<'a> {
    summary: JsonSummary,
    nodes: Vec<&'a ModuleNode>,
    edges: &'a [ModuleEdge],
}

impl Exporter for JsonExporter {
    fn export<W: Write>(&self, graph: &ModuleGraph, writer: &mut W) -> io::Result<()> {
        let export = JsonExport {
            summary: JsonSummary {
                nodes: graph.node_count(),
                edges: graph.edge_count(),
                roots: graph.roots().iter().map(|n| n.id.clone()).collect(),
            },
            nodes: graph.nodes().collect(),
            edges: graph.edges(),
        };

        let json = serde_json::to_string_pretty(&export)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;

        writeln!(writer, "{}", json)
    }
}
