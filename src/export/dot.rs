//! Graphviz DOT export implementation.

use super::Exporter;
use crate::graph::ModuleGraph;
use petgraph::dot::{Config, Dot};
use std::io::{self, Write};

/// DOT exporter implementation.
pub struct DotExporter;

impl Exporter for DotExporter {
    fn export<W: Write>(&self, graph: &ModuleGraph, writer: &mut W) -> io::Result<()> {
        // Dot needs displayable edge weights even when labels are off.
        let digraph = graph.to_digraph().map(|_, &id| id, |_, _| "");
        let dot = Dot::with_config(&digraph, &[Config::EdgeNoLabel]);

        write!(writer, "{}", dot)
    }
}
