//! Presentation of a parsed module graph.
//!
//! This module provides exporters for writing a [`ModuleGraph`] in
//! various formats: plain text, JSON, and Graphviz DOT.

pub mod dot;
pub mod json;
pub mod text;

use crate::graph::ModuleGraph;
use std::io::{self, Write};

/// Export format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExportFormat {
    /// Human-readable listing
    #[default]
    Text,
    /// JSON format - machine-readable, full data
    Json,
    /// Graphviz DOT - for external rendering
    Dot,
}

impl std::str::FromStr for ExportFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" | "txt" => Ok(ExportFormat::Text),
            "json" => Ok(ExportFormat::Json),
            "dot" | "graphviz" => Ok(ExportFormat::Dot),
            _ => Err(format!(
                "Unknown export format: '{}'. Valid formats: text, json, dot",
                s
            )),
        }
    }
}

impl std::fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ExportFormat::Text => write!(f, "text"),
            ExportFormat::Json => write!(f, "json"),
            ExportFormat::Dot => write!(f, "dot"),
        }
    }
}

/// Trait for exporters.
pub trait Exporter {
    /// Export the graph to the given writer.
    fn export<W: Write>(&self, graph: &ModuleGraph, writer: &mut W) -> io::Result<()>;
}

/// Export the graph in the specified format.
pub fn export<W: Write>(format: ExportFormat, graph: &ModuleGraph, writer: &mut W) -> io::Result<()> {
    match format {
        ExportFormat::Text => text::TextExporter.export(graph, writer),
        ExportFormat::Json => json::JsonExporter.export(graph, writer),
        ExportFormat::Dot => dot::DotExporter.export(graph, writer),
    }
}

/// Export the graph to a string.
pub fn export_to_string(format: ExportFormat, graph: &ModuleGraph) -> io::Result<String> {
    let mut buffer = Vec::new();
    export(format, graph, &mut buffer)?;
    String::from_utf8(buffer).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse_str;

    #[test]
    fn test_export_format_from_str() {
        assert_eq!("text".parse::<ExportFormat>().unwrap(), ExportFormat::Text);
        assert_eq!("JSON".parse::<ExportFormat>().unwrap(), ExportFormat::Json);
        assert_eq!("dot".parse::<ExportFormat>().unwrap(), ExportFormat::Dot);
        assert_eq!(
            "graphviz".parse::<ExportFormat>().unwrap(),
            ExportFormat::Dot
        );
        assert!("csv".parse::<ExportFormat>().is_err());
    }

    #[test]
    fn test_export_format_display() {
        assert_eq!(format!("{}", ExportFormat::Text), "text");
        assert_eq!(format!("{}", ExportFormat::Json), "json");
        assert_eq!(format!("{}", ExportFormat::Dot), "dot");
    }

    #[test]
    fn test_export_to_string_every_format() {
        let graph = parse_str("A B\n").unwrap();

        for format in [ExportFormat::Text, ExportFormat::Json, ExportFormat::Dot] {
            let output = export_to_string(format, &graph).unwrap();
            assert!(output.contains('A'), "{format} output missing node A");
            assert!(output.contains('B'), "{format} output missing node B");
        }
    }
}
