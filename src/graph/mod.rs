//! Graph module for module dependency relationships.
//!
//! This module provides the [`ModuleGraph`] struct holding every module seen
//! in the input together with the ordered list of parent/child relations.
//!
//! # Example
//!
//! ```rust
//! use modgrapher::parser::parse_str;
//!
//! let graph = parse_str("example.com/app golang.org/x/text@v0.3.7\n").unwrap();
//!
//! assert_eq!(graph.node_count(), 2);
//! assert_eq!(graph.edge_count(), 1);
//! ```

mod module_graph;

pub use module_graph::{ModuleEdge, ModuleGraph, ModuleNode};
