//! modgrapher - module dependency graph builder
//!
//! This crate reads the output of a module dependency lister such as
//! `go mod graph` (one `<parent> <child>` pair per line) and builds an
//! in-memory graph of parent/child relationships between modules.

pub mod export;
pub mod graph;
pub mod input;
pub mod parser;
