//! Parser module for modgrapher.
//!
//! Turns the line-oriented output of a module dependency lister
//! (`go mod graph`, one `<parent> <child>` pair per line) into a
//! [`ModuleGraph`](crate::graph::ModuleGraph).
//!
//! # Example
//!
//! ```
//! use modgrapher::parser::{parse_str, ParseError};
//!
//! let graph = parse_str("example.com/app golang.org/x/text@v0.3.7\n").unwrap();
//! assert_eq!(graph.node_count(), 2);
//!
//! let err = parse_str("example.com/app\n").unwrap_err();
//! assert!(matches!(err, ParseError::InvalidLine { line_number: 1, .. }));
//! ```

pub mod line;
pub mod mod_graph;

// Re-export commonly used types for convenience
pub use line::{is_identifier, parse_line, LineError};
pub use mod_graph::{parse_file, parse_reader, parse_str, ParseError, ParseResult};
