//! Builder for [`ModuleGraph`] from `go mod graph` style text.
//!
//! Input is read line by line; the first invalid line aborts the whole parse
//! and no partial graph is returned.

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};

use log::{debug, trace, warn};

use super::line::{parse_line, LineError};
use crate::graph::ModuleGraph;

/// Errors that can occur while building a module graph.
#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    /// A line failed validation.
    #[error("input content contains an invalid line at line {line_number}: {source}")]
    InvalidLine {
        /// 1-based position of the line in the input
        line_number: usize,
        #[source]
        source: LineError,
    },

    /// The input stream could not be read.
    #[error("failed to read the content: {0}")]
    Read(#[from] io::Error),

    /// The input file could not be opened.
    #[error("failed to open {}: {source}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Result type alias for parser operations.
pub type ParseResult<T> = Result<T, ParseError>;

/// Builds a module graph from a buffered reader.
///
/// `\n` and `\r\n` terminators are stripped before each line is validated.
/// A read failure (including input that is not valid UTF-8) yields
/// [`ParseError::Read`]. The reader is borrowed, never closed.
///
/// # Example
///
/// ```
/// use modgrapher::parser::parse_reader;
///
/// let input = "A B\nA C\n";
/// let graph = parse_reader(input.as_bytes()).unwrap();
///
/// assert_eq!(graph.node_count(), 3);
/// assert_eq!(graph.edges()[1].to, "C");
/// ```
pub fn parse_reader<R: BufRead>(reader: R) -> ParseResult<ModuleGraph> {
    let mut graph = ModuleGraph::new();

    for (index, line) in reader.lines().enumerate() {
        let line = line.map_err(|e| {
            warn!("read failed after {} lines: {}", index, e);
            ParseError::Read(e)
        })?;

        let (parent, child) = parse_line(&line).map_err(|source| {
            debug!("rejecting line {}: {}", index + 1, source);
            ParseError::InvalidLine {
                line_number: index + 1,
                source,
            }
        })?;

        trace!("{} -> {}", parent, child);
        graph.insert_relation(parent, child);
    }

    debug!(
        "parsed {} lines into {} nodes",
        graph.edge_count(),
        graph.node_count()
    );

    Ok(graph)
}

/// Builds a module graph from a string.
///
/// # Example
///
/// ```
/// use modgrapher::parser::parse_str;
///
/// let graph = parse_str("").unwrap();
/// assert!(graph.is_empty());
/// ```
pub fn parse_str(content: &str) -> ParseResult<ModuleGraph> {
    parse_reader(content.as_bytes())
}

/// Builds a module graph from a file.
///
/// The file is closed when this function returns, on success or failure.
///
/// ```ignore
/// use std::path::Path;
/// use modgrapher::parser::parse_file;
///
/// let graph = parse_file(Path::new("modgraph.txt")).unwrap();
/// println!("{} modules", graph.node_count());
/// ```
pub fn parse_file(path: &Path) -> ParseResult<ModuleGraph> {
    let file = File::open(path).map_err(|source| ParseError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    parse_reader(BufReader::new(file))
}
