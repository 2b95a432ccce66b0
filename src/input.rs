//! Input source selection.
//!
//! The graph is read either from standard input or from a named file,
//! typically the saved output of `go mod graph`.

use std::fmt;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};

use crate::graph::ModuleGraph;
use crate::parser::{parse_reader, ParseError, ParseResult};

/// Where the `parent child` lines come from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    /// Standard input
    Stdin,
    /// A file on disk
    File(PathBuf),
}

impl InputSource {
    /// Selects the source from an optional path argument.
    ///
    /// No argument or `-` means standard input.
    ///
    /// # Example
    ///
    /// ```
    /// use std::path::Path;
    /// use modgrapher::input::InputSource;
    ///
    /// assert_eq!(InputSource::from_arg(None), InputSource::Stdin);
    /// assert_eq!(InputSource::from_arg(Some(Path::new("-"))), InputSource::Stdin);
    /// assert!(matches!(InputSource::from_arg(Some(Path::new("graph.txt"))), InputSource::File(_)));
    /// ```
    pub fn from_arg(arg: Option<&Path>) -> Self {
        match arg {
            None => InputSource::Stdin,
            Some(path) if path.as_os_str() == "-" => InputSource::Stdin,
            Some(path) => InputSource::File(path.to_path_buf()),
        }
    }

    /// Opens the source for buffered reading.
    pub fn open(&self) -> ParseResult<Box<dyn BufRead>> {
        match self {
            InputSource::Stdin => Ok(Box::new(io::stdin().lock())),
            InputSource::File(path) => {
                let file = File::open(path).map_err(|source| ParseError::Open {
                    path: path.clone(),
                    source,
                })?;
                Ok(Box::new(BufReader::new(file)))
            }
        }
    }

    /// Opens the source and builds the module graph from it.
    ///
    /// The underlying handle is dropped before this returns.
    pub fn read_graph(&self) -> ParseResult<ModuleGraph> {
        log::debug!("reading module graph from {}", self);
        let reader = self.open()?;
        parse_reader(reader)
    }
}

impl fmt::Display for InputSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputSource::Stdin => write!(f, "<stdin>"),
            InputSource::File(path) => write!(f, "{}", path.display()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_arg() {
        assert_eq!(InputSource::from_arg(None), InputSource::Stdin);
        assert_eq!(
            InputSource::from_arg(Some(Path::new("-"))),
            InputSource::Stdin
        );
        assert_eq!(
            InputSource::from_arg(Some(Path::new("graph.txt"))),
            InputSource::File(PathBuf::from("graph.txt"))
        );
    }

    #[test]
    fn test_display() {
        assert_eq!(InputSource::Stdin.to_string(), "<stdin>");
        assert_eq!(
            InputSource::File(PathBuf::from("graph.txt")).to_string(),
            "graph.txt"
        );
    }

    #[test]
    fn test_open_missing_file() {
        let source = InputSource::File(PathBuf::from("/nonexistent/graph.txt"));
        assert!(matches!(source.open(), Err(ParseError::Open { .. })));
    }
}
