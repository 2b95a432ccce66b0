//! Validation of a single `parent child` line.

/// Errors for a line that cannot be turned into a relation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LineError {
    /// The line does not split into at least two fields.
    #[error("a line must have two elements separated by a single space: '{line}'")]
    Malformed { line: String },

    /// The parent or child field does not start with an ASCII letter.
    #[error("elements of parent or child must start with an ASCII letter: '{line}'")]
    InvalidIdentifier { line: String },
}

impl LineError {
    /// Returns the offending line verbatim.
    pub fn line(&self) -> &str {
        match self {
            LineError::Malformed { line } | LineError::InvalidIdentifier { line } => line,
        }
    }
}

/// Returns true if `field` starts with an ASCII letter.
///
/// Only the first character is checked, so version suffixes, slashes and
/// `@` separators are all accepted after it.
pub fn is_identifier(field: &str) -> bool {
    field
        .chars()
        .next()
        .is_some_and(|c| c.is_ascii_alphabetic())
}

/// Extracts the `(parent, child)` pair from one line.
///
/// The line is split on single spaces and the first two fields are used;
/// anything after them is ignored. Splitting is positional, so a leading
/// space or a double space yields an empty field that fails validation.
///
/// # Example
///
/// ```
/// use modgrapher::parser::line::{parse_line, LineError};
///
/// assert_eq!(parse_line("app lib@v1.2.0"), Ok(("app", "lib@v1.2.0")));
/// assert!(matches!(parse_line("app"), Err(LineError::Malformed { .. })));
/// ```
pub fn parse_line(line: &str) -> Result<(&str, &str), LineError> {
    let mut fields = line.split(' ');
    let (Some(parent), Some(child)) = (fields.next(), fields.next()) else {
        return Err(LineError::Malformed {
            line: line.to_string(),
        });
    };

    if !is_identifier(parent) || !is_identifier(child) {
        return Err(LineError::InvalidIdentifier {
            line: line.to_string(),
        });
    }

    Ok((parent, child))
}
