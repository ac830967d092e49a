//! Error types for the CAT-MIP linter.
//!
//! Only conditions that stop a lint run are errors. Problems found inside
//! individual term records are reported as [`Finding`](crate::core::Finding)s
//! and never surface through this type.

use std::path::PathBuf;
use thiserror::Error;

/// The main error type for the linter.
#[derive(Error, Debug)]
pub enum LintError {
    /// The document is not syntactically valid JSON.
    #[error("JSON parsing error at line {line}, column {column}: {message}")]
    Parse {
        /// 1-based line of the offending character
        line: usize,
        /// 1-based column of the offending character
        column: usize,
        /// Parser message without position suffix
        message: String,
    },

    /// The document parsed, but its root is not an array of records.
    #[error("Root element must be an array of term records, found {found}")]
    NotACollection { found: &'static str },

    /// An element of the root array is not an object.
    #[error("Record at index {index} must be an object, found {found}")]
    InvalidRecord { index: usize, found: &'static str },

    /// Error reading the input document.
    #[error("Failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Error rendering a report.
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Invalid linter configuration.
    #[error("Configuration error: {0}")]
    Configuration(String),
}

/// A type alias for `Result<T, LintError>`.
pub type Result<T> = std::result::Result<T, LintError>;

impl LintError {
    /// Creates an I/O error for the given path.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Returns true if the document could not be parsed or has the wrong shape.
    pub fn is_parse_error(&self) -> bool {
        matches!(
            self,
            LintError::Parse { .. } | LintError::NotACollection { .. } | LintError::InvalidRecord { .. }
        )
    }

    /// Returns the `(line, column)` position for syntax errors.
    pub fn position(&self) -> Option<(usize, usize)> {
        match self {
            LintError::Parse { line, column, .. } => Some((*line, *column)),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for LintError {
    fn from(err: serde_json::Error) -> Self {
        // serde_json appends " at line X column Y" to Display; keep the bare reason.
        let full = err.to_string();
        let message = match full.rfind(" at line ") {
            Some(idx) => full[..idx].to_string(),
            None => full,
        };
        LintError::Parse {
            line: err.line(),
            // serde_json reports column 0 when the error sits on a line break.
            column: err.column().max(1),
            message,
        }
    }
}

impl From<std::fmt::Error> for LintError {
    fn from(err: std::fmt::Error) -> Self {
        LintError::Serialization(format!("Failed to write report: {err}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn test_parse_column_is_one_based() {
        let err = serde_json::from_str::<serde_json::Value>("[\n  {\"id\": \"cat-001}\n]")
            .unwrap_err();
        let err = LintError::from(err);

        let (_, column) = err.position().unwrap();
        assert!(column >= 1);
        assert!(!err.to_string().contains("column 0"));
    }

    #[test]
    fn test_parse_error_from_serde() {
        let err = serde_json::from_str::<serde_json::Value>("[\n  {\"id\": }\n]").unwrap_err();
        let err = LintError::from(err);

        assert!(err.is_parse_error());
        let (line, column) = err.position().unwrap();
        assert_eq!(line, 2);
        assert!(column > 0);
        let rendered = err.to_string();
        assert!(rendered.starts_with("JSON parsing error at line 2, column "));
        assert_eq!(rendered.matches("line").count(), 1);
    }

    #[test]
    fn test_not_a_collection() {
        let err = LintError::NotACollection { found: "object" };
        assert_eq!(
            err.to_string(),
            "Root element must be an array of term records, found object"
        );
        assert!(err.is_parse_error());
        assert!(err.position().is_none());
    }

    #[test]
    fn test_io_error_preserves_source() {
        let source = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err = LintError::io("terms.json", source);

        assert!(!err.is_parse_error());
        assert!(err.source().is_some());
        assert!(err.to_string().contains("terms.json"));
    }
}
