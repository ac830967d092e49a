//! Finding severity levels.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The severity of a lint finding.
///
/// Levels are ordered by severity: Error > Warning > Info. Only error-level
/// findings fail a run; warnings and info never change the exit status.
///
/// # Usage Guidelines
///
/// - **Error**: the record is structurally defective
///   - Missing required fields or metadata fields
///   - Duplicate ids or canonical terms
///   - Malformed dates, versions or relationships
///
/// - **Warning**: the record is usable but should be reviewed
///   - Unknown fields (forward compatibility)
///   - Unrecognized relationship predicates
///   - Definitions that are too short, too long or badly punctuated
///
/// - **Info**: observations about the collection
///   - Cross references between terms
///   - Relationship subjects that differ from the record's own term
///
/// # Examples
///
/// ```rust
/// use catmip_lint::core::Level;
///
/// assert!(Level::Error > Level::Warning);
/// assert!(Level::Warning > Level::Info);
/// assert_eq!(Level::Warning.to_string(), "warning");
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    /// Informational observation
    Info = 0,
    /// Potential problem that does not fail the run
    #[default]
    Warning = 1,
    /// Defect that fails the run
    Error = 2,
}

impl Level {
    /// Returns the string representation of the level.
    pub fn as_str(&self) -> &'static str {
        match self {
            Level::Info => "info",
            Level::Warning => "warning",
            Level::Error => "error",
        }
    }

    /// Returns the icon used for this level in console and Markdown output.
    pub fn icon(&self) -> &'static str {
        match self {
            Level::Info => "ℹ️",
            Level::Warning => "⚠️",
            Level::Error => "❌",
        }
    }

    /// Checks if this level is at least as severe as another level.
    ///
    /// ```rust
    /// use catmip_lint::core::Level;
    ///
    /// assert!(Level::Error.is_at_least(Level::Warning));
    /// assert!(!Level::Info.is_at_least(Level::Error));
    /// ```
    pub fn is_at_least(&self, other: Level) -> bool {
        *self >= other
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_ordering() {
        assert!(Level::Error > Level::Warning);
        assert!(Level::Warning > Level::Info);
        assert!(Level::Error > Level::Info);
    }

    #[test]
    fn test_level_is_at_least() {
        assert!(Level::Error.is_at_least(Level::Error));
        assert!(Level::Warning.is_at_least(Level::Info));
        assert!(!Level::Warning.is_at_least(Level::Error));
        assert!(!Level::Info.is_at_least(Level::Warning));
    }

    #[test]
    fn test_level_serde() {
        let json = serde_json::to_string(&Level::Error).unwrap();
        assert_eq!(json, "\"error\"");

        let level: Level = serde_json::from_str("\"info\"").unwrap();
        assert_eq!(level, Level::Info);
    }
}
