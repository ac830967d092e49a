//! Prelude for commonly used types and traits in catmip-lint.

pub use crate::config::{LintConfig, PredicateSet, ReferenceMatching};
pub use crate::core::{Finding, FindingCode, Level, LintReport, LintResult, LintStats};
pub use crate::error::{LintError, Result};
pub use crate::formatters::{FormatterConfig, ResultFormatter};
pub use crate::logging::LogConfig;
