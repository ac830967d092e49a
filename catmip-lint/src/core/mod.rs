//! Core lint types for the CAT-MIP linter.
//!
//! This module provides the fundamental types for running lint rules over a
//! terminology document and collecting their findings.
//!
//! ## Overview
//!
//! - **[`LintSuite`]**: an ordered set of rules run over one document
//! - **[`Rule`]**: one pipeline stage (implemented in the `rules` module)
//! - **[`LintContext`]**: the immutable view of a run shared by all rules
//! - **[`Finding`]**: one reported problem, with a [`FindingCode`] and [`Level`]
//! - **[`LintResult`]**: the outcome of a run, wrapping a [`LintReport`]
//!
//! ## Architecture
//!
//! ```text
//! TermCollection ──► LintContext ──┬─► StructureRule    ─┐
//!                                  ├─► MetadataRule     ─┤
//!                                  ├─► UniquenessRule   ─┼─► LintReport ─► LintResult
//!                                  ├─► RelationshipRule ─┤
//!                                  └─► QualityRule      ─┘
//! ```
//!
//! ## Example
//!
//! ```rust
//! use catmip_lint::config::LintConfig;
//! use catmip_lint::core::{FindingCode, LintSuite};
//! use catmip_lint::document::TermCollection;
//!
//! let document = br#"[{
//!     "id": "cat-001",
//!     "canonical_term": "asset",
//!     "definition": "A hardware or software resource tracked by the organization for management.",
//!     "metadata": {
//!         "author": "cat-mip-team",
//!         "version": "1.0",
//!         "date_added": "2025-01-01T00:00:00Z",
//!         "registry": "cat-mip.org"
//!     }
//! }]"#;
//!
//! let collection = TermCollection::from_slice(document).unwrap();
//! let result = LintSuite::standard(LintConfig::default()).run(&collection);
//!
//! assert!(result.is_failure());
//! assert_eq!(result.report().findings[0].code, FindingCode::InvalidCasing);
//! ```

mod context;
mod finding;
mod level;
mod result;
mod rule;
mod suite;

pub use context::LintContext;
pub use finding::{Finding, FindingCategory, FindingCode};
pub use level::Level;
pub use result::{LintReport, LintResult, LintStats};
pub use rule::{BoxedRule, Rule};
pub use suite::{LintSuite, LintSuiteBuilder};
