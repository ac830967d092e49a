//! # CAT-MIP Lint - Terminology Dictionary Validation for Rust
//!
//! `catmip-lint` validates the CAT-MIP terminology dictionary: a JSON array
//! of term records, each with a canonical name, a definition, optional
//! synonyms, relationships, prompt examples and agent-execution guidance,
//! and a metadata block. It checks structure, uniqueness, cross references
//! and content quality across every record, and reports errors, warnings and
//! statistics for humans and for machines.
//!
//! ## Quick Start
//!
//! ```rust
//! use catmip_lint::prelude::*;
//! use catmip_lint::core::LintSuite;
//! use catmip_lint::document::TermCollection;
//!
//! # fn example() -> Result<()> {
//! let document = br#"[{
//!     "id": "cat-001",
//!     "canonical_term": "Asset",
//!     "definition": "A hardware or software resource tracked by the organization for management.",
//!     "synonyms": ["Device"],
//!     "relationships": ["Asset belongsTo Tenant"],
//!     "metadata": {
//!         "author": "cat-mip-team",
//!         "version": "1.0",
//!         "date_added": "2025-01-01T00:00:00Z",
//!         "registry": "cat-mip.org"
//!     }
//! }]"#;
//!
//! let collection = TermCollection::from_slice(document)?;
//! let result = LintSuite::standard(LintConfig::default()).run(&collection);
//!
//! match &result {
//!     LintResult::Success { report } => {
//!         println!("{} terms, {} warnings", report.stats.total_terms, report.stats.warning_count);
//!     }
//!     LintResult::Failure { report } => {
//!         for finding in report.findings_by_level(Level::Error) {
//!             println!("{finding}");
//!         }
//!     }
//! }
//!
//! print!("{}", result.to_human()?);
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```
//!
//! ## Pipeline
//!
//! 1. **Loading** ([`document`]): the document is parsed into an immutable
//!    [`TermCollection`](document::TermCollection). Syntax errors and a
//!    root that is not an array of objects are fatal.
//! 2. **Rules** ([`rules`]): structure, metadata, uniqueness, relationships
//!    and quality. Every problem becomes a [`Finding`](core::Finding); no
//!    rule aborts the run.
//! 3. **Reporting** ([`core::LintResult`], [`formatters`]): findings are
//!    ordered by record and severity, counted, and rendered as human text,
//!    JSON or Markdown.
//!
//! A run passes iff it produced no error-level finding. Warnings and info
//! findings never change the verdict.
//!
//! ## Configuration
//!
//! [`LintConfig`](config::LintConfig) carries the expected registry, the
//! relationship predicate allow-list, the definition length bounds and the
//! reference matching mode. The predicate set is open: extend it rather
//! than changing code when a new relationship verb becomes legitimate.
//!
//! ```rust
//! use catmip_lint::config::{LintConfig, ReferenceMatching};
//!
//! let config = LintConfig::default()
//!     .with_extra_predicates(["supersedes"])
//!     .unwrap()
//!     .with_reference_matching(ReferenceMatching::Exact);
//! assert!(config.predicates.contains("supersedes"));
//! ```
//!
//! ## Logging
//!
//! The library logs through `tracing`; the binary installs a subscriber with
//! [`logging::setup::init_logging`] that writes to stderr, keeping stdout
//! for the report.

pub mod config;
pub mod core;
pub mod document;
pub mod error;
pub mod formatters;
pub mod logging;
pub mod prelude;
pub mod rules;

#[cfg(test)]
pub(crate) mod test_fixtures;
