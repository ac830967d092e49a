//! Built-in lint rules for the CAT-MIP terminology dictionary.
//!
//! Each rule implements the [`Rule`](crate::core::Rule) trait and covers
//! one stage of the pipeline:
//!
//! 1. **[`StructureRule`]** - required fields, field kinds, known field set,
//!    canonical term casing
//! 2. **[`MetadataRule`]** - required metadata, date and version formats,
//!    registry identity
//! 3. **[`UniquenessRule`]** - unique ids and canonical terms across the
//!    collection
//! 4. **[`RelationshipRule`]** - `Subject predicate Object` shape, predicate
//!    allow-list, cross references
//! 5. **[`QualityRule`]** - definition heuristics, empty lists, incomplete
//!    agent execution blocks
//!
//! Rules only report what they own. A record without `metadata` gets one
//! `MissingField` from the structure rule and nothing from the metadata
//! rule; a non-string `canonical_term` gets a `TypeMismatch` and is then
//! ignored by the uniqueness and relationship rules.
//!
//! ```rust
//! use catmip_lint::core::LintSuite;
//! use catmip_lint::rules::{MetadataRule, StructureRule};
//!
//! let suite = LintSuite::builder("schema")
//!     .rule(StructureRule::new())
//!     .rule(MetadataRule::new())
//!     .build();
//! ```

mod metadata;
mod quality;
mod relationships;
mod structure;
mod uniqueness;

pub use metadata::{is_valid_timestamp, is_valid_version, MetadataRule};
pub use quality::QualityRule;
pub use relationships::{MalformedReason, Relationship, RelationshipRule};
pub use structure::StructureRule;
pub use uniqueness::UniquenessRule;

/// Returns true if the first character of `text` is an uppercase letter.
pub(crate) fn starts_uppercase(text: &str) -> bool {
    text.chars().next().is_some_and(char::is_uppercase)
}
