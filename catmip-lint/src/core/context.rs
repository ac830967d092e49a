//! Lint context shared by all rules during one run.
//!
//! The context borrows the loaded collection and configuration immutably
//! and adds the cross-record lookups the relationship rules need, so rules
//! can be evaluated in any order without coordinating with each other.

use crate::config::LintConfig;
use crate::document::{TermCollection, TermRecord};
use std::collections::HashMap;

/// Read-only view of a lint run.
#[derive(Debug, Clone)]
pub struct LintContext<'a> {
    collection: &'a TermCollection,
    config: &'a LintConfig,
    /// Canonical term key -> index of the first record holding it
    canonical_index: HashMap<String, usize>,
}

impl<'a> LintContext<'a> {
    /// Creates a context over `collection`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use catmip_lint::config::LintConfig;
    /// use catmip_lint::core::LintContext;
    /// use catmip_lint::document::TermCollection;
    ///
    /// let collection =
    ///     TermCollection::from_slice(br#"[{"canonical_term": "Tenant"}]"#).unwrap();
    /// let config = LintConfig::default();
    /// let ctx = LintContext::new(&collection, &config);
    ///
    /// assert!(ctx.resolve_term("tenant").is_some());
    /// assert!(ctx.resolve_term("Asset").is_none());
    /// ```
    pub fn new(collection: &'a TermCollection, config: &'a LintConfig) -> Self {
        let matching = config.reference_matching;
        let mut canonical_index = HashMap::with_capacity(collection.len());
        for record in collection {
            if let Some(term) = record.canonical_term() {
                canonical_index
                    .entry(matching.key(term))
                    .or_insert(record.index());
            }
        }

        Self {
            collection,
            config,
            canonical_index,
        }
    }

    pub fn collection(&self) -> &'a TermCollection {
        self.collection
    }

    pub fn config(&self) -> &'a LintConfig {
        self.config
    }

    pub fn records(&self) -> &'a [TermRecord] {
        self.collection.records()
    }

    /// Finds the record whose canonical term matches `term` under the
    /// configured reference matching.
    pub fn resolve_term(&self, term: &str) -> Option<&'a TermRecord> {
        let key = self.config.reference_matching.key(term);
        self.canonical_index
            .get(&key)
            .and_then(|&index| self.collection.records().get(index))
    }
}
