//! Lint configuration.
//!
//! The linter reads no configuration file; everything here has a default
//! matching the CAT-MIP registry and can be overridden programmatically or
//! from the command line.

use crate::prelude::*;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// The registry value every record's metadata must carry.
pub const DEFAULT_REGISTRY: &str = "cat-mip.org";

/// Relationship verbs recognized out of the box.
pub const DEFAULT_PREDICATES: [&str; 19] = [
    "belongsTo",
    "isConnectedTo",
    "isManagedBy",
    "isInstalledOn",
    "executes",
    "reportsTo",
    "monitors",
    "enables",
    "isExposedBy",
    "isCalledBy",
    "interprets",
    "calls",
    "isPartnerOf",
    "paysFor",
    "isMonitoredFor",
    "serves",
    "broadcasts",
    "enforces",
    "isUsedBy",
];

/// A soft allow-list of relationship predicates.
///
/// Unknown predicates are only warned about, so the set is meant to grow
/// with the vocabulary without code changes.
///
/// # Examples
///
/// ```rust
/// use catmip_lint::config::PredicateSet;
///
/// let mut predicates = PredicateSet::default();
/// assert!(predicates.contains("belongsTo"));
/// assert!(!predicates.contains("ownsCompletely"));
///
/// predicates.insert("ownsCompletely").unwrap();
/// assert!(predicates.contains("ownsCompletely"));
/// assert!(predicates.insert("two words").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PredicateSet {
    verbs: BTreeSet<String>,
}

impl PredicateSet {
    /// Creates an empty predicate set.
    pub fn empty() -> Self {
        Self {
            verbs: BTreeSet::new(),
        }
    }

    /// Adds a verb, rejecting empty or multi-token values.
    pub fn insert(&mut self, verb: impl Into<String>) -> Result<bool> {
        let verb = verb.into();
        if verb.is_empty() || verb.chars().any(char::is_whitespace) {
            return Err(LintError::Configuration(format!(
                "Relationship predicate must be a single non-empty token, got '{verb}'"
            )));
        }
        Ok(self.verbs.insert(verb))
    }

    /// Adds several verbs.
    pub fn extend<I, S>(&mut self, verbs: I) -> Result<()>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for verb in verbs {
            self.insert(verb)?;
        }
        Ok(())
    }

    pub fn contains(&self, verb: &str) -> bool {
        self.verbs.contains(verb)
    }

    pub fn len(&self) -> usize {
        self.verbs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.verbs.is_empty()
    }

    /// Iterates the verbs in sorted order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.verbs.iter().map(String::as_str)
    }
}

impl Default for PredicateSet {
    fn default() -> Self {
        Self {
            verbs: DEFAULT_PREDICATES.iter().map(|v| v.to_string()).collect(),
        }
    }
}

/// How relationship objects are matched against canonical terms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ReferenceMatching {
    /// Object must equal a canonical term exactly
    Exact,
    /// Object may differ from a canonical term in letter case
    #[default]
    CaseInsensitive,
}

impl ReferenceMatching {
    /// Normalizes a term into the key used for lookups.
    pub fn key(&self, term: &str) -> String {
        match self {
            ReferenceMatching::Exact => term.to_string(),
            ReferenceMatching::CaseInsensitive => term.to_lowercase(),
        }
    }
}

/// Configuration for a lint run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LintConfig {
    /// Required value of `metadata.registry`
    pub registry: String,
    /// Recognized relationship predicates
    pub predicates: PredicateSet,
    /// Minimum definition length in characters
    pub min_definition_length: usize,
    /// Maximum definition length in characters
    pub max_definition_length: usize,
    /// How relationship objects resolve to canonical terms
    pub reference_matching: ReferenceMatching,
}

impl Default for LintConfig {
    fn default() -> Self {
        Self {
            registry: DEFAULT_REGISTRY.to_string(),
            predicates: PredicateSet::default(),
            min_definition_length: 50,
            max_definition_length: 2000,
            reference_matching: ReferenceMatching::default(),
        }
    }
}

impl LintConfig {
    /// Sets the required registry value.
    pub fn with_registry(mut self, registry: impl Into<String>) -> Self {
        self.registry = registry.into();
        self
    }

    /// Replaces the predicate set.
    pub fn with_predicates(mut self, predicates: PredicateSet) -> Self {
        self.predicates = predicates;
        self
    }

    /// Adds predicates on top of the current set.
    pub fn with_extra_predicates<I, S>(mut self, verbs: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.predicates.extend(verbs)?;
        Ok(self)
    }

    /// Sets the accepted definition length range, in characters.
    pub fn with_definition_length(mut self, min: usize, max: usize) -> Result<Self> {
        if min > max {
            return Err(LintError::Configuration(format!(
                "Minimum definition length {min} exceeds maximum {max}"
            )));
        }
        self.min_definition_length = min;
        self.max_definition_length = max;
        Ok(self)
    }

    /// Sets how relationship objects are matched.
    pub fn with_reference_matching(mut self, matching: ReferenceMatching) -> Self {
        self.reference_matching = matching;
        self
    }
}
