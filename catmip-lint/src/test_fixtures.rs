//! Common test fixtures for term records.
//!
//! `valid_term` builds a record that passes every rule on its own; tests
//! mutate it to introduce exactly the problem under test.

use crate::document::{TermCollection, TermRecord};
use serde_json::{json, Value};

/// Builds a record at `index` from a JSON object. Non-objects yield an empty record.
pub fn record(index: usize, value: Value) -> TermRecord {
    match value {
        Value::Object(fields) => TermRecord::new(index, fields),
        _ => TermRecord::new(index, Default::default()),
    }
}

/// A fully valid term: 2 synonyms, 1 relationship to `Tenant`, and
/// metadata authored by `cat-mip-team`.
pub fn valid_term(id: &str, canonical_term: &str) -> Value {
    json!({
        "id": id,
        "canonical_term": canonical_term,
        "definition": format!(
            "The {canonical_term} concept as used by agents and tools across the CAT-MIP registry."
        ),
        "synonyms": [format!("{canonical_term} Record"), format!("{canonical_term} Entry")],
        "relationships": [format!("{canonical_term} belongsTo Tenant")],
        "metadata": {
            "author": "cat-mip-team",
            "version": "1.0",
            "date_added": "2025-01-01T00:00:00Z",
            "registry": "cat-mip.org"
        }
    })
}

/// Builds a collection from JSON values, panicking on non-object values.
pub fn collection(values: Vec<Value>) -> TermCollection {
    TermCollection::from_value(Value::Array(values)).expect("fixture values must be objects")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_term_shape() {
        let term = record(3, valid_term("cat-001", "Asset"));
        assert_eq!(term.index(), 3);
        assert_eq!(term.id(), Some("cat-001"));
        assert_eq!(term.strings("synonyms").len(), 2);
        assert!(term.definition().unwrap().chars().count() >= 50);
    }
}
