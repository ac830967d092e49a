//! Shared fixtures for integration tests.

#![allow(dead_code)]

use catmip_lint::config::LintConfig;
use catmip_lint::core::{FindingCode, LintResult, LintSuite};
use catmip_lint::document::TermCollection;
use serde_json::{json, Value};

/// A term record that passes every rule when a `Tenant` record is present.
pub fn valid_term(id: &str, canonical_term: &str) -> Value {
    json!({
        "id": id,
        "canonical_term": canonical_term,
        "definition": format!(
            "The {canonical_term} concept as used by agents and tools across the CAT-MIP registry."
        ),
        "synonyms": [format!("{canonical_term} Record")],
        "relationships": [format!("{canonical_term} belongsTo Tenant")],
        "metadata": {
            "author": "cat-mip-team",
            "version": "1.0",
            "date_added": "2025-01-01T00:00:00Z",
            "registry": "cat-mip.org"
        }
    })
}

/// The `Tenant` record other fixtures point their relationships at.
pub fn tenant() -> Value {
    let mut term = valid_term("cat-000", "Tenant");
    term["relationships"] = json!(["Tenant isManagedBy Tenant"]);
    term
}

/// Serializes records into a document.
pub fn document(records: &[Value]) -> Vec<u8> {
    serde_json::to_vec_pretty(&Value::Array(records.to_vec())).expect("fixture serializes")
}

/// Runs the standard suite with the default configuration.
pub fn lint(records: &[Value]) -> LintResult {
    lint_with(records, LintConfig::default())
}

pub fn lint_with(records: &[Value], config: LintConfig) -> LintResult {
    let collection = TermCollection::from_slice(&document(records)).expect("fixture parses");
    LintSuite::standard(config).run(&collection)
}

/// Number of findings with `code`.
pub fn count(result: &LintResult, code: FindingCode) -> usize {
    result
        .report()
        .findings
        .iter()
        .filter(|finding| finding.code == code)
        .count()
}
