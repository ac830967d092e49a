//! Structural validation of term records.

use super::starts_uppercase;
use crate::core::{Finding, FindingCode, LintContext, Rule};
use crate::document::{fields, value_kind, TermRecord};
use serde_json::Value;

/// The value kind a field must have.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Expected {
    String,
    StringList,
    Object,
}

impl Expected {
    fn describe(&self) -> &'static str {
        match self {
            Expected::String => "a string",
            Expected::StringList => "an array of strings",
            Expected::Object => "an object",
        }
    }
}

const FIELD_KINDS: [(&str, Expected); 10] = [
    (fields::ID, Expected::String),
    (fields::CANONICAL_TERM, Expected::String),
    (fields::DEFINITION, Expected::String),
    (fields::METADATA, Expected::Object),
    (fields::SYNONYMS, Expected::StringList),
    (fields::RELATIONSHIPS, Expected::StringList),
    (fields::PROMPT_EXAMPLES, Expected::StringList),
    (fields::AGENT_EXECUTION, Expected::Object),
    (fields::RECOMMENDATION, Expected::String),
    (fields::TERM_TYPE, Expected::String),
];

const AGENT_EXECUTION_KINDS: [(&str, Expected); 2] = [
    (fields::INTERPRETATION, Expected::String),
    (fields::ACTIONS, Expected::StringList),
];

/// Checks required fields, field kinds, the known field set and canonical
/// term casing.
///
/// Unknown fields are warnings so contributors can add fields ahead of the
/// schema. Every violation yields its own finding.
///
/// # Examples
///
/// ```rust
/// use catmip_lint::core::{FindingCode, LintSuite};
/// use catmip_lint::document::TermCollection;
/// use catmip_lint::rules::StructureRule;
///
/// let collection = TermCollection::from_slice(br#"[{"id": "cat-001", "color": "blue"}]"#).unwrap();
/// let result = LintSuite::builder("structure").rule(StructureRule::new()).build().run(&collection);
///
/// let codes: Vec<_> = result.report().findings.iter().map(|f| f.code).collect();
/// assert_eq!(codes.iter().filter(|c| **c == FindingCode::MissingField).count(), 3);
/// assert!(codes.contains(&FindingCode::UnknownField));
/// ```
#[derive(Debug, Clone, Default)]
pub struct StructureRule;

impl StructureRule {
    pub fn new() -> Self {
        Self
    }

    fn check_kind(
        record: &TermRecord,
        path: &str,
        value: &Value,
        expected: Expected,
        findings: &mut Vec<Finding>,
    ) {
        let matches = match expected {
            Expected::String => value.is_string(),
            Expected::Object => value.is_object(),
            Expected::StringList => value.is_array(),
        };
        if !matches {
            findings.push(
                Finding::new(
                    FindingCode::TypeMismatch,
                    record,
                    format!(
                        "Field '{path}' must be {}, found {}",
                        expected.describe(),
                        value_kind(value)
                    ),
                )
                .with_field(path),
            );
            return;
        }

        if let (Expected::StringList, Some(items)) = (expected, value.as_array()) {
            for (position, item) in items.iter().enumerate() {
                if !item.is_string() {
                    findings.push(
                        Finding::new(
                            FindingCode::TypeMismatch,
                            record,
                            format!(
                                "Item {} of '{path}' must be a string, found {}",
                                position + 1,
                                value_kind(item)
                            ),
                        )
                        .with_field(format!("{path}[{position}]")),
                    );
                }
            }
        }
    }

    fn check_agent_execution(record: &TermRecord, findings: &mut Vec<Finding>) {
        let Some(block) = record.object(fields::AGENT_EXECUTION) else {
            return;
        };

        for (name, expected) in AGENT_EXECUTION_KINDS {
            let path = format!("{}.{name}", fields::AGENT_EXECUTION);
            match block.get(name) {
                None => findings.push(
                    Finding::new(
                        FindingCode::MissingField,
                        record,
                        format!("Missing required field '{path}'"),
                    )
                    .with_field(path),
                ),
                Some(value) => Self::check_kind(record, &path, value, expected, findings),
            }
        }
    }
}

impl Rule for StructureRule {
    fn name(&self) -> &str {
        "structure"
    }

    fn description(&self) -> Option<&str> {
        Some("Required fields, field kinds, known fields and canonical term casing")
    }

    fn check_record(&self, record: &TermRecord, _ctx: &LintContext<'_>) -> Vec<Finding> {
        let mut findings = Vec::new();

        for name in fields::REQUIRED {
            if !record.has(name) {
                findings.push(
                    Finding::new(
                        FindingCode::MissingField,
                        record,
                        format!("Missing required field '{name}'"),
                    )
                    .with_field(name),
                );
            }
        }

        for (name, expected) in FIELD_KINDS {
            if let Some(value) = record.get(name) {
                Self::check_kind(record, name, value, expected, &mut findings);
            }
        }

        if let Some(term) = record.canonical_term() {
            if !starts_uppercase(term) {
                findings.push(
                    Finding::new(
                        FindingCode::InvalidCasing,
                        record,
                        format!("Canonical term '{term}' must start with an uppercase letter"),
                    )
                    .with_field(fields::CANONICAL_TERM),
                );
            }
        }

        for name in record.fields().keys() {
            if !fields::is_known(name) {
                findings.push(
                    Finding::new(
                        FindingCode::UnknownField,
                        record,
                        format!("Unknown field '{name}'"),
                    )
                    .with_field(name.as_str()),
                );
            }
        }

        Self::check_agent_execution(record, &mut findings);
        findings
    }
}
