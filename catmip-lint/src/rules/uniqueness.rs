//! Collection-wide uniqueness of ids and canonical terms.

use crate::core::{Finding, FindingCode, LintContext, Rule};
use crate::document::{RecordRef, TermRecord};
use std::collections::HashMap;
use tracing::debug;

/// Checks that `id` and `canonical_term` values are unique.
///
/// Comparison is exact. The first record holding a value owns it; every
/// later record with the same value gets one finding that names the first
/// holder, so `n` occurrences yield `n - 1` findings. Non-string values are
/// skipped.
#[derive(Debug, Clone, Default)]
pub struct UniquenessRule;

impl UniquenessRule {
    pub fn new() -> Self {
        Self
    }

    fn describe(record: &RecordRef) -> String {
        match &record.id {
            Some(id) => format!("'{id}'"),
            None => format!("at index {}", record.index),
        }
    }

    fn check_field<'a>(
        ctx: &LintContext<'a>,
        code: FindingCode,
        label: &str,
        value: impl Fn(&'a TermRecord) -> Option<&'a str>,
    ) -> Vec<Finding> {
        let mut first_seen: HashMap<&'a str, &'a TermRecord> = HashMap::new();
        let mut findings = Vec::new();

        for record in ctx.records() {
            let Some(key) = value(record) else {
                continue;
            };
            match first_seen.get(key) {
                Some(first) => {
                    let first_ref = first.record_ref();
                    let this_ref = record.record_ref();
                    findings.push(
                        Finding::new(
                            code,
                            record,
                            format!(
                                "Duplicate {label} '{key}' in records {} and {}",
                                Self::describe(&first_ref),
                                Self::describe(&this_ref)
                            ),
                        )
                        .with_related(first_ref),
                    );
                }
                None => {
                    first_seen.insert(key, record);
                }
            }
        }

        debug!(
            rule.check = label,
            distinct = first_seen.len(),
            duplicates = findings.len(),
            "Uniqueness check completed"
        );
        findings
    }
}

impl Rule for UniquenessRule {
    fn name(&self) -> &str {
        "uniqueness"
    }

    fn description(&self) -> Option<&str> {
        Some("Unique ids and canonical terms across the collection")
    }

    fn evaluate(&self, ctx: &LintContext<'_>) -> Vec<Finding> {
        let mut findings = Self::check_field(ctx, FindingCode::DuplicateId, "id", |record| {
            record.id()
        });
        findings.extend(Self::check_field(
            ctx,
            FindingCode::DuplicateCanonicalTerm,
            "canonical term",
            |record| record.canonical_term(),
        ));
        findings
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::LintConfig;
    use crate::test_fixtures::{collection, valid_term};
    use serde_json::json;

    fn evaluate(values: Vec<serde_json::Value>) -> Vec<Finding> {
        let terms = collection(values);
        let config = LintConfig::default();
        let ctx = LintContext::new(&terms, &config);
        UniquenessRule::new().evaluate(&ctx)
    }

    #[test]
    fn test_unique_records() {
        let findings = evaluate(vec![
            valid_term("cat-001", "Asset"),
            valid_term("cat-002", "Tenant"),
        ]);
        assert!(findings.is_empty());
    }

    #[test]
    fn test_duplicate_canonical_term_names_both_ids() {
        let findings = evaluate(vec![
            valid_term("cat-001", "Device"),
            valid_term("cat-002", "Device"),
        ]);
        assert_eq!(findings.len(), 1);
        let finding = &findings[0];
        assert_eq!(finding.code, FindingCode::DuplicateCanonicalTerm);
        assert_eq!(finding.record.index, 1);
        assert_eq!(finding.related.as_ref().map(|r| r.index), Some(0));
        assert!(finding.message.contains("cat-001"));
        assert!(finding.message.contains("cat-002"));
    }

    #[test]
    fn test_one_finding_per_extra_occurrence() {
        let findings = evaluate(vec![
            valid_term("cat-001", "Asset"),
            valid_term("cat-001", "Tenant"),
            valid_term("cat-001", "Device"),
        ]);
        assert_eq!(findings.len(), 2);
        assert!(findings
            .iter()
            .all(|finding| finding.code == FindingCode::DuplicateId
                && finding.related.as_ref().map(|r| r.index) == Some(0)));
    }

    #[test]
    fn test_comparison_is_case_sensitive() {
        let findings = evaluate(vec![
            valid_term("cat-001", "Device"),
            valid_term("CAT-001", "DEVICE"),
        ]);
        assert!(findings.is_empty());
    }

    #[test]
    fn test_non_string_values_are_skipped() {
        let findings = evaluate(vec![
            json!({"id": 1, "canonical_term": null}),
            json!({"id": 1, "canonical_term": null}),
        ]);
        assert!(findings.is_empty());
    }
}
