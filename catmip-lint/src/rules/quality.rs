//! Content quality heuristics.

use super::starts_uppercase;
use crate::core::{Finding, FindingCode, LintContext, Rule};
use crate::document::{fields, TermRecord};

const LIST_FIELDS: [&str; 3] = [fields::SYNONYMS, fields::RELATIONSHIPS, fields::PROMPT_EXAMPLES];

/// Checks definition length, capitalization and punctuation, empty lists,
/// and declared-but-empty agent actions.
///
/// Everything here is a warning except `IncompleteAgentExecution`. Absent or
/// mistyped fields are skipped.
#[derive(Debug, Clone, Default)]
pub struct QualityRule;

impl QualityRule {
    pub fn new() -> Self {
        Self
    }

    fn check_definition(
        record: &TermRecord,
        definition: &str,
        ctx: &LintContext<'_>,
        findings: &mut Vec<Finding>,
    ) {
        let config = ctx.config();
        let length = definition.chars().count();

        if length < config.min_definition_length {
            findings.push(
                Finding::new(
                    FindingCode::DefinitionLengthWarning,
                    record,
                    format!(
                        "Definition seems too short ({length} chars, minimum {})",
                        config.min_definition_length
                    ),
                )
                .with_field(fields::DEFINITION),
            );
        } else if length > config.max_definition_length {
            findings.push(
                Finding::new(
                    FindingCode::DefinitionLengthWarning,
                    record,
                    format!(
                        "Definition is very long ({length} chars, maximum {})",
                        config.max_definition_length
                    ),
                )
                .with_field(fields::DEFINITION),
            );
        }

        if !starts_uppercase(definition.trim_start()) {
            findings.push(
                Finding::new(
                    FindingCode::DefinitionCasingWarning,
                    record,
                    "Definition should start with a capital letter",
                )
                .with_field(fields::DEFINITION),
            );
        }

        if !definition.trim_end().ends_with(|c| matches!(c, '.' | '!' | '?')) {
            findings.push(
                Finding::new(
                    FindingCode::PunctuationWarning,
                    record,
                    "Definition should end with terminal punctuation",
                )
                .with_field(fields::DEFINITION),
            );
        }
    }
}

impl Rule for QualityRule {
    fn name(&self) -> &str {
        "quality"
    }

    fn description(&self) -> Option<&str> {
        Some("Definition heuristics, empty lists and agent execution completeness")
    }

    fn check_record(&self, record: &TermRecord, ctx: &LintContext<'_>) -> Vec<Finding> {
        let mut findings = Vec::new();

        if let Some(definition) = record.definition() {
            Self::check_definition(record, definition, ctx, &mut findings);
        }

        for name in LIST_FIELDS {
            if record.array(name).is_some_and(<[_]>::is_empty) {
                findings.push(
                    Finding::new(
                        FindingCode::EmptyOptionalFieldWarning,
                        record,
                        format!("Empty {name} list"),
                    )
                    .with_field(name),
                );
            }
        }

        let empty_actions = record
            .object(fields::AGENT_EXECUTION)
            .and_then(|block| block.get(fields::ACTIONS))
            .and_then(|actions| actions.as_array())
            .is_some_and(Vec::is_empty);
        if empty_actions {
            findings.push(
                Finding::new(
                    FindingCode::IncompleteAgentExecution,
                    record,
                    "agent_execution declares an empty actions list",
                )
                .with_field(format!("{}.{}", fields::AGENT_EXECUTION, fields::ACTIONS)),
            );
        }

        findings
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::LintConfig;
    use crate::test_fixtures::{collection, valid_term};
    use serde_json::json;

    fn check_with(value: serde_json::Value, config: LintConfig) -> Vec<Finding> {
        let terms = collection(vec![value]);
        let ctx = LintContext::new(&terms, &config);
        QualityRule::new().check_record(&terms.records()[0], &ctx)
    }

    fn check(value: serde_json::Value) -> Vec<FindingCode> {
        check_with(value, LintConfig::default())
            .iter()
            .map(|finding| finding.code)
            .collect()
    }

    fn with_definition(definition: &str) -> serde_json::Value {
        let mut term = valid_term("cat-001", "Asset");
        term["definition"] = json!(definition);
        term
    }

    #[test]
    fn test_valid_definition() {
        assert!(check(valid_term("cat-001", "Asset")).is_empty());
    }

    #[test]
    fn test_definition_length_bounds() {
        let short = "A short definition.";
        assert_eq!(
            check(with_definition(short)),
            vec![FindingCode::DefinitionLengthWarning]
        );

        let exact = format!("A{}.", "b".repeat(48));
        assert_eq!(exact.chars().count(), 50);
        assert!(check(with_definition(&exact)).is_empty());

        let long = format!("A{}.", "b".repeat(2000));
        assert_eq!(
            check(with_definition(&long)),
            vec![FindingCode::DefinitionLengthWarning]
        );
    }

    #[test]
    fn test_length_counts_characters() {
        let accented = format!("É{}.", "é".repeat(48));
        assert!(accented.len() > 50);
        assert!(check(with_definition(&accented)).is_empty());
    }

    #[test]
    fn test_configured_length_bounds() {
        let config = LintConfig::default().with_definition_length(5, 40).unwrap();
        let findings = check_with(with_definition("A short definition."), config);
        assert!(findings.is_empty());
    }

    #[test]
    fn test_casing_and_punctuation() {
        let definition = "a resource tracked by the organization for lifecycle management";
        assert_eq!(
            check(with_definition(definition)),
            vec![
                FindingCode::DefinitionCasingWarning,
                FindingCode::PunctuationWarning
            ]
        );

        let question = "What a resource tracked by the organization for lifecycle management?  ";
        assert!(check(with_definition(question)).is_empty());
    }

    #[test]
    fn test_empty_lists() {
        let mut term = valid_term("cat-001", "Asset");
        term["synonyms"] = json!([]);
        term["relationships"] = json!([]);
        term["prompt_examples"] = json!([]);
        let findings = check_with(term, LintConfig::default());

        let fields: Vec<_> = findings
            .iter()
            .map(|finding| (finding.code, finding.field.as_deref()))
            .collect();
        assert_eq!(
            fields,
            vec![
                (FindingCode::EmptyOptionalFieldWarning, Some("synonyms")),
                (FindingCode::EmptyOptionalFieldWarning, Some("relationships")),
                (FindingCode::EmptyOptionalFieldWarning, Some("prompt_examples")),
            ]
        );
    }

    #[test]
    fn test_absent_lists_are_silent() {
        let mut term = valid_term("cat-001", "Asset");
        let object = term.as_object_mut().unwrap();
        object.remove("synonyms");
        object.remove("relationships");
        assert!(check(term).is_empty());
    }

    #[test]
    fn test_empty_actions_is_error() {
        let mut term = valid_term("cat-001", "Asset");
        term["agent_execution"] = json!({"interpretation": "Look up the asset", "actions": []});
        let findings = check_with(term, LintConfig::default());
        assert_eq!(findings.len(), 1);
        assert_eq!(findings[0].code, FindingCode::IncompleteAgentExecution);
        assert!(findings[0].is_error());
    }

    #[test]
    fn test_missing_definition_does_not_panic() {
        let mut term = valid_term("cat-001", "Asset");
        term.as_object_mut().unwrap().remove("definition");
        assert!(check(term.clone()).is_empty());

        term["definition"] = json!("");
        assert_eq!(
            check(term),
            vec![
                FindingCode::DefinitionLengthWarning,
                FindingCode::DefinitionCasingWarning,
                FindingCode::PunctuationWarning
            ]
        );
    }
}
