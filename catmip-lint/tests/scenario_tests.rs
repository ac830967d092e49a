//! End-to-end lint scenarios over small documents.

mod common;

use catmip_lint::config::LintConfig;
use catmip_lint::core::{FindingCode, Level, LintSuite};
use catmip_lint::document::TermCollection;
use catmip_lint::formatters::{FormatterConfig, HumanFormatter, JsonFormatter, ResultFormatter};
use common::{count, lint, lint_with, tenant, valid_term};
use serde_json::json;

#[test]
fn test_empty_collection_passes() {
    let collection = TermCollection::from_slice(b"[]").unwrap();
    let result = LintSuite::standard(LintConfig::default()).run(&collection);

    assert!(result.is_success());
    assert!(result.report().passed);
    assert_eq!(result.stats().total_terms, 0);
    assert_eq!(result.exit_code(), 0);
}

#[test]
fn test_lowercase_canonical_term() {
    let mut asset = valid_term("cat-001", "asset");
    asset.as_object_mut().unwrap().remove("relationships");
    let result = lint(&[asset]);

    assert_eq!(count(&result, FindingCode::InvalidCasing), 1);
    assert_eq!(result.stats().error_count, 1);
    assert_eq!(result.exit_code(), 1);
}

#[test]
fn test_short_date_format() {
    let mut asset = valid_term("cat-001", "Asset");
    asset["metadata"]["date_added"] = json!("2025-1-1");
    let result = lint(&[tenant(), asset]);

    assert_eq!(count(&result, FindingCode::InvalidDateFormat), 1);
    assert_eq!(result.stats().error_count, 1);
    assert!(result.is_failure());
}

#[test]
fn test_two_token_relationship() {
    let mut asset = valid_term("cat-001", "Asset");
    asset["relationships"] = json!(["Asset belongsTo"]);
    let result = lint(&[tenant(), asset]);

    assert_eq!(count(&result, FindingCode::MalformedRelationship), 1);
    assert_eq!(result.stats().error_count, 1);
}

#[test]
fn test_unrecognized_predicate_is_only_a_warning() {
    let mut asset = valid_term("cat-001", "Asset");
    asset["relationships"] = json!(["Asset ownsCompletely Tenant"]);
    let result = lint(&[tenant(), asset]);

    assert_eq!(count(&result, FindingCode::UnrecognizedPredicate), 1);
    assert_eq!(result.stats().error_count, 0);
    assert!(result.is_success());
}

#[test]
fn test_duplicate_canonical_term_names_both_ids() {
    let result = lint(&[
        tenant(),
        valid_term("cat-001", "Device"),
        valid_term("cat-002", "Device"),
    ]);

    assert_eq!(count(&result, FindingCode::DuplicateCanonicalTerm), 1);
    assert_eq!(result.stats().error_count, 1);
    let finding = result
        .report()
        .findings
        .iter()
        .find(|finding| finding.code == FindingCode::DuplicateCanonicalTerm)
        .unwrap();
    assert!(finding.message.contains("cat-001"));
    assert!(finding.message.contains("cat-002"));
}

#[test]
fn test_duplicate_term_self_reference_is_not_a_cross_reference() {
    let mut second = valid_term("cat-002", "Device");
    second["relationships"] = json!(["Device isConnectedTo Device"]);
    let result = lint(&[tenant(), valid_term("cat-001", "Device"), second]);

    assert_eq!(count(&result, FindingCode::DuplicateCanonicalTerm), 1);
    assert_eq!(count(&result, FindingCode::CrossReference), 1);
    let cross = result
        .report()
        .findings
        .iter()
        .find(|finding| finding.code == FindingCode::CrossReference)
        .unwrap();
    assert_eq!(cross.record.index, 1);
}

#[test]
fn test_duplicate_id_reported_once() {
    let result = lint(&[
        tenant(),
        valid_term("cat-001", "Asset"),
        valid_term("cat-001", "Device"),
    ]);

    assert_eq!(count(&result, FindingCode::DuplicateId), 1);
    assert!(result.is_failure());
}

#[test]
fn test_well_formed_collection_passes() {
    let mut asset = valid_term("cat-001", "Asset");
    asset["prompt_examples"] = json!(["Which assets belong to this tenant?"]);
    asset["agent_execution"] = json!({
        "interpretation": "Resolve the asset inventory for the tenant",
        "actions": ["list_assets"]
    });
    let result = lint(&[tenant(), asset, valid_term("cat-002", "Device")]);

    assert!(result.is_success(), "{:#?}", result.report().findings);
    assert_eq!(result.stats().error_count, 0);
    assert_eq!(result.stats().warning_count, 0);
    assert_eq!(result.stats().terms_with_agent_execution, 1);
    assert_eq!(result.stats().authors.get("cat-mip-team"), Some(&3));
}

#[test]
fn test_missing_definition_reports_only_structure() {
    let mut asset = valid_term("cat-001", "Asset");
    asset.as_object_mut().unwrap().remove("definition");
    let result = lint(&[tenant(), asset]);

    assert_eq!(count(&result, FindingCode::MissingField), 1);
    assert_eq!(count(&result, FindingCode::DefinitionLengthWarning), 0);
    assert_eq!(count(&result, FindingCode::PunctuationWarning), 0);
}

#[test]
fn test_every_record_is_scanned() {
    let mut first = valid_term("cat-001", "asset");
    first.as_object_mut().unwrap().remove("relationships");
    let mut second = valid_term("cat-002", "Device");
    second["metadata"]["version"] = json!("one");
    let result = lint(&[first, second, json!({})]);

    let indices: Vec<_> = result
        .report()
        .findings_by_level(Level::Error)
        .iter()
        .map(|finding| finding.record.index)
        .collect();
    assert!(indices.contains(&0));
    assert!(indices.contains(&1));
    assert!(indices.contains(&2));
}

#[test]
fn test_runs_are_idempotent() {
    let mut asset = valid_term("cat-001", "asset");
    asset["x_note"] = json!("draft");
    let records = [tenant(), asset, valid_term("cat-001", "Device")];

    let formatter = JsonFormatter::with_config(FormatterConfig::plain());
    let first = formatter.format(&lint(&records)).unwrap();
    let second = formatter.format(&lint(&records)).unwrap();
    assert_eq!(first, second);

    let human = HumanFormatter::with_config(FormatterConfig::plain());
    assert_eq!(
        human.format(&lint(&records)).unwrap(),
        human.format(&lint(&records)).unwrap()
    );
}

#[test]
fn test_warnings_never_fail_a_run() {
    let mut asset = valid_term("cat-001", "Asset");
    asset["definition"] = json!("short and lowercase");
    asset["synonyms"] = json!([]);
    asset["x_reviewer"] = json!("alice");
    asset["relationships"] = json!(["Widget governs Nowhere"]);
    let result = lint(&[tenant(), asset]);

    assert!(result.stats().warning_count >= 6);
    assert_eq!(result.stats().error_count, 0);
    assert_eq!(result.exit_code(), 0);
}

#[test]
fn test_registry_and_reference_configuration() {
    let mut asset = valid_term("cat-001", "Asset");
    asset["relationships"] = json!(["Asset belongsTo tenant"]);
    let records = [tenant(), asset];

    let lenient = lint(&records);
    assert_eq!(count(&lenient, FindingCode::DanglingReference), 0);

    let strict = lint_with(
        &records,
        LintConfig::default()
            .with_registry("registry.example")
            .with_reference_matching(catmip_lint::config::ReferenceMatching::Exact),
    );
    assert_eq!(count(&strict, FindingCode::DanglingReference), 1);
    assert_eq!(count(&strict, FindingCode::InvalidRegistry), 2);
}
