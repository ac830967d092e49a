//! Lint result types.

use super::{Finding, Level};
use crate::document::{fields, TermCollection};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Statistics about the collection and the findings of a run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LintStats {
    /// Number of records in the document
    pub total_terms: usize,
    /// Records with a non-empty `synonyms` list
    pub terms_with_synonyms: usize,
    /// Records with a non-empty `relationships` list
    pub terms_with_relationships: usize,
    /// Records with a non-empty `prompt_examples` list
    pub terms_with_prompt_examples: usize,
    /// Records with a non-empty `agent_execution` object
    pub terms_with_agent_execution: usize,
    /// Number of error-level findings
    pub error_count: usize,
    /// Number of warning-level findings
    pub warning_count: usize,
    /// Number of info-level findings
    pub info_count: usize,
    /// Sum of synonym list lengths
    pub total_synonyms: usize,
    /// Sum of relationship list lengths
    pub total_relationships: usize,
    /// Mean definition length in characters, rounded down
    pub average_definition_length: usize,
    /// Term count per `metadata.author`
    pub authors: BTreeMap<String, usize>,
}

impl LintStats {
    /// Computes the collection statistics. Finding counts start at zero.
    pub fn collect(collection: &TermCollection) -> Self {
        let mut stats = Self {
            total_terms: collection.len(),
            ..Self::default()
        };
        let mut definition_chars = 0usize;
        let mut definitions = 0usize;

        for record in collection {
            if record.has_items(fields::SYNONYMS) {
                stats.terms_with_synonyms += 1;
                stats.total_synonyms += record.array(fields::SYNONYMS).map_or(0, <[_]>::len);
            }
            if record.has_items(fields::RELATIONSHIPS) {
                stats.terms_with_relationships += 1;
                stats.total_relationships +=
                    record.array(fields::RELATIONSHIPS).map_or(0, <[_]>::len);
            }
            if record.has_items(fields::PROMPT_EXAMPLES) {
                stats.terms_with_prompt_examples += 1;
            }
            if record
                .object(fields::AGENT_EXECUTION)
                .is_some_and(|block| !block.is_empty())
            {
                stats.terms_with_agent_execution += 1;
            }
            if let Some(definition) = record.definition() {
                definition_chars += definition.chars().count();
                definitions += 1;
            }
            if let Some(author) = record
                .metadata()
                .and_then(|meta| meta.get(fields::AUTHOR))
                .and_then(|author| author.as_str())
            {
                *stats.authors.entry(author.to_string()).or_default() += 1;
            }
        }

        if definitions > 0 {
            stats.average_definition_length = definition_chars / definitions;
        }
        stats
    }

    /// Sets the per-level finding counts.
    pub fn count_findings(&mut self, findings: &[Finding]) {
        self.error_count = 0;
        self.warning_count = 0;
        self.info_count = 0;
        for finding in findings {
            match finding.level {
                Level::Error => self.error_count += 1,
                Level::Warning => self.warning_count += 1,
                Level::Info => self.info_count += 1,
            }
        }
    }
}

/// A lint report containing every finding of a run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LintReport {
    /// The name of the lint suite that was run
    pub suite_name: String,
    /// Where the document was loaded from, if known
    #[serde(skip_serializing_if = "Option::is_none")]
    pub document: Option<String>,
    /// Timestamp when the run finished (ISO 8601 format)
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub timestamp: String,
    /// True iff there are no error-level findings
    pub passed: bool,
    /// Collection and finding statistics
    pub stats: LintStats,
    /// Findings ordered by record, then by descending severity
    pub findings: Vec<Finding>,
}

impl LintReport {
    /// Creates an empty, passing report.
    pub fn new(suite_name: impl Into<String>) -> Self {
        Self {
            suite_name: suite_name.into(),
            document: None,
            timestamp: chrono::Utc::now().to_rfc3339(),
            passed: true,
            stats: LintStats::default(),
            findings: Vec::new(),
        }
    }

    /// Adds a finding and keeps `passed` and the counts in sync.
    pub fn add_finding(&mut self, finding: Finding) {
        match finding.level {
            Level::Error => {
                self.stats.error_count += 1;
                self.passed = false;
            }
            Level::Warning => self.stats.warning_count += 1,
            Level::Info => self.stats.info_count += 1,
        }
        self.findings.push(finding);
    }

    /// Returns true if there are any error-level findings.
    pub fn has_errors(&self) -> bool {
        self.findings.iter().any(Finding::is_error)
    }

    /// Returns true if there are any warning-level findings.
    pub fn has_warnings(&self) -> bool {
        self.findings
            .iter()
            .any(|finding| finding.level == Level::Warning)
    }

    /// Gets all findings of a specific level.
    pub fn findings_by_level(&self, level: Level) -> Vec<&Finding> {
        self.findings
            .iter()
            .filter(|finding| finding.level == level)
            .collect()
    }
}

/// The result of running a lint suite.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum LintResult {
    /// No error-level findings; warnings and info may be present
    Success {
        /// Detailed report
        report: LintReport,
    },
    /// At least one error-level finding
    Failure {
        /// Detailed report
        report: LintReport,
    },
}

impl LintResult {
    /// Wraps a report, choosing the variant from its error findings.
    pub fn from_report(mut report: LintReport) -> Self {
        report.passed = !report.has_errors();
        if report.passed {
            LintResult::Success { report }
        } else {
            LintResult::Failure { report }
        }
    }

    /// Returns true if the lint run passed.
    pub fn is_success(&self) -> bool {
        matches!(self, LintResult::Success { .. })
    }

    /// Returns true if the lint run failed.
    pub fn is_failure(&self) -> bool {
        matches!(self, LintResult::Failure { .. })
    }

    /// Returns the lint report.
    pub fn report(&self) -> &LintReport {
        match self {
            LintResult::Success { report } | LintResult::Failure { report } => report,
        }
    }

    /// Returns the report statistics.
    pub fn stats(&self) -> &LintStats {
        &self.report().stats
    }

    /// Returns the process exit status for this result: 0 on success, 1 otherwise.
    pub fn exit_code(&self) -> i32 {
        if self.is_success() {
            0
        } else {
            1
        }
    }

    /// Formats the result as pretty-printed JSON.
    pub fn to_json(&self) -> crate::prelude::Result<String> {
        use crate::formatters::{JsonFormatter, ResultFormatter};
        JsonFormatter::new().format(self)
    }

    /// Formats the result for console display.
    pub fn to_human(&self) -> crate::prelude::Result<String> {
        use crate::formatters::{HumanFormatter, ResultFormatter};
        HumanFormatter::new().format(self)
    }

    /// Formats the result as Markdown.
    pub fn to_markdown(&self) -> crate::prelude::Result<String> {
        use crate::formatters::{MarkdownFormatter, ResultFormatter};
        MarkdownFormatter::new().format(self)
    }

    /// Formats the result using a custom formatter.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use catmip_lint::core::{LintReport, LintResult};
    /// use catmip_lint::formatters::{FormatterConfig, HumanFormatter};
    ///
    /// let result = LintResult::from_report(LintReport::new("cat-mip"));
    /// let formatter = HumanFormatter::with_config(FormatterConfig::plain());
    /// let output = result.format_with(&formatter).unwrap();
    /// assert!(output.contains("Validation PASSED"));
    /// ```
    pub fn format_with<F: crate::formatters::ResultFormatter>(
        &self,
        formatter: &F,
    ) -> crate::prelude::Result<String> {
        formatter.format(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::FindingCode;
    use crate::test_fixtures::{collection, record, valid_term};
    use serde_json::json;

    #[test]
    fn test_stats_collect() {
        let mut with_everything = valid_term("cat-001", "Asset");
        with_everything["agent_execution"] =
            json!({"interpretation": "Find the asset", "actions": ["lookup"]});
        with_everything["prompt_examples"] = json!(["Where is my asset?"]);

        let mut bare = valid_term("cat-002", "Tenant");
        bare["synonyms"] = json!([]);
        bare.as_object_mut().unwrap().remove("relationships");
        bare["metadata"]["author"] = json!("someone-else");

        let stats = LintStats::collect(&collection(vec![with_everything, bare]));

        assert_eq!(stats.total_terms, 2);
        assert_eq!(stats.terms_with_synonyms, 1);
        assert_eq!(stats.terms_with_relationships, 1);
        assert_eq!(stats.terms_with_prompt_examples, 1);
        assert_eq!(stats.terms_with_agent_execution, 1);
        assert_eq!(stats.total_synonyms, 2);
        assert_eq!(stats.total_relationships, 1);
        assert_eq!(stats.authors.get("cat-mip-team"), Some(&1));
        assert_eq!(stats.authors.get("someone-else"), Some(&1));
        assert!(stats.average_definition_length >= 50);
    }

    #[test]
    fn test_stats_empty_collection() {
        let stats = LintStats::collect(&collection(vec![]));
        assert_eq!(stats, LintStats::default());
    }

    #[test]
    fn test_report_tracks_errors() {
        let term = record(0, json!({"id": "cat-001"}));
        let mut report = LintReport::new("test_suite");
        assert!(report.passed);

        report.add_finding(Finding::new(FindingCode::UnknownField, &term, "extra"));
        assert!(report.passed);
        assert!(report.has_warnings());

        report.add_finding(Finding::new(FindingCode::MissingField, &term, "missing"));
        assert!(!report.passed);
        assert_eq!(report.stats.error_count, 1);
        assert_eq!(report.stats.warning_count, 1);
        assert_eq!(report.findings_by_level(Level::Error).len(), 1);
    }

    #[test]
    fn test_result_from_report() {
        let term = record(0, json!({"id": "cat-001"}));
        let mut report = LintReport::new("test_suite");
        report.add_finding(Finding::new(FindingCode::PunctuationWarning, &term, "w"));

        let result = LintResult::from_report(report.clone());
        assert!(result.is_success());
        assert_eq!(result.exit_code(), 0);

        report.add_finding(Finding::new(FindingCode::DuplicateId, &term, "dup"));
        let result = LintResult::from_report(report);
        assert!(result.is_failure());
        assert_eq!(result.exit_code(), 1);
        assert!(!result.report().passed);
    }

    #[test]
    fn test_result_serializes_status_tag() {
        let result = LintResult::from_report(LintReport::new("test_suite"));
        let value = serde_json::to_value(&result).unwrap();
        assert_eq!(value["status"], "success");
        assert_eq!(value["report"]["passed"], true);
        assert_eq!(value["report"]["stats"]["total_terms"], 0);
    }
}
