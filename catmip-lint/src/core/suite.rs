//! Lint suite for organizing and running rules.

use super::{BoxedRule, Finding, LintContext, LintReport, LintResult, LintStats, Rule};
use crate::config::LintConfig;
use crate::document::TermCollection;
use crate::logging::LogConfig;
use crate::rules::{MetadataRule, QualityRule, RelationshipRule, StructureRule, UniquenessRule};
use crate::{log_finding, log_rule};
use std::sync::Arc;
use std::time::Instant;
use tracing::{info, instrument};

/// A collection of lint rules run together over one document.
///
/// Every rule sees the same immutable [`LintContext`]. Their findings are
/// merged and ordered by record, then by descending severity, then by rule
/// order, so a run over the same document always yields the same report.
///
/// # Examples
///
/// ```rust
/// use catmip_lint::config::LintConfig;
/// use catmip_lint::core::LintSuite;
/// use catmip_lint::document::TermCollection;
///
/// let suite = LintSuite::standard(LintConfig::default());
/// let result = suite.run(&TermCollection::from_slice(b"[]").unwrap());
///
/// assert!(result.is_success());
/// assert_eq!(result.stats().total_terms, 0);
/// assert_eq!(result.exit_code(), 0);
/// ```
#[derive(Debug, Clone)]
pub struct LintSuite {
    /// The name of the lint suite
    name: String,
    /// Optional description of the suite's purpose
    description: Option<String>,
    /// The rules to run, in order
    rules: Vec<Arc<dyn Rule>>,
    /// Registry, predicates and thresholds used by the rules
    config: LintConfig,
    /// Controls per-rule and per-finding logging
    log_config: LogConfig,
}

impl LintSuite {
    /// Creates a new builder for constructing a lint suite.
    pub fn builder(name: impl Into<String>) -> LintSuiteBuilder {
        LintSuiteBuilder::new(name)
    }

    /// Creates the suite with all five standard rules.
    pub fn standard(config: LintConfig) -> Self {
        Self::builder("cat-mip")
            .description("CAT-MIP terminology dictionary lint")
            .config(config)
            .with_standard_rules()
            .build()
    }

    /// Returns the name of the lint suite.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the description of the lint suite if available.
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Returns the rules in this lint suite.
    pub fn rules(&self) -> &[Arc<dyn Rule>] {
        &self.rules
    }

    /// Returns the configuration the rules run with.
    pub fn config(&self) -> &LintConfig {
        &self.config
    }

    /// Runs every rule over the collection and builds the result.
    #[instrument(skip_all, fields(
        suite.name = %self.name,
        suite.rules = self.rules.len(),
        document.records = collection.len()
    ))]
    pub fn run(&self, collection: &TermCollection) -> LintResult {
        info!(
            suite.name = %self.name,
            suite.rules = self.rules.len(),
            document.source = ?collection.source(),
            "Starting lint suite"
        );
        let start_time = Instant::now();
        let ctx = LintContext::new(collection, &self.config);

        let mut findings: Vec<Finding> = Vec::new();
        for rule in &self.rules {
            let rule_start = Instant::now();
            let rule_findings = rule.evaluate(&ctx);
            log_rule!(
                self.log_config,
                rule.name = %rule.name(),
                rule.findings = rule_findings.len(),
                rule.duration_us = rule_start.elapsed().as_micros() as u64,
                "Rule evaluated"
            );
            findings.extend(rule_findings);
        }

        // Stable sort keeps rule order within a record and level.
        findings.sort_by(|a, b| {
            a.record
                .index
                .cmp(&b.record.index)
                .then_with(|| b.level.cmp(&a.level))
        });

        let mut report = LintReport::new(&self.name);
        report.document = collection.source().map(str::to_string);
        report.stats = LintStats::collect(collection);
        for finding in findings {
            log_finding!(
                self.log_config,
                finding.code = %finding.code,
                finding.level = %finding.level,
                finding.record = finding.record.index,
                "{}",
                crate::logging::truncate_field(&finding.message, self.log_config.max_field_length)
            );
            report.add_finding(finding);
        }

        let result = LintResult::from_report(report);
        let stats = result.stats();
        info!(
            suite.name = %self.name,
            stats.terms = stats.total_terms,
            stats.errors = stats.error_count,
            stats.warnings = stats.warning_count,
            stats.info = stats.info_count,
            suite.duration_ms = start_time.elapsed().as_millis() as u64,
            suite.result = %if result.is_success() { "passed" } else { "failed" },
            "Lint suite completed"
        );
        result
    }
}

/// Builder for constructing `LintSuite` instances.
///
/// # Examples
///
/// ```rust
/// use catmip_lint::core::LintSuite;
/// use catmip_lint::rules::{StructureRule, UniquenessRule};
///
/// let suite = LintSuite::builder("structure_only")
///     .description("Structural checks without content heuristics")
///     .rule(StructureRule::new())
///     .rule(UniquenessRule::new())
///     .build();
///
/// assert_eq!(suite.rules().len(), 2);
/// ```
#[derive(Debug)]
pub struct LintSuiteBuilder {
    name: String,
    description: Option<String>,
    rules: Vec<Arc<dyn Rule>>,
    config: LintConfig,
    log_config: LogConfig,
}

impl LintSuiteBuilder {
    /// Creates a new lint suite builder with the given name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
            rules: Vec::new(),
            config: LintConfig::default(),
            log_config: LogConfig::default(),
        }
    }

    /// Sets the description for the lint suite.
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the configuration the rules run with.
    pub fn config(mut self, config: LintConfig) -> Self {
        self.config = config;
        self
    }

    /// Sets the logging configuration.
    pub fn log_config(mut self, log_config: LogConfig) -> Self {
        self.log_config = log_config;
        self
    }

    /// Adds a rule to the suite.
    pub fn rule(mut self, rule: impl Rule + 'static) -> Self {
        self.rules.push(Arc::new(rule));
        self
    }

    /// Adds multiple boxed rules to the suite.
    pub fn rules<I>(mut self, rules: I) -> Self
    where
        I: IntoIterator<Item = BoxedRule>,
    {
        self.rules.extend(rules.into_iter().map(Arc::from));
        self
    }

    /// Adds the structure, metadata, uniqueness, relationship and quality rules.
    pub fn with_standard_rules(self) -> Self {
        self.rule(StructureRule::new())
            .rule(MetadataRule::new())
            .rule(UniquenessRule::new())
            .rule(RelationshipRule::new())
            .rule(QualityRule::new())
    }

    /// Builds the `LintSuite` instance.
    pub fn build(self) -> LintSuite {
        LintSuite {
            name: self.name,
            description: self.description,
            rules: self.rules,
            config: self.config,
            log_config: self.log_config,
        }
    }
}
