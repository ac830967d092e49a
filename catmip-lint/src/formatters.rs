//! Result formatting and reporting for lint results.
//!
//! This module provides different formatters for lint results, allowing
//! users to output results as human-readable console text, as JSON for
//! tooling, or as Markdown for pull request comments and documentation.
//!
//! # Examples
//!
//! ```rust
//! use catmip_lint::core::{LintReport, LintResult};
//! use catmip_lint::formatters::{FormatterConfig, HumanFormatter, ResultFormatter};
//!
//! let result = LintResult::from_report(LintReport::new("cat-mip"));
//! let formatter = HumanFormatter::with_config(FormatterConfig::plain());
//! let output = formatter.format(&result).unwrap();
//! assert!(output.contains("✅ Validation PASSED"));
//! ```

use crate::core::{Finding, Level, LintReport, LintResult, LintStats};
use crate::prelude::*;
use std::fmt::Write;

const RULE: &str = "============================================================";

/// Configuration options for formatting lint results.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormatterConfig {
    /// Show only errors and the verdict; print nothing when there are no errors
    pub quiet: bool,
    /// Include the statistics block
    pub include_stats: bool,
    /// Maximum number of findings per severity section (`None` for all)
    pub max_findings: Option<usize>,
    /// Whether to use ANSI colors (human formatter)
    pub use_colors: bool,
    /// Whether to include the run timestamp
    pub include_timestamps: bool,
}

impl Default for FormatterConfig {
    fn default() -> Self {
        Self {
            quiet: false,
            include_stats: true,
            max_findings: None,
            use_colors: true,
            include_timestamps: false,
        }
    }
}

impl FormatterConfig {
    /// Creates a configuration without colors, suitable for files and pipes.
    pub fn plain() -> Self {
        Self::default().with_colors(false)
    }

    /// Creates a configuration showing only errors and the verdict.
    pub fn minimal() -> Self {
        Self {
            quiet: true,
            include_stats: false,
            max_findings: None,
            use_colors: false,
            include_timestamps: false,
        }
    }

    /// Creates a detailed configuration showing everything.
    pub fn detailed() -> Self {
        Self {
            quiet: false,
            include_stats: true,
            max_findings: None,
            use_colors: true,
            include_timestamps: true,
        }
    }

    /// Creates a configuration suitable for CI/CD environments.
    pub fn ci() -> Self {
        Self {
            quiet: false,
            include_stats: true,
            max_findings: Some(50),
            use_colors: false,
            include_timestamps: true,
        }
    }

    /// Sets quiet mode.
    pub fn with_quiet(mut self, quiet: bool) -> Self {
        self.quiet = quiet;
        self
    }

    /// Sets whether to include the statistics block.
    pub fn with_stats(mut self, include: bool) -> Self {
        self.include_stats = include;
        self
    }

    /// Sets the maximum number of findings shown per severity section.
    pub fn with_max_findings(mut self, max: Option<usize>) -> Self {
        self.max_findings = max;
        self
    }

    /// Sets whether to use colorized output.
    pub fn with_colors(mut self, use_colors: bool) -> Self {
        self.use_colors = use_colors;
        self
    }

    /// Sets whether to include the run timestamp.
    pub fn with_timestamps(mut self, include: bool) -> Self {
        self.include_timestamps = include;
        self
    }

    /// Returns the finding levels shown, most severe first.
    fn visible_levels(&self) -> &'static [Level] {
        if self.quiet {
            &[Level::Error]
        } else {
            &[Level::Error, Level::Warning, Level::Info]
        }
    }

    /// Splits `findings` into the shown prefix and the number hidden.
    fn cap<'a>(&self, findings: &'a [&'a Finding]) -> (&'a [&'a Finding], usize) {
        match self.max_findings {
            Some(max) if findings.len() > max => (&findings[..max], findings.len() - max),
            _ => (findings, 0),
        }
    }
}

/// Trait for formatting lint results into different output formats.
///
/// # Examples
///
/// ```rust
/// use catmip_lint::core::LintResult;
/// use catmip_lint::formatters::ResultFormatter;
///
/// struct ExitLine;
///
/// impl ResultFormatter for ExitLine {
///     fn format(&self, result: &LintResult) -> catmip_lint::prelude::Result<String> {
///         Ok(format!("errors={}", result.stats().error_count))
///     }
/// }
/// ```
pub trait ResultFormatter {
    /// Formats a lint result into a string representation.
    fn format(&self, result: &LintResult) -> Result<String>;

    /// Formats a lint result with custom configuration.
    fn format_with_config(&self, result: &LintResult, _config: &FormatterConfig) -> Result<String> {
        self.format(result)
    }
}

/// Formats lint results as structured JSON.
///
/// The output is lossless: every finding is serialized regardless of
/// `quiet` and `max_findings`. Only the timestamp follows the configuration.
#[derive(Debug, Clone)]
pub struct JsonFormatter {
    config: FormatterConfig,
    pretty: bool,
}

impl JsonFormatter {
    /// Creates a new JSON formatter with default configuration.
    pub fn new() -> Self {
        Self {
            config: FormatterConfig::default(),
            pretty: true,
        }
    }

    /// Creates a new JSON formatter with the specified configuration.
    pub fn with_config(config: FormatterConfig) -> Self {
        Self {
            config,
            pretty: true,
        }
    }

    /// Sets whether to use pretty-printed JSON.
    pub fn with_pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }
}

impl Default for JsonFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl ResultFormatter for JsonFormatter {
    fn format(&self, result: &LintResult) -> Result<String> {
        self.format_with_config(result, &self.config)
    }

    fn format_with_config(&self, result: &LintResult, config: &FormatterConfig) -> Result<String> {
        let filtered = filter_result_for_config(result, config);
        let output = if self.pretty {
            serde_json::to_string_pretty(&filtered)
        } else {
            serde_json::to_string(&filtered)
        };
        output.map_err(|e| LintError::Serialization(format!("Failed to serialize result to JSON: {e}")))
    }
}

/// Formats lint results for console output.
///
/// Findings are grouped into error, warning and info sections, followed by
/// the verdict and, optionally, the statistics block.
#[derive(Debug, Clone)]
pub struct HumanFormatter {
    config: FormatterConfig,
}

impl HumanFormatter {
    /// Creates a new human formatter with default configuration.
    pub fn new() -> Self {
        Self {
            config: FormatterConfig::default(),
        }
    }

    /// Creates a new human formatter with the specified configuration.
    pub fn with_config(config: FormatterConfig) -> Self {
        Self { config }
    }

    fn paint(text: &str, color: &str, config: &FormatterConfig) -> String {
        if config.use_colors {
            format!("\x1b[{color}m{text}\x1b[0m")
        } else {
            text.to_string()
        }
    }

    fn level_color(level: Level) -> &'static str {
        match level {
            Level::Error => "31",
            Level::Warning => "33",
            Level::Info => "34",
        }
    }

    fn section_title(level: Level) -> &'static str {
        match level {
            Level::Error => "ERRORS",
            Level::Warning => "WARNINGS",
            Level::Info => "INFO",
        }
    }

    fn write_results(
        output: &mut String,
        result: &LintResult,
        config: &FormatterConfig,
    ) -> Result<()> {
        let report = result.report();

        writeln!(output, "{RULE}")?;
        writeln!(output, "CAT-MIP Terms Lint Results")?;
        writeln!(output, "{RULE}")?;
        if let Some(document) = &report.document {
            writeln!(output, "Document: {document}")?;
        }
        if config.include_timestamps && !report.timestamp.is_empty() {
            writeln!(output, "Timestamp: {}", report.timestamp)?;
        }

        for &level in config.visible_levels() {
            let findings = report.findings_by_level(level);
            if findings.is_empty() {
                continue;
            }
            let (shown, hidden) = config.cap(&findings);
            let title = format!(
                "{} {} ({}):",
                level.icon(),
                Self::section_title(level),
                findings.len()
            );

            writeln!(output)?;
            writeln!(output, "{}", Self::paint(&title, Self::level_color(level), config))?;
            for finding in shown {
                writeln!(output, "  • {finding}")?;
            }
            if hidden > 0 {
                writeln!(output, "  ... and {hidden} more {}", level.as_str())?;
            }
        }

        writeln!(output)?;
        writeln!(output, "{RULE}")?;
        if result.is_success() {
            writeln!(output, "{}", Self::paint("✅ Validation PASSED", "32", config))?;
        } else {
            writeln!(output, "{}", Self::paint("❌ Validation FAILED", "31", config))?;
        }
        writeln!(output, "{RULE}")?;
        Ok(())
    }

    fn write_stats(output: &mut String, stats: &LintStats) -> Result<()> {
        if !output.is_empty() {
            writeln!(output)?;
        }
        writeln!(output, "📊 STATISTICS:")?;
        writeln!(output, "  Total terms: {}", stats.total_terms)?;
        writeln!(output, "  Terms with synonyms: {}", stats.terms_with_synonyms)?;
        writeln!(output, "  Terms with relationships: {}", stats.terms_with_relationships)?;
        writeln!(output, "  Terms with examples: {}", stats.terms_with_prompt_examples)?;
        writeln!(
            output,
            "  Terms with agent execution: {}",
            stats.terms_with_agent_execution
        )?;
        writeln!(output, "  Total synonyms: {}", stats.total_synonyms)?;
        writeln!(output, "  Total relationships: {}", stats.total_relationships)?;
        writeln!(
            output,
            "  Average definition length: {} chars",
            stats.average_definition_length
        )?;
        writeln!(
            output,
            "  Findings: {} errors, {} warnings, {} info",
            stats.error_count, stats.warning_count, stats.info_count
        )?;
        if !stats.authors.is_empty() {
            writeln!(output)?;
            writeln!(output, "  Authors:")?;
            for (author, count) in &stats.authors {
                writeln!(output, "    • {author}: {count} terms")?;
            }
        }
        Ok(())
    }
}

impl Default for HumanFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl ResultFormatter for HumanFormatter {
    fn format(&self, result: &LintResult) -> Result<String> {
        self.format_with_config(result, &self.config)
    }

    fn format_with_config(&self, result: &LintResult, config: &FormatterConfig) -> Result<String> {
        let mut output = String::new();

        if !config.quiet || result.report().has_errors() {
            Self::write_results(&mut output, result, config)?;
        }
        if config.include_stats {
            Self::write_stats(&mut output, result.stats())?;
        }
        Ok(output)
    }
}

/// Formats lint results as Markdown suitable for documentation.
#[derive(Debug, Clone)]
pub struct MarkdownFormatter {
    config: FormatterConfig,
    heading_level: u8,
}

impl MarkdownFormatter {
    /// Creates a new Markdown formatter with default configuration.
    pub fn new() -> Self {
        Self {
            config: FormatterConfig::default(),
            heading_level: 2,
        }
    }

    /// Creates a new Markdown formatter with the specified configuration.
    pub fn with_config(config: FormatterConfig) -> Self {
        Self {
            config,
            heading_level: 2,
        }
    }

    /// Sets the base heading level for the output.
    pub fn with_heading_level(mut self, level: u8) -> Self {
        self.heading_level = level.clamp(1, 5);
        self
    }
}

impl Default for MarkdownFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl ResultFormatter for MarkdownFormatter {
    fn format(&self, result: &LintResult) -> Result<String> {
        self.format_with_config(result, &self.config)
    }

    fn format_with_config(&self, result: &LintResult, config: &FormatterConfig) -> Result<String> {
        let mut output = String::new();
        let report = result.report();
        let h = "#".repeat(self.heading_level as usize);

        if result.is_success() {
            writeln!(output, "{h} ✅ CAT-MIP Lint Report - PASSED")?;
        } else {
            writeln!(output, "{h} ❌ CAT-MIP Lint Report - FAILED")?;
        }

        writeln!(output)?;
        writeln!(output, "**Suite:** {}", report.suite_name)?;
        if let Some(document) = &report.document {
            writeln!(output, "**Document:** `{document}`")?;
        }
        if config.include_timestamps && !report.timestamp.is_empty() {
            writeln!(output, "**Timestamp:** {}", report.timestamp)?;
        }

        if config.include_stats {
            let stats = &report.stats;
            writeln!(output)?;
            writeln!(output, "{h}# Summary")?;
            writeln!(output)?;
            writeln!(output, "| Metric | Value |")?;
            writeln!(output, "|--------|-------|")?;
            writeln!(output, "| Total terms | {} |", stats.total_terms)?;
            writeln!(output, "| Errors | {} |", stats.error_count)?;
            writeln!(output, "| Warnings | {} |", stats.warning_count)?;
            writeln!(output, "| Info | {} |", stats.info_count)?;
            writeln!(output, "| Terms with synonyms | {} |", stats.terms_with_synonyms)?;
            writeln!(
                output,
                "| Terms with relationships | {} |",
                stats.terms_with_relationships
            )?;
            writeln!(
                output,
                "| Terms with examples | {} |",
                stats.terms_with_prompt_examples
            )?;
            writeln!(
                output,
                "| Terms with agent execution | {} |",
                stats.terms_with_agent_execution
            )?;
            writeln!(
                output,
                "| Average definition length | {} |",
                stats.average_definition_length
            )?;
        }

        for &level in config.visible_levels() {
            let findings = report.findings_by_level(level);
            if findings.is_empty() {
                continue;
            }
            let (shown, hidden) = config.cap(&findings);
            let title = match level {
                Level::Error => "Errors",
                Level::Warning => "Warnings",
                Level::Info => "Info",
            };

            writeln!(output)?;
            writeln!(output, "{h}# {} {title} ({})", level.icon(), findings.len())?;
            writeln!(output)?;
            for finding in shown {
                write!(output, "- `{}` {}", finding.code, finding.record)?;
                if let Some(field) = &finding.field {
                    write!(output, " `{field}`")?;
                }
                writeln!(output, ": {}", finding.message)?;
            }
            if hidden > 0 {
                writeln!(output)?;
                writeln!(
                    output,
                    "> **Note:** {hidden} additional {} findings not shown in this report.",
                    level.as_str()
                )?;
            }
        }

        Ok(output)
    }
}

/// Applies the parts of the configuration that affect serialized output.
fn filter_result_for_config(result: &LintResult, config: &FormatterConfig) -> LintResult {
    let filter = |report: &LintReport| {
        let mut filtered = report.clone();
        if !config.include_timestamps {
            filtered.timestamp = String::new();
        }
        filtered
    };
    match result {
        LintResult::Success { report } => LintResult::Success {
            report: filter(report),
        },
        LintResult::Failure { report } => LintResult::Failure {
            report: filter(report),
        },
    }
}
