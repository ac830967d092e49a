//! CAT-MIP Terms Linter
//!
//! Validates a CAT-MIP terminology document and prints the report to stdout.
//! Exits 0 when no error-level finding was reported, 1 otherwise or when
//! the document cannot be loaded.

use anyhow::Result;
use catmip_lint::config::{LintConfig, ReferenceMatching};
use catmip_lint::core::{LintResult, LintSuite};
use catmip_lint::document::TermCollection;
use catmip_lint::error::LintError;
use catmip_lint::formatters::{
    FormatterConfig, HumanFormatter, JsonFormatter, MarkdownFormatter, ResultFormatter,
};
use catmip_lint::logging::setup::{init_logging, LoggingConfig};
use catmip_lint::logging::LogConfig;
use clap::{Parser, ValueEnum};
use std::io::IsTerminal;
use std::path::PathBuf;
use std::process;
use tracing::{debug, error, Level};

#[derive(Parser, Debug)]
#[command(author, version, about = "Lint a CAT-MIP terms.json file", long_about = None)]
struct Args {
    /// Path to the terms document
    #[arg(default_value = "terms.json")]
    file: PathBuf,

    /// Only show errors; print nothing when there are none
    #[arg(long)]
    quiet: bool,

    /// Show statistics about the terms
    #[arg(long)]
    stats: bool,

    /// Output results as JSON (same as --format json)
    #[arg(long, conflicts_with = "format")]
    json: bool,

    /// Output format
    #[arg(long, value_enum)]
    format: Option<OutputFormat>,

    /// Additional recognized relationship predicate (repeatable)
    #[arg(long = "predicate", value_name = "VERB")]
    predicates: Vec<String>,

    /// Required value of metadata.registry
    #[arg(long)]
    registry: Option<String>,

    /// How relationship objects are matched against canonical terms
    #[arg(long, value_enum, default_value_t = MatchingArg::CaseInsensitive)]
    reference_matching: MatchingArg,

    /// Maximum number of findings shown per severity section
    #[arg(long, value_name = "N")]
    max_findings: Option<usize>,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,

    /// Include the run timestamp in the output
    #[arg(long)]
    timestamps: bool,

    /// Log rule execution details to stderr
    #[arg(short, long)]
    verbose: bool,

    /// Emit logs as JSON lines
    #[arg(long)]
    log_json: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Human,
    Json,
    Markdown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum MatchingArg {
    Exact,
    CaseInsensitive,
}

impl From<MatchingArg> for ReferenceMatching {
    fn from(arg: MatchingArg) -> Self {
        match arg {
            MatchingArg::Exact => ReferenceMatching::Exact,
            MatchingArg::CaseInsensitive => ReferenceMatching::CaseInsensitive,
        }
    }
}

impl Args {
    fn output_format(&self) -> OutputFormat {
        if self.json {
            OutputFormat::Json
        } else {
            self.format.unwrap_or(OutputFormat::Human)
        }
    }

    fn lint_config(&self) -> Result<LintConfig, LintError> {
        let mut config = LintConfig::default()
            .with_extra_predicates(&self.predicates)?
            .with_reference_matching(self.reference_matching.into());
        if let Some(registry) = &self.registry {
            config = config.with_registry(registry.as_str());
        }
        Ok(config)
    }

    fn formatter_config(&self) -> FormatterConfig {
        FormatterConfig::default()
            .with_quiet(self.quiet)
            .with_stats(self.stats)
            .with_max_findings(self.max_findings)
            .with_colors(!self.no_color && std::io::stdout().is_terminal())
            .with_timestamps(self.timestamps)
    }

    fn logging_config(&self) -> LoggingConfig {
        match (self.log_json, self.verbose) {
            (true, true) => LoggingConfig::production().with_lint_level(Level::DEBUG),
            (true, false) => LoggingConfig::production(),
            (false, true) => LoggingConfig::development(),
            (false, false) => LoggingConfig::default(),
        }
    }
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.logging_config())?;

    let code = match run(&args) {
        Ok(result) => result.exit_code(),
        Err(e) => {
            report_fatal(&args, &e);
            1
        }
    };

    process::exit(code);
}

fn run(args: &Args) -> Result<LintResult, LintError> {
    let config = args.lint_config()?;
    let collection = TermCollection::from_path(&args.file)?;
    debug!(document.records = collection.len(), "Document loaded");

    let log_config = match (args.verbose, args.log_json) {
        (true, _) => LogConfig::verbose(),
        (false, true) => LogConfig::production(),
        (false, false) => LogConfig::default(),
    };
    let suite = LintSuite::builder("cat-mip")
        .description("CAT-MIP terminology dictionary lint")
        .config(config)
        .log_config(log_config)
        .with_standard_rules()
        .build();
    let result = suite.run(&collection);

    let formatter_config = args.formatter_config();
    let output = match args.output_format() {
        OutputFormat::Human => HumanFormatter::with_config(formatter_config).format(&result)?,
        OutputFormat::Json => JsonFormatter::with_config(formatter_config).format(&result)?,
        OutputFormat::Markdown => {
            MarkdownFormatter::with_config(formatter_config).format(&result)?
        }
    };

    if args.output_format() == OutputFormat::Json {
        println!("{output}");
    } else {
        print!("{output}");
    }
    Ok(result)
}

fn report_fatal(args: &Args, e: &LintError) {
    error!(error = %e, "Lint run aborted");

    if args.output_format() == OutputFormat::Json {
        let mut body = serde_json::json!({
            "status": "error",
            "success": false,
            "error": e.to_string(),
        });
        if let Some((line, column)) = e.position() {
            body["line"] = line.into();
            body["column"] = column.into();
        }
        match serde_json::to_string_pretty(&body) {
            Ok(text) => println!("{text}"),
            Err(_) => println!("{body}"),
        }
    } else {
        eprintln!("❌ Error: {e}");
    }
}
