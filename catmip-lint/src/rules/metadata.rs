//! Metadata block validation.

use crate::core::{Finding, FindingCode, LintContext, Rule};
use crate::document::{fields, value_kind, TermRecord};
use chrono::{NaiveDateTime, Timelike};
use once_cell::sync::Lazy;
use regex::Regex;

static TIMESTAMP_REGEX: Lazy<Regex> = Lazy::new(|| {
    #[allow(clippy::expect_used)]
    Regex::new(r"^[0-9]{4}-[0-9]{2}-[0-9]{2}T[0-9]{2}:[0-9]{2}:[0-9]{2}Z$")
        .expect("Hard-coded regex pattern should be valid")
});

static VERSION_REGEX: Lazy<Regex> = Lazy::new(|| {
    #[allow(clippy::expect_used)]
    Regex::new(r"^[0-9]+\.[0-9]+$").expect("Hard-coded regex pattern should be valid")
});

/// Returns true if `value` is a UTC timestamp of the form
/// `YYYY-MM-DDTHH:MM:SSZ` naming a real calendar date and time.
///
/// Leap seconds (`:60`) are rejected; chrono carries them as nanoseconds
/// past one second.
///
/// ```rust
/// use catmip_lint::rules::is_valid_timestamp;
///
/// assert!(is_valid_timestamp("2025-01-01T00:00:00Z"));
/// assert!(!is_valid_timestamp("2025-1-1"));
/// assert!(!is_valid_timestamp("2025-02-30T00:00:00Z"));
/// ```
pub fn is_valid_timestamp(value: &str) -> bool {
    TIMESTAMP_REGEX.is_match(value)
        && NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%SZ")
            .is_ok_and(|timestamp| timestamp.nanosecond() < 1_000_000_000)
}

/// Returns true if `value` is a `MAJOR.MINOR` version.
pub fn is_valid_version(value: &str) -> bool {
    VERSION_REGEX.is_match(value)
}

/// Checks the `metadata` block of each record.
///
/// Records without a metadata object are skipped; their absence or wrong
/// kind is reported by the structure rule.
#[derive(Debug, Clone, Default)]
pub struct MetadataRule;

impl MetadataRule {
    pub fn new() -> Self {
        Self
    }
}

impl Rule for MetadataRule {
    fn name(&self) -> &str {
        "metadata"
    }

    fn description(&self) -> Option<&str> {
        Some("Required metadata, date and version formats, registry identity")
    }

    fn check_record(&self, record: &TermRecord, ctx: &LintContext<'_>) -> Vec<Finding> {
        let Some(metadata) = record.metadata() else {
            return Vec::new();
        };
        let mut findings = Vec::new();
        let path = |name: &str| format!("{}.{name}", fields::METADATA);

        for name in fields::METADATA_REQUIRED {
            if !metadata.contains_key(name) {
                findings.push(
                    Finding::new(
                        FindingCode::MissingMetadataField,
                        record,
                        format!("Missing required metadata field '{name}'"),
                    )
                    .with_field(path(name)),
                );
            }
        }

        for (name, value) in metadata {
            if !fields::is_known_metadata(name) {
                findings.push(
                    Finding::new(
                        FindingCode::UnknownField,
                        record,
                        format!("Unknown metadata field '{name}'"),
                    )
                    .with_field(path(name)),
                );
                continue;
            }

            let Some(text) = value.as_str() else {
                findings.push(
                    Finding::new(
                        FindingCode::TypeMismatch,
                        record,
                        format!(
                            "Metadata field '{name}' must be a string, found {}",
                            value_kind(value)
                        ),
                    )
                    .with_field(path(name)),
                );
                continue;
            };

            match name.as_str() {
                fields::DATE_ADDED if !is_valid_timestamp(text) => findings.push(
                    Finding::new(
                        FindingCode::InvalidDateFormat,
                        record,
                        format!(
                            "Invalid date_added '{text}', expected YYYY-MM-DDTHH:MM:SSZ"
                        ),
                    )
                    .with_field(path(name)),
                ),
                fields::VERSION if !is_valid_version(text) => findings.push(
                    Finding::new(
                        FindingCode::InvalidVersionFormat,
                        record,
                        format!("Invalid version '{text}', expected MAJOR.MINOR"),
                    )
                    .with_field(path(name)),
                ),
                fields::REGISTRY if text != ctx.config().registry => findings.push(
                    Finding::new(
                        FindingCode::InvalidRegistry,
                        record,
                        format!(
                            "Registry must be '{}', found '{text}'",
                            ctx.config().registry
                        ),
                    )
                    .with_field(path(name)),
                ),
                _ => {}
            }
        }

        findings
    }
}
