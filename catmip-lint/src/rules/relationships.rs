//! Relationship pattern and cross-reference validation.
//!
//! A relationship is a `Subject predicate Object` triple written as one
//! whitespace-separated string, e.g. `Asset belongsTo Tenant`. Only the
//! shape of the triple is an error; an unknown predicate or an object with
//! no term of its own is a warning, because the predicate set is open and
//! objects may name categories that are not modeled yet.

use crate::core::{Finding, FindingCode, LintContext, Rule};
use crate::document::{fields, TermRecord};
use crate::logging::truncate_field;
use std::fmt;

/// Longest relationship text quoted in a finding message.
const QUOTE_LENGTH: usize = 50;

/// Why a relationship string is not a well-formed triple.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MalformedReason {
    /// The string does not split into exactly three tokens.
    TokenCount(usize),
    /// The subject does not start with an uppercase letter.
    LowercaseSubject,
}

impl fmt::Display for MalformedReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MalformedReason::TokenCount(count) => write!(
                f,
                "expected 'Subject predicate Object' (3 parts), found {count}"
            ),
            MalformedReason::LowercaseSubject => {
                write!(f, "subject must start with an uppercase letter")
            }
        }
    }
}

/// A parsed `Subject predicate Object` triple borrowing from its source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Relationship<'a> {
    pub subject: &'a str,
    pub predicate: &'a str,
    pub object: &'a str,
}

impl<'a> Relationship<'a> {
    /// Splits `text` on whitespace into a triple.
    ///
    /// ```rust
    /// use catmip_lint::rules::{MalformedReason, Relationship};
    ///
    /// let rel = Relationship::parse("Asset belongsTo Tenant").unwrap();
    /// assert_eq!(rel.predicate, "belongsTo");
    ///
    /// assert_eq!(Relationship::parse("Asset belongsTo"), Err(MalformedReason::TokenCount(2)));
    /// assert_eq!(
    ///     Relationship::parse("asset belongsTo Tenant"),
    ///     Err(MalformedReason::LowercaseSubject)
    /// );
    /// ```
    pub fn parse(text: &'a str) -> std::result::Result<Self, MalformedReason> {
        let tokens: Vec<&str> = text.split_whitespace().collect();
        let &[subject, predicate, object] = tokens.as_slice() else {
            return Err(MalformedReason::TokenCount(tokens.len()));
        };
        if !super::starts_uppercase(subject) {
            return Err(MalformedReason::LowercaseSubject);
        }
        Ok(Self {
            subject,
            predicate,
            object,
        })
    }

    /// The object with surrounding punctuation removed, as used for lookups.
    pub fn object_term(&self) -> &'a str {
        self.object
            .trim_matches(|c: char| matches!(c, '(' | ')' | ',' | '.'))
    }
}

/// Folds case and drops separators so `Service Desk`, `service-desk` and
/// `ServiceDesk` compare equal.
fn normalize(term: &str) -> String {
    term.chars()
        .filter(|c| !c.is_whitespace() && *c != '-' && *c != '_')
        .flat_map(char::to_lowercase)
        .collect()
}

/// Checks each relationship string of each record.
///
/// Emits, per relationship:
///
/// - `MalformedRelationship` (error) for a string that is not a triple with
///   a capitalized subject; nothing else is checked for it
/// - `UnrecognizedPredicate` (warning) for a verb outside the configured set
/// - `DanglingReference` (warning) for an object that names no record
/// - `CrossReference` (info) for an object that names another record
/// - `SubjectMismatch` (info) for a subject that is neither the record's
///   canonical term nor one of its synonyms
///
/// Non-string items and non-array `relationships` values are left to the
/// structure rule.
#[derive(Debug, Clone, Default)]
pub struct RelationshipRule;

impl RelationshipRule {
    pub fn new() -> Self {
        Self
    }

    fn subject_aliases(record: &TermRecord) -> Option<Vec<String>> {
        let canonical = record.canonical_term()?;
        let mut aliases = vec![normalize(canonical)];
        aliases.extend(record.strings(fields::SYNONYMS).into_iter().map(normalize));
        Some(aliases)
    }
}

impl Rule for RelationshipRule {
    fn name(&self) -> &str {
        "relationships"
    }

    fn description(&self) -> Option<&str> {
        Some("Relationship triples, predicate set and cross references")
    }

    fn check_record(&self, record: &TermRecord, ctx: &LintContext<'_>) -> Vec<Finding> {
        let Some(items) = record.array(fields::RELATIONSHIPS) else {
            return Vec::new();
        };
        let aliases = Self::subject_aliases(record);
        let matching = ctx.config().reference_matching;
        let own_key = record.canonical_term().map(|term| matching.key(term));
        let mut findings = Vec::new();

        for (position, item) in items.iter().enumerate() {
            let Some(text) = item.as_str() else {
                continue;
            };
            let path = format!("{}[{position}]", fields::RELATIONSHIPS);

            let relationship = match Relationship::parse(text) {
                Ok(relationship) => relationship,
                Err(reason) => {
                    findings.push(
                        Finding::new(
                            FindingCode::MalformedRelationship,
                            record,
                            format!(
                                "Malformed relationship '{}': {reason}",
                                truncate_field(text, QUOTE_LENGTH)
                            ),
                        )
                        .with_field(path),
                    );
                    continue;
                }
            };

            if !ctx.config().predicates.contains(relationship.predicate) {
                findings.push(
                    Finding::new(
                        FindingCode::UnrecognizedPredicate,
                        record,
                        format!(
                            "Unrecognized predicate '{}' in '{}'",
                            relationship.predicate,
                            truncate_field(text, QUOTE_LENGTH)
                        ),
                    )
                    .with_field(path.as_str()),
                );
            }

            let object = relationship.object_term();
            // A duplicated canonical term resolves to its first holder.
            let is_self = own_key.as_deref() == Some(matching.key(object).as_str());
            match ctx.resolve_term(object) {
                None => findings.push(
                    Finding::new(
                        FindingCode::DanglingReference,
                        record,
                        format!(
                            "Relationship object '{object}' does not match any canonical term"
                        ),
                    )
                    .with_field(path.as_str()),
                ),
                Some(target) if !is_self => findings.push(
                    Finding::new(
                        FindingCode::CrossReference,
                        record,
                        format!(
                            "References '{}' in relationships",
                            target.canonical_term().unwrap_or(object)
                        ),
                    )
                    .with_field(path.as_str())
                    .with_related(target.record_ref()),
                ),
                Some(_) => {}
            }

            if let Some(aliases) = &aliases {
                if !aliases.contains(&normalize(relationship.subject)) {
                    findings.push(
                        Finding::new(
                            FindingCode::SubjectMismatch,
                            record,
                            format!(
                                "Subject '{}' is neither the canonical term nor a synonym",
                                relationship.subject
                            ),
                        )
                        .with_field(path),
                    );
                }
            }
        }

        findings
    }
}
