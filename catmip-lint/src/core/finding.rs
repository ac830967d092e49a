//! Findings produced by lint rules.

use super::Level;
use crate::document::{RecordRef, TermRecord};
use serde::{Deserialize, Serialize};
use std::fmt;

/// The pipeline stage a finding belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FindingCategory {
    Structural,
    Metadata,
    Uniqueness,
    Relationship,
    Quality,
}

impl FindingCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            FindingCategory::Structural => "structural",
            FindingCategory::Metadata => "metadata",
            FindingCategory::Uniqueness => "uniqueness",
            FindingCategory::Relationship => "relationship",
            FindingCategory::Quality => "quality",
        }
    }
}

/// The kind of problem a finding reports.
///
/// Each code has a fixed [`Level`] and [`FindingCategory`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FindingCode {
    MissingField,
    UnknownField,
    InvalidCasing,
    TypeMismatch,
    MissingMetadataField,
    InvalidDateFormat,
    InvalidVersionFormat,
    InvalidRegistry,
    DuplicateId,
    DuplicateCanonicalTerm,
    MalformedRelationship,
    UnrecognizedPredicate,
    DanglingReference,
    CrossReference,
    SubjectMismatch,
    DefinitionLengthWarning,
    PunctuationWarning,
    DefinitionCasingWarning,
    EmptyOptionalFieldWarning,
    IncompleteAgentExecution,
}

impl FindingCode {
    /// Returns the severity findings with this code carry.
    pub fn level(&self) -> Level {
        use FindingCode::*;
        match self {
            MissingField
            | InvalidCasing
            | TypeMismatch
            | MissingMetadataField
            | InvalidDateFormat
            | InvalidVersionFormat
            | InvalidRegistry
            | DuplicateId
            | DuplicateCanonicalTerm
            | MalformedRelationship
            | IncompleteAgentExecution => Level::Error,
            UnknownField
            | UnrecognizedPredicate
            | DanglingReference
            | DefinitionLengthWarning
            | PunctuationWarning
            | DefinitionCasingWarning
            | EmptyOptionalFieldWarning => Level::Warning,
            CrossReference | SubjectMismatch => Level::Info,
        }
    }

    /// Returns the stage that reports this code.
    pub fn category(&self) -> FindingCategory {
        use FindingCode::*;
        match self {
            MissingField | UnknownField | InvalidCasing | TypeMismatch => {
                FindingCategory::Structural
            }
            MissingMetadataField | InvalidDateFormat | InvalidVersionFormat | InvalidRegistry => {
                FindingCategory::Metadata
            }
            DuplicateId | DuplicateCanonicalTerm => FindingCategory::Uniqueness,
            MalformedRelationship
            | UnrecognizedPredicate
            | DanglingReference
            | CrossReference
            | SubjectMismatch => FindingCategory::Relationship,
            DefinitionLengthWarning
            | PunctuationWarning
            | DefinitionCasingWarning
            | EmptyOptionalFieldWarning
            | IncompleteAgentExecution => FindingCategory::Quality,
        }
    }

    pub fn as_str(&self) -> &'static str {
        use FindingCode::*;
        match self {
            MissingField => "MissingField",
            UnknownField => "UnknownField",
            InvalidCasing => "InvalidCasing",
            TypeMismatch => "TypeMismatch",
            MissingMetadataField => "MissingMetadataField",
            InvalidDateFormat => "InvalidDateFormat",
            InvalidVersionFormat => "InvalidVersionFormat",
            InvalidRegistry => "InvalidRegistry",
            DuplicateId => "DuplicateId",
            DuplicateCanonicalTerm => "DuplicateCanonicalTerm",
            MalformedRelationship => "MalformedRelationship",
            UnrecognizedPredicate => "UnrecognizedPredicate",
            DanglingReference => "DanglingReference",
            CrossReference => "CrossReference",
            SubjectMismatch => "SubjectMismatch",
            DefinitionLengthWarning => "DefinitionLengthWarning",
            PunctuationWarning => "PunctuationWarning",
            DefinitionCasingWarning => "DefinitionCasingWarning",
            EmptyOptionalFieldWarning => "EmptyOptionalFieldWarning",
            IncompleteAgentExecution => "IncompleteAgentExecution",
        }
    }
}

impl fmt::Display for FindingCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One reported validation outcome attributed to a record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Finding {
    /// Severity, derived from the code
    pub level: Level,
    /// What was found
    pub code: FindingCode,
    /// Stage that reported the finding
    pub category: FindingCategory,
    /// The record the finding is about
    pub record: RecordRef,
    /// Dotted path of the offending field, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
    /// Human-readable description
    pub message: String,
    /// Another record involved, e.g. the first holder of a duplicate id
    #[serde(skip_serializing_if = "Option::is_none")]
    pub related: Option<RecordRef>,
}

impl Finding {
    /// Creates a finding for `record` with the level and category of `code`.
    pub fn new(code: FindingCode, record: &TermRecord, message: impl Into<String>) -> Self {
        Self::for_ref(code, record.record_ref(), message)
    }

    /// Creates a finding for an already built record reference.
    pub fn for_ref(code: FindingCode, record: RecordRef, message: impl Into<String>) -> Self {
        Self {
            level: code.level(),
            code,
            category: code.category(),
            record,
            field: None,
            message: message.into(),
            related: None,
        }
    }

    /// Sets the offending field path.
    pub fn with_field(mut self, field: impl Into<String>) -> Self {
        self.field = Some(field.into());
        self
    }

    /// Sets the other record involved.
    pub fn with_related(mut self, related: RecordRef) -> Self {
        self.related = Some(related);
        self
    }

    pub fn is_error(&self) -> bool {
        self.level == Level::Error
    }
}

impl fmt::Display for Finding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: [{}] {}", self.record, self.code, self.message)
    }
}
