//! Loading the terminology document into an immutable record collection.
//!
//! The document is a JSON array of term objects. Records are kept as raw
//! JSON objects rather than typed structs so that the rules can report
//! missing fields, wrong value kinds and unknown fields instead of failing
//! deserialization on the first problem.
//!
//! # Examples
//!
//! ```rust
//! use catmip_lint::document::TermCollection;
//!
//! let collection = TermCollection::from_slice(br#"[{"id": "cat-001"}]"#).unwrap();
//! assert_eq!(collection.len(), 1);
//! assert_eq!(collection.records()[0].id(), Some("cat-001"));
//!
//! assert!(TermCollection::from_slice(b"{}").is_err());
//! ```

use crate::prelude::*;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;
use std::path::Path;
use tracing::{debug, instrument};

/// Field names of a term record and its metadata block.
pub mod fields {
    pub const ID: &str = "id";
    pub const CANONICAL_TERM: &str = "canonical_term";
    pub const DEFINITION: &str = "definition";
    pub const SYNONYMS: &str = "synonyms";
    pub const RELATIONSHIPS: &str = "relationships";
    pub const PROMPT_EXAMPLES: &str = "prompt_examples";
    pub const AGENT_EXECUTION: &str = "agent_execution";
    pub const METADATA: &str = "metadata";
    pub const RECOMMENDATION: &str = "recommendation";
    pub const TERM_TYPE: &str = "term_type";

    pub const INTERPRETATION: &str = "interpretation";
    pub const ACTIONS: &str = "actions";

    pub const AUTHOR: &str = "author";
    pub const VERSION: &str = "version";
    pub const DATE_ADDED: &str = "date_added";
    pub const REGISTRY: &str = "registry";
    pub const SOURCE_URL: &str = "source_url";

    /// Top-level fields every record must carry.
    pub const REQUIRED: [&str; 4] = [ID, CANONICAL_TERM, DEFINITION, METADATA];

    /// Top-level fields a record may carry.
    pub const OPTIONAL: [&str; 6] = [
        SYNONYMS,
        RELATIONSHIPS,
        PROMPT_EXAMPLES,
        AGENT_EXECUTION,
        RECOMMENDATION,
        TERM_TYPE,
    ];

    /// Metadata fields every record must carry.
    pub const METADATA_REQUIRED: [&str; 4] = [AUTHOR, VERSION, DATE_ADDED, REGISTRY];

    /// Metadata fields a record may carry.
    pub const METADATA_OPTIONAL: [&str; 2] = [SOURCE_URL, TERM_TYPE];

    /// Returns true if `name` is part of the top-level record schema.
    pub fn is_known(name: &str) -> bool {
        REQUIRED.contains(&name) || OPTIONAL.contains(&name)
    }

    /// Returns true if `name` is part of the metadata schema.
    pub fn is_known_metadata(name: &str) -> bool {
        METADATA_REQUIRED.contains(&name) || METADATA_OPTIONAL.contains(&name)
    }
}

/// Returns the JSON kind of a value, as used in error and finding messages.
pub fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Identifies a record in findings and reports.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RecordRef {
    /// 0-based position of the record in the document
    pub index: usize,
    /// The record's `id`, when present and a string
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// The record's `canonical_term`, when present and a string
    #[serde(skip_serializing_if = "Option::is_none")]
    pub canonical_term: Option<String>,
}

impl fmt::Display for RecordRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (&self.canonical_term, &self.id) {
            (Some(term), _) => write!(f, "'{term}' (index {})", self.index),
            (None, Some(id)) => write!(f, "id '{id}' (index {})", self.index),
            (None, None) => write!(f, "record at index {}", self.index),
        }
    }
}

/// One term record as found in the document.
#[derive(Debug, Clone, PartialEq)]
pub struct TermRecord {
    index: usize,
    fields: Map<String, Value>,
}

impl TermRecord {
    /// Creates a record from its position and raw object.
    pub fn new(index: usize, fields: Map<String, Value>) -> Self {
        Self { index, fields }
    }

    /// Returns the 0-based position of the record in the document.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Returns the raw fields of the record.
    pub fn fields(&self) -> &Map<String, Value> {
        &self.fields
    }

    /// Returns the raw value of a field.
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.fields.get(name)
    }

    /// Returns true if the field is present, whatever its value.
    pub fn has(&self, name: &str) -> bool {
        self.fields.contains_key(name)
    }

    /// Returns a field's value if it is present and a string.
    pub fn str_field(&self, name: &str) -> Option<&str> {
        self.fields.get(name).and_then(Value::as_str)
    }

    /// Returns a field's items if it is present and an array.
    pub fn array(&self, name: &str) -> Option<&[Value]> {
        self.fields
            .get(name)
            .and_then(Value::as_array)
            .map(Vec::as_slice)
    }

    /// Returns the string items of an array field, skipping non-strings.
    pub fn strings(&self, name: &str) -> Vec<&str> {
        self.array(name)
            .map(|items| items.iter().filter_map(Value::as_str).collect())
            .unwrap_or_default()
    }

    /// Returns an object field if it is present and an object.
    pub fn object(&self, name: &str) -> Option<&Map<String, Value>> {
        self.fields.get(name).and_then(Value::as_object)
    }

    pub fn id(&self) -> Option<&str> {
        self.str_field(fields::ID)
    }

    pub fn canonical_term(&self) -> Option<&str> {
        self.str_field(fields::CANONICAL_TERM)
    }

    pub fn definition(&self) -> Option<&str> {
        self.str_field(fields::DEFINITION)
    }

    pub fn metadata(&self) -> Option<&Map<String, Value>> {
        self.object(fields::METADATA)
    }

    /// Returns a non-empty array field, as counted in statistics.
    pub fn has_items(&self, name: &str) -> bool {
        self.array(name).is_some_and(|items| !items.is_empty())
    }

    /// Builds the reference used to attribute findings to this record.
    pub fn record_ref(&self) -> RecordRef {
        RecordRef {
            index: self.index,
            id: self.id().map(str::to_string),
            canonical_term: self.canonical_term().map(str::to_string),
        }
    }
}

/// The immutable snapshot of all records for one lint run.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TermCollection {
    records: Vec<TermRecord>,
    source: Option<String>,
}

impl TermCollection {
    /// Parses a document from raw bytes.
    ///
    /// Fails with [`LintError::Parse`] on malformed JSON (including trailing
    /// content), [`LintError::NotACollection`] when the root is not an array
    /// and [`LintError::InvalidRecord`] when an element is not an object.
    pub fn from_slice(bytes: &[u8]) -> Result<Self> {
        let value: Value = serde_json::from_slice(bytes)?;
        Self::from_value(value)
    }

    /// Builds a collection from an already parsed JSON value.
    pub fn from_value(value: Value) -> Result<Self> {
        let items = match value {
            Value::Array(items) => items,
            other => {
                return Err(LintError::NotACollection {
                    found: value_kind(&other),
                })
            }
        };

        let records = items
            .into_iter()
            .enumerate()
            .map(|(index, item)| match item {
                Value::Object(fields) => Ok(TermRecord::new(index, fields)),
                other => Err(LintError::InvalidRecord {
                    index,
                    found: value_kind(&other),
                }),
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            records,
            source: None,
        })
    }

    /// Reads and parses the document at `path`.
    #[instrument(skip_all, fields(document.path = %path.as_ref().display()))]
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let bytes = std::fs::read(path).map_err(|e| LintError::io(path, e))?;
        debug!(document.bytes = bytes.len(), "Read term document");

        let collection = Self::from_slice(&bytes)?.with_source(path.display().to_string());
        debug!(
            document.records = collection.len(),
            "Parsed term collection"
        );
        Ok(collection)
    }

    /// Records where the collection was loaded from.
    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }

    /// Returns where the collection was loaded from, if known.
    pub fn source(&self) -> Option<&str> {
        self.source.as_deref()
    }

    pub fn records(&self) -> &[TermRecord] {
        &self.records
    }

    pub fn iter(&self) -> std::slice::Iter<'_, TermRecord> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl<'a> IntoIterator for &'a TermCollection {
    type Item = &'a TermRecord;
    type IntoIter = std::slice::Iter<'a, TermRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::io::Write;

    #[test]
    fn test_empty_collection() {
        let collection = TermCollection::from_slice(b"[]").unwrap();
        assert!(collection.is_empty());
        assert!(collection.source().is_none());
    }

    #[test]
    fn test_records_keep_document_order() {
        let collection =
            TermCollection::from_slice(br#"[{"id": "b"}, {"id": "a"}, {}]"#).unwrap();

        let ids: Vec<_> = collection.iter().map(TermRecord::id).collect();
        assert_eq!(ids, vec![Some("b"), Some("a"), None]);
        assert_eq!(collection.records()[2].index(), 2);
    }

    #[test]
    fn test_rejects_non_array_root() {
        let err = TermCollection::from_slice(br#"{"id": "x"}"#).unwrap_err();
        assert!(matches!(err, LintError::NotACollection { found: "object" }));
    }

    #[test]
    fn test_rejects_non_object_record() {
        let err = TermCollection::from_slice(br#"[{"id": "x"}, "oops"]"#).unwrap_err();
        assert!(matches!(
            err,
            LintError::InvalidRecord {
                index: 1,
                found: "string"
            }
        ));
    }

    #[test]
    fn test_syntax_errors_carry_position() {
        let unterminated = TermCollection::from_slice(b"[\n  {\"id\": \"abc}\n]").unwrap_err();
        assert!(matches!(unterminated, LintError::Parse { .. }));

        let trailing = TermCollection::from_slice(b"[]\n[]").unwrap_err();
        let (line, _) = trailing.position().unwrap();
        assert_eq!(line, 2);

        let brackets = TermCollection::from_slice(b"[{\"id\": \"a\"}").unwrap_err();
        assert!(brackets.is_parse_error());
    }

    #[test]
    fn test_typed_accessors_ignore_wrong_kinds() {
        let value = json!([{
            "id": 7,
            "canonical_term": "Asset",
            "synonyms": ["Device", 3, "Endpoint"],
            "metadata": "not an object"
        }]);
        let collection = TermCollection::from_value(value).unwrap();
        let record = &collection.records()[0];

        assert!(record.has("id"));
        assert_eq!(record.id(), None);
        assert_eq!(record.canonical_term(), Some("Asset"));
        assert_eq!(record.strings("synonyms"), vec!["Device", "Endpoint"]);
        assert!(record.metadata().is_none());
        assert!(record.has_items("synonyms"));
        assert!(!record.has_items("relationships"));
    }

    #[test]
    fn test_record_ref_display() {
        let full = RecordRef {
            index: 4,
            id: Some("cat-005".to_string()),
            canonical_term: Some("Tenant".to_string()),
        };
        assert_eq!(full.to_string(), "'Tenant' (index 4)");

        let id_only = RecordRef {
            index: 1,
            id: Some("cat-002".to_string()),
            canonical_term: None,
        };
        assert_eq!(id_only.to_string(), "id 'cat-002' (index 1)");

        let anonymous = RecordRef {
            index: 0,
            id: None,
            canonical_term: None,
        };
        assert_eq!(anonymous.to_string(), "record at index 0");
    }

    #[test]
    fn test_from_path() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"[{{"id": "cat-001"}}]"#).unwrap();

        let collection = TermCollection::from_path(file.path()).unwrap();
        assert_eq!(collection.len(), 1);
        assert_eq!(
            collection.source(),
            Some(file.path().display().to_string().as_str())
        );

        let missing = TermCollection::from_path("/definitely/not/here/terms.json").unwrap_err();
        assert!(matches!(missing, LintError::Io { .. }));
    }
}
