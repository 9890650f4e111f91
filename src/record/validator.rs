//! # Record Validator
//!
//! Turns raw request input (an optional body and an optional path id) into
//! either a normalized write payload or a [`ValidationError`]. Nothing here
//! touches the store.

use chrono::{DateTime, Utc};
use serde_json::{Map, Value};
use uuid::Uuid;

use super::errors::{ValidationError, ValidationResult};
use super::model::{Record, RecordPatch};

/// Fields pulled out of a request body.
///
/// Values that are present but not strings are treated as absent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordInput {
    pub id: Option<String>,
    pub name: Option<String>,
    pub description: Option<String>,
    pub status: Option<String>,
    pub priority: Option<String>,
    pub category: Option<String>,
    pub due_date: Option<String>,
}

impl RecordInput {
    fn from_object(object: &Map<String, Value>) -> Self {
        let text = |key: &str| object.get(key).and_then(Value::as_str).map(str::to_string);

        // `title` is the task-flavoured spelling of `name`
        let name = non_blank(text("name")).or_else(|| non_blank(text("title")));

        Self {
            id: present(text("id")),
            name,
            description: text("description"),
            status: text("status"),
            priority: text("priority"),
            category: text("category"),
            due_date: text("dueDate"),
        }
    }

    fn require_name(&self) -> ValidationResult<String> {
        self.name
            .clone()
            .ok_or(ValidationError::MissingRequiredField)
    }

    /// Build the full record to insert, generating an id when none was sent.
    pub fn into_record(self, at: DateTime<Utc>) -> ValidationResult<Record> {
        let name = self.require_name()?;
        let id = self.id.unwrap_or_else(|| Uuid::new_v4().to_string());

        let mut record = Record::new(id, name, at);
        if let Some(description) = self.description {
            record.description = description;
        }
        if let Some(status) = self.status {
            record.status = status;
        }
        if let Some(priority) = self.priority {
            record.priority = priority;
        }
        if let Some(category) = self.category {
            record.category = category;
        }
        record.due_date = self.due_date;

        Ok(record)
    }

    /// Build the field-level update. A body `id` is ignored.
    pub fn into_patch(self) -> ValidationResult<RecordPatch> {
        let name = self.require_name()?;

        Ok(RecordPatch {
            name,
            description: self.description,
            status: self.status,
            priority: self.priority,
            category: self.category,
            due_date: self.due_date,
        })
    }
}

/// Ids are opaque: blank is rejected, anything else is kept verbatim.
fn present(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Stateless request validator
pub struct RecordValidator;

impl RecordValidator {
    /// Parse a required body into a [`RecordInput`].
    ///
    /// An absent, blank or `null` body is `MissingBody`; anything that is
    /// not a JSON object is `MalformedBody`.
    pub fn parse_body(body: Option<&[u8]>) -> ValidationResult<RecordInput> {
        let body = match body {
            Some(bytes) if !bytes.iter().all(u8::is_ascii_whitespace) => bytes,
            _ => return Err(ValidationError::MissingBody),
        };

        match serde_json::from_slice::<Value>(body) {
            Ok(Value::Object(object)) => Ok(RecordInput::from_object(&object)),
            Ok(Value::Null) => Err(ValidationError::MissingBody),
            Ok(_) | Err(_) => Err(ValidationError::MalformedBody),
        }
    }

    /// Require a non-blank path identifier, returned exactly as sent.
    pub fn identifier(id: Option<&str>) -> ValidationResult<String> {
        id.filter(|id| !id.trim().is_empty())
            .map(str::to_string)
            .ok_or(ValidationError::MissingIdentifier)
    }

    /// Validate a create request into the record to insert.
    pub fn validate_create(body: Option<&[u8]>, at: DateTime<Utc>) -> ValidationResult<Record> {
        Self::parse_body(body)?.into_record(at)
    }

    /// Validate an update request. The identifier is checked before the body.
    pub fn validate_update(
        id: Option<&str>,
        body: Option<&[u8]>,
    ) -> ValidationResult<(String, RecordPatch)> {
        let id = Self::identifier(id)?;
        let patch = Self::parse_body(body)?.into_patch()?;
        Ok((id, patch))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::model::{DEFAULT_PRIORITY, DEFAULT_STATUS};
    use rstest::rstest;

    fn create(body: &str) -> ValidationResult<Record> {
        RecordValidator::validate_create(Some(body.as_bytes()), Utc::now())
    }

    #[test]
    fn test_create_generates_uuid_id() {
        let record = create(r#"{"name":"Buy milk"}"#).unwrap();

        assert!(Uuid::parse_str(&record.id).is_ok());
        assert_eq!(record.name, "Buy milk");
        assert_eq!(record.status, DEFAULT_STATUS);
        assert_eq!(record.priority, DEFAULT_PRIORITY);
        assert_eq!(record.created_at, record.updated_at);
    }

    #[test]
    fn test_create_keeps_client_id() {
        let record = create(r#"{"id":"abc-123","name":"Buy milk"}"#).unwrap();
        assert_eq!(record.id, "abc-123");
    }

    #[test]
    fn test_blank_client_id_is_replaced() {
        let record = create(r#"{"id":"  ","name":"Buy milk"}"#).unwrap();
        assert!(Uuid::parse_str(&record.id).is_ok());
    }

    #[test]
    fn test_title_is_accepted_for_name() {
        let record = create(
            r#"{"title":"Write report","priority":"HIGH","category":"WORK","dueDate":"2024-06-01"}"#,
        )
        .unwrap();

        assert_eq!(record.name, "Write report");
        assert_eq!(record.priority, "HIGH");
        assert_eq!(record.category, "WORK");
        assert_eq!(record.due_date.as_deref(), Some("2024-06-01"));
    }

    #[test]
    fn test_name_is_trimmed() {
        let record = create(r#"{"name":"  Buy milk  "}"#).unwrap();
        assert_eq!(record.name, "Buy milk");
    }

    #[rstest]
    #[case(None, ValidationError::MissingBody)]
    #[case(Some(""), ValidationError::MissingBody)]
    #[case(Some("   \n"), ValidationError::MissingBody)]
    #[case(Some("null"), ValidationError::MissingBody)]
    #[case(Some("{not json"), ValidationError::MalformedBody)]
    #[case(Some("[1,2]"), ValidationError::MalformedBody)]
    #[case(Some("\"name\""), ValidationError::MalformedBody)]
    #[case(Some("{}"), ValidationError::MissingRequiredField)]
    #[case(Some(r#"{"name":""}"#), ValidationError::MissingRequiredField)]
    #[case(Some(r#"{"name":"   "}"#), ValidationError::MissingRequiredField)]
    #[case(Some(r#"{"name":42}"#), ValidationError::MissingRequiredField)]
    #[case(Some(r#"{"description":"no name"}"#), ValidationError::MissingRequiredField)]
    fn test_create_rejections(#[case] body: Option<&str>, #[case] expected: ValidationError) {
        let result = RecordValidator::validate_create(body.map(str::as_bytes), Utc::now());
        assert_eq!(result.unwrap_err(), expected);
    }

    #[rstest]
    #[case(None)]
    #[case(Some(""))]
    #[case(Some("  "))]
    fn test_missing_identifier(#[case] id: Option<&str>) {
        assert_eq!(
            RecordValidator::identifier(id).unwrap_err(),
            ValidationError::MissingIdentifier
        );
    }

    #[rstest]
    #[case(" abc", " abc")]
    #[case("abc ", "abc ")]
    #[case("a b", "a b")]
    fn test_identifier_is_kept_verbatim(#[case] id: &str, #[case] expected: &str) {
        assert_eq!(RecordValidator::identifier(Some(id)).unwrap(), expected);
    }

    #[test]
    fn test_client_id_is_kept_verbatim() {
        let record = create(r#"{"id":" abc ","name":"Buy milk"}"#).unwrap();
        assert_eq!(record.id, " abc ");
    }

    #[test]
    fn test_update_checks_identifier_before_body() {
        let result = RecordValidator::validate_update(None, None);
        assert_eq!(result.unwrap_err(), ValidationError::MissingIdentifier);
    }

    #[test]
    fn test_update_patch_carries_only_supplied_fields() {
        let (id, patch) = RecordValidator::validate_update(
            Some("r1"),
            Some(br#"{"id":"other","name":"x","status":"DONE"}"#.as_slice()),
        )
        .unwrap();

        assert_eq!(id, "r1");
        assert_eq!(patch.name, "x");
        assert_eq!(patch.status.as_deref(), Some("DONE"));
        assert!(patch.priority.is_none());
        assert!(patch.description.is_none());
    }
}
