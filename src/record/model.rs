//! # Record Model
//!
//! One record type covers both shapes clients send: the plain
//! `{name}` item and the richer task with status, priority and category.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Initial status of a new record
pub const DEFAULT_STATUS: &str = "TODO";

/// Priority assigned when the client does not send one
pub const DEFAULT_PRIORITY: &str = "MEDIUM";

/// Category assigned when the client does not send one
pub const DEFAULT_CATEGORY: &str = "GENERAL";

fn default_status() -> String {
    DEFAULT_STATUS.to_string()
}

fn default_priority() -> String {
    DEFAULT_PRIORITY.to_string()
}

fn default_category() -> String {
    DEFAULT_CATEGORY.to_string()
}

/// A persisted record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Record {
    /// Primary key, unique within a table
    pub id: String,

    /// Display name, never blank
    pub name: String,

    #[serde(default)]
    pub description: String,

    #[serde(default = "default_status")]
    pub status: String,

    #[serde(default = "default_priority")]
    pub priority: String,

    #[serde(default = "default_category")]
    pub category: String,

    #[serde(default)]
    pub due_date: Option<String>,

    /// Set once at creation
    pub created_at: DateTime<Utc>,

    /// Refreshed by every successful update, never earlier than `created_at`
    pub updated_at: DateTime<Utc>,
}

impl Record {
    /// Build a record with every optional field at its default.
    pub fn new(id: impl Into<String>, name: impl Into<String>, at: DateTime<Utc>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: String::new(),
            status: default_status(),
            priority: default_priority(),
            category: default_category(),
            due_date: None,
            created_at: at,
            updated_at: at,
        }
    }
}

/// Field-level changes applied by an update.
///
/// `name` is always replaced; the optional fields are replaced only when
/// the client sent them. Everything else on the stored record is left alone.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordPatch {
    pub name: String,
    pub description: Option<String>,
    pub status: Option<String>,
    pub priority: Option<String>,
    pub category: Option<String>,
    pub due_date: Option<String>,
}

impl RecordPatch {
    /// Patch that only renames the record
    pub fn rename(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Apply the patch in place and bump `updated_at`.
    ///
    /// `updated_at` never moves backwards, even if the clock does.
    pub fn apply(&self, record: &mut Record, at: DateTime<Utc>) {
        record.name.clone_from(&self.name);

        if let Some(description) = &self.description {
            record.description.clone_from(description);
        }
        if let Some(status) = &self.status {
            record.status.clone_from(status);
        }
        if let Some(priority) = &self.priority {
            record.priority.clone_from(priority);
        }
        if let Some(category) = &self.category {
            record.category.clone_from(category);
        }
        if let Some(due_date) = &self.due_date {
            record.due_date = Some(due_date.clone());
        }

        record.updated_at = at.max(record.updated_at);
    }
}
