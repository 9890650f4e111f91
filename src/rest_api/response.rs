//! # Response Formatting
//!
//! Success bodies for the record endpoints. A single-record read returns
//! the bare [`Record`] and needs no wrapper.

use serde::Serialize;

use crate::record::Record;
use crate::store::ScanOutput;

/// Create and update response
#[derive(Debug, Clone, Serialize)]
pub struct RecordResponse {
    pub message: &'static str,
    pub record: Record,
}

impl RecordResponse {
    pub fn created(record: Record) -> Self {
        Self {
            message: "Item created successfully",
            record,
        }
    }

    pub fn updated(record: Record) -> Self {
        Self {
            message: "Item updated successfully",
            record,
        }
    }
}

/// Delete response carrying the record's last state
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteResponse {
    pub message: &'static str,
    pub deleted_record: Record,
}

impl DeleteResponse {
    pub fn new(deleted_record: Record) -> Self {
        Self {
            message: "Item deleted successfully",
            deleted_record,
        }
    }
}

/// List response
#[derive(Debug, Clone, Serialize)]
pub struct ListResponse {
    pub records: Vec<Record>,
    pub count: usize,
}

impl From<ScanOutput> for ListResponse {
    fn from(output: ScanOutput) -> Self {
        Self {
            records: output.records,
            count: output.count,
        }
    }
}
