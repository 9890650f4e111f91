//! # In-Memory Store
//!
//! Process-local table. Each conditional write checks and mutates under a
//! single write lock, so racing writers to one key are serialized.

use std::collections::HashMap;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use tracing::debug;

use crate::record::{Record, RecordPatch};

use super::errors::{StoreError, StoreResult};
use super::{RecordStore, ScanOutput};

/// In-memory record table
#[derive(Debug)]
pub struct MemoryStore {
    table: String,
    records: RwLock<HashMap<String, Record>>,
}

impl MemoryStore {
    pub fn new(table: impl Into<String>) -> Self {
        Self {
            table: table.into(),
            records: RwLock::new(HashMap::new()),
        }
    }

    fn read(&self) -> StoreResult<RwLockReadGuard<'_, HashMap<String, Record>>> {
        self.records
            .read()
            .map_err(|_| StoreError::Unavailable("Lock poisoned".to_string()))
    }

    fn write(&self) -> StoreResult<RwLockWriteGuard<'_, HashMap<String, Record>>> {
        self.records
            .write()
            .map_err(|_| StoreError::Unavailable("Lock poisoned".to_string()))
    }
}

#[async_trait]
impl RecordStore for MemoryStore {
    fn table(&self) -> &str {
        &self.table
    }

    async fn put_if_absent(&self, record: Record) -> StoreResult<()> {
        let mut records = self.write()?;

        if records.contains_key(&record.id) {
            return Err(StoreError::ConditionalCheckFailed);
        }

        debug!(table = %self.table, id = %record.id, "put");
        records.insert(record.id.clone(), record);
        Ok(())
    }

    async fn get(&self, id: &str) -> StoreResult<Option<Record>> {
        Ok(self.read()?.get(id).cloned())
    }

    async fn update_if_exists(
        &self,
        id: &str,
        patch: &RecordPatch,
        at: DateTime<Utc>,
    ) -> StoreResult<Record> {
        let mut records = self.write()?;

        let record = records
            .get_mut(id)
            .ok_or(StoreError::ConditionalCheckFailed)?;
        patch.apply(record, at);

        debug!(table = %self.table, id, "update");
        Ok(record.clone())
    }

    async fn delete_if_exists(&self, id: &str) -> StoreResult<Record> {
        let removed = self
            .write()?
            .remove(id)
            .ok_or(StoreError::ConditionalCheckFailed)?;

        debug!(table = %self.table, id, "delete");
        Ok(removed)
    }

    async fn scan(&self) -> StoreResult<ScanOutput> {
        let records = self.read()?.values().cloned().collect();
        Ok(ScanOutput::new(records))
    }
}
