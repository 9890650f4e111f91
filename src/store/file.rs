//! # File Store
//!
//! Keeps a table as one JSON document at `<data_dir>/<table>.json`.
//! Every operation is a read-modify-write under a per-store mutex, and the
//! file is replaced with a rename so readers never see a partial write.

use std::collections::BTreeMap;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use tokio::fs;
use tokio::sync::Mutex;
use tracing::{debug, instrument};

use crate::record::{Record, RecordPatch};

use super::errors::{StoreError, StoreResult};
use super::{RecordStore, ScanOutput};

type Table = BTreeMap<String, Record>;

/// JSON-file-backed record table
#[derive(Debug)]
pub struct FileStore {
    table: String,
    path: PathBuf,
    lock: Mutex<()>,
}

impl FileStore {
    /// Create a store for `table` under `data_dir`. The file is created on
    /// first write.
    pub fn new(data_dir: impl AsRef<Path>, table: impl Into<String>) -> Self {
        let table = table.into();
        let path = data_dir.as_ref().join(format!("{table}.json"));
        Self {
            table,
            path,
            lock: Mutex::new(()),
        }
    }

    /// Path of the table file
    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn load(&self) -> StoreResult<Table> {
        let bytes = match fs::read(&self.path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Table::new()),
            Err(e) => return Err(e.into()),
        };

        let records: Vec<Record> = serde_json::from_slice(&bytes)
            .map_err(|e| StoreError::Corrupt(format!("{}: {}", self.path.display(), e)))?;

        Ok(records.into_iter().map(|r| (r.id.clone(), r)).collect())
    }

    async fn save(&self, table: &Table) -> StoreResult<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).await?;
        }

        let records: Vec<&Record> = table.values().collect();
        let bytes = serde_json::to_vec_pretty(&records)
            .map_err(|e| StoreError::Corrupt(e.to_string()))?;

        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, bytes).await?;
        fs::rename(&tmp, &self.path).await?;
        Ok(())
    }
}

#[async_trait]
impl RecordStore for FileStore {
    fn table(&self) -> &str {
        &self.table
    }

    #[instrument(skip_all, fields(table = %self.table, id = %record.id))]
    async fn put_if_absent(&self, record: Record) -> StoreResult<()> {
        let _guard = self.lock.lock().await;
        let mut table = self.load().await?;

        if table.contains_key(&record.id) {
            return Err(StoreError::ConditionalCheckFailed);
        }

        table.insert(record.id.clone(), record);
        self.save(&table).await?;
        debug!("put");
        Ok(())
    }

    async fn get(&self, id: &str) -> StoreResult<Option<Record>> {
        let _guard = self.lock.lock().await;
        Ok(self.load().await?.remove(id))
    }

    #[instrument(skip(self, patch, at), fields(table = %self.table))]
    async fn update_if_exists(
        &self,
        id: &str,
        patch: &RecordPatch,
        at: DateTime<Utc>,
    ) -> StoreResult<Record> {
        let _guard = self.lock.lock().await;
        let mut table = self.load().await?;

        let record = table
            .get_mut(id)
            .ok_or(StoreError::ConditionalCheckFailed)?;
        patch.apply(record, at);
        let updated = record.clone();

        self.save(&table).await?;
        debug!("update");
        Ok(updated)
    }

    #[instrument(skip(self), fields(table = %self.table))]
    async fn delete_if_exists(&self, id: &str) -> StoreResult<Record> {
        let _guard = self.lock.lock().await;
        let mut table = self.load().await?;

        let removed = table
            .remove(id)
            .ok_or(StoreError::ConditionalCheckFailed)?;

        self.save(&table).await?;
        debug!("delete");
        Ok(removed)
    }

    async fn scan(&self) -> StoreResult<ScanOutput> {
        let _guard = self.lock.lock().await;
        let table = self.load().await?;
        Ok(ScanOutput::new(table.into_values().collect()))
    }
}
