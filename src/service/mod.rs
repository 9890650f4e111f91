//! # Record Service
//!
//! The write protocol: validate, issue exactly one store call, classify the
//! outcome. Creates are conditional on the id being free; updates and
//! deletes are conditional on it being taken. Nothing is retried.
//!
//! ```text
//!            create               update
//!   absent ─────────▶ present ◀───────────┐
//!     ▲                  │  └─────────────┘
//!     └──────────────────┘
//!            delete
//! ```

mod errors;

pub use errors::{ServiceError, ServiceResult};

use std::sync::Arc;

use chrono::Utc;
use tracing::info;

use crate::record::{Record, RecordValidator};
use crate::store::{RecordStore, ScanOutput, StoreError};

/// Record operations over a shared store handle
#[derive(Debug, Clone)]
pub struct RecordService {
    store: Arc<dyn RecordStore>,
}

impl RecordService {
    pub fn new(store: Arc<dyn RecordStore>) -> Self {
        Self { store }
    }

    /// Table the underlying store serves
    pub fn table(&self) -> &str {
        self.store.table()
    }

    /// Create a record from a request body.
    ///
    /// Never overwrites: an id that is already taken is `AlreadyExists`,
    /// even if the stored record is identical.
    pub async fn create(&self, body: Option<&[u8]>) -> ServiceResult<Record> {
        let record = RecordValidator::validate_create(body, Utc::now())?;
        let id = record.id.clone();

        match self.store.put_if_absent(record.clone()).await {
            Ok(()) => {
                info!(table = self.table(), %id, "record created");
                Ok(record)
            }
            Err(StoreError::ConditionalCheckFailed) => Err(ServiceError::AlreadyExists(id)),
            Err(err) => Err(ServiceError::Store(err)),
        }
    }

    /// Look up one record. A miss is `NotFound`.
    pub async fn get(&self, id: Option<&str>) -> ServiceResult<Record> {
        let id = RecordValidator::identifier(id)?;

        self.store
            .get(&id)
            .await
            .map_err(ServiceError::Store)?
            .ok_or(ServiceError::NotFound(id))
    }

    /// Replace the supplied fields of an existing record.
    pub async fn update(&self, id: Option<&str>, body: Option<&[u8]>) -> ServiceResult<Record> {
        let (id, patch) = RecordValidator::validate_update(id, body)?;

        match self.store.update_if_exists(&id, &patch, Utc::now()).await {
            Ok(record) => {
                info!(table = self.table(), %id, "record updated");
                Ok(record)
            }
            Err(StoreError::ConditionalCheckFailed) => Err(ServiceError::NotFound(id)),
            Err(err) => Err(ServiceError::Store(err)),
        }
    }

    /// Delete an existing record and return its last state.
    pub async fn delete(&self, id: Option<&str>) -> ServiceResult<Record> {
        let id = RecordValidator::identifier(id)?;

        match self.store.delete_if_exists(&id).await {
            Ok(record) => {
                info!(table = self.table(), %id, "record deleted");
                Ok(record)
            }
            Err(StoreError::ConditionalCheckFailed) => Err(ServiceError::NotFound(id)),
            Err(err) => Err(ServiceError::Store(err)),
        }
    }

    /// Every record in the table with its count.
    pub async fn list(&self) -> ServiceResult<ScanOutput> {
        self.store.scan().await.map_err(ServiceError::Store)
    }
}
