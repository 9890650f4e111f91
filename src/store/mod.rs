//! # Record Store
//!
//! The key-value table behind the service. Every write is conditional on
//! the existence of the key, and the implementation must evaluate the
//! condition and apply the write as one atomic step per key.

mod errors;
mod file;
mod memory;

pub use errors::{StoreError, StoreResult};
pub use file::FileStore;
pub use memory::MemoryStore;

use std::fmt;

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::record::{Record, RecordPatch};

/// Full-table scan result
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScanOutput {
    pub records: Vec<Record>,
    pub count: usize,
}

impl ScanOutput {
    /// Order records by creation time, then id, and count them.
    pub fn new(mut records: Vec<Record>) -> Self {
        records.sort_by(|a, b| {
            a.created_at
                .cmp(&b.created_at)
                .then_with(|| a.id.cmp(&b.id))
        });
        let count = records.len();
        Self { records, count }
    }
}

/// Table operations used by the record service
#[async_trait]
pub trait RecordStore: Send + Sync + fmt::Debug {
    /// Name of the table this store serves
    fn table(&self) -> &str;

    /// Insert `record` only if no record has its id.
    ///
    /// Fails with [`StoreError::ConditionalCheckFailed`] otherwise; the
    /// existing record is never overwritten.
    async fn put_if_absent(&self, record: Record) -> StoreResult<()>;

    /// Point lookup
    async fn get(&self, id: &str) -> StoreResult<Option<Record>>;

    /// Apply `patch` to an existing record and return its new state.
    ///
    /// Fails with [`StoreError::ConditionalCheckFailed`] if `id` is absent.
    async fn update_if_exists(
        &self,
        id: &str,
        patch: &RecordPatch,
        at: DateTime<Utc>,
    ) -> StoreResult<Record>;

    /// Remove an existing record and return its last state.
    ///
    /// Fails with [`StoreError::ConditionalCheckFailed`] if `id` is absent.
    async fn delete_if_exists(&self, id: &str) -> StoreResult<Record>;

    /// Every record in the table. Unbounded.
    async fn scan(&self) -> StoreResult<ScanOutput>;
}

#[cfg(test)]
pub(crate) mod testing {
    //! Store doubles shared by unit tests.

    use super::*;

    /// Store whose every call fails with the given error
    #[derive(Debug)]
    pub struct FailingStore(pub StoreError);

    #[async_trait]
    impl RecordStore for FailingStore {
        fn table(&self) -> &str {
            "failing"
        }

        async fn put_if_absent(&self, _record: Record) -> StoreResult<()> {
            Err(self.0.clone())
        }

        async fn get(&self, _id: &str) -> StoreResult<Option<Record>> {
            Err(self.0.clone())
        }

        async fn update_if_exists(
            &self,
            _id: &str,
            _patch: &RecordPatch,
            _at: DateTime<Utc>,
        ) -> StoreResult<Record> {
            Err(self.0.clone())
        }

        async fn delete_if_exists(&self, _id: &str) -> StoreResult<Record> {
            Err(self.0.clone())
        }

        async fn scan(&self) -> StoreResult<ScanOutput> {
            Err(self.0.clone())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn test_scan_output_orders_and_counts() {
        let t0 = Utc::now();
        let output = ScanOutput::new(vec![
            Record::new("b", "second", t0 + Duration::seconds(1)),
            Record::new("c", "first-tie", t0),
            Record::new("a", "first", t0),
        ]);

        let ids: Vec<_> = output.records.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "c", "b"]);
        assert_eq!(output.count, 3);
    }
}
