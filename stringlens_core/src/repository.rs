use std::sync::Arc;

use async_trait::async_trait;

use crate::filter::FilterSet;
use crate::record::AnalyzedRecord;

/// Result of [`StringRecordRepo::put`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PutOutcome {
    Inserted,
    /// A record with the same id (and therefore the same value) exists.
    AlreadyExists,
}

/// Persistence collaborator for analyzed records.
///
/// Implementations must enforce uniqueness of `id` and `value` atomically:
/// of several concurrent `put`s of one value exactly one may report
/// [`PutOutcome::Inserted`].
#[async_trait]
pub trait StringRecordRepo: Send + Sync {
    async fn put(&self, record: &AnalyzedRecord) -> anyhow::Result<PutOutcome>;

    async fn get(&self, id: &str) -> anyhow::Result<Option<AnalyzedRecord>>;

    async fn get_by_unique_value(&self, value: &str) -> anyhow::Result<Option<AnalyzedRecord>>;

    /// Remove the record. Returns whether a record was removed.
    async fn delete(&self, id: &str) -> anyhow::Result<bool>;

    /// Records matching every constraint in `filters`.
    async fn query_by_predicate(&self, filters: &FilterSet) -> anyhow::Result<Vec<AnalyzedRecord>>;
}

#[async_trait]
impl<T: StringRecordRepo + ?Sized> StringRecordRepo for Arc<T> {
    async fn put(&self, record: &AnalyzedRecord) -> anyhow::Result<PutOutcome> {
        (**self).put(record).await
    }

    async fn get(&self, id: &str) -> anyhow::Result<Option<AnalyzedRecord>> {
        (**self).get(id).await
    }

    async fn get_by_unique_value(&self, value: &str) -> anyhow::Result<Option<AnalyzedRecord>> {
        (**self).get_by_unique_value(value).await
    }

    async fn delete(&self, id: &str) -> anyhow::Result<bool> {
        (**self).delete(id).await
    }

    async fn query_by_predicate(&self, filters: &FilterSet) -> anyhow::Result<Vec<AnalyzedRecord>> {
        (**self).query_by_predicate(filters).await
    }
}
