//! Content-addressed store of analyzed strings.
//!
//! Callers address records by value only; the id is always re-derived from
//! the value. The repository handle is injected, never global.

use chrono::Utc;
use tracing::{debug, info};

use crate::error::{Result, StringError};
use crate::filter::FilterSet;
use crate::record::AnalyzedRecord;
use crate::repository::{PutOutcome, StringRecordRepo};
use crate::util::content_hash;

pub struct StringStore<R> {
    repo: R,
}

impl<R: StringRecordRepo> StringStore<R> {
    #[must_use]
    pub const fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Analyze and persist `value`.
    ///
    /// Fails with [`StringError::Conflict`] when the value is already stored.
    pub async fn insert(&self, value: &str) -> Result<AnalyzedRecord> {
        let record = AnalyzedRecord::new(value, Utc::now());

        match self.repo.put(&record).await? {
            PutOutcome::Inserted => {
                info!("Stored string: {}", record.id());
                Ok(record)
            }
            PutOutcome::AlreadyExists => {
                debug!("Rejected duplicate string: {}", record.id());
                Err(StringError::Conflict {
                    id: record.id().to_string(),
                })
            }
        }
    }

    pub async fn get_by_value(&self, value: &str) -> Result<AnalyzedRecord> {
        let id = content_hash(value);
        self.repo
            .get(&id)
            .await?
            .ok_or_else(|| StringError::NotFound {
                value: value.to_string(),
            })
    }

    /// Remove the record for `value`.
    pub async fn delete_by_value(&self, value: &str) -> Result<()> {
        let id = content_hash(value);
        if self.repo.delete(&id).await? {
            info!("Deleted string: {}", id);
            Ok(())
        } else {
            Err(StringError::NotFound {
                value: value.to_string(),
            })
        }
    }

    /// All records, or those matching `filters`.
    pub async fn list_all(&self, filters: Option<&FilterSet>) -> Result<Vec<AnalyzedRecord>> {
        let unfiltered = FilterSet::default();
        let filters = filters.unwrap_or(&unfiltered);
        let records = self.repo.query_by_predicate(filters).await?;
        debug!("Listed {} strings", records.len());
        Ok(records)
    }
}
