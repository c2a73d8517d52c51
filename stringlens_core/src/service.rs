//! Transport-agnostic request surface.
//!
//! [`StringService`] exposes the five caller operations over a
//! [`StringStore`] and a [`QueryParser`], and shapes their results as plain
//! serializable data.

use serde::Serialize;
use tracing::info;

use crate::error::{Result, StringError};
use crate::filter::FilterSet;
use crate::query::QueryParser;
use crate::record::AnalyzedRecord;
use crate::repository::StringRecordRepo;
use crate::store::StringStore;

/// Longest accepted value, in characters.
pub const DEFAULT_MAX_VALUE_LENGTH: usize = 10_000;

/// Result of a structured listing.
#[derive(Debug, Clone, Serialize)]
pub struct ListResponse {
    pub data: Vec<AnalyzedRecord>,
    pub count: usize,
    pub filters_applied: FilterSet,
}

/// How a natural-language query was understood.
#[derive(Debug, Clone, Serialize)]
pub struct InterpretedQuery {
    pub original: String,
    pub parsed_filters: FilterSet,
}

/// Result of a natural-language listing.
#[derive(Debug, Clone, Serialize)]
pub struct NaturalLanguageResponse {
    pub data: Vec<AnalyzedRecord>,
    pub count: usize,
    pub interpreted_query: InterpretedQuery,
}

pub struct StringService<R> {
    store: StringStore<R>,
    parser: QueryParser,
    max_value_length: usize,
}

impl<R: StringRecordRepo> StringService<R> {
    #[must_use]
    pub fn new(repo: R) -> Self {
        Self {
            store: StringStore::new(repo),
            parser: QueryParser::with_defaults(),
            max_value_length: DEFAULT_MAX_VALUE_LENGTH,
        }
    }

    #[must_use]
    pub const fn with_max_value_length(mut self, max_value_length: usize) -> Self {
        self.max_value_length = max_value_length;
        self
    }

    #[must_use]
    pub const fn store(&self) -> &StringStore<R> {
        &self.store
    }

    pub async fn create(&self, value: &str) -> Result<AnalyzedRecord> {
        let length = value.chars().count();
        if length > self.max_value_length {
            return Err(StringError::validation(
                "value",
                format!(
                    "ensure this field has no more than {} characters (got {length})",
                    self.max_value_length
                ),
            ));
        }
        self.store.insert(value).await
    }

    pub async fn retrieve(&self, value: &str) -> Result<AnalyzedRecord> {
        self.store.get_by_value(value).await
    }

    pub async fn delete(&self, value: &str) -> Result<()> {
        self.store.delete_by_value(value).await
    }

    /// List records matching string request parameters.
    ///
    /// Unknown parameters are ignored; malformed known ones are rejected.
    pub async fn list<I, K, V>(&self, params: I) -> Result<ListResponse>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let filters = FilterSet::from_params(params)?;
        self.list_filtered(filters).await
    }

    /// List records matching an already-built filter set.
    pub async fn list_filtered(&self, filters: FilterSet) -> Result<ListResponse> {
        let data = self.store.list_all(Some(&filters)).await?;
        Ok(ListResponse {
            count: data.len(),
            data,
            filters_applied: filters,
        })
    }

    /// List records matching a free-text query.
    pub async fn filter_by_natural_language(&self, query: &str) -> Result<NaturalLanguageResponse> {
        let filters = self.parser.interpret(query)?;
        info!("Interpreted query {:?} as {:?}", query, filters);

        let data = self.store.list_all(Some(&filters)).await?;
        Ok(NaturalLanguageResponse {
            count: data.len(),
            data,
            interpreted_query: InterpretedQuery {
                original: query.to_string(),
                parsed_filters: filters,
            },
        })
    }
}
