//! Store and service behaviour against an in-process repository.
//!
//! The repository here is a mutex-guarded map, which gives `put` the same
//! atomic uniqueness a database unique constraint would.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use stringlens_core::{
    AnalyzedRecord, FilterSet, PutOutcome, StatusCategory, StringError, StringRecordRepo,
    StringService, StringStore, content_hash,
};

#[derive(Default)]
struct MapRepo {
    records: Mutex<HashMap<String, AnalyzedRecord>>,
}

impl MapRepo {
    fn len(&self) -> usize {
        self.records.lock().unwrap().len()
    }
}

#[async_trait]
impl StringRecordRepo for MapRepo {
    async fn put(&self, record: &AnalyzedRecord) -> anyhow::Result<PutOutcome> {
        let mut records = self.records.lock().unwrap();
        if records.contains_key(record.id()) || records.values().any(|r| r.value() == record.value())
        {
            return Ok(PutOutcome::AlreadyExists);
        }
        records.insert(record.id().to_string(), record.clone());
        Ok(PutOutcome::Inserted)
    }

    async fn get(&self, id: &str) -> anyhow::Result<Option<AnalyzedRecord>> {
        Ok(self.records.lock().unwrap().get(id).cloned())
    }

    async fn get_by_unique_value(&self, value: &str) -> anyhow::Result<Option<AnalyzedRecord>> {
        Ok(self
            .records
            .lock()
            .unwrap()
            .values()
            .find(|r| r.value() == value)
            .cloned())
    }

    async fn delete(&self, id: &str) -> anyhow::Result<bool> {
        Ok(self.records.lock().unwrap().remove(id).is_some())
    }

    async fn query_by_predicate(&self, filters: &FilterSet) -> anyhow::Result<Vec<AnalyzedRecord>> {
        let mut records: Vec<AnalyzedRecord> = self
            .records
            .lock()
            .unwrap()
            .values()
            .filter(|r| filters.matches(r))
            .cloned()
            .collect();
        records.sort_by(|a, b| a.value().cmp(b.value()));
        Ok(records)
    }
}

fn service() -> StringService<Arc<MapRepo>> {
    StringService::new(Arc::new(MapRepo::default()))
}

async fn seed(service: &StringService<Arc<MapRepo>>, values: &[&str]) {
    for value in values {
        service.create(value).await.unwrap();
    }
}

#[tokio::test]
async fn test_racecar_round_trip() {
    let service = service();

    let created = service.create("racecar").await.unwrap();
    assert_eq!(created.id(), content_hash("racecar"));

    let fetched = service.retrieve("racecar").await.unwrap();
    assert!(fetched.is_palindrome());
    assert_eq!(fetched.length(), 7);
    assert_eq!(fetched.word_count(), 1);
    assert_eq!(fetched.created_at(), created.created_at());

    service.delete("racecar").await.unwrap();
    let err = service.retrieve("racecar").await.unwrap_err();
    assert!(matches!(err, StringError::NotFound { .. }));
    assert_eq!(err.category(), StatusCategory::NotFound);
}

#[tokio::test]
async fn test_duplicate_insert_is_conflict() {
    let repo = Arc::new(MapRepo::default());
    let store = StringStore::new(repo.clone());

    store.insert("hello").await.unwrap();
    let err = store.insert("hello").await.unwrap_err();

    assert!(matches!(err, StringError::Conflict { ref id } if *id == content_hash("hello")));
    assert_eq!(err.category(), StatusCategory::AlreadyExists);
    assert_eq!(repo.len(), 1);
}

#[tokio::test]
async fn test_concurrent_inserts_yield_one_success() {
    let repo = Arc::new(MapRepo::default());
    let store = Arc::new(StringStore::new(repo.clone()));

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let store = store.clone();
            tokio::spawn(async move { store.insert("same value").await })
        })
        .collect();

    let mut inserted = 0;
    let mut conflicts = 0;
    for handle in handles {
        match handle.await.unwrap() {
            Ok(_) => inserted += 1,
            Err(StringError::Conflict { .. }) => conflicts += 1,
            Err(other) => panic!("unexpected error: {other}"),
        }
    }

    assert_eq!(inserted, 1);
    assert_eq!(conflicts, 7);
    assert_eq!(repo.len(), 1);
}

#[tokio::test]
async fn test_delete_missing_is_not_found() {
    let service = service();
    let err = service.delete("never stored").await.unwrap_err();
    assert!(matches!(err, StringError::NotFound { ref value } if value == "never stored"));
}

#[tokio::test]
async fn test_case_variants_are_distinct_records() {
    let service = service();
    service.create("Level").await.unwrap();
    service.create("level").await.unwrap();

    let all = service.list(Vec::<(String, String)>::new()).await.unwrap();
    assert_eq!(all.count, 2);
    assert!(all.data.iter().all(AnalyzedRecord::is_palindrome));
}

#[tokio::test]
async fn test_list_with_structured_filters() {
    let service = service();
    seed(&service, &["racecar", "hello world", "a", "never odd or even", "abc"]).await;

    let response = service
        .list([("is_palindrome", "true"), ("min_length", "2"), ("page", "3")])
        .await
        .unwrap();

    let values: Vec<&str> = response.data.iter().map(AnalyzedRecord::value).collect();
    assert_eq!(values, vec!["never odd or even", "racecar"]);
    assert_eq!(response.count, 2);
    assert_eq!(
        response.filters_applied,
        FilterSet {
            is_palindrome: Some(true),
            min_length: Some(2),
            ..FilterSet::default()
        }
    );
}

#[tokio::test]
async fn test_list_rejects_malformed_filters() {
    let service = service();

    let err = service.list([("contains_character", "ab")]).await.unwrap_err();
    assert_eq!(err.field(), Some("contains_character"));
    assert_eq!(err.category(), StatusCategory::BadInput);

    let err = service.list([("max_length", "many")]).await.unwrap_err();
    assert_eq!(err.field(), Some("max_length"));
}

#[tokio::test]
async fn test_natural_language_listing() {
    let service = service();
    seed(&service, &["racecar", "kayak", "level", "banana", "wow"]).await;

    let response = service
        .filter_by_natural_language("palindromic strings that contain the first vowel")
        .await
        .unwrap();

    let values: Vec<&str> = response.data.iter().map(AnalyzedRecord::value).collect();
    assert_eq!(values, vec!["kayak", "racecar"]);
    assert_eq!(response.count, 2);
    assert_eq!(
        response.interpreted_query.original,
        "palindromic strings that contain the first vowel"
    );
    assert_eq!(response.interpreted_query.parsed_filters.is_palindrome, Some(true));
    assert_eq!(response.interpreted_query.parsed_filters.contains_character, Some('a'));
}

#[tokio::test]
async fn test_natural_language_can_match_nothing() {
    let service = service();
    seed(&service, &["hi"]).await;

    let response = service
        .filter_by_natural_language("strings longer than 10")
        .await
        .unwrap();
    assert_eq!(response.count, 0);
    assert_eq!(response.interpreted_query.parsed_filters.min_length, Some(11));
}

#[tokio::test]
async fn test_unparseable_query_is_distinct_from_empty_result() {
    let service = service();
    seed(&service, &["anything"]).await;

    let err = service
        .filter_by_natural_language("show me cool strings")
        .await
        .unwrap_err();
    assert!(matches!(err, StringError::ParseFailure { .. }));
    assert_eq!(err.category(), StatusCategory::NotUnderstood);

    let err = service.filter_by_natural_language("   ").await.unwrap_err();
    assert_eq!(err.field(), Some("query"));
}

#[tokio::test]
async fn test_value_length_limit() {
    let service = service().with_max_value_length(5);

    service.create("12345").await.unwrap();
    let err = service.create("123456").await.unwrap_err();
    assert_eq!(err.field(), Some("value"));
}

#[tokio::test]
async fn test_empty_string_is_storable() {
    let service = service();
    let record = service.create("").await.unwrap();
    assert_eq!(record.length(), 0);
    assert_eq!(record.word_count(), 0);
    assert!(record.is_palindrome());
    assert!(service.retrieve("").await.is_ok());
}

#[tokio::test]
async fn test_list_response_serializes() {
    let service = service();
    seed(&service, &["wow"]).await;

    let response = service.list([("word_count", "1")]).await.unwrap();
    let json = serde_json::to_value(&response).unwrap();

    assert_eq!(json["count"], 1);
    assert_eq!(json["filters_applied"], serde_json::json!({ "word_count": 1 }));
    assert_eq!(json["data"][0]["value"], "wow");
    assert_eq!(json["data"][0]["properties"]["is_palindrome"], true);
}
