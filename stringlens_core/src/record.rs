use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::analysis::{PropertyBundle, analyze};

/// A stored string together with its derived properties.
///
/// Records are only built from a value, so the id and every property always
/// agree with it. The fields are read-only; the only way to change a record
/// is to delete it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalyzedRecord {
    id: String,
    value: String,
    properties: PropertyBundle,
    created_at: DateTime<Utc>,
}

impl AnalyzedRecord {
    /// Analyze `value` and stamp it with `created_at`.
    #[must_use]
    pub fn new(value: impl Into<String>, created_at: DateTime<Utc>) -> Self {
        let value = value.into();
        let properties = analyze(&value);
        Self {
            id: properties.sha256_hash.clone(),
            value,
            properties,
            created_at,
        }
    }

    /// Content address; the primary key.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }

    #[must_use]
    pub const fn properties(&self) -> &PropertyBundle {
        &self.properties
    }

    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    #[must_use]
    pub const fn length(&self) -> usize {
        self.properties.length
    }

    #[must_use]
    pub const fn is_palindrome(&self) -> bool {
        self.properties.is_palindrome
    }

    #[must_use]
    pub const fn unique_characters(&self) -> usize {
        self.properties.unique_characters
    }

    #[must_use]
    pub const fn word_count(&self) -> usize {
        self.properties.word_count
    }

    #[must_use]
    pub fn contains_character(&self, ch: char) -> bool {
        self.properties.character_frequency_map.contains(ch)
    }
}
