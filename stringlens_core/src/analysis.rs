//! String analysis.
//!
//! [`analyze`] turns any string into a [`PropertyBundle`]: the derived
//! properties that are stored alongside the string and used for filtering.
//! Every property is a pure function of the input.

use std::collections::HashMap;
use std::fmt;

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::util::content_hash;

/// Occurrence count of every character in a string, in first-seen order.
///
/// Counting is case-sensitive and includes whitespace and punctuation.
/// Serializes as a JSON object keyed by the character.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CharacterFrequencyMap {
    entries: Vec<(char, usize)>,
}

impl CharacterFrequencyMap {
    /// Count the characters of `value`.
    #[must_use]
    pub fn from_str_counts(value: &str) -> Self {
        let mut positions: HashMap<char, usize> = HashMap::new();
        let mut entries: Vec<(char, usize)> = Vec::new();

        for ch in value.chars() {
            if let Some(&idx) = positions.get(&ch) {
                entries[idx].1 += 1;
            } else {
                positions.insert(ch, entries.len());
                entries.push((ch, 1));
            }
        }

        Self { entries }
    }

    /// Occurrences of `ch`, zero when absent.
    #[must_use]
    pub fn get(&self, ch: char) -> usize {
        self.entries
            .iter()
            .find(|(c, _)| *c == ch)
            .map_or(0, |(_, count)| *count)
    }

    #[must_use]
    pub fn contains(&self, ch: char) -> bool {
        self.get(ch) > 0
    }

    /// Number of distinct characters.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (char, usize)> + '_ {
        self.entries.iter().copied()
    }
}

impl Serialize for CharacterFrequencyMap {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (ch, count) in &self.entries {
            map.serialize_entry(ch, count)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for CharacterFrequencyMap {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct FrequencyVisitor;

        impl<'de> Visitor<'de> for FrequencyVisitor {
            type Value = CharacterFrequencyMap;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map from single characters to counts")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
                let mut entries = Vec::with_capacity(access.size_hint().unwrap_or(0));
                while let Some((ch, count)) = access.next_entry::<char, usize>()? {
                    entries.push((ch, count));
                }
                Ok(CharacterFrequencyMap { entries })
            }
        }

        deserializer.deserialize_map(FrequencyVisitor)
    }
}

/// Derived properties of a string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PropertyBundle {
    /// Character (not byte) count.
    pub length: usize,
    pub is_palindrome: bool,
    /// Distinct characters in the unnormalized value.
    pub unique_characters: usize,
    pub word_count: usize,
    /// Content address of the value; doubles as the record id.
    pub sha256_hash: String,
    pub character_frequency_map: CharacterFrequencyMap,
}

/// Reduce `value` to its ASCII alphanumeric characters, lowercased.
///
/// Only used for palindrome detection.
#[must_use]
pub fn normalize(value: &str) -> String {
    value
        .chars()
        .filter(char::is_ascii_alphanumeric)
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

/// Whether the normalized form of `value` reads the same in both directions.
///
/// An empty normalized form counts as a palindrome.
#[must_use]
pub fn is_palindrome(value: &str) -> bool {
    let normalized = normalize(value);
    normalized.bytes().eq(normalized.bytes().rev())
}

/// Whitespace-delimited token count.
#[must_use]
pub fn word_count(value: &str) -> usize {
    value.split_whitespace().count()
}

/// Compute every derived property of `value`.
///
/// Total over all inputs, including the empty string.
#[must_use]
pub fn analyze(value: &str) -> PropertyBundle {
    let character_frequency_map = CharacterFrequencyMap::from_str_counts(value);

    PropertyBundle {
        length: value.chars().count(),
        is_palindrome: is_palindrome(value),
        unique_characters: character_frequency_map.len(),
        word_count: word_count(value),
        sha256_hash: content_hash(value),
        character_frequency_map,
    }
}
