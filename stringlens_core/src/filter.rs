//! Structured filters over analyzed records.
//!
//! A [`FilterSet`] is a conjunction of optional constraints. It is built
//! either from request parameters ([`FilterSet::from_params`]) or by the
//! natural-language parser, and evaluated with [`FilterSet::matches`].

use serde::{Deserialize, Serialize};

use crate::error::{Result, StringError};
use crate::record::AnalyzedRecord;

pub const PARAM_IS_PALINDROME: &str = "is_palindrome";
pub const PARAM_MIN_LENGTH: &str = "min_length";
pub const PARAM_MAX_LENGTH: &str = "max_length";
pub const PARAM_WORD_COUNT: &str = "word_count";
pub const PARAM_CONTAINS_CHARACTER: &str = "contains_character";

/// Conjunction of record constraints. Absent fields do not constrain.
///
/// Length bounds are signed so that parser arithmetic such as
/// "shorter than 0" stays representable; such a bound matches nothing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterSet {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_palindrome: Option<bool>,
    /// Inclusive.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_length: Option<i64>,
    /// Inclusive.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_length: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub word_count: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contains_character: Option<char>,
}

impl FilterSet {
    /// Build a filter set from string request parameters.
    ///
    /// Unknown keys are ignored. A recognised key whose value cannot be
    /// interpreted fails with a validation error naming that key.
    pub fn from_params<I, K, V>(params: I) -> Result<Self>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut filters = Self::default();

        for (key, value) in params {
            let key = key.as_ref();
            let value = value.as_ref();
            match key {
                PARAM_IS_PALINDROME => filters.is_palindrome = Some(parse_bool(key, value)?),
                PARAM_MIN_LENGTH => filters.min_length = Some(parse_int(key, value)?),
                PARAM_MAX_LENGTH => filters.max_length = Some(parse_int(key, value)?),
                PARAM_WORD_COUNT => filters.word_count = Some(parse_int(key, value)?),
                PARAM_CONTAINS_CHARACTER => {
                    filters.contains_character = Some(parse_single_char(key, value)?);
                }
                _ => {}
            }
        }

        Ok(filters)
    }

    /// True when no constraint is set.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.is_palindrome.is_none()
            && self.min_length.is_none()
            && self.max_length.is_none()
            && self.word_count.is_none()
            && self.contains_character.is_none()
    }

    /// Whether `record` satisfies every constraint.
    #[must_use]
    pub fn matches(&self, record: &AnalyzedRecord) -> bool {
        let length = to_i64(record.length());

        self.is_palindrome
            .is_none_or(|expected| record.is_palindrome() == expected)
            && self.min_length.is_none_or(|min| length >= min)
            && self.max_length.is_none_or(|max| length <= max)
            && self
                .word_count
                .is_none_or(|count| to_i64(record.word_count()) == count)
            && self
                .contains_character
                .is_none_or(|ch| record.contains_character(ch))
    }
}

fn to_i64(n: usize) -> i64 {
    i64::try_from(n).unwrap_or(i64::MAX)
}

fn parse_bool(field: &str, raw: &str) -> Result<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "true" | "1" => Ok(true),
        "false" | "0" => Ok(false),
        _ => Err(StringError::validation(
            field,
            format!("expected true, false, 1 or 0, got {raw:?}"),
        )),
    }
}

fn parse_int(field: &str, raw: &str) -> Result<i64> {
    raw.trim()
        .parse::<i64>()
        .map_err(|_| StringError::validation(field, format!("expected an integer, got {raw:?}")))
}

fn parse_single_char(field: &str, raw: &str) -> Result<char> {
    let mut chars = raw.chars();
    match (chars.next(), chars.next()) {
        (Some(ch), None) => Ok(ch),
        _ => Err(StringError::validation(
            field,
            format!("must be a single character, got {raw:?}"),
        )),
    }
}
