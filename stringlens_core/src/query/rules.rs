//! Matcher rules for natural-language filter queries.
//!
//! Each rule inspects the lowercased query on its own and yields at most one
//! [`FilterAssignment`]. Rules never see each other's output.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::filter::FilterSet;

#[expect(clippy::unwrap_used, reason = "Static patterns are known to compile")]
static PALINDROME: Lazy<Regex> = Lazy::new(|| Regex::new(r"palindrom(?:es?|ics?)").unwrap());

#[expect(clippy::unwrap_used, reason = "Static patterns are known to compile")]
static WORD_COUNT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"([0-9]+|single|one|two)\s+word").unwrap());

#[expect(clippy::unwrap_used, reason = "Static patterns are known to compile")]
static LONGER_THAN: Lazy<Regex> = Lazy::new(|| Regex::new(r"longer than\s+([0-9]+)").unwrap());

#[expect(clippy::unwrap_used, reason = "Static patterns are known to compile")]
static SHORTER_THAN: Lazy<Regex> = Lazy::new(|| Regex::new(r"shorter than\s+([0-9]+)").unwrap());

#[expect(clippy::unwrap_used, reason = "Static patterns are known to compile")]
static LETTER: Lazy<Regex> = Lazy::new(|| Regex::new(r#"letter\s+["']?([a-z])"#).unwrap());

/// The single field a rule sets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterAssignment {
    IsPalindrome(bool),
    WordCount(i64),
    MinLength(i64),
    MaxLength(i64),
    ContainsCharacter(char),
}

impl FilterAssignment {
    /// Write this assignment into `filters` unless the field is already set.
    ///
    /// Returns whether the field was written.
    pub fn apply_to(self, filters: &mut FilterSet) -> bool {
        match self {
            Self::IsPalindrome(v) => set_once(&mut filters.is_palindrome, v),
            Self::WordCount(v) => set_once(&mut filters.word_count, v),
            Self::MinLength(v) => set_once(&mut filters.min_length, v),
            Self::MaxLength(v) => set_once(&mut filters.max_length, v),
            Self::ContainsCharacter(v) => set_once(&mut filters.contains_character, v),
        }
    }
}

/// Parse an ASCII digit run, clamping values past `i64::MAX`.
fn parse_saturating(digits: &str) -> i64 {
    digits.parse().unwrap_or(i64::MAX)
}

fn set_once<T>(slot: &mut Option<T>, value: T) -> bool {
    if slot.is_some() {
        return false;
    }
    *slot = Some(value);
    true
}

/// A deterministic matcher over a lowercased query.
pub trait QueryRule: Send + Sync {
    /// Stable rule name, used in logs.
    fn name(&self) -> &'static str;

    /// Inspect `query` (already lowercased) and produce zero or one assignment.
    fn evaluate(&self, query: &str) -> Option<FilterAssignment>;
}

/// "palindrome", "palindromes", "palindromic", "palindromics".
#[derive(Debug, Clone, Copy, Default)]
pub struct PalindromeRule;

impl QueryRule for PalindromeRule {
    fn name(&self) -> &'static str {
        "palindrome"
    }

    fn evaluate(&self, query: &str) -> Option<FilterAssignment> {
        PALINDROME
            .is_match(query)
            .then_some(FilterAssignment::IsPalindrome(true))
    }
}

/// "`<n>` word", "single word", "one word", "two word". First match only.
///
/// Matches on the "word" prefix, so "words" and "wordy" count too.
#[derive(Debug, Clone, Copy, Default)]
pub struct WordCountRule;

impl WordCountRule {
    fn count_from(token: &str) -> Option<i64> {
        match token {
            "single" | "one" => Some(1),
            "two" => Some(2),
            digits => Some(parse_saturating(digits)),
        }
    }
}

impl QueryRule for WordCountRule {
    fn name(&self) -> &'static str {
        "word_count"
    }

    fn evaluate(&self, query: &str) -> Option<FilterAssignment> {
        let caps = WORD_COUNT.captures(query)?;
        Self::count_from(caps.get(1)?.as_str()).map(FilterAssignment::WordCount)
    }
}

/// "longer than N" sets an inclusive minimum of N + 1.
#[derive(Debug, Clone, Copy, Default)]
pub struct LongerThanRule;

impl QueryRule for LongerThanRule {
    fn name(&self) -> &'static str {
        "longer_than"
    }

    fn evaluate(&self, query: &str) -> Option<FilterAssignment> {
        let n = parse_saturating(LONGER_THAN.captures(query)?.get(1)?.as_str());
        Some(FilterAssignment::MinLength(n.saturating_add(1)))
    }
}

/// "shorter than N" sets an inclusive maximum of N - 1.
#[derive(Debug, Clone, Copy, Default)]
pub struct ShorterThanRule;

impl QueryRule for ShorterThanRule {
    fn name(&self) -> &'static str {
        "shorter_than"
    }

    fn evaluate(&self, query: &str) -> Option<FilterAssignment> {
        let n = parse_saturating(SHORTER_THAN.captures(query)?.get(1)?.as_str());
        Some(FilterAssignment::MaxLength(n.saturating_sub(1)))
    }
}

/// "first vowel" always means `a`; otherwise "contain ... letter X" means X.
#[derive(Debug, Clone, Copy, Default)]
pub struct ContainsCharacterRule;

impl QueryRule for ContainsCharacterRule {
    fn name(&self) -> &'static str {
        "contains_character"
    }

    fn evaluate(&self, query: &str) -> Option<FilterAssignment> {
        if query.contains("first vowel") {
            return Some(FilterAssignment::ContainsCharacter('a'));
        }
        if !query.contains("contain") {
            return None;
        }
        let letter = LETTER.captures(query)?.get(1)?.as_str().chars().next()?;
        Some(FilterAssignment::ContainsCharacter(letter))
    }
}

/// Rules in evaluation order.
#[must_use]
pub fn default_rules() -> Vec<Box<dyn QueryRule>> {
    vec![
        Box::new(PalindromeRule),
        Box::new(WordCountRule),
        Box::new(LongerThanRule),
        Box::new(ShorterThanRule),
        Box::new(ContainsCharacterRule),
    ]
}
