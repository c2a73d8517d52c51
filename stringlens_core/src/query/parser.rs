use tracing::debug;

use crate::error::{Result, StringError};
use crate::filter::FilterSet;

use super::rules::{QueryRule, default_rules};

/// Rule-based translator from free text to a [`FilterSet`].
///
/// Rules run in order over the lowercased query. Several rules may fire for
/// one query; a field keeps the first value assigned to it.
pub struct QueryParser {
    rules: Vec<Box<dyn QueryRule>>,
}

impl QueryParser {
    #[must_use]
    pub fn new(rules: Vec<Box<dyn QueryRule>>) -> Self {
        Self { rules }
    }

    #[must_use]
    pub fn with_defaults() -> Self {
        Self::new(default_rules())
    }

    /// Translate `query` into filters. Empty when nothing was recognised.
    #[must_use]
    pub fn parse(&self, query: &str) -> FilterSet {
        let lower = query.to_lowercase();
        let mut filters = FilterSet::default();

        for rule in &self.rules {
            if let Some(assignment) = rule.evaluate(&lower) {
                let applied = assignment.apply_to(&mut filters);
                debug!(rule = rule.name(), ?assignment, applied, "query rule fired");
            }
        }

        filters
    }

    /// Like [`parse`](Self::parse), but an empty result is a
    /// [`StringError::ParseFailure`] rather than "match everything".
    ///
    /// Blank text is rejected first as a validation error on `query`.
    pub fn interpret(&self, query: &str) -> Result<FilterSet> {
        if query.trim().is_empty() {
            return Err(StringError::validation("query", "missing query text"));
        }

        let filters = self.parse(query);
        if filters.is_empty() {
            return Err(StringError::ParseFailure {
                query: query.to_string(),
            });
        }
        Ok(filters)
    }

    /// Names of the configured rules, in evaluation order.
    #[must_use]
    pub fn rule_names(&self) -> Vec<&'static str> {
        self.rules.iter().map(|r| r.name()).collect()
    }

    /// Append a rule. It runs after every existing rule.
    pub fn add_rule(&mut self, rule: Box<dyn QueryRule>) {
        self.rules.push(rule);
    }
}

impl Default for QueryParser {
    fn default() -> Self {
        Self::with_defaults()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::FilterAssignment;

    #[test]
    fn test_palindromic_first_vowel() {
        let parser = QueryParser::with_defaults();
        let filters = parser.parse("palindromic strings that contain the first vowel");
        assert_eq!(
            filters,
            FilterSet {
                is_palindrome: Some(true),
                contains_character: Some('a'),
                ..FilterSet::default()
            }
        );
    }

    #[test]
    fn test_length_phrases() {
        let parser = QueryParser::with_defaults();
        assert_eq!(
            parser.parse("strings longer than 10"),
            FilterSet {
                min_length: Some(11),
                ..FilterSet::default()
            }
        );
        assert_eq!(
            parser.parse("strings shorter than 5"),
            FilterSet {
                max_length: Some(4),
                ..FilterSet::default()
            }
        );
    }

    #[test]
    fn test_both_bounds_combine() {
        let parser = QueryParser::with_defaults();
        let filters = parser.parse("Strings LONGER THAN 2 and shorter than 9");
        assert_eq!(filters.min_length, Some(3));
        assert_eq!(filters.max_length, Some(8));
    }

    #[test]
    fn test_single_word() {
        let parser = QueryParser::with_defaults();
        assert_eq!(
            parser.parse("single word strings"),
            FilterSet {
                word_count: Some(1),
                ..FilterSet::default()
            }
        );
    }

    #[test]
    fn test_all_rules_fire_together() {
        let parser = QueryParser::with_defaults();
        let filters =
            parser.parse("single word palindromes longer than 3 shorter than 8 containing the letter e");
        assert_eq!(
            filters,
            FilterSet {
                is_palindrome: Some(true),
                min_length: Some(4),
                max_length: Some(7),
                word_count: Some(1),
                contains_character: Some('e'),
            }
        );
    }

    #[test]
    fn test_unrecognised_query_is_parse_failure() {
        let parser = QueryParser::with_defaults();
        assert!(parser.parse("show me cool strings").is_empty());

        let err = parser.interpret("show me cool strings").unwrap_err();
        assert!(matches!(err, StringError::ParseFailure { .. }));
    }

    #[test]
    fn test_blank_query_is_validation_error() {
        let parser = QueryParser::with_defaults();
        for blank in ["", "   ", "\t\n"] {
            let err = parser.interpret(blank).unwrap_err();
            assert_eq!(err.field(), Some("query"));
        }
    }

    #[test]
    #[expect(clippy::expect_used, reason = "Test failure should panic with context")]
    fn test_oversized_bound_is_understood() {
        let parser = QueryParser::with_defaults();
        let filters = parser
            .interpret("strings longer than 99999999999999999999")
            .expect("an oversized bound is still a recognised phrase");
        assert_eq!(filters.min_length, Some(i64::MAX));
    }

    #[test]
    fn test_custom_rule_cannot_override_earlier_field() {
        struct AlwaysShort;

        impl QueryRule for AlwaysShort {
            fn name(&self) -> &'static str {
                "always_short"
            }

            fn evaluate(&self, _query: &str) -> Option<FilterAssignment> {
                Some(FilterAssignment::MaxLength(1))
            }
        }

        let mut parser = QueryParser::with_defaults();
        parser.add_rule(Box::new(AlwaysShort));
        assert_eq!(parser.rule_names().last(), Some(&"always_short"));

        assert_eq!(parser.parse("shorter than 5").max_length, Some(4));
        assert_eq!(parser.parse("anything").max_length, Some(1));
    }
}
