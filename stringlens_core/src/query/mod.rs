//! Natural-language query interpretation.
//!
//! Free text is matched against a fixed set of deterministic rules and
//! turned into the same [`FilterSet`](crate::filter::FilterSet) used for
//! structured listing.

pub mod parser;
pub mod rules;

pub use parser::QueryParser;
pub use rules::{FilterAssignment, QueryRule, default_rules};
