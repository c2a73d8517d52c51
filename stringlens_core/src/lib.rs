#![deny(
    clippy::all,
    clippy::nursery,
    clippy::pedantic,
    clippy::style,
    clippy::complexity,
    clippy::perf,
    clippy::correctness,
    clippy::suspicious,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(
    clippy::similar_names,
    clippy::missing_safety_doc,
    clippy::missing_panics_doc,
    clippy::missing_errors_doc,
    clippy::module_name_repetitions
)]

pub mod analysis;
pub mod error;
pub mod filter;
pub mod query;
mod record;
mod repository;
pub mod service;
mod store;
mod util;

pub use analysis::{CharacterFrequencyMap, PropertyBundle, analyze};
pub use error::{Result, StatusCategory, StringError};
pub use filter::FilterSet;
pub use query::{FilterAssignment, QueryParser, QueryRule};
pub use record::AnalyzedRecord;
pub use repository::{PutOutcome, StringRecordRepo};
pub use service::{InterpretedQuery, ListResponse, NaturalLanguageResponse, StringService};
pub use store::StringStore;
pub use util::content_hash;
