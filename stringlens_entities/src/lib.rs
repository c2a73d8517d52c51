//! Database entities.

pub mod analyzed_strings;
