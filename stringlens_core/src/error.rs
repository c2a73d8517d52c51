use std::fmt;

use serde::Serialize;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, StringError>;

#[derive(Debug, Error)]
pub enum StringError {
    #[error("Invalid {field}: {message}")]
    Validation { field: String, message: String },

    #[error("String already exists in the system (id {id})")]
    Conflict { id: String },

    #[error("String does not exist in the system: {value:?}")]
    NotFound { value: String },

    #[error("Unable to parse natural language query: {query:?}")]
    ParseFailure { query: String },

    #[error("Storage error: {0}")]
    Storage(anyhow::Error),
}

impl StringError {
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Validation {
            field: field.into(),
            message: message.into(),
        }
    }

    #[must_use]
    pub const fn category(&self) -> StatusCategory {
        match self {
            Self::Validation { .. } => StatusCategory::BadInput,
            Self::Conflict { .. } => StatusCategory::AlreadyExists,
            Self::NotFound { .. } => StatusCategory::NotFound,
            Self::ParseFailure { .. } => StatusCategory::NotUnderstood,
            Self::Storage(_) => StatusCategory::Internal,
        }
    }

    /// Field named by a validation failure.
    #[must_use]
    pub fn field(&self) -> Option<&str> {
        match self {
            Self::Validation { field, .. } => Some(field.as_str()),
            _ => None,
        }
    }
}

impl From<anyhow::Error> for StringError {
    fn from(err: anyhow::Error) -> Self {
        Self::Storage(err)
    }
}

/// Caller-facing class of a [`StringError`].
///
/// Each error kind maps to exactly one category, and the category's code
/// and name never change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StatusCategory {
    BadInput,
    AlreadyExists,
    NotFound,
    NotUnderstood,
    Internal,
}

impl StatusCategory {
    /// HTTP-style status code.
    #[must_use]
    pub const fn status_code(self) -> u16 {
        match self {
            Self::BadInput => 400,
            Self::AlreadyExists => 409,
            Self::NotFound => 404,
            Self::NotUnderstood => 422,
            Self::Internal => 500,
        }
    }

    /// Process exit code for command-line callers.
    #[must_use]
    pub const fn exit_code(self) -> u8 {
        match self {
            Self::BadInput => 2,
            Self::AlreadyExists => 3,
            Self::NotFound => 4,
            Self::NotUnderstood => 5,
            Self::Internal => 1,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::BadInput => "bad_input",
            Self::AlreadyExists => "already_exists",
            Self::NotFound => "not_found",
            Self::NotUnderstood => "not_understood",
            Self::Internal => "internal",
        }
    }
}

impl fmt::Display for StatusCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_categories_are_distinct() {
        let errors = [
            StringError::validation("min_length", "must be an integer"),
            StringError::Conflict { id: "x".into() },
            StringError::NotFound { value: "x".into() },
            StringError::ParseFailure { query: "x".into() },
            StringError::Storage(anyhow::anyhow!("disk full")),
        ];

        let mut codes: Vec<u16> = errors.iter().map(|e| e.category().status_code()).collect();
        codes.sort_unstable();
        codes.dedup();
        assert_eq!(codes.len(), errors.len());
    }

    #[test]
    fn test_validation_names_field() {
        let err = StringError::validation("contains_character", "must be a single character");
        assert_eq!(err.field(), Some("contains_character"));
        assert_eq!(err.category(), StatusCategory::BadInput);
        assert_eq!(
            err.to_string(),
            "Invalid contains_character: must be a single character"
        );
    }

    #[test]
    fn test_category_names() {
        assert_eq!(StatusCategory::AlreadyExists.to_string(), "already_exists");
        assert_eq!(StatusCategory::NotUnderstood.status_code(), 422);
        assert_eq!(StatusCategory::NotFound.exit_code(), 4);
    }
}
