//! Calendar error types.

use thiserror::Error;

/// Calendar errors.
///
/// This enum is marked `#[non_exhaustive]` to allow adding new variants
/// in future versions without breaking downstream code.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum Error {
    /// No event with the given id exists in the store.
    #[error("event {0} not found")]
    NotFound(i64),

    /// One or more required fields are missing or empty.
    #[error("invalid event: missing {}", .0.join(", "))]
    Validation(Vec<&'static str>),

    /// A value could not be parsed.
    #[error("invalid {field}: {reason}")]
    MalformedInput { field: &'static str, reason: String },
}

impl Error {
    pub(crate) fn malformed(field: &'static str, reason: impl Into<String>) -> Self {
        Self::MalformedInput {
            field,
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_lists_fields() {
        let err = Error::Validation(vec!["title", "date"]);
        assert_eq!(err.to_string(), "invalid event: missing title, date");
    }

    #[test]
    fn test_malformed_message() {
        let err = Error::malformed("user_id", "not a number");
        assert_eq!(err.to_string(), "invalid user_id: not a number");
    }
}
