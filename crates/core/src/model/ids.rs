use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Unique identifier for a question within a loaded bank.
///
/// Serial numbers come from the spreadsheet's `Serial No` column, which may
/// hold integers or strings; both are carried as trimmed text.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct QuestionId(String);

impl QuestionId {
    /// Creates a validated `QuestionId`.
    ///
    /// # Errors
    ///
    /// Returns `QuestionIdError::Empty` if the value is empty after trimming.
    pub fn new(value: impl Into<String>) -> Result<Self, QuestionIdError> {
        let raw = value.into();
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(QuestionIdError::Empty);
        }
        Ok(Self(trimmed.to_string()))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for QuestionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Debug for QuestionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "QuestionId({})", self.0)
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum QuestionIdError {
    #[error("question id cannot be empty")]
    Empty,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn id_trims_surrounding_whitespace() {
        let id = QuestionId::new("  12 ").unwrap();
        assert_eq!(id.as_str(), "12");
    }

    #[test]
    fn empty_id_is_rejected() {
        assert_eq!(QuestionId::new("   "), Err(QuestionIdError::Empty));
    }
}
