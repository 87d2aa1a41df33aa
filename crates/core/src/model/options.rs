use std::fmt;
use thiserror::Error;

/// Short label identifying one answer choice within a question ("A".."D").
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct OptionKey(String);

impl OptionKey {
    /// Creates a validated option key (trimmed, non-empty).
    ///
    /// # Errors
    ///
    /// Returns `OptionsParseError::EmptyKey` if the key is empty after
    /// trimming.
    pub fn new(value: impl Into<String>) -> Result<Self, OptionsParseError> {
        let raw = value.into();
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(OptionsParseError::EmptyKey);
        }
        Ok(Self(trimmed.to_string()))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for OptionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Debug for OptionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "OptionKey({})", self.0)
    }
}

/// Ordered set of answer choices for one question.
///
/// Presentation order follows parse order; keys are unique within a set.
/// Option text may embed math markup, which is opaque at this layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionSet {
    entries: Vec<(OptionKey, String)>,
}

impl OptionSet {
    /// Parse a raw options string of comma-separated `KEY@@value` pairs.
    ///
    /// Keys and values are whitespace-trimmed. A malformed entry is a data
    /// integrity failure for the whole set, not something to skip over.
    ///
    /// # Errors
    ///
    /// Returns `OptionsParseError::Empty` for a blank input,
    /// `OptionsParseError::MissingSeparator` when an entry has no `@@`,
    /// `OptionsParseError::EmptyKey` for a blank key, and
    /// `OptionsParseError::DuplicateKey` when a key repeats.
    pub fn parse(raw: &str) -> Result<Self, OptionsParseError> {
        if raw.trim().is_empty() {
            return Err(OptionsParseError::Empty);
        }

        let mut entries: Vec<(OptionKey, String)> = Vec::new();
        for entry in raw.split(',') {
            let entry = entry.trim();
            let Some((key, value)) = entry.split_once("@@") else {
                return Err(OptionsParseError::MissingSeparator {
                    entry: entry.to_string(),
                });
            };
            let key = OptionKey::new(key)?;
            if entries.iter().any(|(existing, _)| *existing == key) {
                return Err(OptionsParseError::DuplicateKey { key: key.0 });
            }
            entries.push((key, value.trim().to_string()));
        }

        Ok(Self { entries })
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn contains(&self, key: &OptionKey) -> bool {
        self.entries.iter().any(|(existing, _)| existing == key)
    }

    /// Option text for a key, if present.
    #[must_use]
    pub fn text(&self, key: &OptionKey) -> Option<&str> {
        self.entries
            .iter()
            .find(|(existing, _)| existing == key)
            .map(|(_, value)| value.as_str())
    }

    /// Entries in presentation order.
    pub fn iter(&self) -> impl Iterator<Item = (&OptionKey, &str)> {
        self.entries
            .iter()
            .map(|(key, value)| (key, value.as_str()))
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum OptionsParseError {
    #[error("options string is empty")]
    Empty,

    #[error("option entry {entry:?} is missing the '@@' separator")]
    MissingSeparator { entry: String },

    #[error("option key cannot be empty")]
    EmptyKey,

    #[error("duplicate option key {key:?}")]
    DuplicateKey { key: String },
}
