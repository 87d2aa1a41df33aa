use std::fmt;
use std::str::FromStr;
use thiserror::Error;

use crate::model::ids::QuestionIdError;
use crate::model::{OptionKey, OptionSet, QuestionId};

/// Closed set of difficulty labels attached to each question.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        }
    }

    /// All difficulty levels, in display order.
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for Difficulty {
    type Err = DifficultyParseError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim() {
            "Easy" => Ok(Difficulty::Easy),
            "Medium" => Ok(Difficulty::Medium),
            "Hard" => Ok(Difficulty::Hard),
            other => Err(DifficultyParseError::Unknown {
                raw: other.to_string(),
            }),
        }
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum DifficultyParseError {
    #[error("unknown difficulty tag {raw:?} (expected Easy, Medium or Hard)")]
    Unknown { raw: String },
}

/// Validated topic label (trimmed, non-empty).
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TopicTag(String);

impl TopicTag {
    /// Creates a validated topic tag.
    ///
    /// # Errors
    ///
    /// Returns `QuestionError::EmptyTopic` if the tag is empty after trimming.
    pub fn new(value: impl Into<String>) -> Result<Self, QuestionError> {
        let raw = value.into();
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(QuestionError::EmptyTopic);
        }
        Ok(Self(trimmed.to_string()))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TopicTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Debug for TopicTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TopicTag({})", self.0)
    }
}

/// One multiple-choice question, immutable once loaded.
///
/// Question text may embed `$...$` / `$$...$$` math markup; it is carried
/// verbatim and left to the presentation layer to typeset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    id: QuestionId,
    text: String,
    options: OptionSet,
    correct: OptionKey,
    topic: TopicTag,
    difficulty: Difficulty,
}

impl Question {
    /// Build a question, checking the cross-field integrity the spreadsheet
    /// contract promises.
    ///
    /// # Errors
    ///
    /// Returns `QuestionError::EmptyText` for blank question text and
    /// `QuestionError::CorrectKeyMissing` when the correct key does not name
    /// an entry of the option set.
    pub fn new(
        id: QuestionId,
        text: impl Into<String>,
        options: OptionSet,
        correct: OptionKey,
        topic: TopicTag,
        difficulty: Difficulty,
    ) -> Result<Self, QuestionError> {
        let text = text.into();
        if text.trim().is_empty() {
            return Err(QuestionError::EmptyText { id });
        }
        if !options.contains(&correct) {
            return Err(QuestionError::CorrectKeyMissing {
                id,
                key: correct.to_string(),
            });
        }

        Ok(Self {
            id,
            text,
            options,
            correct,
            topic,
            difficulty,
        })
    }

    #[must_use]
    pub fn id(&self) -> &QuestionId {
        &self.id
    }

    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[must_use]
    pub fn options(&self) -> &OptionSet {
        &self.options
    }

    #[must_use]
    pub fn correct(&self) -> &OptionKey {
        &self.correct
    }

    #[must_use]
    pub fn topic(&self) -> &TopicTag {
        &self.topic
    }

    #[must_use]
    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum QuestionError {
    #[error("question {id} has empty text")]
    EmptyText { id: QuestionId },

    #[error("question {id}: correct option {key:?} is not in the option set")]
    CorrectKeyMissing { id: QuestionId, key: String },

    #[error("topic tag cannot be empty")]
    EmptyTopic,

    #[error(transparent)]
    Id(#[from] QuestionIdError),
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_options() -> OptionSet {
        OptionSet::parse("A@@10, B@@15, C@@20, D@@25").unwrap()
    }

    #[test]
    fn correct_key_must_exist_in_options() {
        let err = Question::new(
            QuestionId::new("7").unwrap(),
            "If $x = 2$, what is $x^2$?",
            sample_options(),
            OptionKey::new("E").unwrap(),
            TopicTag::new("Algebra").unwrap(),
            Difficulty::Easy,
        )
        .unwrap_err();

        assert!(matches!(err, QuestionError::CorrectKeyMissing { .. }));
    }

    #[test]
    fn blank_text_is_rejected() {
        let err = Question::new(
            QuestionId::new("7").unwrap(),
            "   ",
            sample_options(),
            OptionKey::new("A").unwrap(),
            TopicTag::new("Algebra").unwrap(),
            Difficulty::Easy,
        )
        .unwrap_err();

        assert!(matches!(err, QuestionError::EmptyText { .. }));
    }

    #[test]
    fn difficulty_parses_closed_set_only() {
        assert_eq!("Medium".parse::<Difficulty>(), Ok(Difficulty::Medium));
        assert_eq!(" Hard ".parse::<Difficulty>(), Ok(Difficulty::Hard));
        assert!("Brutal".parse::<Difficulty>().is_err());
    }
}
