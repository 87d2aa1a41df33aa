use thiserror::Error;

use crate::model::{DifficultyParseError, OptionsParseError, QuestionError, QuestionIdError};

/// Umbrella error for building domain values from raw spreadsheet fields.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
    #[error(transparent)]
    Question(#[from] QuestionError),
    #[error(transparent)]
    Options(#[from] OptionsParseError),
    #[error(transparent)]
    Difficulty(#[from] DifficultyParseError),
    #[error(transparent)]
    Id(#[from] QuestionIdError),
}
