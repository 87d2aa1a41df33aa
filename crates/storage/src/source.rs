use thiserror::Error;

use quiz_core::model::Question;

/// Errors surfaced by question sources.
///
/// A malformed row is a non-recoverable data integrity condition for the
/// whole load: callers get a row-numbered diagnostic instead of a silently
/// truncated bank.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum StorageError {
    #[error("cannot read workbook: {0}")]
    Workbook(#[from] calamine::Error),

    #[error("workbook has no worksheets")]
    NoWorksheet,

    #[error("worksheet has no header row")]
    MissingHeader,

    #[error("missing required column {name:?}")]
    MissingColumn { name: &'static str },

    #[error("row {row}: {source}")]
    BadRow { row: usize, source: quiz_core::Error },
}

/// One-shot source of an ordered question sequence.
///
/// Loading happens once at session start; the result is treated as immutable
/// for the rest of the process lifetime.
pub trait QuestionSource {
    /// Read the full ordered question sequence.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` when the backing file is missing, the workbook
    /// is malformed, or any row fails domain validation.
    fn load(&self) -> Result<Vec<Question>, StorageError>;
}
