#![forbid(unsafe_code)]

pub mod fallback;
pub mod source;
pub mod xlsx;

pub use fallback::fallback_questions;
pub use source::{QuestionSource, StorageError};
pub use xlsx::XlsxQuestionBank;
