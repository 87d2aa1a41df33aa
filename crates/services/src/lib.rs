#![forbid(unsafe_code)]

pub mod question_service;
pub mod session_service;

pub use quiz_core::Clock;

pub use question_service::{BankOrigin, LoadedBank, QuestionService};
pub use session_service::{SessionProgress, SessionService};
