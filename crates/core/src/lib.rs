#![forbid(unsafe_code)]

pub mod error;
pub mod filter;
pub mod model;
pub mod session;
pub mod stats;
pub mod time;

pub use error::Error;
pub use filter::{DifficultyFilter, TopicFilter, filter_questions};
pub use session::QuizSession;
pub use stats::SessionStats;
pub use time::Clock;
