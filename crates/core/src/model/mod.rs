mod ids;
mod options;
mod question;
mod submission;

pub use ids::{QuestionId, QuestionIdError};
pub use options::{OptionKey, OptionSet, OptionsParseError};
pub use question::{Difficulty, DifficultyParseError, Question, QuestionError, TopicTag};
pub use submission::Submission;
