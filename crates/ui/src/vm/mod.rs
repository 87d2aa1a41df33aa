mod content_vm;
mod quiz_vm;
mod time_fmt;

pub use content_vm::sanitize_math_html;
pub use quiz_vm::{HistoryItemVm, OptionVm, QuestionVm, QuizIntent, QuizVm};
pub use time_fmt::format_elapsed;
