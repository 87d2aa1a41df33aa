use quiz_core::model::{Difficulty, OptionKey, TopicTag};
use quiz_core::{DifficultyFilter, TopicFilter};
use services::SessionService;

use crate::vm::content_vm::sanitize_math_html;
use crate::vm::time_fmt::format_elapsed;

/// Discrete user action against the quiz session.
///
/// Filter values arrive as the raw strings of the sidebar selects; the vm
/// maps them back onto the typed filters.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum QuizIntent {
    SelectOption(String),
    Submit,
    Next,
    Previous,
    Reset,
    SetTopic(String),
    SetDifficulty(String),
}

/// One answer choice, ready to render.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OptionVm {
    pub key: String,
    pub text_html: String,
    pub selected: bool,
}

/// The displayed question, ready to render.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuestionVm {
    pub serial: String,
    pub text_html: String,
    pub options: Vec<OptionVm>,
}

/// One line of the answer-history panel.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HistoryItemVm {
    pub serial: String,
    pub selected: String,
    pub is_correct: bool,
}

/// View model over a `SessionService`: turns intents into mutations and
/// session state into render-ready labels.
#[derive(Debug, Clone)]
pub struct QuizVm {
    service: SessionService,
}

impl QuizVm {
    #[must_use]
    pub fn new(service: SessionService) -> Self {
        Self { service }
    }

    pub fn apply(&mut self, intent: QuizIntent) {
        match intent {
            QuizIntent::SelectOption(raw) => {
                // Keys originate from the rendered option set, so a parse
                // failure here means a stale event; ignore it.
                if let Ok(key) = OptionKey::new(raw) {
                    self.service.select_option(key);
                }
            }
            QuizIntent::Submit => {
                let _ = self.service.submit();
            }
            QuizIntent::Next => {
                let _ = self.service.next();
            }
            QuizIntent::Previous => {
                let _ = self.service.previous();
            }
            QuizIntent::Reset => self.service.reset(),
            QuizIntent::SetTopic(raw) => {
                let filter = if raw == "All" {
                    Some(TopicFilter::All)
                } else {
                    TopicTag::new(raw).ok().map(TopicFilter::Topic)
                };
                if let Some(filter) = filter {
                    self.service.set_topic(filter);
                }
            }
            QuizIntent::SetDifficulty(raw) => {
                let filter = if raw == "All" {
                    Some(DifficultyFilter::All)
                } else {
                    raw.parse::<Difficulty>().ok().map(DifficultyFilter::Level)
                };
                if let Some(filter) = filter {
                    self.service.set_difficulty(filter);
                }
            }
        }
    }

    #[must_use]
    pub fn current(&self) -> Option<QuestionVm> {
        let question = self.service.current_question()?;
        let highlighted = self.service.session().highlighted();
        let options = question
            .options()
            .iter()
            .map(|(key, text)| OptionVm {
                key: key.to_string(),
                text_html: sanitize_math_html(text),
                selected: highlighted == Some(key),
            })
            .collect();

        Some(QuestionVm {
            serial: question.id().to_string(),
            text_html: sanitize_math_html(question.text()),
            options,
        })
    }

    #[must_use]
    pub fn at_first(&self) -> bool {
        self.service.session().at_first()
    }

    #[must_use]
    pub fn at_last(&self) -> bool {
        self.service.session().at_last()
    }

    /// Sidebar select value for the topic filter.
    #[must_use]
    pub fn topic_value(&self) -> String {
        match self.service.topic() {
            TopicFilter::All => "All".to_string(),
            TopicFilter::Topic(topic) => topic.to_string(),
        }
    }

    /// Sidebar select value for the difficulty filter.
    #[must_use]
    pub fn difficulty_value(&self) -> String {
        match self.service.difficulty() {
            DifficultyFilter::All => "All".to_string(),
            DifficultyFilter::Level(level) => level.to_string(),
        }
    }

    /// "attempted/total" over the active sequence.
    #[must_use]
    pub fn attempted_label(&self) -> String {
        let progress = self.service.progress();
        format!("{}/{}", progress.attempted, progress.total)
    }

    /// "position / total" for the navigation footer; `None` when the filtered
    /// sequence is empty.
    #[must_use]
    pub fn position_label(&self) -> Option<String> {
        let progress = self.service.progress();
        (progress.total > 0).then(|| format!("{} / {}", progress.position, progress.total))
    }

    /// Success percentage with one decimal, absent until something is
    /// attempted.
    #[must_use]
    pub fn success_rate_label(&self) -> Option<String> {
        self.service
            .stats()
            .success_rate()
            .map(|rate| format!("{rate:.1}%"))
    }

    #[must_use]
    pub fn elapsed_label(&self) -> String {
        format_elapsed(self.service.elapsed())
    }

    /// Whole seconds since the session started; seeds the ticking timer.
    #[must_use]
    pub fn elapsed_seconds(&self) -> i64 {
        self.service.elapsed().num_seconds().max(0)
    }

    /// Key that changes whenever the timer should restart from zero.
    #[must_use]
    pub fn timer_key(&self) -> String {
        self.service.session().started_at().timestamp().to_string()
    }

    #[must_use]
    pub fn history(&self) -> Vec<HistoryItemVm> {
        self.service
            .session()
            .submissions()
            .iter()
            .map(|submission| HistoryItemVm {
                serial: submission.question_id().to_string(),
                selected: submission.selected().to_string(),
                is_correct: submission.is_correct(),
            })
            .collect()
    }
}
