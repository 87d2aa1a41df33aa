use std::sync::Arc;

use chrono::Duration;

use quiz_core::model::{OptionKey, Question, Submission};
use quiz_core::{
    Clock, DifficultyFilter, QuizSession, SessionStats, TopicFilter, filter_questions,
};

/// Position summary for the progress panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionProgress {
    /// 1-based position of the displayed question; 0 when the sequence is empty.
    pub position: usize,
    /// Length of the active filtered sequence.
    pub total: usize,
    /// Number of questions attempted so far (across all filters).
    pub attempted: usize,
}

/// One user's quiz session: the immutable bank, the active filters, and the
/// session state machine, with timestamps drawn from the service clock.
///
/// Every operation is synchronous; a window owns exactly one of these.
#[derive(Debug, Clone)]
pub struct SessionService {
    bank: Arc<Vec<Question>>,
    clock: Clock,
    topic: TopicFilter,
    difficulty: DifficultyFilter,
    session: QuizSession,
}

impl SessionService {
    /// Start a session over the whole bank with both filters at `All`.
    #[must_use]
    pub fn new(bank: Arc<Vec<Question>>, clock: Clock) -> Self {
        let session = QuizSession::new(bank.as_ref().clone(), clock.now());
        Self {
            bank,
            clock,
            topic: TopicFilter::All,
            difficulty: DifficultyFilter::All,
            session,
        }
    }

    #[must_use]
    pub fn topic(&self) -> &TopicFilter {
        &self.topic
    }

    #[must_use]
    pub fn difficulty(&self) -> DifficultyFilter {
        self.difficulty
    }

    #[must_use]
    pub fn session(&self) -> &QuizSession {
        &self.session
    }

    /// Change the topic filter and re-derive the active sequence.
    pub fn set_topic(&mut self, topic: TopicFilter) {
        if self.topic == topic {
            return;
        }
        self.topic = topic;
        self.refilter();
    }

    /// Change the difficulty filter and re-derive the active sequence.
    pub fn set_difficulty(&mut self, difficulty: DifficultyFilter) {
        if self.difficulty == difficulty {
            return;
        }
        self.difficulty = difficulty;
        self.refilter();
    }

    fn refilter(&mut self) {
        let filtered = filter_questions(&self.bank, &self.topic, &self.difficulty);
        self.session.replace_questions(filtered);
    }

    #[must_use]
    pub fn current_question(&self) -> Option<&Question> {
        self.session.current_question()
    }

    pub fn select_option(&mut self, key: OptionKey) {
        self.session.select_option(key);
    }

    /// Submit the highlighted option; `None` when nothing is highlighted.
    pub fn submit(&mut self) -> Option<Submission> {
        self.session.submit().cloned()
    }

    pub fn next(&mut self) -> bool {
        self.session.next()
    }

    pub fn previous(&mut self) -> bool {
        self.session.previous()
    }

    /// Rewind everything and restart the timer. Filters are left alone.
    pub fn reset(&mut self) {
        self.session.reset(self.clock.now());
    }

    #[must_use]
    pub fn stats(&self) -> SessionStats {
        self.session.stats()
    }

    #[must_use]
    pub fn elapsed(&self) -> Duration {
        self.session.elapsed(self.clock.now())
    }

    #[must_use]
    pub fn progress(&self) -> SessionProgress {
        let total = self.session.len();
        let position = if total == 0 {
            0
        } else {
            self.session.current_index() + 1
        };
        SessionProgress {
            position,
            total,
            attempted: self.stats().attempted(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quiz_core::model::TopicTag;
    use quiz_core::time::fixed_clock;
    use storage::fallback_questions;

    fn service() -> SessionService {
        SessionService::new(Arc::new(fallback_questions()), fixed_clock())
    }

    fn key(value: &str) -> OptionKey {
        OptionKey::new(value).unwrap()
    }

    #[test]
    fn filter_change_rewinds_to_the_first_matching_question() {
        let mut service = service();
        service.next();
        assert_eq!(service.session().current_index(), 1);

        service.set_topic(TopicFilter::Topic(TopicTag::new("Calculus").unwrap()));

        assert_eq!(service.session().current_index(), 0);
        assert_eq!(service.session().len(), 1);
        assert_eq!(service.current_question().unwrap().id().as_str(), "3");
    }

    #[test]
    fn submissions_survive_filter_changes() {
        let mut service = service();
        service.select_option(key("A"));
        service.submit().unwrap();

        service.set_topic(TopicFilter::Topic(TopicTag::new("Calculus").unwrap()));
        assert_eq!(service.stats().attempted(), 1);

        service.set_topic(TopicFilter::All);
        assert_eq!(service.stats().attempted(), 1);
    }

    #[test]
    fn setting_the_same_filter_does_not_disturb_the_cursor() {
        let mut service = service();
        service.next();
        service.set_difficulty(DifficultyFilter::All);
        assert_eq!(service.session().current_index(), 1);
    }

    #[test]
    fn progress_reports_one_based_position() {
        let mut service = service();
        assert_eq!(
            service.progress(),
            SessionProgress {
                position: 1,
                total: 3,
                attempted: 0
            }
        );

        service.next();
        service.select_option(key("C"));
        service.submit().unwrap();
        assert_eq!(
            service.progress(),
            SessionProgress {
                position: 2,
                total: 3,
                attempted: 1
            }
        );
    }

    #[test]
    fn empty_filter_result_yields_zero_position() {
        let mut service = service();
        service.set_topic(TopicFilter::Topic(TopicTag::new("Statistics").unwrap()));
        assert_eq!(service.progress().position, 0);
        assert!(service.current_question().is_none());
    }
}
