use chrono::{DateTime, Duration, Utc};

use crate::model::{OptionKey, Question, QuestionId, Submission};
use crate::stats::SessionStats;

/// In-memory state for one user stepping through a question sequence.
///
/// Owns the active (already filtered) sequence, a cursor into it, the
/// submissions recorded so far, and the highlighted-but-unsubmitted option.
/// Timestamps are passed in by the caller so time stays deterministic under
/// test.
///
/// Invariants: the cursor stays inside `[0, len - 1]` whenever the sequence
/// is non-empty, the highlight is cleared on every cursor move, and there is
/// at most one submission per question id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizSession {
    questions: Vec<Question>,
    current: usize,
    submissions: Vec<Submission>,
    highlighted: Option<OptionKey>,
    started_at: DateTime<Utc>,
}

impl QuizSession {
    /// Start a fresh session over the given sequence.
    #[must_use]
    pub fn new(questions: Vec<Question>, started_at: DateTime<Utc>) -> Self {
        Self {
            questions,
            current: 0,
            submissions: Vec::new(),
            highlighted: None,
            started_at,
        }
    }

    /// Swap in a re-filtered sequence.
    ///
    /// The cursor rewinds to 0 and the highlight is cleared, so the cursor
    /// can never dangle past the end of a shorter sequence. Submissions are
    /// keyed by question id and survive the swap.
    pub fn replace_questions(&mut self, questions: Vec<Question>) {
        self.questions = questions;
        self.current = 0;
        self.highlighted = None;
    }

    /// Unconditionally return to the initial state with a fresh timestamp.
    pub fn reset(&mut self, now: DateTime<Utc>) {
        self.current = 0;
        self.submissions.clear();
        self.highlighted = None;
        self.started_at = now;
    }

    #[must_use]
    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    #[must_use]
    pub fn current_index(&self) -> usize {
        self.current
    }

    /// Length of the active sequence.
    #[must_use]
    pub fn len(&self) -> usize {
        self.questions.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    #[must_use]
    pub fn current_question(&self) -> Option<&Question> {
        self.questions.get(self.current)
    }

    #[must_use]
    pub fn highlighted(&self) -> Option<&OptionKey> {
        self.highlighted.as_ref()
    }

    #[must_use]
    pub fn at_first(&self) -> bool {
        self.current == 0
    }

    #[must_use]
    pub fn at_last(&self) -> bool {
        self.questions.is_empty() || self.current + 1 == self.questions.len()
    }

    /// Highlight an option for the current question.
    ///
    /// No-op when no question is displayed. Key membership in the current
    /// option set is the caller's responsibility; in practice the key always
    /// originates from the rendered options.
    pub fn select_option(&mut self, key: OptionKey) {
        if self.current_question().is_some() {
            self.highlighted = Some(key);
        }
    }

    /// Record the highlighted option as the answer to the current question.
    ///
    /// Returns the recorded submission, or `None` for the benign no-ops:
    /// nothing highlighted, or no question displayed. A later submission for
    /// the same question overwrites the earlier one in place.
    pub fn submit(&mut self) -> Option<&Submission> {
        let selected = self.highlighted.clone()?;
        let question = self.current_question()?;
        let submission = Submission::new(question, selected);
        let id = submission.question_id().clone();

        let slot = self
            .submissions
            .iter()
            .position(|existing| *existing.question_id() == id);
        match slot {
            Some(index) => {
                self.submissions[index] = submission;
                self.submissions.get(index)
            }
            None => {
                self.submissions.push(submission);
                self.submissions.last()
            }
        }
    }

    /// Advance the cursor; no-op at the last question.
    ///
    /// Returns whether the cursor moved. Moving clears the highlight.
    pub fn next(&mut self) -> bool {
        if self.at_last() {
            return false;
        }
        self.current += 1;
        self.highlighted = None;
        true
    }

    /// Retreat the cursor; no-op at the first question.
    ///
    /// Returns whether the cursor moved. Moving clears the highlight.
    pub fn previous(&mut self) -> bool {
        if self.current == 0 {
            return false;
        }
        self.current -= 1;
        self.highlighted = None;
        true
    }

    /// Submission recorded for a question, if any.
    #[must_use]
    pub fn submission_for(&self, id: &QuestionId) -> Option<&Submission> {
        self.submissions
            .iter()
            .find(|submission| submission.question_id() == id)
    }

    /// All submissions in the order they were first recorded.
    #[must_use]
    pub fn submissions(&self) -> &[Submission] {
        &self.submissions
    }

    /// Aggregate counts, recomputed from the submissions on every call.
    #[must_use]
    pub fn stats(&self) -> SessionStats {
        SessionStats::from_submissions(&self.submissions)
    }

    /// Time since the session started.
    #[must_use]
    pub fn elapsed(&self, now: DateTime<Utc>) -> Duration {
        now - self.started_at
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Difficulty, OptionSet, TopicTag};
    use crate::time::fixed_now;
    use chrono::Duration;

    fn question(id: &str, correct: &str) -> Question {
        Question::new(
            QuestionId::new(id).unwrap(),
            format!("Question {id}"),
            OptionSet::parse("A@@1, B@@2, C@@3, D@@4").unwrap(),
            OptionKey::new(correct).unwrap(),
            TopicTag::new("Algebra").unwrap(),
            Difficulty::Medium,
        )
        .unwrap()
    }

    fn key(value: &str) -> OptionKey {
        OptionKey::new(value).unwrap()
    }

    fn session() -> QuizSession {
        QuizSession::new(
            vec![question("1", "A"), question("2", "C"), question("3", "B")],
            fixed_now(),
        )
    }

    #[test]
    fn submit_without_highlight_is_a_no_op() {
        let mut session = session();
        assert!(session.submit().is_none());
        assert!(session.submissions().is_empty());
    }

    #[test]
    fn submit_records_correctness_against_the_current_question() {
        let mut session = session();
        session.select_option(key("D"));
        let submission = session.submit().unwrap();
        assert_eq!(submission.selected().as_str(), "D");
        assert_eq!(submission.correct().as_str(), "A");
        assert!(!submission.is_correct());
    }

    #[test]
    fn resubmitting_overwrites_in_place() {
        let mut session = session();
        session.select_option(key("D"));
        session.submit().unwrap();
        session.select_option(key("A"));
        session.submit().unwrap();

        assert_eq!(session.submissions().len(), 1);
        let recorded = session
            .submission_for(&QuestionId::new("1").unwrap())
            .unwrap();
        assert_eq!(recorded.selected().as_str(), "A");
        assert!(recorded.is_correct());
    }

    #[test]
    fn navigation_stays_in_bounds_and_clears_highlight() {
        let mut session = session();
        assert!(!session.previous());
        assert_eq!(session.current_index(), 0);

        session.select_option(key("B"));
        assert!(session.next());
        assert_eq!(session.current_index(), 1);
        assert!(session.highlighted().is_none());

        assert!(session.next());
        assert!(!session.next());
        assert_eq!(session.current_index(), 2);
        assert!(session.at_last());
    }

    #[test]
    fn reset_restores_initial_state_with_fresh_timestamp() {
        let mut session = session();
        session.select_option(key("B"));
        session.submit();
        session.next();

        let later = fixed_now() + Duration::seconds(90);
        session.reset(later);

        assert_eq!(session.current_index(), 0);
        assert!(session.submissions().is_empty());
        assert!(session.highlighted().is_none());
        assert_eq!(session.started_at(), later);
    }

    #[test]
    fn replacing_questions_rewinds_cursor_but_keeps_submissions() {
        let mut session = session();
        session.select_option(key("A"));
        session.submit();
        session.next();
        session.next();

        session.replace_questions(vec![question("2", "C")]);

        assert_eq!(session.current_index(), 0);
        assert!(session.highlighted().is_none());
        assert_eq!(session.len(), 1);
        assert_eq!(session.submissions().len(), 1);
    }

    #[test]
    fn empty_sequence_has_no_current_question() {
        let mut session = QuizSession::new(Vec::new(), fixed_now());
        assert!(session.current_question().is_none());
        session.select_option(key("A"));
        assert!(session.highlighted().is_none());
        assert!(session.submit().is_none());
        assert!(!session.next());
        assert!(!session.previous());
    }

    #[test]
    fn elapsed_is_measured_from_start() {
        let session = session();
        let now = fixed_now() + Duration::seconds(42);
        assert_eq!(session.elapsed(now), Duration::seconds(42));
    }
}
