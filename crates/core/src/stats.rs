use crate::model::Submission;

/// Aggregate counts over a session's submissions.
///
/// Always derived from the submission list on read; nothing here is cached
/// or incrementally maintained.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionStats {
    attempted: usize,
    correct: usize,
}

impl SessionStats {
    #[must_use]
    pub fn from_submissions(submissions: &[Submission]) -> Self {
        let correct = submissions
            .iter()
            .filter(|submission| submission.is_correct())
            .count();
        Self {
            attempted: submissions.len(),
            correct,
        }
    }

    #[must_use]
    pub fn attempted(&self) -> usize {
        self.attempted
    }

    #[must_use]
    pub fn correct(&self) -> usize {
        self.correct
    }

    /// Percentage of attempted questions answered correctly.
    ///
    /// Undefined (and so `None`) when nothing has been attempted.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn success_rate(&self) -> Option<f64> {
        if self.attempted == 0 {
            return None;
        }
        Some(self.correct as f64 / self.attempted as f64 * 100.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{
        Difficulty, OptionKey, OptionSet, Question, QuestionId, Submission, TopicTag,
    };

    fn submission(id: &str, selected: &str, correct: &str) -> Submission {
        let question = Question::new(
            QuestionId::new(id).unwrap(),
            format!("Question {id}"),
            OptionSet::parse("A@@1, B@@2, C@@3, D@@4").unwrap(),
            OptionKey::new(correct).unwrap(),
            TopicTag::new("Algebra").unwrap(),
            Difficulty::Easy,
        )
        .unwrap();
        Submission::new(&question, OptionKey::new(selected).unwrap())
    }

    #[test]
    fn success_rate_is_undefined_with_no_attempts() {
        let stats = SessionStats::from_submissions(&[]);
        assert_eq!(stats.attempted(), 0);
        assert_eq!(stats.success_rate(), None);
    }

    #[test]
    fn success_rate_is_percentage_of_correct() {
        let submissions = vec![
            submission("1", "A", "A"),
            submission("2", "B", "C"),
            submission("3", "D", "D"),
        ];
        let stats = SessionStats::from_submissions(&submissions);

        assert_eq!(stats.attempted(), 3);
        assert_eq!(stats.correct(), 2);
        let rate = stats.success_rate().unwrap();
        assert!((rate - 66.666_666).abs() < 0.001);
    }
}
