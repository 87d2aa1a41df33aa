use crate::model::{OptionKey, Question, QuestionId};

/// The recorded outcome of answering one question.
///
/// The correct key is copied from the question at submission time so the
/// record stays self-contained even if the active sequence changes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    question_id: QuestionId,
    selected: OptionKey,
    correct: OptionKey,
    is_correct: bool,
}

impl Submission {
    #[must_use]
    pub fn new(question: &Question, selected: OptionKey) -> Self {
        let correct = question.correct().clone();
        let is_correct = selected == correct;
        Self {
            question_id: question.id().clone(),
            selected,
            correct,
            is_correct,
        }
    }

    #[must_use]
    pub fn question_id(&self) -> &QuestionId {
        &self.question_id
    }

    #[must_use]
    pub fn selected(&self) -> &OptionKey {
        &self.selected
    }

    #[must_use]
    pub fn correct(&self) -> &OptionKey {
        &self.correct
    }

    #[must_use]
    pub fn is_correct(&self) -> bool {
        self.is_correct
    }
}
