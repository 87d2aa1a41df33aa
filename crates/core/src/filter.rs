use crate::model::{Difficulty, Question, TopicTag};

/// Topic filter: everything, or one topic tag.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum TopicFilter {
    #[default]
    All,
    Topic(TopicTag),
}

impl TopicFilter {
    #[must_use]
    pub fn matches(&self, question: &Question) -> bool {
        match self {
            TopicFilter::All => true,
            TopicFilter::Topic(topic) => question.topic() == topic,
        }
    }
}

/// Difficulty filter: everything, or one level of the closed set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DifficultyFilter {
    #[default]
    All,
    Level(Difficulty),
}

impl DifficultyFilter {
    #[must_use]
    pub fn matches(&self, question: &Question) -> bool {
        match self {
            DifficultyFilter::All => true,
            DifficultyFilter::Level(level) => question.difficulty() == *level,
        }
    }
}

/// Returns the subsequence of `questions` matching both filters.
///
/// Pure and order-preserving; `All` on either axis matches every question.
#[must_use]
pub fn filter_questions(
    questions: &[Question],
    topic: &TopicFilter,
    difficulty: &DifficultyFilter,
) -> Vec<Question> {
    questions
        .iter()
        .filter(|question| topic.matches(question) && difficulty.matches(question))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{OptionKey, OptionSet, QuestionId};

    fn question(id: &str, topic: &str, difficulty: Difficulty) -> Question {
        Question::new(
            QuestionId::new(id).unwrap(),
            format!("Question {id}"),
            OptionSet::parse("A@@1, B@@2").unwrap(),
            OptionKey::new("A").unwrap(),
            TopicTag::new(topic).unwrap(),
            difficulty,
        )
        .unwrap()
    }

    fn bank() -> Vec<Question> {
        vec![
            question("1", "Algebra", Difficulty::Hard),
            question("2", "Algebra", Difficulty::Medium),
            question("3", "Calculus", Difficulty::Medium),
            question("4", "Geometry", Difficulty::Easy),
        ]
    }

    #[test]
    fn all_all_returns_everything_in_order() {
        let bank = bank();
        let filtered = filter_questions(&bank, &TopicFilter::All, &DifficultyFilter::All);
        let ids: Vec<_> = filtered.iter().map(|q| q.id().as_str()).collect();
        assert_eq!(ids, ["1", "2", "3", "4"]);
    }

    #[test]
    fn topic_filter_keeps_matching_subsequence() {
        let bank = bank();
        let topic = TopicFilter::Topic(TopicTag::new("Algebra").unwrap());
        let filtered = filter_questions(&bank, &topic, &DifficultyFilter::All);
        let ids: Vec<_> = filtered.iter().map(|q| q.id().as_str()).collect();
        assert_eq!(ids, ["1", "2"]);
    }

    #[test]
    fn both_predicates_must_hold() {
        let bank = bank();
        let topic = TopicFilter::Topic(TopicTag::new("Algebra").unwrap());
        let difficulty = DifficultyFilter::Level(Difficulty::Medium);
        let filtered = filter_questions(&bank, &topic, &difficulty);
        let ids: Vec<_> = filtered.iter().map(|q| q.id().as_str()).collect();
        assert_eq!(ids, ["2"]);
    }

    #[test]
    fn no_match_yields_empty_sequence() {
        let bank = bank();
        let topic = TopicFilter::Topic(TopicTag::new("Statistics").unwrap());
        let filtered = filter_questions(&bank, &topic, &DifficultyFilter::All);
        assert!(filtered.is_empty());
    }
}
