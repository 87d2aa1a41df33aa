use quiz_core::model::{Difficulty, OptionKey, OptionSet, Question, QuestionId, TopicTag};

/// The fixed built-in question set used when the spreadsheet is unavailable
/// or invalid, so the quiz flow never fails on bad input data.
///
/// # Panics
///
/// Panics if the built-in definitions fail validation, which would be a bug
/// in this module rather than a runtime condition.
#[must_use]
pub fn fallback_questions() -> Vec<Question> {
    let build = |serial: &str, text: &str, options: &str, correct: &str, topic: &str, difficulty| {
        Question::new(
            QuestionId::new(serial).expect("built-in serial must be valid"),
            text,
            OptionSet::parse(options).expect("built-in options must parse"),
            OptionKey::new(correct).expect("built-in correct key must be valid"),
            TopicTag::new(topic).expect("built-in topic must be valid"),
            difficulty,
        )
        .expect("built-in question must be valid")
    };

    vec![
        build(
            "1",
            "The expansion of $(a - bx)^c$ is $4 - px + 108x^2 + qx^3 + rx^4$ \
             where $a$, $b$, $c$, $p$, $q$, and $r$ are positive real constants. \
             Find the value of $p + q + r$.",
            r"A@@81 + 132\sqrt{2}, B@@81 - 84\sqrt{2}, C@@132\sqrt{2} - 81, D@@81 + 84\sqrt{2}",
            "A",
            "Algebra",
            Difficulty::Hard,
        ),
        build(
            "2",
            r"If $\sqrt{x+5} + \sqrt{x-5} = 4$, find the value of $x$.",
            "A@@10, B@@15, C@@20, D@@25",
            "C",
            "Algebra",
            Difficulty::Medium,
        ),
        build(
            "3",
            r"Solve the equation: $\frac{x}{x-1} + \frac{1}{x+1} = \frac{3}{2}$",
            "A@@-2, B@@2, C@@3, D@@4",
            "B",
            "Calculus",
            Difficulty::Medium,
        ),
    ]
}
