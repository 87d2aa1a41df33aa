use std::sync::{Arc, OnceLock};

use quiz_core::model::{Question, TopicTag};
use storage::{QuestionSource, StorageError, fallback_questions};

/// Where the active question bank came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BankOrigin {
    /// Loaded from the configured source.
    Source,
    /// The built-in sample set, with the reason the source was rejected.
    BuiltIn { reason: String },
}

/// The loaded, immutable question bank.
#[derive(Debug, Clone)]
pub struct LoadedBank {
    questions: Arc<Vec<Question>>,
    origin: BankOrigin,
}

impl LoadedBank {
    #[must_use]
    pub fn questions(&self) -> Arc<Vec<Question>> {
        Arc::clone(&self.questions)
    }

    #[must_use]
    pub fn origin(&self) -> &BankOrigin {
        &self.origin
    }

    /// Distinct topic tags in first-appearance order, for the topic filter.
    #[must_use]
    pub fn topics(&self) -> Vec<TopicTag> {
        let mut topics: Vec<TopicTag> = Vec::new();
        for question in self.questions.iter() {
            if !topics.contains(question.topic()) {
                topics.push(question.topic().clone());
            }
        }
        topics
    }
}

/// Loads the question bank once and caches it for the process lifetime.
///
/// The resilience policy lives here, not in the source: `load` surfaces the
/// source error, and `load_or_fallback` makes the substitute-the-sample-set
/// decision explicitly so the quiz flow never fails on bad input data.
pub struct QuestionService {
    source: Arc<dyn QuestionSource + Send + Sync>,
    cache: OnceLock<LoadedBank>,
}

impl QuestionService {
    #[must_use]
    pub fn new(source: Arc<dyn QuestionSource + Send + Sync>) -> Self {
        Self {
            source,
            cache: OnceLock::new(),
        }
    }

    /// Read the bank straight from the source, bypassing the fallback policy.
    ///
    /// # Errors
    ///
    /// Propagates `StorageError` from the source.
    pub fn load(&self) -> Result<Vec<Question>, StorageError> {
        self.source.load()
    }

    /// The cached bank, loading it on first call.
    ///
    /// On any source failure the built-in sample set is substituted and the
    /// failure is recorded in the bank's origin; it is never surfaced as an
    /// error to the caller.
    pub fn load_or_fallback(&self) -> LoadedBank {
        self.cache
            .get_or_init(|| match self.source.load() {
                Ok(questions) => LoadedBank {
                    questions: Arc::new(questions),
                    origin: BankOrigin::Source,
                },
                Err(err) => LoadedBank {
                    questions: Arc::new(fallback_questions()),
                    origin: BankOrigin::BuiltIn {
                        reason: err.to_string(),
                    },
                },
            })
            .clone()
    }
}

impl std::fmt::Debug for QuestionService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("QuestionService")
            .field("loaded", &self.cache.get().is_some())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FailingSource;

    impl QuestionSource for FailingSource {
        fn load(&self) -> Result<Vec<Question>, StorageError> {
            Err(StorageError::NoWorksheet)
        }
    }

    struct FixedSource(Vec<Question>);

    impl QuestionSource for FixedSource {
        fn load(&self) -> Result<Vec<Question>, StorageError> {
            Ok(self.0.clone())
        }
    }

    #[test]
    fn source_failure_is_absorbed_into_the_builtin_set() {
        let service = QuestionService::new(Arc::new(FailingSource));
        let bank = service.load_or_fallback();

        assert_eq!(bank.questions().len(), 3);
        assert!(matches!(bank.origin(), BankOrigin::BuiltIn { .. }));
    }

    #[test]
    fn loaded_bank_is_cached_across_calls() {
        let service = QuestionService::new(Arc::new(FailingSource));
        let first = service.load_or_fallback();
        let second = service.load_or_fallback();
        assert!(Arc::ptr_eq(&first.questions(), &second.questions()));
    }

    #[test]
    fn topics_are_distinct_and_in_first_appearance_order() {
        let service = QuestionService::new(Arc::new(FixedSource(fallback_questions())));
        let bank = service.load_or_fallback();
        let topics: Vec<_> = bank.topics().iter().map(|t| t.as_str().to_string()).collect();
        assert_eq!(topics, ["Algebra", "Calculus"]);
        assert!(matches!(bank.origin(), BankOrigin::Source));
    }
}
