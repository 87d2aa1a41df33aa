use std::sync::Arc;

use services::{Clock, QuestionService};

/// What the composition root (the desktop binary) provides to the UI.
pub trait UiApp: Send + Sync {
    fn questions(&self) -> Arc<QuestionService>;
    fn clock(&self) -> Clock;
}

#[derive(Clone)]
pub struct AppContext {
    questions: Arc<QuestionService>,
    clock: Clock,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            questions: app.questions(),
            clock: app.clock(),
        }
    }

    #[must_use]
    pub fn questions(&self) -> Arc<QuestionService> {
        Arc::clone(&self.questions)
    }

    #[must_use]
    pub fn clock(&self) -> Clock {
        self.clock
    }
}

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}
