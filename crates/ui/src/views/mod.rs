mod quiz;
mod state;

pub use quiz::QuizView;
pub use state::{ViewError, ViewState, view_state_from_resource};
