use dioxus::prelude::*;

/// User-facing failure rendered in place of a view body.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ViewError {
    Unknown,
}

impl ViewError {
    #[must_use]
    pub fn message(&self) -> &'static str {
        match self {
            ViewError::Unknown => "Something went wrong. Please try again.",
        }
    }
}

/// What a view should render for an async resource right now.
///
/// Paused and stopped resources render as loading; the quiz view never
/// pauses its loader, so the distinction has no visible form here.
#[derive(Clone, Debug, PartialEq)]
pub enum ViewState<T> {
    Loading,
    Ready(T),
    Failed(ViewError),
}

#[must_use]
pub fn view_state_from_resource<T: Clone>(
    resource: &Resource<Result<T, ViewError>>,
) -> ViewState<T> {
    if !matches!(resource.state().cloned(), UseResourceState::Ready) {
        return ViewState::Loading;
    }
    match resource.value().read().as_ref() {
        Some(Ok(data)) => ViewState::Ready(data.clone()),
        Some(Err(err)) => ViewState::Failed(*err),
        None => ViewState::Failed(ViewError::Unknown),
    }
}
