use dioxus::document::eval;
use dioxus::prelude::*;
use keyboard_types::Key;

use quiz_core::model::Difficulty;
use services::{BankOrigin, SessionService};

use crate::context::AppContext;
use crate::views::{ViewError, ViewState, view_state_from_resource};
use crate::vm::{QuizIntent, QuizVm};

use self::scripts::{elapsed_timer_script, mathjax_typeset_script};

mod scripts;

/// Bank-level facts that do not change for the lifetime of the window.
#[derive(Clone, Debug, PartialEq)]
struct QuizMeta {
    topics: Vec<String>,
    sample_notice: Option<&'static str>,
}

#[component]
pub fn QuizView() -> Element {
    let ctx = use_context::<AppContext>();
    let clock = ctx.clock();
    let vm = use_signal(|| None::<QuizVm>);

    let questions = ctx.questions();
    let resource = use_resource(move || {
        let questions = questions.clone();
        let mut vm = vm;
        async move {
            let bank = questions.load_or_fallback();
            let topics = bank
                .topics()
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>();
            let sample_notice = match bank.origin() {
                BankOrigin::Source => None,
                BankOrigin::BuiltIn { .. } => {
                    Some("Question file unavailable; showing the built-in sample set.")
                }
            };
            vm.set(Some(QuizVm::new(SessionService::new(
                bank.questions(),
                clock,
            ))));
            Ok::<_, ViewError>(QuizMeta {
                topics,
                sample_notice,
            })
        }
    });
    let state = view_state_from_resource(&resource);

    let dispatch = use_callback(move |intent: QuizIntent| {
        let mut vm = vm;
        if let Some(vm) = vm.write().as_mut() {
            vm.apply(intent);
        }
    });

    // Re-typeset whenever the rendered question or options change.
    use_effect(move || {
        let serial = vm
            .read()
            .as_ref()
            .and_then(|vm| vm.current().map(|question| question.serial));
        let _ = serial;
        let _ = eval(&mathjax_typeset_script());
    });

    // The elapsed clock ticks in the webview, keyed on the session start so
    // a reset rewinds it.
    use_effect(move || {
        let guard = vm.read();
        if let Some(vm) = guard.as_ref() {
            let js = elapsed_timer_script(&vm.timer_key(), vm.elapsed_seconds());
            let _ = eval(&js);
        }
    });

    let on_key = use_callback(move |evt: KeyboardEvent| {
        let has_question = vm.read().as_ref().is_some_and(|vm| vm.current().is_some());
        if !has_question {
            return;
        }
        match evt.data.key() {
            Key::ArrowLeft => {
                evt.prevent_default();
                dispatch.call(QuizIntent::Previous);
            }
            Key::ArrowRight => {
                evt.prevent_default();
                dispatch.call(QuizIntent::Next);
            }
            Key::Enter => {
                evt.prevent_default();
                dispatch.call(QuizIntent::Submit);
            }
            Key::Character(value) => {
                let candidate = value.trim().to_uppercase();
                let is_option = vm
                    .read()
                    .as_ref()
                    .and_then(QuizVm::current)
                    .is_some_and(|question| {
                        question.options.iter().any(|option| option.key == candidate)
                    });
                if is_option {
                    evt.prevent_default();
                    dispatch.call(QuizIntent::SelectOption(candidate));
                }
            }
            _ => {}
        }
    });

    let vm_guard = vm.read();
    let current = vm_guard.as_ref().and_then(QuizVm::current);
    let at_first = vm_guard.as_ref().is_none_or(QuizVm::at_first);
    let at_last = vm_guard.as_ref().is_none_or(QuizVm::at_last);
    let topic_value = vm_guard
        .as_ref()
        .map_or_else(|| "All".to_string(), QuizVm::topic_value);
    let difficulty_value = vm_guard
        .as_ref()
        .map_or_else(|| "All".to_string(), QuizVm::difficulty_value);
    let attempted_label = vm_guard
        .as_ref()
        .map_or_else(|| "0/0".to_string(), QuizVm::attempted_label);
    let position_label = vm_guard.as_ref().and_then(QuizVm::position_label);
    let success_label = vm_guard.as_ref().and_then(QuizVm::success_rate_label);
    let elapsed_label = vm_guard
        .as_ref()
        .map_or_else(|| "0:00:00".to_string(), QuizVm::elapsed_label);
    let history = vm_guard.as_ref().map(QuizVm::history).unwrap_or_default();

    rsx! {
        div { class: "page quiz-page", id: "quiz-root", tabindex: "0", onkeydown: on_key,
            match state {
                ViewState::Loading => rsx! {
                    p { "Loading questions..." }
                },
                ViewState::Failed(err) => rsx! {
                    p { "{err.message()}" }
                    button {
                        class: "btn btn-secondary",
                        r#type: "button",
                        onclick: move |_| {
                            let mut resource = resource;
                            resource.restart();
                        },
                        "Retry"
                    }
                },
                ViewState::Ready(meta) => rsx! {
                    div { class: "quiz-layout",
                        aside { class: "sidebar",
                            h1 { class: "sidebar__title", "TMUA Guide" }
                            div { class: "sidebar__divider" }
                            div { class: "filters",
                                h3 { class: "filters__heading", "Filters" }
                                label { class: "filter-label", r#for: "difficulty-filter", "Difficulty Level" }
                                select {
                                    class: "filter-select",
                                    id: "difficulty-filter",
                                    value: "{difficulty_value}",
                                    onchange: move |evt| dispatch.call(QuizIntent::SetDifficulty(evt.value())),
                                    option { value: "All", "All" }
                                    for level in Difficulty::ALL {
                                        option { value: "{level}", "{level}" }
                                    }
                                }
                                label { class: "filter-label", r#for: "topic-filter", "Topic" }
                                select {
                                    class: "filter-select",
                                    id: "topic-filter",
                                    value: "{topic_value}",
                                    onchange: move |evt| dispatch.call(QuizIntent::SetTopic(evt.value())),
                                    option { value: "All", "All" }
                                    for topic in meta.topics.iter() {
                                        option { value: "{topic}", "{topic}" }
                                    }
                                }
                            }
                            div { class: "sidebar__divider" }
                            button {
                                class: "btn btn-primary",
                                id: "quiz-reset",
                                r#type: "button",
                                onclick: move |_| dispatch.call(QuizIntent::Reset),
                                "Reset Session"
                            }
                            if let Some(notice) = meta.sample_notice {
                                p { class: "sidebar__notice", "{notice}" }
                            }
                        }

                        main { class: "question-pane",
                            h2 { class: "pane-title", "Question Panel" }
                            if let Some(question) = current.as_ref() {
                                div { class: "question-card",
                                    h4 { class: "question-card__serial", "Question {question.serial}" }
                                    div {
                                        class: "question-card__text",
                                        dangerous_inner_html: "{question.text_html}",
                                    }
                                }
                                h3 { class: "options-heading", "Select your answer" }
                                div { class: "options",
                                    for option in question.options.iter() {
                                        OptionButton {
                                            key: "{question.serial}-{option.key}",
                                            option_key: option.key.clone(),
                                            text_html: option.text_html.clone(),
                                            selected: option.selected,
                                            on_intent: dispatch,
                                        }
                                    }
                                }
                                div { class: "nav-row",
                                    button {
                                        class: "btn btn-secondary",
                                        id: "quiz-previous",
                                        r#type: "button",
                                        disabled: at_first,
                                        onclick: move |_| dispatch.call(QuizIntent::Previous),
                                        "← Previous"
                                    }
                                    button {
                                        class: "btn btn-primary",
                                        id: "quiz-submit",
                                        r#type: "button",
                                        onclick: move |_| dispatch.call(QuizIntent::Submit),
                                        "Submit"
                                    }
                                    button {
                                        class: "btn btn-secondary",
                                        id: "quiz-next",
                                        r#type: "button",
                                        disabled: at_last,
                                        onclick: move |_| dispatch.call(QuizIntent::Next),
                                        "Next →"
                                    }
                                }
                                if let Some(label) = position_label.as_ref() {
                                    p { class: "nav-position", "{label}" }
                                }
                            } else {
                                p { class: "question-empty", "No questions match these filters." }
                            }
                        }

                        aside { class: "progress-pane",
                            h2 { class: "pane-title", "Progress" }
                            div { class: "metrics",
                                div { class: "metric",
                                    span { class: "metric__label", "Questions Attempted" }
                                    span { class: "metric__value", "{attempted_label}" }
                                }
                                if let Some(rate) = success_label.as_ref() {
                                    div { class: "metric",
                                        span { class: "metric__label", "Success Rate" }
                                        span { class: "metric__value", "{rate}" }
                                    }
                                }
                                div { class: "metric",
                                    span { class: "metric__label", "Time Elapsed" }
                                    span {
                                        class: "metric__value",
                                        id: "quiz-timer-label",
                                        "{elapsed_label}"
                                    }
                                }
                            }
                            if !history.is_empty() {
                                h3 { class: "history-heading", "Answer History" }
                                div { class: "history",
                                    for item in history.iter() {
                                        div {
                                            key: "{item.serial}",
                                            class: history_item_class(item.is_correct),
                                            span { "Q{item.serial}: {item.selected} " }
                                            span { class: "history-item__mark",
                                                if item.is_correct { "✓" } else { "✗" }
                                            }
                                        }
                                    }
                                }
                            }
                        }
                    }
                },
            }
        }
    }
}

fn history_item_class(is_correct: bool) -> &'static str {
    if is_correct {
        "history-item history-item--correct"
    } else {
        "history-item history-item--incorrect"
    }
}

#[component]
fn OptionButton(
    option_key: String,
    text_html: String,
    selected: bool,
    on_intent: EventHandler<QuizIntent>,
) -> Element {
    let class = if selected {
        "option-btn option-btn--selected"
    } else {
        "option-btn"
    };
    let intent_key = option_key.clone();
    rsx! {
        button {
            class: "{class}",
            r#type: "button",
            onclick: move |_| on_intent.call(QuizIntent::SelectOption(intent_key.clone())),
            span { class: "option-btn__key", "{option_key}." }
            span { class: "option-btn__text", dangerous_inner_html: "{text_html}" }
        }
    }
}
