/// Ticking elapsed-time label.
///
/// The interval lives in the webview so the Rust side does not re-render
/// every second; `timer_key` changes on reset, which restarts the count from
/// the seed the session reports.
pub(super) fn elapsed_timer_script(timer_key: &str, base_seconds: i64) -> String {
    format!(
        r#"(function() {{
            const state = window.__quizElapsed || (window.__quizElapsed = {{
                key: null,
                seconds: 0,
                id: null,
            }});
            const label = document.getElementById("quiz-timer-label");
            if (!label) {{
                if (state.id) {{
                    clearInterval(state.id);
                    state.id = null;
                }}
                state.key = null;
                return;
            }}
            const key = {timer_key:?};
            if (state.key !== key) {{
                state.key = key;
                state.seconds = {base_seconds};
            }}
            const render = () => {{
                const hours = Math.floor(state.seconds / 3600);
                const minutes = String(Math.floor((state.seconds % 3600) / 60)).padStart(2, "0");
                const seconds = String(state.seconds % 60).padStart(2, "0");
                label.textContent = hours + ":" + minutes + ":" + seconds;
            }};
            render();
            if (!state.id) {{
                state.id = setInterval(() => {{
                    state.seconds += 1;
                    render();
                }}, 1000);
            }}
        }})();"#,
    )
}

/// Ask MathJax to re-typeset after the displayed question changes.
pub(super) fn mathjax_typeset_script() -> String {
    "if (window.MathJax && window.MathJax.Hub) { \
        MathJax.Hub.Queue(['Typeset', MathJax.Hub]); \
    }"
    .to_string()
}
