use dioxus::prelude::*;

use crate::views::QuizView;

/// MathJax 2.7 from the CDN; question and option text embeds `$...$` /
/// `$$...$$` delimiters that the core carries verbatim.
const MATHJAX_SRC: &str =
    "https://cdnjs.cloudflare.com/ajax/libs/mathjax/2.7.9/MathJax.js?config=TeX-MML-AM_CHTML";

const MATHJAX_CONFIG: &str = r"
    window.MathJax && MathJax.Hub.Config({
        tex2jax: {
            inlineMath: [['$', '$'], ['\\(', '\\)']],
            displayMath: [['$$', '$$'], ['\\[', '\\]']],
            processEscapes: true,
            processEnvironments: true
        },
        displayAlign: 'center'
    });
";

#[component]
pub fn App() -> Element {
    rsx! {
        document::Stylesheet { href: asset!("/assets/style.css") }
        document::Title { "TMUA Guide" }
        document::Script { src: "{MATHJAX_SRC}" }
        document::Script { {MATHJAX_CONFIG} }

        div { class: "app-root",
            ErrorBoundary {
                handle_error: |errors: ErrorContext| rsx! {
                    div { class: "fatal",
                        h1 { "Something went wrong" }
                        pre { "{errors:?}" }
                    }
                },
                QuizView {}
            }
        }
    }
}
