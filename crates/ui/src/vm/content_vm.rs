use std::collections::HashSet;

/// Sanitize question/option payloads before `dangerous_inner_html`.
///
/// The spreadsheet text is an opaque payload that may carry simple HTML and
/// math delimiters. Scripts and event handlers are stripped; `$...$` and
/// backslash commands are plain text to the sanitizer and pass through
/// verbatim for MathJax to pick up.
#[must_use]
pub fn sanitize_math_html(html: &str) -> String {
    let tags: HashSet<&str> = [
        "p", "div", "span", "br", "em", "strong", "b", "i", "sub", "sup",
    ]
    .into_iter()
    .collect();

    ammonia::Builder::new()
        .tags(tags)
        .clean(html)
        .to_string()
}
