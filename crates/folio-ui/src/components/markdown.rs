//! Markdown rendering for card descriptions.

use dioxus::prelude::*;
use pulldown_cmark::{html, Options, Parser};

/// Convert Markdown to an HTML fragment
pub fn markdown_to_html(source: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_STRIKETHROUGH);

    let parser = Parser::new_ext(source, options);
    let mut html_output = String::new();
    html::push_html(&mut html_output, parser);
    html_output
}

#[component]
pub fn Markdown(
    /// Markdown source
    content: String,
    #[props(default = None)] class: Option<String>,
) -> Element {
    let html_content = markdown_to_html(&content);
    let extra_class = class.as_deref().unwrap_or("");

    rsx! {
        div {
            class: "prose {extra_class}",
            dangerous_inner_html: "{html_content}",
        }
    }
}
