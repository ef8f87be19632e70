use dioxus::prelude::*;

use crate::context::use_color_scheme;

/// Floating light/dark switch
#[component]
pub fn SchemeToggle() -> Element {
    let mut scheme = use_color_scheme();
    let label = scheme().toggle_label();

    rsx! {
        button {
            class: "scheme-toggle",
            r#type: "button",
            onclick: move |_| {
                let next = scheme().toggled();
                tracing::debug!("Switching colour scheme to {:?}", next);
                scheme.set(next);
            },
            "{label}"
        }
    }
}
