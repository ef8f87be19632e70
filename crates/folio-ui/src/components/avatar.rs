//! Avatar Component
//!
//! Round image that falls back to initials when the image fails to load.

use dioxus::prelude::*;

#[component]
pub fn Avatar(
    /// Image URL or asset path
    src: String,
    /// Alt text for accessibility
    alt: String,
    /// Shown when the image cannot be loaded
    fallback: String,
    /// Optional CSS class
    #[props(default = None)]
    class: Option<String>,
) -> Element {
    let mut failed = use_signal(|| false);
    let extra_class = class.as_deref().unwrap_or("");

    rsx! {
        span { class: "avatar {extra_class}",
            if failed() || src.is_empty() {
                span { class: "avatar__fallback", "{fallback}" }
            } else {
                img {
                    class: "avatar__image",
                    src: "{src}",
                    alt: "{alt}",
                    onerror: move |_| {
                        tracing::warn!("Avatar image failed to load, showing initials");
                        failed.set(true);
                    },
                }
            }
        }
    }
}
