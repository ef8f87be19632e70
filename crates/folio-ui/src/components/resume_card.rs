//! Resume Card Component
//!
//! Timeline entry for a job or a school: logo, title with badges, period,
//! subtitle and an expandable description.

use dioxus::prelude::*;

use super::{Avatar, Badge, BadgeVariant, Markdown};

/// First letter of the title, used when the logo is missing
fn logo_fallback(title: &str) -> String {
    title
        .chars()
        .next()
        .map(|c| c.to_uppercase().collect())
        .unwrap_or_default()
}

/// Timeline card
///
/// Clicking the card toggles the description. The title links to `href`
/// when one is given.
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     ResumeCard {
///         logo_url: "/om.svg".to_string(),
///         alt_text: "OM Bank".to_string(),
///         title: "OM Bank".to_string(),
///         subtitle: "Lead Product Designer".to_string(),
///         period: "2022 - Present".to_string(),
///     }
/// }
/// ```
#[component]
pub fn ResumeCard(
    logo_url: String,
    alt_text: String,
    title: String,
    subtitle: String,
    period: String,
    #[props(default = None)] href: Option<String>,
    #[props(default)] badges: Vec<String>,
    #[props(default = None)] description: Option<String>,
) -> Element {
    let mut expanded = use_signal(|| false);
    let expandable = description.as_deref().is_some_and(|d| !d.is_empty());
    let chevron_class = if expanded() {
        "resume-card__chevron resume-card__chevron--open"
    } else {
        "resume-card__chevron"
    };
    let fallback = logo_fallback(&alt_text);

    rsx! {
        div {
            class: "resume-card",
            onclick: move |_| {
                if expandable {
                    expanded.set(!expanded());
                }
            },

            Avatar {
                src: logo_url.clone(),
                alt: alt_text.clone(),
                fallback: fallback,
                class: Some("resume-card__logo".to_string()),
            }

            div { class: "resume-card__body",
                div { class: "resume-card__header",
                    h3 { class: "resume-card__title",
                        if let Some(link) = &href {
                            a {
                                href: "{link}",
                                target: "_blank",
                                rel: "noreferrer",
                                onclick: move |e| e.stop_propagation(),
                                "{title}"
                            }
                        } else {
                            "{title}"
                        }
                        for badge in badges.iter() {
                            Badge {
                                key: "{badge}",
                                label: badge.clone(),
                                variant: BadgeVariant::Secondary,
                            }
                        }
                        if expandable {
                            span { class: "{chevron_class}", "\u{203A}" }
                        }
                    }
                    div { class: "resume-card__period", "{period}" }
                }
                div { class: "resume-card__subtitle", "{subtitle}" }

                if expanded() {
                    if let Some(text) = &description {
                        Markdown {
                            content: text.clone(),
                            class: Some("resume-card__description".to_string()),
                        }
                    }
                }
            }
        }
    }
}
