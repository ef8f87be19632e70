//! Badge Component
//!
//! Small pill labels for skills, technologies and project links.

use dioxus::prelude::*;

/// Badge style variants
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum BadgeVariant {
    /// Filled foreground pill (skills)
    #[default]
    Default,
    /// Muted pill (card tags)
    Secondary,
    /// Outlined pill (card links)
    Outline,
}

impl BadgeVariant {
    /// Returns the CSS class for this variant
    pub fn class(&self) -> &'static str {
        match self {
            BadgeVariant::Default => "badge",
            BadgeVariant::Secondary => "badge badge-secondary",
            BadgeVariant::Outline => "badge badge-outline",
        }
    }
}

/// Properties for the Badge component
#[derive(Clone, PartialEq, Props)]
pub struct BadgeProps {
    pub label: String,
    #[props(default)]
    pub variant: BadgeVariant,
    /// Turns the badge into an outbound link
    #[props(default)]
    pub href: Option<String>,
}

/// Pill label, optionally linking out
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     Badge { label: "Figma".to_string() }
///     Badge {
///         label: "Website".to_string(),
///         variant: BadgeVariant::Outline,
///         href: Some("https://example.com".to_string()),
///     }
/// }
/// ```
#[component]
pub fn Badge(props: BadgeProps) -> Element {
    let class = props.variant.class();

    rsx! {
        if let Some(href) = &props.href {
            a {
                href: "{href}",
                target: "_blank",
                rel: "noreferrer",
                class: "{class}",
                "{props.label}"
            }
        } else {
            span { class: "{class}", "{props.label}" }
        }
    }
}
