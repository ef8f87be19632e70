//! Blur Fade Components
//!
//! Entrance transition: content starts blurred, transparent and offset
//! downwards, then settles in place after `delay` seconds.

use dioxus::prelude::*;

/// Default vertical offset in pixels
pub const DEFAULT_Y_OFFSET: f64 = 6.0;

/// Inline style carrying the delay and offset to the `blur-fade` keyframes
pub fn blur_fade_style(delay: f64, y_offset: f64) -> String {
    format!(
        "animation-delay: {:.2}s; --blur-fade-y: {}px;",
        delay, y_offset
    )
}

/// Properties for the BlurFade component
#[derive(Clone, PartialEq, Props)]
pub struct BlurFadeProps {
    /// Seconds before the transition starts
    #[props(default = 0.0)]
    pub delay: f64,
    /// Starting vertical offset in pixels
    #[props(default = DEFAULT_Y_OFFSET)]
    pub y_offset: f64,
    /// Optional additional CSS classes
    #[props(default)]
    pub class: Option<String>,
    pub children: Element,
}

/// Wraps children in a blur-fade entrance transition
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     BlurFade { delay: 0.28,
///         ResumeCard { .. }
///     }
/// }
/// ```
#[component]
pub fn BlurFade(props: BlurFadeProps) -> Element {
    let style = blur_fade_style(props.delay, props.y_offset);
    let extra_class = props.class.as_deref().unwrap_or("");

    rsx! {
        div {
            class: "blur-fade {extra_class}",
            style: "{style}",
            {props.children}
        }
    }
}

/// A single line of text with the blur-fade entrance
#[component]
pub fn BlurFadeText(
    text: String,
    #[props(default = 0.0)] delay: f64,
    #[props(default = DEFAULT_Y_OFFSET)] y_offset: f64,
    #[props(default)] class: Option<String>,
) -> Element {
    let style = blur_fade_style(delay, y_offset);
    let extra_class = class.as_deref().unwrap_or("");

    rsx! {
        span {
            class: "blur-fade blur-fade-text {extra_class}",
            style: "{style}",
            "{text}"
        }
    }
}
