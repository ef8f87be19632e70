//! Project Card Component
//!
//! Gallery card with a media header, Markdown description, technology tags
//! and outbound links.

use dioxus::prelude::*;
use folio_core::ProjectLink;

use super::{Badge, BadgeVariant, Markdown};

/// Media shown at the top of a project card
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ProjectMedia {
    Video(String),
    Image(String),
    None,
}

impl ProjectMedia {
    /// A video wins over an image when both are present.
    pub fn pick(image: Option<&str>, video: Option<&str>) -> Self {
        match (video, image) {
            (Some(v), _) if !v.is_empty() => ProjectMedia::Video(v.to_string()),
            (_, Some(i)) if !i.is_empty() => ProjectMedia::Image(i.to_string()),
            _ => ProjectMedia::None,
        }
    }
}

#[component]
pub fn ProjectCard(
    title: String,
    description: String,
    dates: String,
    #[props(default = None)] href: Option<String>,
    #[props(default)] tags: Vec<String>,
    #[props(default = None)] image: Option<String>,
    #[props(default = None)] video: Option<String>,
    #[props(default)] links: Vec<ProjectLink>,
) -> Element {
    let media = ProjectMedia::pick(image.as_deref(), video.as_deref());
    let target = href.clone().unwrap_or_else(|| "#".to_string());

    rsx! {
        div { class: "project-card",
            a {
                class: "project-card__media",
                href: "{target}",
                target: "_blank",
                rel: "noreferrer",
                {match media {
                    ProjectMedia::Video(src) => rsx! {
                        video {
                            class: "project-card__video",
                            src: "{src}",
                            autoplay: true,
                            r#loop: true,
                            muted: true,
                            playsinline: true,
                        }
                    },
                    ProjectMedia::Image(src) => rsx! {
                        img {
                            class: "project-card__image",
                            src: "{src}",
                            alt: "{title}",
                        }
                    },
                    ProjectMedia::None => rsx! {
                        div { class: "project-card__placeholder" }
                    },
                }}
            }

            div { class: "project-card__body",
                h3 { class: "project-card__title", "{title}" }
                time { class: "project-card__dates", "{dates}" }
                Markdown {
                    content: description.clone(),
                    class: Some("project-card__description".to_string()),
                }
            }

            if !tags.is_empty() {
                div { class: "project-card__tags",
                    for tag in tags.iter() {
                        Badge {
                            key: "{tag}",
                            label: tag.clone(),
                            variant: BadgeVariant::Secondary,
                        }
                    }
                }
            }

            if !links.is_empty() {
                div { class: "project-card__links",
                    for link in links.iter() {
                        Badge {
                            key: "{link.href}",
                            label: link.label.clone(),
                            variant: BadgeVariant::Outline,
                            href: Some(link.href.clone()),
                        }
                    }
                }
            }
        }
    }
}
