//! Project gallery.

use dioxus::prelude::*;
use folio_core::page::ProjectsView;
use folio_ui::{BlurFade, ProjectCard};

#[component]
pub fn ProjectsSection(view: ProjectsView) -> Element {
    rsx! {
        section { id: "projects",
            BlurFade { delay: view.delay,
                div { class: "section-intro",
                    div { class: "section-label", "{view.label}" }
                    h2 { class: "section-title", "{view.heading}" }
                    p { class: "muted", "{view.blurb}" }
                }
            }
            div { class: "project-grid",
                for card in view.cards.iter() {
                    BlurFade { key: "{card.key}", delay: card.delay,
                        ProjectCard {
                            title: card.view.title.clone(),
                            href: card.view.href.clone(),
                            description: card.view.description.clone(),
                            dates: card.view.dates.clone(),
                            tags: card.view.tags.clone(),
                            image: card.view.image.clone(),
                            video: card.view.video.clone(),
                            links: card.view.links.clone(),
                        }
                    }
                }
            }
        }
    }
}
