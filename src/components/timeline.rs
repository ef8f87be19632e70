//! Work and education timelines.

use dioxus::prelude::*;
use folio_core::page::TimelineView;
use folio_ui::{BlurFade, ResumeCard};

#[component]
pub fn TimelineSection(anchor: &'static str, view: TimelineView) -> Element {
    rsx! {
        section { id: "{anchor}",
            div { class: "timeline",
                BlurFade { delay: view.heading.delay,
                    h2 { class: "section-heading", "{view.heading.view}" }
                }
                for card in view.cards.iter() {
                    BlurFade { key: "{card.key}", delay: card.delay,
                        ResumeCard {
                            logo_url: card.view.logo_url.clone(),
                            alt_text: card.view.alt_text.clone(),
                            title: card.view.title.clone(),
                            subtitle: card.view.subtitle.clone(),
                            href: card.view.href.clone(),
                            badges: card.view.badges.clone(),
                            period: card.view.period.clone(),
                            description: card.view.description.clone(),
                        }
                    }
                }
            }
        }
    }
}
