use dioxus::prelude::*;
use folio_core::page::SkillsView;
use folio_ui::{Badge, BlurFade};

#[component]
pub fn SkillsSection(view: SkillsView) -> Element {
    rsx! {
        section { id: "skills",
            div { class: "timeline",
                BlurFade { delay: view.heading.delay,
                    h2 { class: "section-heading", "{view.heading.view}" }
                }
                div { class: "badge-row",
                    for badge in view.badges.iter() {
                        BlurFade { key: "{badge.key}", delay: badge.delay,
                            Badge { label: badge.view.clone() }
                        }
                    }
                }
            }
        }
    }
}
