//! About section: biography on the left, work orbit on the right.

use dioxus::prelude::*;
use folio_core::page::AboutView;
use folio_ui::BlurFade;

use super::WorkExperienceOrbit;

#[component]
pub fn AboutSection(view: AboutView) -> Element {
    rsx! {
        section { id: "about", class: "about-grid",
            div {
                BlurFade { delay: view.delay,
                    h2 { class: "about__heading", "{view.heading}" }
                    div { class: "about__text",
                        for (i, paragraph) in view.paragraphs.iter().enumerate() {
                            p { key: "{i}", "{paragraph}" }
                        }
                    }
                }
            }

            div { class: "about__orbit",
                WorkExperienceOrbit { orbit: view.orbit.clone() }
            }
        }
    }
}
