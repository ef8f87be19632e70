//! Contact call-to-action.

use dioxus::prelude::*;
use folio_core::page::ContactView;
use folio_ui::BlurFade;

use crate::app::Route;

#[component]
pub fn ContactSection(view: ContactView) -> Element {
    let target = NavigationTarget::<Route>::External(view.link_href.clone());

    rsx! {
        section { id: "contact", class: "contact",
            BlurFade { delay: view.delay,
                div { class: "section-intro",
                    div { class: "section-label", "{view.label}" }
                    h2 { class: "section-title", "{view.heading}" }
                    p { class: "contact__text",
                        "{view.lead}"
                        Link {
                            class: "contact__link".to_string(),
                            to: target,
                            new_tab: true,
                            "{view.link_text}"
                        }
                        "{view.trail}"
                    }
                }
            }
        }
    }
}
