//! Hero section: avatar, name, headline and current employer.

use dioxus::prelude::*;
use folio_core::page::HeroView;
use folio_ui::{Avatar, BlurFade, BlurFadeText};

#[component]
pub fn HeroSection(view: HeroView) -> Element {
    let employer = &view.employer.view;

    rsx! {
        section { id: "hero", class: "hero",
            div { class: "hero__row",
                BlurFade { delay: view.avatar.delay,
                    Avatar {
                        src: view.avatar.view.src.clone(),
                        alt: view.avatar.view.alt.clone(),
                        fallback: view.avatar.view.fallback.clone(),
                        class: Some("avatar--hero".to_string()),
                    }
                }

                div {
                    BlurFadeText {
                        text: view.name.view.clone(),
                        delay: view.name.delay,
                        y_offset: 8.0,
                        class: Some("hero__name".to_string()),
                    }

                    div { class: "hero__headline",
                        BlurFadeText {
                            text: view.headline.view.clone(),
                            delay: view.headline.delay,
                        }
                        BlurFade { delay: view.employer.delay,
                            span { "\u{00B7}" }
                        }
                        BlurFade { delay: view.employer.delay,
                            div { class: "hero__employer",
                                span { "Working at" }
                                img {
                                    class: "logo-light",
                                    src: "{employer.logo_light}",
                                    alt: "{employer.name}",
                                }
                                img {
                                    class: "logo-dark",
                                    src: "{employer.logo_dark}",
                                    alt: "{employer.name}",
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
