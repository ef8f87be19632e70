//! Home page - the whole portfolio.
//!
//! Renders the profile into a page tree once, then hands each section to
//! its view component in tree order.

use dioxus::prelude::*;
use folio_core::page::{render_page, PageTree, Section};
use folio_core::MetaAttr;

use crate::components::{
    AboutSection, ContactSection, HeroSection, ProjectsSection, SchemeToggle, SkillsSection,
    TimelineSection,
};
use crate::context::{use_color_scheme, use_profile};
use folio_ui::HexagonBackground;

fn section_view(section: &Section) -> Element {
    let key = section.id().anchor();
    match section {
        Section::Hero(view) => rsx! { HeroSection { key: "{key}", view: view.clone() } },
        Section::About(view) => rsx! { AboutSection { key: "{key}", view: view.clone() } },
        Section::Work(view) | Section::Education(view) => rsx! {
            TimelineSection { key: "{key}", anchor: key, view: view.clone() }
        },
        Section::Skills(view) => rsx! { SkillsSection { key: "{key}", view: view.clone() } },
        Section::Projects(view) => rsx! { ProjectsSection { key: "{key}", view: view.clone() } },
        Section::Contact(view) => rsx! { ContactSection { key: "{key}", view: view.clone() } },
    }
}

/// Portfolio page component.
#[component]
pub fn Home() -> Element {
    let profile = use_profile();
    let scheme = use_color_scheme();
    let tree: PageTree = use_hook(|| render_page(profile));
    let meta = &profile.metadata;
    let scheme_class = scheme().class();

    rsx! {
        document::Title { "{meta.title}" }
        for (i, tag) in meta.meta_tags().into_iter().enumerate() {
            {match tag.attr {
                MetaAttr::Name => rsx! {
                    document::Meta { key: "{i}", name: tag.key, content: tag.content }
                },
                MetaAttr::Property => rsx! {
                    document::Meta { key: "{i}", property: tag.key, content: tag.content }
                },
            }}
        }

        main { class: "page {scheme_class}",
            HexagonBackground {}
            SchemeToggle {}

            for section in tree.sections.iter() {
                {section_view(section)}
            }
        }
    }
}
