//! Work Experience Orbit
//!
//! Employer logos circling the profile initials: even-indexed employers on
//! the inner ring, odd-indexed ones on the outer ring turning the other way.

use dioxus::prelude::*;
use folio_core::page::{OrbitItem, OrbitView};
use folio_ui::{OrbitIcon, OrbitingCircles};

const INNER_RADIUS: f64 = 100.0;
const OUTER_RADIUS: f64 = 190.0;

fn icons(items: &[OrbitItem]) -> Vec<OrbitIcon> {
    items
        .iter()
        .map(|item| OrbitIcon {
            src: item.logo_url.clone(),
            alt: item.company.clone(),
        })
        .collect()
}

#[component]
pub fn WorkExperienceOrbit(orbit: OrbitView) -> Element {
    if orbit.is_empty() {
        return VNode::empty();
    }

    rsx! {
        div { class: "orbit",
            span { class: "orbit__center", "{orbit.center}" }
            OrbitingCircles {
                icons: icons(&orbit.inner),
                radius: INNER_RADIUS,
                duration: 20.0,
                icon_size: 44,
            }
            if !orbit.outer.is_empty() {
                OrbitingCircles {
                    icons: icons(&orbit.outer),
                    radius: OUTER_RADIUS,
                    duration: 30.0,
                    reverse: true,
                    icon_size: 52,
                }
            }
        }
    }
}
