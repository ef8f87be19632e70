//! Orbiting Circles Component
//!
//! Places icons evenly on a circle and spins them around the centre with
//! the `orbit` keyframes.

use dioxus::prelude::*;

/// An icon travelling on an orbit
#[derive(Clone, Debug, PartialEq)]
pub struct OrbitIcon {
    pub src: String,
    pub alt: String,
}

/// Starting angles in degrees for `count` evenly spaced icons
pub fn orbit_angles(count: usize) -> Vec<f64> {
    if count == 0 {
        return Vec::new();
    }
    let step = 360.0 / count as f64;
    (0..count).map(|i| step * i as f64).collect()
}

/// Inline style for one orbiting icon
pub fn orbit_style(radius: f64, duration: f64, angle: f64, reverse: bool) -> String {
    let direction = if reverse { "reverse" } else { "normal" };
    format!(
        "--orbit-radius: {}px; --orbit-angle: {:.1}deg; animation-duration: {}s; animation-direction: {};",
        radius, angle, duration, direction
    )
}

#[component]
pub fn OrbitingCircles(
    icons: Vec<OrbitIcon>,
    /// Orbit radius in pixels
    #[props(default = 160.0)]
    radius: f64,
    /// Seconds per revolution
    #[props(default = 20.0)]
    duration: f64,
    #[props(default = false)] reverse: bool,
    /// Draw the orbit path
    #[props(default = true)]
    path: bool,
    #[props(default = 40)] icon_size: u32,
) -> Element {
    let angles = orbit_angles(icons.len());
    let diameter = radius * 2.0;

    rsx! {
        if path {
            svg {
                class: "orbit-path",
                width: "{diameter}",
                height: "{diameter}",
                "aria-hidden": "true",
                circle {
                    cx: "{radius}",
                    cy: "{radius}",
                    r: "{radius}",
                    fill: "none",
                }
            }
        }
        for (icon, angle) in icons.iter().zip(angles) {
            {
                let style = format!(
                    "{} width: {}px; height: {}px;",
                    orbit_style(radius, duration, angle, reverse),
                    icon_size,
                    icon_size
                );
                rsx! {
                    div {
                        key: "{icon.alt}",
                        class: "orbit-item",
                        style: "{style}",
                        img {
                            src: "{icon.src}",
                            alt: "{icon.alt}",
                            title: "{icon.alt}",
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn angles_evenly_spaced() {
        assert_eq!(orbit_angles(4), vec![0.0, 90.0, 180.0, 270.0]);
    }

    #[test]
    fn no_icons_no_angles() {
        assert!(orbit_angles(0).is_empty());
    }

    #[test]
    fn reverse_direction() {
        let style = orbit_style(100.0, 20.0, 90.0, true);
        assert!(style.contains("animation-direction: reverse"));
        assert!(style.contains("--orbit-angle: 90.0deg"));
        assert!(style.contains("--orbit-radius: 100px"));
    }
}
