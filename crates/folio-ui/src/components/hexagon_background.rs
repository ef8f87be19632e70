//! Hexagon Background Component
//!
//! Honeycomb pattern rendered as an inline SVG `<pattern>`, fixed behind the
//! page. Purely decorative.

use dioxus::prelude::*;

/// Points of a flat-topped hexagon of circumradius `size` centred at
/// (`size`, `size * sqrt(3) / 2`).
pub fn hexagon_points(size: f64) -> String {
    let h = size * 3f64.sqrt() / 2.0;
    let cx = size;
    let cy = h;
    [
        (cx - size, cy),
        (cx - size / 2.0, cy - h),
        (cx + size / 2.0, cy - h),
        (cx + size, cy),
        (cx + size / 2.0, cy + h),
        (cx - size / 2.0, cy + h),
    ]
    .iter()
    .map(|(x, y)| format!("{:.2},{:.2}", x, y))
    .collect::<Vec<_>>()
    .join(" ")
}

/// Width and height of one pattern tile
pub fn tile_size(size: f64) -> (f64, f64) {
    (size * 3.0, size * 3f64.sqrt())
}

/// Properties for the HexagonBackground component
#[derive(Clone, PartialEq, Props)]
pub struct HexagonBackgroundProps {
    /// Hexagon circumradius in pixels
    #[props(default = 40.0)]
    pub hexagon_size: f64,
    /// Optional additional CSS classes (opacity, stacking)
    #[props(default)]
    pub class: Option<String>,
}

/// Fixed honeycomb background
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     HexagonBackground { class: Some("page-background".to_string()) }
/// }
/// ```
#[component]
pub fn HexagonBackground(props: HexagonBackgroundProps) -> Element {
    let size = props.hexagon_size;
    let (tile_w, tile_h) = tile_size(size);
    let points = hexagon_points(size);
    // Second hexagon fills the offset column of the honeycomb
    let offset_x = size * 1.5;
    let offset_y = tile_h / 2.0;
    let extra_class = props.class.as_deref().unwrap_or("");

    rsx! {
        div {
            class: "hexagon-bg {extra_class}",
            "aria-hidden": "true",
            svg {
                width: "100%",
                height: "100%",
                defs {
                    pattern {
                        id: "hexagon-pattern",
                        width: "{tile_w}",
                        height: "{tile_h}",
                        "patternUnits": "userSpaceOnUse",
                        g {
                            class: "hexagon-bg__cells",
                            fill: "none",
                            stroke_width: "1",
                            polygon { points: "{points}" }
                            polygon {
                                points: "{points}",
                                transform: "translate({offset_x} {offset_y})",
                            }
                        }
                    }
                }
                rect {
                    width: "100%",
                    height: "100%",
                    fill: "url(#hexagon-pattern)",
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hexagon_has_six_points() {
        assert_eq!(hexagon_points(40.0).split(' ').count(), 6);
    }

    #[test]
    fn hexagon_points_start_on_left_edge() {
        let points = hexagon_points(10.0);
        assert!(points.starts_with("0.00,8.66"));
    }

    #[test]
    fn tile_spans_two_columns() {
        let (w, h) = tile_size(10.0);
        assert_eq!(w, 30.0);
        assert!((h - 17.320508).abs() < 1e-5);
    }
}
