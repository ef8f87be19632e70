//! Folio UI Components
//!
//! Dioxus visual primitives for the portfolio page. Each component is
//! presentational: it receives plain props and renders markup whose look
//! and motion live in the global stylesheet of the desktop app.
//!
//! ## Motion
//!
//! - **BlurFade**: entrance transition, staggered with `animation-delay`
//! - **OrbitingCircles**: icons rotating around a centre
//! - **HexagonBackground**: static decorative pattern behind the page

pub mod components;

pub use components::*;
