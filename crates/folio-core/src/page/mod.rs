//! Page rendering.
//!
//! [`render_page`] maps a [`ProfileData`](crate::ProfileData) onto a
//! [`PageTree`]: seven sections in fixed order, one sub-view per list entry,
//! each carrying a stable key and an entrance animation delay.
//!
//! ```ignore
//! use folio_core::{page::render_page, profile};
//!
//! let tree = render_page(profile());
//! assert_eq!(tree.sections.len(), 7);
//! ```

mod render;
mod tree;

pub use render::{entry_delay, orbit, render_page, section_delay, BLUR_FADE_DELAY, ENTRY_DELAY_STEP};
pub use tree::{
    AboutView, Animated, AvatarView, ContactView, EmployerView, HeroView, OrbitItem, OrbitView,
    PageTree, ProjectCardView, ProjectsView, ResumeCardView, Section, SectionId, SkillsView,
    TimelineView,
};
