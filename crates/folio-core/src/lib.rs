//! Folio Core Library
//!
//! Portfolio data model and the pure page renderer.
//!
//! ## Overview
//!
//! A portfolio is described by a single [`ProfileData`] value: identity,
//! biography, work and education history, skills, projects and a contact
//! link. [`page::render_page`] turns it into a [`page::PageTree`] that the
//! desktop UI walks to build the visible page.
//!
//! ## Quick Start
//!
//! ```ignore
//! use folio_core::{page::render_page, profile};
//!
//! let tree = render_page(profile());
//! for section in &tree.sections {
//!     println!("{}", section.id().anchor());
//! }
//! ```

pub mod data;
pub mod error;
pub mod page;
pub mod types;

// Re-exports
pub use data::{load_profile, parse_profile, profile};
pub use error::{FolioError, FolioResult};
pub use page::{render_page, PageTree, Section, SectionId};
pub use types::*;
