//! Section components for the portfolio page.
//!
//! Each section takes its slice of the page tree and instantiates the
//! visual primitives from `folio-ui`.

mod about;
mod contact;
mod hero;
mod projects;
mod scheme_toggle;
mod skills;
mod timeline;
mod work_experience_orbit;

pub use about::AboutSection;
pub use contact::ContactSection;
pub use hero::HeroSection;
pub use projects::ProjectsSection;
pub use scheme_toggle::SchemeToggle;
pub use skills::SkillsSection;
pub use timeline::TimelineSection;
pub use work_experience_orbit::WorkExperienceOrbit;
