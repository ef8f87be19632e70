//! Visual tree produced by the page renderer.
//!
//! Plain data only: the UI crate walks this tree and instantiates one
//! visual primitive per node. Delays are in seconds.

use serde::Serialize;

use crate::types::ProjectLink;

/// Fixed identity and order of the page regions
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum SectionId {
    Hero,
    About,
    Work,
    Education,
    Skills,
    Projects,
    Contact,
}

impl SectionId {
    /// All sections in render order
    pub const ORDER: [SectionId; 7] = [
        SectionId::Hero,
        SectionId::About,
        SectionId::Work,
        SectionId::Education,
        SectionId::Skills,
        SectionId::Projects,
        SectionId::Contact,
    ];

    /// HTML `id` used as the in-page anchor
    pub fn anchor(&self) -> &'static str {
        match self {
            SectionId::Hero => "hero",
            SectionId::About => "about",
            SectionId::Work => "work",
            SectionId::Education => "education",
            SectionId::Skills => "skills",
            SectionId::Projects => "projects",
            SectionId::Contact => "contact",
        }
    }
}

/// A node with a stable key and an entrance animation delay
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Animated<T> {
    pub key: String,
    pub delay: f64,
    pub view: T,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PageTree {
    pub sections: Vec<Section>,
}

impl PageTree {
    pub fn section(&self, id: SectionId) -> Option<&Section> {
        self.sections.iter().find(|s| s.id() == id)
    }

    pub fn section_ids(&self) -> Vec<SectionId> {
        self.sections.iter().map(Section::id).collect()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Section {
    Hero(HeroView),
    About(AboutView),
    Work(TimelineView),
    Education(TimelineView),
    Skills(SkillsView),
    Projects(ProjectsView),
    Contact(ContactView),
}

impl Section {
    pub fn id(&self) -> SectionId {
        match self {
            Section::Hero(_) => SectionId::Hero,
            Section::About(_) => SectionId::About,
            Section::Work(_) => SectionId::Work,
            Section::Education(_) => SectionId::Education,
            Section::Skills(_) => SectionId::Skills,
            Section::Projects(_) => SectionId::Projects,
            Section::Contact(_) => SectionId::Contact,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HeroView {
    pub avatar: Animated<AvatarView>,
    pub name: Animated<String>,
    pub headline: Animated<String>,
    pub employer: Animated<EmployerView>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AvatarView {
    pub src: String,
    pub alt: String,
    pub fallback: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EmployerView {
    pub name: String,
    pub logo_light: String,
    pub logo_dark: String,
}

/// About text (left column) and work orbit (right column)
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AboutView {
    pub heading: String,
    pub delay: f64,
    pub paragraphs: Vec<String>,
    pub orbit: OrbitView,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OrbitView {
    pub center: String,
    pub inner: Vec<OrbitItem>,
    pub outer: Vec<OrbitItem>,
}

impl OrbitView {
    pub fn len(&self) -> usize {
        self.inner.len() + self.outer.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty() && self.outer.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OrbitItem {
    pub company: String,
    pub logo_url: String,
}

/// Work or education list
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TimelineView {
    pub heading: Animated<String>,
    pub cards: Vec<Animated<ResumeCardView>>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResumeCardView {
    pub logo_url: String,
    pub alt_text: String,
    pub title: String,
    pub subtitle: String,
    pub href: Option<String>,
    pub badges: Vec<String>,
    pub period: String,
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SkillsView {
    pub heading: Animated<String>,
    pub badges: Vec<Animated<String>>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProjectsView {
    pub label: String,
    pub heading: String,
    pub blurb: String,
    pub delay: f64,
    pub cards: Vec<Animated<ProjectCardView>>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProjectCardView {
    pub title: String,
    pub href: Option<String>,
    pub description: String,
    pub dates: String,
    pub tags: Vec<String>,
    pub image: Option<String>,
    pub video: Option<String>,
    pub links: Vec<ProjectLink>,
}

/// "Get in Touch" call-to-action
///
/// Rendered as `lead`, then a link with `link_text` to `link_href`, then
/// `trail`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ContactView {
    pub label: String,
    pub heading: String,
    pub lead: String,
    pub link_text: String,
    pub link_href: String,
    pub trail: String,
    pub delay: f64,
}
