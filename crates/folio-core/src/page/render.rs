//! ProfileData -> PageTree

use crate::types::{EducationEntry, ProfileData, ProjectEntry, WorkEntry};

use super::tree::*;

/// Base entrance delay unit, in seconds
pub const BLUR_FADE_DELAY: f64 = 0.04;

/// Extra delay per list entry, in seconds
pub const ENTRY_DELAY_STEP: f64 = 0.05;

// Delay multipliers per node, in page order
const STEP_AVATAR: u32 = 1;
const STEP_NAME: u32 = 2;
const STEP_HEADLINE: u32 = 3;
const STEP_EMPLOYER: u32 = 4;
const STEP_ABOUT: u32 = 4;
const STEP_WORK: u32 = 6;
const STEP_EDUCATION: u32 = 8;
const STEP_SKILLS: u32 = 10;
const STEP_PROJECTS: u32 = 12;
const STEP_CONTACT: u32 = 14;

/// Delay for a section-level node
pub fn section_delay(step: u32) -> f64 {
    BLUR_FADE_DELAY * f64::from(step)
}

/// Delay for the `index`-th entry of a list whose entries start at `step`
pub fn entry_delay(step: u32, index: usize) -> f64 {
    section_delay(step) + index as f64 * ENTRY_DELAY_STEP
}

fn animated<T>(key: impl Into<String>, delay: f64, view: T) -> Animated<T> {
    Animated {
        key: key.into(),
        delay,
        view,
    }
}

/// Render the whole page.
///
/// Pure: the same profile always yields an equal tree.
pub fn render_page(profile: &ProfileData) -> PageTree {
    let sections = vec![
        Section::Hero(hero(profile)),
        Section::About(about(profile)),
        Section::Work(work(&profile.work)),
        Section::Education(education(&profile.education)),
        Section::Skills(skills(&profile.skills)),
        Section::Projects(projects(&profile.projects)),
        Section::Contact(contact(profile)),
    ];
    tracing::debug!(
        work = profile.work.len(),
        education = profile.education.len(),
        skills = profile.skills.len(),
        projects = profile.projects.len(),
        "Rendered page tree"
    );
    PageTree { sections }
}

fn hero(profile: &ProfileData) -> HeroView {
    HeroView {
        avatar: animated(
            "avatar",
            section_delay(STEP_AVATAR),
            AvatarView {
                src: profile.avatar_url.clone(),
                alt: profile.name.clone(),
                fallback: profile.initials.clone(),
            },
        ),
        name: animated("name", section_delay(STEP_NAME), profile.name.clone()),
        headline: animated(
            "headline",
            section_delay(STEP_HEADLINE),
            profile.hero.headline.clone(),
        ),
        employer: animated(
            "employer",
            section_delay(STEP_EMPLOYER),
            EmployerView {
                name: profile.hero.employer.clone(),
                logo_light: profile.hero.logo_light.clone(),
                logo_dark: profile.hero.logo_dark.clone(),
            },
        ),
    }
}

fn about(profile: &ProfileData) -> AboutView {
    AboutView {
        heading: "About Me".to_string(),
        delay: section_delay(STEP_ABOUT),
        paragraphs: profile.paragraphs().map(str::to_string).collect(),
        orbit: orbit(profile),
    }
}

/// Work logos alternate between the inner and outer ring.
pub fn orbit(profile: &ProfileData) -> OrbitView {
    let (inner, outer): (Vec<_>, Vec<_>) = profile
        .work
        .iter()
        .enumerate()
        .map(|(i, w)| {
            (
                i,
                OrbitItem {
                    company: w.company.clone(),
                    logo_url: w.logo_url.clone(),
                },
            )
        })
        .partition(|(i, _)| i % 2 == 0);

    OrbitView {
        center: profile.initials.clone(),
        inner: inner.into_iter().map(|(_, item)| item).collect(),
        outer: outer.into_iter().map(|(_, item)| item).collect(),
    }
}

fn work_card(entry: &WorkEntry) -> ResumeCardView {
    ResumeCardView {
        logo_url: entry.logo_url.clone(),
        alt_text: entry.company.clone(),
        title: entry.company.clone(),
        subtitle: entry.title.clone(),
        href: entry.href.clone(),
        badges: entry.badges.clone(),
        period: entry.period(),
        description: Some(entry.description.clone()),
    }
}

fn education_card(entry: &EducationEntry) -> ResumeCardView {
    ResumeCardView {
        logo_url: entry.logo_url.clone(),
        alt_text: entry.school.clone(),
        title: entry.school.clone(),
        subtitle: entry.degree.clone(),
        href: entry.href.clone(),
        badges: Vec::new(),
        period: entry.period(),
        description: None,
    }
}

fn work(entries: &[WorkEntry]) -> TimelineView {
    TimelineView {
        heading: animated(
            "work-heading",
            section_delay(STEP_WORK),
            "Work Experience".to_string(),
        ),
        cards: entries
            .iter()
            .enumerate()
            .map(|(i, w)| animated(&w.company, entry_delay(STEP_WORK + 1, i), work_card(w)))
            .collect(),
    }
}

fn education(entries: &[EducationEntry]) -> TimelineView {
    TimelineView {
        heading: animated(
            "education-heading",
            section_delay(STEP_EDUCATION),
            "Education".to_string(),
        ),
        cards: entries
            .iter()
            .enumerate()
            .map(|(i, e)| {
                animated(
                    &e.school,
                    entry_delay(STEP_EDUCATION + 1, i),
                    education_card(e),
                )
            })
            .collect(),
    }
}

fn skills(labels: &[String]) -> SkillsView {
    SkillsView {
        heading: animated(
            "skills-heading",
            section_delay(STEP_SKILLS),
            "Skills".to_string(),
        ),
        badges: labels
            .iter()
            .enumerate()
            .map(|(i, skill)| animated(skill, entry_delay(STEP_SKILLS + 1, i), skill.clone()))
            .collect(),
    }
}

fn project_card(entry: &ProjectEntry) -> ProjectCardView {
    ProjectCardView {
        title: entry.title.clone(),
        href: entry.href.clone(),
        description: entry.description.clone(),
        dates: entry.dates.clone(),
        tags: entry.technologies.clone(),
        image: entry.image.clone(),
        video: entry.video.clone(),
        links: entry.links.clone(),
    }
}

fn projects(entries: &[ProjectEntry]) -> ProjectsView {
    ProjectsView {
        label: "My Projects".to_string(),
        heading: "Check out my latest work".to_string(),
        blurb: "I've worked on a variety of projects, from simple websites to complex \
                web applications. Here are a few of my favorites."
            .to_string(),
        delay: section_delay(STEP_PROJECTS),
        cards: entries
            .iter()
            .enumerate()
            .map(|(i, p)| {
                animated(
                    &p.title,
                    entry_delay(STEP_PROJECTS + 1, i),
                    project_card(p),
                )
            })
            .collect(),
    }
}

fn contact(profile: &ProfileData) -> ContactView {
    ContactView {
        label: "Contact".to_string(),
        heading: "Get in Touch".to_string(),
        lead: "Want to chat? Just shoot me a dm ".to_string(),
        link_text: "with a direct question on LinkedIn".to_string(),
        link_href: profile.contact_url().to_string(),
        trail: " and I'll respond whenever I can. Professional enquiries welcome.".to_string(),
        delay: section_delay(STEP_CONTACT),
    }
}
