//! Built-in profile and JSON profile loading.
//!
//! The built-in profile is constructed on first access and shared for the
//! rest of the process. An alternative profile can be read from a JSON file
//! whose shape is the serde representation of [`ProfileData`].

use std::path::Path;
use std::sync::OnceLock;

use crate::error::{FolioError, FolioResult};
use crate::types::{
    ContactData, EducationEntry, HeroData, OpenGraph, PageMetadata, ProfileData, ProjectEntry,
    ProjectLink, SocialLink, SocialLinks, WorkEntry,
};

static PROFILE: OnceLock<ProfileData> = OnceLock::new();

/// The built-in portfolio profile.
pub fn profile() -> &'static ProfileData {
    PROFILE.get_or_init(builtin_profile)
}

/// Read a profile from a JSON file.
///
/// Fails if the file is unreadable, is not profile JSON, or has a blank name.
pub fn load_profile(path: impl AsRef<Path>) -> FolioResult<ProfileData> {
    let path = path.as_ref();
    let raw = std::fs::read_to_string(path)?;
    let profile = parse_profile(&raw).map_err(|e| match e {
        FolioError::EmptyProfile(_) => FolioError::EmptyProfile(path.display().to_string()),
        other => other,
    })?;
    tracing::debug!(
        path = %path.display(),
        work = profile.work.len(),
        projects = profile.projects.len(),
        "Loaded profile"
    );
    Ok(profile)
}

/// Parse a profile from a JSON string.
pub fn parse_profile(raw: &str) -> FolioResult<ProfileData> {
    let profile: ProfileData = serde_json::from_str(raw)?;
    if profile.name.trim().is_empty() {
        return Err(FolioError::EmptyProfile("<inline>".to_string()));
    }
    Ok(profile)
}

fn s(value: &str) -> String {
    value.to_string()
}

fn builtin_profile() -> ProfileData {
    ProfileData {
        name: s("Josh Vilensky"),
        initials: s("JV"),
        avatar_url: s("/me.png"),
        hero: HeroData {
            headline: s("Lead Product Designer"),
            employer: s("OM Bank"),
            logo_light: s("/ombank-logo-green.svg"),
            logo_dark: s("/ombank-logo-white.svg"),
        },
        summary: s(
            "I design digital products that make complicated things feel simple. \
             For the last decade I have worked across fintech, health and consumer \
             apps, shaping everything from early research to shipped pixels.\n\n\
             Today I lead product design at OM Bank, where a small team and I are \
             rebuilding everyday banking around clarity and trust.\n\n\
             Outside of work I mentor junior designers, sketch type specimens and \
             spend too long tuning motion curves.",
        ),
        work: vec![
            WorkEntry {
                company: s("OM Bank"),
                title: s("Lead Product Designer"),
                href: Some(s("https://ombank.com")),
                logo_url: s("/ombank-logo-green.svg"),
                badges: vec![s("Fintech")],
                start: s("2022"),
                end: None,
                description: s(
                    "Leading design for the retail banking app and the design system \
                     behind it.",
                ),
            },
            WorkEntry {
                company: s("Lemonade"),
                title: s("Senior Product Designer"),
                href: Some(s("https://lemonade.com")),
                logo_url: s("/lemonade.svg"),
                badges: vec![],
                start: s("2019"),
                end: Some(s("2022")),
                description: s(
                    "Designed claims and onboarding flows for home and pet insurance.",
                ),
            },
            WorkEntry {
                company: s("Wix"),
                title: s("Product Designer"),
                href: Some(s("https://wix.com")),
                logo_url: s("/wix.svg"),
                badges: vec![],
                start: s("2016"),
                end: Some(s("2019")),
                description: s("Worked on the editor's mobile layout tools."),
            },
        ],
        education: vec![
            EducationEntry {
                school: s("Shenkar College"),
                degree: s("B.Des. Visual Communication"),
                href: Some(s("https://www.shenkar.ac.il")),
                logo_url: s("/shenkar.png"),
                start: s("2012"),
                end: s("2016"),
            },
            EducationEntry {
                school: s("Interaction Design Foundation"),
                degree: s("UX Certification"),
                href: Some(s("https://www.interaction-design.org")),
                logo_url: s("/idf.png"),
                start: s("2017"),
                end: s("2018"),
            },
        ],
        skills: [
            "Product Strategy",
            "Interaction Design",
            "Design Systems",
            "Prototyping",
            "User Research",
            "Figma",
            "Motion",
            "HTML/CSS",
        ]
        .into_iter()
        .map(s)
        .collect(),
        projects: vec![
            ProjectEntry {
                title: s("OM Mobile"),
                description: s(
                    "A ground-up redesign of the **OM Bank** mobile app, from account \
                     overview to card controls.",
                ),
                dates: s("2023 - 2024"),
                technologies: vec![s("Figma"), s("Design Tokens"), s("SwiftUI")],
                image: Some(s("/om-mobile.png")),
                video: None,
                href: Some(s("https://ombank.com/app")),
                links: vec![ProjectLink {
                    label: s("Website"),
                    href: s("https://ombank.com/app"),
                }],
            },
            ProjectEntry {
                title: s("Pulse Design System"),
                description: s(
                    "Token-driven component library shared by web and native teams.",
                ),
                dates: s("2022 - Present"),
                technologies: vec![s("Figma"), s("Storybook"), s("React")],
                image: None,
                video: Some(s("/pulse.mp4")),
                href: None,
                links: vec![],
            },
            ProjectEntry {
                title: s("Claims in 3 Minutes"),
                description: s(
                    "Reworked the insurance claim flow into a guided chat, cutting \
                     median completion time by half.",
                ),
                dates: s("2020 - 2021"),
                technologies: vec![s("Research"), s("Prototyping")],
                image: Some(s("/claims.png")),
                video: None,
                href: Some(s("https://lemonade.com/claims")),
                links: vec![ProjectLink {
                    label: s("Case Study"),
                    href: s("https://lemonade.com/claims"),
                }],
            },
        ],
        contact: ContactData {
            social: SocialLinks {
                linkedin: SocialLink {
                    name: s("LinkedIn"),
                    url: s("https://www.linkedin.com/in/joshvilensky"),
                },
            },
        },
        metadata: PageMetadata {
            title: s("Josh's Portfolio | UX/UI Product Designer"),
            description: s(
                "Epic UX/UI Designer Portfolio showcasing creative projects and design work",
            ),
            keywords: vec![
                s("UX Designer"),
                s("UI Designer"),
                s("Portfolio"),
                s("Creative Design"),
            ],
            authors: vec![s("Josh")],
            creator: s("Josh"),
            open_graph: OpenGraph {
                title: s("Josh's Portfolio | UX/UI Designer"),
                description: s(
                    "Epic UX/UI Designer Portfolio showcasing creative projects and design work",
                ),
                kind: s("website"),
            },
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_profile_is_shared() {
        assert!(std::ptr::eq(profile(), profile()));
    }

    #[test]
    fn test_builtin_keys_unique() {
        let p = profile();
        let mut companies: Vec<_> = p.work.iter().map(|w| &w.company).collect();
        companies.sort();
        companies.dedup();
        assert_eq!(companies.len(), p.work.len());

        let mut skills = p.skills.clone();
        skills.sort();
        skills.dedup();
        assert_eq!(skills.len(), p.skills.len());
    }

    #[test]
    fn test_builtin_has_ongoing_position() {
        assert!(profile().work.iter().any(|w| w.end.is_none()));
    }

    #[test]
    fn test_parse_round_trips_builtin() {
        let json = serde_json::to_string(profile()).unwrap();
        let parsed = parse_profile(&json).unwrap();
        assert_eq!(&parsed, profile());
    }

    #[test]
    fn test_parse_rejects_blank_name() {
        let mut p = profile().clone();
        p.name = s("   ");
        let json = serde_json::to_string(&p).unwrap();
        assert!(matches!(
            parse_profile(&json),
            Err(FolioError::EmptyProfile(_))
        ));
    }
}
