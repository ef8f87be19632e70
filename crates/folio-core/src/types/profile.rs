//! Profile Data - Everything the portfolio page displays
//!
//! A `ProfileData` is built once at startup (either the built-in profile or
//! one loaded from JSON) and is never mutated afterwards.

use serde::{Deserialize, Serialize};

use super::PageMetadata;

/// Label shown in place of a missing work end date.
pub const PRESENT_LABEL: &str = "Present";

/// Complete portfolio content
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileData {
    /// Full display name
    pub name: String,

    /// Initials shown when the avatar image cannot load
    pub initials: String,

    /// Avatar image URL or asset path
    pub avatar_url: String,

    /// Hero headline and current employer
    pub hero: HeroData,

    /// Biography, paragraphs separated by a blank line
    pub summary: String,

    /// Work history, most recent first
    #[serde(default)]
    pub work: Vec<WorkEntry>,

    /// Education history
    #[serde(default)]
    pub education: Vec<EducationEntry>,

    /// Skill labels in display order
    #[serde(default)]
    pub skills: Vec<String>,

    /// Project gallery
    #[serde(default)]
    pub projects: Vec<ProjectEntry>,

    /// Outbound contact links
    pub contact: ContactData,

    /// Document head configuration
    pub metadata: PageMetadata,
}

/// Hero section subtitle and employer branding
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HeroData {
    /// Role shown under the name (e.g., "Lead Product Designer")
    pub headline: String,
    /// Current employer, used as logo alt text
    pub employer: String,
    /// Employer logo for the light colour scheme
    pub logo_light: String,
    /// Employer logo for the dark colour scheme
    pub logo_dark: String,
}

/// One position in the work history
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkEntry {
    pub company: String,
    pub title: String,
    pub href: Option<String>,
    pub logo_url: String,
    #[serde(default)]
    pub badges: Vec<String>,
    pub start: String,
    /// `None` while the position is ongoing
    #[serde(default)]
    pub end: Option<String>,
    pub description: String,
}

impl WorkEntry {
    /// Display period, e.g. "2022 - Present"
    pub fn period(&self) -> String {
        format!(
            "{} - {}",
            self.start,
            self.end.as_deref().unwrap_or(PRESENT_LABEL)
        )
    }
}

/// One school in the education history
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EducationEntry {
    pub school: String,
    pub degree: String,
    pub href: Option<String>,
    pub logo_url: String,
    pub start: String,
    pub end: String,
}

impl EducationEntry {
    pub fn period(&self) -> String {
        format!("{} - {}", self.start, self.end)
    }
}

/// One project card
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectEntry {
    pub title: String,
    /// Markdown
    pub description: String,
    pub dates: String,
    #[serde(default)]
    pub technologies: Vec<String>,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub video: Option<String>,
    #[serde(default)]
    pub href: Option<String>,
    #[serde(default)]
    pub links: Vec<ProjectLink>,
}

/// Secondary link on a project card (source, website, case study)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectLink {
    /// Kind of link, shown as the badge text
    #[serde(rename = "type")]
    pub label: String,
    pub href: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContactData {
    pub social: SocialLinks,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SocialLinks {
    #[serde(rename = "LinkedIn")]
    pub linkedin: SocialLink,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SocialLink {
    pub name: String,
    pub url: String,
}

impl ProfileData {
    /// Biography split on blank lines
    pub fn paragraphs(&self) -> impl Iterator<Item = &str> {
        self.summary.split("\n\n")
    }

    /// LinkedIn URL used by the contact call-to-action
    pub fn contact_url(&self) -> &str {
        &self.contact.social.linkedin.url
    }
}
