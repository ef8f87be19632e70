//! Property-based tests for the page renderer
//!
//! Uses proptest to check the renderer's invariants over arbitrary profiles.

use folio_core::page::{render_page, Section, SectionId};
use folio_core::{profile, EducationEntry, ProfileData, ProjectEntry, WorkEntry};
use proptest::prelude::*;

// ============================================================================
// Strategy Generators
// ============================================================================

fn label_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-zA-Z0-9 ]{1,24}").expect("valid regex")
}

fn work_strategy() -> impl Strategy<Value = WorkEntry> {
    (
        label_strategy(),
        "[0-9]{4}",
        prop::option::of("[0-9]{4}"),
    )
        .prop_map(|(company, start, end)| WorkEntry {
            company,
            title: "Designer".to_string(),
            href: None,
            logo_url: "/logo.svg".to_string(),
            badges: vec![],
            start,
            end,
            description: String::new(),
        })
}

fn education_strategy() -> impl Strategy<Value = EducationEntry> {
    (label_strategy(), "[0-9]{4}", "[0-9]{4}").prop_map(|(school, start, end)| EducationEntry {
        school,
        degree: "B.Des".to_string(),
        href: None,
        logo_url: "/school.png".to_string(),
        start,
        end,
    })
}

fn project_strategy() -> impl Strategy<Value = ProjectEntry> {
    label_strategy().prop_map(|title| ProjectEntry {
        title,
        description: "A project".to_string(),
        dates: "2024".to_string(),
        technologies: vec![],
        image: None,
        video: None,
        href: None,
        links: vec![],
    })
}

/// Paragraphs without blank lines inside them
fn summary_strategy() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(
        prop::string::string_regex("[a-zA-Z .,]{1,80}").expect("valid regex"),
        1..6,
    )
}

fn profile_strategy() -> impl Strategy<Value = ProfileData> {
    (
        prop::collection::vec(work_strategy(), 0..8),
        prop::collection::vec(education_strategy(), 0..5),
        prop::collection::vec(label_strategy(), 0..20),
        prop::collection::vec(project_strategy(), 0..8),
        summary_strategy(),
    )
        .prop_map(|(work, education, skills, projects, paragraphs)| {
            let mut p = profile().clone();
            p.work = work;
            p.education = education;
            p.skills = skills;
            p.projects = projects;
            p.summary = paragraphs.join("\n\n");
            p
        })
}

fn strictly_increasing(delays: &[f64]) -> bool {
    delays.windows(2).all(|w| w[0] < w[1])
}

// ============================================================================
// Property Tests
// ============================================================================

proptest! {
    /// Every work period ends with the end date or "Present"
    #[test]
    fn work_period_suffix(p in profile_strategy()) {
        let tree = render_page(&p);
        let Some(Section::Work(work)) = tree.section(SectionId::Work) else {
            panic!("missing work");
        };
        for (card, entry) in work.cards.iter().zip(&p.work) {
            let expected = entry.end.as_deref().unwrap_or("Present");
            prop_assert!(card.view.period.ends_with(expected));
            prop_assert!(card.view.period.starts_with(&entry.start));
        }
    }

    /// One sub-view per list entry
    #[test]
    fn sub_view_counts(p in profile_strategy()) {
        let tree = render_page(&p);
        for section in &tree.sections {
            match section {
                Section::Work(t) => prop_assert_eq!(t.cards.len(), p.work.len()),
                Section::Education(t) => prop_assert_eq!(t.cards.len(), p.education.len()),
                Section::Skills(s) => prop_assert_eq!(s.badges.len(), p.skills.len()),
                Section::Projects(v) => prop_assert_eq!(v.cards.len(), p.projects.len()),
                Section::About(a) => prop_assert_eq!(a.orbit.len(), p.work.len()),
                _ => {}
            }
        }
    }

    /// Paragraph count matches blank-line-separated segments
    #[test]
    fn paragraph_count(paragraphs in summary_strategy()) {
        let mut p = profile().clone();
        p.summary = paragraphs.join("\n\n");
        let tree = render_page(&p);
        let Some(Section::About(about)) = tree.section(SectionId::About) else {
            panic!("missing about");
        };
        prop_assert_eq!(about.paragraphs.len(), paragraphs.len());
    }

    /// Entry delays grow with the entry index
    #[test]
    fn delays_increase(p in profile_strategy()) {
        let tree = render_page(&p);
        for section in &tree.sections {
            let delays: Vec<f64> = match section {
                Section::Work(t) | Section::Education(t) => {
                    t.cards.iter().map(|c| c.delay).collect()
                }
                Section::Skills(s) => s.badges.iter().map(|b| b.delay).collect(),
                Section::Projects(v) => v.cards.iter().map(|c| c.delay).collect(),
                _ => continue,
            };
            prop_assert!(strictly_increasing(&delays));
        }
    }

    /// Same input, same tree
    #[test]
    fn render_is_pure(p in profile_strategy()) {
        prop_assert_eq!(render_page(&p), render_page(&p));
    }
}
