//! Integration tests for the page renderer
//!
//! Checks the data-to-view mapping against the built-in profile and small
//! hand-built profiles.

use folio_core::page::{render_page, Section, SectionId};
use folio_core::{profile, ProfileData, WorkEntry};

fn work_entry(company: &str, start: &str, end: Option<&str>) -> WorkEntry {
    WorkEntry {
        company: company.to_string(),
        title: "Designer".to_string(),
        href: None,
        logo_url: format!("/{}.svg", company.to_lowercase().replace(' ', "-")),
        badges: vec![],
        start: start.to_string(),
        end: end.map(str::to_string),
        description: String::new(),
    }
}

fn profile_with_work(work: Vec<WorkEntry>) -> ProfileData {
    let mut p = profile().clone();
    p.work = work;
    p
}

fn work_periods(p: &ProfileData) -> Vec<String> {
    match render_page(p).section(SectionId::Work) {
        Some(Section::Work(timeline)) => timeline
            .cards
            .iter()
            .map(|c| c.view.period.clone())
            .collect(),
        other => panic!("expected work section, got {:?}", other),
    }
}

#[test]
fn test_sections_in_fixed_order() {
    let tree = render_page(profile());
    assert_eq!(tree.section_ids(), SectionId::ORDER.to_vec());
}

#[test]
fn test_ongoing_work_reads_present() {
    let p = profile_with_work(vec![work_entry("OM Bank", "2022", None)]);
    assert_eq!(work_periods(&p), vec!["2022 - Present".to_string()]);
}

#[test]
fn test_finished_work_reads_end() {
    let p = profile_with_work(vec![
        work_entry("OM Bank", "2022", None),
        work_entry("Wix", "2016", Some("2019")),
    ]);
    let periods = work_periods(&p);
    assert!(periods[0].ends_with("Present"));
    assert!(periods[1].ends_with("2019"));
}

#[test]
fn test_card_counts_match_lists() {
    let p = profile();
    let tree = render_page(p);

    for section in &tree.sections {
        match section {
            Section::Work(t) => assert_eq!(t.cards.len(), p.work.len()),
            Section::Education(t) => assert_eq!(t.cards.len(), p.education.len()),
            Section::Skills(s) => assert_eq!(s.badges.len(), p.skills.len()),
            Section::Projects(v) => assert_eq!(v.cards.len(), p.projects.len()),
            _ => {}
        }
    }
}

#[test]
fn test_cards_follow_list_order() {
    let p = profile();
    let tree = render_page(p);
    let Some(Section::Projects(projects)) = tree.section(SectionId::Projects) else {
        panic!("missing projects");
    };
    let keys: Vec<_> = projects.cards.iter().map(|c| c.key.as_str()).collect();
    let titles: Vec<_> = p.projects.iter().map(|p| p.title.as_str()).collect();
    assert_eq!(keys, titles);
}

#[test]
fn test_about_paragraphs() {
    let mut p = profile().clone();
    p.summary = "First.\n\nSecond.\nStill second.\n\nThird.".to_string();
    let tree = render_page(&p);
    let Some(Section::About(about)) = tree.section(SectionId::About) else {
        panic!("missing about");
    };
    assert_eq!(
        about.paragraphs,
        vec!["First.", "Second.\nStill second.", "Third."]
    );
}

#[test]
fn test_about_single_paragraph() {
    let mut p = profile().clone();
    p.summary = "Only one.".to_string();
    let tree = render_page(&p);
    let Some(Section::About(about)) = tree.section(SectionId::About) else {
        panic!("missing about");
    };
    assert_eq!(about.paragraphs.len(), 1);
}

#[test]
fn test_contact_link_target() {
    let mut p = profile().clone();
    p.contact.social.linkedin.url = "https://www.linkedin.com/in/someone-else".to_string();
    let tree = render_page(&p);
    let Some(Section::Contact(contact)) = tree.section(SectionId::Contact) else {
        panic!("missing contact");
    };
    assert_eq!(contact.link_href, p.contact.social.linkedin.url);
    assert_eq!(contact.link_text, "with a direct question on LinkedIn");
}

#[test]
fn test_render_is_idempotent() {
    let p = profile();
    assert_eq!(render_page(p), render_page(p));
}

#[test]
fn test_empty_lists_render_headings_only() {
    let mut p = profile().clone();
    p.work.clear();
    p.education.clear();
    p.skills.clear();
    p.projects.clear();
    let tree = render_page(&p);
    assert_eq!(tree.sections.len(), 7);
    let Some(Section::Skills(skills)) = tree.section(SectionId::Skills) else {
        panic!("missing skills");
    };
    assert!(skills.badges.is_empty());
    assert_eq!(skills.heading.view, "Skills");
}

#[test]
fn test_tree_serializes() {
    let json = serde_json::to_value(render_page(profile())).unwrap();
    assert_eq!(json["sections"].as_array().map(Vec::len), Some(7));
}
