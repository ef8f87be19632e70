//! Loading profiles from JSON files on disk

use folio_core::{load_profile, profile, render_page, FolioError};
use tempfile::TempDir;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter("folio_core=debug")
        .with_test_writer()
        .try_init();
}

#[test]
fn test_load_written_profile() {
    init_tracing();
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("profile.json");

    let mut custom = profile().clone();
    custom.name = "Ada Example".to_string();
    custom.work.truncate(1);
    std::fs::write(&path, serde_json::to_string_pretty(&custom).unwrap()).unwrap();

    let loaded = load_profile(&path).unwrap();
    assert_eq!(loaded, custom);
    assert_eq!(render_page(&loaded).sections.len(), 7);
}

#[test]
fn test_missing_file_is_io_error() {
    let dir = TempDir::new().unwrap();
    let err = load_profile(dir.path().join("nope.json")).unwrap_err();
    assert!(matches!(err, FolioError::Io(_)));
}

#[test]
fn test_malformed_file_is_parse_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("broken.json");
    std::fs::write(&path, "{ \"name\": ").unwrap();
    let err = load_profile(&path).unwrap_err();
    assert!(matches!(err, FolioError::Parse(_)));
}

#[test]
fn test_blank_name_reports_path() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("blank.json");
    let mut custom = profile().clone();
    custom.name = String::new();
    std::fs::write(&path, serde_json::to_string(&custom).unwrap()).unwrap();

    match load_profile(&path) {
        Err(FolioError::EmptyProfile(p)) => assert!(p.ends_with("blank.json")),
        other => panic!("expected EmptyProfile, got {:?}", other),
    }
}

#[test]
fn test_camel_case_keys() {
    let json = serde_json::to_value(profile()).unwrap();
    assert!(json.get("avatarUrl").is_some());
    assert!(json["contact"]["social"]["LinkedIn"]["url"].is_string());
    assert!(json["metadata"]["openGraph"]["type"].is_string());
}
