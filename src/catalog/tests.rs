use super::*;
use std::path::Path;

#[test]
fn builtin_catalog_has_four_entries_in_order() {
    let catalog = Catalog::builtin(Path::new("/tmp/sounds"));
    let names: Vec<&str> = catalog.entries().iter().map(|e| e.name.as_str()).collect();
    assert_eq!(names, vec!["White Noise", "Rain", "Ocean", "Forest"]);
    assert_eq!(catalog.first().name, "White Noise");
}

#[test]
fn builtin_assets_are_resolved_against_sounds_dir() {
    let catalog = Catalog::builtin(Path::new("/tmp/sounds"));
    assert_eq!(
        catalog.get(1).unwrap().asset,
        Path::new("/tmp/sounds").join("rain.mp3")
    );
}

#[test]
fn names_are_unique() {
    let catalog = Catalog::builtin(Path::new("."));
    for (i, e) in catalog.entries().iter().enumerate() {
        assert_eq!(catalog.position(&e.name), Some(i));
    }
}

#[test]
fn position_ignores_case_and_whitespace() {
    let catalog = Catalog::builtin(Path::new("."));
    assert_eq!(catalog.position("  ocean "), Some(2));
    assert_eq!(catalog.position("thunder"), None);
}

#[test]
fn next_and_prev_wrap_around() {
    let catalog = Catalog::builtin(Path::new("."));
    assert_eq!(catalog.next_index(3), 0);
    assert_eq!(catalog.next_index(0), 1);
    assert_eq!(catalog.prev_index(0), 3);
    assert_eq!(catalog.prev_index(2), 1);
}

#[test]
fn builtin_names_match_catalog() {
    let catalog = Catalog::builtin(Path::new("."));
    let names: Vec<&str> = Catalog::builtin_names().collect();
    assert_eq!(names.len(), catalog.len());
    assert_eq!(names[3], "Forest");
}

#[test]
fn probe_reports_missing_asset() {
    let dir = tempfile::tempdir().unwrap();
    let info = probe_asset(&dir.path().join("nope.mp3"));
    assert!(!info.exists);
    assert_eq!(info.duration, None);
}

#[test]
fn probe_tolerates_unreadable_asset() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("rain.mp3");
    std::fs::write(&path, b"not really an mp3").unwrap();

    let info = probe_asset(&path);
    assert!(info.exists);
    assert_eq!(info.duration, None);
}
