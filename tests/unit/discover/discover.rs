use super::*;

fn touch(dir: &std::path::Path, name: &str) {
    std::fs::write(dir.join(name), b"x").unwrap();
}

#[test]
fn matches_files_sorted_and_skips_directories() {
    let dir = tempfile::tempdir().unwrap();
    touch(dir.path(), "c.bin");
    touch(dir.path(), "a.bin");
    touch(dir.path(), "b.txt");
    std::fs::create_dir(dir.path().join("d.bin")).unwrap();

    let pattern = format!("{}/*.bin", dir.path().display());
    let found = discover_files(&pattern, true).unwrap();
    assert_eq!(
        found,
        vec![dir.path().join("a.bin"), dir.path().join("c.bin")]
    );
}

#[test]
fn no_matches_is_empty_not_error() {
    let dir = tempfile::tempdir().unwrap();
    let pattern = format!("{}/*.nothing", dir.path().display());
    assert!(discover_files(&pattern, true).unwrap().is_empty());
}

#[test]
fn malformed_or_empty_pattern_is_rejected() {
    assert!(matches!(
        discover_files("[", true),
        Err(BytereelError::Pattern(_))
    ));
    assert!(matches!(
        discover_files("  ", true),
        Err(BytereelError::Pattern(_))
    ));
}
