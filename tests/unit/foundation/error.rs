use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        BytereelError::encoding("x")
            .to_string()
            .contains("encoding error:")
    );
    assert!(
        BytereelError::validation("x")
            .to_string()
            .contains("validation error:")
    );
    assert!(
        BytereelError::pattern("x")
            .to_string()
            .contains("pattern error:")
    );
}

#[test]
fn read_maps_not_found_to_its_own_variant() {
    let err = BytereelError::read(
        "missing.bin",
        std::io::Error::from(std::io::ErrorKind::NotFound),
    );
    assert!(matches!(err, BytereelError::NotFound { .. }));
    assert!(err.is_read_failure());
    assert!(err.to_string().contains("missing.bin"));

    let err = BytereelError::read(
        "locked.bin",
        std::io::Error::from(std::io::ErrorKind::PermissionDenied),
    );
    assert!(matches!(err, BytereelError::Io { .. }));
    assert!(err.is_read_failure());
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = BytereelError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
    assert!(!err.is_read_failure());
}
