use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        DrapeError::empty_input("x")
            .to_string()
            .contains("empty input:")
    );
    assert!(DrapeError::format("x").to_string().contains("format error:"));
    assert!(
        DrapeError::detection("x")
            .to_string()
            .contains("detection error:")
    );
    assert!(
        DrapeError::missing_landmark("x")
            .to_string()
            .contains("missing landmark:")
    );
    assert!(
        DrapeError::degenerate_measurement("x")
            .to_string()
            .contains("degenerate measurement:")
    );
    assert!(
        DrapeError::validation("x")
            .to_string()
            .contains("validation error:")
    );
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = DrapeError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}
