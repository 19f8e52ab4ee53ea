use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        DracoError::validation("x")
            .to_string()
            .contains("validation error:")
    );
    assert!(DracoError::font("x").to_string().contains("font error:"));
    assert!(
        DracoError::serde("x")
            .to_string()
            .contains("serialization error:")
    );
}

#[test]
fn parse_error_reports_line() {
    let err = DracoError::parse(7, "unknown node \"q9\"");
    assert_eq!(
        err.to_string(),
        "parse error at line 7: unknown node \"q9\""
    );
}

#[test]
fn other_and_io_preserve_source() {
    let base = std::io::Error::other("boom");
    let err = DracoError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));

    let err: DracoError = std::io::Error::other("disk").into();
    assert!(err.to_string().contains("disk"));
}
