use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(ChartError::parse("x").to_string().contains("parse error:"));
    assert!(
        ChartError::validation("x")
            .to_string()
            .contains("validation error:")
    );
    assert!(
        ChartError::scale_domain("x")
            .to_string()
            .contains("scale domain error:")
    );
    assert!(
        ChartError::evaluation("x")
            .to_string()
            .contains("evaluation error:")
    );
    assert!(
        ChartError::target_not_found("#chart")
            .to_string()
            .contains("target not found: #chart")
    );
    assert!(
        ChartError::data_source_not_found("primary")
            .to_string()
            .contains("data source not found: primary")
    );
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = ChartError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}
