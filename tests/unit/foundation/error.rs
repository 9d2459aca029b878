use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        MarqueeError::validation("x")
            .to_string()
            .contains("validation error:")
    );
    assert!(MarqueeError::parse("x").to_string().contains("parse error:"));
    assert!(
        MarqueeError::taxonomy("x")
            .to_string()
            .contains("taxonomy error:")
    );
    assert!(
        MarqueeError::serde("x")
            .to_string()
            .contains("serialization error:")
    );
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = MarqueeError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}
