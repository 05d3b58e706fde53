use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        LineCircleError::validation("x")
            .to_string()
            .contains("validation error:")
    );
    assert!(
        LineCircleError::animation("x")
            .to_string()
            .contains("animation error:")
    );
    assert!(
        LineCircleError::render("x")
            .to_string()
            .contains("render error:")
    );
    assert!(
        LineCircleError::serde("x")
            .to_string()
            .contains("serialization error:")
    );
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("pixmap gone");
    let err = LineCircleError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("pixmap gone"));
}

#[test]
fn anyhow_converts_into_other() {
    fn fails() -> LineCircleResult<()> {
        let inner: anyhow::Result<()> = Err(anyhow::anyhow!("clock thread panicked"));
        inner?;
        Ok(())
    }
    let err = fails().unwrap_err();
    assert!(matches!(err, LineCircleError::Other(_)));
}
