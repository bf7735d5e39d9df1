use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        FxError::validation("x")
            .to_string()
            .contains("validation error:")
    );
    assert!(FxError::serde("x").to_string().contains("serialization error:"));
    assert_eq!(
        FxError::unknown_resolution("hd-9000").to_string(),
        "unknown resolution 'hd-9000'"
    );
    assert!(
        FxError::authority("spiral", "offline")
            .to_string()
            .contains("effect 'spiral': offline")
    );
}

#[test]
fn serde_json_errors_convert() {
    let err = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
    let err: FxError = err.into();
    assert!(matches!(err, FxError::Serde(_)));
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = FxError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}
