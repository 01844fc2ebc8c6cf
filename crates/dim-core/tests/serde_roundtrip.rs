use dim_core::errors::{DimError, ErrorInfo};
use dim_core::Dimension;

#[test]
fn error_roundtrip() {
    let err = DimError::Parse(
        ErrorInfo::new("invalid-integer", "expected an integer token")
            .with_context("token", "abc")
            .with_context("position", 4),
    );
    let json = serde_json::to_string(&err).unwrap();
    assert!(json.contains("\"family\":\"Parse\""));
    let back: DimError = serde_json::from_str(&json).unwrap();
    assert_eq!(err, back);
}

#[test]
fn dimension_is_transparent() {
    let dim = Dimension::from_raw(-42);
    let json = serde_json::to_string(&dim).unwrap();
    assert_eq!(json, "-42");
    let back: Dimension = serde_json::from_str(&json).unwrap();
    assert_eq!(back, dim);
    assert_eq!(dim.to_string(), "-42");
}
