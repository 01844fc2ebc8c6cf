use dim_core::errors::{DimError, ErrorInfo};

fn sample_info(code: &str, message: &str) -> ErrorInfo {
    ErrorInfo::new(code, message)
        .with_context("size", 0)
        .with_context("reason", "example")
}

#[test]
fn config_error_surface() {
    let err = DimError::Config(sample_info("table-size-zero", "table size must be positive"));
    assert_eq!(err.code(), "table-size-zero");
    assert!(err.info().context.contains_key("size"));
}

#[test]
fn parse_error_surface() {
    let err = DimError::Parse(sample_info("missing-token", "unexpected end of input"));
    assert_eq!(err.info().code, "missing-token");
    assert!(err.info().context.contains_key("reason"));
}

#[test]
fn io_error_surface() {
    let source = std::io::Error::new(std::io::ErrorKind::NotFound, "no such file");
    let err = DimError::io("read-failed", &source).with_context("path", "dims.in");
    assert!(matches!(err, DimError::Io(_)));
    assert_eq!(err.info().context.get("path"), Some(&"dims.in".to_string()));
    assert!(err.info().context.contains_key("kind"));
}

#[test]
fn with_context_keeps_family() {
    let err = DimError::Serde(ErrorInfo::new("S001", "schema mismatch")).with_context("field", "mode");
    assert!(matches!(err, DimError::Serde(_)));
    assert_eq!(err.info().context.get("field"), Some(&"mode".to_string()));
}

#[test]
fn display_includes_context_and_hint() {
    let err = DimError::Config(
        ErrorInfo::new("threshold-not-positive", "threshold must be positive")
            .with_context("threshold", -1.0)
            .with_hint("use a load factor such as 0.75"),
    );
    let rendered = err.to_string();
    assert!(rendered.starts_with("config error: threshold must be positive"));
    assert!(rendered.contains("threshold=-1"));
    assert!(rendered.contains("hint: use a load factor such as 0.75"));
}
