use transcriber::infrastructure::observability::{REQUEST_ID_HEADER, RequestId, TracingConfig};

#[test]
fn given_request_id_header_constant_when_accessed_then_returns_correct_value() {
    assert_eq!(REQUEST_ID_HEADER, "x-request-id");
}

#[test]
fn given_request_id_when_cloned_then_equals_original() {
    let original = RequestId("abc".to_string());
    assert_eq!(original.clone(), original);
}

#[test]
fn given_warn_level_when_building_default_filter_then_crate_stays_at_debug() {
    let config = TracingConfig::new("test", "warn", false);

    assert_eq!(
        config.default_filter(),
        "warn,transcriber=debug,tower_http=debug"
    );
}
