use super::*;

// =============================================================================
// ENVELOPE
// =============================================================================

#[test]
fn envelope_full_round_trip() {
    let json = r#"{ "status": "error", "message": "duplicate client", "data": { "id": 7 } }"#;
    let envelope: Envelope = serde_json::from_str(json).unwrap();
    assert_eq!(envelope.status, "error");
    assert_eq!(envelope.message.as_deref(), Some("duplicate client"));
    assert_eq!(envelope.data.unwrap()["id"], 7);
}

#[test]
fn envelope_message_and_data_are_optional() {
    let envelope: Envelope = serde_json::from_str(r#"{ "status": "success" }"#).unwrap();
    assert_eq!(envelope.status, "success");
    assert!(envelope.message.is_none());
    assert!(envelope.data.is_none());
}

#[test]
fn envelope_serialization_skips_absent_fields() {
    let envelope = Envelope { status: "success".into(), message: None, data: None };
    let json = serde_json::to_string(&envelope).unwrap();
    assert_eq!(json, r#"{"status":"success"}"#);
}

#[test]
fn envelope_tolerates_unknown_fields() {
    let json = r#"{ "status": "success", "pagination": { "page": 2 } }"#;
    let envelope: Envelope = serde_json::from_str(json).unwrap();
    assert_eq!(envelope.status, "success");
}

// =============================================================================
// REQUEST OPTIONS
// =============================================================================

#[test]
fn options_default_to_get_with_no_body() {
    let options = RequestOptions::new();
    assert_eq!(options.method, ApiMethod::Get);
    assert!(options.headers.is_empty());
    assert!(options.body.is_none());
    assert!(!options.retried);
}

#[test]
fn options_builders_set_fields() {
    let options = RequestOptions::new()
        .method(ApiMethod::Put)
        .header("x-trace-id", "t-1")
        .body(Some(RequestBody::Json(serde_json::json!({ "ok": true }))));
    assert_eq!(options.method, ApiMethod::Put);
    assert_eq!(options.headers, vec![("x-trace-id".to_string(), "t-1".to_string())]);
    assert!(matches!(options.body, Some(RequestBody::Json(_))));
}

#[test]
fn method_maps_onto_reqwest() {
    assert_eq!(ApiMethod::Get.as_reqwest(), reqwest::Method::GET);
    assert_eq!(ApiMethod::Post.as_reqwest(), reqwest::Method::POST);
    assert_eq!(ApiMethod::Put.as_reqwest(), reqwest::Method::PUT);
    assert_eq!(ApiMethod::Delete.as_reqwest(), reqwest::Method::DELETE);
}

// =============================================================================
// ERROR DISPLAY
// =============================================================================

#[test]
fn configuration_error_names_the_env_var() {
    assert!(ApiError::Configuration.to_string().contains("API_BASE_URL"));
}

#[test]
fn request_error_carries_the_message() {
    let error = ApiError::Request { status: Some(422), message: "invalid serial number".into() };
    assert!(error.to_string().contains("invalid serial number"));
}
