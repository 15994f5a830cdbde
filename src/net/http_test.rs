use super::*;

use serde_json::json;

// =============================================================
// Requests and the retry envelope
// =============================================================

#[test]
fn envelope_starts_unretried() {
    let envelope = Envelope::new(ApiRequest::get("/api/v1/rooms"));
    assert!(!envelope.retried);
    assert_eq!(envelope.request.bearer, None);
}

#[test]
fn request_builders_set_method_and_body() {
    let request = ApiRequest::post("/api/v1/auth/login").json(json!({ "email": "a@x.com" }));
    assert_eq!(request.method, Method::Post);
    assert_eq!(request.body, Some(json!({ "email": "a@x.com" })));

    let request = ApiRequest::get("/api/v1/rooms");
    assert_eq!(request.method, Method::Get);
    assert_eq!(request.body, None);
}

// =============================================================
// Status classification
// =============================================================

#[test]
fn only_401_counts_as_unauthorized() {
    let unauthorized = ApiResponse { status: 401, body: serde_json::Value::Null };
    assert!(unauthorized.is_unauthorized());

    for status in [200u16, 204, 400, 403, 404, 500] {
        let response = ApiResponse { status, body: serde_json::Value::Null };
        assert!(!response.is_unauthorized(), "status {status}");
    }
}

#[test]
fn into_result_maps_non_success_to_status_error() {
    let ok = ApiResponse { status: 201, body: json!({ "id": 1 }) };
    assert!(ok.into_result().is_ok());

    let err = ApiResponse { status: 403, body: json!({ "message": "nope" }) }
        .into_result()
        .expect_err("403 is an error");
    assert_eq!(err, ApiError::Status { status: 403, body: json!({ "message": "nope" }) });
    assert!(!err.is_unauthorized());
}

#[test]
fn decode_reports_shape_mismatches() {
    let response = ApiResponse { status: 200, body: json!({ "unexpected": true }) };
    let err = response
        .decode::<crate::net::types::AuthResponse>()
        .expect_err("body does not match");
    assert!(matches!(err, ApiError::Decode(_)));
}

// =============================================================
// Config
// =============================================================

#[test]
fn config_joins_paths_onto_base() {
    let config = ApiConfig::new("http://localhost:8080/api/v1");
    assert_eq!(config.url("/auth/login"), "http://localhost:8080/api/v1/auth/login");

    let config = ApiConfig::default();
    assert_eq!(config.url("/auth/refresh"), "/api/v1/auth/refresh");
}

#[test]
fn error_display_names_the_failure() {
    let err = ApiError::Status { status: 401, body: serde_json::Value::Null };
    assert_eq!(err.to_string(), "request failed with status 401");
    assert_eq!(
        ApiError::Network("offline".to_owned()).to_string(),
        "network error: offline"
    );
}
