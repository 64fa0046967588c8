use super::*;

// =============================================================
// Helpers
// =============================================================

fn status_error(raw: &str) -> ApiError {
    ApiError::from_status(422, raw)
}

// =============================================================
// Role
// =============================================================

#[test]
fn role_serializes_lowercase() {
    assert_eq!(serde_json::to_string(&Role::Stagiaire).unwrap(), "\"stagiaire\"");
    assert_eq!(serde_json::to_string(&Role::Company).unwrap(), "\"company\"");
    assert_eq!(serde_json::to_string(&Role::Admin).unwrap(), "\"admin\"");
}

#[test]
fn role_rejects_unknown_wire_value() {
    assert!(serde_json::from_str::<Role>("\"recruiter\"").is_err());
}

#[test]
fn role_from_str_is_case_insensitive() {
    assert_eq!("ADMIN".parse::<Role>(), Ok(Role::Admin));
    assert_eq!(" company ".parse::<Role>(), Ok(Role::Company));
    assert!("owner".parse::<Role>().is_err());
}

#[test]
fn role_default_matches_backend_default() {
    assert_eq!(Role::default(), Role::Stagiaire);
}

// =============================================================
// User / LoginResponse
// =============================================================

#[test]
fn user_deserializes_backend_shape() {
    let raw = r#"{
        "id": 7,
        "name": "Amira",
        "email": "amira@example.com",
        "role": "stagiaire",
        "cv_url": null,
        "created_at": "2024-03-01T10:00:00Z"
    }"#;
    let user: User = serde_json::from_str(raw).unwrap();
    assert_eq!(user.id, 7);
    assert_eq!(user.role, Role::Stagiaire);
    assert_eq!(user.cv_url, None);
    assert_eq!(user.created_at.as_deref(), Some("2024-03-01T10:00:00Z"));
}

#[test]
fn user_optional_fields_may_be_absent() {
    let raw = r#"{"id":1,"name":"Acme","email":"hr@acme.tn","role":"company"}"#;
    let user: User = serde_json::from_str(raw).unwrap();
    assert_eq!(user.role, Role::Company);
    assert!(user.cv_url.is_none());
    assert!(user.created_at.is_none());
}

#[test]
fn login_response_defaults_token_type() {
    let raw = r#"{"access_token":"t0k","user":{"id":1,"name":"A","email":"a@b.c","role":"admin"}}"#;
    let resp: LoginResponse = serde_json::from_str(raw).unwrap();
    assert_eq!(resp.access_token, "t0k");
    assert_eq!(resp.token_type, "bearer");
    assert_eq!(resp.user.role, Role::Admin);
}

// =============================================================
// OfferQuery
// =============================================================

#[test]
fn offer_query_skips_blank_filters() {
    let query = OfferQuery {
        search: Some("  rust ".to_owned()),
        category: Some("   ".to_owned()),
        location: None,
    };
    assert_eq!(query.pairs(), vec![("search", "rust")]);
}

#[test]
fn application_status_round_trips_lowercase() {
    let status: ApplicationStatus = serde_json::from_str("\"accepted\"").unwrap();
    assert_eq!(status, ApplicationStatus::Accepted);
    assert_eq!(status.as_str(), "accepted");
}

// =============================================================
// Error message normalization
// =============================================================

#[test]
fn string_detail_is_used_verbatim() {
    let err = ApiError::from_status(401, r#"{"detail":"Incorrect email or password"}"#);
    assert_eq!(err.user_message(), "Incorrect email or password");
}

#[test]
fn field_error_list_is_joined_by_location() {
    let err = status_error(r#"{"detail":[{"loc":["body","password"],"msg":"too short"}]}"#);
    assert_eq!(err.user_message(), "body.password: too short");
}

#[test]
fn multiple_field_errors_become_multiple_lines() {
    let err = status_error(
        r#"{"detail":[
            {"loc":["body","email"],"msg":"value is not a valid email address","type":"value_error"},
            {"loc":["body","items",0],"msg":"field required","type":"missing"}
        ]}"#,
    );
    assert_eq!(
        err.user_message(),
        "body.email: value is not a valid email address\nbody.items.0: field required"
    );
}

#[test]
fn unknown_detail_shape_falls_back_to_generic() {
    let err = status_error(r#"{"detail":{"code":42}}"#);
    assert_eq!(err.user_message(), GENERIC_ERROR_MESSAGE);
}

#[test]
fn empty_field_error_list_falls_back_to_generic() {
    let err = status_error(r#"{"detail":[]}"#);
    assert_eq!(err.user_message(), GENERIC_ERROR_MESSAGE);
}

#[test]
fn malformed_field_error_entry_falls_back_to_generic() {
    let err = status_error(r#"{"detail":[{"message":"nope"}]}"#);
    assert_eq!(err.user_message(), GENERIC_ERROR_MESSAGE);
}

#[test]
fn non_json_body_falls_back_to_generic() {
    let err = ApiError::from_status(502, "<html>Bad Gateway</html>");
    assert_eq!(err.status(), Some(502));
    assert_eq!(err.user_message(), GENERIC_ERROR_MESSAGE);
}

#[test]
fn transport_and_unavailable_errors_use_generic_message() {
    assert_eq!(ApiError::Transport("offline".to_owned()).user_message(), GENERIC_ERROR_MESSAGE);
    assert_eq!(ApiError::Unavailable.user_message(), GENERIC_ERROR_MESSAGE);
    assert_eq!(ApiError::Unavailable.status(), None);
}
