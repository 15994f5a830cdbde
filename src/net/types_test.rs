use super::*;

// =============================================================
// Role wire/storage format
// =============================================================

#[test]
fn role_storage_round_trip() {
    for role in [Role::Admin, Role::Manager, Role::Chef, Role::User] {
        assert_eq!(Role::parse(role.as_str()), Some(role));
    }
}

#[test]
fn role_parse_rejects_unknown_and_case_variants() {
    assert_eq!(Role::parse("SUPERVISOR"), None);
    assert_eq!(Role::parse("admin"), None);
    assert_eq!(Role::parse(""), None);
}

#[test]
fn role_deserializes_uppercase() {
    let role: Role = serde_json::from_str("\"CHEF\"").expect("valid role");
    assert_eq!(role, Role::Chef);
}

#[test]
fn dashboard_paths_are_role_specific() {
    assert_eq!(Role::Admin.dashboard_path(), "/admin");
    assert_eq!(Role::Manager.dashboard_path(), "/manager");
    assert_eq!(Role::Chef.dashboard_path(), "/chef");
    assert_eq!(Role::User.dashboard_path(), "/user");
}

// =============================================================
// Response bodies
// =============================================================

#[test]
fn auth_response_decodes_camel_case() {
    let body = serde_json::json!({
        "accessToken": "T1",
        "refreshToken": "R1",
        "email": "a@x.com",
        "role": "MANAGER"
    });
    let auth: AuthResponse = serde_json::from_value(body).expect("valid auth response");
    assert_eq!(auth.access_token, "T1");
    assert_eq!(auth.refresh_token, "R1");
    assert_eq!(auth.email, "a@x.com");
    assert_eq!(auth.role, Role::Manager);
}

#[test]
fn refresh_response_ignores_extra_fields() {
    let body = serde_json::json!({
        "accessToken": "T2",
        "refreshToken": "R2",
        "email": "a@x.com",
        "role": "MANAGER"
    });
    let refresh: RefreshResponse = serde_json::from_value(body).expect("valid refresh response");
    assert_eq!(refresh.access_token, "T2");
}
