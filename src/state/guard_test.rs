use super::*;

use crate::net::types::Identity;

fn restoring() -> SessionState {
    SessionState { user: None, loading: true }
}

fn unauthenticated() -> SessionState {
    SessionState { user: None, loading: false }
}

fn signed_in(role: Role) -> SessionState {
    SessionState {
        user: Some(Identity { email: "a@x.com".to_owned(), role }),
        loading: false,
    }
}

// =============================================================
// Decision table
// =============================================================

#[test]
fn loading_wins_over_everything() {
    assert_eq!(decide(&restoring(), &[Role::Admin]), GuardDecision::Loading);
    assert_eq!(decide(&restoring(), &[]), GuardDecision::Loading);
}

#[test]
fn unauthenticated_redirects_to_login() {
    assert_eq!(
        decide(&unauthenticated(), &[Role::Chef]),
        GuardDecision::RedirectToLogin
    );
    assert_eq!(decide(&unauthenticated(), &[]), GuardDecision::RedirectToLogin);
}

#[test]
fn wrong_role_redirects_to_unauthorized() {
    assert_eq!(
        decide(&signed_in(Role::Chef), &[Role::Admin]),
        GuardDecision::RedirectToUnauthorized
    );
    assert_eq!(
        decide(&signed_in(Role::Manager), &[Role::User]),
        GuardDecision::RedirectToUnauthorized
    );
}

#[test]
fn matching_role_renders() {
    assert_eq!(decide(&signed_in(Role::Chef), &[Role::Chef]), GuardDecision::Render);
    assert_eq!(decide(&signed_in(Role::Admin), &[Role::Admin]), GuardDecision::Render);
}

#[test]
fn empty_role_set_admits_any_authenticated_user() {
    assert_eq!(decide(&signed_in(Role::User), &[]), GuardDecision::Render);
}

#[test]
fn role_in_larger_set_renders() {
    assert_eq!(
        decide(&signed_in(Role::Chef), &[Role::Admin, Role::Chef]),
        GuardDecision::Render
    );
}
