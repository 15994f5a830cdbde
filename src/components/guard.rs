//! Route guard component wrapping role-gated pages.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::components::Redirect;

use crate::app::AppSession;
use crate::net::types::Role;
use crate::state::guard::{GuardDecision, decide};
use std::sync::Arc;

/// Replace the current history entry so redirects don't create a
/// back-navigation loop.
pub(crate) fn replace_history() -> NavigateOptions {
    NavigateOptions { replace: true, ..Default::default() }
}

/// Render `children` only when the signed-in user holds one of `roles`.
///
/// While the persisted session is still being restored this renders a
/// neutral placeholder; unauthenticated visitors are sent to `/login` and
/// wrong-role users to `/unauthorized`. The decision re-runs on every
/// session-state change.
#[component]
pub fn RequireRole(roles: Vec<Role>, children: ChildrenFn) -> impl IntoView {
    let manager = expect_context::<Arc<AppSession>>();
    let session = manager.session();

    view! {
        {move || match decide(&session.get(), &roles) {
            GuardDecision::Loading => {
                view! { <div class="guard-loading">"Loading..."</div> }.into_any()
            }
            GuardDecision::RedirectToLogin => {
                view! { <Redirect path="/login" options=replace_history()/> }.into_any()
            }
            GuardDecision::RedirectToUnauthorized => {
                view! { <Redirect path="/unauthorized" options=replace_history()/> }.into_any()
            }
            GuardDecision::Render => children().into_any(),
        }}
    }
}
