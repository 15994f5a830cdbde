//! Shared dashboard header with the signed-in email and a logout action.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::app::AppSession;
use crate::components::guard::replace_history;
use std::sync::Arc;

/// Header bar for the dashboard pages.
///
/// Logout clears the session and replace-navigates to `/login`.
#[component]
pub fn AppHeader(title: &'static str) -> impl IntoView {
    let manager = expect_context::<Arc<AppSession>>();
    let session = manager.session();
    let navigate = use_navigate();

    let on_logout = move |_| {
        manager.logout();
        navigate("/login", replace_history());
    };

    view! {
        <header class="app-header">
            <h1 class="app-header__title">{title}</h1>
            <div class="app-header__session">
                {move || {
                    session
                        .get()
                        .user
                        .map(|u| view! { <span class="app-header__email">{u.email}</span> })
                }}
                <button class="btn" on:click=on_logout>
                    "Log out"
                </button>
            </div>
        </header>
    }
}
