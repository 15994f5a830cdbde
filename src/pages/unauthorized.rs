//! Page shown when a signed-in user lacks the role for a route.

use leptos::prelude::*;
use leptos_router::components::A;

/// Unauthorized page — reached by replace-redirect from the route guard.
#[component]
pub fn UnauthorizedPage() -> impl IntoView {
    view! {
        <div class="unauthorized-page">
            <h1>"Access denied"</h1>
            <p>"Your account does not have permission to view this page."</p>
            <A href="/login">"Back to login"</A>
        </div>
    }
}
