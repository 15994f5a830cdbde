//! Resident (user) dashboard.

use leptos::prelude::*;

use crate::components::header::AppHeader;

/// User dashboard — a resident's personal view.
#[component]
pub fn UserDashboard() -> impl IntoView {
    view! {
        <div class="dashboard dashboard--user">
            <AppHeader title="User Dashboard"/>
            <main class="dashboard__body">
                <section class="dashboard__card">
                    <h2>"My room"</h2>
                    <p>"Your room assignment and facility notices."</p>
                </section>
                <section class="dashboard__card">
                    <h2>"Meals"</h2>
                    <p>"Today's menu and meal timings."</p>
                </section>
            </main>
        </div>
    }
}
