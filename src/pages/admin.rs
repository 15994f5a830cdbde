//! Admin dashboard.

use leptos::prelude::*;

use crate::components::header::AppHeader;

/// Admin dashboard — facility-wide administration overview.
#[component]
pub fn AdminDashboard() -> impl IntoView {
    view! {
        <div class="dashboard dashboard--admin">
            <AppHeader title="Admin Dashboard"/>
            <main class="dashboard__body">
                <section class="dashboard__card">
                    <h2>"Residents"</h2>
                    <p>"Manage hostel residents and room assignments."</p>
                </section>
                <section class="dashboard__card">
                    <h2>"Staff"</h2>
                    <p>"Manage manager and kitchen staff accounts."</p>
                </section>
            </main>
        </div>
    }
}
