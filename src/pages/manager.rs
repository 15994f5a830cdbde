//! Manager dashboard.

use leptos::prelude::*;

use crate::components::header::AppHeader;

/// Manager dashboard — day-to-day facility operations.
#[component]
pub fn ManagerDashboard() -> impl IntoView {
    view! {
        <div class="dashboard dashboard--manager">
            <AppHeader title="Manager Dashboard"/>
            <main class="dashboard__body">
                <section class="dashboard__card">
                    <h2>"Occupancy"</h2>
                    <p>"Track room occupancy and upcoming check-ins."</p>
                </section>
                <section class="dashboard__card">
                    <h2>"Maintenance"</h2>
                    <p>"Open maintenance requests and their status."</p>
                </section>
            </main>
        </div>
    }
}
