//! Chef dashboard.

use leptos::prelude::*;

use crate::components::header::AppHeader;

/// Chef dashboard — kitchen planning for the facility.
#[component]
pub fn ChefDashboard() -> impl IntoView {
    view! {
        <div class="dashboard dashboard--chef">
            <AppHeader title="Chef Dashboard"/>
            <main class="dashboard__body">
                <section class="dashboard__card">
                    <h2>"Meal plan"</h2>
                    <p>"This week's menu and headcounts."</p>
                </section>
                <section class="dashboard__card">
                    <h2>"Inventory"</h2>
                    <p>"Kitchen stock and reorder levels."</p>
                </section>
            </main>
        </div>
    }
}
