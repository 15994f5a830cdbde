//! Root application component with routing and the session context.

use std::sync::Arc;

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Redirect, Route, Router, Routes},
};

use crate::components::guard::{RequireRole, replace_history};
use crate::net::http::{ApiConfig, GlooTransport};
use crate::net::types::Role;
use crate::pages::{
    admin::AdminDashboard, chef::ChefDashboard, login::LoginPage, manager::ManagerDashboard,
    unauthorized::UnauthorizedPage, user::UserDashboard,
};
use crate::state::session::SessionManager;
use crate::store::BrowserStore;

/// The session manager as wired for the running app: real transport, real
/// browser storage.
pub type AppSession = SessionManager<GlooTransport, BrowserStore>;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Creates the one [`AppSession`] for the page, provides it via context,
/// kicks off session restore, and declares the route table. Each dashboard
/// route is gated on exactly its own role.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let manager = Arc::new(AppSession::new(
        ApiConfig::default(),
        GlooTransport::new(),
        BrowserStore::new(),
    ));
    provide_context(manager.clone());

    // Restore the persisted session once the app is live in the browser.
    // Guarded routes render the loading placeholder until this has run.
    {
        let manager = manager.clone();
        Effect::new(move || {
            manager.restore();
        });
    }

    view! {
        <Stylesheet id="leptos" href="/pkg/hostelgrid-ui.css"/>
        <Title text="HostelGrid"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route
                    path=StaticSegment("")
                    view=|| view! { <Redirect path="/login" options=replace_history()/> }
                />
                <Route path=StaticSegment("login") view=LoginPage/>
                <Route path=StaticSegment("unauthorized") view=UnauthorizedPage/>
                <Route
                    path=StaticSegment("admin")
                    view=|| {
                        view! {
                            <RequireRole roles=vec![Role::Admin]>
                                <AdminDashboard/>
                            </RequireRole>
                        }
                    }
                />
                <Route
                    path=StaticSegment("manager")
                    view=|| {
                        view! {
                            <RequireRole roles=vec![Role::Manager]>
                                <ManagerDashboard/>
                            </RequireRole>
                        }
                    }
                />
                <Route
                    path=StaticSegment("chef")
                    view=|| {
                        view! {
                            <RequireRole roles=vec![Role::Chef]>
                                <ChefDashboard/>
                            </RequireRole>
                        }
                    }
                />
                <Route
                    path=StaticSegment("user")
                    view=|| {
                        view! {
                            <RequireRole roles=vec![Role::User]>
                                <UserDashboard/>
                            </RequireRole>
                        }
                    }
                />
            </Routes>
        </Router>
    }
}
