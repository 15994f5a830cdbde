//! Login page with email/password form.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::app::AppSession;
use std::sync::Arc;

/// Login page — submits credentials and, on success, navigates to the
/// dashboard owned by the account's role. Failures stay on the page with an
/// inline error; the session is untouched.
#[component]
pub fn LoginPage() -> impl IntoView {
    let manager = expect_context::<Arc<AppSession>>();
    let navigate = use_navigate();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);
    let submitting = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if submitting.get_untracked() {
            return;
        }
        submitting.set(true);
        error.set(None);

        let manager = manager.clone();
        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            match manager
                .login(&email.get_untracked(), &password.get_untracked())
                .await
            {
                Ok(identity) => {
                    navigate(identity.role.dashboard_path(), NavigateOptions::default());
                }
                Err(e) => {
                    leptos::logging::warn!("login failed: {e}");
                    error.set(Some("Login failed. Check your email and password.".to_owned()));
                }
            }
            submitting.set(false);
        });
    };

    let forgot = use_navigate();

    view! {
        <div class="login-page">
            <h1 class="login-page__title">"Welcome to HostelGrid"</h1>

            <div class="login-page__card">
                <h2>"Login"</h2>

                <form class="login-page__form" on:submit=on_submit>
                    <label>
                        "Email"
                        <input
                            type="email"
                            required
                            prop:value=email
                            on:input=move |ev| email.set(event_target_value(&ev))
                        />
                    </label>

                    <label>
                        "Password"
                        <input
                            type="password"
                            required
                            prop:value=password
                            on:input=move |ev| password.set(event_target_value(&ev))
                        />
                    </label>

                    {move || {
                        error.get().map(|msg| view! { <p class="login-page__error">{msg}</p> })
                    }}

                    <button class="btn btn--primary" type="submit" disabled=move || submitting.get()>
                        {move || if submitting.get() { "Signing in..." } else { "Login" }}
                    </button>
                </form>

                <button
                    class="login-page__forgot"
                    on:click=move |_| forgot("/forgot-password", NavigateOptions::default())
                >
                    "Forgot password?"
                </button>
            </div>
        </div>
    }
}
