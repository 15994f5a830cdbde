//! Session lifecycle: restore, login, logout, token refresh, and the
//! retry-once request path.
//!
//! DESIGN
//! ======
//! One [`SessionManager`] is created in `App` and shared via context; the
//! reactive [`SessionState`] it owns is the single source of truth for
//! "who is signed in". The manager is the only writer of both the state
//! signal and the session store, which is what keeps them from diverging.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::sync::atomic::{AtomicBool, Ordering};

use leptos::prelude::{ArcRwSignal, GetUntracked, Update};
use serde_json::json;

use crate::net::http::{ApiConfig, ApiError, ApiRequest, ApiResponse, Envelope, Transport};
use crate::net::types::{AuthResponse, Identity, RefreshResponse, Role};
use crate::store::{SessionField, SessionStore};

/// Reactive session state the rest of the UI consumes.
///
/// `loading` is true only while the persisted session is being restored on
/// startup; it never becomes true again for the lifetime of the app.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SessionState {
    pub user: Option<Identity>,
    pub loading: bool,
}

impl Default for SessionState {
    fn default() -> Self {
        Self { user: None, loading: true }
    }
}

/// Orchestrates the session against the backend auth endpoints.
pub struct SessionManager<T, S> {
    config: ApiConfig,
    transport: T,
    store: S,
    session: ArcRwSignal<SessionState>,
    restored: AtomicBool,
}

impl<T: Transport, S: SessionStore> SessionManager<T, S> {
    pub fn new(config: ApiConfig, transport: T, store: S) -> Self {
        Self {
            config,
            transport,
            store,
            session: ArcRwSignal::new(SessionState::default()),
            restored: AtomicBool::new(false),
        }
    }

    /// Handle to the reactive session state.
    pub fn session(&self) -> ArcRwSignal<SessionState> {
        self.session.clone()
    }

    /// Restore the persisted session, once per application load.
    ///
    /// The identity is accepted only when all four fields are present and
    /// the role parses; anything less restores as logged-out. Later calls
    /// return the current user without re-reading the store.
    pub fn restore(&self) -> Option<Identity> {
        if self.restored.swap(true, Ordering::Relaxed) {
            return self.session.get_untracked().user;
        }

        let access = self.store.get(SessionField::AccessToken);
        let refresh = self.store.get(SessionField::RefreshToken);
        let email = self.store.get(SessionField::Email);
        let role = self
            .store
            .get(SessionField::Role)
            .and_then(|r| Role::parse(&r));

        let user = match (access, refresh, email, role) {
            (Some(_), Some(_), Some(email), Some(role)) => Some(Identity { email, role }),
            _ => None,
        };

        self.session.update(|s| {
            s.user = user.clone();
            s.loading = false;
        });
        user
    }

    /// Log in with email and password.
    ///
    /// On success the full session (both tokens, email, role) is persisted
    /// and the state flips to authenticated. On failure nothing is written
    /// and the error propagates; the login page decides how to present it.
    pub async fn login(&self, email: &str, password: &str) -> Result<Identity, ApiError> {
        let request = ApiRequest::post(self.config.url("/auth/login"))
            .json(json!({ "email": email, "password": password }));
        let auth: AuthResponse = self.send(request).await?.decode()?;

        self.store.set(SessionField::AccessToken, &auth.access_token);
        self.store.set(SessionField::RefreshToken, &auth.refresh_token);
        self.store.set(SessionField::Email, &auth.email);
        self.store.set(SessionField::Role, auth.role.as_str());

        let identity = Identity { email: auth.email, role: auth.role };
        self.session.update(|s| s.user = Some(identity.clone()));
        Ok(identity)
    }

    /// Drop the session. Always succeeds; no network call.
    pub fn logout(&self) {
        self.store.clear();
        self.session.update(|s| s.user = None);
    }

    /// Mint a new access token from the stored refresh token.
    ///
    /// Any failure (missing token, rejected refresh, network, decode)
    /// resolves to a full logout so a partial session never survives.
    /// The refresh call goes straight to the transport, bypassing the
    /// retrying [`send`](Self::send) path: a 401 from the refresh endpoint
    /// itself must not recurse.
    pub async fn refresh_access_token(&self) -> Result<String, ApiError> {
        let Some(refresh_token) = self.store.get(SessionField::RefreshToken) else {
            self.logout();
            return Err(ApiError::MissingRefreshToken);
        };

        let request = ApiRequest::post(self.config.url("/auth/refresh"))
            .json(json!({ "refreshToken": refresh_token }));
        let outcome = match self.transport.execute(&request).await.and_then(ApiResponse::into_result) {
            Ok(response) => response.decode::<RefreshResponse>().map(|r| r.access_token),
            Err(e) => Err(e),
        };

        match outcome {
            Ok(token) => {
                self.store.set(SessionField::AccessToken, &token);
                Ok(token)
            }
            Err(e) => {
                leptos::logging::warn!("token refresh failed: {e}");
                self.logout();
                Err(e)
            }
        }
    }

    /// Send a request with the current access token attached, refreshing
    /// and retrying exactly once on an expired-token response.
    ///
    /// If the refresh fails, the *original* authorization failure is what
    /// the caller sees; the refresh path has already resolved itself to a
    /// logout by then.
    pub async fn send(&self, request: ApiRequest) -> Result<ApiResponse, ApiError> {
        let mut envelope = Envelope::new(request);
        if let Some(token) = self.store.get(SessionField::AccessToken) {
            envelope.request.bearer = Some(token);
        }

        let first = self.transport.execute(&envelope.request).await?;
        if !first.is_unauthorized() || envelope.retried {
            return first.into_result();
        }

        envelope.retried = true;
        match self.refresh_access_token().await {
            Ok(token) => {
                envelope.request.bearer = Some(token);
                self.transport.execute(&envelope.request).await?.into_result()
            }
            Err(_) => first.into_result(),
        }
    }
}
