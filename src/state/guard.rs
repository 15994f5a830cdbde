#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use crate::net::types::Role;
use crate::state::session::SessionState;

/// What a guarded route should do for the current session state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardDecision {
    /// Session restore has not finished; show a neutral placeholder.
    Loading,
    /// Nobody is signed in; replace-navigate to the login page.
    RedirectToLogin,
    /// Signed in, wrong role; replace-navigate to the unauthorized page.
    RedirectToUnauthorized,
    /// Render the guarded view.
    Render,
}

/// Pure access decision for one navigation.
///
/// An empty `required` set admits any authenticated user. Re-evaluated by
/// the guard component whenever session state changes; nothing is cached.
pub fn decide(state: &SessionState, required: &[Role]) -> GuardDecision {
    if state.loading {
        return GuardDecision::Loading;
    }
    match &state.user {
        None => GuardDecision::RedirectToLogin,
        Some(user) if !required.is_empty() && !required.contains(&user.role) => {
            GuardDecision::RedirectToUnauthorized
        }
        Some(_) => GuardDecision::Render,
    }
}
