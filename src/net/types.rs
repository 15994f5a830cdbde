#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Roles the backend can assign to an account. Serialized in UPPERCASE on
/// the wire and in the session store.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Role {
    Admin,
    Manager,
    Chef,
    User,
}

impl Role {
    /// Storage/wire form of the role.
    pub fn as_str(self) -> &'static str {
        match self {
            Role::Admin => "ADMIN",
            Role::Manager => "MANAGER",
            Role::Chef => "CHEF",
            Role::User => "USER",
        }
    }

    /// Parse the storage/wire form. Unknown strings are rejected so a
    /// corrupted store restores as logged-out rather than half-authorized.
    pub fn parse(value: &str) -> Option<Role> {
        match value {
            "ADMIN" => Some(Role::Admin),
            "MANAGER" => Some(Role::Manager),
            "CHEF" => Some(Role::Chef),
            "USER" => Some(Role::User),
            _ => None,
        }
    }

    /// The dashboard route owned by this role.
    pub fn dashboard_path(self) -> &'static str {
        match self {
            Role::Admin => "/admin",
            Role::Manager => "/manager",
            Role::Chef => "/chef",
            Role::User => "/user",
        }
    }
}

/// The authenticated user's identity.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Identity {
    pub email: String,
    pub role: Role,
}

/// Successful `POST /auth/login` body.
#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthResponse {
    pub access_token: String,
    pub refresh_token: String,
    pub email: String,
    pub role: Role,
}

/// Successful `POST /auth/refresh` body. The backend may echo the full
/// session alongside, but only the new access token is consumed.
#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RefreshResponse {
    pub access_token: String,
}
