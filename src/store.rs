//! Durable session persistence scoped to the browser origin.
//!
//! DESIGN
//! ======
//! Every read and write of the four session fields (access token, refresh
//! token, email, role) funnels through the [`SessionStore`] trait so the
//! "all four move together" invariant lives in one place. No other module
//! touches `localStorage` directly.
//!
//! `BrowserStore` is the real backend (localStorage, browser only);
//! `MemoryStore` backs server rendering and tests.

#[cfg(test)]
#[path = "store_test.rs"]
mod store_test;

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

/// The four persisted session fields.
///
/// Keys match what the backend hands out, so a session written by an older
/// build of the app restores cleanly.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionField {
    AccessToken,
    RefreshToken,
    Email,
    Role,
}

impl SessionField {
    /// All fields, in write order.
    pub const ALL: [SessionField; 4] = [
        SessionField::AccessToken,
        SessionField::RefreshToken,
        SessionField::Email,
        SessionField::Role,
    ];

    /// Storage key for this field.
    pub fn key(self) -> &'static str {
        match self {
            SessionField::AccessToken => "accessToken",
            SessionField::RefreshToken => "refreshToken",
            SessionField::Email => "email",
            SessionField::Role => "role",
        }
    }
}

/// Key-value persistence for the session fields.
pub trait SessionStore {
    /// Read a field, `None` if absent.
    fn get(&self, field: SessionField) -> Option<String>;

    /// Write a field, replacing any previous value.
    fn set(&self, field: SessionField, value: &str);

    /// Remove all four session fields. Only session keys are touched, so
    /// unrelated origin data (theme preferences etc.) survives a logout.
    fn clear(&self);
}

impl<S: SessionStore> SessionStore for Rc<S> {
    fn get(&self, field: SessionField) -> Option<String> {
        (**self).get(field)
    }

    fn set(&self, field: SessionField, value: &str) {
        (**self).set(field, value);
    }

    fn clear(&self) {
        (**self).clear();
    }
}

/// `localStorage`-backed store. Requires a browser environment; outside the
/// `hydrate` build every read reports absent and writes are dropped.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserStore;

impl BrowserStore {
    pub fn new() -> Self {
        Self
    }
}

impl SessionStore for BrowserStore {
    fn get(&self, field: SessionField) -> Option<String> {
        #[cfg(feature = "hydrate")]
        {
            let storage = web_sys::window()?.local_storage().ok().flatten()?;
            storage.get_item(field.key()).ok().flatten()
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = field;
            None
        }
    }

    fn set(&self, field: SessionField, value: &str) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(window) = web_sys::window() {
                if let Ok(Some(storage)) = window.local_storage() {
                    let _ = storage.set_item(field.key(), value);
                }
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (field, value);
        }
    }

    fn clear(&self) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(window) = web_sys::window() {
                if let Ok(Some(storage)) = window.local_storage() {
                    for field in SessionField::ALL {
                        let _ = storage.remove_item(field.key());
                    }
                }
            }
        }
    }
}

/// In-memory store for server rendering and tests.
#[derive(Debug, Default)]
pub struct MemoryStore {
    fields: RefCell<HashMap<&'static str, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStore for MemoryStore {
    fn get(&self, field: SessionField) -> Option<String> {
        self.fields.borrow().get(field.key()).cloned()
    }

    fn set(&self, field: SessionField, value: &str) {
        self.fields.borrow_mut().insert(field.key(), value.to_owned());
    }

    fn clear(&self) {
        let mut fields = self.fields.borrow_mut();
        for field in SessionField::ALL {
            fields.remove(field.key());
        }
    }
}
