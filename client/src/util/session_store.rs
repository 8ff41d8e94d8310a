//! Persistence of the session record in browser `localStorage`.
//!
//! SYSTEM CONTEXT
//! ==============
//! The session lives under three plaintext keys (`token`, `role`, `email`).
//! These helpers centralize hydrate-only storage glue so the rest of the app
//! only ever sees a whole [`Session`]. Outside the browser the storage reads
//! as empty and writes are dropped.

#[cfg(test)]
#[path = "session_store_test.rs"]
mod session_store_test;

use std::collections::HashMap;
use std::sync::{Mutex, PoisonError};

use crate::state::session::Session;

pub const TOKEN_KEY: &str = "token";
pub const ROLE_KEY: &str = "role";
pub const EMAIL_KEY: &str = "email";

const SESSION_KEYS: [&str; 3] = [TOKEN_KEY, ROLE_KEY, EMAIL_KEY];

/// String key/value storage backing the session.
pub trait SessionStorage: Send + Sync {
    fn get_item(&self, key: &str) -> Option<String>;
    fn set_item(&self, key: &str, value: &str);
    fn remove_item(&self, key: &str);
}

/// `window.localStorage`, or nothing when not running in a browser.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserStorage;

impl SessionStorage for BrowserStorage {
    fn get_item(&self, key: &str) -> Option<String> {
        #[cfg(feature = "hydrate")]
        {
            let storage = web_sys::window().and_then(|w| w.local_storage().ok().flatten())?;
            storage.get_item(key).ok().flatten()
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = key;
            None
        }
    }

    fn set_item(&self, key: &str, value: &str) {
        #[cfg(feature = "hydrate")]
        {
            let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) else {
                return;
            };
            let _ = storage.set_item(key, value);
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (key, value);
        }
    }

    fn remove_item(&self, key: &str) {
        #[cfg(feature = "hydrate")]
        {
            let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) else {
                return;
            };
            let _ = storage.remove_item(key);
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = key;
        }
    }
}

/// Process-local storage for non-browser hosts and tests.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    items: Mutex<HashMap<String, String>>,
}

impl SessionStorage for MemoryStorage {
    fn get_item(&self, key: &str) -> Option<String> {
        self.items
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .get(key)
            .cloned()
    }

    fn set_item(&self, key: &str, value: &str) {
        self.items
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(key.to_owned(), value.to_owned());
    }

    fn remove_item(&self, key: &str) {
        self.items
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(key);
    }
}

/// Read the persisted session.
///
/// A partial or unrecognized record is wiped so the next load starts clean.
pub fn load_session(storage: &dyn SessionStorage) -> Session {
    let token = storage.get_item(TOKEN_KEY);
    let role = storage.get_item(ROLE_KEY);
    let email = storage.get_item(EMAIL_KEY);
    let any_present = token.is_some() || role.is_some() || email.is_some();

    let session = Session::from_stored(token, role, email);
    if any_present && !session.is_logged_in() {
        leptos::logging::warn!("discarding incomplete stored session");
        clear_session(storage);
    }
    session
}

/// Persist `session`; a logged-out session clears every field.
pub fn save_session(storage: &dyn SessionStorage, session: &Session) {
    match session {
        Session::LoggedIn { token, role, email } => {
            storage.set_item(TOKEN_KEY, token);
            storage.set_item(ROLE_KEY, role.as_str());
            storage.set_item(EMAIL_KEY, email);
        }
        Session::LoggedOut => clear_session(storage),
    }
}

/// Remove all three session fields.
pub fn clear_session(storage: &dyn SessionStorage) {
    for key in SESSION_KEYS {
        storage.remove_item(key);
    }
}
