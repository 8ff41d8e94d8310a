//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! One [`SessionContext`] is created by the root component and provided via
//! Leptos context. The route guard, the API client and every view read the
//! session through it instead of touching storage directly.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use std::sync::Arc;

use leptos::prelude::*;

use crate::state::session::{Role, Session};
use crate::util::session_store::{self, BrowserStorage, SessionStorage};

/// Reactive session snapshot.
///
/// `loading` stays `true` until the stored session has been restored in the
/// browser; server rendering always sees the loading state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AuthState {
    pub session: Session,
    pub loading: bool,
}

impl Default for AuthState {
    fn default() -> Self {
        Self { session: Session::LoggedOut, loading: true }
    }
}

/// Injected handle pairing the reactive session with its storage.
#[derive(Clone, Copy)]
pub struct SessionContext {
    state: RwSignal<AuthState>,
    storage: StoredValue<Arc<dyn SessionStorage>>,
}

impl SessionContext {
    pub fn new(storage: Arc<dyn SessionStorage>) -> Self {
        Self { state: RwSignal::new(AuthState::default()), storage: StoredValue::new(storage) }
    }

    /// Context backed by `window.localStorage`.
    pub fn browser() -> Self {
        Self::new(Arc::new(BrowserStorage))
    }

    /// Load the persisted session and leave the loading state.
    pub fn restore(&self) {
        let session = self
            .storage
            .try_with_value(|storage| session_store::load_session(storage.as_ref()))
            .unwrap_or_default();
        self.state.set(AuthState { session, loading: false });
    }

    /// Tracked read of the full auth state.
    pub fn state(&self) -> AuthState {
        self.state.get()
    }

    /// Tracked read of the current role.
    pub fn role(&self) -> Option<Role> {
        self.state.with(|s| s.session.role())
    }

    /// Tracked read of whether a session exists.
    pub fn is_logged_in(&self) -> bool {
        self.state.with(|s| s.session.is_logged_in())
    }

    pub fn session_untracked(&self) -> Session {
        self.state.with_untracked(|s| s.session.clone())
    }

    pub fn token_untracked(&self) -> Option<String> {
        self.state.with_untracked(|s| s.session.token().map(str::to_owned))
    }

    pub fn email_untracked(&self) -> Option<String> {
        self.state.with_untracked(|s| s.session.email().map(str::to_owned))
    }

    /// Persist and publish a freshly issued session.
    pub fn sign_in(&self, session: Session) {
        self.storage.try_with_value(|storage| session_store::save_session(storage.as_ref(), &session));
        self.state.set(AuthState { session, loading: false });
    }

    /// Drop the session from storage and memory. Safe to call repeatedly.
    pub fn clear(&self) {
        self.storage.try_with_value(|storage| session_store::clear_session(storage.as_ref()));
        self.state.set(AuthState { session: Session::LoggedOut, loading: false });
    }
}
