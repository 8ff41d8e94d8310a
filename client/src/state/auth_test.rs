use std::sync::Arc;

use leptos::prelude::Owner;

use super::*;
use crate::util::session_store::{EMAIL_KEY, MemoryStorage, ROLE_KEY, TOKEN_KEY};

fn user_session() -> Session {
    Session::LoggedIn { token: "t1".to_owned(), role: Role::User, email: "a@x.com".to_owned() }
}

/// Signals must be created and read under an owner when arenas are sandboxed.
fn in_owner<T>(test: impl FnOnce() -> T) -> T {
    Owner::new().with(test)
}

// =============================================================
// AuthState defaults
// =============================================================

#[test]
fn auth_state_default_is_loading_and_logged_out() {
    let state = AuthState::default();
    assert!(state.loading);
    assert_eq!(state.session, Session::LoggedOut);
}

// =============================================================
// SessionContext
// =============================================================

#[test]
fn new_context_is_loading_until_restored() {
    in_owner(|| {
        let ctx = SessionContext::new(Arc::new(MemoryStorage::default()));
        assert!(ctx.state().loading);
        ctx.restore();
        assert!(!ctx.state().loading);
        assert!(!ctx.is_logged_in());
    });
}

#[test]
fn restore_reads_stored_session() {
    in_owner(|| {
        let storage = Arc::new(MemoryStorage::default());
        storage.set_item(TOKEN_KEY, "t1");
        storage.set_item(ROLE_KEY, "USER");
        storage.set_item(EMAIL_KEY, "a@x.com");

        let ctx = SessionContext::new(storage);
        ctx.restore();
        assert_eq!(ctx.session_untracked(), user_session());
        assert_eq!(ctx.role(), Some(Role::User));
        assert_eq!(ctx.token_untracked(), Some("t1".to_owned()));
        assert_eq!(ctx.email_untracked(), Some("a@x.com".to_owned()));
    });
}

#[test]
fn sign_in_persists_and_publishes() {
    in_owner(|| {
        let storage = Arc::new(MemoryStorage::default());
        let ctx = SessionContext::new(storage.clone());
        ctx.sign_in(user_session());

        assert!(ctx.is_logged_in());
        assert!(!ctx.state().loading);
        assert_eq!(storage.get_item(TOKEN_KEY), Some("t1".to_owned()));
        assert_eq!(storage.get_item(ROLE_KEY), Some("USER".to_owned()));
    });
}

#[test]
fn clear_empties_storage_and_state_repeatedly() {
    in_owner(|| {
        let storage = Arc::new(MemoryStorage::default());
        let ctx = SessionContext::new(storage.clone());
        ctx.sign_in(user_session());

        ctx.clear();
        ctx.clear();

        assert_eq!(ctx.session_untracked(), Session::LoggedOut);
        assert_eq!(storage.get_item(TOKEN_KEY), None);
        assert_eq!(storage.get_item(ROLE_KEY), None);
        assert_eq!(storage.get_item(EMAIL_KEY), None);
    });
}
