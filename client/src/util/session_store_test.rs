use super::*;
use crate::state::session::Role;

fn seeded(token: Option<&str>, role: Option<&str>, email: Option<&str>) -> MemoryStorage {
    let storage = MemoryStorage::default();
    if let Some(token) = token {
        storage.set_item(TOKEN_KEY, token);
    }
    if let Some(role) = role {
        storage.set_item(ROLE_KEY, role);
    }
    if let Some(email) = email {
        storage.set_item(EMAIL_KEY, email);
    }
    storage
}

#[test]
fn memory_storage_round_trips_items() {
    let storage = MemoryStorage::default();
    assert_eq!(storage.get_item("k"), None);
    storage.set_item("k", "v");
    assert_eq!(storage.get_item("k"), Some("v".to_owned()));
    storage.remove_item("k");
    assert_eq!(storage.get_item("k"), None);
}

#[test]
fn load_session_reads_complete_record() {
    let storage = seeded(Some("t1"), Some("CONSULTANT"), Some("c@x.com"));
    let session = load_session(&storage);
    assert_eq!(session.role(), Some(Role::Consultant));
    assert_eq!(session.token(), Some("t1"));
    assert_eq!(storage.get_item(TOKEN_KEY), Some("t1".to_owned()));
}

#[test]
fn load_session_empty_storage_is_logged_out() {
    let storage = MemoryStorage::default();
    assert_eq!(load_session(&storage), Session::LoggedOut);
}

#[test]
fn load_session_wipes_partial_record() {
    let storage = seeded(Some("t1"), None, Some("a@x.com"));
    assert_eq!(load_session(&storage), Session::LoggedOut);
    assert_eq!(storage.get_item(TOKEN_KEY), None);
    assert_eq!(storage.get_item(EMAIL_KEY), None);
}

#[test]
fn load_session_wipes_unrecognized_role() {
    let storage = seeded(Some("t1"), Some("ROOT"), None);
    assert_eq!(load_session(&storage), Session::LoggedOut);
    assert_eq!(storage.get_item(ROLE_KEY), None);
    assert_eq!(storage.get_item(TOKEN_KEY), None);
}

#[test]
fn save_session_writes_all_fields() {
    let storage = MemoryStorage::default();
    let session = Session::LoggedIn { token: "t9".to_owned(), role: Role::Admin, email: "root@x.com".to_owned() };
    save_session(&storage, &session);
    assert_eq!(storage.get_item(TOKEN_KEY), Some("t9".to_owned()));
    assert_eq!(storage.get_item(ROLE_KEY), Some("ADMIN".to_owned()));
    assert_eq!(storage.get_item(EMAIL_KEY), Some("root@x.com".to_owned()));
    assert_eq!(load_session(&storage), session);
}

#[test]
fn save_logged_out_clears_fields() {
    let storage = seeded(Some("t1"), Some("USER"), Some("a@x.com"));
    save_session(&storage, &Session::LoggedOut);
    assert_eq!(storage.get_item(TOKEN_KEY), None);
    assert_eq!(storage.get_item(ROLE_KEY), None);
    assert_eq!(storage.get_item(EMAIL_KEY), None);
}

#[test]
fn clear_session_is_idempotent() {
    let storage = seeded(Some("t1"), Some("USER"), Some("a@x.com"));
    clear_session(&storage);
    clear_session(&storage);
    assert_eq!(load_session(&storage), Session::LoggedOut);
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn browser_storage_is_empty_outside_the_browser() {
    let storage = BrowserStorage;
    storage.set_item(TOKEN_KEY, "t1");
    assert_eq!(storage.get_item(TOKEN_KEY), None);
    assert_eq!(load_session(&storage), Session::LoggedOut);
}
