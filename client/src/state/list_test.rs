use super::*;
use crate::net::error::{ApiError, NETWORK_ERROR_MESSAGE};

#[test]
fn begin_sets_loading_and_clears_error() {
    let mut state = ListState::<i32> { error: Some("old".to_owned()), ..ListState::default() };
    state.begin();
    assert!(state.loading);
    assert_eq!(state.error, None);
}

#[test]
fn settle_ok_replaces_items() {
    let mut state = ListState { items: vec![1], ..ListState::default() };
    state.begin();
    state.settle(Ok(vec![2, 3]), "Failed.");
    assert!(!state.loading);
    assert_eq!(state.items, vec![2, 3]);
}

#[test]
fn settle_err_keeps_items_and_sets_message() {
    let mut state = ListState { items: vec![1], ..ListState::default() };
    state.begin();
    state.settle(Err(ApiError::Backend { status: 500, message: None }), "Could not load users.");
    assert_eq!(state.items, vec![1]);
    assert_eq!(state.error.as_deref(), Some("Could not load users."));

    state.settle(Err(ApiError::Network("down".to_owned())), "Could not load users.");
    assert_eq!(state.error.as_deref(), Some(NETWORK_ERROR_MESSAGE));
}
