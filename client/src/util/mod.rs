//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser concerns (storage, full-page navigation)
//! and routing rules from page and component logic.

pub mod auth;
pub mod nav;
pub mod session_store;
