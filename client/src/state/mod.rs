//! Client-side reactive state.
//!
//! SYSTEM CONTEXT
//! ==============
//! `session` defines the auth record, `auth` wraps it in the injected
//! context, `notice` holds the single transient notification and `list` the
//! fetch state shared by list views.

pub mod auth;
pub mod list;
pub mod notice;
pub mod session;
