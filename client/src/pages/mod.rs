//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped fetching and actions and delegates forms and
//! dialogs to `components`. Pages render only after the route gate has
//! accepted the current session for their path.

pub mod admin;
pub mod auth;
pub mod consult;
pub mod search;
