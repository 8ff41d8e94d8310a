//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components read the session, API client and notice slot from Leptos
//! context providers installed by the root `App`.

pub mod answer_form;
pub mod answer_list;
pub mod confirm_dialog;
pub mod consult_button;
pub mod consult_form;
pub mod nav_bar;
pub mod notice_modal;
pub mod route_gate;
pub mod side_nav;
pub mod user_form;
