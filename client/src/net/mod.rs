//! Networking modules for the QA backend REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` performs the calls, `interceptor` decides when a response ends the
//! session, `error` defines the result type views consume, and `types`
//! defines the wire schema.

pub mod api;
pub mod error;
pub mod interceptor;
pub mod types;
