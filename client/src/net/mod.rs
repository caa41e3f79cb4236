//! Networking modules for the styling service and auth endpoints.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` issues REST calls, `error` classifies their failures, and `types`
//! defines the wire schema (mostly re-exported from `skin`).

pub mod api;
pub mod error;
pub mod types;
