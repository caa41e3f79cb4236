//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns (storage, fetch
//! cancellation, DOM observation) from page and component logic.

pub mod abort;
pub mod auth;
#[cfg(feature = "csr")]
pub mod dom_skin;
pub mod jwt;
pub mod storage;
pub mod view_skin;
