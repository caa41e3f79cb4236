//! Browser `localStorage` helpers for the bearer token.
//!
//! SYSTEM CONTEXT
//! ==============
//! The token is read once at startup, written at login and cleared at
//! logout. Native builds have no storage; reads return `None` and writes
//! are no-ops.

use crate::state::session::TOKEN_STORAGE_KEY;

#[cfg(feature = "csr")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

/// Load the stored bearer token, if any.
pub fn load_token() -> Option<String> {
    #[cfg(feature = "csr")]
    {
        local_storage()?
            .get_item(TOKEN_STORAGE_KEY)
            .ok()
            .flatten()
            .filter(|t| !t.trim().is_empty())
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = TOKEN_STORAGE_KEY;
        None
    }
}

pub fn save_token(token: &str) {
    #[cfg(feature = "csr")]
    {
        let Some(storage) = local_storage() else {
            log::warn!("localStorage unavailable; session will not survive reload");
            return;
        };
        if let Err(e) = storage.set_item(TOKEN_STORAGE_KEY, token) {
            log::warn!("failed to persist token: {e:?}");
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = token;
    }
}

pub fn clear_token() {
    #[cfg(feature = "csr")]
    {
        if let Some(storage) = local_storage() {
            let _ = storage.remove_item(TOKEN_STORAGE_KEY);
        }
    }
}
