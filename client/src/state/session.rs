//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Shared as `RwSignal<Session>` through context. Route guards read it to
//! decide on login redirects; the REST client reads the bearer token from it.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use crate::net::types::User;
use crate::util::jwt::{self, TokenError};

/// `localStorage` key holding the bearer token between page loads.
pub const TOKEN_STORAGE_KEY: &str = "token";

/// The signed-in user and their bearer token, or nothing.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Session {
    token: Option<String>,
    user: Option<User>,
    expires_at: Option<i64>,
}

impl Session {
    /// Build a session from a freshly issued or stored token.
    ///
    /// # Errors
    ///
    /// Returns the [`TokenError`] when the token's claims cannot be read.
    pub fn establish(token: String) -> Result<Self, TokenError> {
        let claims = jwt::decode_claims(&token)?;
        Ok(Self { user: Some(claims.user()), expires_at: Some(claims.exp), token: Some(token) })
    }

    /// Rebuild the session from a stored token; unreadable tokens sign out.
    #[must_use]
    pub fn restore(stored: Option<String>) -> Self {
        let Some(token) = stored else {
            return Self::default();
        };
        match Self::establish(token) {
            Ok(session) => session,
            Err(e) => {
                log::warn!("discarding stored token: {e}");
                Self::default()
            }
        }
    }

    /// True when `stored` held a token that [`Session::restore`] refused, so
    /// the stored copy should be deleted.
    #[must_use]
    pub fn discards(&self, stored: Option<&str>) -> bool {
        stored.is_some() && self.token.is_none()
    }

    #[must_use]
    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    #[must_use]
    pub fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    /// Signed in with a token that has not yet expired at `now_secs`.
    #[must_use]
    pub fn is_authenticated(&self, now_secs: i64) -> bool {
        self.token.is_some() && self.expires_at.is_some_and(|exp| exp > now_secs)
    }

    /// Forget the token and user.
    pub fn teardown(&mut self) {
        *self = Self::default();
    }
}
