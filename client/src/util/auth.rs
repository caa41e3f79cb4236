//! Shared auth UI helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Route guards apply identical unauthenticated redirect behavior; login and
//! logout keep the session signal and `localStorage` in step.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::config::ApiConfig;
use crate::net::api::ApiClient;
use crate::state::session::Session;
use crate::util::jwt::{TokenError, now_secs};
use crate::util::storage;

/// True when a protected page should bounce to `/login`.
#[must_use]
pub fn should_redirect_unauth(session: &Session, now_secs: i64) -> bool {
    !session.is_authenticated(now_secs)
}

/// Redirect to `/login` whenever the session is not authenticated.
pub fn install_unauth_redirect<F>(session: RwSignal<Session>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        if should_redirect_unauth(&session.get(), now_secs()) {
            navigate("/login", NavigateOptions::default());
        }
    });
}

/// Restore the session from a stored token, deleting the stored copy when it
/// cannot be read so the same token is not retried on every load.
#[must_use]
pub fn restore_session(stored: Option<String>) -> Session {
    let session = Session::restore(stored.clone());
    if session.discards(stored.as_deref()) {
        storage::clear_token();
    }
    session
}

/// Establish a session from a freshly issued token and persist it.
///
/// # Errors
///
/// Returns the [`TokenError`] when the token cannot be decoded; nothing is
/// stored in that case.
pub fn sign_in(session: RwSignal<Session>, token: String) -> Result<(), TokenError> {
    let established = Session::establish(token)?;
    if let Some(token) = established.token() {
        storage::save_token(token);
    }
    if let Some(user) = established.user() {
        log::info!("signed in as {}", user.display_name());
    }
    session.set(established);
    Ok(())
}

/// Forget the token everywhere.
pub fn sign_out(session: RwSignal<Session>) {
    storage::clear_token();
    session.update(Session::teardown);
    log::info!("signed out");
}

/// Copyable access to the config and session contexts, for event handlers
/// and async tasks that run outside the reactive owner.
#[derive(Clone, Copy)]
pub struct ApiHandle {
    config: StoredValue<ApiConfig>,
    session: RwSignal<Session>,
}

impl ApiHandle {
    /// Read both contexts. Call from a component body.
    #[must_use]
    pub fn from_context() -> Self {
        Self { config: StoredValue::new(expect_context::<ApiConfig>()), session: expect_context::<RwSignal<Session>>() }
    }

    #[must_use]
    pub fn config(&self) -> ApiConfig {
        self.config.get_value()
    }

    #[must_use]
    pub fn session(&self) -> RwSignal<Session> {
        self.session
    }

    /// Client carrying the current bearer token.
    #[must_use]
    pub fn client(&self) -> ApiClient {
        ApiClient::for_session(&self.config.get_value(), &self.session.get_untracked())
    }
}
